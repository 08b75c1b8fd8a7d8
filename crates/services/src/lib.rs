#![forbid(unsafe_code)]

pub mod assistant;
pub mod auth;
pub mod error;
pub mod optimistic;
pub mod roadmaps;
pub mod week;

pub use assistant::AssistantService;
pub use auth::{AuthSession, FixedSession};
pub use error::{AssistantError, RoadmapServiceError};
pub use optimistic::OptimisticUpdate;
pub use roadmaps::RoadmapService;
pub use week::{PendingToggle, WeekBoard, WeekBoardState, WeekService};
