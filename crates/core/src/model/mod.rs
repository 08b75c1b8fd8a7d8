mod assistant;
mod generate;
mod ids;
mod roadmap;
mod task;
mod week;

pub use assistant::AssistantQuery;
pub use generate::{
    GenerateError, GenerateRequest, MAX_DAILY_HOURS, MAX_DURATION_WEEKS, MIN_DAILY_HOURS,
    MIN_DURATION_WEEKS,
};
pub use ids::{ParseIdError, RoadmapId, TaskId, UserId};
pub use roadmap::{Level, Roadmap};
pub use task::Task;
pub use week::{WeekData, WeekSummary};
