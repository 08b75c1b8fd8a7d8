mod board;
mod service;

pub use board::{PendingToggle, WeekBoard, WeekBoardState};
pub use service::WeekService;
