mod roadmap_vm;
mod time_fmt;
mod week_vm;

pub use roadmap_vm::{RoadmapCardVm, map_roadmap_cards};
pub use week_vm::{DayVm, TaskVm, WeekCardVm, WeekVm, map_week, map_week_cards};
