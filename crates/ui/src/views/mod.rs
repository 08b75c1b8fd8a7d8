mod assistant;
mod dashboard;
mod generate;
mod state;
mod week;
mod weeks;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantView;
pub use dashboard::DashboardView;
pub use generate::GenerateView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use week::WeekView;
pub use weeks::WeeksView;
