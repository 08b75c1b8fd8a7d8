use serde::Serialize;
use thiserror::Error;

use super::ids::UserId;
use super::roadmap::Level;

/// Bounds accepted by the generate form (and by the backend).
pub const MIN_DURATION_WEEKS: u32 = 1;
pub const MAX_DURATION_WEEKS: u32 = 52;
pub const MIN_DAILY_HOURS: f32 = 0.5;
pub const MAX_DAILY_HOURS: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("goal must not be empty")]
    EmptyGoal,
    #[error("duration must be between {MIN_DURATION_WEEKS} and {MAX_DURATION_WEEKS} weeks")]
    DurationOutOfRange,
    #[error("daily hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}")]
    HoursOutOfRange,
}

/// Payload for `POST /generate_roadmap`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub user_id: UserId,
    pub goal: String,
    pub duration_weeks: u32,
    pub daily_hours: f32,
    pub level: Level,
}

impl GenerateRequest {
    /// Validate and normalize a request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` when the goal is blank or a numeric field is
    /// outside the accepted bounds.
    pub fn new(
        user_id: UserId,
        goal: impl Into<String>,
        duration_weeks: u32,
        daily_hours: f32,
        level: Level,
    ) -> Result<Self, GenerateError> {
        let goal = goal.into().trim().to_string();
        if goal.is_empty() {
            return Err(GenerateError::EmptyGoal);
        }
        if !(MIN_DURATION_WEEKS..=MAX_DURATION_WEEKS).contains(&duration_weeks) {
            return Err(GenerateError::DurationOutOfRange);
        }
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&daily_hours) {
            return Err(GenerateError::HoursOutOfRange);
        }
        Ok(Self {
            user_id,
            goal,
            duration_weeks,
            daily_hours,
            level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1")
    }

    #[test]
    fn accepts_sane_request() {
        let request =
            GenerateRequest::new(user(), "  Learn Rust  ", 8, 2.0, Level::Intermediate).unwrap();
        assert_eq!(request.goal, "Learn Rust");
        assert_eq!(request.duration_weeks, 8);
    }

    #[test]
    fn rejects_blank_goal() {
        let err = GenerateRequest::new(user(), "   ", 8, 2.0, Level::Beginner).unwrap_err();
        assert_eq!(err, GenerateError::EmptyGoal);
    }

    #[test]
    fn rejects_duration_out_of_range() {
        let err = GenerateRequest::new(user(), "Learn Go", 0, 2.0, Level::Beginner).unwrap_err();
        assert_eq!(err, GenerateError::DurationOutOfRange);
        let err = GenerateRequest::new(user(), "Learn Go", 53, 2.0, Level::Beginner).unwrap_err();
        assert_eq!(err, GenerateError::DurationOutOfRange);
    }

    #[test]
    fn rejects_hours_out_of_range() {
        let err = GenerateRequest::new(user(), "Learn Go", 8, 0.0, Level::Beginner).unwrap_err();
        assert_eq!(err, GenerateError::HoursOutOfRange);
        let err = GenerateRequest::new(user(), "Learn Go", 8, 9.0, Level::Beginner).unwrap_err();
        assert_eq!(err, GenerateError::HoursOutOfRange);
    }

    #[test]
    fn serializes_wire_shape() {
        let request = GenerateRequest::new(user(), "Learn Rust", 8, 2.0, Level::Beginner).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["duration_weeks"], 8);
        assert_eq!(json["level"], "beginner");
    }
}
