use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RoadmapId;

/// Self-assessed experience level attached to a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels, in the order the generate form offers them.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }
}

/// A user's multi-week learning plan, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub roadmap_id: RoadmapId,
    pub description: String,
    pub duration_weeks: u32,
    pub level: Level,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_lowercase() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let level: Level = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, Level::Advanced);
    }

    #[test]
    fn roadmap_deserializes_backend_row() {
        let json = r#"{
            "roadmap_id": 7,
            "description": "Learn Rust",
            "duration_weeks": 8,
            "level": "beginner",
            "created_at": "2023-11-14T22:13:20Z"
        }"#;
        let roadmap: Roadmap = serde_json::from_str(json).unwrap();
        assert_eq!(roadmap.roadmap_id, RoadmapId::new(7));
        assert_eq!(roadmap.duration_weeks, 8);
        assert_eq!(roadmap.level, Level::Beginner);
        assert_eq!(roadmap.created_at, crate::time::fixed_now());
    }
}
