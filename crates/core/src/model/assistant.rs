use serde::Serialize;

use super::ids::{RoadmapId, UserId};

/// Payload for `POST /ask-assistant`.
///
/// Week and day narrow the context the assistant answers in; both are
/// optional and omitted from the wire when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantQuery {
    pub user_id: UserId,
    pub roadmap_id: RoadmapId,
    pub input_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
}
