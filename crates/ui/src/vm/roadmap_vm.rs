use momentum_core::model::Roadmap;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapCardVm {
    pub id: u64,
    pub title: String,
    pub meta_line: String,
    pub created_str: String,
}

impl From<&Roadmap> for RoadmapCardVm {
    fn from(roadmap: &Roadmap) -> Self {
        Self {
            id: roadmap.roadmap_id.value(),
            title: roadmap.description.clone(),
            meta_line: format!(
                "{} weeks · {}",
                roadmap.duration_weeks,
                roadmap.level.as_str()
            ),
            created_str: format_date(roadmap.created_at),
        }
    }
}

#[must_use]
pub fn map_roadmap_cards(roadmaps: &[Roadmap]) -> Vec<RoadmapCardVm> {
    roadmaps.iter().map(RoadmapCardVm::from).collect()
}
