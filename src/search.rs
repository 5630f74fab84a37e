//! Free-text filtering of timeline items. Plain case-insensitive substring
//! containment across the display fields and the category-specific payload
//! text; no ranking.

use crate::model::item::{ItemPayload, TimelineItem};

/// Whether `item` matches `query`. A blank query matches everything.
pub fn item_matches(item: &TimelineItem, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&query);

    if contains(&item.title) || contains(&item.subtitle) {
        return true;
    }

    match &item.payload {
        ItemPayload::Mission(mission) => {
            contains(&mission.context)
                || mission
                    .technologies
                    .iter()
                    .any(|tech| contains(&tech.name) || contains(&tech.comments))
                || mission.tasks.iter().any(|task| contains(task))
        }
        ItemPayload::Company(company) => {
            company.responsibilities.iter().any(|resp| contains(resp))
        }
        ItemPayload::Education(_) | ItemPayload::Event(_) => false,
    }
}
