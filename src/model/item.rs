use chrono::NaiveDate;
use egui::Color32;
use thiserror::Error;

use super::date::{self, PRESENT_TOKEN};
use super::profile::{Company, Education, Event, Mission, Profile};

/// The four kinds of timeline entries. Closed set; each maps to a fixed
/// swimlane and display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mission,
    Company,
    Education,
    Event,
}

impl Category {
    /// Fixed vertical ordering of the swimlanes, top to bottom.
    pub fn swimlane(self) -> usize {
        match self {
            Category::Mission => 0,
            Category::Company => 1,
            Category::Event => 2,
            Category::Education => 3,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Category::Mission => Color32::from_rgb(59, 130, 246),
            Category::Company => Color32::from_rgb(16, 185, 129),
            Category::Education => Color32::from_rgb(245, 158, 11),
            Category::Event => Color32::from_rgb(245, 158, 11),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Mission => "Missions",
            Category::Company => "Companies",
            Category::Education => "Education",
            Category::Event => "Events",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Category::Mission => "mission",
            Category::Company => "company",
            Category::Education => "education",
            Category::Event => "event",
        }
    }
}

/// Category-specific payload, a clone of the source record the item was
/// normalized from.
#[derive(Debug, Clone)]
pub enum ItemPayload {
    Mission(Mission),
    Company(Company),
    Education(Education),
    Event(Event),
}

impl ItemPayload {
    pub fn category(&self) -> Category {
        match self {
            ItemPayload::Mission(_) => Category::Mission,
            ItemPayload::Company(_) => Category::Company,
            ItemPayload::Education(_) => Category::Education,
            ItemPayload::Event(_) => Category::Event,
        }
    }
}

/// A normalized timeline entry. `end == None` is the only representation of
/// "ongoing"; events always carry `end == Some(start)`.
#[derive(Debug, Clone)]
pub struct TimelineItem {
    /// `"{category}-{index}"`, index being the position within the original
    /// input collection. Stable across re-sorting.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub payload: ItemPayload,
}

impl TimelineItem {
    pub fn category(&self) -> Category {
        self.payload.category()
    }

    pub fn color(&self) -> Color32 {
        self.category().color()
    }

    /// End date for layout purposes: the current month for ongoing items.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end.unwrap_or_else(|| date::month_of(today))
    }

    /// Explicit 1-based row pinning from curated data, converted to 0-based.
    /// Only missions and companies support it; `row: 0` counts as unpinned.
    pub fn pinned_row(&self) -> Option<usize> {
        let row = match &self.payload {
            ItemPayload::Mission(m) => m.row,
            ItemPayload::Company(c) => c.row,
            _ => None,
        };
        row.filter(|r| *r >= 1).map(|r| r as usize - 1)
    }
}

/// A record dropped during normalization, kept for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeWarning {
    pub id: String,
    pub title: String,
    pub reason: String,
}

impl std::fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skipped {} ('{}'): {}", self.id, self.title, self.reason)
    }
}

/// Smallest time window covering every item's start and effective end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("timeline has no items to place")]
    EmptyTimeline,
}

/// Normalize the four profile collections into one flat item list, sorted
/// ascending by start date (stable, collections concatenated in fixed
/// category order beforehand).
///
/// Records with an unparseable date token, or an end before their start, are
/// skipped with a warning rather than failing the whole pass.
pub fn build_timeline(
    profile: &Profile,
    today: NaiveDate,
) -> (Vec<TimelineItem>, Vec<NormalizeWarning>) {
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    let mut skip = |category: Category, idx: usize, title: &str, reason: String| {
        warnings.push(NormalizeWarning {
            id: format!("{}-{}", category.id_prefix(), idx),
            title: title.to_string(),
            reason,
        });
    };

    for (idx, mission) in profile.missions.iter().enumerate() {
        let start = match date::parse_month_token(&mission.start_date, today) {
            Ok(d) => d,
            Err(e) => {
                skip(Category::Mission, idx, &mission.title, e.to_string());
                continue;
            }
        };
        let end = match ranged_end(&mission.end_date, start, today) {
            Ok(e) => e,
            Err(reason) => {
                skip(Category::Mission, idx, &mission.title, reason);
                continue;
            }
        };
        items.push(TimelineItem {
            id: format!("mission-{idx}"),
            title: mission.title.clone(),
            subtitle: mission.company.clone(),
            start,
            end,
            payload: ItemPayload::Mission(mission.clone()),
        });
    }

    for (idx, company) in profile.companies.iter().enumerate() {
        let start = match date::parse_month_token(&company.start_date, today) {
            Ok(d) => d,
            Err(e) => {
                skip(Category::Company, idx, &company.position, e.to_string());
                continue;
            }
        };
        let end = match ranged_end(&company.end_date, start, today) {
            Ok(e) => e,
            Err(reason) => {
                skip(Category::Company, idx, &company.position, reason);
                continue;
            }
        };
        items.push(TimelineItem {
            id: format!("company-{idx}"),
            title: company.position.clone(),
            subtitle: company.company.clone(),
            start,
            end,
            payload: ItemPayload::Company(company.clone()),
        });
    }

    for (idx, edu) in profile.education.iter().enumerate() {
        let parsed = date::parse_month_token(&edu.start_date, today).and_then(|start| {
            date::parse_month_token(&edu.end_date, today).map(|end| (start, end))
        });
        let (start, end) = match parsed {
            Ok(pair) => pair,
            Err(e) => {
                skip(Category::Education, idx, &edu.degree, e.to_string());
                continue;
            }
        };
        if end < start {
            skip(Category::Education, idx, &edu.degree, reversed_range(start, end));
            continue;
        }
        items.push(TimelineItem {
            id: format!("education-{idx}"),
            title: edu.degree.clone(),
            subtitle: edu.institution.clone(),
            start,
            end: Some(end),
            payload: ItemPayload::Education(edu.clone()),
        });
    }

    for (idx, event) in profile.events.iter().enumerate() {
        let start = match date::parse_month_token(&event.date, today) {
            Ok(d) => d,
            Err(e) => {
                skip(Category::Event, idx, &event.name, e.to_string());
                continue;
            }
        };
        items.push(TimelineItem {
            id: format!("event-{idx}"),
            title: event.name.clone(),
            subtitle: event.kind.clone(),
            start,
            // Events are single-day, never ongoing.
            end: Some(start),
            payload: ItemPayload::Event(event.clone()),
        });
    }

    items.sort_by_key(|item| item.start);
    (items, warnings)
}

/// Resolve the end token of a mission/company: `"Present"` means ongoing.
fn ranged_end(
    token: &str,
    start: NaiveDate,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, String> {
    if token.trim() == PRESENT_TOKEN {
        return Ok(None);
    }
    let end = date::parse_month_token(token, today).map_err(|e| e.to_string())?;
    if end < start {
        return Err(reversed_range(start, end));
    }
    Ok(Some(end))
}

fn reversed_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "end {} precedes start {}",
        date::source_token(end),
        date::source_token(start)
    )
}

/// Derive the overall visible window from the item list. Ongoing items pull
/// `max` up to `today`, so the result is wall-clock dependent exactly when
/// such an item exists.
pub fn timeline_bounds(
    items: &[TimelineItem],
    today: NaiveDate,
) -> Result<TimeWindow, LayoutError> {
    let mut iter = items.iter();
    let first = iter.next().ok_or(LayoutError::EmptyTimeline)?;
    let mut min = first.start;
    let mut max = first.effective_end(today);
    for item in iter {
        min = min.min(item.start);
        max = max.max(item.effective_end(today));
    }
    Ok(TimeWindow { min, max })
}
