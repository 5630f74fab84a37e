//! Timeline layout engine: maps items onto a continuous horizontal time axis
//! and a discrete vertical grid of swimlanes and rows, guaranteeing that no
//! two items sharing a (swimlane, row) slot overlap in time.

use chrono::NaiveDate;

use crate::model::date::{self, months_between};
use crate::model::item::{Category, TimeWindow, TimelineItem};

/// Floor for item widths so instantaneous items stay visible and clickable.
pub const MIN_ITEM_WIDTH: f32 = 4.0;
pub const SWIMLANE_COUNT: usize = 4;

/// Vertical slot of a placed item. Two explicit integers; rows are dense
/// within each swimlane for automatically placed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub swimlane: usize,
    pub row: usize,
}

/// A fully resolved placement, recomputed on every layout pass.
#[derive(Debug, Clone)]
pub struct PositionedItem<'a> {
    pub item: &'a TimelineItem,
    /// Pixel offset of the item's start from the window's left edge.
    pub x: f32,
    pub width: f32,
    pub lane: Lane,
}

/// Vertical sizing constants the y-offset math depends on.
#[derive(Debug, Clone, Copy)]
pub struct LaneMetrics {
    pub item_height: f32,
    pub top_padding: f32,
    pub swimlane_padding: f32,
}

/// Month span of the window, clamped so a single-month timeline divides by 1
/// instead of 0 (everything then lands at x = 0).
fn total_months(window: TimeWindow) -> f32 {
    months_between(window.min, window.max).max(1) as f32
}

/// Linear interpolation of a date into pixel space.
pub fn calculate_position(date: NaiveDate, window: TimeWindow, width_px: f32) -> f32 {
    months_between(window.min, date) as f32 / total_months(window) * width_px
}

/// Time-proportional width, floored at [`MIN_ITEM_WIDTH`]. Ongoing items
/// (`end == None`) extend to the current month.
pub fn calculate_width(
    start: NaiveDate,
    end: Option<NaiveDate>,
    window: TimeWindow,
    width_px: f32,
    today: NaiveDate,
) -> f32 {
    let actual_end = end.unwrap_or_else(|| date::month_of(today));
    let duration = months_between(start, actual_end) as f32;
    (duration / total_months(window) * width_px).max(MIN_ITEM_WIDTH)
}

/// Items rendered as point markers instead of bars: events always, plus
/// missions/companies with a defined end and a duration of at most a month.
fn is_marker(item: &TimelineItem) -> bool {
    match item.category() {
        Category::Event => true,
        Category::Mission | Category::Company => item
            .end
            .is_some_and(|end| months_between(item.start, end) <= 1),
        Category::Education => false,
    }
}

/// Half-open interval intersection; touching endpoints do not overlap.
fn items_overlap(pos1: f32, width1: f32, pos2: f32, width2: f32) -> bool {
    pos1 < pos2 + width2 && pos2 < pos1 + width1
}

/// Place every item. Items are processed sorted by (swimlane, start date),
/// stable; each either carries an explicit row pin (curated data, collision
/// detection bypassed) or takes the first conflict-free row from 0 upward.
///
/// Marker items use the collapsed marker width for collision testing and
/// rendering alike, so one width describes each placement.
pub fn assign_rows<'a>(
    items: &'a [TimelineItem],
    window: TimeWindow,
    width_px: f32,
    today: NaiveDate,
) -> Vec<PositionedItem<'a>> {
    let mut order: Vec<&TimelineItem> = items.iter().collect();
    order.sort_by(|a, b| {
        a.category()
            .swimlane()
            .cmp(&b.category().swimlane())
            .then(a.start.cmp(&b.start))
    });

    let mut placed: Vec<PositionedItem<'a>> = Vec::with_capacity(items.len());
    for item in order {
        let swimlane = item.category().swimlane();
        let x = calculate_position(item.start, window, width_px);
        let width = if is_marker(item) {
            MIN_ITEM_WIDTH
        } else {
            calculate_width(item.start, item.end, window, width_px, today)
        };

        let row = match item.pinned_row() {
            Some(pinned) => pinned,
            None => {
                // Greedy first-fit; terminates because each occupied row holds
                // at least one already-placed item.
                let mut row = 0;
                while placed.iter().any(|pi| {
                    pi.lane.swimlane == swimlane
                        && pi.lane.row == row
                        && items_overlap(x, width, pi.x, pi.width)
                }) {
                    row += 1;
                }
                row
            }
        };

        placed.push(PositionedItem {
            item,
            x,
            width,
            lane: Lane { swimlane, row },
        });
    }
    placed
}

/// Row count per swimlane (at least 1 each, so empty lanes keep their band).
pub fn rows_per_swimlane(placed: &[PositionedItem<'_>]) -> [usize; SWIMLANE_COUNT] {
    let mut rows = [1usize; SWIMLANE_COUNT];
    for pi in placed {
        rows[pi.lane.swimlane] = rows[pi.lane.swimlane].max(pi.lane.row + 1);
    }
    rows
}

/// Pixel y of a lane: cumulative height of the swimlanes above it, plus the
/// row offset within its own swimlane, plus the top padding.
pub fn y_offset(lane: Lane, rows: &[usize; SWIMLANE_COUNT], metrics: LaneMetrics) -> f32 {
    let mut y = metrics.top_padding;
    for &row_count in rows.iter().take(lane.swimlane) {
        y += row_count as f32 * metrics.item_height + metrics.swimlane_padding;
    }
    y + lane.row as f32 * metrics.item_height
}

/// Total vertical extent of all swimlanes, for sizing the canvas.
pub fn stack_height(rows: &[usize; SWIMLANE_COUNT], metrics: LaneMetrics) -> f32 {
    let lanes: f32 = rows
        .iter()
        .map(|&r| r as f32 * metrics.item_height + metrics.swimlane_padding)
        .sum();
    metrics.top_padding + lanes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ItemPayload;
    use crate::model::profile::{Company, Education, Event, Mission};

    fn ymd(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn mission_item(id: &str, start: NaiveDate, end: Option<NaiveDate>, row: Option<u32>) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            start,
            end,
            payload: ItemPayload::Mission(Mission {
                title: id.to_string(),
                context: String::new(),
                company: String::new(),
                start_date: String::new(),
                end_date: String::new(),
                technologies: Vec::new(),
                tasks: Vec::new(),
                row,
            }),
        }
    }

    fn company_item(id: &str, start: NaiveDate, end: Option<NaiveDate>) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            start,
            end,
            payload: ItemPayload::Company(Company {
                company: String::new(),
                position: id.to_string(),
                start_date: String::new(),
                end_date: String::new(),
                responsibilities: Vec::new(),
                row: None,
            }),
        }
    }

    fn education_item(id: &str, start: NaiveDate, end: NaiveDate) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            start,
            end: Some(end),
            payload: ItemPayload::Education(Education {
                institution: String::new(),
                degree: id.to_string(),
                start_date: String::new(),
                end_date: String::new(),
            }),
        }
    }

    fn event_item(id: &str, date: NaiveDate) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            start: date,
            end: Some(date),
            payload: ItemPayload::Event(Event {
                name: id.to_string(),
                date: String::new(),
                description: String::new(),
                kind: String::new(),
            }),
        }
    }

    fn today() -> NaiveDate {
        ymd(2025, 6)
    }

    fn window(min: NaiveDate, max: NaiveDate) -> TimeWindow {
        TimeWindow { min, max }
    }

    #[test]
    fn position_is_linear_in_months() {
        let w = window(ymd(2020, 1), ymd(2021, 1));
        assert_eq!(calculate_position(ymd(2020, 1), w, 1200.0), 0.0);
        assert_eq!(calculate_position(ymd(2020, 7), w, 1200.0), 600.0);
        assert_eq!(calculate_position(ymd(2021, 1), w, 1200.0), 1200.0);
    }

    #[test]
    fn zero_span_window_does_not_divide_by_zero() {
        let w = window(ymd(2020, 1), ymd(2020, 1));
        assert_eq!(calculate_position(ymd(2020, 1), w, 1000.0), 0.0);
        assert_eq!(
            calculate_width(ymd(2020, 1), Some(ymd(2020, 1)), w, 1000.0, today()),
            MIN_ITEM_WIDTH
        );
    }

    #[test]
    fn width_has_a_floor() {
        let w = window(ymd(2000, 1), ymd(2025, 1));
        let width = calculate_width(ymd(2020, 1), Some(ymd(2020, 1)), w, 100.0, today());
        assert_eq!(width, MIN_ITEM_WIDTH);
    }

    #[test]
    fn overlapping_missions_stack_onto_row_one() {
        // A [Jan, Jun) keeps row 0, B [Feb, Apr) collides and moves down.
        let items = vec![
            mission_item("a", ymd(2020, 1), Some(ymd(2020, 6)), None),
            mission_item("b", ymd(2020, 2), Some(ymd(2020, 4)), None),
        ];
        let w = window(ymd(2020, 1), ymd(2020, 6));
        let placed = assign_rows(&items, w, 1200.0, today());
        let a = placed.iter().find(|p| p.item.id == "a").unwrap();
        let b = placed.iter().find(|p| p.item.id == "b").unwrap();
        assert_eq!(a.lane, Lane { swimlane: 0, row: 0 });
        assert_eq!(b.lane, Lane { swimlane: 0, row: 1 });
    }

    #[test]
    fn touching_intervals_share_a_row() {
        let items = vec![
            mission_item("a", ymd(2020, 1), Some(ymd(2020, 6)), None),
            mission_item("b", ymd(2020, 6), Some(ymd(2020, 12)), None),
        ];
        let w = window(ymd(2020, 1), ymd(2020, 12));
        let placed = assign_rows(&items, w, 1200.0, today());
        assert!(placed.iter().all(|p| p.lane.row == 0));
    }

    #[test]
    fn categories_land_in_their_swimlanes() {
        let items = vec![
            mission_item("m", ymd(2020, 1), Some(ymd(2020, 6)), None),
            company_item("c", ymd(2020, 1), Some(ymd(2020, 6))),
            event_item("ev", ymd(2020, 3)),
            education_item("ed", ymd(2020, 1), ymd(2020, 6)),
        ];
        let w = window(ymd(2020, 1), ymd(2020, 6));
        let placed = assign_rows(&items, w, 1200.0, today());
        let lane_of = |id: &str| placed.iter().find(|p| p.item.id == id).unwrap().lane.swimlane;
        assert_eq!(lane_of("m"), 0);
        assert_eq!(lane_of("c"), 1);
        assert_eq!(lane_of("ev"), 2);
        assert_eq!(lane_of("ed"), 3);
    }

    #[test]
    fn events_collapse_to_marker_width() {
        let items = vec![event_item("ev", ymd(2020, 3))];
        let w = window(ymd(2019, 1), ymd(2021, 1));
        let placed = assign_rows(&items, w, 2400.0, today());
        assert_eq!(placed[0].width, MIN_ITEM_WIDTH);
    }

    #[test]
    fn short_missions_collapse_but_ongoing_ones_do_not() {
        let items = vec![
            mission_item("short", ymd(2020, 3), Some(ymd(2020, 4)), None),
            mission_item("ongoing", ymd(2020, 3), None, None),
        ];
        let w = window(ymd(2019, 1), ymd(2025, 6));
        let placed = assign_rows(&items, w, 3000.0, today());
        let width_of = |id: &str| placed.iter().find(|p| p.item.id == id).unwrap().width;
        assert_eq!(width_of("short"), MIN_ITEM_WIDTH);
        assert!(width_of("ongoing") > MIN_ITEM_WIDTH);
    }

    #[test]
    fn pinned_rows_bypass_collision_detection() {
        let items = vec![
            mission_item("auto", ymd(2020, 1), Some(ymd(2020, 12)), None),
            mission_item("pinned", ymd(2020, 2), Some(ymd(2020, 8)), Some(1)),
        ];
        let w = window(ymd(2020, 1), ymd(2020, 12));
        let placed = assign_rows(&items, w, 1200.0, today());
        let pinned = placed.iter().find(|p| p.item.id == "pinned").unwrap();
        // row: 1 pins to row index 0 even though it overlaps "auto".
        assert_eq!(pinned.lane.row, 0);
    }

    #[test]
    fn rows_are_dense_from_zero() {
        let items: Vec<TimelineItem> = (0..5)
            .map(|i| mission_item(&format!("m{i}"), ymd(2020, 1), Some(ymd(2020, 12)), None))
            .collect();
        let w = window(ymd(2020, 1), ymd(2020, 12));
        let placed = assign_rows(&items, w, 1200.0, today());
        let mut rows: Vec<usize> = placed.iter().map(|p| p.lane.row).collect();
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn layout_is_deterministic() {
        let items = vec![
            mission_item("a", ymd(2020, 1), Some(ymd(2020, 6)), None),
            mission_item("b", ymd(2020, 2), Some(ymd(2020, 4)), None),
            company_item("c", ymd(2019, 5), None),
            event_item("ev", ymd(2020, 3)),
        ];
        let w = window(ymd(2019, 5), ymd(2025, 6));
        let first = assign_rows(&items, w, 3000.0, today());
        let second = assign_rows(&items, w, 3000.0, today());
        assert_eq!(first.len(), second.len());
        for (p1, p2) in first.iter().zip(second.iter()) {
            assert_eq!(p1.item.id, p2.item.id);
            assert_eq!(p1.x, p2.x);
            assert_eq!(p1.width, p2.width);
            assert_eq!(p1.lane, p2.lane);
        }
    }

    #[test]
    fn y_offset_accumulates_swimlane_heights() {
        let metrics = LaneMetrics {
            item_height: 30.0,
            top_padding: 40.0,
            swimlane_padding: 16.0,
        };
        let rows = [2, 1, 1, 1];
        // First swimlane, first row: just the top padding.
        assert_eq!(y_offset(Lane { swimlane: 0, row: 0 }, &rows, metrics), 40.0);
        // Second row of the first swimlane.
        assert_eq!(y_offset(Lane { swimlane: 0, row: 1 }, &rows, metrics), 70.0);
        // Second swimlane sits below the two mission rows plus padding.
        assert_eq!(
            y_offset(Lane { swimlane: 1, row: 0 }, &rows, metrics),
            40.0 + 2.0 * 30.0 + 16.0
        );
    }

    #[test]
    fn empty_lanes_still_count_one_row() {
        let placed: Vec<PositionedItem<'_>> = Vec::new();
        assert_eq!(rows_per_swimlane(&placed), [1, 1, 1, 1]);
    }
}
