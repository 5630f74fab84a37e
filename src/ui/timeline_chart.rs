use chrono::{Datelike, NaiveDate};
use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::layout::{
    assign_rows, calculate_position, rows_per_swimlane, stack_height, y_offset, PositionedItem,
    MIN_ITEM_WIDTH, SWIMLANE_COUNT,
};
use crate::model::date::{self, DisplayLocale};
use crate::model::item::Category;
use crate::model::{timeline_bounds, TimeWindow, TimelineItem, TimelineViewport};
use crate::search::item_matches;
use crate::ui::theme;

const SWIMLANE_ORDER: [Category; SWIMLANE_COUNT] = [
    Category::Mission,
    Category::Company,
    Category::Event,
    Category::Education,
];

/// Render the timeline chart (central panel). Handles Ctrl+scroll zoom,
/// item selection, and hover tooltips; layout itself is recomputed from
/// scratch every frame.
pub fn show_timeline_chart(
    items: &[TimelineItem],
    viewport: &mut TimelineViewport,
    search_query: &str,
    locale: DisplayLocale,
    selected_item: &mut Option<String>,
    today: NaiveDate,
    ui: &mut Ui,
) {
    let window = match timeline_bounds(items, today) {
        Ok(window) => window,
        Err(_) => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No timeline entries to display")
                        .font(theme::font_header())
                        .color(theme::TEXT_DIM),
                );
            });
            return;
        }
    };

    // Ctrl/Cmd + scroll zooms instead of scrolling.
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
    let zoom_modifier = ui.input(|i| i.modifiers.ctrl || i.modifiers.mac_cmd);
    if ui.rect_contains_pointer(ui.max_rect()) && zoom_modifier && scroll_delta.y != 0.0 {
        viewport.handle_scroll(scroll_delta.y);
    }

    let axis_width = viewport.timeline_width();
    let positioned = assign_rows(items, window, axis_width, today);
    let rows = rows_per_swimlane(&positioned);
    let metrics = theme::lane_metrics();

    let available = ui.available_size();
    let chart_width = (axis_width + theme::SIDE_PADDING * 2.0).max(available.x);
    let chart_height =
        (theme::AXIS_HEIGHT + stack_height(&rows, metrics) + theme::BOTTOM_PADDING)
            .max(available.y);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(chart_width, chart_height), Sense::click());
            let origin = response.rect.min;
            // Left edge of the time axis and top of the swimlane stack.
            let x0 = origin.x + theme::SIDE_PADDING;
            let y0 = origin.y + theme::AXIS_HEIGHT;
            let mut consumed_click = false;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            draw_axis(&painter, origin, x0, window, axis_width, chart_height, locale);
            draw_swimlane_bands(&painter, origin, y0, &rows, chart_width);
            draw_today_line(&painter, x0, y0, window, axis_width, chart_height, today);

            for pi in &positioned {
                let x = x0 + pi.x;
                let y = y0 + y_offset(pi.lane, &rows, metrics);
                let matches = item_matches(pi.item, search_query);
                let is_selected = selected_item.as_deref() == Some(pi.item.id.as_str());

                let item_rect = if pi.width <= MIN_ITEM_WIDTH {
                    draw_marker(&painter, pi, x, y, matches, is_selected)
                } else {
                    draw_bar(&painter, pi, x, y, matches, is_selected)
                };

                let item_response = ui.interact(
                    item_rect.expand(4.0),
                    ui.make_persistent_id(("timeline-item", &pi.item.id)),
                    Sense::click(),
                );
                if item_response.clicked() {
                    *selected_item = Some(pi.item.id.clone());
                    consumed_click = true;
                }
                if item_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    show_item_tooltip(ui, pi.item, locale, today);
                }
            }

            // Empty click on background clears selection
            if response.clicked() && !consumed_click {
                *selected_item = None;
            }
        });
}

fn draw_axis(
    painter: &egui::Painter,
    origin: Pos2,
    x0: f32,
    window: TimeWindow,
    axis_width: f32,
    height: f32,
    locale: DisplayLocale,
) {
    painter.rect_filled(
        Rect::from_min_size(
            origin,
            Vec2::new(axis_width + theme::SIDE_PADDING * 2.0, theme::AXIS_HEIGHT),
        ),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + theme::AXIS_HEIGHT),
            Pos2::new(origin.x + axis_width + theme::SIDE_PADDING * 2.0, origin.y + theme::AXIS_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let total_months = date::months_between(window.min, window.max).max(1);
    let pixels_per_month = axis_width / total_months as f32;

    let mut month = window.min;
    while month <= window.max {
        let x = x0 + calculate_position(month, window, axis_width);

        if month.month() == 1 || month == window.min {
            painter.line_segment(
                [
                    Pos2::new(x, origin.y + theme::AXIS_HEIGHT),
                    Pos2::new(x, origin.y + height),
                ],
                Stroke::new(0.5, theme::GRID_LINE),
            );
            painter.text(
                Pos2::new(x + 4.0, origin.y + 14.0),
                egui::Align2::LEFT_CENTER,
                month.year().to_string(),
                theme::font_header(),
                theme::TEXT_PRIMARY,
            );
        }

        // Month labels only once there is room for them.
        if pixels_per_month >= 28.0 {
            painter.text(
                Pos2::new(x + 4.0, origin.y + 32.0),
                egui::Align2::LEFT_CENTER,
                date::format_month_year(month, locale),
                theme::font_sub(),
                theme::TEXT_DIM,
            );
        }

        let (y, m) = if month.month() == 12 {
            (month.year() + 1, 1)
        } else {
            (month.year(), month.month() + 1)
        };
        month = NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(month + chrono::Duration::days(31));
    }
}

fn draw_swimlane_bands(
    painter: &egui::Painter,
    origin: Pos2,
    y0: f32,
    rows: &[usize; SWIMLANE_COUNT],
    chart_width: f32,
) {
    let metrics = theme::lane_metrics();
    for (swimlane, category) in SWIMLANE_ORDER.iter().enumerate() {
        let band_top = y0
            + y_offset(
                crate::layout::Lane { swimlane, row: 0 },
                rows,
                metrics,
            )
            - theme::SWIMLANE_PADDING * 0.5;

        if swimlane > 0 {
            painter.line_segment(
                [
                    Pos2::new(origin.x, band_top),
                    Pos2::new(origin.x + chart_width, band_top),
                ],
                Stroke::new(0.5, theme::BORDER_SUBTLE),
            );
        }
        painter.text(
            Pos2::new(origin.x + 8.0, band_top + 12.0),
            egui::Align2::LEFT_CENTER,
            category.label(),
            theme::font_small(),
            theme::TEXT_DIM,
        );
    }
}

fn draw_today_line(
    painter: &egui::Painter,
    x0: f32,
    y0: f32,
    window: TimeWindow,
    axis_width: f32,
    height: f32,
    today: NaiveDate,
) {
    let current_month = date::month_of(today);
    if current_month < window.min || current_month > window.max {
        return;
    }
    let x = x0 + calculate_position(current_month, window, axis_width);
    painter.line_segment(
        [Pos2::new(x, y0), Pos2::new(x, y0 + height)],
        Stroke::new(1.5, theme::TODAY_LINE),
    );
}

fn draw_bar(
    painter: &egui::Painter,
    pi: &PositionedItem<'_>,
    x: f32,
    y: f32,
    matches: bool,
    is_selected: bool,
) -> Rect {
    let color = if matches {
        pi.item.color()
    } else {
        theme::dimmed(pi.item.color())
    };
    let bar_rect = Rect::from_min_size(
        Pos2::new(x, y + theme::BAR_INSET),
        Vec2::new(pi.width, theme::ITEM_HEIGHT - theme::BAR_INSET * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        Color32::from_black_alpha(35),
    );
    painter.rect_filled(bar_rect, rounding, color);

    // Ongoing items render open-ended: fade-out strip at the right edge.
    if pi.item.end.is_none() {
        let fade_width = (pi.width * 0.15).clamp(8.0, 40.0);
        let fade_rect = Rect::from_min_max(
            Pos2::new(bar_rect.right() - fade_width, bar_rect.top()),
            bar_rect.max,
        );
        painter.rect_filled(
            fade_rect,
            Rounding {
                nw: 0.0,
                sw: 0.0,
                ne: theme::BAR_ROUNDING,
                se: theme::BAR_ROUNDING,
            },
            Color32::from_rgba_unmultiplied(
                theme::BG_DARK.r(),
                theme::BG_DARK.g(),
                theme::BG_DARK.b(),
                120,
            ),
        );
    }

    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Title on the bar (single line, clipped to bar bounds)
    if pi.width > 30.0 {
        let text_color = if matches {
            theme::TEXT_ON_BAR
        } else {
            theme::TEXT_DIM
        };
        let galley = painter.layout_no_wrap(pi.item.title.clone(), theme::font_bar(), text_color);
        let clipped = painter.with_clip_rect(bar_rect);
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        clipped.galley(
            Pos2::new(bar_rect.left() + 6.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }

    bar_rect
}

fn draw_marker(
    painter: &egui::Painter,
    pi: &PositionedItem<'_>,
    x: f32,
    y: f32,
    matches: bool,
    is_selected: bool,
) -> Rect {
    let color = if matches {
        pi.item.color()
    } else {
        theme::dimmed(pi.item.color())
    };
    let center = Pos2::new(x + pi.width / 2.0, y + theme::ITEM_HEIGHT / 2.0);

    painter.circle_filled(
        center + Vec2::new(1.0, 1.5),
        theme::MARKER_RADIUS,
        Color32::from_black_alpha(40),
    );
    painter.circle_filled(center, theme::MARKER_RADIUS, color);
    if is_selected {
        painter.circle_stroke(
            center,
            theme::MARKER_RADIUS + 2.0,
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    let label_color = if matches {
        theme::TEXT_SECONDARY
    } else {
        theme::TEXT_DIM
    };
    painter.text(
        Pos2::new(center.x + theme::MARKER_RADIUS + 5.0, center.y),
        egui::Align2::LEFT_CENTER,
        &pi.item.title,
        theme::font_small(),
        label_color,
    );

    Rect::from_center_size(center, Vec2::splat(theme::MARKER_RADIUS * 2.0 + 2.0))
}

fn show_item_tooltip(ui: &Ui, item: &TimelineItem, locale: DisplayLocale, today: NaiveDate) {
    egui::show_tooltip_at_pointer(
        ui.ctx(),
        ui.layer_id(),
        egui::Id::new(("timeline-tip", &item.id)),
        |ui| {
            ui.strong(&item.title);
            if !item.subtitle.is_empty() {
                ui.label(
                    egui::RichText::new(&item.subtitle)
                        .color(theme::TEXT_SECONDARY)
                        .size(11.0),
                );
            }
            let period = match item.end {
                Some(end) if end == item.start => date::format_month_year(item.start, locale),
                Some(end) => format!(
                    "{} → {}",
                    date::format_month_year(item.start, locale),
                    date::format_month_year(end, locale)
                ),
                None => format!("{} → Present", date::format_month_year(item.start, locale)),
            };
            ui.label(period);
            let months = date::months_between(item.start, item.effective_end(today));
            if months > 0 {
                ui.label(
                    egui::RichText::new(format_duration(months))
                        .color(theme::TEXT_DIM)
                        .size(10.5),
                );
            }
        },
    );
}

fn format_duration(months: i32) -> String {
    let years = months / 12;
    let rem = months % 12;
    match (years, rem) {
        (0, m) => format!("{m} mo"),
        (y, 0) => format!("{y} yr"),
        (y, m) => format!("{y} yr {m} mo"),
    }
}
