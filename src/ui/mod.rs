pub mod detail_panel;
pub mod header_bar;
pub mod search_bar;
pub mod theme;
pub mod timeline_chart;
