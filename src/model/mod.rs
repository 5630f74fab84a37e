pub mod date;
pub mod item;
pub mod profile;
pub mod viewport;

pub use date::DisplayLocale;
pub use item::{
    build_timeline, timeline_bounds, Category, ItemPayload, LayoutError, NormalizeWarning,
    TimeWindow, TimelineItem,
};
pub use profile::Profile;
pub use viewport::TimelineViewport;
