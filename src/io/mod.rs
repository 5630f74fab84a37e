pub mod file;

pub use file::{load_profile, parse_profile, IconMap, ProfileError};
