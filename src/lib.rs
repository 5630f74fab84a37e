pub mod app;
pub mod io;
pub mod layout;
pub mod model;
pub mod search;
pub mod ui;
