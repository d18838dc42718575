pub mod logging;
pub mod constants;
pub mod geometry;
pub mod names;
pub mod models;
pub mod lines;
pub mod line_geometry;
pub mod train_ordering;
pub mod api;
pub mod components;

pub use components::app::App;
