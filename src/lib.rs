pub mod client;
pub mod config;
pub mod item_list;
pub mod logging;
pub mod model;

#[cfg(feature = "tui")]
pub mod tui;
