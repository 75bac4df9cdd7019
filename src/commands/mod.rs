pub mod config;
pub mod render;

pub use config::{ConfigFormat, cmd_config};
pub use render::{OutputFormat, cmd_render};
