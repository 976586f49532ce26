pub mod config;

pub use config::{AppConfig, OutputFormat, PaletteConfig, CONFIG_ENV};
