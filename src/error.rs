use chroma_core::{ColorError, ParseColorError, ParseReferenceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid color '{input}': {source}")]
    ParseColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid reference: {0}")]
    Reference(#[from] ParseReferenceError),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Pixel stream ended mid-pixel: {trailing} trailing bytes (expected multiples of {channels})")]
    PartialPixel { trailing: usize, channels: usize },

    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
}

impl AppError {
    pub fn parse_color(input: &str, source: ParseColorError) -> Self {
        AppError::ParseColor {
            input: input.to_string(),
            source,
        }
    }
}
