pub mod conversion;
pub mod palette_service;
pub mod pixel_stream;

pub use conversion::{ColorReport, ConversionService, DistanceMetric};
pub use palette_service::{PaletteEntry, PaletteService, CACHED_LEAVES};
pub use pixel_stream::PixelStream;
