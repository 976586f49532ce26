//! Test fixtures and constants.

/// Hex colors used across tests
pub mod colors {
    pub const RED: &str = "#ff0000";
    pub const BLUE: &str = "#0000ff";
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";
    pub const YELLOW: &str = "#ffff00";
    pub const NAVY: &str = "#000080";
}

/// `count` copies of one RGB pixel
pub fn solid(rgb: [u8; 3], count: usize) -> Vec<u8> {
    rgb.iter().copied().cycle().take(count * 3).collect()
}

/// Raw RGB stream with two clearly separated clusters
pub fn two_clusters() -> Vec<u8> {
    let mut bytes = solid([240, 20, 20], 30);
    bytes.extend(solid([20, 20, 240], 10));
    bytes
}

/// Raw RGB stream covering a diagonal of the cube
pub fn gradient() -> Vec<u8> {
    (0..=255u8).flat_map(|v| [v, 255 - v, v / 2]).collect()
}

/// Add an opaque alpha byte to every RGB pixel
pub fn with_alpha(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks(3)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect()
}
