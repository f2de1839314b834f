// File: crates/marquee-core/src/sprite.rs
// Summary: Image attachment carried opaquely alongside the overlay geometry.

use image::RgbaImage;

use crate::types::Color;

/// An image attached to a screen object.
///
/// The pixel buffer and tint are stored as given and handed to the renderer
/// untouched; sprites take no part in bounding-box or transform math.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub pixels: RgbaImage,
    pub tint: Color,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub fn new(pixels: RgbaImage, tint: Color, width: u32, height: u32) -> Self {
        Self { pixels, tint, width, height }
    }
}
