// File: crates/marquee-core/src/lib.rs
// Summary: Core library entry point; exports the screen-space overlay geometry API.

pub mod point;
pub mod matrix;
pub mod mbr;
pub mod poly;
pub mod label;
pub mod sprite;
pub mod screen;
pub mod types;
pub mod error;

pub use point::Point2d;
pub use matrix::{Matrix3d, Point3d};
pub use mbr::Mbr;
pub use poly::Polygon;
pub use label::Label;
pub use sprite::Sprite;
pub use screen::{BoundingBox, ScreenObject};
pub use types::{Color, HEIGHT, WIDTH};
pub use error::{Error, Result};
