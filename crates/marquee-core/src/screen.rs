// File: crates/marquee-core/src/screen.rs
// Summary: Composite screen object: polygons, labels and sprites with bounding-box
//          and uniform affine transform support.

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::label::Label;
use crate::matrix::Matrix3d;
use crate::mbr::Mbr;
use crate::point::Point2d;
use crate::poly::Polygon;
use crate::sprite::Sprite;
use crate::types::Color;

/// Axis-aligned bounds of a screen object's geometry.
///
/// `ll.x <= ur.x` and `ll.y <= ur.y` hold whenever the object owns any
/// polygon vertex or label. An object with neither yields the degenerate
/// box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub ll: Point2d,
    pub ur: Point2d,
}

/// A transformable composite of polygons, text labels and image sprites
/// sharing one screen coordinate space.
///
/// Collections keep insertion order; the renderer draws them back-to-front
/// as added. Instances are plain owned data: build on one thread, then hand
/// off. Concurrent mutation requires external synchronization.
#[derive(Clone, Debug, Default)]
pub struct ScreenObject {
    polys: Vec<Polygon>,
    labels: Vec<Label>,
    sprites: Vec<Sprite>,
    children: Vec<ScreenObject>,
}

impl ScreenObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a polygon.
    pub fn add_poly(&mut self, poly: Polygon) {
        self.polys.push(poly);
    }

    /// Append a label placement.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Attach an image with a tint and a target size in pixels.
    pub fn add_image(&mut self, pixels: RgbaImage, tint: Color, width: u32, height: u32) {
        self.sprites.push(Sprite::new(pixels, tint, width, height));
    }

    /// Nest another screen object. Children ride along for rendering
    /// composition; `bounding_box` and the transform operations cover
    /// directly-owned geometry only and do not recurse into them.
    pub fn add_child(&mut self, child: ScreenObject) {
        self.children.push(child);
    }

    pub fn poly_count(&self) -> usize {
        self.polys.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Polygon at `index`. Precondition: `index < poly_count()`.
    pub fn poly(&self, index: usize) -> Result<&Polygon> {
        self.polys.get(index).ok_or(Error::IndexOutOfBounds {
            collection: "polygon",
            index,
            len: self.polys.len(),
        })
    }

    /// Mutable polygon at `index`. Precondition: `index < poly_count()`.
    pub fn poly_mut(&mut self, index: usize) -> Result<&mut Polygon> {
        let len = self.polys.len();
        self.polys
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { collection: "polygon", index, len })
    }

    /// Label at `index`. Precondition: `index < label_count()`.
    pub fn label(&self, index: usize) -> Result<&Label> {
        self.labels.get(index).ok_or(Error::IndexOutOfBounds {
            collection: "label",
            index,
            len: self.labels.len(),
        })
    }

    /// Mutable label at `index`. Precondition: `index < label_count()`.
    pub fn label_mut(&mut self, index: usize) -> Result<&mut Label> {
        let len = self.labels.len();
        self.labels
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { collection: "label", index, len })
    }

    pub fn polys(&self) -> &[Polygon] {
        &self.polys
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn children(&self) -> &[ScreenObject] {
        &self.children
    }

    /// Bounds of every polygon vertex plus both screen-space corners of
    /// every label, accumulated in collection order. Sprites and nested
    /// children do not contribute. With no polygons and no labels the
    /// result is the degenerate box at the origin.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut mbr = Mbr::new();

        for poly in &self.polys {
            for &pt in poly.points() {
                mbr.add_point(pt);
            }
        }

        for label in &self.labels {
            let (p0, p1) = label.corners();
            mbr.add_point(p0);
            mbr.add_point(p1);
        }

        if mbr.is_valid() {
            BoundingBox { ll: mbr.ll(), ur: mbr.ur() }
        } else {
            BoundingBox::default()
        }
    }

    /// Rewrite all directly-owned geometry through `mat`: every polygon
    /// vertex is replaced by its projection, and every label's matrix
    /// becomes `mat * current` so the new transform applies after the
    /// label's own placement.
    pub fn transform(&mut self, mat: &Matrix3d) {
        for poly in &mut self.polys {
            for pt in poly.points_mut() {
                *pt = mat.project(*pt);
            }
        }
        for label in &mut self.labels {
            label.mat = mat.multiply(&label.mat);
        }
    }

    /// Scale all directly-owned geometry about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform(&Matrix3d::scale(sx, sy));
    }

    /// Translate all directly-owned geometry.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.transform(&Matrix3d::translation(tx, ty));
    }
}
