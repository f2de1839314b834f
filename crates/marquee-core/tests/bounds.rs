// File: crates/marquee-core/tests/bounds.rs
// Purpose: Validate bounding-box accumulation over polygons and labels.

use marquee_core::{Label, Matrix3d, Mbr, Point2d, Polygon, ScreenObject};

const EPS: f64 = 1e-9;

fn assert_close(a: Point2d, b: Point2d) {
    assert!(
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
        "{a} != {b}"
    );
}

fn triangle() -> Polygon {
    Polygon::from_points(vec![
        Point2d::new(0.0, 0.0),
        Point2d::new(2.0, 0.0),
        Point2d::new(0.0, 2.0),
    ])
}

#[test]
fn triangle_bounds() {
    let mut obj = ScreenObject::new();
    obj.add_poly(triangle());
    let bb = obj.bounding_box();
    assert_close(bb.ll, Point2d::new(0.0, 0.0));
    assert_close(bb.ur, Point2d::new(2.0, 2.0));
}

#[test]
fn identity_label_bounds() {
    let mut obj = ScreenObject::new();
    obj.add_label(Label::new("verdun", 3.0, 4.0));
    let bb = obj.bounding_box();
    assert_close(bb.ll, Point2d::new(0.0, 0.0));
    assert_close(bb.ur, Point2d::new(3.0, 4.0));
}

#[test]
fn translated_label_bounds() {
    let mut obj = ScreenObject::new();
    obj.add_label(
        Label::new("metz", 2.0, 1.0).with_matrix(Matrix3d::translation(10.0, 20.0)),
    );
    let bb = obj.bounding_box();
    assert_close(bb.ll, Point2d::new(10.0, 20.0));
    assert_close(bb.ur, Point2d::new(12.0, 21.0));
}

#[test]
fn mixed_geometry_unions() {
    let mut obj = ScreenObject::new();
    obj.add_poly(Polygon::from_points(vec![
        Point2d::new(-5.0, -1.0),
        Point2d::new(-4.0, 1.0),
    ]));
    obj.add_label(
        Label::new("nancy", 2.0, 2.0).with_matrix(Matrix3d::translation(8.0, 3.0)),
    );
    let bb = obj.bounding_box();
    assert_close(bb.ll, Point2d::new(-5.0, -1.0));
    assert_close(bb.ur, Point2d::new(10.0, 5.0));
}

#[test]
fn flipped_label_still_yields_ordered_box() {
    // A negative scale swaps the transformed corners; the accumulator must
    // still report ll <= ur.
    let mut obj = ScreenObject::new();
    obj.add_label(Label::new("toul", 3.0, 4.0).with_matrix(Matrix3d::scale(-1.0, -1.0)));
    let bb = obj.bounding_box();
    assert_close(bb.ll, Point2d::new(-3.0, -4.0));
    assert_close(bb.ur, Point2d::new(0.0, 0.0));
}

#[test]
fn mbr_grows_monotonically() {
    let mut mbr = Mbr::new();
    assert!(!mbr.is_valid());

    mbr.add_point(Point2d::new(1.0, 1.0));
    assert!(mbr.is_valid());
    assert_eq!(mbr.ll(), mbr.ur());

    mbr.add_point(Point2d::new(-2.0, 3.0));
    // A point inside the current box changes nothing.
    mbr.add_point(Point2d::new(0.0, 2.0));
    assert_close(mbr.ll(), Point2d::new(-2.0, 1.0));
    assert_close(mbr.ur(), Point2d::new(1.0, 3.0));
}

#[test]
fn empty_is_degenerate_origin_box() {
    let obj = ScreenObject::new();
    let bb = obj.bounding_box();
    assert_eq!(bb.ll, Point2d::ORIGIN);
    assert_eq!(bb.ur, Point2d::ORIGIN);
}

#[test]
fn repeated_queries_agree() {
    let mut obj = ScreenObject::new();
    obj.add_poly(triangle());
    obj.add_label(Label::new("briey", 1.0, 1.0));
    assert_eq!(obj.bounding_box(), obj.bounding_box());
}

#[test]
fn children_do_not_contribute() {
    let mut child = ScreenObject::new();
    child.add_poly(Polygon::from_points(vec![Point2d::new(1000.0, 1000.0)]));

    let mut obj = ScreenObject::new();
    obj.add_poly(triangle());
    obj.add_child(child);

    let bb = obj.bounding_box();
    assert_close(bb.ur, Point2d::new(2.0, 2.0));
    assert_eq!(obj.child_count(), 1);
}
