// File: crates/demo/src/main.rs
// Summary: Demo loads named geographic placements, builds a marker/label overlay,
//          fits it to a pixel viewport and reports the resulting bounds.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use marquee_core::{Label, Matrix3d, Point2d, Polygon, ScreenObject, HEIGHT, WIDTH};
use std::path::Path;

/// Marker half-extent in radians, pre-fit.
const MARKER_RADIUS: f64 = 0.01;
/// Rough glyph box in radians, pre-fit. Letters run wider than tall.
const GLYPH_W: f64 = 0.02;
const GLYPH_H: f64 = 0.03;
/// Viewport inset in pixels.
const MARGIN: f64 = 24.0;

struct Placement {
    name: String,
    /// Geographic location in radians.
    loc: Point2d,
}

fn main() -> Result<()> {
    env_logger::init();

    let placements = match std::env::args().nth(1) {
        Some(path) => load_placements_csv(Path::new(&path))
            .with_context(|| format!("failed to load placements '{path}'"))?,
        None => sample_placements(),
    };
    info!("loaded {} placements", placements.len());
    if placements.is_empty() {
        anyhow::bail!("no placements loaded; check headers/delimiter");
    }

    let mut overlay = ScreenObject::new();
    for p in &placements {
        overlay.add_poly(marker(p.loc, MARKER_RADIUS));
        overlay.add_label(
            Label::new(p.name.clone(), p.name.len() as f64 * GLYPH_W, GLYPH_H)
                .with_matrix(Matrix3d::translation(p.loc.x, p.loc.y)),
        );
    }

    let raw = overlay.bounding_box();
    info!("bounds in radians: {} .. {}", raw.ll, raw.ur);

    // Move the overlay to the origin, stretch it over the viewport interior,
    // then inset by the margin.
    let span_x = (raw.ur.x - raw.ll.x).max(f64::EPSILON);
    let span_y = (raw.ur.y - raw.ll.y).max(f64::EPSILON);
    let avail_w = WIDTH as f64 - 2.0 * MARGIN;
    let avail_h = HEIGHT as f64 - 2.0 * MARGIN;

    overlay.translate(-raw.ll.x, -raw.ll.y);
    overlay.scale(avail_w / span_x, avail_h / span_y);
    overlay.translate(MARGIN, MARGIN);

    let fitted = overlay.bounding_box();
    println!(
        "{} markers, {} labels on a {}x{} screen",
        overlay.poly_count(),
        overlay.label_count(),
        WIDTH,
        HEIGHT
    );
    println!("screen bounds: {} .. {}", fitted.ll, fitted.ur);
    for i in 0..overlay.label_count() {
        let label = overlay.label(i)?;
        let (p0, _) = label.corners();
        println!("  {:<12} at {}", label.text, p0);
    }

    Ok(())
}

/// Diamond marker polygon centered on `center`.
fn marker(center: Point2d, r: f64) -> Polygon {
    Polygon::from_points(vec![
        center.add(Point2d::new(0.0, r)),
        center.add(Point2d::new(r, 0.0)),
        center.add(Point2d::new(0.0, -r)),
        center.add(Point2d::new(-r, 0.0)),
    ])
}

/// Load name/lon/lat placements from a CSV with flexible headers.
fn load_placements_csv(path: &Path) -> Result<Vec<Placement>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!("headers: {headers:?}");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_name = idx(&["name", "label", "city", "place"]);
    let i_lon = idx(&["lon", "lng", "longitude", "x"]);
    let i_lat = idx(&["lat", "latitude", "y"]);
    if i_lon.is_none() || i_lat.is_none() {
        warn!("could not find lon/lat columns in {headers:?}");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix));
        let parse = |i: Option<usize>| field(i).and_then(|s| s.trim().parse::<f64>().ok());

        let (Some(lon), Some(lat)) = (parse(i_lon), parse(i_lat)) else {
            continue;
        };
        let name = field(i_name).unwrap_or("unnamed").trim().to_string();
        out.push(Placement { name, loc: Point2d::from_degrees(lon, lat) });
    }
    Ok(out)
}

/// Built-in sample when no CSV is given.
fn sample_placements() -> Vec<Placement> {
    [
        ("reykjavik", -21.94, 64.15),
        ("dakar", -17.45, 14.69),
        ("kyiv", 30.52, 50.45),
        ("perth", 115.86, -31.95),
        ("quito", -78.47, -0.18),
    ]
    .into_iter()
    .map(|(name, lon, lat)| Placement {
        name: name.to_string(),
        loc: Point2d::from_degrees(lon, lat),
    })
    .collect()
}
