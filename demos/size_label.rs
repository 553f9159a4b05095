//! Parse a polygon, place its size label on a zoomed canvas and print the
//! text layer as SVG.
//!
//! Run with: RUST_LOG=debug cargo run --example size_label --features tracing -- "10,10 80,10 80,60"

use annocanvas::{BBox, ShapeSizeElement, SvgTextLayer, Viewport, points_to_array, translate_from_svg};
use glam::{DAffine2, dvec2};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "10,10 80,10 80,60 10,60".to_string());
    let points = points_to_array(&input)?;

    let zoom = 1.5;
    let shapes = Viewport::new(dvec2(120.0, 40.0))
        .with_zoom(zoom)
        .map_err(|e| miette::miette!("invalid zoom {}: {}", zoom, e))?;
    let text = SvgTextLayer::new(DAffine2::from_translation(dvec2(120.0, 40.0)))
        .with_class("cvat_canvas_text_layer");

    let bbox = bounding_box(&points);
    let mut label = ShapeSizeElement::new(&shapes, &text);
    label.update(&bbox)?;

    println!("client points: {:?}", translate_from_svg(&shapes, &points));
    tracing::info!(width = bbox.width, height = bbox.height, "size label placed");
    println!("{}", text.to_svg()?);

    label.rm();
    Ok(())
}

fn bounding_box(points: &[f64]) -> BBox {
    let mut min = dvec2(f64::MAX, f64::MAX);
    let mut max = dvec2(f64::MIN, f64::MIN);
    for pair in points.chunks_exact(2) {
        let p = dvec2(pair[0], pair[1]);
        min = min.min(p);
        max = max.max(p);
    }
    if min.x > max.x {
        return BBox::default();
    }
    BBox::new(min.x, min.y, max.x - min.x, max.y - min.y)
}
