//! Shared layout constants for on-canvas text

/// Gap between a shape's bounding-box origin and its size label, in text-layer units.
pub const TEXT_MARGIN: f64 = 10.0;
pub const TEXT_CLASS: &str = "cvat_canvas_text";
pub const TEXT_FILL: &str = "white";
pub const TEXT_WEIGHT: &str = "bolder";
/// Decimal places in the `<width>x<height>` label.
pub const SIZE_PRECISION: usize = 1;
