//! Geometry helpers for an SVG annotation canvas.
//!
//! - [`transform`]: client ⇄ canvas coordinate translation through a
//!   surface's screen matrix
//! - [`points`]: SVG `points` strings, flat sequences and pair lists
//! - [`geometry`]: infinite-line intersection and clamping
//! - [`overlay`]: the transient `<width>x<height>` label shown while a shape
//!   is drawn or resized
//!
//! ```
//! use annocanvas::{intersection, points_to_array, points_to_string};
//! use glam::dvec2;
//!
//! let pts = points_to_array("0,0 10,0 10,5").unwrap();
//! assert_eq!(points_to_string(&pts), "0,0 10,0 10,5");
//!
//! let hit = intersection(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(0.0, 1.0), dvec2(1.0, 0.0));
//! assert_eq!(hit, Some(dvec2(0.5, 0.5)));
//! ```

pub mod consts;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod overlay;
pub mod points;
pub mod transform;
pub mod types;

pub use errors::{PointsError, SvgError, TransformError};
pub use geometry::{Line, clamp, intersection};
pub use overlay::{
    ShapeSizeElement, Shape, SvgTextLayer, TextLayer, TextStyle, display_shape_size,
};
pub use points::{
    convert_array_to_double_array, convert_array_to_objects, convert_array_to_pairs,
    convert_to_array, pairs_to_flat, points_to_array, points_to_string,
};
pub use transform::{ScreenCtm, Viewport, translate_from_svg, translate_to_svg};
pub use types::{BBox, CornerBox, NumericError, Point};
