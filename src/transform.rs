//! Translation between canvas (local SVG) space and client (viewport) space.
//!
//! Both directions read the surface's screen transformation matrix at call
//! time. Pan and zoom can change between two calls, so nothing is cached.

use glam::{DAffine2, DVec2, dvec2};

use crate::errors::TransformError;
use crate::types::{NumericError, finite};

/// A drawing surface that can report its current local-to-client matrix.
///
/// This is `getScreenCTM()` on an SVG element: translation, scale, rotation
/// and skew folded into one 2D affine transform.
pub trait ScreenCtm {
    fn screen_ctm(&self) -> DAffine2;
}

impl ScreenCtm for DAffine2 {
    fn screen_ctm(&self) -> DAffine2 {
        *self
    }
}

impl<T: ScreenCtm + ?Sized> ScreenCtm for &T {
    fn screen_ctm(&self) -> DAffine2 {
        (**self).screen_ctm()
    }
}

/// Translate a flat coordinate sequence from canvas space to client space.
///
/// An unpaired trailing coordinate is dropped.
pub fn translate_from_svg(surface: &impl ScreenCtm, points: &[f64]) -> Vec<f64> {
    let ctm = surface.screen_ctm();
    warn_if_odd(points, "translate_from_svg");
    apply(&ctm, points)
}

/// Translate a flat coordinate sequence from client space to canvas space.
///
/// Fails when the surface's matrix has no inverse. An unpaired trailing
/// coordinate is dropped, same as [`translate_from_svg`].
pub fn translate_to_svg(
    surface: &impl ScreenCtm,
    points: &[f64],
) -> Result<Vec<f64>, TransformError> {
    let inverse = invert(&surface.screen_ctm())?;
    warn_if_odd(points, "translate_to_svg");
    Ok(apply(&inverse, points))
}

/// Translate a single point from client space to canvas space.
pub fn client_to_canvas(surface: &impl ScreenCtm, point: DVec2) -> Result<DVec2, TransformError> {
    Ok(invert(&surface.screen_ctm())?.transform_point2(point))
}

/// Translate a single point from canvas space to client space.
pub fn canvas_to_client(surface: &impl ScreenCtm, point: DVec2) -> DVec2 {
    surface.screen_ctm().transform_point2(point)
}

fn invert(ctm: &DAffine2) -> Result<DAffine2, TransformError> {
    let determinant = ctm.matrix2.determinant();
    if determinant == 0.0 || !determinant.is_finite() || !ctm.is_finite() {
        crate::log::warn!(determinant, "screen CTM is not invertible");
        return Err(TransformError::NotInvertible { determinant });
    }
    Ok(ctm.inverse())
}

fn apply(m: &DAffine2, points: &[f64]) -> Vec<f64> {
    let mut output = Vec::with_capacity(points.len() & !1);
    for pair in points.chunks_exact(2) {
        let pt = m.transform_point2(dvec2(pair[0], pair[1]));
        output.push(pt.x);
        output.push(pt.y);
    }
    output
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn warn_if_odd(points: &[f64], op: &'static str) {
    if points.len() % 2 != 0 {
        crate::log::warn!(op, len = points.len(), "dropping unpaired trailing coordinate");
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Pan/zoom/rotation state of a canvas placed somewhere on the page.
///
/// The resulting CTM maps a canvas point `p` to
/// `origin + pan + rotate(rotation) * (zoom * p)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Where the canvas's local origin sits in client space before panning
    pub origin: DVec2,
    pub pan: DVec2,
    zoom: f64,
    /// Radians, counter-clockwise in a Y-down client space
    pub rotation: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(DVec2::ZERO)
    }
}

impl Viewport {
    pub fn new(origin: DVec2) -> Self {
        Viewport {
            origin,
            pan: DVec2::ZERO,
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    pub fn with_pan(mut self, pan: DVec2) -> Self {
        self.pan = pan;
        self
    }

    /// Set the zoom factor (rejects NaN, infinite, zero, negative)
    pub fn with_zoom(mut self, zoom: f64) -> Result<Self, NumericError> {
        let zoom = finite(zoom)?;
        if zoom == 0.0 {
            return Err(NumericError::Zero);
        }
        if zoom < 0.0 {
            return Err(NumericError::Negative);
        }
        self.zoom = zoom;
        Ok(self)
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl ScreenCtm for Viewport {
    fn screen_ctm(&self) -> DAffine2 {
        DAffine2::from_translation(self.origin + self.pan)
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_scale(DVec2::splat(self.zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() <= 1e-9 * (1.0 + e.abs()), "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn from_svg_applies_translation_and_scale() {
        let ctm = DAffine2::from_translation(dvec2(100.0, 50.0)) * DAffine2::from_scale(dvec2(2.0, 2.0));
        assert_close(&translate_from_svg(&ctm, &[1.0, 2.0, 3.0, 4.0]), &[102.0, 54.0, 106.0, 58.0]);
    }

    #[test]
    fn to_svg_inverts_translation_and_scale() {
        let ctm = DAffine2::from_translation(dvec2(100.0, 50.0)) * DAffine2::from_scale(dvec2(2.0, 2.0));
        let local = translate_to_svg(&ctm, &[102.0, 54.0, 106.0, 58.0]).unwrap();
        assert_close(&local, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn dom_matrix_layout_matches_from_cols_array() {
        // DOMMatrix(a, b, c, d, e, f): x' = a*x + c*y + e, y' = b*x + d*y + f
        let ctm = DAffine2::from_cols_array(&[1.0, 0.5, 0.25, 1.0, 10.0, 20.0]);
        assert_close(&translate_from_svg(&ctm, &[4.0, 8.0]), &[16.0, 30.0]);
    }

    #[test]
    fn odd_length_drops_trailing_coordinate_in_both_directions() {
        let ctm = DAffine2::from_translation(dvec2(1.0, 1.0));
        assert_close(&translate_from_svg(&ctm, &[0.0, 0.0, 5.0]), &[1.0, 1.0]);
        assert_close(&translate_to_svg(&ctm, &[1.0, 1.0, 5.0]).unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(translate_from_svg(&DAffine2::IDENTITY, &[]).is_empty());
        assert!(translate_to_svg(&DAffine2::IDENTITY, &[]).unwrap().is_empty());
    }

    #[test]
    fn singular_ctm_is_rejected() {
        let ctm = DAffine2::from_scale(dvec2(0.0, 1.0));
        assert_eq!(
            translate_to_svg(&ctm, &[1.0, 1.0]),
            Err(TransformError::NotInvertible { determinant: 0.0 })
        );
        assert!(client_to_canvas(&ctm, DVec2::ONE).is_err());
    }

    #[test]
    fn ctm_is_read_on_every_call() {
        use std::cell::Cell;

        struct Panning(Cell<f64>);
        impl ScreenCtm for Panning {
            fn screen_ctm(&self) -> DAffine2 {
                DAffine2::from_translation(dvec2(self.0.get(), 0.0))
            }
        }

        let surface = Panning(Cell::new(0.0));
        assert_close(&translate_from_svg(&surface, &[1.0, 1.0]), &[1.0, 1.0]);
        surface.0.set(10.0);
        assert_close(&translate_from_svg(&surface, &[1.0, 1.0]), &[11.0, 1.0]);
    }

    #[test]
    fn viewport_composes_origin_pan_zoom() {
        let vp = Viewport::new(dvec2(8.0, 16.0))
            .with_pan(dvec2(-3.0, 4.0))
            .with_zoom(2.0)
            .unwrap();
        assert_close(&translate_from_svg(&vp, &[5.0, 5.0]), &[15.0, 30.0]);
        let p = client_to_canvas(&vp, dvec2(15.0, 30.0)).unwrap();
        assert_close(&[p.x, p.y], &[5.0, 5.0]);
    }

    #[test]
    fn viewport_rotation_quarter_turn() {
        let vp = Viewport::default().with_rotation(std::f64::consts::FRAC_PI_2);
        let p = canvas_to_client(&vp, dvec2(1.0, 0.0));
        assert_close(&[p.x, p.y], &[0.0, 1.0]);
    }

    #[test]
    fn viewport_rejects_bad_zoom() {
        assert_eq!(Viewport::default().with_zoom(0.0), Err(NumericError::Zero));
        assert_eq!(Viewport::default().with_zoom(-1.0), Err(NumericError::Negative));
        assert_eq!(Viewport::default().with_zoom(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Viewport::default().with_zoom(f64::INFINITY), Err(NumericError::Infinite));
    }

    proptest! {
        #[test]
        fn round_trip_through_client_space(
            m in prop::array::uniform6(-10.0f64..10.0),
            coords in prop::collection::vec(-1.0e4f64..1.0e4, 0..16),
        ) {
            let ctm = DAffine2::from_cols_array(&m);
            prop_assume!(ctm.matrix2.determinant().abs() > 0.1);
            let even = &coords[..coords.len() & !1];

            let client = translate_from_svg(&ctm, even);
            let back = translate_to_svg(&ctm, &client).unwrap();

            prop_assert_eq!(back.len(), even.len());
            for (b, e) in back.iter().zip(even) {
                prop_assert!((b - e).abs() <= 1e-6 * (1.0 + e.abs()), "{} vs {}", b, e);
            }
        }
    }
}
