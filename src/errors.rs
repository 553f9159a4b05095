//! Error types with rich diagnostics using miette
//!
//! Point strings come from SVG attributes and engine payloads, so parse errors
//! carry the source string and a span on the bad token.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Point Errors
// ============================================================================

/// Errors from flat-sequence and point-string conversions
#[derive(Error, Diagnostic, Debug)]
pub enum PointsError {
    #[error("points array must have length multiple of two, got {len}")]
    #[diagnostic(
        code(annocanvas::points::odd_length),
        help("every x coordinate needs a matching y coordinate")
    )]
    OddLength { len: usize },

    #[error("invalid number in points string: {token:?}")]
    #[diagnostic(code(annocanvas::points::invalid_number))]
    InvalidNumber {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },
}

impl PointsError {
    /// Build an `InvalidNumber` pointing at `token` inside `source`.
    pub(crate) fn invalid_number(source: &str, token: &str, offset: usize) -> Self {
        PointsError::InvalidNumber {
            token: token.to_string(),
            src: NamedSource::new("<points>", source.to_string()),
            span: (offset, token.len()).into(),
        }
    }
}

// ============================================================================
// Transform Errors
// ============================================================================

/// Errors from client/canvas coordinate translation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("screen transformation matrix is not invertible (determinant {determinant})")]
    #[diagnostic(
        code(annocanvas::transform::not_invertible),
        help("the surface is probably hidden or scaled to zero")
    )]
    NotInvertible { determinant: f64 },
}

// ============================================================================
// Serialization Errors
// ============================================================================

/// Errors while writing a text layer out as SVG markup
#[derive(Error, Diagnostic, Debug)]
pub enum SvgError {
    #[error("failed to write SVG: {0}")]
    #[diagnostic(code(annocanvas::svg::write))]
    Write(#[from] std::io::Error),

    #[error("SVG output is not UTF-8: {0}")]
    #[diagnostic(code(annocanvas::svg::utf8))]
    Utf8(#[from] std::string::FromUtf8Error),
}
