//! Point serialization: flat coordinate sequences, SVG `points` strings and
//! lists of pairs.
//!
//! A flat sequence `[x0, y0, x1, y1, ...]` is what crosses the DOM boundary;
//! the `points` attribute string is `"x0,y0 x1,y1 ..."`.

use crate::errors::PointsError;
use crate::types::Point;
use glam::dvec2;

/// Format a coordinate for an SVG attribute. Negative zero prints as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

/// Serialize a flat sequence to an SVG `points` attribute value.
///
/// A comma goes before each y and a space before each x except the first:
/// `[1, 2, 3, 4]` becomes `"1,2 3,4"`.
pub fn points_to_string(points: &[f64]) -> String {
    let mut out = String::with_capacity(points.len() * 4);
    for (idx, &val) in points.iter().enumerate() {
        if idx % 2 == 1 {
            out.push(',');
        } else if idx > 0 {
            out.push(' ');
        }
        out.push_str(&fmt_num(val));
    }
    out
}

/// Parse an SVG `points` string into a flat sequence.
///
/// Tokens are separated by any run of commas and whitespace. A token that is
/// not a number fails the whole parse with a diagnostic pointing at it.
pub fn points_to_array(points: &str) -> Result<Vec<f64>, PointsError> {
    let mut out = Vec::new();
    for (offset, token) in tokens(points) {
        match token.parse::<f64>() {
            Ok(v) => out.push(v),
            Err(_) => return Err(PointsError::invalid_number(points, token, offset)),
        }
    }
    Ok(out)
}

/// Yield `(byte offset, token)` for each maximal run of non-separators.
fn tokens(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let is_sep = |c: char| c == ',' || c.is_whitespace();
    let mut rest = 0;
    std::iter::from_fn(move || {
        let tail = &s[rest..];
        let start = rest + tail.find(|c: char| !is_sep(c))?;
        let len = s[start..].find(is_sep).unwrap_or(s.len() - start);
        rest = start + len;
        Some((start, &s[start..start + len]))
    })
}

/// Points to `[x, y]` pairs, same order.
pub fn convert_to_array(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// `[x, y]` pairs to points, same order.
pub fn convert_array_to_objects(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().map(|&[x, y]| dvec2(x, y)).collect()
}

/// Split a flat sequence into pairs of `[x, x]`.
///
/// Each x coordinate is paired with itself and the y coordinates are
/// discarded. Existing consumers rely on this layout, so it stays; use
/// [`convert_array_to_pairs`] for ordinary `[x, y]` pairs.
pub fn convert_array_to_double_array(points: &[f64]) -> Result<Vec<[f64; 2]>, PointsError> {
    check_even(points)?;
    Ok(points.chunks_exact(2).map(|c| [c[0], c[0]]).collect())
}

/// Split a flat sequence into `[x, y]` pairs.
pub fn convert_array_to_pairs(points: &[f64]) -> Result<Vec<[f64; 2]>, PointsError> {
    check_even(points)?;
    Ok(points.chunks_exact(2).map(|c| [c[0], c[1]]).collect())
}

/// Flatten `[x, y]` pairs back into a flat sequence.
pub fn pairs_to_flat(pairs: &[[f64; 2]]) -> Vec<f64> {
    pairs.iter().flatten().copied().collect()
}

fn check_even(points: &[f64]) -> Result<(), PointsError> {
    if points.len() % 2 != 0 {
        return Err(PointsError::OddLength { len: points.len() });
    }
    Ok(())
}
