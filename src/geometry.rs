//! Line intersection and clamping

use glam::dvec2;

use crate::types::Point;

/// An infinite line in implicit form `a*x + b*y = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// The line through `p1` and `p2`. Coincident points give `a = b = 0`.
    pub fn through(p1: Point, p2: Point) -> Self {
        let a = p1.y - p2.y;
        let b = p2.x - p1.x;
        let c = b * p1.y + a * p1.x;
        Line { a, b, c }
    }

    /// Where this line meets `other`, or `None` if they are parallel or
    /// coincident (zero determinant).
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let d = self.a * other.b - self.b * other.a;
        if d == 0.0 {
            return None;
        }
        let dx = self.c * other.b - self.b * other.c;
        let dy = self.a * other.c - self.c * other.a;
        Some(dvec2(dx / d, dy / d))
    }
}

/// Intersection of the infinite line through `p1`,`p2` with the one through
/// `p3`,`p4`. The point need not lie on either segment.
pub fn intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    Line::through(p1, p2).intersect(&Line::through(p3, p4))
}

/// Constrain `x` to `[min, max]`.
///
/// The floor is applied before the ceiling, so inverted bounds (`min > max`)
/// always yield `max`. Unlike `f64::clamp` this never panics.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_cross_at_center() {
        let p = intersection(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(0.0, 1.0), dvec2(1.0, 0.0));
        assert_eq!(p, Some(dvec2(0.5, 0.5)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let p = intersection(dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0), dvec2(1.0, 1.0));
        assert_eq!(p, None);
    }

    #[test]
    fn coincident_lines_do_not_intersect() {
        let p = intersection(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 2.0), dvec2(3.0, 3.0));
        assert_eq!(p, None);
    }

    #[test]
    fn intersection_outside_segments() {
        // Segments stop short, the lines still meet at (2, 0)
        let p = intersection(dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(2.0, 1.0), dvec2(2.0, 2.0));
        assert_eq!(p, Some(dvec2(2.0, 0.0)));
    }

    #[test]
    fn degenerate_segment_gives_none() {
        let p = intersection(dvec2(1.0, 1.0), dvec2(1.0, 1.0), dvec2(0.0, 1.0), dvec2(1.0, 0.0));
        assert_eq!(p, None);
    }

    #[test]
    fn line_coefficients() {
        let l = Line::through(dvec2(0.0, 1.0), dvec2(1.0, 0.0));
        assert_eq!(l, Line { a: 1.0, b: 1.0, c: 1.0 });
    }

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_inverted_bounds_yields_max() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(-100.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(100.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn clamp_nan_falls_to_floor() {
        assert_eq!(clamp(f64::NAN, 0.0, 10.0), 0.0);
    }
}
