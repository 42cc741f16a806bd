use crate::types::Vec2d;

/// Magnitude of a 2D vector.
#[inline]
#[must_use]
pub(crate) fn _v2d_mag(v: &Vec2d) -> f64 {
  v.x.hypot(v.y)
}

/// Intersection point of the line through `p0`/`p1` with the line through
/// `p2`/`p3`. Callers guarantee the lines are not parallel.
#[inline]
#[must_use]
pub(crate) fn _v2d_intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
  let s1 = Vec2d {
    x: p1.x - p0.x,
    y: p1.y - p0.y,
  };
  let s2 = Vec2d {
    x: p3.x - p2.x,
    y: p3.y - p2.y,
  };

  let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);

  Vec2d {
    x: p0.x + t * s1.x,
    y: p0.y + t * s1.y,
  }
}

/// Whether two 2D vectors are equal to within machine precision.
#[inline]
#[must_use]
pub(crate) fn _v2d_almost_equals(v1: &Vec2d, v2: &Vec2d) -> bool {
  (v1.x - v2.x).abs() < f64::EPSILON && (v1.y - v2.y).abs() < f64::EPSILON
}
