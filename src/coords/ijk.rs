//! Operations on IJK+ lattice coordinates: normalization, neighbor steps,
//! rotations, and the aperture-3/aperture-7 substrate transforms.

use crate::constants::{M_ONESEVENTH, M_RSIN60, M_SIN60};
use crate::types::{CoordIJK, Direction, Vec2d};

/// Unit vectors for each of the 7 aperture positions.
#[rustfmt::skip]
pub(crate) static UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 }, // Center
  CoordIJK { i: 0, j: 0, k: 1 }, // KAxes
  CoordIJK { i: 0, j: 1, k: 0 }, // JAxes
  CoordIJK { i: 0, j: 1, k: 1 }, // JkAxes
  CoordIJK { i: 1, j: 0, k: 0 }, // IAxes
  CoordIJK { i: 1, j: 0, k: 1 }, // IkAxes
  CoordIJK { i: 1, j: 1, k: 0 }, // IjAxes
];

/// Componentwise sum of two coordinates.
#[inline]
#[must_use]
pub(crate) fn _ijk_add(a: &CoordIJK, b: &CoordIJK) -> CoordIJK {
  CoordIJK {
    i: a.i + b.i,
    j: a.j + b.j,
    k: a.k + b.k,
  }
}

/// Componentwise difference of two coordinates.
#[inline]
#[must_use]
pub(crate) fn _ijk_sub(a: &CoordIJK, b: &CoordIJK) -> CoordIJK {
  CoordIJK {
    i: a.i - b.i,
    j: a.j - b.j,
    k: a.k - b.k,
  }
}

/// Uniformly scales a coordinate in place.
#[inline]
pub(crate) fn _ijk_scale(c: &mut CoordIJK, factor: i32) {
  c.i *= factor;
  c.j *= factor;
  c.k *= factor;
}

/// Normalizes in place so every component is non-negative and at least one
/// is zero.
pub(crate) fn _ijk_normalize(c: &mut CoordIJK) {
  if c.i < 0 {
    c.j -= c.i;
    c.k -= c.i;
    c.i = 0;
  }
  if c.j < 0 {
    c.i -= c.j;
    c.k -= c.j;
    c.j = 0;
  }
  if c.k < 0 {
    c.i -= c.k;
    c.j -= c.k;
    c.k = 0;
  }

  let min = c.i.min(c.j).min(c.k);
  if min > 0 {
    c.i -= min;
    c.j -= min;
    c.k -= min;
  }
}

/// The digit corresponding to a unit vector (or the zero vector), after
/// normalization. `InvalidDigit` if the coordinate is not a unit vector.
#[must_use]
pub(crate) fn _unit_ijk_to_digit(ijk: &CoordIJK) -> Direction {
  let mut c = *ijk;
  _ijk_normalize(&mut c);
  for (digit, unit) in UNIT_VECS.iter().enumerate() {
    if c == *unit {
      return Direction::from_digit(digit as u8);
    }
  }
  Direction::InvalidDigit
}

/// Steps the coordinate one cell in the given direction, in place.
#[inline]
pub(crate) fn _neighbor(ijk: &mut CoordIJK, digit: Direction) {
  if digit != Direction::Center && digit != Direction::InvalidDigit {
    *ijk = _ijk_add(ijk, &UNIT_VECS[digit as usize]);
    _ijk_normalize(ijk);
  }
}

/// Quantizes a planar cartesian point into the containing cell's IJK+
/// coordinates.
pub(crate) fn _hex2d_to_coord_ijk(v: &Vec2d) -> CoordIJK {
  let mut h = CoordIJK { i: 0, j: 0, k: 0 };

  let a1 = v.x.abs();
  let a2 = v.y.abs();

  // reverse the skewed-axes conversion
  let x2 = a2 * M_RSIN60;
  let x1 = a1 + x2 / 2.0;

  let m1 = x1 as i32;
  let m2 = x2 as i32;

  let r1 = x1 - f64::from(m1);
  let r2 = x2 - f64::from(m2);

  if r1 < 0.5 {
    if r1 < 1.0 / 3.0 {
      h.i = m1;
      h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
    } else {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
    }
  } else if r1 < 2.0 / 3.0 {
    h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
    h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
  } else {
    h.i = m1 + 1;
    h.j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
  }

  // fold across the axes if necessary
  if v.x < 0.0 {
    if (h.j % 2) == 0 {
      let axis_i = h.j / 2;
      let diff = h.i - axis_i;
      h.i -= 2 * diff;
    } else {
      let axis_i = (h.j + 1) / 2;
      let diff = h.i - axis_i;
      h.i -= 2 * diff + 1;
    }
  }

  if v.y < 0.0 {
    h.i -= (2 * h.j + 1) / 2;
    h.j = -h.j;
  }

  _ijk_normalize(&mut h);
  h
}

/// Center point of a cell in planar cartesian coordinates.
#[inline]
#[must_use]
pub(crate) fn _ijk_to_hex2d(h: &CoordIJK) -> Vec2d {
  let i = h.i - h.k;
  let j = h.j - h.k;
  Vec2d {
    x: f64::from(i) - 0.5 * f64::from(j),
    y: f64::from(j) * M_SIN60,
  }
}

/// Parent coordinates in the counter-clockwise aperture 7 grid (Class III),
/// in place.
pub(crate) fn _up_ap7(ijk: &mut CoordIJK) {
  let i = ijk.i - ijk.k;
  let j = ijk.j - ijk.k;

  ijk.i = (f64::from(3 * i - j) * M_ONESEVENTH).round() as i32;
  ijk.j = (f64::from(i + 2 * j) * M_ONESEVENTH).round() as i32;
  ijk.k = 0;
  _ijk_normalize(ijk);
}

/// Parent coordinates in the clockwise aperture 7 grid (Class II), in place.
pub(crate) fn _up_ap7r(ijk: &mut CoordIJK) {
  let i = ijk.i - ijk.k;
  let j = ijk.j - ijk.k;

  ijk.i = (f64::from(2 * i + j) * M_ONESEVENTH).round() as i32;
  ijk.j = (f64::from(3 * j - i) * M_ONESEVENTH).round() as i32;
  ijk.k = 0;
  _ijk_normalize(ijk);
}

/// Same-center coordinates in the next finer counter-clockwise aperture 7
/// grid (Class III), in place.
pub(crate) fn _down_ap7(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = 3 * i + j;
  ijk.j = 3 * j + k;
  ijk.k = i + 3 * k;
  _ijk_normalize(ijk);
}

/// Same-center coordinates in the next finer clockwise aperture 7 grid
/// (Class II), in place.
pub(crate) fn _down_ap7r(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = 3 * i + k;
  ijk.j = i + 3 * j;
  ijk.k = j + 3 * k;
  _ijk_normalize(ijk);
}

/// Same-center coordinates in the next finer counter-clockwise aperture 3
/// grid, in place.
pub(crate) fn _down_ap3(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = 2 * i + j;
  ijk.j = 2 * j + k;
  ijk.k = i + 2 * k;
  _ijk_normalize(ijk);
}

/// Same-center coordinates in the next finer clockwise aperture 3 grid, in
/// place.
pub(crate) fn _down_ap3r(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = 2 * i + k;
  ijk.j = i + 2 * j;
  ijk.k = j + 2 * k;
  _ijk_normalize(ijk);
}

/// Rotates the coordinate 60 degrees counter-clockwise, in place.
pub(crate) fn _ijk_rotate60_ccw(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = i + k;
  ijk.j = i + j;
  ijk.k = j + k;
  _ijk_normalize(ijk);
}

/// Rotates the coordinate 60 degrees clockwise, in place.
pub(crate) fn _ijk_rotate60_cw(ijk: &mut CoordIJK) {
  let (i, j, k) = (ijk.i, ijk.j, ijk.k);
  ijk.i = i + j;
  ijk.j = j + k;
  ijk.k = i + k;
  _ijk_normalize(ijk);
}

/// Rotates a digit 60 degrees counter-clockwise.
#[inline]
#[must_use]
pub(crate) fn _rotate60_ccw(digit: Direction) -> Direction {
  use Direction::*;
  match digit {
    KAxes => IkAxes,
    IkAxes => IAxes,
    IAxes => IjAxes,
    IjAxes => JAxes,
    JAxes => JkAxes,
    JkAxes => KAxes,
    other => other,
  }
}

/// Rotates a digit 60 degrees clockwise.
#[inline]
#[must_use]
pub(crate) fn _rotate60_cw(digit: Direction) -> Direction {
  use Direction::*;
  match digit {
    KAxes => JkAxes,
    JkAxes => JAxes,
    JAxes => IjAxes,
    IjAxes => IAxes,
    IAxes => IkAxes,
    IkAxes => KAxes,
    other => other,
  }
}
