//! The 64-bit index representation: bit field accessors, digit rotations,
//! and conversion between indexes and face-local lattice coordinates.

pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  _base_cell_is_cw_offset, _face_ijk_to_base_cell, _face_ijk_to_base_cell_ccwrot60, _is_base_cell_pentagon,
  BASE_CELL_DATA, INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD,
};
use crate::constants::{
  H3_BC_MASK, H3_BC_OFFSET, H3_CELL_MODE, H3_DIGIT_MASK, H3_HIGH_BIT_MASK, H3_INIT, H3_MODE_MASK, H3_MODE_OFFSET,
  H3_PER_DIGIT_OFFSET, H3_RESERVED_MASK, H3_RESERVED_OFFSET, H3_RES_MASK, H3_RES_OFFSET, MAX_H3_RES, NUM_BASE_CELLS,
};
use crate::coords::face_ijk::{_adjust_overage_class_ii, Overage};
use crate::coords::ijk::{
  _down_ap7, _down_ap7r, _ijk_normalize, _ijk_sub, _neighbor, _rotate60_ccw, _rotate60_cw, _unit_ijk_to_digit,
  _up_ap7, _up_ap7r,
};
use crate::types::{Direction, FaceIJK, H3Error, H3Index, H3_NULL};

/// Mode bits of the index.
#[inline]
#[must_use]
pub(crate) const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

#[inline]
pub(crate) fn set_mode(h: &mut H3Index, mode: u8) {
  h.0 = (h.0 & !H3_MODE_MASK) | ((mode as u64) << H3_MODE_OFFSET);
}

/// Resolution of the index (0-15).
#[inline]
#[must_use]
pub(crate) const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

#[inline]
pub(crate) fn set_resolution(h: &mut H3Index, res: i32) {
  h.0 = (h.0 & !H3_RES_MASK) | ((res as u64) << H3_RES_OFFSET);
}

/// Base cell number of the index.
#[inline]
#[must_use]
pub(crate) const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

#[inline]
pub(crate) fn set_base_cell(h: &mut H3Index, base_cell: i32) {
  h.0 = (h.0 & !H3_BC_MASK) | ((base_cell as u64) << H3_BC_OFFSET);
}

/// Refinement digit for resolution `res` (1-based).
#[inline]
#[must_use]
pub(crate) fn get_index_digit(h: H3Index, res: i32) -> Direction {
  Direction::from_digit(((h.0 >> ((MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET)) & H3_DIGIT_MASK) as u8)
}

#[inline]
pub(crate) fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = (MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET;
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Reserved bits; zero for cells, the edge direction for edge indexes.
#[inline]
#[must_use]
pub(crate) const fn get_reserved_bits(h: H3Index) -> u8 {
  ((h.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

#[inline]
pub(crate) fn set_reserved_bits(h: &mut H3Index, v: u8) {
  h.0 = (h.0 & !H3_RESERVED_MASK) | ((v as u64) << H3_RESERVED_OFFSET);
}

/// The single reserved high bit; always zero on valid indexes.
#[inline]
#[must_use]
pub(crate) const fn get_high_bit(h: H3Index) -> u8 {
  ((h.0 & H3_HIGH_BIT_MASK) >> 63) as u8
}

/// Initializes a cell index at the given resolution and base cell, with
/// every resolution digit set to `init_digit`.
pub(crate) fn set_h3_index(h: &mut H3Index, res: i32, base_cell: i32, init_digit: Direction) {
  h.0 = H3_INIT;
  set_mode(h, H3_CELL_MODE);
  set_resolution(h, res);
  set_base_cell(h, base_cell);
  for r in 1..=res {
    set_index_digit(h, r, init_digit);
  }
}

/// Whether a resolution is Class III. Odd resolutions are Class III, even
/// are Class II.
#[inline]
#[must_use]
pub(crate) const fn is_resolution_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// The coarsest non-center digit of the index, or `Center` if all digits
/// are centered.
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  for r in 1..=get_resolution(h) {
    let digit = get_index_digit(h, r);
    if digit != Direction::Center {
      return digit;
    }
  }
  Direction::Center
}

/// Rotates the index 60 degrees counter-clockwise.
pub(crate) fn _h3_rotate60_ccw(mut h: H3Index) -> H3Index {
  for r in 1..=get_resolution(h) {
    let digit = _rotate60_ccw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Rotates the index 60 degrees clockwise.
pub(crate) fn _h3_rotate60_cw(mut h: H3Index) -> H3Index {
  for r in 1..=get_resolution(h) {
    let digit = _rotate60_cw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Rotates the index 60 degrees counter-clockwise about a pentagonal
/// center, skipping the deleted K subsequence.
pub(crate) fn _h3_rotate_pent60_ccw(mut h: H3Index) -> H3Index {
  let res = get_resolution(h);
  let mut found_first_non_zero = false;
  for r in 1..=res {
    let digit = _rotate60_ccw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);

    if !found_first_non_zero && get_index_digit(h, r) != Direction::Center {
      found_first_non_zero = true;
      if _h3_leading_non_zero_digit(h) == Direction::KAxes {
        h = _h3_rotate_pent60_ccw(h);
      }
    }
  }
  h
}

/// Encodes the face-local lattice coordinate of a cell center at `res` into
/// a cell index, or `H3_NULL` when the coordinate cannot be encoded.
pub(crate) fn _face_ijk_to_h3(fijk: &FaceIJK, res: i32) -> H3Index {
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, res);

  if res == 0 {
    if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
      // out of range input
      return H3_NULL;
    }
    let base_cell = _face_ijk_to_base_cell(fijk);
    if base_cell == INVALID_BASE_CELL {
      return H3_NULL;
    }
    set_base_cell(&mut h, base_cell);
    return h;
  }

  // Build the index from finest resolution up. At each level the appropriate
  // digit is the offset of the cell from the center of its parent, expressed
  // on the child grid.
  let mut fijk_bc = *fijk;
  for r in (1..=res).rev() {
    let last_ijk = fijk_bc.coord;
    let mut last_center;
    if is_resolution_class_iii(r) {
      _up_ap7(&mut fijk_bc.coord);
      last_center = fijk_bc.coord;
      _down_ap7(&mut last_center);
    } else {
      _up_ap7r(&mut fijk_bc.coord);
      last_center = fijk_bc.coord;
      _down_ap7r(&mut last_center);
    }

    let mut diff = _ijk_sub(&last_ijk, &last_center);
    _ijk_normalize(&mut diff);
    set_index_digit(&mut h, r, _unit_ijk_to_digit(&diff));
  }

  // fijk_bc now holds the base cell coordinates
  if fijk_bc.coord.i > MAX_FACE_COORD || fijk_bc.coord.j > MAX_FACE_COORD || fijk_bc.coord.k > MAX_FACE_COORD {
    return H3_NULL;
  }
  let base_cell = _face_ijk_to_base_cell(&fijk_bc);
  if base_cell == INVALID_BASE_CELL {
    return H3_NULL;
  }
  set_base_cell(&mut h, base_cell);

  // rotate into the base cell's orientation
  let num_rots = _face_ijk_to_base_cell_ccwrot60(&fijk_bc);
  if num_rots == INVALID_ROTATIONS {
    return H3_NULL;
  }

  if _is_base_cell_pentagon(base_cell) {
    // force rotation out of the deleted K subsequence
    if _h3_leading_non_zero_digit(h) == Direction::KAxes {
      if _base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        h = _h3_rotate60_cw(h);
      } else {
        h = _h3_rotate60_ccw(h);
      }
    }
    for _ in 0..num_rots {
      h = _h3_rotate_pent60_ccw(h);
    }
  } else {
    for _ in 0..num_rots {
      h = _h3_rotate60_ccw(h);
    }
  }

  h
}

/// Applies the index's digits to a face coordinate seeded with its base
/// cell's home position. Returns whether the result might lie outside the
/// seed face.
pub(crate) fn _h3_to_face_ijk_with_initialized_fijk(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let res = get_resolution(h);
  let base_cell = get_base_cell(h);

  // center base cells at res 0 stay on their own face
  let mut possible_overage = true;
  if !_is_base_cell_pentagon(base_cell)
    && (res == 0 || (fijk.coord.i == 0 && fijk.coord.j == 0 && fijk.coord.k == 0))
  {
    possible_overage = false;
  }

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      _down_ap7(&mut fijk.coord);
    } else {
      _down_ap7r(&mut fijk.coord);
    }
    _neighbor(&mut fijk.coord, get_index_digit(h, r));
  }

  possible_overage
}

/// Decodes a cell index into its canonical face-local lattice coordinate.
pub(crate) fn _h3_to_face_ijk(h: H3Index) -> Result<FaceIJK, H3Error> {
  let base_cell = get_base_cell(h);
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return Err(H3Error::CellInvalid);
  }

  // adjust for the pentagonal missing sequence; all digits in the IK
  // subsequence get rotated out of it
  let mut h = h;
  if _is_base_cell_pentagon(base_cell) && _h3_leading_non_zero_digit(h) == Direction::IkAxes {
    h = _h3_rotate60_cw(h);
  }

  let mut fijk = BASE_CELL_DATA[base_cell as usize].home_fijk;
  if !_h3_to_face_ijk_with_initialized_fijk(h, &mut fijk) {
    return Ok(fijk);
  }

  // the cell may be on a different face; adjust in the Class II grid
  let orig_ijk = fijk.coord;

  let res = get_resolution(h);
  let mut adj_res = res;
  if is_resolution_class_iii(res) {
    _down_ap7r(&mut fijk.coord);
    adj_res += 1;
  }

  // a pentagon cell with a leading digit 4 needs special handling
  let pent_leading_4 = _is_base_cell_pentagon(base_cell) && _h3_leading_non_zero_digit(h) == Direction::IAxes;

  let mut overage = _adjust_overage_class_ii(&mut fijk, adj_res, pent_leading_4, false);
  if overage != Overage::NoOverage {
    // pentagon base cells can cross a second face edge
    if _is_base_cell_pentagon(base_cell) {
      while overage == Overage::NewFace {
        overage = _adjust_overage_class_ii(&mut fijk, adj_res, false, false);
      }
    }

    if adj_res != res {
      _up_ap7r(&mut fijk.coord);
    }
  } else if adj_res != res {
    fijk.coord = orig_ijk;
  }

  Ok(fijk)
}
