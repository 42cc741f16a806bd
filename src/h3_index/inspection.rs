//! Index validity and classification predicates.

use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::{H3_CELL_MODE, MAX_H3_RES, NUM_BASE_CELLS};
use crate::h3_index::{
  _h3_leading_non_zero_digit, get_base_cell, get_high_bit, get_index_digit, get_mode, get_reserved_bits,
  get_resolution, is_resolution_class_iii,
};
use crate::types::{Direction, H3Index};

/// Validates a cell index: mode, reserved bits, base cell, digit range, the
/// unused-digit sentinel, and the pentagon deleted-K rule.
#[must_use]
pub fn h3_is_valid(h: H3Index) -> bool {
  if get_high_bit(h) != 0 {
    return false;
  }
  if get_mode(h) != H3_CELL_MODE {
    return false;
  }
  if get_reserved_bits(h) != 0 {
    return false;
  }

  let base_cell = get_base_cell(h);
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = get_resolution(h);
  if !(0..=MAX_H3_RES).contains(&res) {
    return false;
  }

  let mut found_first_non_zero = false;
  for r in 1..=res {
    let digit = get_index_digit(h, r);
    if digit == Direction::InvalidDigit {
      return false;
    }
    if !found_first_non_zero && digit != Direction::Center {
      found_first_non_zero = true;
      if digit == Direction::KAxes && _is_base_cell_pentagon(base_cell) {
        // the deleted K subsequence of a pentagon
        return false;
      }
    }
  }
  for r in (res + 1)..=MAX_H3_RES {
    if get_index_digit(h, r) != Direction::InvalidDigit {
      return false;
    }
  }

  true
}

/// Whether the cell is one of the 12 pentagons at its resolution.
#[must_use]
pub fn h3_is_pentagon(h: H3Index) -> bool {
  _is_base_cell_pentagon(get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}

/// Resolution of the index.
#[must_use]
pub fn h3_get_resolution(h: H3Index) -> i32 {
  get_resolution(h)
}

/// Base cell number of the index.
#[must_use]
pub fn h3_get_base_cell(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Whether the cell's resolution is Class III.
#[must_use]
pub fn h3_is_res_class_iii(h: H3Index) -> bool {
  is_resolution_class_iii(get_resolution(h))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::H3_UNIEDGE_MODE;
  use crate::h3_index::{set_h3_index, set_index_digit, set_mode, set_reserved_bits};
  use crate::types::H3_NULL;

  #[test]
  fn test_h3_is_valid_basic() {
    assert!(!h3_is_valid(H3_NULL), "null index is invalid");

    let mut h = H3Index::default();
    set_h3_index(&mut h, 5, 30, Direction::Center);
    assert!(h3_is_valid(h));

    let mut bad_mode = h;
    set_mode(&mut bad_mode, H3_UNIEDGE_MODE);
    assert!(!h3_is_valid(bad_mode), "edge mode is not a valid cell");

    let mut bad_reserved = h;
    set_reserved_bits(&mut bad_reserved, 3);
    assert!(!h3_is_valid(bad_reserved), "reserved bits must be zero");

    let mut bad_high = h;
    bad_high.0 |= 1 << 63;
    assert!(!h3_is_valid(bad_high), "high bit must be zero");
  }

  #[test]
  fn test_h3_is_valid_base_cell_range() {
    for bc in 0..NUM_BASE_CELLS {
      let mut h = H3Index::default();
      set_h3_index(&mut h, 0, bc, Direction::Center);
      assert!(h3_is_valid(h), "base cell {} is valid", bc);
    }
    let mut h = H3Index::default();
    set_h3_index(&mut h, 0, 122, Direction::Center);
    assert!(!h3_is_valid(h), "base cell 122 is out of range");
  }

  #[test]
  fn test_h3_is_valid_digits() {
    let mut h = H3Index::default();
    set_h3_index(&mut h, 1, 0, Direction::Center);
    // an in-range digit marked unused
    set_index_digit(&mut h, 1, Direction::InvalidDigit);
    assert!(!h3_is_valid(h), "digit 7 within resolution is invalid");

    let mut h = H3Index::default();
    set_h3_index(&mut h, 1, 0, Direction::Center);
    set_index_digit(&mut h, 2, Direction::Center);
    assert!(!h3_is_valid(h), "digit past resolution must be 7");
  }

  #[test]
  fn test_h3_is_valid_deleted_subsequence() {
    // K as the leading digit below a pentagon is the deleted subsequence
    let mut h = H3Index::default();
    set_h3_index(&mut h, 1, 4, Direction::KAxes);
    assert!(!h3_is_valid(h), "leading K under pentagon base cell");

    let mut h = H3Index::default();
    set_h3_index(&mut h, 1, 0, Direction::KAxes);
    assert!(h3_is_valid(h), "leading K under hexagon base cell");
  }

  #[test]
  fn test_h3_is_pentagon() {
    let mut pent = H3Index::default();
    set_h3_index(&mut pent, 2, 4, Direction::Center);
    assert!(h3_is_pentagon(pent));

    let mut hex = H3Index::default();
    set_h3_index(&mut hex, 2, 4, Direction::JAxes);
    assert!(!h3_is_pentagon(hex), "off-center child of pentagon is a hexagon");

    let mut not_pent_bc = H3Index::default();
    set_h3_index(&mut not_pent_bc, 2, 8, Direction::Center);
    assert!(!h3_is_pentagon(not_pent_bc));
  }

  #[test]
  fn test_res_class_iii() {
    let mut h = H3Index::default();
    for res in 0..=MAX_H3_RES {
      set_h3_index(&mut h, res, 0, Direction::Center);
      assert_eq!(h3_is_res_class_iii(h), res % 2 == 1, "res {}", res);
    }
  }
}
