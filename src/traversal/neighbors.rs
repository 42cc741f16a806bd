//! Unit-step movement on the grid, including base cell crossings and the
//! pentagon deleted-subsequence reroutes.

use crate::base_cells::{
  _base_cell_is_cw_offset, _is_base_cell_pentagon, _is_base_cell_polar_pentagon, BASE_CELL_DATA,
  BASE_CELL_NEIGHBORS, BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::H3_CELL_MODE;
use crate::coords::ijk::_rotate60_ccw;
use crate::h3_index::inspection::h3_is_pentagon;
use crate::h3_index::{
  _h3_leading_non_zero_digit, _h3_rotate60_ccw, _h3_rotate60_cw, _h3_rotate_pent60_ccw, get_base_cell,
  get_index_digit, get_mode, get_resolution, is_resolution_class_iii, set_base_cell, set_index_digit,
};
use crate::traversal::rings::k_ring;
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

// Lookup tables for moving one cell in a given direction without decoding
// the whole index: the digit that replaces the old digit, and the direction
// the move propagates into the next coarser digit (Center when the move is
// absorbed at this level). The "II" tables apply when the digit being
// rewritten is at a Class III resolution and vice versa.

#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes],
    [KAxes,  IAxes,  JkAxes, IjAxes, IkAxes, JAxes,  Center],
    [JAxes,  JkAxes, KAxes,  IAxes,  IjAxes, Center, IkAxes],
    [JkAxes, IjAxes, IAxes,  IkAxes, Center, KAxes,  JAxes],
    [IAxes,  IkAxes, IjAxes, Center, JAxes,  JkAxes, KAxes],
    [IkAxes, JAxes,  Center, KAxes,  JkAxes, IjAxes, IAxes],
    [IjAxes, Center, IkAxes, JAxes,  KAxes,  IAxes,  JkAxes],
  ]
};

#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, Center, Center, Center, Center, Center, Center],
    [Center, KAxes,  Center, KAxes,  Center, IkAxes, Center],
    [Center, Center, JAxes,  JkAxes, Center, Center, JAxes],
    [Center, KAxes,  JkAxes, JkAxes, Center, Center, Center],
    [Center, Center, Center, Center, IAxes,  IAxes,  IjAxes],
    [Center, IkAxes, Center, Center, IAxes,  IkAxes, Center],
    [Center, Center, JAxes,  Center, IjAxes, Center, IjAxes],
  ]
};

#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes],
    [KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes, Center],
    [JAxes,  JkAxes, IAxes,  IkAxes, IjAxes, Center, KAxes],
    [JkAxes, IAxes,  IkAxes, IjAxes, Center, KAxes,  JAxes],
    [IAxes,  IkAxes, IjAxes, Center, KAxes,  JAxes,  JkAxes],
    [IkAxes, IjAxes, Center, KAxes,  JAxes,  JkAxes, IAxes],
    [IjAxes, Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes],
  ]
};

#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = {
  use Direction::*;
  [
    [Center, Center, Center, Center, Center, Center, Center],
    [Center, KAxes,  Center, JkAxes, Center, KAxes,  Center],
    [Center, Center, JAxes,  JAxes,  Center, Center, IjAxes],
    [Center, JkAxes, JAxes,  JkAxes, Center, Center, Center],
    [Center, Center, Center, Center, IAxes,  IkAxes, IAxes],
    [Center, KAxes,  Center, Center, IkAxes, IkAxes, Center],
    [Center, Center, IjAxes, Center, IAxes,  Center, IjAxes],
  ]
};

/// The neighbor of `origin` in direction `dir`. `rotations` carries the
/// accumulated CCW rotation of the caller's direction frame; it is applied
/// to `dir` on entry and updated with any rotation picked up by the move.
///
/// Errors with `Pentagon` when the move would enter the deleted K
/// subsequence of a pentagon.
pub(crate) fn h3_neighbor_rotations(origin: H3Index, dir: Direction, rotations: &mut i32) -> Result<H3Index, H3Error> {
  if dir == Direction::Center || dir == Direction::InvalidDigit {
    return Err(H3Error::Domain);
  }

  let mut dir = dir;
  *rotations = rotations.rem_euclid(6);
  for _ in 0..*rotations {
    dir = _rotate60_ccw(dir);
  }

  let mut out = origin;
  let mut new_rotations = 0;
  let old_base_cell = get_base_cell(origin);
  if old_base_cell < 0 || old_base_cell >= crate::constants::NUM_BASE_CELLS {
    return Err(H3Error::CellInvalid);
  }
  let old_leading_digit = _h3_leading_non_zero_digit(origin);

  // Adjust the indexing digits and, if needed, the base cell.
  let mut r = get_resolution(origin) - 1;
  loop {
    if r == -1 {
      if _is_base_cell_pentagon(old_base_cell) && dir == Direction::KAxes {
        // the K direction is deleted from pentagons
        return Err(H3Error::Pentagon);
      }

      set_base_cell(&mut out, BASE_CELL_NEIGHBORS[old_base_cell as usize][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][dir as usize];

      if get_base_cell(out) == INVALID_BASE_CELL {
        // the K neighbor of this hexagon is a pentagon; reroute through
        // the IK direction and rotate to compensate
        set_base_cell(&mut out, BASE_CELL_NEIGHBORS[old_base_cell as usize][Direction::IkAxes as usize]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][Direction::IkAxes as usize];

        out = _h3_rotate60_ccw(out);
        *rotations = (*rotations + 1) % 6;
      }
      break;
    }

    let old_digit = get_index_digit(out, r + 1);
    if old_digit == Direction::InvalidDigit {
      return Err(H3Error::CellInvalid);
    }
    let next_dir;
    if is_resolution_class_iii(r + 1) {
      set_index_digit(&mut out, r + 1, NEW_DIGIT_II[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_II[old_digit as usize][dir as usize];
    } else {
      set_index_digit(&mut out, r + 1, NEW_DIGIT_III[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_III[old_digit as usize][dir as usize];
    }

    if next_dir != Direction::Center {
      dir = next_dir;
      r -= 1;
    } else {
      // no more adjustment to perform
      break;
    }
  }

  let new_base_cell = get_base_cell(out);
  if _is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // force rotation out of the missing K subsequence
    if _h3_leading_non_zero_digit(out) == Direction::KAxes {
      if old_base_cell != new_base_cell {
        // in this case we traversed into the deleted K subsequence of a
        // pentagon base cell; rotate out based on the face we entered from
        if _base_cell_is_cw_offset(new_base_cell, BASE_CELL_DATA[old_base_cell as usize].home_fijk.face) {
          out = _h3_rotate60_cw(out);
        } else {
          out = _h3_rotate60_ccw(out);
        }
        already_adjusted_k_subsequence = true;
      } else {
        // traversal within the same pentagon base cell
        match old_leading_digit {
          // the K direction itself is undefined from a pentagon center
          Direction::Center => return Err(H3Error::Pentagon),
          Direction::JkAxes => {
            out = _h3_rotate60_ccw(out);
            *rotations = (*rotations + 1) % 6;
          }
          Direction::IkAxes => {
            out = _h3_rotate60_cw(out);
            *rotations = (*rotations + 5) % 6;
          }
          _ => return Err(H3Error::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      out = _h3_rotate_pent60_ccw(out);
    }

    if old_base_cell != new_base_cell {
      if _is_base_cell_polar_pentagon(new_base_cell) {
        // 'polar' base cells behave differently because they have all i
        // neighbors
        if old_base_cell != 118 && old_base_cell != 8 && _h3_leading_non_zero_digit(out) != Direction::JkAxes {
          *rotations = (*rotations + 1) % 6;
        }
      } else if _h3_leading_non_zero_digit(out) == Direction::IkAxes && !already_adjusted_k_subsequence {
        // account for distortion introduced by the deleted K subsequence
        *rotations = (*rotations + 1) % 6;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = _h3_rotate60_ccw(out);
    }
  }

  *rotations = (*rotations + new_rotations) % 6;
  Ok(out)
}

/// Direction from a cell to one of its direct neighbors, or `InvalidDigit`
/// when the cells do not border.
pub(crate) fn direction_for_neighbor(origin: H3Index, destination: H3Index) -> Direction {
  if origin == destination {
    return Direction::Center;
  }

  // pentagons have no K neighbor
  let start = if h3_is_pentagon(origin) { Direction::JAxes } else { Direction::KAxes };
  for dir in (start as u8)..=(Direction::IjAxes as u8) {
    let direction = Direction::from_digit(dir);
    let mut rotations = 0;
    if let Ok(neighbor) = h3_neighbor_rotations(origin, direction, &mut rotations) {
      if neighbor == destination {
        return direction;
      }
    }
  }
  Direction::InvalidDigit
}

// Digits bordering each digit within the same parent, one step clockwise
// and counter-clockwise around the parent center.
#[rustfmt::skip]
const NEIGHBOR_SET_CLOCKWISE: [Direction; 7] = {
  use Direction::*;
  [Center, JkAxes, IjAxes, JAxes, IkAxes, KAxes, IAxes]
};
#[rustfmt::skip]
const NEIGHBOR_SET_COUNTERCLOCKWISE: [Direction; 7] = {
  use Direction::*;
  [Center, IkAxes, JkAxes, KAxes, IjAxes, IAxes, JAxes]
};

/// Whether the two cells border each other. Cells of different resolutions
/// never border, and a cell does not border itself.
#[must_use]
pub fn h3_indexes_are_neighbors(origin: H3Index, destination: H3Index) -> bool {
  if get_mode(origin) != H3_CELL_MODE || get_mode(destination) != H3_CELL_MODE {
    return false;
  }
  if origin == destination {
    return false;
  }
  if get_resolution(origin) != get_resolution(destination) {
    return false;
  }

  // Cheap check first: cells sharing a parent are neighbors iff their final
  // digits border within that parent.
  let parent_res = get_resolution(origin) - 1;
  if parent_res > 0 {
    let mut origin_parent = origin;
    crate::h3_index::set_resolution(&mut origin_parent, parent_res);
    set_index_digit(&mut origin_parent, parent_res + 1, Direction::InvalidDigit);
    let mut destination_parent = destination;
    crate::h3_index::set_resolution(&mut destination_parent, parent_res);
    set_index_digit(&mut destination_parent, parent_res + 1, Direction::InvalidDigit);

    if origin_parent == destination_parent {
      let origin_digit = get_index_digit(origin, parent_res + 1);
      let destination_digit = get_index_digit(destination, parent_res + 1);
      if origin_digit == Direction::Center || destination_digit == Direction::Center {
        return true;
      }
      if NEIGHBOR_SET_CLOCKWISE[origin_digit as usize] == destination_digit
        || NEIGHBOR_SET_COUNTERCLOCKWISE[origin_digit as usize] == destination_digit
      {
        return true;
      }
    }
  }

  // Otherwise determine the relationship the hard way.
  let mut ring = [H3_NULL; 7];
  if k_ring(origin, 1, &mut ring).is_err() {
    return false;
  }
  ring.contains(&destination)
}
