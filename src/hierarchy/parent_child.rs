//! Parent and child navigation via digit arithmetic.

use crate::constants::MAX_H3_RES;
use crate::h3_index::inspection::{h3_is_pentagon, h3_is_valid};
use crate::h3_index::{get_resolution, set_index_digit, set_resolution};
use crate::math::extensions::_ipow;
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

/// The ancestor of `h` at `parent_res`: truncate the digits past the parent
/// resolution to the unused sentinel.
pub fn h3_to_parent(h: H3Index, parent_res: i32) -> Result<H3Index, H3Error> {
  if !h3_is_valid(h) {
    return Err(H3Error::CellInvalid);
  }
  let child_res = get_resolution(h);
  if parent_res < 0 || parent_res > child_res {
    return Err(H3Error::ResDomain);
  }
  if parent_res == child_res {
    return Ok(h);
  }

  let mut parent = h;
  set_resolution(&mut parent, parent_res);
  for r in (parent_res + 1)..=child_res {
    set_index_digit(&mut parent, r, Direction::InvalidDigit);
  }
  Ok(parent)
}

/// Upper bound on the number of children of `h` at `child_res`, counting
/// the `H3_NULL` runs left by pentagon-deleted branches.
pub fn max_h3_to_children_size(h: H3Index, child_res: i32) -> Result<i64, H3Error> {
  if !h3_is_valid(h) {
    return Err(H3Error::CellInvalid);
  }
  let parent_res = get_resolution(h);
  if child_res < parent_res || child_res > MAX_H3_RES {
    return Err(H3Error::ResDomain);
  }
  Ok(_ipow(7, i64::from(child_res - parent_res)))
}

/// The child of `h` one resolution finer, in digit position `cell_number`.
pub(crate) fn _make_direct_child(h: H3Index, cell_number: u8) -> H3Index {
  let child_res = get_resolution(h) + 1;
  let mut child = h;
  set_resolution(&mut child, child_res);
  set_index_digit(&mut child, child_res, Direction::from_digit(cell_number));
  child
}

fn _h3_to_children_rec(h: H3Index, child_res: i32, out: &mut [H3Index]) {
  let parent_res = get_resolution(h);
  if parent_res == child_res {
    out[0] = h;
    return;
  }

  // one seventh of the buffer per digit branch
  let step = out.len() / 7;
  let is_pentagon = h3_is_pentagon(h);
  for digit in 0..7u8 {
    let segment = &mut out[digit as usize * step..(digit as usize + 1) * step];
    if is_pentagon && digit == Direction::KAxes as u8 {
      // deleted branch; leave the slots empty
      segment.fill(H3_NULL);
    } else {
      _h3_to_children_rec(_make_direct_child(h, digit), child_res, segment);
    }
  }
}

/// All descendants of `h` at `child_res`, written into `children` in digit
/// order. Pentagon-deleted branches leave `H3_NULL` runs in place, so the
/// buffer must hold the full `max_h3_to_children_size` slots.
pub fn h3_to_children(h: H3Index, child_res: i32, children: &mut [H3Index]) -> Result<(), H3Error> {
  let size = max_h3_to_children_size(h, child_res)? as usize;
  if children.len() < size {
    return Err(H3Error::MemoryBounds);
  }
  _h3_to_children_rec(h, child_res, &mut children[..size]);
  children[size..].fill(H3_NULL);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::set_h3_index;
  use crate::indexing::geo_to_h3;
  use crate::latlng::_geo_from_degs;

  fn sf_cell(res: i32) -> H3Index {
    geo_to_h3(&_geo_from_degs(37.779265, -122.419277), res).unwrap()
  }

  #[test]
  fn test_h3_to_parent_basic() {
    let child = sf_cell(9);
    let parent = h3_to_parent(child, 8).unwrap();
    assert_eq!(get_resolution(parent), 8);
    assert!(h3_is_valid(parent));

    assert_eq!(h3_to_parent(child, 9), Ok(child), "parent at own res is self");
    assert_eq!(h3_to_parent(child, 10), Err(H3Error::ResDomain));
    assert_eq!(h3_to_parent(child, -1), Err(H3Error::ResDomain));
    assert_eq!(h3_to_parent(H3_NULL, 0), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_h3_to_parent_matches_ancestor_chain() {
    let child = sf_cell(9);
    let direct = h3_to_parent(child, 5).unwrap();
    let mut stepped = child;
    for res in (5..9).rev() {
      stepped = h3_to_parent(stepped, res).unwrap();
    }
    assert_eq!(direct, stepped, "skipping levels matches stepping");
  }

  #[test]
  fn test_max_h3_to_children_size() {
    let h = sf_cell(5);
    assert_eq!(max_h3_to_children_size(h, 5), Ok(1));
    assert_eq!(max_h3_to_children_size(h, 6), Ok(7));
    assert_eq!(max_h3_to_children_size(h, 8), Ok(343));
    assert_eq!(max_h3_to_children_size(h, 4), Err(H3Error::ResDomain));
  }

  #[test]
  fn test_children_contain_parent_center() {
    let parent = sf_cell(7);
    let mut children = [H3_NULL; 7];
    h3_to_children(parent, 8, &mut children).unwrap();

    for child in children {
      assert!(h3_is_valid(child));
      assert_eq!(h3_to_parent(child, 7), Ok(parent), "child maps back to parent");
    }
    // the center child shares the parent's center
    let parent_center = crate::indexing::h3_to_geo(parent).unwrap();
    assert_eq!(geo_to_h3(&parent_center, 8), Ok(children[0]));
  }

  #[test]
  fn test_children_of_pentagon() {
    let mut pentagon = H3Index::default();
    set_h3_index(&mut pentagon, 1, 4, Direction::Center);

    let mut children = [H3_NULL; 7];
    h3_to_children(pentagon, 2, &mut children).unwrap();

    let populated: Vec<_> = children.iter().filter(|&&c| c != H3_NULL).collect();
    assert_eq!(populated.len(), 6, "pentagon has 6 direct children");
    assert_eq!(children[Direction::KAxes as usize], H3_NULL, "K branch is deleted");
    for &child in children.iter().filter(|&&c| c != H3_NULL) {
      assert!(h3_is_valid(child));
    }
  }

  #[test]
  fn test_children_two_levels() {
    let parent = sf_cell(4);
    let mut children = vec![H3_NULL; 49];
    h3_to_children(parent, 6, &mut children).unwrap();
    for &child in &children {
      assert_ne!(child, H3_NULL, "hexagon buffer is fully populated");
      assert_eq!(h3_to_parent(child, 4), Ok(parent));
    }
  }
}
