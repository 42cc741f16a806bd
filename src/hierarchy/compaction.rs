//! Replacing complete groups of sibling cells with their parent, and the
//! inverse expansion.

use crate::h3_index::inspection::{h3_is_pentagon, h3_is_valid};
use crate::h3_index::get_resolution;
use crate::hierarchy::parent_child::{h3_to_children, h3_to_parent, max_h3_to_children_size};
use crate::types::{H3Error, H3Index, H3_NULL};

use std::collections::HashMap;

/// Compacts a set of cells of uniform resolution into the smallest
/// equivalent set of ancestors and cells. Returns the number of indexes
/// written to `out`; the rest of `out` is `H3_NULL`. Output order is
/// unspecified.
///
/// Duplicate inputs are an error, as are mixed resolutions.
pub fn compact(h3_set: &[H3Index], out: &mut [H3Index]) -> Result<usize, H3Error> {
  let mut current: Vec<H3Index> = h3_set.iter().copied().filter(|&h| h != H3_NULL).collect();
  if current.is_empty() {
    out.fill(H3_NULL);
    return Ok(0);
  }

  let res = get_resolution(current[0]);
  for &h in &current {
    if !h3_is_valid(h) {
      return Err(H3Error::CellInvalid);
    }
    if get_resolution(h) != res {
      return Err(H3Error::ResMismatch);
    }
  }

  current.sort_unstable();
  if current.windows(2).any(|w| w[0] == w[1]) {
    return Err(H3Error::DuplicateInput);
  }

  // Collapse complete sibling groups one resolution at a time until no
  // group completes.
  let mut kept: Vec<H3Index> = Vec::new();
  while !current.is_empty() {
    let res = get_resolution(current[0]);
    if res == 0 {
      kept.extend(current);
      break;
    }

    let mut children_by_parent: HashMap<H3Index, Vec<H3Index>> = HashMap::new();
    for &h in &current {
      let parent = h3_to_parent(h, res - 1)?;
      children_by_parent.entry(parent).or_default().push(h);
    }

    let mut next: Vec<H3Index> = Vec::new();
    for (parent, children) in children_by_parent {
      // a pentagon parent is complete at 6 children, a hexagon at 7
      let needed = if h3_is_pentagon(parent) { 6 } else { 7 };
      if children.len() == needed {
        next.push(parent);
      } else {
        kept.extend(children);
      }
    }

    next.sort_unstable();
    current = next;
  }

  if kept.len() > out.len() {
    return Err(H3Error::MemoryBounds);
  }
  out[..kept.len()].copy_from_slice(&kept);
  out[kept.len()..].fill(H3_NULL);
  Ok(kept.len())
}

/// The exact number of cells produced by uncompacting `compacted_set` to
/// resolution `res`.
pub fn max_uncompact_size(compacted_set: &[H3Index], res: i32) -> Result<i64, H3Error> {
  let mut count: i64 = 0;
  for &h in compacted_set {
    if h == H3_NULL {
      continue;
    }
    if get_resolution(h) > res {
      return Err(H3Error::ResMismatch);
    }
    count = count.saturating_add(max_h3_to_children_size(h, res)?);
  }
  Ok(count)
}

/// Expands every cell in `compacted_set` to its descendants at resolution
/// `res`. `out` must hold `max_uncompact_size` slots; unused slots are left
/// as `H3_NULL` where pentagon-deleted branches drop out.
pub fn uncompact(compacted_set: &[H3Index], res: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  let needed = max_uncompact_size(compacted_set, res)? as usize;
  if out.len() < needed {
    return Err(H3Error::MemoryBounds);
  }

  let mut offset = 0;
  for &h in compacted_set {
    if h == H3_NULL {
      continue;
    }
    let size = max_h3_to_children_size(h, res)? as usize;
    h3_to_children(h, res, &mut out[offset..offset + size])?;
    offset += size;
  }
  out[offset..].fill(H3_NULL);
  Ok(())
}
