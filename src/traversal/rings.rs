//! Ring and disk aggregates around an origin cell: the fast spiral
//! traversal that assumes no pentagon distortion, and the robust search
//! that tolerates it.

use crate::h3_index::inspection::h3_is_pentagon;
use crate::traversal::neighbors::h3_neighbor_rotations;
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

/// Spiral side order for ring traversal.
const DIRECTIONS: [Direction; 6] = [
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
];

/// Direction used to advance outward to the next ring.
const NEXT_RING_DIRECTION: Direction = Direction::IAxes;

/// Maximum number of cells within grid distance `k` of any cell:
/// `3k(k+1) + 1`.
#[must_use]
pub fn max_kring_size(k: i32) -> i64 {
  if k < 0 {
    return 0;
  }
  let k = i64::from(k);
  3 * k * (k + 1) + 1
}

/// Cells within grid distance `k` of the origin, in spiral ring order
/// (ring 0, then each ring counter-clockwise). Errors with `Pentagon` if any
/// pentagon or pentagon distortion is encountered; callers needing pentagon
/// tolerance fall back to [`k_ring`].
pub fn hex_range(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  hex_range_distances(origin, k, out, None)
}

/// [`hex_range`] that also records each cell's ring number.
pub fn hex_range_distances(
  origin: H3Index,
  k: i32,
  out: &mut [H3Index],
  mut distances: Option<&mut [i32]>,
) -> Result<(), H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  let max_size = max_kring_size(k) as usize;
  if out.len() < max_size {
    return Err(H3Error::MemoryBounds);
  }
  if let Some(ref d) = distances {
    if d.len() < max_size {
      return Err(H3Error::MemoryBounds);
    }
  }

  let mut idx = 0;
  out[idx] = origin;
  if let Some(ref mut d) = distances {
    d[idx] = 0;
  }
  idx += 1;

  if h3_is_pentagon(origin) {
    return Err(H3Error::Pentagon);
  }

  // current ring, side of that ring, and position along the side
  let mut ring = 0;
  let mut direction = 0;
  let mut i = 0;
  // rotation of the direction frame accumulated along the spiral
  let mut rotations = 0;

  let mut h = origin;
  while ring < k {
    if direction == 0 && i == 0 {
      // step out to the next ring; this cell is recorded at the end of
      // the ring walk
      h = h3_neighbor_rotations(h, NEXT_RING_DIRECTION, &mut rotations)?;
      if h3_is_pentagon(h) {
        return Err(H3Error::Pentagon);
      }
    }

    h = h3_neighbor_rotations(h, DIRECTIONS[direction], &mut rotations)?;
    out[idx] = h;
    if let Some(ref mut d) = distances {
      d[idx] = ring + 1;
    }
    idx += 1;

    i += 1;
    if i == ring + 1 {
      i = 0;
      direction += 1;
      if direction == 6 {
        direction = 0;
        ring += 1;
      }
    }

    if h3_is_pentagon(h) {
      return Err(H3Error::Pentagon);
    }
  }

  Ok(())
}

/// Runs [`hex_range`] for every cell in `h3_set`, concatenating the results
/// into `out` in input order.
pub fn hex_ranges(h3_set: &[H3Index], k: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  let segment = max_kring_size(k) as usize;
  if out.len() < segment * h3_set.len() {
    return Err(H3Error::MemoryBounds);
  }
  for (n, &origin) in h3_set.iter().enumerate() {
    hex_range(origin, k, &mut out[n * segment..(n + 1) * segment])?;
  }
  Ok(())
}

/// The hollow ring of cells at exactly grid distance `k`, walked from the
/// I-axes corner. Errors with `Pentagon` if a pentagon or distortion is
/// encountered; no partial output contract applies in that case.
pub fn hex_ring(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  let expected = if k == 0 { 1 } else { 6 * k as usize };
  if out.len() < expected {
    return Err(H3Error::MemoryBounds);
  }

  if k == 0 {
    out[0] = origin;
    return Ok(());
  }

  let mut rotations = 0;
  let mut h = origin;
  if h3_is_pentagon(h) {
    return Err(H3Error::Pentagon);
  }

  for _ in 0..k {
    h = h3_neighbor_rotations(h, NEXT_RING_DIRECTION, &mut rotations)?;
    if h3_is_pentagon(h) {
      return Err(H3Error::Pentagon);
    }
  }

  let first = h;
  let mut idx = 0;
  out[idx] = h;
  idx += 1;

  for direction in 0..6 {
    for pos in 0..k {
      h = h3_neighbor_rotations(h, DIRECTIONS[direction], &mut rotations)?;
      // the last step rejoins the starting cell and is not recorded
      if pos != k - 1 || direction != 5 {
        out[idx] = h;
        idx += 1;
        if h3_is_pentagon(h) {
          return Err(H3Error::Pentagon);
        }
      }
    }
  }

  if h != first {
    // pentagon distortion pulled the walk off the ring
    return Err(H3Error::Pentagon);
  }
  Ok(())
}

/// BFS fallback used when the spiral traversal hits a pentagon. The output
/// buffer doubles as an open-addressed set keyed by index value, so unused
/// slots remain `H3_NULL` and cell order is unspecified.
fn _k_ring_internal(origin: H3Index, k: i32, out: &mut [H3Index], distances: &mut [i32], cur_k: i32) {
  if origin == H3_NULL {
    return;
  }

  // linear probe for this cell's slot
  let max_idx = out.len() as u64;
  let mut off = (origin.0 % max_idx) as usize;
  loop {
    if out[off] == H3_NULL {
      break;
    }
    if out[off] == origin {
      if distances[off] <= cur_k {
        // already reached by an equal or shorter path
        return;
      }
      break;
    }
    off = (off + 1) % max_idx as usize;
  }

  out[off] = origin;
  distances[off] = cur_k;

  if cur_k >= k {
    return;
  }

  for dir in DIRECTIONS {
    let mut rotations = 0;
    if let Ok(neighbor) = h3_neighbor_rotations(origin, dir, &mut rotations) {
      _k_ring_internal(neighbor, k, out, distances, cur_k + 1);
    }
  }
}

/// Cells within grid distance `k` of the origin, tolerant of pentagons.
/// `out` must hold `max_kring_size(k)` slots; unused slots are left as
/// `H3_NULL` when a pentagon forced the fallback search.
pub fn k_ring(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  let max_size = max_kring_size(k) as usize;
  if out.len() < max_size {
    return Err(H3Error::MemoryBounds);
  }
  let mut distances = vec![0i32; max_size];
  k_ring_distances(origin, k, out, &mut distances)
}

/// [`k_ring`] that also reports each cell's grid distance from the origin.
pub fn k_ring_distances(origin: H3Index, k: i32, out: &mut [H3Index], distances: &mut [i32]) -> Result<(), H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  let max_size = max_kring_size(k) as usize;
  if out.len() < max_size || distances.len() < max_size {
    return Err(H3Error::MemoryBounds);
  }

  // optimistically try the fast spiral first
  if hex_range_distances(origin, k, out, Some(&mut distances[..])).is_ok() {
    return Ok(());
  }

  // a pentagon got in the way; fall back to the BFS search
  out[..max_size].fill(H3_NULL);
  distances[..max_size].fill(0);
  _k_ring_internal(origin, k, &mut out[..max_size], &mut distances[..max_size], 0);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::set_h3_index;
  use crate::indexing::geo_to_h3;
  use crate::latlng::_geo_from_degs;
  use std::collections::HashSet;

  fn sf_cell(res: i32) -> H3Index {
    geo_to_h3(&_geo_from_degs(37.779265, -122.419277), res).unwrap()
  }

  fn pentagon(res: i32) -> H3Index {
    let mut h = H3Index::default();
    set_h3_index(&mut h, res, 4, Direction::Center);
    h
  }

  #[test]
  fn test_max_kring_size() {
    assert_eq!(max_kring_size(0), 1);
    assert_eq!(max_kring_size(1), 7);
    assert_eq!(max_kring_size(2), 19);
    assert_eq!(max_kring_size(-1), 0);
  }

  #[test]
  fn test_hex_range_k0() {
    let origin = sf_cell(5);
    let mut out = [H3_NULL; 1];
    assert!(hex_range(origin, 0, &mut out).is_ok());
    assert_eq!(out[0], origin);
  }

  #[test]
  fn test_hex_range_ring_order() {
    let origin = sf_cell(9);
    let mut out = [H3_NULL; 19];
    let mut distances = [0i32; 19];
    assert!(hex_range_distances(origin, 2, &mut out, Some(&mut distances)).is_ok());

    assert_eq!(out[0], origin);
    assert_eq!(distances[0], 0);
    for i in 1..7 {
      assert_eq!(distances[i], 1, "ring 1 occupies slots 1..7");
    }
    for i in 7..19 {
      assert_eq!(distances[i], 2, "ring 2 occupies slots 7..19");
    }
    let unique: HashSet<_> = out.iter().collect();
    assert_eq!(unique.len(), 19, "cells are distinct");
  }

  #[test]
  fn test_hex_range_pentagon_fails() {
    let mut out = [H3_NULL; 7];
    assert_eq!(hex_range(pentagon(2), 1, &mut out), Err(H3Error::Pentagon));
  }

  #[test]
  fn test_hex_ranges() {
    let origin = sf_cell(9);
    let mut ring = [H3_NULL; 7];
    hex_ring(origin, 1, &mut ring).unwrap();

    let set = [origin, ring[0]];
    let mut out = [H3_NULL; 14];
    assert!(hex_ranges(&set, 1, &mut out).is_ok());
    assert_eq!(out[0], origin);
    assert_eq!(out[7], ring[0]);
  }

  #[test]
  fn test_hex_ring_matches_range_boundary() {
    let origin = sf_cell(9);
    for k in 1..=3 {
      let disk_size = max_kring_size(k) as usize;
      let mut disk = vec![H3_NULL; disk_size];
      let mut distances = vec![0i32; disk_size];
      hex_range_distances(origin, k, &mut disk, Some(&mut distances)).unwrap();

      let mut ring = vec![H3_NULL; 6 * k as usize];
      hex_ring(origin, k, &mut ring).unwrap();

      let boundary: HashSet<_> = disk
        .iter()
        .zip(distances.iter())
        .filter(|&(_, &d)| d == k)
        .map(|(&h, _)| h)
        .collect();
      let ring_set: HashSet<_> = ring.iter().copied().collect();
      assert_eq!(ring_set, boundary, "ring k={} equals the disk boundary", k);
    }
  }

  #[test]
  fn test_hex_ring_k0() {
    let origin = sf_cell(5);
    let mut out = [H3_NULL; 1];
    assert!(hex_ring(origin, 0, &mut out).is_ok());
    assert_eq!(out[0], origin);
  }

  #[test]
  fn test_hex_ring_pentagon_fails() {
    let mut out = [H3_NULL; 6];
    assert_eq!(hex_ring(pentagon(1), 1, &mut out), Err(H3Error::Pentagon));
  }

  #[test]
  fn test_k_ring_matches_hex_range_away_from_pentagons() {
    let origin = sf_cell(8);
    let size = max_kring_size(2) as usize;
    let mut from_k_ring = vec![H3_NULL; size];
    k_ring(origin, 2, &mut from_k_ring).unwrap();
    let mut from_range = vec![H3_NULL; size];
    hex_range(origin, 2, &mut from_range).unwrap();

    let a: HashSet<_> = from_k_ring.iter().copied().collect();
    let b: HashSet<_> = from_range.iter().copied().collect();
    assert_eq!(a, b);
  }

  #[test]
  fn test_k_ring_pentagon() {
    let origin = pentagon(1);
    let size = max_kring_size(1) as usize;
    let mut out = vec![H3_NULL; size];
    let mut distances = vec![0i32; size];
    assert!(k_ring_distances(origin, 1, &mut out, &mut distances).is_ok());

    let found: Vec<_> = out.iter().filter(|&&h| h != H3_NULL).collect();
    assert_eq!(found.len(), 6, "pentagon disk of k=1 has 6 cells");
    assert!(out.contains(&origin));
  }

  #[test]
  fn test_k_ring_distances_by_ring() {
    let origin = sf_cell(9);
    let size = max_kring_size(2) as usize;
    let mut out = vec![H3_NULL; size];
    let mut distances = vec![0i32; size];
    k_ring_distances(origin, 2, &mut out, &mut distances).unwrap();

    let mut counts = [0usize; 3];
    for (h, d) in out.iter().zip(distances.iter()) {
      if *h != H3_NULL {
        counts[*d as usize] += 1;
      }
    }
    assert_eq!(counts, [1, 6, 12], "ring populations for k=2");
  }
}
