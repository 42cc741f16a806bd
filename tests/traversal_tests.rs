//! Traversal suite: neighborhood relationships around a fixed San
//! Francisco cell plus ring/disk consistency checks.

use hexa7::*;
use std::collections::HashSet;

// The classic San Francisco fixture, already in radians.
fn sf() -> GeoCoord {
  GeoCoord {
    lat: 0.659966917655,
    lon: -2.1364398519396,
  }
}

#[test]
fn test_sf_res9_has_six_neighbors() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  assert!(h3_is_valid(cell));
  assert_eq!(h3_get_resolution(cell), 9);

  let mut ring = [H3_NULL; 6];
  hex_ring(cell, 1, &mut ring).unwrap();

  let mut neighbors = 0;
  for h in ring {
    if h != H3_NULL && h3_indexes_are_neighbors(cell, h) {
      neighbors += 1;
    }
  }
  assert_eq!(neighbors, 6, "all six ring-1 cells are neighbors");
}

#[test]
fn test_ring2_cells_are_not_neighbors() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let mut ring2 = [H3_NULL; 12];
  hex_ring(cell, 2, &mut ring2).unwrap();

  for h in ring2 {
    assert!(!h3_indexes_are_neighbors(cell, h), "ring-2 cell is not a neighbor");
  }
}

#[test]
fn test_not_own_neighbor() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  assert!(!h3_indexes_are_neighbors(cell, cell));
}

#[test]
fn test_cross_resolution_not_neighbors() {
  let fine = geo_to_h3(&sf(), 9).unwrap();
  let coarse = geo_to_h3(&sf(), 7).unwrap();
  assert!(!h3_indexes_are_neighbors(fine, coarse));
}

#[test]
fn test_ring_cells_neighbor_each_other() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let mut ring = [H3_NULL; 6];
  hex_ring(cell, 1, &mut ring).unwrap();
  assert!(h3_indexes_are_neighbors(ring[1], ring[2]), "consecutive ring cells border");
}

#[test]
fn test_k_ring_size_bound() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  for k in 0..=4 {
    let size = max_kring_size(k) as usize;
    assert_eq!(size, (3 * k * (k + 1) + 1) as usize);

    let mut out = vec![H3_NULL; size];
    k_ring(cell, k, &mut out).unwrap();
    let populated = out.iter().filter(|&&h| h != H3_NULL).count();
    assert_eq!(populated, size, "no pentagon encountered, so the disk is full");
  }
}

#[test]
fn test_k_ring_around_pentagon_loses_cells() {
  let pentagon = string_to_h3("821c07fffffffff").unwrap();
  assert!(h3_is_pentagon(pentagon));

  let size = max_kring_size(2) as usize;
  let mut out = vec![H3_NULL; size];
  k_ring(pentagon, 2, &mut out).unwrap();
  let populated = out.iter().filter(|&&h| h != H3_NULL).count();
  assert!(populated < size, "pentagon disks are smaller than the bound");
  assert!(populated >= 1 + 5 + 10, "but still cover the pentagon neighborhood");
}

#[test]
fn test_hex_range_matches_k_ring() {
  let cell = geo_to_h3(&sf(), 8).unwrap();
  for k in 1..=3 {
    let size = max_kring_size(k) as usize;
    let mut range = vec![H3_NULL; size];
    hex_range(cell, k, &mut range).unwrap();
    let mut disk = vec![H3_NULL; size];
    k_ring(cell, k, &mut disk).unwrap();

    let a: HashSet<_> = range.into_iter().collect();
    let b: HashSet<_> = disk.into_iter().collect();
    assert_eq!(a, b, "spiral and BFS agree at k={}", k);
  }
}

#[test]
fn test_hex_range_fails_crossing_pentagon() {
  // a neighbor of a pentagon: its k=1 spiral touches the pentagon
  let pentagon = string_to_h3("821c07fffffffff").unwrap();
  let size = max_kring_size(1) as usize;
  let mut disk = vec![H3_NULL; size];
  k_ring(pentagon, 1, &mut disk).unwrap();
  let neighbor = disk.into_iter().find(|&h| h != H3_NULL && h != pentagon).unwrap();

  let mut out = vec![H3_NULL; size];
  assert_eq!(hex_range(neighbor, 1, &mut out), Err(H3Error::Pentagon));
}

#[test]
fn test_hex_ranges_concatenates() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let mut ring = [H3_NULL; 6];
  hex_ring(cell, 1, &mut ring).unwrap();

  let origins = [cell, ring[0], ring[3]];
  let segment = max_kring_size(1) as usize;
  let mut out = vec![H3_NULL; origins.len() * segment];
  hex_ranges(&origins, 1, &mut out).unwrap();

  for (n, &origin) in origins.iter().enumerate() {
    assert_eq!(out[n * segment], origin, "segment {} leads with its origin", n);
    let segment_cells: HashSet<_> = out[n * segment..(n + 1) * segment].iter().collect();
    assert_eq!(segment_cells.len(), segment, "segment {} is distinct", n);
  }
}

#[test]
fn test_hex_ring_sizes() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  for k in 1..=4 {
    let mut ring = vec![H3_NULL; 6 * k as usize];
    hex_ring(cell, k, &mut ring).unwrap();
    let unique: HashSet<_> = ring.iter().collect();
    assert_eq!(unique.len(), 6 * k as usize, "ring {} cells are distinct", k);
    for &h in &ring {
      assert!(h3_is_valid(h));
    }
  }
}
