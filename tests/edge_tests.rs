//! Unidirectional edge suite: construction, validation, enumeration, and
//! edge boundaries.

use hexa7::*;

fn sf() -> GeoCoord {
  GeoCoord {
    lat: 0.659966917655,
    lon: -2.1364398519396,
  }
}

fn sf_neighbor() -> (H3Index, H3Index) {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let mut ring = [H3_NULL; 6];
  hex_ring(cell, 1, &mut ring).unwrap();
  (cell, ring[0])
}

#[test]
fn test_edge_and_friends() {
  let (sf_cell, sf2) = sf_neighbor();

  let edge = get_h3_unidirectional_edge(sf_cell, sf2);
  assert_ne!(edge, H3_NULL);
  assert_eq!(
    get_origin_h3_index_from_unidirectional_edge(edge),
    sf_cell,
    "origin comes back out of the edge"
  );
  assert_eq!(
    get_destination_h3_index_from_unidirectional_edge(edge),
    sf2,
    "destination comes back out of the edge"
  );

  let pair = get_h3_indexes_from_unidirectional_edge(edge);
  assert_eq!(pair[0], sf_cell, "origin first in the pair");
  assert_eq!(pair[1], sf2, "destination last in the pair");
}

#[test]
fn test_non_neighbors_have_no_edge() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let mut ring2 = [H3_NULL; 12];
  hex_ring(cell, 2, &mut ring2).unwrap();
  assert_eq!(get_h3_unidirectional_edge(cell, ring2[0]), H3_NULL);
}

#[test]
fn test_edge_from_pentagon() {
  // pentagon base cell 4 and its neighbor base cell 8, both at res 0
  let pentagon = string_to_h3("8009fffffffffff").unwrap();
  let adjacent = string_to_h3("8011fffffffffff").unwrap();
  assert!(h3_is_pentagon(pentagon));

  let edge = get_h3_unidirectional_edge(pentagon, adjacent);
  assert_ne!(edge, H3_NULL, "produces a valid edge");
  assert!(h3_unidirectional_edge_is_valid(edge));
  assert_eq!(get_destination_h3_index_from_unidirectional_edge(edge), adjacent);
}

#[test]
fn test_edge_is_valid() {
  let (sf_cell, sf2) = sf_neighbor();

  let edge = get_h3_unidirectional_edge(sf_cell, sf2);
  assert!(h3_unidirectional_edge_is_valid(edge), "edges validate");
  assert!(!h3_unidirectional_edge_is_valid(sf_cell), "cells do not validate");
  assert!(!h3_unidirectional_edge_is_valid(H3_NULL));

  // pentagon 0x821c07fffffffff: direction 2 validates, the deleted
  // direction 1 does not
  let pentagon = string_to_h3("821c07fffffffff").unwrap();
  let with_direction = |d: u64| H3Index(pentagon.0 & !(0x7 << 56) & !(0xf << 59) | (2u64 << 59) | (d << 56));
  assert!(h3_unidirectional_edge_is_valid(with_direction(2)), "pentagonal edge validates");
  assert!(!h3_unidirectional_edge_is_valid(with_direction(1)), "deleted direction does not");
}

#[test]
fn test_edges_from_hexagon() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  let edges = get_h3_unidirectional_edges_from_hexagon(cell);

  for edge in edges {
    assert!(h3_unidirectional_edge_is_valid(edge), "every slot holds an edge");
    assert_eq!(get_origin_h3_index_from_unidirectional_edge(edge), cell);
    let destination = get_destination_h3_index_from_unidirectional_edge(edge);
    assert_ne!(destination, cell);
    assert!(h3_indexes_are_neighbors(cell, destination));
  }

  // all six destinations are distinct
  let mut destinations: Vec<_> = edges
    .iter()
    .map(|&e| get_destination_h3_index_from_unidirectional_edge(e))
    .collect();
  destinations.sort_unstable();
  destinations.dedup();
  assert_eq!(destinations.len(), 6);
}

#[test]
fn test_edges_from_pentagon() {
  let pentagon = string_to_h3("821c07fffffffff").unwrap();
  let edges = get_h3_unidirectional_edges_from_hexagon(pentagon);

  let mut missing = 0;
  for edge in edges {
    if edge == H3_NULL {
      missing += 1;
      continue;
    }
    assert!(h3_unidirectional_edge_is_valid(edge));
    assert_eq!(get_origin_h3_index_from_unidirectional_edge(edge), pentagon);
  }
  assert_eq!(missing, 1, "only one edge deleted for the pentagon");
}

#[test]
fn test_edge_boundaries() {
  let cell = geo_to_h3(&sf(), 9).unwrap();
  for edge in get_h3_unidirectional_edges_from_hexagon(cell) {
    let gb = get_h3_unidirectional_edge_boundary(edge).unwrap();
    assert_eq!(gb.num_verts, 2, "hexagon edges have two vertices");
  }
}

#[test]
fn test_edge_boundaries_class_iii_pentagon() {
  let pentagon = string_to_h3("811c0ffffffffff").unwrap();
  let edges = get_h3_unidirectional_edges_from_hexagon(pentagon);

  let mut missing = 0;
  for edge in edges {
    if edge == H3_NULL {
      missing += 1;
      continue;
    }
    let gb = get_h3_unidirectional_edge_boundary(edge).unwrap();
    assert_eq!(gb.num_verts, 3, "class III pentagon edges carry a distortion vertex");
  }
  assert_eq!(missing, 1);
}

#[test]
fn test_edge_symmetry() {
  // for every neighbor pair, dest(edge(a, b)) == b and origin(edge(a, b)) == a
  let cell = geo_to_h3(&sf(), 7).unwrap();
  let mut ring = [H3_NULL; 6];
  hex_ring(cell, 1, &mut ring).unwrap();

  for neighbor in ring {
    let forward = get_h3_unidirectional_edge(cell, neighbor);
    let reverse = get_h3_unidirectional_edge(neighbor, cell);
    assert_ne!(forward, H3_NULL);
    assert_ne!(reverse, H3_NULL);
    assert_ne!(forward, reverse);
    assert_eq!(get_destination_h3_index_from_unidirectional_edge(forward), neighbor);
    assert_eq!(get_destination_h3_index_from_unidirectional_edge(reverse), cell);
  }
}
