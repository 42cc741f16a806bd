//! Unidirectional edge indexes: a cell pair packed into one 64-bit word,
//! with the traversal direction carried in the reserved bits.

use crate::constants::{H3_CELL_MODE, H3_UNIEDGE_MODE, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::h3_index::inspection::{h3_is_pentagon, h3_is_valid};
use crate::h3_index::{_h3_to_face_ijk, get_mode, get_reserved_bits, get_resolution, set_mode, set_reserved_bits};
use crate::coords::face_ijk::{_face_ijk_pent_to_geo_boundary, _face_ijk_to_geo_boundary};
use crate::traversal::neighbors::{direction_for_neighbor, h3_indexes_are_neighbors, h3_neighbor_rotations};
use crate::types::{Direction, GeoBoundary, H3Error, H3Index, H3_NULL};

/// First boundary vertex of the edge leaving a hexagon in each direction.
const DIRECTION_TO_VERTEX_NUM_HEX: [i32; 7] = [-1, 3, 1, 2, 5, 4, 0];

/// First boundary vertex of the edge leaving a pentagon in each direction.
/// The K direction has no edge.
const DIRECTION_TO_VERTEX_NUM_PENT: [i32; 7] = [-1, -1, 1, 2, 4, 3, 0];

/// The edge from `origin` to its neighbor `destination`, or `H3_NULL` when
/// the cells are not neighbors.
#[must_use]
pub fn get_h3_unidirectional_edge(origin: H3Index, destination: H3Index) -> H3Index {
  if !h3_indexes_are_neighbors(origin, destination) {
    return H3_NULL;
  }
  let direction = direction_for_neighbor(origin, destination);
  if direction == Direction::Center || direction == Direction::InvalidDigit {
    return H3_NULL;
  }

  let mut edge = origin;
  set_mode(&mut edge, H3_UNIEDGE_MODE);
  set_reserved_bits(&mut edge, direction as u8);
  edge
}

/// Whether the index is a well-formed unidirectional edge: edge mode, a
/// direction in 1..=6 that exists at the origin, and a valid origin cell.
#[must_use]
pub fn h3_unidirectional_edge_is_valid(edge: H3Index) -> bool {
  if get_mode(edge) != H3_UNIEDGE_MODE {
    return false;
  }

  let direction = Direction::from_digit(get_reserved_bits(edge));
  if direction == Direction::Center || direction == Direction::InvalidDigit {
    return false;
  }

  let origin = get_origin_h3_index_from_unidirectional_edge(edge);
  if h3_is_pentagon(origin) && direction == Direction::KAxes {
    return false;
  }

  h3_is_valid(origin)
}

/// The origin cell of an edge, or `H3_NULL` for non-edge input.
#[must_use]
pub fn get_origin_h3_index_from_unidirectional_edge(edge: H3Index) -> H3Index {
  if get_mode(edge) != H3_UNIEDGE_MODE {
    return H3_NULL;
  }
  let mut origin = edge;
  set_mode(&mut origin, H3_CELL_MODE);
  set_reserved_bits(&mut origin, 0);
  origin
}

/// The destination cell of an edge, or `H3_NULL` for non-edge input.
#[must_use]
pub fn get_destination_h3_index_from_unidirectional_edge(edge: H3Index) -> H3Index {
  if get_mode(edge) != H3_UNIEDGE_MODE {
    return H3_NULL;
  }
  let direction = Direction::from_digit(get_reserved_bits(edge));
  let origin = get_origin_h3_index_from_unidirectional_edge(edge);
  let mut rotations = 0;
  h3_neighbor_rotations(origin, direction, &mut rotations).unwrap_or(H3_NULL)
}

/// The origin and destination cells of an edge, in that order.
#[must_use]
pub fn get_h3_indexes_from_unidirectional_edge(edge: H3Index) -> [H3Index; 2] {
  [
    get_origin_h3_index_from_unidirectional_edge(edge),
    get_destination_h3_index_from_unidirectional_edge(edge),
  ]
}

/// All edges leaving the cell, indexed by direction minus one. Pentagons
/// leave the K slot as `H3_NULL`.
#[must_use]
pub fn get_h3_unidirectional_edges_from_hexagon(origin: H3Index) -> [H3Index; 6] {
  let mut edges = [H3_NULL; 6];
  let is_pentagon = h3_is_pentagon(origin);
  for (i, slot) in edges.iter_mut().enumerate() {
    if is_pentagon && i == 0 {
      continue;
    }
    let mut edge = origin;
    set_mode(&mut edge, H3_UNIEDGE_MODE);
    set_reserved_bits(&mut edge, (i + 1) as u8);
    *slot = edge;
  }
  edges
}

/// The boundary vertices of the cell side the edge crosses: two vertices,
/// or three for Class III cells where the side carries a distortion vertex.
pub fn get_h3_unidirectional_edge_boundary(edge: H3Index) -> Result<GeoBoundary, H3Error> {
  if !h3_unidirectional_edge_is_valid(edge) {
    return Err(H3Error::EdgeInvalid);
  }

  let origin = get_origin_h3_index_from_unidirectional_edge(edge);
  let fijk = _h3_to_face_ijk(origin)?;
  let res = get_resolution(origin);
  let direction = get_reserved_bits(edge) as usize;

  let mut gb = GeoBoundary::default();
  if h3_is_pentagon(origin) {
    let start_vertex = DIRECTION_TO_VERTEX_NUM_PENT[direction];
    _face_ijk_pent_to_geo_boundary(&fijk, res, start_vertex, 2, &mut gb);
  } else {
    let start_vertex = DIRECTION_TO_VERTEX_NUM_HEX[direction];
    _face_ijk_to_geo_boundary(&fijk, res, start_vertex, 2, &mut gb);
  }
  Ok(gb)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::set_h3_index;
  use crate::indexing::geo_to_h3;
  use crate::latlng::_geo_from_degs;
  use crate::traversal::rings::hex_ring;

  fn sf_cell(res: i32) -> H3Index {
    geo_to_h3(&_geo_from_degs(37.779265, -122.419277), res).unwrap()
  }

  #[test]
  fn test_edge_round_trip() {
    let sf = sf_cell(9);
    let mut ring = [H3_NULL; 6];
    hex_ring(sf, 1, &mut ring).unwrap();
    let sf2 = ring[0];

    let edge = get_h3_unidirectional_edge(sf, sf2);
    assert_ne!(edge, H3_NULL);
    assert_eq!(get_origin_h3_index_from_unidirectional_edge(edge), sf);
    assert_eq!(get_destination_h3_index_from_unidirectional_edge(edge), sf2);

    let pair = get_h3_indexes_from_unidirectional_edge(edge);
    assert_eq!(pair, [sf, sf2]);
  }

  #[test]
  fn test_edge_requires_neighbors() {
    let sf = sf_cell(9);
    let mut ring2 = [H3_NULL; 12];
    hex_ring(sf, 2, &mut ring2).unwrap();
    assert_eq!(get_h3_unidirectional_edge(sf, ring2[0]), H3_NULL, "non-neighbors have no edge");
    assert_eq!(get_h3_unidirectional_edge(sf, sf), H3_NULL, "no edge to itself");
  }

  #[test]
  fn test_edge_from_pentagon() {
    let mut pentagon = H3Index::default();
    set_h3_index(&mut pentagon, 0, 4, Direction::Center);
    let mut adjacent = H3Index::default();
    set_h3_index(&mut adjacent, 0, 8, Direction::Center);

    let edge = get_h3_unidirectional_edge(pentagon, adjacent);
    assert_ne!(edge, H3_NULL, "pentagon to neighbor produces an edge");
    assert!(h3_unidirectional_edge_is_valid(edge));
  }

  #[test]
  fn test_edge_validation() {
    let sf = sf_cell(9);
    let mut ring = [H3_NULL; 6];
    hex_ring(sf, 1, &mut ring).unwrap();

    let edge = get_h3_unidirectional_edge(sf, ring[0]);
    assert!(h3_unidirectional_edge_is_valid(edge));
    assert!(!h3_unidirectional_edge_is_valid(sf), "cells do not validate as edges");

    let mut no_direction = sf;
    crate::h3_index::set_mode(&mut no_direction, H3_UNIEDGE_MODE);
    assert!(
      !h3_unidirectional_edge_is_valid(no_direction),
      "edge mode without a direction"
    );

    // pentagon at res 2: direction 2 exists, direction 1 is deleted
    let pentagon = H3Index(0x821c07fffffffff);
    let mut good = pentagon;
    crate::h3_index::set_mode(&mut good, H3_UNIEDGE_MODE);
    set_reserved_bits(&mut good, 2);
    assert!(h3_unidirectional_edge_is_valid(good), "pentagonal edge validates");

    let mut bad = good;
    set_reserved_bits(&mut bad, 1);
    assert!(!h3_unidirectional_edge_is_valid(bad), "deleted pentagonal edge");
  }

  #[test]
  fn test_edges_from_hexagon() {
    let sf = sf_cell(9);
    let edges = get_h3_unidirectional_edges_from_hexagon(sf);
    for edge in edges {
      assert!(h3_unidirectional_edge_is_valid(edge));
      assert_eq!(get_origin_h3_index_from_unidirectional_edge(edge), sf);
      assert_ne!(get_destination_h3_index_from_unidirectional_edge(edge), sf);
    }
  }

  #[test]
  fn test_edges_from_pentagon() {
    let pentagon = H3Index(0x821c07fffffffff);
    let edges = get_h3_unidirectional_edges_from_hexagon(pentagon);

    let missing = edges.iter().filter(|&&e| e == H3_NULL).count();
    assert_eq!(missing, 1, "exactly one edge deleted for the pentagon");
    for edge in edges.into_iter().filter(|&e| e != H3_NULL) {
      assert!(h3_unidirectional_edge_is_valid(edge));
      assert_eq!(get_origin_h3_index_from_unidirectional_edge(edge), pentagon);
    }
  }

  #[test]
  fn test_edge_boundary_hexagon() {
    let sf = sf_cell(9);
    let boundary = crate::indexing::h3_to_geo_boundary(sf).unwrap();
    for edge in get_h3_unidirectional_edges_from_hexagon(sf) {
      let gb = get_h3_unidirectional_edge_boundary(edge).unwrap();
      assert_eq!(gb.num_verts, 2, "hexagon edge boundary is a segment");
      // both endpoints appear on the cell boundary
      for v in &gb.verts[..gb.num_verts] {
        assert!(
          boundary.verts[..boundary.num_verts]
            .iter()
            .any(|b| crate::latlng::geo_almost_equal(b, v)),
          "edge vertex on cell boundary"
        );
      }
    }
  }

  #[test]
  fn test_edge_boundary_class_iii_pentagon() {
    let pentagon = H3Index(0x811c0ffffffffff);
    let edges = get_h3_unidirectional_edges_from_hexagon(pentagon);

    let mut missing = 0;
    for edge in edges {
      if edge == H3_NULL {
        missing += 1;
        continue;
      }
      let gb = get_h3_unidirectional_edge_boundary(edge).unwrap();
      assert_eq!(gb.num_verts, 3, "class III pentagon edge carries a distortion vertex");
    }
    assert_eq!(missing, 1);
  }

  #[test]
  fn test_edge_boundary_invalid() {
    assert_eq!(get_h3_unidirectional_edge_boundary(H3_NULL), Err(H3Error::EdgeInvalid));
  }
}
