//! End to end indexing checks: coordinates in, cells out, and back.

use hexa7::*;

fn sf() -> GeoCoord {
  GeoCoord {
    lat: degs_to_rads(37.779265),
    lon: degs_to_rads(-122.419277),
  }
}

#[test]
fn test_geo_to_h3_produces_valid_cells() {
  for res in 0..=15 {
    let cell = geo_to_h3(&sf(), res).unwrap();
    assert!(h3_is_valid(cell), "res {} cell is valid", res);
    assert_eq!(h3_get_resolution(cell), res);
  }
}

#[test]
fn test_round_trip_within_edge_length() {
  let input = sf();
  for res in 0..=15 {
    let cell = geo_to_h3(&input, res).unwrap();
    let center = h3_to_geo(cell).unwrap();
    // the input sits inside the cell, so the center is within one cell
    // circumradius; allow for projection distortion over the average
    let dist_km = point_dist_km(&input, &center);
    assert!(
      dist_km <= 1.5 * edge_length_km(res).unwrap(),
      "res {}: center within an edge length of the input ({} km)",
      res,
      dist_km
    );
  }
}

#[test]
fn test_round_trips_at_awkward_points() {
  let points = [
    GeoCoord { lat: 0.0, lon: 0.0 },
    GeoCoord {
      lat: degs_to_rads(89.9),
      lon: degs_to_rads(45.0),
    },
    GeoCoord {
      lat: degs_to_rads(-89.9),
      lon: degs_to_rads(-45.0),
    },
    GeoCoord {
      lat: degs_to_rads(12.5),
      lon: degs_to_rads(179.999),
    },
    GeoCoord {
      lat: degs_to_rads(-33.2),
      lon: degs_to_rads(-179.999),
    },
  ];
  for point in points {
    for res in [0, 4, 9, 15] {
      let cell = geo_to_h3(&point, res).unwrap();
      assert!(h3_is_valid(cell));
      let center = h3_to_geo(cell).unwrap();
      assert_eq!(geo_to_h3(&center, res).unwrap(), cell, "center re-indexes to itself");
    }
  }
}

#[test]
fn test_boundary_surrounds_center() {
  for res in [2, 6, 10] {
    let cell = geo_to_h3(&sf(), res).unwrap();
    let center = h3_to_geo(cell).unwrap();
    let boundary = h3_to_geo_boundary(cell).unwrap();
    assert!(boundary.num_verts >= 6);

    // every boundary vertex is about one edge length from the center
    let edge_km = edge_length_km(res).unwrap();
    for v in &boundary.verts[..boundary.num_verts] {
      let d = point_dist_km(&center, v);
      assert!(d > 0.1 * edge_km && d < 3.0 * edge_km, "vertex distance {} at res {}", d, res);
    }
  }
}

#[test]
fn test_pentagon_boundary() {
  // res 0 pentagon (base cell 4)
  let pentagon = string_to_h3("8009fffffffffff").unwrap();
  assert!(h3_is_pentagon(pentagon));
  let boundary = h3_to_geo_boundary(pentagon).unwrap();
  assert_eq!(boundary.num_verts, 5, "class II pentagon has no distortion vertices");

  // res 1 pentagon picks up a distortion vertex per edge
  let pentagon = string_to_h3("811c0ffffffffff").unwrap();
  assert!(h3_is_pentagon(pentagon));
  assert!(h3_is_res_class_iii(pentagon));
  let boundary = h3_to_geo_boundary(pentagon).unwrap();
  assert_eq!(boundary.num_verts, 10);
}

#[test]
fn test_string_round_trip_all_resolutions() {
  for res in 0..=15 {
    let cell = geo_to_h3(&sf(), res).unwrap();
    let s = h3_to_string(cell);
    assert_eq!(string_to_h3(&s).unwrap(), cell, "string round trip at res {}", res);
  }
}

#[test]
fn test_base_cell_inspection() {
  for res in 0..=15 {
    let cell = geo_to_h3(&sf(), res).unwrap();
    let bc = h3_get_base_cell(cell);
    assert!((0..122).contains(&bc));
  }
}
