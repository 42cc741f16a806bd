//! Point-in-polygon testing and loop winding over spherical vertex loops,
//! shared by polyfill and the cell-set-to-polygon reconstruction.

use crate::bbox::{bbox_contains_point, bbox_is_transmeridian};
use crate::constants::M_2PI;
use crate::types::{BBox, GeoCoord, GeoPolygon};

/// Normalizes a longitude for comparison across the antimeridian: on
/// transmeridian loops, western-hemisphere longitudes shift east by 2 pi.
#[inline]
#[must_use]
fn _normalize_lon(lon: f64, is_transmeridian: bool) -> f64 {
  if is_transmeridian && lon < 0.0 {
    lon + M_2PI
  } else {
    lon
  }
}

/// Ray-cast containment test of `coord` against a vertex loop. Rays are
/// cast westward; points exactly on a boundary bias to outside.
#[must_use]
pub(crate) fn _point_inside_loop(verts: &[GeoCoord], bbox: &BBox, coord: &GeoCoord) -> bool {
  if verts.is_empty() {
    return false;
  }
  // fail fast if outside the bounding box
  if !bbox_contains_point(bbox, coord) {
    return false;
  }

  let is_transmeridian = bbox_is_transmeridian(bbox);
  let mut contains = false;

  let lat = coord.lat;
  let mut lng = _normalize_lon(coord.lon, is_transmeridian);

  let n = verts.len();
  for i in 0..n {
    let mut a = verts[i];
    let mut b = verts[(i + 1) % n];

    // the ray cast wants the southern endpoint first
    if a.lat > b.lat {
      std::mem::swap(&mut a, &mut b);
    }

    // segments entirely north or south of the point cannot intersect the
    // ray; the half-open test keeps shared vertices from double counting
    if lat < a.lat || lat >= b.lat {
      continue;
    }

    let a_lng = _normalize_lon(a.lon, is_transmeridian);
    let b_lng = _normalize_lon(b.lon, is_transmeridian);

    // bias westerly when the point matches a vertex longitude exactly
    if a_lng == lng || b_lng == lng {
      lng -= f64::EPSILON;
    }

    // only intersections west of the point count
    if a_lng > lng && b_lng > lng {
      continue;
    }

    let ratio = (lat - a.lat) / (b.lat - a.lat);
    let test_lng = _normalize_lon(a_lng + (b_lng - a_lng) * ratio, is_transmeridian);
    if test_lng <= lng {
      contains = !contains;
    }
  }

  contains
}

/// Winding of a vertex loop via the shoelace sum; a positive sum is
/// clockwise.
#[must_use]
pub(crate) fn _loop_is_clockwise(verts: &[GeoCoord], is_transmeridian: bool) -> bool {
  if verts.len() < 3 {
    return false;
  }
  let n = verts.len();
  let mut sum = 0.0;
  for i in 0..n {
    let a = &verts[i];
    let b = &verts[(i + 1) % n];
    let a_lng = _normalize_lon(a.lon, is_transmeridian);
    let b_lng = _normalize_lon(b.lon, is_transmeridian);
    sum += (b_lng - a_lng) * (b.lat + a.lat);
  }
  sum > 0.0
}

/// Whether the point is inside the polygon's exterior loop and outside
/// every hole. `bboxes[0]` covers the exterior, `bboxes[1..]` the holes.
#[must_use]
pub(crate) fn point_inside_polygon(polygon: &GeoPolygon, bboxes: &[BBox], coord: &GeoCoord) -> bool {
  if !_point_inside_loop(&polygon.geofence.verts, &bboxes[0], coord) {
    return false;
  }
  for (hole, bbox) in polygon.holes.iter().zip(&bboxes[1..]) {
    if _point_inside_loop(&hole.verts, bbox, coord) {
      return false;
    }
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bbox::{bbox_from_geofence, bboxes_from_geo_polygon};
  use crate::latlng::_geo_from_degs;
  use crate::types::Geofence;

  fn square_fence(half_deg: f64) -> Geofence {
    Geofence {
      verts: vec![
        _geo_from_degs(half_deg, half_deg),
        _geo_from_degs(half_deg, -half_deg),
        _geo_from_degs(-half_deg, -half_deg),
        _geo_from_degs(-half_deg, half_deg),
      ],
    }
  }

  #[test]
  fn test_point_inside_loop() {
    let fence = square_fence(1.0);
    let bbox = bbox_from_geofence(&fence);

    assert!(_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, 0.0)));
    assert!(_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.5, -0.5)));
    assert!(!_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(1.5, 0.0)));
    assert!(!_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, 1.5)));
  }

  #[test]
  fn test_point_inside_loop_transmeridian() {
    let fence = Geofence {
      verts: vec![
        _geo_from_degs(1.0, 179.0),
        _geo_from_degs(1.0, -179.0),
        _geo_from_degs(-1.0, -179.0),
        _geo_from_degs(-1.0, 179.0),
      ],
    };
    let bbox = bbox_from_geofence(&fence);

    assert!(_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, 179.5)));
    assert!(_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, -179.5)));
    assert!(!_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, 0.0)));
    assert!(!_point_inside_loop(&fence.verts, &bbox, &_geo_from_degs(0.0, 178.0)));
  }

  #[test]
  fn test_loop_winding() {
    // square_fence runs counter-clockwise: west along the north edge first
    let ccw = square_fence(1.0);
    assert!(!_loop_is_clockwise(&ccw.verts, false));

    let mut cw_verts = ccw.verts.clone();
    cw_verts.reverse();
    assert!(_loop_is_clockwise(&cw_verts, false));
  }

  #[test]
  fn test_point_inside_polygon_with_hole() {
    let polygon = GeoPolygon {
      geofence: square_fence(2.0),
      holes: vec![square_fence(0.5)],
    };
    let bboxes = bboxes_from_geo_polygon(&polygon);

    assert!(
      point_inside_polygon(&polygon, &bboxes, &_geo_from_degs(1.0, 1.0)),
      "between hole and exterior"
    );
    assert!(
      !point_inside_polygon(&polygon, &bboxes, &_geo_from_degs(0.0, 0.0)),
      "inside the hole"
    );
    assert!(
      !point_inside_polygon(&polygon, &bboxes, &_geo_from_degs(3.0, 0.0)),
      "outside the exterior"
    );
  }
}
