//! Enumerating the cells whose centers fall inside a polygon.

use crate::bbox::{bbox_center, bbox_from_geofence, bbox_hex_radius, bboxes_from_geo_polygon};
use crate::constants::MAX_H3_RES;
use crate::indexing::{geo_to_h3, h3_to_geo};
use crate::polygon::point_inside_polygon;
use crate::traversal::rings::{k_ring, max_kring_size};
use crate::types::{GeoPolygon, H3Error, H3Index, H3_NULL};

/// Conservative upper bound on the number of cells [`polyfill`] can
/// produce: the k-ring population of the polygon's bounding box radius.
pub fn max_polyfill_size(polygon: &GeoPolygon, res: i32) -> Result<i64, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  let bbox = bbox_from_geofence(&polygon.geofence);
  let k = bbox_hex_radius(&bbox, res)?;
  Ok(max_kring_size(k))
}

/// Fills `out` with all cells at `res` whose centers lie inside the
/// polygon's exterior loop and outside every hole. Unused slots are left as
/// `H3_NULL` and output order is unspecified. `out` must hold
/// [`max_polyfill_size`] slots.
///
/// Candidates are drawn from a k-ring around the bounding-box center, then
/// kept or dropped by a ray-cast containment test on each cell center; the
/// test splits transmeridian loops at the antimeridian and counts boundary
/// points as outside.
pub fn polyfill(polygon: &GeoPolygon, res: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }

  let bboxes = bboxes_from_geo_polygon(polygon);
  let k = bbox_hex_radius(&bboxes[0], res)?;
  let num_candidates = max_kring_size(k) as usize;
  if out.len() < num_candidates {
    return Err(H3Error::MemoryBounds);
  }

  if polygon.geofence.verts.is_empty() {
    out.fill(H3_NULL);
    return Ok(());
  }

  // every candidate is within k rings of the cell at the box center
  let center = bbox_center(&bboxes[0]);
  let center_cell = geo_to_h3(&center, res)?;
  k_ring(center_cell, k, &mut out[..num_candidates])?;

  // purge candidates whose centers fall outside the polygon
  for slot in &mut out[..num_candidates] {
    if *slot == H3_NULL {
      continue;
    }
    let cell_center = h3_to_geo(*slot)?;
    if !point_inside_polygon(polygon, &bboxes, &cell_center) {
      *slot = H3_NULL;
    }
  }
  out[num_candidates..].fill(H3_NULL);

  Ok(())
}
