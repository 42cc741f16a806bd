//! Conversion between geographic coordinates and cell indexes.

use crate::constants::{EPSILON_RAD, MAX_H3_RES, M_PI_2, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face_ijk::{_face_ijk_pent_to_geo_boundary, _face_ijk_to_geo, _face_ijk_to_geo_boundary, _geo_to_face_ijk};
use crate::h3_index::inspection::{h3_is_pentagon, h3_is_valid};
use crate::h3_index::{_face_ijk_to_h3, _h3_to_face_ijk, get_resolution};
use crate::types::{GeoBoundary, GeoCoord, H3Error, H3Index, H3_NULL};

/// The cell containing the given point at resolution `res`.
pub fn geo_to_h3(g: &GeoCoord, res: i32) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  if !g.lat.is_finite() || !g.lon.is_finite() || g.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(H3Error::LatLngDomain);
  }

  let fijk = _geo_to_face_ijk(g, res);
  let h = _face_ijk_to_h3(&fijk, res);
  if h == H3_NULL {
    Err(H3Error::Failed)
  } else {
    Ok(h)
  }
}

/// The center point of a cell.
pub fn h3_to_geo(h: H3Index) -> Result<GeoCoord, H3Error> {
  if !h3_is_valid(h) {
    return Err(H3Error::CellInvalid);
  }
  let fijk = _h3_to_face_ijk(h)?;
  Ok(_face_ijk_to_geo(&fijk, get_resolution(h)))
}

/// The boundary of a cell in counter-clockwise order.
pub fn h3_to_geo_boundary(h: H3Index) -> Result<GeoBoundary, H3Error> {
  if !h3_is_valid(h) {
    return Err(H3Error::CellInvalid);
  }
  let fijk = _h3_to_face_ijk(h)?;

  let mut gb = GeoBoundary::default();
  let res = get_resolution(h);
  if h3_is_pentagon(h) {
    _face_ijk_pent_to_geo_boundary(&fijk, res, 0, NUM_PENT_VERTS as i32, &mut gb);
  } else {
    _face_ijk_to_geo_boundary(&fijk, res, 0, NUM_HEX_VERTS as i32, &mut gb);
  }
  Ok(gb)
}
