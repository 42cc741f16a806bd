//! Spherical coordinate helpers: azimuths, great-circle math, and unit
//! conversions.

use crate::constants::{EARTH_RADIUS_KM, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::GeoCoord;

/// Normalizes radians to the range `[0, 2pi)`.
#[inline]
#[must_use]
pub(crate) fn _pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  while tmp >= M_2PI {
    tmp -= M_2PI;
  }
  tmp
}

/// Whether two spherical coordinates are within `threshold` of each other,
/// componentwise.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &GeoCoord, p2: &GeoCoord, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lon - p2.lon).abs() < threshold
}

/// Whether two spherical coordinates are within ~0.1mm of each other.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(p1: &GeoCoord, p2: &GeoCoord) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Constrains longitude to the range `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Azimuth from `p1` to `p2` in radians.
#[inline]
#[must_use]
pub(crate) fn _geo_azimuth_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  (p2.lat.cos() * (p2.lon - p1.lon).sin()).atan2(
    p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lon - p1.lon).cos(),
  )
}

/// The point at the given azimuth and great-circle distance (radians) from
/// `p1`.
#[must_use]
pub(crate) fn _geo_az_distance_rads(p1: &GeoCoord, az: f64, distance: f64) -> GeoCoord {
  if distance < EPSILON_RAD {
    return *p1;
  }

  let az = _pos_angle_rads(az);
  let mut p2 = GeoCoord::default();

  if az < EPSILON_RAD || (az - M_PI).abs() < EPSILON_RAD {
    // due north or south
    if az < EPSILON_RAD {
      p2.lat = p1.lat + distance;
    } else {
      p2.lat = p1.lat - distance;
    }

    if (p2.lat - M_PI_2).abs() < EPSILON_RAD {
      p2.lat = M_PI_2;
      p2.lon = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON_RAD {
      p2.lat = -M_PI_2;
      p2.lon = 0.0;
    } else {
      p2.lon = constrain_lng(p1.lon);
    }
  } else {
    let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    p2.lat = sin_lat.asin();

    if (p2.lat - M_PI_2).abs() < EPSILON_RAD {
      p2.lat = M_PI_2;
      p2.lon = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON_RAD {
      p2.lat = -M_PI_2;
      p2.lon = 0.0;
    } else {
      let inv_cos_p2 = 1.0 / p2.lat.cos();
      let sin_lng = (az.sin() * distance.sin() * inv_cos_p2).clamp(-1.0, 1.0);
      let cos_lng = ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / p1.lat.cos() * inv_cos_p2).clamp(-1.0, 1.0);
      p2.lon = constrain_lng(p1.lon + sin_lng.atan2(cos_lng));
    }
  }
  p2
}

/// Great-circle distance between two points in radians, by the haversine
/// formula.
#[must_use]
pub fn point_dist_rads(a: &GeoCoord, b: &GeoCoord) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lon - a.lon) * 0.5).sin();
  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
  2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

/// Great-circle distance between two points in kilometers.
#[must_use]
pub fn point_dist_km(a: &GeoCoord, b: &GeoCoord) -> f64 {
  point_dist_rads(a, b) * EARTH_RADIUS_KM
}

/// Great-circle distance between two points in meters.
#[must_use]
pub fn point_dist_m(a: &GeoCoord, b: &GeoCoord) -> f64 {
  point_dist_km(a, b) * 1000.0
}

/// Converts degrees to radians.
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Builds a spherical coordinate from components in decimal degrees.
#[inline]
#[must_use]
pub(crate) fn _geo_from_degs(lat_degs: f64, lon_degs: f64) -> GeoCoord {
  GeoCoord {
    lat: degs_to_rads(lat_degs),
    lon: degs_to_rads(lon_degs),
  }
}
