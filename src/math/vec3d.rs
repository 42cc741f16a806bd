use crate::types::{GeoCoord, Vec3d};

#[inline]
fn _square(x: f64) -> f64 {
  x * x
}

/// Squared euclidean distance between two 3D points.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)
}

/// Unit-sphere 3D coordinate for a spherical coordinate.
#[inline]
#[must_use]
pub(crate) fn _geo_to_vec3d(geo: &GeoCoord) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lon.cos() * r,
    y: geo.lon.sin() * r,
    z: geo.lat.sin(),
  }
}
