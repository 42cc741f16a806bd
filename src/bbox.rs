//! Geographic bounding boxes over loops of vertices, with antimeridian
//! handling.

use crate::constants::M_2PI;
use crate::latlng::{constrain_lng, point_dist_km};
use crate::measures::edge_length_km;
use crate::types::{BBox, GeoCoord, Geofence, GeoPolygon, H3Error};

/// Whether the box crosses the antimeridian.
#[inline]
#[must_use]
pub(crate) fn bbox_is_transmeridian(bbox: &BBox) -> bool {
  bbox.east < bbox.west
}

/// Center point of the box.
#[must_use]
pub(crate) fn bbox_center(bbox: &BBox) -> GeoCoord {
  let east = if bbox_is_transmeridian(bbox) { bbox.east + M_2PI } else { bbox.east };
  GeoCoord {
    lat: (bbox.north + bbox.south) / 2.0,
    lon: constrain_lng((east + bbox.west) / 2.0),
  }
}

/// Whether the box contains the point; transmeridian boxes wrap their
/// longitude test around.
#[must_use]
pub(crate) fn bbox_contains_point(bbox: &BBox, point: &GeoCoord) -> bool {
  if point.lat < bbox.south || point.lat > bbox.north {
    return false;
  }
  if bbox_is_transmeridian(bbox) {
    point.lon >= bbox.west || point.lon <= bbox.east
  } else {
    point.lon >= bbox.west && point.lon <= bbox.east
  }
}

/// Radius of the box in grid cells at `res`: the k-ring radius around the
/// box center guaranteed to reach every cell whose center falls inside.
pub(crate) fn bbox_hex_radius(bbox: &BBox, res: i32) -> Result<i32, H3Error> {
  let center = bbox_center(bbox);
  // use a vertex on the side closest to the equator, for the longest
  // great-circle distance
  let vertex = GeoCoord {
    lat: if bbox.north < 0.0 { bbox.north } else { bbox.south },
    lon: bbox.east,
  };
  let bbox_radius_km = point_dist_km(&center, &vertex);

  // the closest vertex of a cell k rings out is at least 1.5 k cell radii
  // away; the edge length approximates the cell radius
  let center_hex_radius_km = edge_length_km(res)?;
  Ok((bbox_radius_km / (1.5 * center_hex_radius_km)).ceil() as i32)
}

/// Bounding box of a loop, flagged transmeridian when any arc spans more
/// than half the sphere in longitude.
#[must_use]
pub(crate) fn bbox_from_geofence(geofence: &Geofence) -> BBox {
  if geofence.verts.is_empty() {
    return BBox::default();
  }

  let mut bbox = BBox {
    north: f64::MIN,
    south: f64::MAX,
    east: f64::MIN,
    west: f64::MAX,
  };
  let mut is_transmeridian = false;

  let n = geofence.verts.len();
  for (j, coord) in geofence.verts.iter().enumerate() {
    let next = &geofence.verts[(j + 1) % n];
    bbox.south = bbox.south.min(coord.lat);
    bbox.north = bbox.north.max(coord.lat);
    bbox.west = bbox.west.min(coord.lon);
    bbox.east = bbox.east.max(coord.lon);
    if (coord.lon - next.lon).abs() > crate::constants::M_PI {
      is_transmeridian = true;
    }
  }

  if is_transmeridian {
    // east becomes the greatest negative longitude, west the least
    // positive one
    bbox.east = f64::MIN;
    bbox.west = f64::MAX;
    for coord in &geofence.verts {
      if coord.lon < 0.0 {
        bbox.east = bbox.east.max(coord.lon);
      } else {
        bbox.west = bbox.west.min(coord.lon);
      }
    }
  }

  bbox
}

/// Bounding boxes for a polygon's exterior loop and each hole, in that
/// order.
#[must_use]
pub(crate) fn bboxes_from_geo_polygon(polygon: &GeoPolygon) -> Vec<BBox> {
  let mut bboxes = Vec::with_capacity(polygon.holes.len() + 1);
  bboxes.push(bbox_from_geofence(&polygon.geofence));
  for hole in &polygon.holes {
    bboxes.push(bbox_from_geofence(hole));
  }
  bboxes
}
