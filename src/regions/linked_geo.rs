//! Reconstruction of the outer boundary of a cell set as linked polygons
//! with holes.
//!
//! Every directed boundary edge of every cell is thrown into a vertex
//! graph; edges whose reverse is also present cancel, leaving only the
//! outline. The surviving edges are traced into closed loops, classified by
//! winding, and holes are attached to their enclosing outer loop.

use crate::bbox::{bbox_from_geofence, bbox_is_transmeridian};
use crate::h3_index::get_resolution;
use crate::h3_index::inspection::h3_is_valid;
use crate::indexing::h3_to_geo_boundary;
use crate::latlng::geo_almost_equal;
use crate::polygon::{_loop_is_clockwise, _point_inside_loop};
use crate::types::{BBox, GeoCoord, Geofence, H3Error, H3Index, H3_NULL};

/// A vertex in a linked loop.
#[derive(Debug)]
pub struct LinkedGeoCoord {
  pub vertex: GeoCoord,
  pub next: Option<Box<LinkedGeoCoord>>,
}

/// A closed loop of linked vertices. Loops chain through `next`; within a
/// polygon the first loop is the outer boundary and any following loops are
/// holes.
#[derive(Debug, Default)]
pub struct LinkedGeoLoop {
  pub first: Option<Box<LinkedGeoCoord>>,
  pub next: Option<Box<LinkedGeoLoop>>,
}

/// A polygon in a linked multi-polygon. The root polygon owns the entire
/// graph; dropping it releases every loop and vertex without recursing.
#[derive(Debug, Default)]
pub struct LinkedGeoPolygon {
  pub first: Option<Box<LinkedGeoLoop>>,
  pub next: Option<Box<LinkedGeoPolygon>>,
}

impl LinkedGeoLoop {
  /// The loop's vertices in order.
  pub fn vertices(&self) -> impl Iterator<Item = &GeoCoord> {
    let mut cursor = self.first.as_deref();
    std::iter::from_fn(move || {
      let node = cursor?;
      cursor = node.next.as_deref();
      Some(&node.vertex)
    })
  }

  fn from_verts(verts: Vec<GeoCoord>) -> Self {
    let mut first = None;
    for vertex in verts.into_iter().rev() {
      first = Some(Box::new(LinkedGeoCoord { vertex, next: first }));
    }
    LinkedGeoLoop { first, next: None }
  }
}

impl LinkedGeoPolygon {
  /// This polygon and every polygon chained after it.
  pub fn polygons(&self) -> impl Iterator<Item = &LinkedGeoPolygon> {
    let mut cursor = Some(self);
    std::iter::from_fn(move || {
      let polygon = cursor?;
      cursor = polygon.next.as_deref();
      Some(polygon)
    })
  }

  /// The polygon's loops: outer boundary first, then holes.
  pub fn loops(&self) -> impl Iterator<Item = &LinkedGeoLoop> {
    let mut cursor = self.first.as_deref();
    std::iter::from_fn(move || {
      let l = cursor?;
      cursor = l.next.as_deref();
      Some(l)
    })
  }
}

impl Drop for LinkedGeoPolygon {
  fn drop(&mut self) {
    // unlink iteratively so deep chains cannot overflow the stack
    let mut polygon = self.next.take();
    while let Some(mut p) = polygon {
      polygon = p.next.take();
    }
    let mut geo_loop = self.first.take();
    while let Some(mut l) = geo_loop {
      let mut coord = l.first.take();
      while let Some(mut c) = coord {
        coord = c.next.take();
      }
      geo_loop = l.next.take();
    }
  }
}

/// Releases the full linked polygon graph. Equivalent to dropping the root.
pub fn destroy_linked_polygon(polygon: LinkedGeoPolygon) {
  drop(polygon);
}

// A directed boundary edge held in the vertex graph, bucketed by its origin
// vertex.
#[derive(Debug, Clone, Copy)]
struct VertexEdge {
  from: GeoCoord,
  to: GeoCoord,
}

struct VertexGraph {
  buckets: Vec<Vec<VertexEdge>>,
}

// Bucket quantum in radians; far coarser than the vertex-equality epsilon,
// so equal-within-epsilon vertices land in the same or an adjacent quantum
// cell.
const BUCKET_QUANTUM: f64 = 1e-6;

impl VertexGraph {
  fn new(num_buckets: usize) -> Self {
    VertexGraph {
      buckets: vec![Vec::new(); num_buckets.max(1)],
    }
  }

  fn bucket_index(&self, lat_q: i64, lon_q: i64) -> usize {
    (lat_q.wrapping_mul(2_654_435_761).wrapping_add(lon_q).unsigned_abs() % self.buckets.len() as u64) as usize
  }

  fn quantize(vertex: &GeoCoord) -> (i64, i64) {
    (
      (vertex.lat / BUCKET_QUANTUM).round() as i64,
      (vertex.lon / BUCKET_QUANTUM).round() as i64,
    )
  }

  fn add_edge(&mut self, from: GeoCoord, to: GeoCoord) {
    let (lat_q, lon_q) = Self::quantize(&from);
    let bucket = self.bucket_index(lat_q, lon_q);
    self.buckets[bucket].push(VertexEdge { from, to });
  }

  /// Searches the bucket of `from`'s quantum cell and its neighbors, since
  /// an equal-within-epsilon vertex may quantize one cell over.
  fn find_in_neighborhood(&mut self, from: &GeoCoord, pred: impl Fn(&VertexEdge) -> bool) -> Option<VertexEdge> {
    let (lat_q, lon_q) = Self::quantize(from);
    for dlat in -1..=1 {
      for dlon in -1..=1 {
        let bucket = self.bucket_index(lat_q + dlat, lon_q + dlon);
        if let Some(pos) = self.buckets[bucket].iter().position(&pred) {
          return Some(self.buckets[bucket].swap_remove(pos));
        }
      }
    }
    None
  }

  /// Removes the edge `from -> to` if present.
  fn remove_edge(&mut self, from: &GeoCoord, to: &GeoCoord) -> bool {
    self
      .find_in_neighborhood(from, |e| geo_almost_equal(&e.from, from) && geo_almost_equal(&e.to, to))
      .is_some()
  }

  /// Removes and returns an edge starting at `from`, if one exists.
  fn take_edge_from(&mut self, from: &GeoCoord) -> Option<VertexEdge> {
    self.find_in_neighborhood(from, |e| geo_almost_equal(&e.from, from))
  }

  /// Removes and returns any remaining edge.
  fn take_any_edge(&mut self) -> Option<VertexEdge> {
    for edges in &mut self.buckets {
      if let Some(edge) = edges.pop() {
        return Some(edge);
      }
    }
    None
  }
}

/// Adds every boundary edge of every cell to the graph, cancelling edges
/// interior to the set.
fn _h3_set_to_vertex_graph(h3_set: &[H3Index], graph: &mut VertexGraph) -> Result<(), H3Error> {
  let mut res = None;
  for &cell in h3_set {
    if cell == H3_NULL {
      continue;
    }
    if !h3_is_valid(cell) {
      return Err(H3Error::CellInvalid);
    }
    match res {
      None => res = Some(get_resolution(cell)),
      Some(r) => {
        if get_resolution(cell) != r {
          return Err(H3Error::ResMismatch);
        }
      }
    }

    let boundary = h3_to_geo_boundary(cell)?;
    for i in 0..boundary.num_verts {
      let from = boundary.verts[i];
      let to = boundary.verts[(i + 1) % boundary.num_verts];
      // an edge whose reverse is already present is interior; both halves
      // cancel
      if !graph.remove_edge(&to, &from) {
        graph.add_edge(from, to);
      }
    }
  }
  Ok(())
}

/// Traces the surviving edges into closed vertex loops.
fn _vertex_graph_to_loops(graph: &mut VertexGraph) -> Result<Vec<Vec<GeoCoord>>, H3Error> {
  let mut loops = Vec::new();
  while let Some(start) = graph.take_any_edge() {
    let mut verts = vec![start.from];
    let mut cursor = start.to;
    while !geo_almost_equal(&cursor, &start.from) {
      verts.push(cursor);
      let edge = graph.take_edge_from(&cursor).ok_or(H3Error::Failed)?;
      cursor = edge.to;
    }
    loops.push(verts);
  }
  Ok(loops)
}

fn _bbox_area(bbox: &BBox) -> f64 {
  let width = if bbox_is_transmeridian(bbox) {
    bbox.east - bbox.west + crate::constants::M_2PI
  } else {
    bbox.east - bbox.west
  };
  (bbox.north - bbox.south) * width
}

/// Builds the linked multi-polygon for the outline of a set of same
/// resolution cells. Counter-clockwise loops become outer boundaries,
/// clockwise loops become holes assigned to the innermost enclosing outer
/// loop. The returned root polygon owns the whole structure.
pub fn h3_set_to_linked_geo(h3_set: &[H3Index]) -> Result<LinkedGeoPolygon, H3Error> {
  let mut graph = VertexGraph::new(h3_set.len() * 6);
  _h3_set_to_vertex_graph(h3_set, &mut graph)?;
  let loops = _vertex_graph_to_loops(&mut graph)?;

  let mut outers: Vec<(Vec<GeoCoord>, BBox)> = Vec::new();
  let mut holes: Vec<(Vec<GeoCoord>, BBox)> = Vec::new();
  for verts in loops {
    let bbox = bbox_from_geofence(&Geofence { verts: verts.clone() });
    if _loop_is_clockwise(&verts, bbox_is_transmeridian(&bbox)) {
      holes.push((verts, bbox));
    } else {
      outers.push((verts, bbox));
    }
  }

  // each hole attaches to the smallest outer loop containing it
  let mut hole_assignments: Vec<Vec<Vec<GeoCoord>>> = (0..outers.len()).map(|_| Vec::new()).collect();
  for (verts, _bbox) in holes {
    let probe = verts[0];
    let mut best: Option<(usize, f64)> = None;
    for (i, (outer_verts, outer_bbox)) in outers.iter().enumerate() {
      if _point_inside_loop(outer_verts, outer_bbox, &probe) {
        let area = _bbox_area(outer_bbox);
        if best.map_or(true, |(_, best_area)| area < best_area) {
          best = Some((i, area));
        }
      }
    }
    // a hole with no enclosing outer loop cannot arise from a well-formed
    // cell set
    let (idx, _) = best.ok_or(H3Error::Failed)?;
    hole_assignments[idx].push(verts);
  }

  // link everything together, holes after their outer loop
  let mut root: Option<Box<LinkedGeoPolygon>> = None;
  for ((outer_verts, _), polygon_holes) in outers.into_iter().zip(hole_assignments).rev() {
    let mut first_loop = Box::new(LinkedGeoLoop::from_verts(outer_verts));
    let mut tail = &mut first_loop.next;
    for hole_verts in polygon_holes {
      *tail = Some(Box::new(LinkedGeoLoop::from_verts(hole_verts)));
      tail = &mut tail.as_mut().unwrap().next;
    }
    root = Some(Box::new(LinkedGeoPolygon {
      first: Some(first_loop),
      next: root,
    }));
  }

  Ok(root.map_or_else(LinkedGeoPolygon::default, |b| *b))
}
