#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // pervasive in the grid math
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // index literals read better raw
#![allow(clippy::similar_names)]
#![allow(clippy::missing_errors_doc)]

//! `hexa7` is a hierarchical hexagonal geospatial indexing system: the
//! sphere is carved into an icosahedral aperture-7 discrete global grid and
//! each cell is addressed by a compact 64-bit index.
//!
//! The core operations convert between geographic coordinates and cell
//! indexes ([`geo_to_h3`], [`h3_to_geo`], [`h3_to_geo_boundary`]), traverse
//! cell neighborhoods ([`k_ring`], [`hex_ring`], [`hex_range`]), navigate
//! the resolution hierarchy ([`h3_to_parent`], [`h3_to_children`],
//! [`compact`], [`uncompact`]), address directed edges between adjacent
//! cells, and aggregate regions ([`polyfill`], [`h3_set_to_linked_geo`]).
//!
//! All functions are pure; output buffers are caller-owned and sized via
//! the corresponding `max_*` query.

pub mod base_cells;
pub mod bbox;
pub mod constants;
pub mod coords;
pub mod edges;
pub mod h3_index;
pub mod hierarchy;
pub mod indexing;
pub mod latlng;
pub mod math;
pub mod measures;
pub mod polygon;
pub mod regions;
pub mod traversal;
pub mod types;

pub use constants::MAX_CELL_BNDRY_VERTS;
pub use types::{
  BBox, CoordIJK, Direction, FaceIJK, GeoBoundary, GeoCoord, Geofence, GeoPolygon, H3Error, H3Index, Vec2d, Vec3d,
  H3_NULL,
};

pub use edges::{
  get_destination_h3_index_from_unidirectional_edge, get_h3_indexes_from_unidirectional_edge,
  get_h3_unidirectional_edge, get_h3_unidirectional_edge_boundary, get_h3_unidirectional_edges_from_hexagon,
  get_origin_h3_index_from_unidirectional_edge, h3_unidirectional_edge_is_valid,
};
pub use h3_index::inspection::{h3_get_base_cell, h3_get_resolution, h3_is_pentagon, h3_is_res_class_iii, h3_is_valid};
pub use h3_index::string_conv::{h3_to_string, string_to_h3};
pub use hierarchy::compaction::{compact, max_uncompact_size, uncompact};
pub use hierarchy::parent_child::{h3_to_children, h3_to_parent, max_h3_to_children_size};
pub use indexing::{geo_to_h3, h3_to_geo, h3_to_geo_boundary};
pub use latlng::{degs_to_rads, point_dist_km, point_dist_m, point_dist_rads, rads_to_degs};
pub use measures::{edge_length_km, edge_length_m, hex_area_km2, hex_area_m2, num_hexagons};
pub use regions::linked_geo::{
  destroy_linked_polygon, h3_set_to_linked_geo, LinkedGeoCoord, LinkedGeoLoop, LinkedGeoPolygon,
};
pub use regions::polyfill::{max_polyfill_size, polyfill};
pub use traversal::neighbors::h3_indexes_are_neighbors;
pub use traversal::rings::{
  hex_range, hex_range_distances, hex_ranges, hex_ring, k_ring, k_ring_distances, max_kring_size,
};
