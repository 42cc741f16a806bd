//! Public data types shared across the crate.

use crate::constants::MAX_CELL_BNDRY_VERTS;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit grid index addressing a cell or a unidirectional edge.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// The null index, used as an error or empty-slot sentinel.
pub const H3_NULL: H3Index = H3Index(0);

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

/// Latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lon: f64,
}

impl GeoCoord {
  pub const fn new(lat: f64, lon: f64) -> Self {
    GeoCoord { lat, lon }
  }
}

/// Cell boundary in latitude/longitude, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBoundary {
  /// Number of vertices in use.
  pub num_verts: usize,
  /// Vertex storage; entries past `num_verts` are not significant.
  pub verts: [GeoCoord; MAX_CELL_BNDRY_VERTS],
}

impl Default for GeoBoundary {
  fn default() -> Self {
    GeoBoundary {
      num_verts: 0,
      verts: [GeoCoord::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

/// A closed loop of geographic vertices. The final vertex connects back to
/// the first implicitly.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geofence {
  pub verts: Vec<GeoCoord>,
}

/// A polygon with one exterior loop and zero or more hole loops.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  /// Exterior boundary.
  pub geofence: Geofence,
  /// Interior holes.
  pub holes: Vec<Geofence>,
}

/// Hexagon lattice coordinates. The three axes are spaced 120 degrees apart;
/// normalized coordinates have all components non-negative with at least one
/// equal to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

impl CoordIJK {
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    CoordIJK { i, j, k }
  }
}

/// An icosahedron face number paired with lattice coordinates in that face's
/// face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face number (0-19).
  pub face: i32,
  pub coord: CoordIJK,
}

/// 2D cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// Geographic bounding box in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  pub north: f64,
  pub south: f64,
  pub east: f64,
  pub west: f64,
}

/// A refinement digit: one of the seven aperture-7 positions (0-6), or the
/// unused sentinel (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center of the parent cell.
  #[default]
  Center = 0,
  /// K-axes direction. Deleted below pentagons.
  KAxes = 1,
  /// J-axes direction.
  JAxes = 2,
  /// J+K direction.
  JkAxes = 3,
  /// I-axes direction.
  IAxes = 4,
  /// I+K direction.
  IkAxes = 5,
  /// I+J direction.
  IjAxes = 6,
  /// Unused digit marker.
  InvalidDigit = 7,
}

impl Direction {
  /// Reconstructs a direction from its 3-bit encoding. Values above 7 fold
  /// to `InvalidDigit`.
  #[inline]
  #[must_use]
  pub(crate) const fn from_digit(value: u8) -> Self {
    match value {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }
}

/// Library error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum H3Error {
  /// The operation failed without a more specific cause.
  Failed = 1,
  /// An argument was outside its acceptable range.
  Domain = 2,
  /// A latitude or longitude argument was outside its acceptable range.
  LatLngDomain = 3,
  /// A resolution argument was outside 0..=15.
  ResDomain = 4,
  /// A cell index argument was not valid.
  CellInvalid = 5,
  /// A unidirectional edge index argument was not valid.
  EdgeInvalid = 6,
  /// Pentagon distortion was encountered and the algorithm declined to
  /// produce output.
  Pentagon = 9,
  /// Duplicate input was encountered where inputs must be distinct.
  DuplicateInput = 10,
  /// Cell arguments were not neighbors.
  NotNeighbors = 11,
  /// Cell arguments had incompatible resolutions.
  ResMismatch = 12,
  /// A caller-provided buffer was not large enough.
  MemoryBounds = 14,
}

impl fmt::Display for H3Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      H3Error::Failed => "operation failed",
      H3Error::Domain => "argument out of range",
      H3Error::LatLngDomain => "latitude or longitude out of range",
      H3Error::ResDomain => "resolution out of range",
      H3Error::CellInvalid => "invalid cell index",
      H3Error::EdgeInvalid => "invalid edge index",
      H3Error::Pentagon => "pentagon distortion encountered",
      H3Error::DuplicateInput => "duplicate input",
      H3Error::NotNeighbors => "cells are not neighbors",
      H3Error::ResMismatch => "incompatible resolutions",
      H3Error::MemoryBounds => "output buffer too small",
    };
    f.write_str(msg)
  }
}

impl std::error::Error for H3Error {}
