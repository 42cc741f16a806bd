//! Grid-wide constants: mathematical values, icosahedron geometry, and the
//! 64-bit index bit layout.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General-purpose comparison threshold.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// Comparison threshold of roughly 0.1mm, in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Comparison threshold of roughly 0.1mm, in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sin(60 degrees)
pub const M_SIN60: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SIN60;

/// sqrt(7)
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;

pub const M_ONETHIRD: f64 = 1.0 / 3.0;
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3.0 / 28.0)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Scaling factor from hex2d resolution 0 unit length (the distance between
/// adjacent cell centers on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;

/// Earth authalic radius in kilometers (WGS84).
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Finest grid resolution; resolutions are numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Number of resolution 0 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Number of pentagonal base cells.
pub const NUM_PENTAGONS: i32 = 12;
/// Vertices in a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Vertices in a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Maximum number of cell boundary vertices; the worst case is a Class III
/// pentagon with all five icosahedron-edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

// 64-bit index bit layout. From MSB to LSB: 1 reserved bit, 4 mode bits,
// 3 reserved/edge-direction bits, 4 resolution bits, 7 base cell bits, and
// fifteen 3-bit resolution digits.

pub const H3_PER_DIGIT_OFFSET: i32 = 3;
pub const H3_MODE_OFFSET: u64 = 59;
pub const H3_RESERVED_OFFSET: u64 = 56;
pub const H3_RES_OFFSET: u64 = 52;
pub const H3_BC_OFFSET: u64 = 45;

pub const H3_HIGH_BIT_MASK: u64 = 1 << 63;
pub const H3_MODE_MASK: u64 = 0b1111 << H3_MODE_OFFSET;
pub const H3_RESERVED_MASK: u64 = 0b111 << H3_RESERVED_OFFSET;
pub const H3_RES_MASK: u64 = 0b1111 << H3_RES_OFFSET;
pub const H3_BC_MASK: u64 = 0b111_1111 << H3_BC_OFFSET;
pub const H3_DIGIT_MASK: u64 = 0b111;

/// Mode bits identifying a cell index.
pub const H3_CELL_MODE: u8 = 1;
/// Mode bits identifying a unidirectional edge index.
pub const H3_UNIEDGE_MODE: u8 = 2;

/// Index with mode 0, res 0, base cell 0, and every digit set to the unused
/// sentinel (7). The starting pattern for building a cell index.
pub const H3_INIT: u64 = 0x0000_1fff_ffff_ffff;
