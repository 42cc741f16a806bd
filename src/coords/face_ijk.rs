//! Icosahedron face geometry: the gnomonic projection between spherical
//! coordinates and face-local lattice coordinates, face-crossing (overage)
//! adjustment, and cell boundary synthesis on the substrate grid.

use crate::constants::{
  EPSILON, MAX_H3_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SIN60, M_SQRT7, NUM_HEX_VERTS, NUM_ICOSA_FACES,
  NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::coords::ijk::{
  _down_ap3, _down_ap3r, _down_ap7r, _hex2d_to_coord_ijk, _ijk_add, _ijk_normalize, _ijk_rotate60_ccw,
  _ijk_rotate60_cw, _ijk_scale, _ijk_sub, _ijk_to_hex2d,
};
use crate::h3_index::is_resolution_class_iii;
use crate::latlng::{_geo_az_distance_rads, _geo_azimuth_rads, _pos_angle_rads};
use crate::math::vec2d::{_v2d_almost_equals, _v2d_intersect, _v2d_mag};
use crate::math::vec3d::{_geo_to_vec3d, _point_square_dist};
use crate::types::{CoordIJK, FaceIJK, GeoBoundary, GeoCoord, Vec2d, Vec3d};

/// Face center points in latitude/longitude radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [GeoCoord; NUM_ICOSA_FACES as usize] = [
  GeoCoord { lat: 0.803_582_649_718_989_9,   lon: 1.248_397_419_617_396 },     // face 0
  GeoCoord { lat: 1.307_747_883_455_638_2,   lon: 2.536_945_009_877_921 },     // face 1
  GeoCoord { lat: 1.054_751_253_523_952,     lon: -1.347_517_358_900_396_6 },  // face 2
  GeoCoord { lat: 0.600_191_595_538_186_8,   lon: -0.450_603_909_469_755_75 }, // face 3
  GeoCoord { lat: 0.491_715_428_198_773_87,  lon: 0.401_988_202_911_306_94 },  // face 4
  GeoCoord { lat: 0.172_745_327_415_618_7,   lon: 1.678_146_885_280_433_7 },   // face 5
  GeoCoord { lat: 0.605_929_321_571_350_7,   lon: 2.953_923_329_812_411_6 },   // face 6
  GeoCoord { lat: 0.427_370_518_328_979_64,  lon: -1.888_876_200_336_285_4 },  // face 7
  GeoCoord { lat: -0.079_066_118_549_212_83, lon: -0.733_429_513_380_867_74 }, // face 8
  GeoCoord { lat: -0.230_961_644_455_383_64, lon: 0.506_495_587_332_349 },     // face 9
  GeoCoord { lat: 0.079_066_118_549_212_83,  lon: 2.408_163_140_208_925_5 },   // face 10
  GeoCoord { lat: 0.230_961_644_455_383_64,  lon: -2.635_097_066_257_444 },    // face 11
  GeoCoord { lat: -0.172_745_327_415_618_7,  lon: -1.463_445_768_309_359_5 },  // face 12
  GeoCoord { lat: -0.605_929_321_571_350_7,  lon: -0.187_669_323_777_381_62 }, // face 13
  GeoCoord { lat: -0.427_370_518_328_979_64, lon: 1.252_716_453_253_508 },     // face 14
  GeoCoord { lat: -0.600_191_595_538_186_8,  lon: 2.690_988_744_120_037_5 },   // face 15
  GeoCoord { lat: -0.491_715_428_198_773_87, lon: -2.739_604_450_678_486_3 },  // face 16
  GeoCoord { lat: -0.803_582_649_718_989_9,  lon: -1.893_195_233_972_397 },    // face 17
  GeoCoord { lat: -1.307_747_883_455_638_2,  lon: -0.604_647_643_711_872_1 },  // face 18
  GeoCoord { lat: -1.054_751_253_523_952,    lon: 1.794_075_294_689_396_6 },   // face 19
];

/// Face center points as x/y/z on the unit sphere.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6,    y: 0.658_369_178_027_499_6,   z: 0.719_847_537_892_618_2 },   // face 0
  Vec3d { x: -0.213_923_483_450_142_1,   y: 0.147_817_182_955_070_3,   z: 0.965_601_793_521_420_5 },   // face 1
  Vec3d { x: 0.109_262_527_878_479_7,    y: -0.481_195_157_287_321,    z: 0.869_777_512_128_725_3 },   // face 2
  Vec3d { x: 0.742_856_730_158_679_1,    y: -0.359_394_167_827_802_8,  z: 0.564_800_593_651_703_3 },   // face 3
  Vec3d { x: 0.811_253_470_914_096_9,    y: 0.344_895_323_763_938_4,   z: 0.472_138_773_641_393 },     // face 4
  Vec3d { x: -0.105_549_814_961_392_1,   y: 0.979_445_729_641_141_3,   z: 0.171_887_461_000_936_5 },   // face 5
  Vec3d { x: -0.807_540_757_997_009_2,   y: 0.153_355_248_589_881_8,   z: 0.569_526_199_488_268_8 },   // face 6
  Vec3d { x: -0.284_614_806_978_790_7,   y: -0.864_408_097_265_420_6,  z: 0.414_479_255_247_354 },     // face 7
  Vec3d { x: 0.740_562_147_385_448_2,    y: -0.667_329_956_456_552_4,  z: -0.078_983_764_632_673_77 }, // face 8
  Vec3d { x: 0.851_230_398_647_429_3,    y: 0.472_234_378_858_268_1,   z: -0.228_913_738_868_780_8 },  // face 9
  Vec3d { x: -0.740_562_147_385_448_1,   y: 0.667_329_956_456_552_4,   z: 0.078_983_764_632_673_77 },  // face 10
  Vec3d { x: -0.851_230_398_647_429_2,   y: -0.472_234_378_858_268_2,  z: 0.228_913_738_868_780_8 },   // face 11
  Vec3d { x: 0.105_549_814_961_391_9,    y: -0.979_445_729_641_141_3,  z: -0.171_887_461_000_936_5 },  // face 12
  Vec3d { x: 0.807_540_757_997_009_2,    y: -0.153_355_248_589_881_9,  z: -0.569_526_199_488_268_8 },  // face 13
  Vec3d { x: 0.284_614_806_978_790_8,    y: 0.864_408_097_265_420_4,   z: -0.414_479_255_247_354 },    // face 14
  Vec3d { x: -0.742_856_730_158_679_1,   y: 0.359_394_167_827_802_7,   z: -0.564_800_593_651_703_3 },  // face 15
  Vec3d { x: -0.811_253_470_914_097_1,   y: -0.344_895_323_763_938_2,  z: -0.472_138_773_641_393 },    // face 16
  Vec3d { x: -0.219_930_779_140_460_7,   y: -0.658_369_178_027_499_6,  z: -0.719_847_537_892_618_2 },  // face 17
  Vec3d { x: 0.213_923_483_450_142,      y: -0.147_817_182_955_070_4,  z: -0.965_601_793_521_420_5 },  // face 18
  Vec3d { x: -0.109_262_527_878_479_6,   y: 0.481_195_157_287_321,     z: -0.869_777_512_128_725_3 },  // face 19
];

/// Azimuth from each face center to its Class II i/j/k axes, in radians.
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94,     3.525_563_166_130_744_5,  1.431_168_063_737_548_7], // face 0
  [5.760_339_081_714_187,    3.665_943_979_320_991_7,  1.571_548_876_927_796],   // face 1
  [0.780_213_654_393_430_1,  4.969_003_859_179_821,    2.874_608_756_786_625_7], // face 2
  [0.430_469_363_979_999_9,  4.619_259_568_766_391,    2.524_864_466_373_195_5], // face 3
  [6.130_269_123_335_111,    4.035_874_020_941_916,    1.941_478_918_548_720_3], // face 4
  [2.692_877_706_530_643,    0.598_482_604_137_447_1,  4.787_272_808_923_838],   // face 5
  [2.982_963_003_477_244,    0.888_567_901_084_048_4,  5.077_358_105_870_44],    // face 6
  [3.532_912_002_790_141,    1.438_516_900_396_945_7,  5.627_307_105_183_337],   // face 7
  [3.494_305_004_259_568,    1.399_909_901_866_372_9,  5.588_700_106_652_764],   // face 8
  [3.003_214_169_499_538_4,  0.908_819_067_106_342_9,  5.097_609_271_892_734],   // face 9
  [5.930_472_956_509_811_6,  3.836_077_854_116_616,    1.741_682_751_723_420_4], // face 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646,    2.232_773_586_483_45],    // face 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5,  2.543_110_049_452_346],   // face 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94,     2.253_024_752_505_745],   // face 13
  [5.891_865_957_979_238_5,  3.797_470_855_586_043,    1.703_075_753_192_847_6], // face 14
  [2.711_123_289_609_793_3,  0.616_728_187_216_597_8,  4.805_518_392_002_988_7], // face 15
  [3.294_508_837_434_268,    1.200_113_735_041_073,    5.388_903_939_827_464],   // face 16
  [3.804_819_692_245_44,     1.710_424_589_852_244_5,  5.899_214_794_638_635],   // face 17
  [3.664_438_879_055_192_4,  1.570_043_776_661_997,    5.758_833_981_448_388],   // face 18
  [2.361_378_999_196_363,    0.266_983_896_803_167_6,  4.455_774_101_589_558_6], // face 19
];

/// Quadrant indices into the face neighbor table.
pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// Transform into an adjacent face's lattice coordinate system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  /// Destination face number.
  pub face: i32,
  /// Res 0 translation relative to the primary face.
  pub translate: CoordIJK,
  /// Number of 60 degree CCW rotations relative to the primary face.
  pub ccw_rot60: i32,
}

macro_rules! fo {
  ($face:expr, $i:expr, $j:expr, $k:expr, $rot:expr) => {
    FaceOrientIJK {
      face: $face,
      translate: CoordIJK { i: $i, j: $j, k: $k },
      ccw_rot60: $rot,
    }
  };
}

/// For each face, itself plus the transforms into its three neighbors,
/// indexed by quadrant.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [fo!(0, 0, 0, 0, 0),  fo!(4, 2, 0, 2, 1),  fo!(1, 2, 2, 0, 5),  fo!(5, 0, 2, 2, 3)],  // face 0
  [fo!(1, 0, 0, 0, 0),  fo!(0, 2, 0, 2, 1),  fo!(2, 2, 2, 0, 5),  fo!(6, 0, 2, 2, 3)],  // face 1
  [fo!(2, 0, 0, 0, 0),  fo!(1, 2, 0, 2, 1),  fo!(3, 2, 2, 0, 5),  fo!(7, 0, 2, 2, 3)],  // face 2
  [fo!(3, 0, 0, 0, 0),  fo!(2, 2, 0, 2, 1),  fo!(4, 2, 2, 0, 5),  fo!(8, 0, 2, 2, 3)],  // face 3
  [fo!(4, 0, 0, 0, 0),  fo!(3, 2, 0, 2, 1),  fo!(0, 2, 2, 0, 5),  fo!(9, 0, 2, 2, 3)],  // face 4
  [fo!(5, 0, 0, 0, 0),  fo!(10, 2, 2, 0, 3), fo!(14, 2, 0, 2, 3), fo!(0, 0, 2, 2, 3)],  // face 5
  [fo!(6, 0, 0, 0, 0),  fo!(11, 2, 2, 0, 3), fo!(10, 2, 0, 2, 3), fo!(1, 0, 2, 2, 3)],  // face 6
  [fo!(7, 0, 0, 0, 0),  fo!(12, 2, 2, 0, 3), fo!(11, 2, 0, 2, 3), fo!(2, 0, 2, 2, 3)],  // face 7
  [fo!(8, 0, 0, 0, 0),  fo!(13, 2, 2, 0, 3), fo!(12, 2, 0, 2, 3), fo!(3, 0, 2, 2, 3)],  // face 8
  [fo!(9, 0, 0, 0, 0),  fo!(14, 2, 2, 0, 3), fo!(13, 2, 0, 2, 3), fo!(4, 0, 2, 2, 3)],  // face 9
  [fo!(10, 0, 0, 0, 0), fo!(5, 2, 2, 0, 3),  fo!(6, 2, 0, 2, 3),  fo!(15, 0, 2, 2, 3)], // face 10
  [fo!(11, 0, 0, 0, 0), fo!(6, 2, 2, 0, 3),  fo!(7, 2, 0, 2, 3),  fo!(16, 0, 2, 2, 3)], // face 11
  [fo!(12, 0, 0, 0, 0), fo!(7, 2, 2, 0, 3),  fo!(8, 2, 0, 2, 3),  fo!(17, 0, 2, 2, 3)], // face 12
  [fo!(13, 0, 0, 0, 0), fo!(8, 2, 2, 0, 3),  fo!(9, 2, 0, 2, 3),  fo!(18, 0, 2, 2, 3)], // face 13
  [fo!(14, 0, 0, 0, 0), fo!(9, 2, 2, 0, 3),  fo!(5, 2, 0, 2, 3),  fo!(19, 0, 2, 2, 3)], // face 14
  [fo!(15, 0, 0, 0, 0), fo!(16, 2, 0, 2, 1), fo!(19, 2, 2, 0, 5), fo!(10, 0, 2, 2, 3)], // face 15
  [fo!(16, 0, 0, 0, 0), fo!(17, 2, 0, 2, 1), fo!(15, 2, 2, 0, 5), fo!(11, 0, 2, 2, 3)], // face 16
  [fo!(17, 0, 0, 0, 0), fo!(18, 2, 0, 2, 1), fo!(16, 2, 2, 0, 5), fo!(12, 0, 2, 2, 3)], // face 17
  [fo!(18, 0, 0, 0, 0), fo!(19, 2, 0, 2, 1), fo!(17, 2, 2, 0, 5), fo!(13, 0, 2, 2, 3)], // face 18
  [fo!(19, 0, 0, 0, 0), fo!(15, 2, 0, 2, 1), fo!(18, 2, 2, 0, 5), fo!(14, 0, 2, 2, 3)], // face 19
];

/// Quadrant direction from one face to an adjacent face, in the origin
/// face's coordinate system; -1 when the faces do not border.
#[rustfmt::skip]
pub(crate) static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = [
  [0, 2, -1, -1, 1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 0
  [1, 0, 2, -1, -1, -1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 1
  [-1, 1, 0, 2, -1, -1, -1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 2
  [-1, -1, 1, 0, 2, -1, -1, -1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 3
  [2, -1, -1, 1, 0, -1, -1, -1, -1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 4
  [3, -1, -1, -1, -1, 0, -1, -1, -1, -1, 1, -1, -1, -1, 2, -1, -1, -1, -1, -1],  // face 5
  [-1, 3, -1, -1, -1, -1, 0, -1, -1, -1, 2, 1, -1, -1, -1, -1, -1, -1, -1, -1],  // face 6
  [-1, -1, 3, -1, -1, -1, -1, 0, -1, -1, -1, 2, 1, -1, -1, -1, -1, -1, -1, -1],  // face 7
  [-1, -1, -1, 3, -1, -1, -1, -1, 0, -1, -1, -1, 2, 1, -1, -1, -1, -1, -1, -1],  // face 8
  [-1, -1, -1, -1, 3, -1, -1, -1, -1, 0, -1, -1, -1, 2, 1, -1, -1, -1, -1, -1],  // face 9
  [-1, -1, -1, -1, -1, 1, 2, -1, -1, -1, 0, -1, -1, -1, -1, 3, -1, -1, -1, -1],  // face 10
  [-1, -1, -1, -1, -1, -1, 1, 2, -1, -1, -1, 0, -1, -1, -1, -1, 3, -1, -1, -1],  // face 11
  [-1, -1, -1, -1, -1, -1, -1, 1, 2, -1, -1, -1, 0, -1, -1, -1, -1, 3, -1, -1],  // face 12
  [-1, -1, -1, -1, -1, -1, -1, -1, 1, 2, -1, -1, -1, 0, -1, -1, -1, -1, 3, -1],  // face 13
  [-1, -1, -1, -1, -1, 2, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, -1, 3],  // face 14
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 3, -1, -1, -1, -1, 0, 2, -1, -1, 1],  // face 15
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 3, -1, -1, -1, 1, 0, 2, -1, -1],  // face 16
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 3, -1, -1, -1, 1, 0, 2, -1],  // face 17
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 3, -1, -1, -1, 1, 0, 2],  // face 18
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 3, 1, -1, -1, 2, 0],  // face 19
];

/// Largest lattice dimension on a face, by Class II resolution. Class III
/// resolutions use the next finer Class II entry.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Lattice unit scale by Class II resolution.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Result of an overage check against the face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Coordinate stays on the original face.
  NoOverage,
  /// Coordinate lies on a face edge (substrate grids only).
  FaceEdge,
  /// Coordinate landed in the interior of a new face.
  NewFace,
}

/// The icosahedron face whose center is closest to the point, and the
/// squared 3D distance to that center.
pub(crate) fn _geo_to_closest_face(g: &GeoCoord) -> (i32, f64) {
  let v3d = _geo_to_vec3d(g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let sqd_f = _point_square_dist(center, &v3d);
    if sqd_f < sqd {
      face = f as i32;
      sqd = sqd_f;
    }
  }
  (face, sqd)
}

/// Projects a spherical coordinate onto the closest face plane, scaled for
/// the given resolution's lattice.
pub(crate) fn _geo_to_hex2d(g: &GeoCoord, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = _geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - sqd/2
  let r = (1.0 - sqd / 2.0).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  // CCW angle from the face's Class II i-axis
  let az = _geo_azimuth_rads(&FACE_CENTER_GEO[face as usize], g);
  let mut theta = _pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - _pos_angle_rads(az));
  if is_resolution_class_iii(res) {
    theta = _pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  // gnomonic scaling, then scale for the resolution's unit length
  let mut r = r.tan() / RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (
    face,
    Vec2d {
      x: r * theta.cos(),
      y: r * theta.sin(),
    },
  )
}

/// Inverse projection: a face-plane point back to spherical coordinates.
/// `substrate` marks coordinates on the substrate grid (one aperture-3 and
/// one aperture-3-reverse subdivision below `res`).
pub(crate) fn _hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoCoord {
  let mut r = _v2d_mag(v);
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  // scale back to res 0 unit length
  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_resolution_class_iii(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_resolution_class_iii(res) {
    theta = _pos_angle_rads(theta + M_AP7_ROT_RADS);
  }
  let az = _pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);

  _geo_az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

/// The face and lattice coordinates containing a spherical coordinate at the
/// given resolution.
#[must_use]
pub(crate) fn _geo_to_face_ijk(g: &GeoCoord, res: i32) -> FaceIJK {
  let (face, v) = _geo_to_hex2d(g, res);
  FaceIJK {
    face,
    coord: _hex2d_to_coord_ijk(&v),
  }
}

/// Center point of a face-local lattice cell in spherical coordinates.
#[must_use]
pub(crate) fn _face_ijk_to_geo(h: &FaceIJK, res: i32) -> GeoCoord {
  let v = _ijk_to_hex2d(&h.coord);
  _hex2d_to_geo(&v, h.face, res, false)
}

/// Adjusts a coordinate that may have left its face, projecting it onto the
/// adjacent face if so. `res` must be a Class II resolution.
pub(crate) fn _adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let sum = fijk.coord.i + fijk.coord.j + fijk.coord.k;
  if substrate && sum == max_dim {
    return Overage::FaceEdge;
  }
  if sum <= max_dim {
    return Overage::NoOverage;
  }

  let orient = if fijk.coord.k > 0 {
    if fijk.coord.j > 0 {
      &FACE_NEIGHBORS[fijk.face as usize][JK_QUADRANT]
    } else {
      // adjust for the pentagonal missing sequence
      if pent_leading_4 {
        // translate origin to center of pentagon, rotate to adjust for
        // the missing sequence, translate origin back
        let origin = CoordIJK::new(max_dim, 0, 0);
        let mut tmp = _ijk_sub(&fijk.coord, &origin);
        _ijk_rotate60_cw(&mut tmp);
        fijk.coord = _ijk_add(&tmp, &origin);
      }
      &FACE_NEIGHBORS[fijk.face as usize][KI_QUADRANT]
    }
  } else {
    &FACE_NEIGHBORS[fijk.face as usize][IJ_QUADRANT]
  };

  fijk.face = orient.face;

  for _ in 0..orient.ccw_rot60 {
    _ijk_rotate60_ccw(&mut fijk.coord);
  }

  let mut trans = orient.translate;
  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    unit_scale *= 3;
  }
  _ijk_scale(&mut trans, unit_scale);
  fijk.coord = _ijk_add(&fijk.coord, &trans);
  _ijk_normalize(&mut fijk.coord);

  // overage points on pentagon boundaries can end up on an edge
  if substrate && fijk.coord.i + fijk.coord.j + fijk.coord.k == max_dim {
    Overage::FaceEdge
  } else {
    Overage::NewFace
  }
}

/// Repeatedly adjusts a pentagon boundary vertex until it no longer crosses
/// into a new face.
pub(crate) fn _adjust_pent_vert_overage(fijk: &mut FaceIJK, res: i32) -> Overage {
  loop {
    let overage = _adjust_overage_class_ii(fijk, res, false, true);
    if overage != Overage::NewFace {
      return overage;
    }
  }
}

/// Vertex offsets on the Class II substrate grid.
#[rustfmt::skip]
static VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 2, j: 1, k: 0 },
  CoordIJK { i: 1, j: 2, k: 0 },
  CoordIJK { i: 0, j: 2, k: 1 },
  CoordIJK { i: 0, j: 1, k: 2 },
  CoordIJK { i: 1, j: 0, k: 2 },
  CoordIJK { i: 2, j: 0, k: 1 },
];

/// Vertex offsets on the Class III substrate grid.
#[rustfmt::skip]
static VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 5, j: 4, k: 0 },
  CoordIJK { i: 1, j: 5, k: 0 },
  CoordIJK { i: 0, j: 5, k: 4 },
  CoordIJK { i: 0, j: 1, k: 5 },
  CoordIJK { i: 4, j: 0, k: 5 },
  CoordIJK { i: 5, j: 0, k: 1 },
];

/// Moves the cell center onto the vertex substrate grid and produces the six
/// hexagon vertex coordinates. `res` becomes the substrate's Class II
/// resolution.
pub(crate) fn _face_ijk_to_verts(fijk: &mut FaceIJK, res: &mut i32, fijk_verts: &mut [FaceIJK; NUM_HEX_VERTS]) {
  let verts = if is_resolution_class_iii(*res) { &VERTS_CIII } else { &VERTS_CII };

  // the vertex substrate: one aperture-3 and one aperture-3-reverse down,
  // plus an aperture-7-reverse for Class III
  _down_ap3(&mut fijk.coord);
  _down_ap3r(&mut fijk.coord);
  if is_resolution_class_iii(*res) {
    _down_ap7r(&mut fijk.coord);
    *res += 1;
  }

  for (vert, offset) in fijk_verts.iter_mut().zip(verts.iter()) {
    vert.face = fijk.face;
    vert.coord = _ijk_add(&fijk.coord, offset);
    _ijk_normalize(&mut vert.coord);
  }
}

/// Pentagon variant of [`_face_ijk_to_verts`]: five vertices, K side absent.
pub(crate) fn _face_ijk_pent_to_verts(fijk: &mut FaceIJK, res: &mut i32, fijk_verts: &mut [FaceIJK; NUM_PENT_VERTS]) {
  let verts: [CoordIJK; NUM_PENT_VERTS] = if is_resolution_class_iii(*res) {
    [VERTS_CIII[0], VERTS_CIII[1], VERTS_CIII[2], VERTS_CIII[3], VERTS_CIII[4]]
  } else {
    [VERTS_CII[0], VERTS_CII[1], VERTS_CII[2], VERTS_CII[3], VERTS_CII[4]]
  };

  _down_ap3(&mut fijk.coord);
  _down_ap3r(&mut fijk.coord);
  if is_resolution_class_iii(*res) {
    _down_ap7r(&mut fijk.coord);
    *res += 1;
  }

  for (vert, offset) in fijk_verts.iter_mut().zip(verts.iter()) {
    vert.face = fijk.face;
    vert.coord = _ijk_add(&fijk.coord, offset);
    _ijk_normalize(&mut vert.coord);
  }
}

/// Icosahedron face edge endpoints in substrate hex2d coordinates, for
/// distortion vertex intersection.
fn _icosa_edge_verts(adj_res: i32) -> [Vec2d; 3] {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize] * 3);
  [
    Vec2d {
      x: 3.0 * max_dim,
      y: 0.0,
    },
    Vec2d {
      x: -1.5 * max_dim,
      y: 3.0 * M_SIN60 * max_dim,
    },
    Vec2d {
      x: -1.5 * max_dim,
      y: -3.0 * M_SIN60 * max_dim,
    },
  ]
}

fn _icosa_edge_for_dir(edge_verts: &[Vec2d; 3], dir: i32) -> (&Vec2d, &Vec2d) {
  match dir as usize {
    IJ_QUADRANT => (&edge_verts[0], &edge_verts[1]),
    JK_QUADRANT => (&edge_verts[1], &edge_verts[2]),
    _ => (&edge_verts[2], &edge_verts[0]), // KI or default
  }
}

/// Boundary in spherical coordinates for the hexagonal cell at `h`, starting
/// at vertex `start` and spanning `length` topological vertices. Class III
/// cells get extra vertices where edges cross icosahedron faces.
pub(crate) fn _face_ijk_to_geo_boundary(h: &FaceIJK, res: i32, start: i32, length: i32, g: &mut GeoBoundary) {
  let mut adj_res = res;
  let mut center_ijk = *h;
  let mut fijk_verts = [FaceIJK::default(); NUM_HEX_VERTS];
  _face_ijk_to_verts(&mut center_ijk, &mut adj_res, &mut fijk_verts);

  // iterate one extra vertex to catch a distortion on the closing edge
  let additional_iteration = i32::from(length == NUM_HEX_VERTS as i32);

  g.num_verts = 0;
  let mut last_face = -1;
  let mut last_overage = Overage::NoOverage;
  for vert in start..(start + length + additional_iteration) {
    let v = (vert % NUM_HEX_VERTS as i32) as usize;
    let mut fijk = fijk_verts[v];

    let overage = _adjust_overage_class_ii(&mut fijk, adj_res, false, true);

    // Class III edges that cross an icosahedron edge need an extra vertex
    // at the crossing
    if is_resolution_class_iii(res) && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
      let last_v = (v + 5) % NUM_HEX_VERTS;
      let orig2d0 = _ijk_to_hex2d(&fijk_verts[last_v].coord);
      let orig2d1 = _ijk_to_hex2d(&fijk_verts[v].coord);

      let edge_verts = _icosa_edge_verts(adj_res);
      let face2 = if last_face == center_ijk.face { fijk.face } else { last_face };
      let (edge0, edge1) = _icosa_edge_for_dir(
        &edge_verts,
        ADJACENT_FACE_DIR[center_ijk.face as usize][face2 as usize],
      );

      let inter = _v2d_intersect(&orig2d0, &orig2d1, edge0, edge1);
      let at_vertex = _v2d_almost_equals(&orig2d0, &inter) || _v2d_almost_equals(&orig2d1, &inter);
      if !at_vertex {
        g.verts[g.num_verts] = _hex2d_to_geo(&inter, center_ijk.face, adj_res, true);
        g.num_verts += 1;
      }
    }

    if vert < start + length {
      let vec = _ijk_to_hex2d(&fijk.coord);
      g.verts[g.num_verts] = _hex2d_to_geo(&vec, fijk.face, adj_res, true);
      g.num_verts += 1;
    }

    last_face = fijk.face;
    last_overage = overage;
  }
}

/// Pentagon variant of [`_face_ijk_to_geo_boundary`]. Every Class III edge
/// crosses an icosahedron edge, so each edge carries a distortion vertex.
pub(crate) fn _face_ijk_pent_to_geo_boundary(h: &FaceIJK, res: i32, start: i32, length: i32, g: &mut GeoBoundary) {
  let mut adj_res = res;
  let mut center_ijk = *h;
  let mut fijk_verts = [FaceIJK::default(); NUM_PENT_VERTS];
  _face_ijk_pent_to_verts(&mut center_ijk, &mut adj_res, &mut fijk_verts);

  let additional_iteration = i32::from(length == NUM_PENT_VERTS as i32);

  g.num_verts = 0;
  let mut last_fijk = FaceIJK::default();
  for vert in start..(start + length + additional_iteration) {
    let v = (vert % NUM_PENT_VERTS as i32) as usize;
    let mut fijk = fijk_verts[v];

    _adjust_pent_vert_overage(&mut fijk, adj_res);

    if is_resolution_class_iii(res) && vert > start {
      // project the previous vertex onto this vertex's face and intersect
      // with the icosahedron edge between the two faces
      let mut tmp_fijk = fijk;
      let orig2d0 = _ijk_to_hex2d(&last_fijk.coord);

      let current_to_last_dir = ADJACENT_FACE_DIR[tmp_fijk.face as usize][last_fijk.face as usize];
      let orient = &FACE_NEIGHBORS[tmp_fijk.face as usize][current_to_last_dir as usize];

      tmp_fijk.face = orient.face;
      for _ in 0..orient.ccw_rot60 {
        _ijk_rotate60_ccw(&mut tmp_fijk.coord);
      }
      let mut trans = orient.translate;
      _ijk_scale(&mut trans, UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
      tmp_fijk.coord = _ijk_add(&tmp_fijk.coord, &trans);
      _ijk_normalize(&mut tmp_fijk.coord);

      let orig2d1 = _ijk_to_hex2d(&tmp_fijk.coord);

      let edge_verts = _icosa_edge_verts(adj_res);
      let (edge0, edge1) = _icosa_edge_for_dir(
        &edge_verts,
        ADJACENT_FACE_DIR[tmp_fijk.face as usize][fijk.face as usize],
      );

      let inter = _v2d_intersect(&orig2d0, &orig2d1, edge0, edge1);
      g.verts[g.num_verts] = _hex2d_to_geo(&inter, tmp_fijk.face, adj_res, true);
      g.num_verts += 1;
    }

    if vert < start + length {
      let vec = _ijk_to_hex2d(&fijk.coord);
      g.verts[g.num_verts] = _hex2d_to_geo(&vec, fijk.face, adj_res, true);
      g.num_verts += 1;
    }

    last_fijk = fijk;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, M_PI_2};
  use crate::latlng::geo_almost_equal_threshold;

  #[test]
  fn test_face_centers_match_vec3d() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let v = _geo_to_vec3d(&FACE_CENTER_GEO[f]);
      assert!(
        _point_square_dist(&v, &FACE_CENTER_POINT[f]) < EPSILON,
        "face {} center tables agree",
        f
      );
    }
  }

  #[test]
  fn test_adjacent_face_dir_matches_neighbors() {
    for f in 0..NUM_ICOSA_FACES as usize {
      for quadrant in 1..4 {
        let neighbor = FACE_NEIGHBORS[f][quadrant].face as usize;
        assert_eq!(
          ADJACENT_FACE_DIR[f][neighbor], quadrant as i32,
          "direction from face {} to {}",
          f, neighbor
        );
      }
      assert_eq!(ADJACENT_FACE_DIR[f][f], 0, "face {} to itself", f);
    }
  }

  #[test]
  fn test_geo_to_closest_face_centers() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let (face, sqd) = _geo_to_closest_face(&FACE_CENTER_GEO[f]);
      assert_eq!(face, f as i32, "face center {} is closest to itself", f);
      assert!(sqd < EPSILON);
    }
  }

  #[test]
  fn test_geo_to_closest_face_poles() {
    let (north_face, _) = _geo_to_closest_face(&GeoCoord { lat: M_PI_2, lon: 0.0 });
    assert!((0..5).contains(&north_face), "north pole on a northern face");
    let (south_face, _) = _geo_to_closest_face(&GeoCoord { lat: -M_PI_2, lon: 0.0 });
    assert!((15..20).contains(&south_face), "south pole on a southern face");
  }

  #[test]
  fn test_hex2d_geo_round_trip() {
    for f in 0..NUM_ICOSA_FACES as i32 {
      for res in [0, 1, 5] {
        let v = Vec2d { x: 0.25, y: -0.12 };
        let geo = _hex2d_to_geo(&v, f, res, false);
        let (face_rt, v_rt) = _geo_to_hex2d(&geo, res);
        assert_eq!(face_rt, f, "face round trip at res {}", res);
        assert!(
          (v_rt.x - v.x).abs() < 1e-9 && (v_rt.y - v.y).abs() < 1e-9,
          "hex2d round trip at res {}",
          res
        );
      }
    }
  }

  #[test]
  fn test_face_ijk_geo_round_trip() {
    for f in 0..NUM_ICOSA_FACES as i32 {
      for res in 0..=3 {
        let fijk = FaceIJK {
          face: f,
          coord: CoordIJK::new(res + 1, res / 2, 0),
        };
        let geo = _face_ijk_to_geo(&fijk, res);
        let rt = _geo_to_face_ijk(&geo, res);
        let back = _face_ijk_to_geo(&rt, res);
        assert!(
          geo_almost_equal_threshold(&geo, &back, EPSILON_RAD),
          "round trip face {} res {}",
          f,
          res
        );
      }
    }
  }

  #[test]
  fn test_adjust_overage_no_overage() {
    let mut fijk = FaceIJK {
      face: 1,
      coord: CoordIJK::new(0, 0, 0),
    };
    assert_eq!(_adjust_overage_class_ii(&mut fijk, 2, false, false), Overage::NoOverage);
    assert_eq!(fijk.face, 1);
  }

  #[test]
  fn test_adjust_overage_new_face() {
    let mut fijk = FaceIJK {
      face: 0,
      coord: CoordIJK::new(3, 0, 0),
    };
    let overage = _adjust_overage_class_ii(&mut fijk, 0, false, false);
    assert_eq!(overage, Overage::NewFace);
    assert_eq!(fijk.face, 4, "ij quadrant crossing from face 0");
  }

  #[test]
  fn test_adjust_overage_substrate_edge() {
    let mut fijk = FaceIJK {
      face: 1,
      coord: CoordIJK::new(42, 0, 0),
    };
    // 42 == 14 * 3, the substrate max dimension at res 2
    assert_eq!(_adjust_overage_class_ii(&mut fijk, 2, false, true), Overage::FaceEdge);
  }

  #[test]
  fn test_boundary_vertex_counts() {
    let fijk_hex = FaceIJK {
      face: 1,
      coord: CoordIJK::new(1, 1, 0),
    };
    let mut gb = GeoBoundary::default();
    _face_ijk_to_geo_boundary(&fijk_hex, 2, 0, NUM_HEX_VERTS as i32, &mut gb);
    assert_eq!(gb.num_verts, NUM_HEX_VERTS, "class II hexagon has 6 boundary verts");

    let fijk_pent = FaceIJK {
      face: 0,
      coord: CoordIJK::new(2, 0, 0),
    };
    let mut gb = GeoBoundary::default();
    _face_ijk_pent_to_geo_boundary(&fijk_pent, 2, 0, NUM_PENT_VERTS as i32, &mut gb);
    assert_eq!(gb.num_verts, NUM_PENT_VERTS, "class II pentagon has 5 boundary verts");

    let mut gb = GeoBoundary::default();
    _face_ijk_pent_to_geo_boundary(&fijk_pent, 1, 0, NUM_PENT_VERTS as i32, &mut gb);
    assert_eq!(gb.num_verts, 10, "class III pentagon has 5 distortion verts");
  }
}
