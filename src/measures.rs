//! Per-resolution grid metrics: average cell areas, edge lengths, and cell
//! counts.

use crate::constants::MAX_H3_RES;
use crate::math::extensions::_ipow;
use crate::types::H3Error;

fn _check_res(res: i32) -> Result<usize, H3Error> {
  if (0..=MAX_H3_RES).contains(&res) {
    Ok(res as usize)
  } else {
    Err(H3Error::ResDomain)
  }
}

/// Average hexagon area in square kilometers at the given resolution.
pub fn hex_area_km2(res: i32) -> Result<f64, H3Error> {
  #[rustfmt::skip]
  const AREAS: [f64; (MAX_H3_RES + 1) as usize] = [
    4_250_546.848, 607_220.9782, 86_745.85403, 12_392.26486,
    1_770.323552,  252.9033645,  36.1290521,   5.1612932,
    0.7373276,     0.1053325,    0.0150475,    0.0021496,
    0.0003071,     0.0000439,    0.0000063,    0.0000009,
  ];
  Ok(AREAS[_check_res(res)?])
}

/// Average hexagon area in square meters at the given resolution.
pub fn hex_area_m2(res: i32) -> Result<f64, H3Error> {
  #[rustfmt::skip]
  const AREAS: [f64; (MAX_H3_RES + 1) as usize] = [
    4.25055e+12, 6.07221e+11, 8.67459e+10, 1.23923e+10,
    1.77032e+09, 2.52903e+08, 3.61291e+07, 5.16129e+06,
    7.37328e+05, 1.05333e+05, 1.50475e+04, 2.14962e+03,
    3.07092e+02, 4.38686e+01, 6.26698e+00, 8.95311e-01,
  ];
  Ok(AREAS[_check_res(res)?])
}

/// Average hexagon edge length in kilometers at the given resolution.
pub fn edge_length_km(res: i32) -> Result<f64, H3Error> {
  #[rustfmt::skip]
  const LENS: [f64; (MAX_H3_RES + 1) as usize] = [
    1107.712591, 418.6760055, 158.2446558, 59.81085794,
    22.6063794,  8.544408276, 3.229482772, 1.220629759,
    0.461354684, 0.174375668, 0.065907807, 0.024910561,
    0.009415526, 0.003559893, 0.001348575, 0.000509713,
  ];
  Ok(LENS[_check_res(res)?])
}

/// Average hexagon edge length in meters at the given resolution.
pub fn edge_length_m(res: i32) -> Result<f64, H3Error> {
  #[rustfmt::skip]
  const LENS: [f64; (MAX_H3_RES + 1) as usize] = [
    1_107_712.591, 418_676.0055, 158_244.6558, 59_810.85794,
    22_606.3794,   8_544.408276, 3_229.482772, 1_220.629759,
    461.3546837,   174.3756681,  65.90780749,  24.9105614,
    9.415526211,   3.559893033,  1.348574562,  0.509713273,
  ];
  Ok(LENS[_check_res(res)?])
}

/// Number of unique cells at the given resolution, `2 + 120 * 7^res`.
pub fn num_hexagons(res: i32) -> Result<i64, H3Error> {
  let res = _check_res(res)?;
  Ok(2 + 120 * _ipow(7, res as i64))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EARTH_RADIUS_KM, M_SQRT7};

  #[test]
  fn test_res_domain() {
    assert_eq!(hex_area_km2(-1), Err(H3Error::ResDomain));
    assert_eq!(hex_area_m2(16), Err(H3Error::ResDomain));
    assert_eq!(edge_length_km(16), Err(H3Error::ResDomain));
    assert_eq!(edge_length_m(-1), Err(H3Error::ResDomain));
    assert_eq!(num_hexagons(16), Err(H3Error::ResDomain));
  }

  #[test]
  fn test_tables_decrease() {
    for res in 0..MAX_H3_RES {
      assert!(hex_area_km2(res).unwrap() > hex_area_km2(res + 1).unwrap());
      assert!(hex_area_m2(res).unwrap() > hex_area_m2(res + 1).unwrap());
      assert!(edge_length_km(res).unwrap() > edge_length_km(res + 1).unwrap());
      assert!(edge_length_m(res).unwrap() > edge_length_m(res + 1).unwrap());
    }
  }

  #[test]
  fn test_area_scales_by_aperture() {
    // each finer resolution divides area by roughly 7
    for res in 0..MAX_H3_RES {
      let ratio = hex_area_km2(res).unwrap() / hex_area_km2(res + 1).unwrap();
      assert!((ratio - 7.0).abs() < 0.5, "area ratio near 7 at res {}", res);
    }
  }

  #[test]
  fn test_edge_length_scales_by_sqrt7() {
    for res in 0..MAX_H3_RES {
      let ratio = edge_length_km(res).unwrap() / edge_length_km(res + 1).unwrap();
      assert!((ratio - M_SQRT7).abs() < 0.25, "edge ratio near sqrt(7) at res {}", res);
    }
  }

  #[test]
  fn test_km_m_consistency() {
    for res in 0..=MAX_H3_RES {
      let km = edge_length_km(res).unwrap() * 1000.0;
      let m = edge_length_m(res).unwrap();
      assert!((km - m).abs() / m < 1e-4, "km/m tables agree at res {}", res);
    }
  }

  #[test]
  fn test_num_hexagons() {
    assert_eq!(num_hexagons(0), Ok(122));
    assert_eq!(num_hexagons(1), Ok(842));
    assert_eq!(num_hexagons(15), Ok(569_707_381_193_162));
  }

  #[test]
  fn test_total_area_close_to_sphere() {
    // cells at res 0 tile the sphere
    let total = hex_area_km2(0).unwrap() * 122.0;
    let sphere = 4.0 * crate::constants::M_PI * EARTH_RADIUS_KM * EARTH_RADIUS_KM;
    assert!((total - sphere).abs() / sphere < 0.02, "res 0 cells cover the sphere");
  }
}
