//! The 122 resolution 0 base cells: their home faces, pentagon flags, and
//! the neighbor/rotation tables used when traversal crosses between them.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, FaceIJK};

/// Sentinel for "no base cell" in the neighbor table (the deleted K
/// direction of pentagons).
pub(crate) const INVALID_BASE_CELL: i32 = 127;

/// Maximum lattice component for the face-to-base-cell lookup.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Sentinel for an invalid rotation count.
pub(crate) const INVALID_ROTATIONS: i32 = -1;

/// Static data for one base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// Home face and normalized lattice coordinates on that face.
  pub home_fijk: FaceIJK,
  pub is_pentagon: bool,
  /// For pentagons, the two clockwise offset faces (-1 otherwise).
  pub cw_offset_pent: [i32; 2],
}

/// Base cell and orientation produced by the face lookup table.
#[derive(Debug, Clone, Copy)]
struct BaseCellRotation {
  base_cell: i32,
  ccw_rot60: i32,
}

/// Neighboring base cell in each of the 7 aperture directions. Pentagons
/// have no K-axes neighbor.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],                            // base cell 0
  [1, 7, 6, 9, 0, 3, 2],                            // base cell 1
  [2, 6, 10, 11, 0, 1, 5],                          // base cell 2
  [3, 13, 1, 7, 4, 12, 0],                          // base cell 3
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12],          // base cell 4 (pentagon)
  [5, 2, 18, 10, 8, 0, 16],                         // base cell 5
  [6, 14, 11, 17, 1, 9, 2],                         // base cell 6
  [7, 21, 9, 19, 3, 13, 1],                         // base cell 7
  [8, 5, 22, 16, 4, 0, 15],                         // base cell 8
  [9, 19, 14, 20, 1, 7, 6],                         // base cell 9
  [10, 11, 24, 23, 5, 2, 18],                       // base cell 10
  [11, 17, 23, 25, 2, 6, 10],                       // base cell 11
  [12, 28, 13, 26, 4, 15, 3],                       // base cell 12
  [13, 26, 21, 29, 3, 12, 7],                       // base cell 13
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6],        // base cell 14 (pentagon)
  [15, 22, 28, 31, 4, 8, 12],                       // base cell 15
  [16, 18, 33, 30, 8, 5, 22],                       // base cell 16
  [17, 11, 14, 6, 35, 25, 27],                      // base cell 17
  [18, 24, 30, 32, 5, 10, 16],                      // base cell 18
  [19, 34, 20, 36, 7, 21, 9],                       // base cell 19
  [20, 14, 19, 9, 40, 27, 36],                      // base cell 20
  [21, 38, 19, 34, 13, 29, 7],                      // base cell 21
  [22, 16, 41, 33, 15, 8, 31],                      // base cell 22
  [23, 24, 11, 10, 39, 37, 25],                     // base cell 23
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18],      // base cell 24 (pentagon)
  [25, 23, 17, 11, 45, 39, 35],                     // base cell 25
  [26, 42, 29, 43, 12, 28, 13],                     // base cell 26
  [27, 40, 35, 46, 14, 20, 17],                     // base cell 27
  [28, 31, 42, 44, 12, 15, 26],                     // base cell 28
  [29, 43, 38, 47, 13, 26, 21],                     // base cell 29
  [30, 32, 48, 50, 16, 18, 33],                     // base cell 30
  [31, 41, 44, 53, 15, 22, 28],                     // base cell 31
  [32, 30, 24, 18, 52, 50, 37],                     // base cell 32
  [33, 30, 49, 48, 22, 16, 41],                     // base cell 33
  [34, 19, 38, 21, 54, 36, 51],                     // base cell 34
  [35, 46, 45, 56, 17, 27, 25],                     // base cell 35
  [36, 20, 34, 19, 55, 40, 54],                     // base cell 36
  [37, 39, 52, 57, 24, 23, 32],                     // base cell 37
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21],      // base cell 38 (pentagon)
  [39, 37, 25, 23, 59, 57, 45],                     // base cell 39
  [40, 27, 36, 20, 60, 46, 55],                     // base cell 40
  [41, 49, 53, 61, 22, 33, 31],                     // base cell 41
  [42, 58, 43, 62, 28, 44, 26],                     // base cell 42
  [43, 62, 47, 64, 26, 42, 29],                     // base cell 43
  [44, 53, 58, 65, 28, 31, 42],                     // base cell 44
  [45, 39, 35, 25, 63, 59, 56],                     // base cell 45
  [46, 60, 56, 68, 27, 40, 35],                     // base cell 46
  [47, 38, 43, 29, 69, 51, 64],                     // base cell 47
  [48, 49, 30, 33, 67, 66, 50],                     // base cell 48
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41],      // base cell 49 (pentagon)
  [50, 48, 32, 30, 70, 67, 52],                     // base cell 50
  [51, 69, 54, 71, 38, 47, 34],                     // base cell 51
  [52, 57, 70, 74, 32, 37, 50],                     // base cell 52
  [53, 61, 65, 75, 31, 41, 44],                     // base cell 53
  [54, 71, 55, 73, 34, 51, 36],                     // base cell 54
  [55, 40, 54, 36, 72, 60, 73],                     // base cell 55
  [56, 68, 63, 77, 35, 46, 45],                     // base cell 56
  [57, 59, 74, 78, 37, 39, 52],                     // base cell 57
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42],      // base cell 58 (pentagon)
  [59, 63, 78, 79, 39, 45, 57],                     // base cell 59
  [60, 72, 68, 80, 40, 55, 46],                     // base cell 60
  [61, 53, 49, 41, 81, 75, 66],                     // base cell 61
  [62, 43, 58, 42, 82, 64, 76],                     // base cell 62
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77],      // base cell 63 (pentagon)
  [64, 47, 62, 43, 84, 69, 82],                     // base cell 64
  [65, 58, 53, 44, 86, 76, 75],                     // base cell 65
  [66, 67, 81, 85, 49, 48, 61],                     // base cell 66
  [67, 66, 50, 48, 87, 85, 70],                     // base cell 67
  [68, 56, 60, 46, 90, 77, 80],                     // base cell 68
  [69, 51, 64, 47, 89, 71, 84],                     // base cell 69
  [70, 67, 52, 50, 83, 87, 74],                     // base cell 70
  [71, 89, 73, 91, 51, 69, 54],                     // base cell 71
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88],      // base cell 72 (pentagon)
  [73, 91, 72, 88, 54, 71, 55],                     // base cell 73
  [74, 78, 83, 92, 52, 57, 70],                     // base cell 74
  [75, 65, 61, 53, 94, 86, 81],                     // base cell 75
  [76, 86, 82, 96, 58, 65, 62],                     // base cell 76
  [77, 63, 68, 56, 93, 79, 90],                     // base cell 77
  [78, 74, 59, 57, 95, 92, 79],                     // base cell 78
  [79, 78, 63, 59, 93, 95, 77],                     // base cell 79
  [80, 68, 72, 60, 99, 90, 88],                     // base cell 80
  [81, 85, 94, 101, 61, 66, 75],                    // base cell 81
  [82, 96, 84, 98, 62, 76, 64],                     // base cell 82
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92],     // base cell 83 (pentagon)
  [84, 69, 82, 64, 97, 89, 98],                     // base cell 84
  [85, 87, 101, 102, 66, 67, 81],                   // base cell 85
  [86, 76, 75, 65, 104, 96, 94],                    // base cell 86
  [87, 83, 102, 100, 67, 70, 85],                   // base cell 87
  [88, 72, 91, 73, 99, 80, 105],                    // base cell 88
  [89, 97, 91, 103, 69, 84, 71],                    // base cell 89
  [90, 77, 80, 68, 106, 93, 99],                    // base cell 90
  [91, 73, 89, 71, 105, 88, 103],                   // base cell 91
  [92, 83, 78, 74, 108, 100, 95],                   // base cell 92
  [93, 79, 90, 77, 109, 95, 106],                   // base cell 93
  [94, 86, 81, 75, 107, 104, 101],                  // base cell 94
  [95, 92, 79, 78, 109, 108, 93],                   // base cell 95
  [96, 104, 98, 110, 76, 86, 82],                   // base cell 96
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111],    // base cell 97 (pentagon)
  [98, 110, 97, 111, 82, 96, 84],                   // base cell 98
  [99, 80, 105, 88, 106, 90, 113],                  // base cell 99
  [100, 102, 83, 87, 108, 114, 92],                 // base cell 100
  [101, 102, 107, 112, 81, 85, 94],                 // base cell 101
  [102, 101, 87, 85, 114, 112, 100],                // base cell 102
  [103, 91, 97, 89, 116, 105, 111],                 // base cell 103
  [104, 107, 110, 115, 86, 94, 96],                 // base cell 104
  [105, 88, 103, 91, 113, 99, 116],                 // base cell 105
  [106, 93, 99, 90, 117, 109, 113],                 // base cell 106
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112], // base cell 107 (pentagon)
  [108, 100, 95, 92, 118, 114, 109],                // base cell 108
  [109, 108, 93, 95, 117, 118, 106],                // base cell 109
  [110, 98, 104, 96, 119, 111, 115],                // base cell 110
  [111, 97, 110, 98, 116, 103, 119],                // base cell 111
  [112, 107, 102, 101, 120, 115, 114],              // base cell 112
  [113, 99, 116, 105, 117, 106, 121],               // base cell 113
  [114, 112, 100, 102, 118, 120, 108],              // base cell 114
  [115, 110, 107, 104, 120, 119, 112],              // base cell 115
  [116, 103, 119, 111, 113, 105, 121],              // base cell 116
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106],// base cell 117 (pentagon)
  [118, 120, 108, 114, 117, 121, 109],              // base cell 118
  [119, 111, 115, 110, 121, 116, 120],              // base cell 119
  [120, 115, 114, 112, 121, 119, 118],              // base cell 120
  [121, 116, 120, 119, 117, 113, 118],              // base cell 121
];

/// 60 degree CCW rotations picked up when crossing into the neighboring
/// base cell in each direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1],  // base cell 0
  [0, 0, 1, 0, 1, 0, 1],  // base cell 1
  [0, 0, 0, 0, 0, 5, 0],  // base cell 2
  [0, 5, 0, 0, 2, 5, 1],  // base cell 3
  [0, -1, 1, 0, 3, 4, 2], // base cell 4 (pentagon)
  [0, 0, 1, 0, 1, 0, 1],  // base cell 5
  [0, 0, 0, 3, 5, 5, 0],  // base cell 6
  [0, 0, 0, 0, 0, 5, 0],  // base cell 7
  [0, 5, 0, 0, 0, 5, 1],  // base cell 8
  [0, 0, 1, 3, 0, 0, 1],  // base cell 9
  [0, 0, 1, 3, 0, 0, 1],  // base cell 10
  [0, 3, 3, 3, 0, 0, 0],  // base cell 11
  [0, 5, 0, 0, 3, 5, 1],  // base cell 12
  [0, 0, 1, 0, 1, 0, 1],  // base cell 13
  [0, -1, 3, 0, 5, 2, 0], // base cell 14 (pentagon)
  [0, 5, 0, 0, 4, 5, 1],  // base cell 15
  [0, 0, 0, 0, 0, 5, 0],  // base cell 16
  [0, 3, 3, 3, 3, 0, 3],  // base cell 17
  [0, 0, 0, 3, 5, 5, 0],  // base cell 18
  [0, 3, 3, 3, 0, 0, 0],  // base cell 19
  [0, 3, 3, 3, 0, 3, 0],  // base cell 20
  [0, 0, 0, 3, 5, 5, 0],  // base cell 21
  [0, 0, 1, 0, 1, 0, 1],  // base cell 22
  [0, 3, 3, 3, 0, 3, 0],  // base cell 23
  [0, -1, 3, 0, 5, 2, 0], // base cell 24 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 25
  [0, 0, 0, 0, 0, 5, 0],  // base cell 26
  [0, 3, 0, 0, 0, 3, 3],  // base cell 27
  [0, 0, 1, 0, 1, 0, 1],  // base cell 28
  [0, 0, 1, 3, 0, 0, 1],  // base cell 29
  [0, 3, 3, 3, 0, 0, 0],  // base cell 30
  [0, 0, 0, 0, 0, 5, 0],  // base cell 31
  [0, 3, 3, 3, 3, 0, 3],  // base cell 32
  [0, 0, 1, 3, 0, 0, 1],  // base cell 33
  [0, 3, 3, 3, 3, 0, 3],  // base cell 34
  [0, 0, 3, 0, 3, 0, 3],  // base cell 35
  [0, 0, 0, 3, 0, 0, 3],  // base cell 36
  [0, 3, 0, 0, 0, 3, 3],  // base cell 37
  [0, -1, 3, 0, 5, 2, 0], // base cell 38 (pentagon)
  [0, 3, 0, 0, 3, 3, 0],  // base cell 39
  [0, 3, 0, 0, 3, 3, 0],  // base cell 40
  [0, 0, 0, 3, 5, 5, 0],  // base cell 41
  [0, 0, 0, 3, 5, 5, 0],  // base cell 42
  [0, 3, 3, 3, 0, 0, 0],  // base cell 43
  [0, 0, 1, 3, 0, 0, 1],  // base cell 44
  [0, 0, 3, 0, 0, 3, 3],  // base cell 45
  [0, 0, 0, 3, 0, 3, 0],  // base cell 46
  [0, 3, 3, 3, 0, 3, 0],  // base cell 47
  [0, 3, 3, 3, 0, 3, 0],  // base cell 48
  [0, -1, 3, 0, 5, 2, 0], // base cell 49 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 50
  [0, 3, 0, 0, 0, 3, 3],  // base cell 51
  [0, 0, 3, 0, 3, 0, 3],  // base cell 52
  [0, 3, 3, 3, 0, 0, 0],  // base cell 53
  [0, 0, 3, 0, 3, 0, 3],  // base cell 54
  [0, 0, 3, 0, 0, 3, 3],  // base cell 55
  [0, 3, 3, 3, 0, 0, 3],  // base cell 56
  [0, 0, 0, 3, 0, 3, 0],  // base cell 57
  [0, -1, 3, 0, 5, 2, 0], // base cell 58 (pentagon)
  [0, 3, 3, 3, 3, 3, 0],  // base cell 59
  [0, 3, 3, 3, 3, 3, 0],  // base cell 60
  [0, 3, 3, 3, 3, 0, 3],  // base cell 61
  [0, 3, 3, 3, 3, 0, 3],  // base cell 62
  [0, -1, 3, 0, 5, 2, 0], // base cell 63 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],  // base cell 64
  [0, 3, 3, 3, 0, 3, 0],  // base cell 65
  [0, 3, 0, 0, 0, 3, 3],  // base cell 66
  [0, 3, 0, 0, 3, 3, 0],  // base cell 67
  [0, 3, 3, 3, 0, 0, 0],  // base cell 68
  [0, 3, 0, 0, 3, 3, 0],  // base cell 69
  [0, 0, 3, 0, 0, 3, 3],  // base cell 70
  [0, 0, 0, 3, 0, 3, 0],  // base cell 71
  [0, -1, 3, 0, 5, 2, 0], // base cell 72 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // base cell 73
  [0, 3, 3, 3, 0, 0, 3],  // base cell 74
  [0, 0, 0, 3, 0, 0, 3],  // base cell 75
  [0, 3, 0, 0, 0, 3, 3],  // base cell 76
  [0, 0, 0, 3, 0, 5, 0],  // base cell 77
  [0, 3, 3, 3, 0, 0, 0],  // base cell 78
  [0, 0, 1, 3, 1, 0, 1],  // base cell 79
  [0, 0, 1, 3, 1, 0, 1],  // base cell 80
  [0, 0, 3, 0, 3, 0, 3],  // base cell 81
  [0, 0, 3, 0, 3, 0, 3],  // base cell 82
  [0, -1, 3, 0, 5, 2, 0], // base cell 83 (pentagon)
  [0, 0, 3, 0, 0, 3, 3],  // base cell 84
  [0, 0, 0, 3, 0, 3, 0],  // base cell 85
  [0, 3, 0, 0, 3, 3, 0],  // base cell 86
  [0, 3, 3, 3, 3, 3, 0],  // base cell 87
  [0, 0, 0, 3, 0, 5, 0],  // base cell 88
  [0, 3, 3, 3, 3, 3, 0],  // base cell 89
  [0, 0, 0, 0, 0, 0, 1],  // base cell 90
  [0, 3, 3, 3, 0, 0, 0],  // base cell 91
  [0, 0, 0, 3, 0, 5, 0],  // base cell 92
  [0, 5, 0, 0, 5, 5, 0],  // base cell 93
  [0, 0, 3, 0, 0, 3, 3],  // base cell 94
  [0, 0, 0, 0, 0, 0, 1],  // base cell 95
  [0, 0, 0, 3, 0, 3, 0],  // base cell 96
  [0, -1, 3, 0, 5, 2, 0], // base cell 97 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],  // base cell 98
  [0, 5, 0, 0, 5, 5, 0],  // base cell 99
  [0, 0, 1, 3, 1, 0, 1],  // base cell 100
  [0, 3, 3, 3, 0, 0, 3],  // base cell 101
  [0, 3, 3, 3, 0, 0, 0],  // base cell 102
  [0, 0, 1, 3, 1, 0, 1],  // base cell 103
  [0, 3, 3, 3, 3, 3, 0],  // base cell 104
  [0, 0, 0, 0, 0, 0, 1],  // base cell 105
  [0, 0, 1, 0, 3, 5, 1],  // base cell 106
  [0, -1, 3, 0, 5, 2, 0], // base cell 107 (pentagon)
  [0, 5, 0, 0, 5, 5, 0],  // base cell 108
  [0, 0, 1, 0, 4, 5, 1],  // base cell 109
  [0, 3, 3, 3, 0, 0, 0],  // base cell 110
  [0, 0, 0, 3, 0, 5, 0],  // base cell 111
  [0, 0, 0, 3, 0, 5, 0],  // base cell 112
  [0, 0, 1, 0, 2, 5, 1],  // base cell 113
  [0, 0, 0, 0, 0, 0, 1],  // base cell 114
  [0, 0, 1, 3, 1, 0, 1],  // base cell 115
  [0, 5, 0, 0, 5, 5, 0],  // base cell 116
  [0, -1, 1, 0, 3, 4, 2], // base cell 117 (pentagon)
  [0, 0, 1, 0, 0, 5, 1],  // base cell 118
  [0, 0, 0, 0, 0, 0, 1],  // base cell 119
  [0, 5, 0, 0, 5, 5, 0],  // base cell 120
  [0, 0, 1, 0, 1, 5, 1],  // base cell 121
];

macro_rules! bc {
  ($face:expr, $i:expr, $j:expr, $k:expr) => {
    BaseCellData {
      home_fijk: FaceIJK {
        face: $face,
        coord: CoordIJK { i: $i, j: $j, k: $k },
      },
      is_pentagon: false,
      cw_offset_pent: [-1, -1],
    }
  };
  ($face:expr, $i:expr, $j:expr, $k:expr, pent $o0:expr, $o1:expr) => {
    BaseCellData {
      home_fijk: FaceIJK {
        face: $face,
        coord: CoordIJK { i: $i, j: $j, k: $k },
      },
      is_pentagon: true,
      cw_offset_pent: [$o0, $o1],
    }
  };
}

/// Home face, lattice coordinates, and pentagon data for each base cell.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  bc!(1, 1, 0, 0),               // base cell 0
  bc!(2, 1, 1, 0),               // base cell 1
  bc!(1, 0, 0, 0),               // base cell 2
  bc!(2, 1, 0, 0),               // base cell 3
  bc!(0, 2, 0, 0, pent -1, -1),  // base cell 4 (pentagon)
  bc!(1, 1, 1, 0),               // base cell 5
  bc!(1, 0, 0, 1),               // base cell 6
  bc!(2, 0, 0, 0),               // base cell 7
  bc!(0, 1, 0, 0),               // base cell 8
  bc!(2, 0, 1, 0),               // base cell 9
  bc!(1, 0, 1, 0),               // base cell 10
  bc!(1, 0, 1, 1),               // base cell 11
  bc!(3, 1, 0, 0),               // base cell 12
  bc!(3, 1, 1, 0),               // base cell 13
  bc!(11, 2, 0, 0, pent 2, 6),   // base cell 14 (pentagon)
  bc!(4, 1, 0, 0),               // base cell 15
  bc!(0, 0, 0, 0),               // base cell 16
  bc!(6, 0, 1, 0),               // base cell 17
  bc!(0, 0, 0, 1),               // base cell 18
  bc!(2, 0, 1, 1),               // base cell 19
  bc!(7, 0, 0, 1),               // base cell 20
  bc!(2, 0, 0, 1),               // base cell 21
  bc!(0, 1, 1, 0),               // base cell 22
  bc!(6, 0, 0, 1),               // base cell 23
  bc!(10, 2, 0, 0, pent 1, 5),   // base cell 24 (pentagon)
  bc!(6, 0, 0, 0),               // base cell 25
  bc!(3, 0, 0, 0),               // base cell 26
  bc!(11, 1, 0, 0),              // base cell 27
  bc!(4, 1, 1, 0),               // base cell 28
  bc!(3, 0, 1, 0),               // base cell 29
  bc!(0, 0, 1, 1),               // base cell 30
  bc!(4, 0, 0, 0),               // base cell 31
  bc!(5, 0, 1, 0),               // base cell 32
  bc!(0, 0, 1, 0),               // base cell 33
  bc!(7, 0, 1, 0),               // base cell 34
  bc!(11, 1, 1, 0),              // base cell 35
  bc!(7, 0, 0, 0),               // base cell 36
  bc!(10, 1, 0, 0),              // base cell 37
  bc!(12, 2, 0, 0, pent 3, 7),   // base cell 38 (pentagon)
  bc!(6, 1, 0, 1),               // base cell 39
  bc!(7, 1, 0, 1),               // base cell 40
  bc!(4, 0, 0, 1),               // base cell 41
  bc!(3, 0, 0, 1),               // base cell 42
  bc!(3, 0, 1, 1),               // base cell 43
  bc!(4, 0, 1, 0),               // base cell 44
  bc!(6, 1, 0, 0),               // base cell 45
  bc!(11, 0, 0, 0),              // base cell 46
  bc!(8, 0, 0, 1),               // base cell 47
  bc!(5, 0, 0, 1),               // base cell 48
  bc!(14, 2, 0, 0, pent 0, 9),   // base cell 49 (pentagon)
  bc!(5, 0, 0, 0),               // base cell 50
  bc!(12, 1, 0, 0),              // base cell 51
  bc!(10, 1, 1, 0),              // base cell 52
  bc!(4, 0, 1, 1),               // base cell 53
  bc!(12, 1, 1, 0),              // base cell 54
  bc!(7, 1, 0, 0),               // base cell 55
  bc!(11, 0, 1, 0),              // base cell 56
  bc!(10, 0, 0, 0),              // base cell 57
  bc!(13, 2, 0, 0, pent 4, 8),   // base cell 58 (pentagon)
  bc!(10, 0, 0, 1),              // base cell 59
  bc!(11, 0, 0, 1),              // base cell 60
  bc!(9, 0, 1, 0),               // base cell 61
  bc!(8, 0, 1, 0),               // base cell 62
  bc!(6, 2, 0, 0, pent 11, 15),  // base cell 63 (pentagon)
  bc!(8, 0, 0, 0),               // base cell 64
  bc!(9, 0, 0, 1),               // base cell 65
  bc!(14, 1, 0, 0),              // base cell 66
  bc!(5, 1, 0, 1),               // base cell 67
  bc!(16, 0, 1, 1),              // base cell 68
  bc!(8, 1, 0, 1),               // base cell 69
  bc!(5, 1, 0, 0),               // base cell 70
  bc!(12, 0, 0, 0),              // base cell 71
  bc!(7, 2, 0, 0, pent 12, 16),  // base cell 72 (pentagon)
  bc!(12, 0, 1, 0),              // base cell 73
  bc!(10, 0, 1, 0),              // base cell 74
  bc!(9, 0, 0, 0),               // base cell 75
  bc!(13, 1, 0, 0),              // base cell 76
  bc!(16, 0, 0, 1),              // base cell 77
  bc!(15, 0, 1, 1),              // base cell 78
  bc!(15, 0, 1, 0),              // base cell 79
  bc!(16, 0, 1, 0),              // base cell 80
  bc!(14, 1, 1, 0),              // base cell 81
  bc!(13, 1, 1, 0),              // base cell 82
  bc!(5, 2, 0, 0, pent 10, 19),  // base cell 83 (pentagon)
  bc!(8, 1, 0, 0),               // base cell 84
  bc!(14, 0, 0, 0),              // base cell 85
  bc!(9, 1, 0, 1),               // base cell 86
  bc!(14, 0, 0, 1),              // base cell 87
  bc!(17, 0, 0, 1),              // base cell 88
  bc!(12, 0, 0, 1),              // base cell 89
  bc!(16, 0, 0, 0),              // base cell 90
  bc!(17, 0, 1, 1),              // base cell 91
  bc!(15, 0, 0, 1),              // base cell 92
  bc!(16, 1, 0, 1),              // base cell 93
  bc!(9, 1, 0, 0),               // base cell 94
  bc!(15, 0, 0, 0),              // base cell 95
  bc!(13, 0, 0, 0),              // base cell 96
  bc!(8, 2, 0, 0, pent 13, 17),  // base cell 97 (pentagon)
  bc!(13, 0, 1, 0),              // base cell 98
  bc!(17, 1, 0, 1),              // base cell 99
  bc!(19, 0, 1, 0),              // base cell 100
  bc!(14, 0, 1, 0),              // base cell 101
  bc!(19, 0, 1, 1),              // base cell 102
  bc!(17, 0, 1, 0),              // base cell 103
  bc!(13, 0, 0, 1),              // base cell 104
  bc!(17, 0, 0, 0),              // base cell 105
  bc!(16, 1, 0, 0),              // base cell 106
  bc!(9, 2, 0, 0, pent 14, 18),  // base cell 107 (pentagon)
  bc!(15, 1, 0, 1),              // base cell 108
  bc!(15, 1, 0, 0),              // base cell 109
  bc!(18, 0, 1, 1),              // base cell 110
  bc!(18, 0, 0, 1),              // base cell 111
  bc!(19, 0, 0, 1),              // base cell 112
  bc!(17, 1, 0, 0),              // base cell 113
  bc!(19, 0, 0, 0),              // base cell 114
  bc!(18, 0, 1, 0),              // base cell 115
  bc!(18, 1, 0, 1),              // base cell 116
  bc!(19, 2, 0, 0, pent -1, -1), // base cell 117 (pentagon)
  bc!(19, 1, 0, 0),              // base cell 118
  bc!(18, 0, 0, 0),              // base cell 119
  bc!(19, 1, 0, 1),              // base cell 120
  bc!(18, 1, 0, 0),              // base cell 121
];

macro_rules! bcr {
  ($bc:expr, $rot:expr) => {
    BaseCellRotation {
      base_cell: $bc,
      ccw_rot60: $rot,
    }
  };
}

/// Inverse lookup: for each face and a res 0 lattice coordinate in that
/// face's system, the base cell at that coordinate and the CCW rotation
/// count into the base cell's own orientation. Valid lookup coordinates run
/// from (0,0,0) to (2,2,2).
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [[[[BaseCellRotation; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [[[bcr!(16, 0), bcr!(18, 0), bcr!(24, 0)],
    [bcr!(33, 0), bcr!(30, 0), bcr!(32, 3)],
    [bcr!(49, 1), bcr!(48, 3), bcr!(50, 3)]],
   [[bcr!(8, 0),  bcr!(5, 5),  bcr!(10, 5)],
    [bcr!(22, 0), bcr!(16, 0), bcr!(18, 0)],
    [bcr!(41, 1), bcr!(33, 0), bcr!(30, 0)]],
   [[bcr!(4, 0),  bcr!(0, 5),  bcr!(2, 5)],
    [bcr!(15, 1), bcr!(8, 0),  bcr!(5, 5)],
    [bcr!(31, 1), bcr!(22, 0), bcr!(16, 0)]]],
  // face 1
  [[[bcr!(2, 0),  bcr!(6, 0),  bcr!(14, 0)],
    [bcr!(10, 0), bcr!(11, 0), bcr!(17, 3)],
    [bcr!(24, 1), bcr!(23, 3), bcr!(25, 3)]],
   [[bcr!(0, 0),  bcr!(1, 5),  bcr!(9, 5)],
    [bcr!(5, 0),  bcr!(2, 0),  bcr!(6, 0)],
    [bcr!(18, 1), bcr!(10, 0), bcr!(11, 0)]],
   [[bcr!(4, 1),  bcr!(3, 5),  bcr!(7, 5)],
    [bcr!(8, 1),  bcr!(0, 0),  bcr!(1, 5)],
    [bcr!(16, 1), bcr!(5, 0),  bcr!(2, 0)]]],
  // face 2
  [[[bcr!(7, 0),  bcr!(21, 0), bcr!(38, 0)],
    [bcr!(9, 0),  bcr!(19, 0), bcr!(34, 3)],
    [bcr!(14, 1), bcr!(20, 3), bcr!(36, 3)]],
   [[bcr!(3, 0),  bcr!(13, 5), bcr!(29, 5)],
    [bcr!(1, 0),  bcr!(7, 0),  bcr!(21, 0)],
    [bcr!(6, 1),  bcr!(9, 0),  bcr!(19, 0)]],
   [[bcr!(4, 2),  bcr!(12, 5), bcr!(26, 5)],
    [bcr!(0, 1),  bcr!(3, 0),  bcr!(13, 5)],
    [bcr!(2, 1),  bcr!(1, 0),  bcr!(7, 0)]]],
  // face 3
  [[[bcr!(26, 0), bcr!(42, 0), bcr!(58, 0)],
    [bcr!(29, 0), bcr!(43, 0), bcr!(62, 3)],
    [bcr!(38, 1), bcr!(47, 3), bcr!(64, 3)]],
   [[bcr!(12, 0), bcr!(28, 5), bcr!(44, 5)],
    [bcr!(13, 0), bcr!(26, 0), bcr!(42, 0)],
    [bcr!(21, 1), bcr!(29, 0), bcr!(43, 0)]],
   [[bcr!(4, 3),  bcr!(15, 5), bcr!(31, 5)],
    [bcr!(3, 1),  bcr!(12, 0), bcr!(28, 5)],
    [bcr!(7, 1),  bcr!(13, 0), bcr!(26, 0)]]],
  // face 4
  [[[bcr!(31, 0), bcr!(41, 0), bcr!(49, 0)],
    [bcr!(44, 0), bcr!(53, 0), bcr!(61, 3)],
    [bcr!(58, 1), bcr!(65, 3), bcr!(75, 3)]],
   [[bcr!(15, 0), bcr!(22, 5), bcr!(33, 5)],
    [bcr!(28, 0), bcr!(31, 0), bcr!(41, 0)],
    [bcr!(42, 1), bcr!(44, 0), bcr!(53, 0)]],
   [[bcr!(4, 4),  bcr!(8, 5),  bcr!(16, 5)],
    [bcr!(12, 1), bcr!(15, 0), bcr!(22, 5)],
    [bcr!(26, 1), bcr!(28, 0), bcr!(31, 0)]]],
  // face 5
  [[[bcr!(50, 0), bcr!(48, 0), bcr!(49, 3)],
    [bcr!(32, 0), bcr!(30, 3), bcr!(33, 3)],
    [bcr!(24, 3), bcr!(18, 3), bcr!(16, 3)]],
   [[bcr!(70, 0), bcr!(67, 0), bcr!(66, 3)],
    [bcr!(52, 3), bcr!(50, 0), bcr!(48, 0)],
    [bcr!(37, 3), bcr!(32, 0), bcr!(30, 3)]],
   [[bcr!(83, 0), bcr!(87, 3), bcr!(85, 3)],
    [bcr!(74, 3), bcr!(70, 0), bcr!(67, 0)],
    [bcr!(57, 1), bcr!(52, 3), bcr!(50, 0)]]],
  // face 6
  [[[bcr!(25, 0), bcr!(23, 0), bcr!(24, 3)],
    [bcr!(17, 0), bcr!(11, 3), bcr!(10, 3)],
    [bcr!(14, 3), bcr!(6, 3),  bcr!(2, 3)]],
   [[bcr!(45, 0), bcr!(39, 0), bcr!(37, 3)],
    [bcr!(35, 3), bcr!(25, 0), bcr!(23, 0)],
    [bcr!(27, 3), bcr!(17, 0), bcr!(11, 3)]],
   [[bcr!(63, 0), bcr!(59, 3), bcr!(57, 3)],
    [bcr!(56, 3), bcr!(45, 0), bcr!(39, 0)],
    [bcr!(46, 3), bcr!(35, 3), bcr!(25, 0)]]],
  // face 7
  [[[bcr!(36, 0), bcr!(20, 0), bcr!(14, 3)],
    [bcr!(34, 0), bcr!(19, 3), bcr!(9, 3)],
    [bcr!(38, 3), bcr!(21, 3), bcr!(7, 3)]],
   [[bcr!(55, 0), bcr!(40, 0), bcr!(27, 3)],
    [bcr!(54, 3), bcr!(36, 0), bcr!(20, 0)],
    [bcr!(51, 3), bcr!(34, 0), bcr!(19, 3)]],
   [[bcr!(72, 0), bcr!(60, 3), bcr!(46, 3)],
    [bcr!(73, 3), bcr!(55, 0), bcr!(40, 0)],
    [bcr!(71, 3), bcr!(54, 3), bcr!(36, 0)]]],
  // face 8
  [[[bcr!(64, 0), bcr!(47, 0), bcr!(38, 3)],
    [bcr!(62, 0), bcr!(43, 3), bcr!(29, 3)],
    [bcr!(58, 3), bcr!(42, 3), bcr!(26, 3)]],
   [[bcr!(84, 0), bcr!(69, 0), bcr!(51, 3)],
    [bcr!(82, 3), bcr!(64, 0), bcr!(47, 0)],
    [bcr!(76, 3), bcr!(62, 0), bcr!(43, 3)]],
   [[bcr!(97, 0), bcr!(89, 3), bcr!(71, 3)],
    [bcr!(98, 3), bcr!(84, 0), bcr!(69, 0)],
    [bcr!(96, 3), bcr!(82, 3), bcr!(64, 0)]]],
  // face 9
  [[[bcr!(75, 0), bcr!(65, 0), bcr!(58, 3)],
    [bcr!(61, 0), bcr!(53, 3), bcr!(44, 3)],
    [bcr!(49, 3), bcr!(41, 3), bcr!(31, 3)]],
   [[bcr!(94, 0), bcr!(86, 0), bcr!(76, 3)],
    [bcr!(81, 3), bcr!(75, 0), bcr!(65, 0)],
    [bcr!(66, 3), bcr!(61, 0), bcr!(53, 3)]],
   [[bcr!(107, 0), bcr!(104, 3), bcr!(96, 3)],
    [bcr!(101, 3), bcr!(94, 0),  bcr!(86, 0)],
    [bcr!(85, 3),  bcr!(81, 3),  bcr!(75, 0)]]],
  // face 10
  [[[bcr!(57, 0), bcr!(59, 0), bcr!(63, 3)],
    [bcr!(74, 0), bcr!(78, 3), bcr!(79, 3)],
    [bcr!(83, 3), bcr!(92, 3), bcr!(95, 3)]],
   [[bcr!(37, 0), bcr!(39, 3), bcr!(45, 3)],
    [bcr!(52, 0), bcr!(57, 0), bcr!(59, 0)],
    [bcr!(70, 3), bcr!(74, 0), bcr!(78, 3)]],
   [[bcr!(24, 0), bcr!(23, 3), bcr!(25, 3)],
    [bcr!(32, 3), bcr!(37, 0), bcr!(39, 3)],
    [bcr!(50, 3), bcr!(52, 0), bcr!(57, 0)]]],
  // face 11
  [[[bcr!(46, 0), bcr!(60, 0), bcr!(72, 3)],
    [bcr!(56, 0), bcr!(68, 3), bcr!(80, 3)],
    [bcr!(63, 3), bcr!(77, 3), bcr!(90, 3)]],
   [[bcr!(27, 0), bcr!(40, 3), bcr!(55, 3)],
    [bcr!(35, 0), bcr!(46, 0), bcr!(60, 0)],
    [bcr!(45, 3), bcr!(56, 0), bcr!(68, 3)]],
   [[bcr!(14, 0), bcr!(20, 3), bcr!(36, 3)],
    [bcr!(17, 3), bcr!(27, 0), bcr!(40, 3)],
    [bcr!(25, 3), bcr!(35, 0), bcr!(46, 0)]]],
  // face 12
  [[[bcr!(71, 0), bcr!(89, 0), bcr!(97, 3)],
    [bcr!(73, 0), bcr!(91, 3), bcr!(103, 3)],
    [bcr!(72, 3), bcr!(88, 3), bcr!(105, 3)]],
   [[bcr!(51, 0), bcr!(69, 3), bcr!(84, 3)],
    [bcr!(54, 0), bcr!(71, 0), bcr!(89, 0)],
    [bcr!(55, 3), bcr!(73, 0), bcr!(91, 3)]],
   [[bcr!(38, 0), bcr!(47, 3), bcr!(64, 3)],
    [bcr!(34, 3), bcr!(51, 0), bcr!(69, 3)],
    [bcr!(36, 3), bcr!(54, 0), bcr!(71, 0)]]],
  // face 13
  [[[bcr!(96, 0),  bcr!(104, 0), bcr!(107, 3)],
    [bcr!(98, 0),  bcr!(110, 3), bcr!(115, 3)],
    [bcr!(97, 3),  bcr!(111, 3), bcr!(119, 3)]],
   [[bcr!(76, 0),  bcr!(86, 3),  bcr!(94, 3)],
    [bcr!(82, 0),  bcr!(96, 0),  bcr!(104, 0)],
    [bcr!(84, 3),  bcr!(98, 0),  bcr!(110, 3)]],
   [[bcr!(58, 0),  bcr!(65, 3),  bcr!(75, 3)],
    [bcr!(62, 3),  bcr!(76, 0),  bcr!(86, 3)],
    [bcr!(64, 3),  bcr!(82, 0),  bcr!(96, 0)]]],
  // face 14
  [[[bcr!(85, 0),  bcr!(87, 0),  bcr!(83, 3)],
    [bcr!(101, 0), bcr!(102, 3), bcr!(100, 3)],
    [bcr!(107, 3), bcr!(112, 3), bcr!(114, 3)]],
   [[bcr!(66, 0),  bcr!(67, 3),  bcr!(70, 3)],
    [bcr!(81, 0),  bcr!(85, 0),  bcr!(87, 0)],
    [bcr!(94, 3),  bcr!(101, 0), bcr!(102, 3)]],
   [[bcr!(49, 0),  bcr!(48, 3),  bcr!(50, 3)],
    [bcr!(61, 3),  bcr!(66, 0),  bcr!(67, 3)],
    [bcr!(75, 3),  bcr!(81, 0),  bcr!(85, 0)]]],
  // face 15
  [[[bcr!(95, 0),  bcr!(92, 0),  bcr!(83, 0)],
    [bcr!(79, 0),  bcr!(78, 0),  bcr!(74, 3)],
    [bcr!(63, 1),  bcr!(59, 3),  bcr!(57, 3)]],
   [[bcr!(109, 0), bcr!(108, 0), bcr!(100, 5)],
    [bcr!(93, 1),  bcr!(95, 0),  bcr!(92, 0)],
    [bcr!(77, 1),  bcr!(79, 0),  bcr!(78, 0)]],
   [[bcr!(117, 4), bcr!(118, 5), bcr!(114, 5)],
    [bcr!(106, 1), bcr!(109, 0), bcr!(108, 0)],
    [bcr!(90, 1),  bcr!(93, 1),  bcr!(95, 0)]]],
  // face 16
  [[[bcr!(90, 0),  bcr!(77, 0),  bcr!(63, 0)],
    [bcr!(80, 0),  bcr!(68, 0),  bcr!(56, 3)],
    [bcr!(72, 1),  bcr!(60, 3),  bcr!(46, 3)]],
   [[bcr!(106, 0), bcr!(93, 0),  bcr!(79, 5)],
    [bcr!(99, 1),  bcr!(90, 0),  bcr!(77, 0)],
    [bcr!(88, 1),  bcr!(80, 0),  bcr!(68, 0)]],
   [[bcr!(117, 3), bcr!(109, 5), bcr!(95, 5)],
    [bcr!(113, 1), bcr!(106, 0), bcr!(93, 0)],
    [bcr!(105, 1), bcr!(99, 1),  bcr!(90, 0)]]],
  // face 17
  [[[bcr!(105, 0), bcr!(88, 0),  bcr!(72, 0)],
    [bcr!(103, 0), bcr!(91, 0),  bcr!(73, 3)],
    [bcr!(97, 1),  bcr!(89, 3),  bcr!(71, 3)]],
   [[bcr!(113, 0), bcr!(99, 0),  bcr!(80, 5)],
    [bcr!(116, 1), bcr!(105, 0), bcr!(88, 0)],
    [bcr!(111, 1), bcr!(103, 0), bcr!(91, 0)]],
   [[bcr!(117, 2), bcr!(106, 5), bcr!(90, 5)],
    [bcr!(121, 1), bcr!(113, 0), bcr!(99, 0)],
    [bcr!(119, 1), bcr!(116, 1), bcr!(105, 0)]]],
  // face 18
  [[[bcr!(119, 0), bcr!(111, 0), bcr!(97, 0)],
    [bcr!(115, 0), bcr!(110, 0), bcr!(98, 3)],
    [bcr!(107, 1), bcr!(104, 3), bcr!(96, 3)]],
   [[bcr!(121, 0), bcr!(116, 0), bcr!(103, 5)],
    [bcr!(120, 1), bcr!(119, 0), bcr!(111, 0)],
    [bcr!(112, 1), bcr!(115, 0), bcr!(110, 0)]],
   [[bcr!(117, 1), bcr!(113, 5), bcr!(105, 5)],
    [bcr!(118, 1), bcr!(121, 0), bcr!(116, 0)],
    [bcr!(114, 1), bcr!(120, 1), bcr!(119, 0)]]],
  // face 19
  [[[bcr!(114, 0), bcr!(112, 0), bcr!(107, 0)],
    [bcr!(100, 0), bcr!(102, 0), bcr!(101, 3)],
    [bcr!(83, 1),  bcr!(87, 3),  bcr!(85, 3)]],
   [[bcr!(118, 0), bcr!(120, 0), bcr!(115, 5)],
    [bcr!(108, 1), bcr!(114, 0), bcr!(112, 0)],
    [bcr!(92, 1),  bcr!(100, 0), bcr!(102, 0)]],
   [[bcr!(117, 0), bcr!(121, 5), bcr!(119, 5)],
    [bcr!(109, 1), bcr!(118, 0), bcr!(120, 0)],
    [bcr!(95, 1),  bcr!(108, 1), bcr!(114, 0)]]],
];

/// Whether the base cell is one of the 12 pentagons.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Whether the base cell is a polar pentagon; the two polar pentagons have
/// all of their neighbors oriented towards them.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

fn _lookup(fijk: &FaceIJK) -> Option<&'static BaseCellRotation> {
  let c = fijk.coord;
  if fijk.face < 0
    || fijk.face >= NUM_ICOSA_FACES
    || c.i < 0
    || c.i > MAX_FACE_COORD
    || c.j < 0
    || c.j > MAX_FACE_COORD
    || c.k < 0
    || c.k > MAX_FACE_COORD
  {
    return None;
  }
  Some(&FACE_IJK_BASE_CELLS[fijk.face as usize][c.i as usize][c.j as usize][c.k as usize])
}

/// Base cell located at the given res 0 face coordinate, or
/// `INVALID_BASE_CELL` when out of lookup range.
#[inline]
#[must_use]
pub(crate) fn _face_ijk_to_base_cell(fijk: &FaceIJK) -> i32 {
  _lookup(fijk).map_or(INVALID_BASE_CELL, |r| r.base_cell)
}

/// CCW rotation count into the orientation of the base cell at the given
/// res 0 face coordinate, or `INVALID_ROTATIONS` when out of lookup range.
#[inline]
#[must_use]
pub(crate) fn _face_ijk_to_base_cell_ccwrot60(fijk: &FaceIJK) -> i32 {
  _lookup(fijk).map_or(INVALID_ROTATIONS, |r| r.ccw_rot60)
}

/// Whether `test_face` is one of the pentagon's clockwise offset faces.
#[inline]
#[must_use]
pub(crate) fn _base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.is_pentagon && (data.cw_offset_pent[0] == test_face || data.cw_offset_pent[1] == test_face)
}
