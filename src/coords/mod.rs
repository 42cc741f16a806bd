//! Face-local lattice coordinate systems and the icosahedral projection.

pub mod face_ijk;
pub mod ijk;
