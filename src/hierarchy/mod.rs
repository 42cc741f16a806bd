//! Hierarchical navigation between resolutions: parents, children, and the
//! compact/uncompact set transforms.

pub mod compaction;
pub mod parent_child;
