//! Hierarchical volume model for the apparatus geometry.
//!
//! A detector is a tree of [`Volume`] nodes rooted at `"world"`: each node
//! carries a [`Solid`] shape, a placement relative to its parent, the name
//! of its material, and optional [`StepLimits`]. The tree is built whole,
//! validated whole, and read-only afterwards — geometry changes mean a
//! full rebuild, never partial mutation, so all worker contexts can read
//! the published tree concurrently without copies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cuts;
pub mod limits;
pub mod solid;
pub mod volume;

pub use cuts::CutParameterSet;
pub use limits::StepLimits;
pub use solid::{Aabb, Solid};
pub use volume::Volume;
