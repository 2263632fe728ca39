//! Detector construction and sensitive-region attachment.
//!
//! [`GeometryBuilder`] owns the material catalog and the mutable
//! [`CutParameterSet`](adit_geometry::CutParameterSet), builds the full
//! apparatus tree on demand, and attaches each worker context's
//! sensitive-region instances to the designated volumes.
//!
//! Construction and attachment are ordered, not interchangeable:
//! `construct()` must complete and its tree be published before any
//! context calls `attach_sensitive_regions()`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;

pub use builder::{GeometryBuilder, REGION_PMT, REGION_SCINT};
