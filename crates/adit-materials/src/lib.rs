//! Material definitions and the immutable material catalog.
//!
//! [`MaterialCatalog::build()`] constructs every named material the detector
//! geometry references, once, for the process lifetime. After `build()` the
//! catalog is read-only; volumes reference materials by name and resolve
//! them through [`MaterialCatalog::lookup`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod material;

pub use catalog::{CatalogError, MaterialCatalog};
pub use material::{Material, MaterialState};
