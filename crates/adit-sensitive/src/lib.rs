//! Sensitive-region instances and their per-context registry.
//!
//! A sensitive region instruments one volume and accumulates per-event
//! measurement state while transport runs. That state is mutable, so one
//! instance must never be visible to two worker contexts at once: the
//! [`SensitiveRegionRegistry`] hands out a distinct instance per
//! `(ContextId, RegionTag)` pair and caches it for the context's lifetime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod region;
pub mod registry;

pub use region::SensitiveRegion;
pub use registry::SensitiveRegionRegistry;
