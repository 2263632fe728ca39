//! Adit: an underground particle-transport apparatus model.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Adit sub-crates. For most users, adding `adit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use adit::prelude::*;
//!
//! // Build the apparatus: materials first, then the geometry over them.
//! let builder = GeometryBuilder::new(MaterialCatalog::build());
//! let mut config = RuntimeConfig::new(builder, ChaChaEngine::new(42));
//!
//! // Operator commands while idle: tighten the detector time cut and
//! // reseed the random engine.
//! config
//!     .dispatch(SimState::Idle, &Command::new("/detector/setTimeCut", "500"))
//!     .unwrap();
//! config
//!     .dispatch(SimState::Idle, &Command::new("/seed/setSeeds", "12345 67890"))
//!     .unwrap();
//!
//! // The cut appears in the next constructed tree, not retroactively.
//! let root = config.builder().construct().unwrap();
//! let target = root.find("xenon_target").unwrap();
//! assert_eq!(target.limits.unwrap().max_time, Some(500.0));
//!
//! // Each worker context attaches its own sensitive-region instances.
//! let mut registry = SensitiveRegionRegistry::new();
//! config
//!     .builder()
//!     .attach_sensitive_regions(ContextId(0), &root, &mut registry)
//!     .unwrap();
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `adit-core` | IDs, units, errors, commands, the `RandomEngine` trait |
//! | [`materials`] | `adit-materials` | `Material`, `MaterialCatalog` |
//! | [`geometry`] | `adit-geometry` | `Volume`, `Solid`, `StepLimits`, `CutParameterSet` |
//! | [`sensitive`] | `adit-sensitive` | `SensitiveRegion`, `SensitiveRegionRegistry` |
//! | [`detector`] | `adit-detector` | `GeometryBuilder`, region tags |
//! | [`command`] | `adit-command` | `RuntimeConfig`, command table, engines |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use adit_command as command;
pub use adit_core as types;
pub use adit_detector as detector;
pub use adit_geometry as geometry;
pub use adit_materials as materials;
pub use adit_sensitive as sensitive;

/// The types most programs need, importable in one line.
pub mod prelude {
    pub use adit_command::{ChaChaEngine, RecordingEngine, RuntimeConfig};
    pub use adit_core::{
        Command, ContextId, RandomEngine, RegionTag, SeedStream, SimState,
    };
    pub use adit_detector::{GeometryBuilder, REGION_PMT, REGION_SCINT};
    pub use adit_geometry::{CutParameterSet, Solid, StepLimits, Volume};
    pub use adit_materials::MaterialCatalog;
    pub use adit_sensitive::{SensitiveRegion, SensitiveRegionRegistry};
}
