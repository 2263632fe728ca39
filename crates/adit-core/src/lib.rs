//! Core types and traits for the Adit apparatus framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Adit workspace:
//! identifier newtypes, physical unit constants, the error taxonomy,
//! simulation-state and command types, and the [`RandomEngine`] trait
//! through which seed streams reach the external random collaborator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod traits;
pub mod units;

pub use command::{Command, SeedStream, SimState, MAX_SEED_COUNT};
pub use error::{DispatchError, GeometryError, ValidationError};
pub use id::{ContextId, RegionTag};
pub use traits::RandomEngine;
