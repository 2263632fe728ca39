//! The operator-facing command surface.
//!
//! Free-form command text arrives here, is gated against the simulation
//! state, parsed, validated, and either applied — a cut stored for the
//! next rebuild, a seed stream forwarded to the random engine — or
//! rejected with a diagnostic, leaving all state untouched.
//!
//! The dispatch table models the hosting framework's contract: per-command
//! guidance text, parameter-name metadata, availability states, and the
//! broadcast flag that keeps the seed command on the coordinating context.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod engine;
pub mod messenger;
pub mod seeds;

pub use dispatch::{CommandSpec, CommandTable, CONFIG_STATES};
pub use engine::{ChaChaEngine, RecordingEngine};
pub use messenger::{
    RuntimeConfig, CMD_ENERGY_CUT, CMD_MAX_STEP, CMD_ROOM_ENERGY_CUT, CMD_ROOM_TIME_CUT,
    CMD_SET_SEEDS, CMD_TIME_CUT,
};
pub use seeds::parse_seed_stream;
