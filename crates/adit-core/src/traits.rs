//! The random-engine seam.

use crate::command::SeedStream;

/// The external random-number engine's seed-setting entry point.
///
/// The seed command mutates state the framework does not own. Modelling the
/// collaborator as an injected trait keeps that state outside the core: the
/// command layer only forwards a validated [`SeedStream`], never initializes
/// or reads the engine itself. In a multi-worker run this is the coordinating
/// context's engine; per-worker streams are derived elsewhere.
pub trait RandomEngine {
    /// Reseed the engine from a sentinel-terminated integer stream.
    ///
    /// How many of the integers the engine actually consumes is up to the
    /// individual implementation.
    fn set_seeds(&mut self, stream: &SeedStream);
}
