//! Strongly-typed identifiers for execution contexts and sensitive regions.

use std::fmt;

/// Identifies one worker execution context.
///
/// Each parallel unit of transport execution carries its own `ContextId`,
/// assigned by whatever spawns the workers. The sensitive-region registry
/// keys its per-worker caches on this ID rather than on ambient thread
/// identity, so context ownership is explicit and testable without real
/// concurrency. `ContextId(0)` is conventionally the coordinating (master)
/// context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(pub u32);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx{}", self.0)
    }
}

impl From<u32> for ContextId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Names a class of sensitive region within the apparatus.
///
/// Region tags identify *what* is instrumented ("the scintillator", "the
/// photocathode"), not which worker owns the instance. The registry key is
/// the pair `(ContextId, RegionTag)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionTag(pub String);

impl RegionTag {
    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RegionTag {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for RegionTag {
    fn from(v: String) -> Self {
        Self(v)
    }
}
