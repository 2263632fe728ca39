//! Per-volume physics limits.

/// Optional tracking limits attached to a volume.
///
/// A `None` field means the transport engine applies no limit of that
/// kind inside the volume. Values are in the base units of
/// [`adit_core::units`]: mm, ns, MeV.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepLimits {
    /// Maximum allowed step length.
    pub max_step: Option<f64>,
    /// Maximum global time; tracks older than this are killed.
    pub max_time: Option<f64>,
    /// Minimum kinetic energy; tracks below this are killed.
    pub min_energy: Option<f64>,
}

impl StepLimits {
    /// Limits with no restriction of any kind.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Whether any limit is actually set.
    pub fn is_restrictive(&self) -> bool {
        self.max_step.is_some() || self.max_time.is_some() || self.min_energy.is_some()
    }
}
