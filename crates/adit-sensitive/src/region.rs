//! One measurement probe bound to one volume.

use adit_core::RegionTag;

/// A sensitive region: identity tag, the volume it instruments, and the
/// hit accumulation state transport writes into.
///
/// Instances belong to exactly one execution context (enforced by the
/// registry, which never hands an instance across contexts). The
/// accumulator is plain mutable state — no interior locking — precisely
/// because of that exclusivity.
#[derive(Clone, Debug, PartialEq)]
pub struct SensitiveRegion {
    tag: RegionTag,
    volume: String,
    hits: u64,
    deposited_energy: f64,
}

impl SensitiveRegion {
    /// Bind a fresh region to a volume. Accumulators start at zero.
    pub fn new(tag: RegionTag, volume: &str) -> Self {
        Self {
            tag,
            volume: volume.to_owned(),
            hits: 0,
            deposited_energy: 0.0,
        }
    }

    /// The region's identity tag.
    pub fn tag(&self) -> &RegionTag {
        &self.tag
    }

    /// Name of the instrumented volume.
    pub fn volume(&self) -> &str {
        &self.volume
    }

    /// Record one energy deposit (MeV).
    pub fn record_hit(&mut self, energy: f64) {
        self.hits += 1;
        self.deposited_energy += energy;
    }

    /// Number of hits recorded so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total deposited energy so far (MeV).
    pub fn deposited_energy(&self) -> f64 {
        self.deposited_energy
    }

    /// Clear the accumulators between events.
    pub fn reset(&mut self) {
        self.hits = 0;
        self.deposited_energy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_accumulate_and_reset() {
        let mut r = SensitiveRegion::new("scint".into(), "xenon_target");
        r.record_hit(1.5);
        r.record_hit(0.5);
        assert_eq!(r.hits(), 2);
        assert!((r.deposited_energy() - 2.0).abs() < 1e-12);
        r.reset();
        assert_eq!(r.hits(), 0);
        assert_eq!(r.deposited_energy(), 0.0);
    }
}
