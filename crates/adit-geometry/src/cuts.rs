//! The mutable cut-parameter set read at construction time.

use adit_core::units::{EV, MM, NS};
use adit_core::ValidationError;

/// The five scalar thresholds the operator may tune between runs.
///
/// Single-writer: only the runtime-config interface mutates these, and
/// only while no worker is constructing or attaching. The geometry
/// builder reads them once per `construct()` call — a change made after
/// a build has no effect until the next one. This asymmetry is by
/// contract: downstream consumers only ever observe the volume tree, and
/// the tree is only produced by a full rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutParameterSet {
    /// Minimum kinetic energy tracked in the room volumes (MeV).
    pub room_energy_cut: f64,
    /// Minimum kinetic energy tracked in the detector volumes (MeV).
    pub energy_cut: f64,
    /// Maximum track time inside the detector volumes (ns).
    pub time_cut: f64,
    /// Maximum track time inside the room volumes (ns).
    pub room_time_cut: f64,
    /// Maximum step length inside the detector volumes (mm).
    pub max_step: f64,
}

impl Default for CutParameterSet {
    /// The apparatus defaults: 250 eV energy floors, 1 µs time caps,
    /// 5 mm steps in the target.
    fn default() -> Self {
        Self {
            room_energy_cut: 250.0 * EV,
            energy_cut: 250.0 * EV,
            time_cut: 1000.0 * NS,
            room_time_cut: 1000.0 * NS,
            max_step: 5.0 * MM,
        }
    }
}

impl CutParameterSet {
    /// Validate a candidate value for any cut field.
    ///
    /// Cuts are physical thresholds: negative is meaningless, and NaN or
    /// an infinity would poison every comparison downstream. On rejection
    /// the caller must leave the stored value untouched.
    pub fn validate(parameter: &'static str, v: f64) -> Result<f64, ValidationError> {
        if v.is_nan() || v.is_infinite() {
            return Err(ValidationError::NonFiniteCut { parameter });
        }
        if v < 0.0 {
            return Err(ValidationError::NegativeCut {
                parameter,
                value: v,
            });
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_apparatus() {
        let cuts = CutParameterSet::default();
        assert_eq!(cuts.energy_cut, 250.0 * EV);
        assert_eq!(cuts.room_time_cut, 1000.0 * NS);
        assert_eq!(cuts.max_step, 5.0 * MM);
    }

    #[test]
    fn negative_and_non_finite_are_rejected() {
        assert!(matches!(
            CutParameterSet::validate("time cut", -1.0),
            Err(ValidationError::NegativeCut { .. })
        ));
        assert!(matches!(
            CutParameterSet::validate("time cut", f64::NAN),
            Err(ValidationError::NonFiniteCut { .. })
        ));
        assert!(matches!(
            CutParameterSet::validate("time cut", f64::INFINITY),
            Err(ValidationError::NonFiniteCut { .. })
        ));
        assert_eq!(CutParameterSet::validate("time cut", 0.0), Ok(0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validate_accepts_exactly_the_non_negative_finite(v in any::<f64>()) {
                let ok = CutParameterSet::validate("cut", v).is_ok();
                prop_assert_eq!(ok, v.is_finite() && v >= 0.0);
            }
        }
    }
}
