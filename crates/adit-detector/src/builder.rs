//! The [`GeometryBuilder`].

use adit_core::units::{M, MM};
use adit_core::{ContextId, GeometryError, RegionTag, ValidationError};
use adit_geometry::{CutParameterSet, Solid, StepLimits, Volume};
use adit_materials::MaterialCatalog;
use adit_sensitive::SensitiveRegionRegistry;

/// Region tag for the scintillating xenon target.
pub const REGION_SCINT: &str = "scint";
/// Region tag for the photomultiplier photocathode.
pub const REGION_PMT: &str = "pmt";

/// Volume instrumented by [`REGION_SCINT`].
const SCINT_VOLUME: &str = "xenon_target";
/// Volume instrumented by [`REGION_PMT`].
const PMT_VOLUME: &str = "photocathode";

/// Builds the apparatus volume tree and owns its tunable cut parameters.
///
/// `construct()` produces a fresh, independent tree on every call; there
/// is no incremental update path. The cut setters store validated values
/// with no immediate geometry effect — the new thresholds appear in the
/// limits of the *next* constructed tree.
#[derive(Debug)]
pub struct GeometryBuilder {
    catalog: MaterialCatalog,
    cuts: CutParameterSet,
}

impl GeometryBuilder {
    /// A builder over the given catalog, with default cuts.
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self {
            catalog,
            cuts: CutParameterSet::default(),
        }
    }

    /// The current cut parameters.
    pub fn cuts(&self) -> &CutParameterSet {
        &self.cuts
    }

    /// Build the full volume tree: cavern rock world, air-filled lab,
    /// shielding stack, xenon vessel, PMT.
    ///
    /// Applies the current cuts to the room and detector limits, checks
    /// every material against the catalog, and structurally validates
    /// the tree. Any failure is fatal — no partial geometry is returned.
    /// With unchanged cuts, repeated calls produce identical trees.
    pub fn construct(&self) -> Result<Volume, GeometryError> {
        let room_limits = StepLimits {
            max_step: None,
            max_time: Some(self.cuts.room_time_cut),
            min_energy: Some(self.cuts.room_energy_cut),
        };
        let detector_limits = StepLimits {
            max_step: Some(self.cuts.max_step),
            max_time: Some(self.cuts.time_cut),
            min_energy: Some(self.cuts.energy_cut),
        };

        let photocathode = Volume::new(
            PMT_VOLUME,
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 110.0 * MM,
                hz: 5.0 * MM,
            },
            [0.0, 0.0, 70.0 * MM],
            "quartz",
        );
        let pmt = Volume::new(
            "pmt",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 120.0 * MM,
                hz: 80.0 * MM,
            },
            [0.0, 0.0, -600.0 * MM],
            "vacuum",
        )
        .with_child(photocathode);

        let xenon_gas = Volume::new(
            "xenon_gas",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 650.0 * MM,
                hz: 150.0 * MM,
            },
            [0.0, 0.0, 600.0 * MM],
            "gaseous_xenon",
        );
        let xenon_target = Volume::new(
            SCINT_VOLUME,
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 650.0 * MM,
                hz: 400.0 * MM,
            },
            [0.0, 0.0, 0.0],
            "liquid_xenon",
        )
        .with_limits(detector_limits);

        let vessel = Volume::new(
            "vessel",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 700.0 * MM,
                hz: 800.0 * MM,
            },
            [0.0, 0.0, 0.0],
            "steel",
        )
        .with_child(xenon_gas)
        .with_child(xenon_target)
        .with_child(pmt);

        let copper_liner = Volume::new(
            "copper_liner",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 800.0 * MM,
                hz: 900.0 * MM,
            },
            [0.0, 0.0, 0.0],
            "copper",
        )
        .with_child(vessel);

        let shield = Volume::new(
            "shield",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 900.0 * MM,
                hz: 1000.0 * MM,
            },
            [0.0, 0.0, -1.5 * M],
            "lead",
        )
        .with_child(copper_liner);

        let lab = Volume::new(
            "lab",
            Solid::Box {
                hx: 6.0 * M,
                hy: 6.0 * M,
                hz: 4.0 * M,
            },
            [0.0, 0.0, 0.0],
            "air",
        )
        .with_limits(room_limits)
        .with_child(shield);

        let world = Volume::new(
            "world",
            Solid::Box {
                hx: 12.0 * M,
                hy: 12.0 * M,
                hz: 12.0 * M,
            },
            [0.0, 0.0, 0.0],
            "rock",
        )
        .with_child(lab);

        self.check_materials(&world)?;
        world.validate()?;
        Ok(world)
    }

    /// Verify every volume's material is registered in the catalog.
    fn check_materials(&self, root: &Volume) -> Result<(), GeometryError> {
        let mut missing = None;
        root.walk(&mut |v| {
            if missing.is_none() && !self.catalog.contains(&v.material) {
                missing = Some(GeometryError::MissingMaterial {
                    volume: v.name.clone(),
                    material: v.material.clone(),
                });
            }
        });
        match missing {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Ensure the context's sensitive regions are attached to the
    /// designated volumes of `root`.
    ///
    /// Safe to call once per worker context after construction; repeated
    /// calls from the same context reuse the cached instances. Distinct
    /// contexts always receive distinct instances.
    pub fn attach_sensitive_regions(
        &self,
        context: ContextId,
        root: &Volume,
        registry: &mut SensitiveRegionRegistry,
    ) -> Result<(), GeometryError> {
        for (tag, volume_name) in [(REGION_SCINT, SCINT_VOLUME), (REGION_PMT, PMT_VOLUME)] {
            let target = root
                .find(volume_name)
                .ok_or_else(|| GeometryError::MissingVolume {
                    name: volume_name.to_owned(),
                })?;
            registry.get_or_create(context, RegionTag::from(tag), target);
        }
        Ok(())
    }

    /// Set the minimum tracked kinetic energy in the room volumes (MeV).
    ///
    /// Takes effect at the next `construct()`.
    pub fn set_room_energy_cut(&mut self, v: f64) -> Result<(), ValidationError> {
        self.cuts.room_energy_cut = CutParameterSet::validate("room energy cut", v)?;
        Ok(())
    }

    /// Set the minimum tracked kinetic energy in the detector (MeV).
    ///
    /// Takes effect at the next `construct()`.
    pub fn set_energy_cut(&mut self, v: f64) -> Result<(), ValidationError> {
        self.cuts.energy_cut = CutParameterSet::validate("energy cut", v)?;
        Ok(())
    }

    /// Set the maximum track time in the detector (ns).
    ///
    /// Takes effect at the next `construct()`.
    pub fn set_time_cut(&mut self, v: f64) -> Result<(), ValidationError> {
        self.cuts.time_cut = CutParameterSet::validate("time cut", v)?;
        Ok(())
    }

    /// Set the maximum track time in the room volumes (ns).
    ///
    /// Takes effect at the next `construct()`.
    pub fn set_room_time_cut(&mut self, v: f64) -> Result<(), ValidationError> {
        self.cuts.room_time_cut = CutParameterSet::validate("room time cut", v)?;
        Ok(())
    }

    /// Set the maximum step length in the detector (mm).
    ///
    /// Takes effect at the next `construct()`.
    pub fn set_max_step(&mut self, v: f64) -> Result<(), ValidationError> {
        self.cuts.max_step = CutParameterSet::validate("max step", v)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adit_core::units::{KEV, NS};

    fn builder() -> GeometryBuilder {
        GeometryBuilder::new(MaterialCatalog::build())
    }

    #[test]
    fn construct_builds_a_valid_tree() {
        let root = builder().construct().unwrap();
        assert_eq!(root.name, "world");
        for name in ["lab", "shield", "vessel", "xenon_target", "photocathode"] {
            assert!(root.find(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn default_cuts_land_on_the_right_volumes() {
        let root = builder().construct().unwrap();
        let defaults = CutParameterSet::default();

        let lab = root.find("lab").unwrap().limits.unwrap();
        assert_eq!(lab.min_energy, Some(defaults.room_energy_cut));
        assert_eq!(lab.max_time, Some(defaults.room_time_cut));
        assert_eq!(lab.max_step, None);

        let target = root.find("xenon_target").unwrap().limits.unwrap();
        assert_eq!(target.min_energy, Some(defaults.energy_cut));
        assert_eq!(target.max_time, Some(defaults.time_cut));
        assert_eq!(target.max_step, Some(defaults.max_step));
    }

    #[test]
    fn setter_rejection_leaves_the_value_unchanged() {
        let mut b = builder();
        let before = *b.cuts();
        assert!(b.set_time_cut(-5.0).is_err());
        assert!(b.set_energy_cut(f64::NAN).is_err());
        assert!(b.set_room_energy_cut(f64::NEG_INFINITY).is_err());
        assert_eq!(b.cuts(), &before);
    }

    #[test]
    fn setter_takes_effect_only_on_the_next_construct() {
        let mut b = builder();
        let old_tree = b.construct().unwrap();
        b.set_time_cut(500.0 * NS).unwrap();

        // The tree built before the setter still holds the old value.
        let old_limit = old_tree.find("xenon_target").unwrap().limits.unwrap();
        assert_eq!(old_limit.max_time, Some(1000.0 * NS));

        let new_tree = b.construct().unwrap();
        let new_limit = new_tree.find("xenon_target").unwrap().limits.unwrap();
        assert_eq!(new_limit.max_time, Some(500.0 * NS));
    }

    #[test]
    fn cut_round_trips_through_the_tree() {
        let mut b = builder();
        b.set_energy_cut(1.0 * KEV).unwrap();
        b.set_room_time_cut(0.0).unwrap();
        let root = b.construct().unwrap();
        let target = root.find("xenon_target").unwrap().limits.unwrap();
        let lab = root.find("lab").unwrap().limits.unwrap();
        assert!((target.min_energy.unwrap() - 1.0 * KEV).abs() < 1e-12);
        assert_eq!(lab.max_time, Some(0.0));
    }

    #[test]
    fn construct_is_deterministic() {
        let b = builder();
        let a = b.construct().unwrap();
        let c = b.construct().unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn attach_creates_one_instance_per_region() {
        let b = builder();
        let root = b.construct().unwrap();
        let mut registry = SensitiveRegionRegistry::new();
        b.attach_sensitive_regions(ContextId(0), &root, &mut registry)
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .get(ContextId(0), &RegionTag::from(REGION_SCINT))
                .unwrap()
                .volume(),
            "xenon_target"
        );
    }

    #[test]
    fn attach_is_idempotent_per_context() {
        let b = builder();
        let root = b.construct().unwrap();
        let mut registry = SensitiveRegionRegistry::new();
        b.attach_sensitive_regions(ContextId(0), &root, &mut registry)
            .unwrap();
        registry
            .get_or_create(ContextId(0), RegionTag::from(REGION_SCINT), &root)
            .record_hit(3.0);
        b.attach_sensitive_regions(ContextId(0), &root, &mut registry)
            .unwrap();
        // Re-attachment must not rebuild the instance or lose its state.
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .get(ContextId(0), &RegionTag::from(REGION_SCINT))
                .unwrap()
                .hits(),
            1
        );
    }

    #[test]
    fn attach_without_the_target_volume_is_fatal() {
        let b = builder();
        let bare = Volume::new(
            "world",
            Solid::Box {
                hx: 1.0,
                hy: 1.0,
                hz: 1.0,
            },
            [0.0; 3],
            "rock",
        );
        let mut registry = SensitiveRegionRegistry::new();
        let err = b
            .attach_sensitive_regions(ContextId(0), &bare, &mut registry)
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::MissingVolume {
                name: "xenon_target".into()
            }
        );
        assert!(registry.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn setters_never_corrupt_state(v in any::<f64>()) {
                let mut b = builder();
                let before = *b.cuts();
                let outcome = b.set_room_time_cut(v);
                if outcome.is_ok() {
                    prop_assert_eq!(b.cuts().room_time_cut, v);
                } else {
                    prop_assert_eq!(b.cuts(), &before);
                }
                // Whatever happened, the builder still constructs.
                prop_assert!(b.construct().is_ok());
            }
        }
    }
}
