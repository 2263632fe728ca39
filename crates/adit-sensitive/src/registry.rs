//! The per-context region cache.

use indexmap::IndexMap;

use adit_core::{ContextId, RegionTag};
use adit_geometry::Volume;

use crate::region::SensitiveRegion;

/// Cache of sensitive-region instances, keyed by `(context, tag)`.
///
/// Replaces ambient thread-local caching with an explicit context key:
/// callers state which execution context they are, and the registry
/// guarantees that no two contexts ever observe the same instance. Entry
/// lifetime is the registry's responsibility — a context's instances live
/// until [`release_context`](Self::release_context), not until the volume
/// tree goes away.
#[derive(Debug, Default)]
pub struct SensitiveRegionRegistry {
    regions: IndexMap<(ContextId, RegionTag), SensitiveRegion>,
}

impl SensitiveRegionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the context's instance for `tag`, creating and binding it to
    /// `target` on first access.
    ///
    /// Repeated calls from the same context return the cached instance,
    /// accumulated state intact; the `target` of later calls is ignored.
    /// Calls from a different context always create a fresh instance.
    pub fn get_or_create(
        &mut self,
        context: ContextId,
        tag: RegionTag,
        target: &Volume,
    ) -> &mut SensitiveRegion {
        self.regions
            .entry((context, tag.clone()))
            .or_insert_with(|| SensitiveRegion::new(tag, &target.name))
    }

    /// The context's instance for `tag`, if it already exists.
    pub fn get(&self, context: ContextId, tag: &RegionTag) -> Option<&SensitiveRegion> {
        self.regions.get(&(context, tag.clone()))
    }

    /// Drop every instance owned by `context`.
    ///
    /// Called when the worker context terminates. Other contexts'
    /// instances are untouched.
    pub fn release_context(&mut self, context: ContextId) {
        self.regions.retain(|(ctx, _), _| *ctx != context);
    }

    /// Number of live instances across all contexts.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no instances are live.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of live instances owned by one context.
    pub fn context_len(&self, context: ContextId) -> usize {
        self.regions.keys().filter(|(ctx, _)| *ctx == context).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adit_geometry::Solid;

    fn target() -> Volume {
        Volume::new(
            "xenon_target",
            Solid::Cylinder {
                rmin: 0.0,
                rmax: 100.0,
                hz: 150.0,
            },
            [0.0; 3],
            "liquid_xenon",
        )
    }

    #[test]
    fn same_context_gets_the_cached_instance() {
        let mut reg = SensitiveRegionRegistry::new();
        let vol = target();
        reg.get_or_create(ContextId(0), "scint".into(), &vol)
            .record_hit(1.0);
        let again = reg.get_or_create(ContextId(0), "scint".into(), &vol);
        assert_eq!(again.hits(), 1);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn distinct_contexts_get_distinct_instances() {
        let mut reg = SensitiveRegionRegistry::new();
        let vol = target();
        reg.get_or_create(ContextId(0), "scint".into(), &vol)
            .record_hit(5.0);
        let other = reg.get_or_create(ContextId(1), "scint".into(), &vol);
        assert_eq!(other.hits(), 0);
        // Mutating one never shows up in the other.
        other.record_hit(2.0);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(ContextId(0), &"scint".into()).unwrap().hits(), 1);
    }

    #[test]
    fn release_drops_only_that_context() {
        let mut reg = SensitiveRegionRegistry::new();
        let vol = target();
        reg.get_or_create(ContextId(0), "scint".into(), &vol);
        reg.get_or_create(ContextId(0), "pmt".into(), &vol);
        reg.get_or_create(ContextId(1), "scint".into(), &vol);
        reg.release_context(ContextId(0));
        assert_eq!(reg.context_len(ContextId(0)), 0);
        assert_eq!(reg.context_len(ContextId(1)), 1);
        assert_eq!(reg.len(), 1);
    }

    // ── proptest ───────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Create(u32, u8),
            Hit(u32, u8),
            Release(u32),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u32..4, 0u8..3).prop_map(|(c, t)| Op::Create(c, t)),
                (0u32..4, 0u8..3).prop_map(|(c, t)| Op::Hit(c, t)),
                (0u32..4).prop_map(Op::Release),
            ]
        }

        fn tag(t: u8) -> RegionTag {
            RegionTag::from(format!("region{t}"))
        }

        proptest! {
            #[test]
            fn contexts_never_share_state(ops in prop::collection::vec(arb_op(), 0..64)) {
                let mut reg = SensitiveRegionRegistry::new();
                let vol = target();
                // Shadow model: expected hit counts per (context, tag).
                let mut model: std::collections::BTreeMap<(u32, u8), u64> =
                    std::collections::BTreeMap::new();

                for op in ops {
                    match op {
                        Op::Create(c, t) => {
                            reg.get_or_create(ContextId(c), tag(t), &vol);
                            model.entry((c, t)).or_insert(0);
                        }
                        Op::Hit(c, t) => {
                            reg.get_or_create(ContextId(c), tag(t), &vol).record_hit(1.0);
                            *model.entry((c, t)).or_insert(0) += 1;
                        }
                        Op::Release(c) => {
                            reg.release_context(ContextId(c));
                            model.retain(|(ctx, _), _| *ctx != c);
                        }
                    }
                }

                prop_assert_eq!(reg.len(), model.len());
                for ((c, t), hits) in &model {
                    let region = reg.get(ContextId(*c), &tag(*t)).unwrap();
                    prop_assert_eq!(region.hits(), *hits);
                }
            }
        }
    }

    #[test]
    fn later_target_is_ignored_for_cached_entries() {
        let mut reg = SensitiveRegionRegistry::new();
        let vol = target();
        let other_vol = Volume::new("elsewhere", vol.solid, [0.0; 3], "air");
        reg.get_or_create(ContextId(0), "scint".into(), &vol);
        let cached = reg.get_or_create(ContextId(0), "scint".into(), &other_vol);
        assert_eq!(cached.volume(), "xenon_target");
    }
}
