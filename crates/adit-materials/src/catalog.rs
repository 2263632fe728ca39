//! The immutable [`MaterialCatalog`].

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

use crate::material::{Material, MaterialState};

/// Errors from catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// No material is registered under the requested name.
    NotFound {
        /// The unregistered name.
        name: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "no material named '{name}' in the catalog"),
        }
    }
}

impl Error for CatalogError {}

/// The process-lifetime set of named materials.
///
/// Built once by [`MaterialCatalog::build`], never mutated afterwards.
/// Insertion order is preserved so diagnostics and dumps are stable.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    materials: IndexMap<String, Material>,
}

impl MaterialCatalog {
    /// Construct every material the underground apparatus references.
    ///
    /// The set mirrors the detector model: the rock overburden and lab
    /// shell, the shielding stack (lead, copper, steel), the xenon target
    /// in both phases, the quartz photomultiplier window, and vacuum for
    /// the PMT interior.
    pub fn build() -> Self {
        let mut materials = IndexMap::new();

        // Mass fractions rounded to the precision the transport engine
        // cares about; shared element symbols are reused across entries.
        let defs = [
            Material::new(
                "rock",
                2.65,
                MaterialState::Solid,
                &[("Si", 0.467), ("O", 0.533)],
            ),
            Material::new(
                "concrete",
                2.3,
                MaterialState::Solid,
                &[("Si", 0.227), ("O", 0.605), ("Ca", 0.135), ("H", 0.033)],
            ),
            Material::new(
                "air",
                1.29e-3,
                MaterialState::Gas,
                &[("N", 0.7), ("O", 0.3)],
            ),
            Material::new("steel", 7.87, MaterialState::Solid, &[("Fe", 1.0)]),
            Material::new("lead", 11.35, MaterialState::Solid, &[("Pb", 1.0)]),
            Material::new("copper", 8.96, MaterialState::Solid, &[("Cu", 1.0)]),
            Material::new("liquid_xenon", 3.02, MaterialState::Liquid, &[("Xe", 1.0)]),
            Material::new("gaseous_xenon", 5.9e-3, MaterialState::Gas, &[("Xe", 1.0)]),
            Material::new(
                "quartz",
                2.2,
                MaterialState::Solid,
                &[("Si", 0.467), ("O", 0.533)],
            ),
            Material::new("vacuum", 1e-25, MaterialState::Gas, &[("H", 1.0)]),
        ];

        for m in defs {
            materials.insert(m.name.clone(), m);
        }
        Self { materials }
    }

    /// Resolve a material by name.
    pub fn lookup(&self, name: &str) -> Result<&Material, CatalogError> {
        self.materials.get(name).ok_or_else(|| CatalogError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Whether a material is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty. Never true for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate the materials in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}
