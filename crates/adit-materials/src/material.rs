//! The [`Material`] record.

use std::fmt;

/// Aggregation state of a material, relevant to step limits and optics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialState {
    /// Solid at operating conditions.
    Solid,
    /// Liquid at operating conditions (e.g. the xenon target).
    Liquid,
    /// Gas at operating conditions.
    Gas,
}

impl fmt::Display for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Liquid => write!(f, "liquid"),
            Self::Gas => write!(f, "gas"),
        }
    }
}

/// One named material, immutable once built.
///
/// Owned exclusively by the catalog; volumes hold the name, not the record.
/// Composition is a list of `(element symbol, mass fraction)` pairs; the
/// fractions of a well-formed material sum to 1 within float tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Unique catalog key.
    pub name: String,
    /// Density in g/cm³.
    pub density: f64,
    /// Aggregation state.
    pub state: MaterialState,
    /// Element symbols with their mass fractions.
    pub composition: Vec<(String, f64)>,
}

impl Material {
    /// Build a material record.
    pub fn new(
        name: &str,
        density: f64,
        state: MaterialState,
        composition: &[(&str, f64)],
    ) -> Self {
        Self {
            name: name.to_owned(),
            density,
            state,
            composition: composition
                .iter()
                .map(|(sym, frac)| ((*sym).to_owned(), *frac))
                .collect(),
        }
    }

    /// Sum of the composition mass fractions.
    pub fn total_fraction(&self) -> f64 {
        self.composition.iter().map(|(_, f)| f).sum()
    }
}
