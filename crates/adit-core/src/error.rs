//! Error types for the Adit apparatus framework.
//!
//! Three-tier taxonomy, organized by severity: [`GeometryError`] is fatal
//! (no usable apparatus, nothing downstream can run), [`ValidationError`]
//! is a recoverable operator-visible rejection (the command becomes a
//! no-op), and [`DispatchError`] covers host-side gating of the command
//! surface (unknown path, wrong simulation state).

use std::error::Error;
use std::fmt;

/// Fatal errors from geometry construction.
///
/// A valid volume tree is a precondition for everything downstream, so
/// these are never caught locally; they propagate to the process level
/// and no partial geometry is published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A volume references a material the catalog does not hold.
    MissingMaterial {
        /// The volume whose material lookup failed.
        volume: String,
        /// The unregistered material name.
        material: String,
    },
    /// Two sibling volumes occupy overlapping space.
    OverlappingSiblings {
        /// First sibling.
        first: String,
        /// Second sibling.
        second: String,
    },
    /// A child volume extends outside its parent's bounds.
    ChildOutsideParent {
        /// The escaping child.
        child: String,
        /// Its parent.
        parent: String,
    },
    /// Two volumes in the tree share a name.
    DuplicateVolume {
        /// The repeated name.
        name: String,
    },
    /// A designated volume is absent from the tree.
    MissingVolume {
        /// The name that could not be found.
        name: String,
    },
    /// A solid was declared with non-positive or inverted dimensions.
    DegenerateSolid {
        /// The offending volume.
        volume: String,
        /// Description of the dimension problem.
        reason: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMaterial { volume, material } => {
                write!(f, "volume '{volume}' references unknown material '{material}'")
            }
            Self::OverlappingSiblings { first, second } => {
                write!(f, "sibling volumes '{first}' and '{second}' overlap")
            }
            Self::ChildOutsideParent { child, parent } => {
                write!(f, "volume '{child}' extends outside its parent '{parent}'")
            }
            Self::DuplicateVolume { name } => {
                write!(f, "duplicate volume name '{name}'")
            }
            Self::MissingVolume { name } => {
                write!(f, "no volume named '{name}' in the tree")
            }
            Self::DegenerateSolid { volume, reason } => {
                write!(f, "volume '{volume}' has a degenerate solid: {reason}")
            }
        }
    }
}

impl Error for GeometryError {}

/// Recoverable, operator-visible rejection of a command argument.
///
/// The previously held parameter value is left unchanged and the command
/// is a no-op; the `Display` text is the diagnostic shown to the operator.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A cut setter was given a negative value.
    NegativeCut {
        /// Which parameter was being set.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A cut setter was given NaN or an infinity.
    NonFiniteCut {
        /// Which parameter was being set.
        parameter: &'static str,
    },
    /// A command argument could not be parsed as the expected type.
    Malformed {
        /// The token that failed to parse.
        token: String,
    },
    /// The seed command parsed fewer than two integers.
    TooFewSeeds {
        /// How many integers were parsed.
        count: usize,
    },
    /// The seed command parsed more integers than the stream capacity.
    TooManySeeds {
        /// How many integers were supplied.
        count: usize,
        /// The maximum accepted.
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCut { parameter, value } => {
                write!(f, "{parameter} must be non-negative, got {value}")
            }
            Self::NonFiniteCut { parameter } => {
                write!(f, "{parameter} must be finite")
            }
            Self::Malformed { token } => {
                write!(f, "could not parse '{token}' as a number")
            }
            Self::TooFewSeeds { count } => {
                write!(
                    f,
                    "seed stream needs at least two integers, got {count}; command ignored"
                )
            }
            Self::TooManySeeds { count, max } => {
                write!(f, "seed stream holds at most {max} integers, got {count}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Errors from the command dispatcher.
///
/// Models the hosting framework's gating contract: commands are refused
/// before they reach the apparatus when the path is unknown or the
/// simulation is in a state the command is not registered for.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchError {
    /// No command is registered under the given path.
    UnknownCommand {
        /// The unrecognized path.
        path: String,
    },
    /// The command exists but is unavailable in the current state.
    UnavailableInState {
        /// The command path.
        path: String,
        /// The state the simulation was in.
        state: crate::SimState,
    },
    /// The command's argument failed validation.
    Invalid(ValidationError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { path } => write!(f, "unknown command '{path}'"),
            Self::UnavailableInState { path, state } => {
                write!(f, "command '{path}' is not available while {state}")
            }
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for DispatchError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_parameter() {
        let e = ValidationError::NegativeCut {
            parameter: "time cut",
            value: -2.0,
        };
        assert_eq!(e.to_string(), "time cut must be non-negative, got -2");
    }

    #[test]
    fn dispatch_error_exposes_validation_source() {
        let e = DispatchError::from(ValidationError::TooFewSeeds { count: 1 });
        assert!(Error::source(&e).is_some());
    }
}
