//! Command values, simulation states, and the seed stream.

use smallvec::SmallVec;
use std::fmt;

use crate::error::ValidationError;

/// Maximum number of integers accepted by one seed-set command.
///
/// Streams longer than this are rejected outright rather than truncated;
/// a silently shortened seed stream would change the engine's trajectory
/// without telling the operator.
pub const MAX_SEED_COUNT: usize = 100;

/// A named operation plus its single string argument.
///
/// Stateless request value: commands are parsed, applied or rejected, and
/// discarded. Nothing here is persisted.
///
/// # Examples
///
/// ```
/// use adit_core::Command;
///
/// let cmd = Command::new("/seed/setSeeds", "12345 67890");
/// assert_eq!(cmd.path, "/seed/setSeeds");
/// assert_eq!(cmd.arg, "12345 67890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// Slash-separated command path, e.g. `/detector/setTimeCut`.
    pub path: String,
    /// The raw argument text following the path.
    pub arg: String,
}

impl Command {
    /// Build a command from path and argument text.
    pub fn new(path: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            arg: arg.into(),
        }
    }
}

/// The host simulation's lifecycle state, as seen by the dispatcher.
///
/// Configuration commands are only valid while no transport is running;
/// the dispatcher gates on this before any command reaches the apparatus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimState {
    /// Before the apparatus has been initialized.
    PreInit,
    /// Initialized and waiting between runs.
    Idle,
    /// Geometry closed and optimized, still not transporting.
    GeomClosed,
    /// Transport in progress. All configuration commands are refused.
    Running,
}

impl SimState {
    /// Whether configuration commands may be accepted in this state.
    pub fn accepts_config(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreInit => write!(f, "pre-initialization"),
            Self::Idle => write!(f, "idle"),
            Self::GeomClosed => write!(f, "geometry-closed"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// A validated, sentinel-terminated seed stream.
///
/// Transient: exists only between parsing a seed-set command and handing
/// the integers to the random engine. The final element is always the
/// sentinel `0`; the payload is everything before it.
///
/// # Examples
///
/// ```
/// use adit_core::SeedStream;
///
/// let stream = SeedStream::from_integers(vec![12345, 67890]).unwrap();
/// assert_eq!(stream.as_slice(), &[12345, 67890, 0]);
/// assert_eq!(stream.payload(), &[12345, 67890]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedStream {
    seeds: SmallVec<[i64; 16]>,
}

impl SeedStream {
    /// Validate a parsed integer sequence and append the sentinel.
    ///
    /// Fewer than two integers is a [`ValidationError::TooFewSeeds`];
    /// more than [`MAX_SEED_COUNT`] is a [`ValidationError::TooManySeeds`].
    pub fn from_integers(seeds: impl IntoIterator<Item = i64>) -> Result<Self, ValidationError> {
        let mut buf: SmallVec<[i64; 16]> = seeds.into_iter().collect();
        if buf.len() < 2 {
            return Err(ValidationError::TooFewSeeds { count: buf.len() });
        }
        if buf.len() > MAX_SEED_COUNT {
            return Err(ValidationError::TooManySeeds {
                count: buf.len(),
                max: MAX_SEED_COUNT,
            });
        }
        buf.push(0);
        Ok(Self { seeds: buf })
    }

    /// The full stream including the trailing sentinel `0`.
    pub fn as_slice(&self) -> &[i64] {
        &self.seeds
    }

    /// The parsed integers without the sentinel.
    pub fn payload(&self) -> &[i64] {
        &self.seeds[..self.seeds.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_integers_gain_a_sentinel() {
        let s = SeedStream::from_integers([12345, 67890]).unwrap();
        assert_eq!(s.as_slice(), &[12345, 67890, 0]);
    }

    #[test]
    fn one_integer_is_rejected() {
        let err = SeedStream::from_integers([42]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewSeeds { count: 1 });
    }

    #[test]
    fn empty_is_rejected_like_one() {
        let err = SeedStream::from_integers([]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewSeeds { count: 0 });
    }

    #[test]
    fn capacity_boundary() {
        let at_max: Vec<i64> = (0..MAX_SEED_COUNT as i64).collect();
        let s = SeedStream::from_integers(at_max).unwrap();
        assert_eq!(s.as_slice().len(), MAX_SEED_COUNT + 1);
        assert_eq!(*s.as_slice().last().unwrap(), 0);

        let over: Vec<i64> = (0..=MAX_SEED_COUNT as i64).collect();
        let err = SeedStream::from_integers(over).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManySeeds {
                count: MAX_SEED_COUNT + 1,
                max: MAX_SEED_COUNT,
            }
        );
    }

    #[test]
    fn running_refuses_config() {
        assert!(!SimState::Running.accepts_config());
        assert!(SimState::PreInit.accepts_config());
        assert!(SimState::Idle.accepts_config());
        assert!(SimState::GeomClosed.accepts_config());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sentinel_is_always_last(seeds in prop::collection::vec(any::<i64>(), 2..=100)) {
                let n = seeds.len();
                let s = SeedStream::from_integers(seeds.clone()).unwrap();
                prop_assert_eq!(s.as_slice().len(), n + 1);
                prop_assert_eq!(*s.as_slice().last().unwrap(), 0);
                prop_assert_eq!(s.payload(), &seeds[..]);
            }
        }
    }
}
