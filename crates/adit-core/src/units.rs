//! Physical unit constants.
//!
//! Internal unit system: millimetre, nanosecond, MeV. All stored quantities
//! are plain `f64` in these base units; the constants here exist so call
//! sites can write `250.0 * units::EV` instead of a bare magic number.

/// Millimetre (base length unit).
pub const MM: f64 = 1.0;
/// Centimetre.
pub const CM: f64 = 10.0 * MM;
/// Metre.
pub const M: f64 = 1000.0 * MM;

/// Nanosecond (base time unit).
pub const NS: f64 = 1.0;
/// Microsecond.
pub const US: f64 = 1e3 * NS;
/// Millisecond.
pub const MS: f64 = 1e6 * NS;

/// Mega-electronvolt (base energy unit).
pub const MEV: f64 = 1.0;
/// Kilo-electronvolt.
pub const KEV: f64 = 1e-3 * MEV;
/// Electronvolt.
pub const EV: f64 = 1e-6 * MEV;
/// Giga-electronvolt.
pub const GEV: f64 = 1e3 * MEV;

/// Gram per cubic centimetre, the conventional density unit for materials.
pub const G_PER_CM3: f64 = 1.0;
