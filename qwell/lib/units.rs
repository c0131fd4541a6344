#![allow(non_upper_case_globals)]

//! Physical constants and conversions between the interface units (eV, Å) and
//! SI.
//!
//! Everything outside this module speaks eV and Å; wavenumbers are the only
//! SI-valued quantities that leave it, and only to be multiplied against
//! lengths converted here.
//!
//! Concrete physical constants are taken from NIST.

use std::{ f64::consts::PI, ops::Mul };

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C); numerically also joules per electronvolt
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// meters per ångström
pub const ANGSTROM: f64 = 1e-10;

/// 2 m / ħ² for the electron (J^-1 m^-2)
pub const TWO_M_OVER_HBAR2: f64 = 2.0 * me / (hbar * hbar);

/// Convert a length in ångströms to meters.
pub fn ang_to_m<T, U>(x: T) -> U
where T: Mul<f64, Output = U>
{
    x * ANGSTROM
}

/// Convert a length in meters to ångströms.
pub fn m_to_ang<T, U>(x: T) -> U
where T: Mul<f64, Output = U>
{
    x * ANGSTROM.recip()
}

/// Convert an energy in electronvolts to joules.
pub fn ev_to_j<T, U>(x: T) -> U
where T: Mul<f64, Output = U>
{
    x * e
}

/// Convert an energy in joules to electronvolts.
pub fn j_to_ev<T, U>(x: T) -> U
where T: Mul<f64, Output = U>
{
    x * e.recip()
}

/// Free-particle wavenumber (m^-1) for a kinetic energy given in eV.
///
/// This is `k` inside the well for energy `E` and the decay constant `κ`
/// outside it for energy `V0 - E`. Negative energies are clamped to zero.
pub fn wavenumber(energy_ev: f64) -> f64 {
    (TWO_M_OVER_HBAR2 * ev_to_j::<f64, f64>(energy_ev.max(0.0))).sqrt()
}

/// Inverse of [`wavenumber`]: the kinetic energy (eV) of a wavenumber (m^-1).
pub fn energy_from_wavenumber(k: f64) -> f64 {
    j_to_ev(k.powi(2) / TWO_M_OVER_HBAR2)
}
