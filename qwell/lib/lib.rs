//! Provides functions to compute the bound states of a particle in a
//! one-dimensional, symmetric finite square well and to sample their
//! wavefunctions for display.
//!
//! Energies are found as roots of the parity-specific transcendental matching
//! conditions via a pole-aware sign-change scan followed by bisection; each
//! state's wavefunction is matched continuously at the well edges and scaled
//! to unit peak magnitude.
//!
//! All quantities at the interface are in eV (energy) and Å (length); SI
//! conversions happen internally (see [`units`]).
//!
//! ```
//! use qwell::{ find_bound_state_energies, sample_wavefunction, solve::Parity };
//!
//! let states = find_bound_state_energies(0.3, 100.0);
//! assert_eq!(states.len(), 9);
//! assert_eq!(states[0].parity, Parity::Even);
//!
//! let ground = states[0];
//! let points
//!     = sample_wavefunction(ground.energy, ground.parity, 0.3, 100.0, -80.0, 80.0, 400);
//! assert_eq!(points.len(), 401);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod well;
pub mod solve;
pub mod sample;

pub mod docs;

/// Default number of uniform energy steps in the root scan.
pub const DEF_STEPS: usize = 500;
/// Default maximum number of bisection iterations per root.
pub const DEF_MAXITERS: usize = 60;
/// Default bisection tolerance on the matching function.
pub const DEF_EPSILON: f64 = 1e-12;
/// Default number of sampling intervals for a wavefunction.
pub const DEF_POINTS: usize = 400;

use crate::{
    sample::{ SamplePoint, Wavefunction },
    solve::{ BoundState, Parity },
    well::Well,
};

/// Find every bound state of a well of depth `depth` (eV) and width `width`
/// (Å), sorted by ascending energy.
///
/// Never fails: a well with non-positive (or non-finite) depth or width has
/// no bound states and gives an empty list.
pub fn find_bound_state_energies(depth: f64, width: f64) -> Vec<BoundState> {
    Well::new(depth, width)
        .map(|well| well.solve())
        .unwrap_or_default()
}

/// Sample the wavefunction of a bound state with energy `energy` (eV) and
/// parity `parity` on `n_points + 1` evenly spaced positions over
/// `[x_min, x_max]` (Å).
///
/// Returns an empty list if `n_points` is zero, if the well is invalid, or if
/// `energy` is not strictly between 0 and `depth`.
pub fn sample_wavefunction(
    energy: f64,
    parity: Parity,
    depth: f64,
    width: f64,
    x_min: f64,
    x_max: f64,
    n_points: usize,
) -> Vec<SamplePoint> {
    Well::new(depth, width)
        .map_err(error::SampleError::from)
        .and_then(|well| Wavefunction::new(well, energy, parity))
        .map(|wf| wf.sample(x_min, x_max, n_points))
        .unwrap_or_default()
}
