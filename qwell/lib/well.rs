//! The symmetric finite square well.
//!
//! ```text
//!          V0 ───────┐         ┌─────── V0
//!                    │         │
//!                    │         │
//!           0        └─────────┘
//!                 -L/2    0    L/2
//! ```
//!
//! Depths are given in eV and widths in Å.

use std::f64::consts::PI;
use crate::{
    error::WellError,
    sample::{ SamplePoint, Wavefunction },
    solve::{ self, BoundState, Params },
    units,
};

pub type WResult<T> = Result<T, WellError>;

/// Potential energy (eV) at position `x` (Å) for a well of the given depth
/// (eV) and width (Å).
///
/// The well edges at `±width / 2` belong to the inside of the well.
pub fn potential_at(x: f64, depth: f64, width: f64) -> f64 {
    if x.abs() <= width / 2.0 { 0.0 } else { depth }
}

/// A finite square well, `V(x) = 0` for `|x| ≤ width / 2` and `depth`
/// otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    depth: f64,
    width: f64,
}

impl Well {
    /// Create a new `Well`, checking that both the depth and the width are
    /// finite and positive.
    pub fn new(depth: f64, width: f64) -> WResult<Self> {
        WellError::check_depth(depth)?;
        WellError::check_width(width)?;
        Ok(Self { depth, width })
    }

    /// Get the well depth (eV).
    pub fn depth(&self) -> f64 { self.depth }

    /// Get the well width (Å).
    pub fn width(&self) -> f64 { self.width }

    /// Get half the well width (Å).
    pub fn half_width(&self) -> f64 { self.width / 2.0 }

    /// Get half the well width in meters.
    pub(crate) fn half_width_m(&self) -> f64 {
        units::ang_to_m(self.half_width())
    }

    /// Potential energy (eV) at `x` (Å).
    pub fn potential(&self, x: f64) -> f64 {
        potential_at(x, self.depth, self.width)
    }

    /// Return the dimensionless well strength `z0 = (L/2) √(2 m V0) / ħ`.
    ///
    /// This is the radius of the circle `ξ² + η² = z0²` on which all bound
    /// states lie.
    pub fn strength(&self) -> f64 {
        units::wavenumber(self.depth) * self.half_width_m()
    }

    /// Return the number of bound states the well supports, `⌈2 z0 / π⌉`.
    ///
    /// This is always at least 1.
    pub fn expected_count(&self) -> usize {
        ((2.0 * self.strength() / PI).ceil() as usize).max(1)
    }

    /// Return the (ascending) energies below the well depth at which `ξ`
    /// passes through an odd multiple of `π/2`, where `tan(ξ)` diverges and
    /// the matching functions are discontinuous.
    pub fn pole_energies(&self) -> Vec<f64> {
        let half = self.half_width_m();
        (0..)
            .map(|n| units::energy_from_wavenumber((n as f64 + 0.5) * PI / half))
            .take_while(|&ep| ep < self.depth)
            .collect()
    }

    /// Find all bound states with default solver [parameters][Params].
    pub fn solve(&self) -> Vec<BoundState> {
        solve::solve(self, &Params::default())
    }

    /// Find all bound states with custom solver parameters.
    pub fn solve_with(&self, params: &Params) -> Vec<BoundState> {
        solve::solve(self, params)
    }

    /// Build the wavefunction for a found state.
    pub fn wavefunction(&self, state: &BoundState) -> Wavefunction {
        Wavefunction::from_state(self, state)
    }

    /// Sample the wavefunction of a found state on `n + 1` evenly spaced
    /// points over `[x_min, x_max]` (Å).
    pub fn sample(&self, state: &BoundState, x_min: f64, x_max: f64, n: usize)
        -> Vec<SamplePoint>
    {
        self.wavefunction(state).sample(x_min, x_max, n)
    }
}
