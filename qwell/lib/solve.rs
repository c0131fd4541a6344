//! Functions to find the bound-state energies of a finite square well.
//!
//! Energies are the roots in `(0, V0)` of the two parity-specific matching
//! conditions obtained from continuity of `ψ` and `ψ′` at `x = L/2`,
//! ```text
//! even:  f(E) = ξ tan(ξ) - η
//! odd:   f(E) = η tan(ξ) + ξ
//!
//! ξ = k L/2,  k = √(2 m E) / ħ
//! η = κ L/2,  κ = √(2 m (V0 - E)) / ħ
//! ```
//! See [`docs`][crate::docs#matching-conditions] for details.
//!
//! Roots are located by scanning a uniform energy grid for sign changes and
//! refining each bracket by bisection. Both matching functions diverge
//! wherever `ξ` passes through an odd multiple of `π/2`; by default the
//! energies of these poles are inserted into the grid with their one-sided
//! limits so that no bracket ever spans one.
//!
//! ```
//! use qwell::{ solve::Parity, well::Well };
//!
//! let well = Well::new(1.0, 10.0).unwrap();
//! let states = well.solve();
//! assert_eq!(states.len(), 2);
//! assert_eq!(states[0].parity, Parity::Even);
//! assert_eq!(states[1].parity, Parity::Odd);
//! assert!(states.iter().all(|s| 0.0 < s.energy && s.energy < 1.0));
//! ```

use std::cmp;
use num_traits::Float;
use crate::{
    units,
    well::Well,
    DEF_EPSILON,
    DEF_MAXITERS,
    DEF_STEPS,
};

/// Symmetry of a state under `x → -x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// `ψ(-x) = ψ(x)`; cosine inside the well.
    Even,
    /// `ψ(-x) = -ψ(x)`; sine inside the well.
    Odd,
}

impl Parity {
    /// Return `true` if `self` is `Even`.
    pub fn is_even(self) -> bool { matches!(self, Self::Even) }

    /// Return `true` if `self` is `Odd`.
    pub fn is_odd(self) -> bool { matches!(self, Self::Odd) }

    /// Evaluate the interior trial function, `cos(θ)` for even states and
    /// `sin(θ)` for odd ones.
    pub fn trial<A: Float>(self, theta: A) -> A {
        match self {
            Self::Even => theta.cos(),
            Self::Odd => theta.sin(),
        }
    }

    // sign of the matching function in the limit E → 0⁺:
    // even → -z0, odd → ξ (1 + η/ξ tan ξ) > 0
    fn origin_positive(self) -> bool { self.is_odd() }
}

/// Outcome of the bisection that produced a [`BoundState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The residual fell below tolerance, or the bracket shrank to the
    /// resolution of `f64`.
    Converged,
    /// The iteration limit was reached first; the energy is the best midpoint
    /// found and should be treated with suspicion.
    MaxIters,
}

/// A single bound state of the well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundState {
    /// Energy (eV), strictly between 0 and the well depth.
    pub energy: f64,
    /// Parity.
    pub parity: Parity,
    /// Value of the matching function at `energy`.
    pub residual: f64,
    /// Convergence status.
    pub status: Status,
}

impl BoundState {
    /// Compare two `BoundState`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.energy.partial_cmp(&other.energy)
    }

    /// Return `true` if the bisection converged.
    pub fn is_converged(&self) -> bool { matches!(self.status, Status::Converged) }
}

/// Parameters for [`solve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Number of uniform steps dividing `[0, V0]` (default: `500`).
    pub steps: usize,
    /// Maximum number of bisection iterations per bracket (default: `60`).
    pub maxiters: usize,
    /// Bisection stops early when `|f(E)|` is below this (default: `1e-12`).
    pub epsilon: f64,
    /// Insert tangent poles into the scan grid (default: `true`).
    ///
    /// Turning this off reproduces a plain sign-change scan, which reports a
    /// spurious root at every step that straddles a pole and can miss a root
    /// sharing a step with one.
    pub split_poles: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            steps: DEF_STEPS,
            maxiters: DEF_MAXITERS,
            epsilon: DEF_EPSILON,
            split_poles: true,
        }
    }
}

impl Params {
    /// Set the number of scan steps.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the maximum number of bisection iterations.
    pub fn with_maxiters(mut self, maxiters: usize) -> Self {
        self.maxiters = maxiters;
        self
    }

    /// Set the bisection residual tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enable or disable pole splitting.
    pub fn with_split_poles(mut self, split_poles: bool) -> Self {
        self.split_poles = split_poles;
        self
    }
}

/// Evaluate the matching function for dimensionless `ξ = k L/2` and
/// `η = κ L/2`.
pub fn matching(parity: Parity, xi: f64, eta: f64) -> f64 {
    let tan_xi = xi.tan();
    match parity {
        Parity::Even => xi * tan_xi - eta,
        Parity::Odd => eta * tan_xi + xi,
    }
}

/// Evaluate the matching function of a well at energy `energy` (eV).
pub fn matching_at(well: &Well, parity: Parity, energy: f64) -> f64 {
    let half = well.half_width_m();
    let xi = units::wavenumber(energy) * half;
    let eta = units::wavenumber(well.depth() - energy) * half;
    matching(parity, xi, eta)
}

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    // true if the midpoint can no longer be separated from either end
    fn is_exhausted(self) -> bool {
        let mid = self.midpoint();
        mid <= self.0 || mid >= self.1
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from(xx: (T, T)) -> Self { Self(xx.0, xx.1) }
}

// a point on the scan grid, with the signs of the matching function
// immediately below and above it
#[derive(Copy, Clone, Debug)]
struct Knot {
    e: f64,
    below: bool,
    above: bool,
    pole: bool,
}

impl Knot {
    fn sampled(e: f64, f: f64) -> Self {
        Self { e, below: f > 0.0, above: f > 0.0, pole: false }
    }

    fn origin(parity: Parity) -> Self {
        let positive = parity.origin_positive();
        Self { e: 0.0, below: positive, above: positive, pole: false }
    }

    // both matching functions go to +∞ from below a pole and come back from
    // -∞ above it
    fn pole(e: f64) -> Self {
        Self { e, below: true, above: false, pole: true }
    }
}

fn knots(well: &Well, parity: Parity, params: &Params) -> Vec<Knot> {
    let steps = params.steps.max(1);
    let de = well.depth() / steps as f64;
    let mut knots: Vec<Knot>
        = (0..=steps)
        .map(|i| {
            if i == 0 { return Knot::origin(parity); }
            let e = if i == steps { well.depth() } else { de * i as f64 };
            Knot::sampled(e, matching_at(well, parity, e))
        })
        .collect();
    if params.split_poles {
        knots.extend(well.pole_energies().into_iter().map(Knot::pole));
        knots.sort_by(|l, r| l.e.total_cmp(&r.e));
        // a pole landing exactly on a grid point replaces it
        knots.dedup_by(|later, earlier| {
            if later.e != earlier.e { return false; }
            if later.pole { *earlier = *later; }
            true
        });
    }
    knots
}

/// An energy interval (eV) over which a matching function changes sign.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bracket {
    /// Lower energy.
    pub lo: f64,
    /// Upper energy.
    pub hi: f64,
    /// Sign of the matching function just above `lo`.
    pub lo_positive: bool,
}

/// Scan `[0, V0]` for sign changes of one matching function, returning the
/// brackets in ascending order.
pub fn scan(well: &Well, parity: Parity, params: &Params) -> Vec<Bracket> {
    knots(well, parity, params)
        .windows(2)
        .filter(|w| w[0].above != w[1].below)
        .map(|w| Bracket { lo: w[0].e, hi: w[1].e, lo_positive: w[0].above })
        .collect()
}

/// Refine a bracket to a bound-state energy by bisection.
///
/// Iteration stops when `|f| < params.epsilon`, when the bracket can no
/// longer be halved in double precision, or after `params.maxiters`
/// iterations; in the last case the midpoint is returned anyway with
/// [`Status::MaxIters`].
pub fn bisect(well: &Well, parity: Parity, bracket: Bracket, params: &Params)
    -> BoundState
{
    let mut eb: Bounds<f64> = (bracket.lo, bracket.hi).into();
    let state = |energy: f64, residual: f64, status: Status| {
        BoundState { energy, parity, residual, status }
    };
    for _ in 0..params.maxiters {
        let e = eb.midpoint();
        let f = matching_at(well, parity, e);
        if f.abs() < params.epsilon || eb.is_exhausted() {
            return state(e, f, Status::Converged);
        }
        if (f > 0.0) == bracket.lo_positive { eb.0 = e; } else { eb.1 = e; }
    }
    let e = eb.midpoint();
    let f = matching_at(well, parity, e);
    println!(
        "solve::bisect: WARNING: {:?} state near {:.6e} eV reached maxiters \
        with residual {:.3e}",
        parity, e, f,
    );
    state(e, f, Status::MaxIters)
}

/// Find all bound states of a well, sorted by ascending energy.
pub fn solve(well: &Well, params: &Params) -> Vec<BoundState> {
    let mut states: Vec<BoundState>
        = [Parity::Even, Parity::Odd].into_iter()
        .flat_map(move |parity| {
            scan(well, parity, params).into_iter()
                .map(move |bracket| bisect(well, parity, bracket, params))
        })
        .filter(|state| state.energy > 0.0 && state.energy < well.depth())
        .collect();
    states.sort_by(|l, r| l.energy.total_cmp(&r.energy));
    states
}
