//! Continuity-matched wavefunctions of found bound states, sampled for
//! display.
//!
//! Inside the well the wavefunction is `A cos(kx)` (even) or `A sin(kx)`
//! (odd); outside it is `B exp(-κ(|x| - L/2))`, with the sign of the left tail
//! flipped for odd states. Writing the tail relative to the well edge puts its
//! boundary value at exactly 1, so `B` is simply the interior trial function
//! at `L/2` and nothing underflows for deep or wide wells.
//!
//! The pair `(A, B)` is scaled so that the largest magnitude reached anywhere
//! is 1. This is a display normalization, not the `L²` one.
//!
//! ```
//! use qwell::well::Well;
//!
//! let well = Well::new(0.3, 100.0).unwrap();
//! let ground = well.solve()[0];
//! let points = well.sample(&ground, -80.0, 80.0, 400);
//! assert_eq!(points.len(), 401);
//! assert!(points.iter().all(|p| p.psi.abs() <= 1.0 + 1e-12));
//! ```

use std::f64::consts::FRAC_PI_2;
use ndarray as nd;
use crate::{
    error::SampleError,
    solve::{ BoundState, Parity },
    units,
    well::Well,
};

pub type SResult<T> = Result<T, SampleError>;

/// Scale factors for the interior trial function and the exterior decaying
/// exponential.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Amplitudes {
    /// Interior amplitude `A`.
    pub inside: f64,
    /// Exterior amplitude `B`.
    pub outside: f64,
}

impl Amplitudes {
    /// Compute amplitudes for a state of parity `parity` whose interior phase
    /// at the well edge is `xi = k L/2`.
    pub fn new(parity: Parity, xi: f64) -> Self {
        let outside = parity.trial(xi);
        // the sine reaches its extremum inside the well once ξ ≥ π/2
        let peak_inside
            = match parity {
                Parity::Even => 1.0,
                Parity::Odd if xi >= FRAC_PI_2 => 1.0,
                Parity::Odd => xi.sin().abs(),
            };
        let scale = peak_inside.max(outside.abs());
        if scale > 0.0 {
            Self { inside: scale.recip(), outside: outside / scale }
        } else {
            Self { inside: 1.0, outside }
        }
    }
}

/// A single point of a sampled wavefunction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplePoint {
    /// Position (Å).
    pub x: f64,
    /// Wavefunction value (display-normalized).
    pub psi: f64,
    /// Potential energy (eV).
    pub potential: f64,
}

// n + 1 evenly spaced points over [x_min, x_max], or none for n = 0
fn grid(x_min: f64, x_max: f64, n: usize) -> impl Iterator<Item = f64> {
    let count = if n == 0 { 0 } else { n + 1 };
    (0..count)
        .map(move |i| {
            if i == n {
                x_max
            } else {
                x_min + (x_max - x_min) * (i as f64 / n as f64)
            }
        })
}

/// The wavefunction of one bound state.
///
/// Wavenumbers and amplitudes are computed once on construction; evaluation
/// at any number of positions is then cheap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wavefunction {
    well: Well,
    energy: f64,
    parity: Parity,
    // interior wavenumber (m^-1)
    k: f64,
    // exterior decay constant (m^-1)
    kappa: f64,
    amps: Amplitudes,
}

impl Wavefunction {
    /// Create a new `Wavefunction` for a state of energy `energy` (eV),
    /// checking that the energy lies strictly inside `(0, depth)`.
    ///
    /// The energy is not checked against the matching conditions; any other
    /// value in range gives a function that is continuous but not smooth at
    /// the well edges.
    pub fn new(well: Well, energy: f64, parity: Parity) -> SResult<Self> {
        SampleError::check_energy(energy, well.depth())?;
        Ok(Self::build(well, energy, parity))
    }

    /// Create a new `Wavefunction` for a state returned by the solver.
    pub fn from_state(well: &Well, state: &BoundState) -> Self {
        Self::build(*well, state.energy, state.parity)
    }

    fn build(well: Well, energy: f64, parity: Parity) -> Self {
        let k = units::wavenumber(energy);
        let kappa = units::wavenumber(well.depth() - energy);
        let amps = Amplitudes::new(parity, k * well.half_width_m());
        Self { well, energy, parity, k, kappa, amps }
    }

    /// Get the well.
    pub fn well(&self) -> &Well { &self.well }

    /// Get the energy (eV).
    pub fn energy(&self) -> f64 { self.energy }

    /// Get the parity.
    pub fn parity(&self) -> Parity { self.parity }

    /// Get the amplitude coefficients.
    pub fn amplitudes(&self) -> Amplitudes { self.amps }

    /// Evaluate the wavefunction at `x` (Å).
    pub fn psi(&self, x: f64) -> f64 {
        let half = self.well.half_width();
        if x.abs() <= half {
            self.amps.inside * self.parity.trial(self.k * units::ang_to_m::<f64, f64>(x))
        } else {
            let beyond: f64 = units::ang_to_m(x.abs() - half);
            let tail = self.amps.outside * (-self.kappa * beyond).exp();
            if self.parity.is_odd() && x < 0.0 { -tail } else { tail }
        }
    }

    /// Potential energy (eV) at `x` (Å).
    pub fn potential(&self, x: f64) -> f64 { self.well.potential(x) }

    /// Evaluate everything at `x` (Å).
    pub fn point(&self, x: f64) -> SamplePoint {
        SamplePoint { x, psi: self.psi(x), potential: self.potential(x) }
    }

    /// Sample on `n + 1` evenly spaced points over `[x_min, x_max]` (Å),
    /// endpoints included.
    ///
    /// `n = 0` gives an empty sequence.
    pub fn sample(&self, x_min: f64, x_max: f64, n: usize) -> Vec<SamplePoint> {
        grid(x_min, x_max, n).map(|x| self.point(x)).collect()
    }

    /// Like [`Self::sample`], but return separate coordinate, wavefunction,
    /// and potential arrays.
    pub fn sample_arrays(&self, x_min: f64, x_max: f64, n: usize)
        -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>)
    {
        let x: nd::Array1<f64> = grid(x_min, x_max, n).collect();
        let psi: nd::Array1<f64> = x.mapv(|xk| self.psi(xk));
        let v: nd::Array1<f64> = x.mapv(|xk| self.potential(xk));
        (x, psi, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn states(depth: f64, width: f64) -> (Well, Vec<BoundState>) {
        let well = Well::new(depth, width).unwrap();
        let states = well.solve();
        (well, states)
    }

    #[test]
    fn even_amplitudes_are_unscaled() {
        let amps = Amplitudes::new(Parity::Even, 1.2);
        assert_eq!(amps.inside, 1.0);
        assert_relative_eq!(amps.outside, 1.2_f64.cos());
    }

    #[test]
    fn odd_amplitudes_past_the_sine_peak() {
        let amps = Amplitudes::new(Parity::Odd, 2.5);
        assert_eq!(amps.inside, 1.0);
        assert_relative_eq!(amps.outside, 2.5_f64.sin());
    }

    #[test]
    fn odd_amplitudes_before_the_sine_peak() {
        // off-shell, but the edge is then the largest interior value
        let amps = Amplitudes::new(Parity::Odd, 0.5);
        assert_relative_eq!(amps.inside, 0.5_f64.sin().recip());
        assert_relative_eq!(amps.outside, 1.0);
    }

    #[test]
    fn grid_is_inclusive() {
        let x: Vec<f64> = grid(-2.0, 2.0, 4).collect();
        assert_eq!(x, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(grid(-2.0, 2.0, 0).count(), 0);
        assert_eq!(grid(-2.0, 2.0, 1).collect::<Vec<_>>(), vec![-2.0, 2.0]);
    }

    #[test]
    fn checked_construction() {
        let well = Well::new(0.3, 100.0).unwrap();
        assert!(Wavefunction::new(well, 0.1, Parity::Even).is_ok());
        assert_eq!(
            Wavefunction::new(well, 0.3, Parity::Odd),
            Err(SampleError::BadEnergy { energy: 0.3, depth: 0.3 }),
        );
        assert!(Wavefunction::new(well, -0.1, Parity::Odd).is_err());
    }

    #[test]
    fn continuous_at_edges() {
        for (depth, width) in [(0.3, 100.0), (0.01, 5.0), (5.0, 50.0)] {
            let (well, states) = states(depth, width);
            let half = well.half_width();
            for state in states.iter() {
                let wf = well.wavefunction(state);
                let dx = half * 1e-12;
                assert!((wf.psi(half) - wf.psi(half + dx)).abs() < 1e-6);
                assert!((wf.psi(-half) - wf.psi(-half - dx)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn smooth_at_edges() {
        // the matching condition makes the one-sided log-derivatives agree
        let (well, states) = states(0.3, 100.0);
        let half = well.half_width();
        let h = 1e-4;
        for state in states.iter() {
            let wf = well.wavefunction(state);
            let left = (wf.psi(half) - wf.psi(half - h)) / h;
            let right = (wf.psi(half + h) - wf.psi(half)) / h;
            assert!((left - right).abs() < 1e-3 * left.abs().max(1e-3));
        }
    }

    #[test]
    fn parity_symmetry() {
        let (well, states) = states(0.3, 100.0);
        for state in states.iter() {
            let wf = well.wavefunction(state);
            for x in [0.0, 3.7, 25.0, 49.99, 50.0, 50.01, 80.0, 150.0] {
                let sign = if state.parity.is_odd() { -1.0 } else { 1.0 };
                assert_relative_eq!(wf.psi(-x), sign * wf.psi(x), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn peak_magnitude_is_one() {
        let (well, states) = states(0.3, 100.0);
        for state in states.iter() {
            let points = well.sample(state, -80.0, 80.0, 4000);
            let peak = points.iter().map(|p| p.psi.abs()).fold(0.0, f64::max);
            assert!(peak <= 1.0 + 1e-12);
            assert!(peak > 0.99);
        }
    }

    #[test]
    fn tails_decay() {
        let (well, states) = states(0.3, 100.0);
        let wf = well.wavefunction(&states[0]);
        assert!(wf.psi(60.0).abs() < wf.psi(50.0).abs());
        assert!(wf.psi(200.0).abs() < 1e-6);
    }

    #[test]
    fn deep_wide_well_does_not_underflow() {
        let (well, states) = states(10.0, 500.0);
        assert_eq!(states.len(), well.expected_count());
        let wf = well.wavefunction(states.last().unwrap());
        let amps = wf.amplitudes();
        assert!(amps.inside.is_finite() && amps.outside.is_finite());
        assert!(wf.psi(well.half_width() + 1.0).is_finite());
    }

    #[test]
    fn arrays_match_points() {
        let (well, states) = states(1.0, 10.0);
        let wf = well.wavefunction(&states[1]);
        let points = wf.sample(-10.0, 10.0, 50);
        let (x, psi, v) = wf.sample_arrays(-10.0, 10.0, 50);
        assert_eq!(x.len(), 51);
        for (k, p) in points.iter().enumerate() {
            assert_eq!(p.x, x[k]);
            assert_eq!(p.psi, psi[k]);
            assert_eq!(p.potential, v[k]);
        }
    }

    #[test]
    fn arrays_share_one_inclusive_grid() {
        let (well, states) = states(0.3, 100.0);
        let (x_min, x_max) = (-80.0, 80.0);
        let (x0, _, _) = well.wavefunction(&states[0]).sample_arrays(x_min, x_max, 400);
        assert_eq!(x0[0], x_min);
        assert_eq!(x0[400], x_max);
        let psis: Vec<nd::Array1<f64>>
            = states.iter()
            .map(|state| {
                let (x, psi, _) = well.wavefunction(state).sample_arrays(x_min, x_max, 400);
                assert_eq!(x, x0);
                psi
            })
            .collect();
        let wfs: nd::Array2<f64>
            = nd::stack(
                nd::Axis(0),
                &psis.iter().map(|psi| psi.view()).collect::<Vec<_>>(),
            )
            .unwrap();
        assert_eq!(wfs.shape(), &[states.len(), 401]);
        for (row, state) in wfs.outer_iter().zip(states.iter()) {
            let points = well.sample(state, x_min, x_max, 400);
            assert!(row.iter().zip(points.iter()).all(|(psi, p)| *psi == p.psi));
        }
    }
}
