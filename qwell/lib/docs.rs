//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Matching conditions](#matching-conditions)
//! - [Root finding](#root-finding)
//! - [Wavefunctions](#wavefunctions)
//! - [Units](#units)
//!
//! # Background
//! A particle of mass *m* in the potential
//! ```text
//!        ⎧ 0    |x| ≤ L/2
//! V(x) = ⎨
//!        ⎩ V0   |x| > L/2
//! ```
//! has bound states only for energies 0 < *E* < *V0*. Inside the well the
//! time-independent Schrödinger equation (TISE) gives oscillatory solutions
//! with wavenumber *k*; outside, the classically forbidden region admits only
//! exponentials, of which normalizability keeps the decaying one with decay
//! constant *κ*:
//! ```text
//!     √(2 m E)          √(2 m (V0 - E))
//! k = --------      κ = ---------------
//!        ħ                    ħ
//! ```
//! Because the potential is symmetric, every solution can be chosen to be
//! either even, *ψ*(-*x*) = *ψ*(*x*), with cos(*kx*) inside the well, or odd,
//! *ψ*(-*x*) = -*ψ*(*x*), with sin(*kx*) inside.
//!
//! # Matching conditions
//! Requiring *ψ* and *ψ*′ to be continuous at *x* = *L*/2 (the edge at -*L*/2
//! then follows by symmetry) and dividing the two conditions to remove the
//! amplitudes gives, with the dimensionless *ξ* ≡ *k* *L*/2 and *η* ≡ *κ*
//! *L*/2,
//! ```text
//! even:  ξ tan(ξ) = η
//! odd:   ξ cot(ξ) = -η
//! ```
//! Multiplying the odd condition through by tan(*ξ*) writes both in terms of
//! tan(*ξ*), so that they share its poles:
//! ```text
//! f_even(E) = ξ tan(ξ) - η
//! f_odd(E)  = η tan(ξ) + ξ
//! ```
//! Since *ξ*² + *η*² = *z0*² with *z0* ≡ (*L*/2) √(2 *m* *V0*) / *ħ*, all
//! bound states lie on a quarter circle in the (*ξ*, *η*) plane, and the
//! number of them is ⌈2 *z0* / π⌉. There is always at least one (even) state.
//!
//! # Root finding
//! On each branch of tan(*ξ*), i.e. between consecutive poles at
//! *ξ* = (*n* + ½) π, each matching function is negative below its root and
//! positive above it:
//! - *f*<sub>even</sub> is negative wherever tan(*ξ*) < 0 and increases
//!   monotonically from -*η* to +∞ where tan(*ξ*) > 0;
//! - *f*<sub>odd</sub> increases monotonically from -∞ to *ξ* where
//!   tan(*ξ*) < 0 and is positive wherever tan(*ξ*) > 0.
//!
//! So each branch holds at most one root of each parity. A plain sign-change
//! scan over a uniform energy grid, however, also fires wherever a grid step
//! straddles a pole, since both functions jump from +∞ to -∞ there, and it
//! misses a root that shares a step with the pole above it. The pole energies
//! are known in closed form,
//! ```text
//!        ħ²  ⎛ (n + ½) π ⎞²
//! E_n = --- ⎜ --------- ⎟
//!       2 m  ⎝    L/2    ⎠
//! ```
//! so they are inserted into the grid as extra points carrying their one-sided
//! limits (+ below, - above). Every sign change left over brackets exactly one
//! root, independent of the grid spacing, and is refined by bisection.
//!
//! The endpoints are treated the same way: at *E* → 0⁺, *f*<sub>even</sub> →
//! -*z0* and *f*<sub>odd</sub> → 0⁺ (the latter is exactly 0 *at* *E* = 0, which
//! would otherwise look like a sign change), and *E* = *V0* is included so that
//! a root lying in the last grid step of a weak well is not lost.
//!
//! # Wavefunctions
//! For a found state, the wavefunction is built as
//! ```text
//!        ⎧ A cos(kx) or A sin(kx)          |x| ≤ L/2
//! ψ(x) = ⎨
//!        ⎩ ± B exp(-κ (|x| - L/2))         |x| > L/2
//! ```
//! with the lower sign only for odd states at *x* < 0. Measuring the decay
//! from the well edge makes continuity simply *B* = *A* cos(*ξ*) (or
//! *A* sin(*ξ*)), and keeps every factor of order 1 even when *κ* *L*/2 is
//! large enough for exp(-*κ* *L*/2) to underflow. Continuity of *ψ*′ is
//! guaranteed by the matching condition itself.
//!
//! The amplitudes are then divided by the largest magnitude *ψ* attains: 1 for
//! even states, 1 for odd states with *ξ* ≥ π/2 (where the sine peaks inside
//! the well; every odd bound state satisfies this), and |sin *ξ*| otherwise.
//! This is a display normalization, not ∫|*ψ*|² = 1.
//!
//! # Units
//! The interface uses eV for energies and Å for lengths. Converting to SI for
//! the wavenumbers, the only combination of constants that matters is
//! ```text
//! ħ²
//! --- ≈ 3.80998 eV Å²
//! 2 m
//! ```
//! for the free electron mass. Items in [`units`][crate::units] handle the
//! conversions.
