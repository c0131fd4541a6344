//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Note that the unchecked entry points ([`find_bound_state_energies`] and
//! [`sample_wavefunction`]) never return these: a well with no depth simply
//! has no bound states.
//!
//! [anyhow]: https://crates.io/crates/anyhow
//! [`find_bound_state_energies`]: crate::find_bound_state_energies
//! [`sample_wavefunction`]: crate::sample_wavefunction

use thiserror::Error;

/// Returned when constructing a [`Well`][crate::well::Well] from invalid
/// parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WellError {
    /// Returned when a non-positive or non-finite depth is encountered.
    #[error("well depth must be finite and greater than 0 eV; got {0}")]
    BadDepth(f64),

    /// Returned when a non-positive or non-finite width is encountered.
    #[error("well width must be finite and greater than 0 Å; got {0}")]
    BadWidth(f64),
}

impl WellError {
    pub(crate) fn check_depth(depth: f64) -> Result<(), Self> {
        (depth.is_finite() && depth > 0.0).then_some(())
            .ok_or(Self::BadDepth(depth))
    }

    pub(crate) fn check_width(width: f64) -> Result<(), Self> {
        (width.is_finite() && width > 0.0).then_some(())
            .ok_or(Self::BadWidth(width))
    }
}

/// Returned from checked wavefunction construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// Returned when an energy outside the open interval (0, depth) is given.
    #[error("bound-state energy must lie strictly between 0 and {depth} eV; got {energy}")]
    BadEnergy { energy: f64, depth: f64 },

    /// [`WellError`]
    #[error("well error: {0}")]
    Well(#[from] WellError),
}

impl SampleError {
    pub(crate) fn check_energy(energy: f64, depth: f64) -> Result<(), Self> {
        (energy > 0.0 && energy < depth).then_some(())
            .ok_or(Self::BadEnergy { energy, depth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_and_width_checks() {
        assert!(WellError::check_depth(0.3).is_ok());
        assert_eq!(WellError::check_depth(0.0), Err(WellError::BadDepth(0.0)));
        assert!(WellError::check_depth(f64::INFINITY).is_err());
        assert!(WellError::check_width(f64::NAN).is_err());
        assert_eq!(WellError::check_width(-1.0), Err(WellError::BadWidth(-1.0)));
    }

    #[test]
    fn energy_bounds_are_open() {
        assert!(SampleError::check_energy(0.1, 0.3).is_ok());
        assert!(SampleError::check_energy(0.0, 0.3).is_err());
        assert!(SampleError::check_energy(0.3, 0.3).is_err());
        assert!(SampleError::check_energy(f64::NAN, 0.3).is_err());
    }

    #[test]
    fn messages_carry_values() {
        let err = SampleError::from(WellError::BadWidth(-2.0));
        assert_eq!(
            err.to_string(),
            "well error: well width must be finite and greater than 0 Å; got -2",
        );
    }
}
