//! stellar-imf - Initial mass function sampling
//!
//! Power-law and broken power-law probability distributions with analytic
//! quantile functions, plus the two routines built on them: resampling
//! discretely-binned stellar masses into a fully sampled IMF, and drawing the
//! resolved high-mass tail of a bulk stellar population. Abundance-ratio and
//! age/metallicity formulas for the derived stellar quantities live in
//! [`abundance`] and [`derived`].
//!
//! All sampling takes an explicit `rand` generator; seed it for reproducible
//! output.

use thiserror::Error;

pub mod abundance;
pub mod derived;
pub mod population;
pub mod power_law;
pub mod resample;
pub mod split_power_law;

// Re-export main types
pub use abundance::Element;
pub use population::{sample_stellar_mass_from_spop, PopulationConfig};
pub use power_law::PowerLawDistribution;
pub use resample::{resample_stellar_mass, ResampleConfig};
pub use split_power_law::SplitPowerLawDistribution;

/// Errors surfaced when constructing distributions or validating inputs.
///
/// Out-of-domain probabilities are not errors: `ppf` encodes them as NaN so
/// batch calls run to completion.
#[derive(Debug, Error)]
pub enum ImfError {
    #[error("invalid range: expected 0 < xmin < xmax, got [{xmin}, {xmax}]")]
    InvalidRange { xmin: f64, xmax: f64 },
    #[error("number of slopes not consistent with limits: got {slopes} slopes for {limits} limits")]
    ShapeMismatch { slopes: usize, limits: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{context} length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },
}
