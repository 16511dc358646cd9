//! Population-level IMF sampling
//!
//! Draws whole stellar populations from a broken power-law IMF and keeps the
//! individually-resolved high-mass tail.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::split_power_law::SplitPowerLawDistribution;
use crate::ImfError;

/// Broken power-law shape used for bulk stellar populations.
///
/// Defaults match the simulations: a Kroupa-like three-segment IMF where the
/// two segments below `mass_limit` describe the unresolved bulk population and
/// the segment above it the individually-tracked stars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Mass threshold separating the bulk population from resolved stars, in
    /// solar masses.
    pub mass_limit: f64,
    /// Power-law slope of each IMF segment.
    pub slopes: Vec<f64>,
    /// Segment boundaries, `slopes.len() + 1` increasing values.
    pub limits: Vec<f64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            mass_limit: 0.51,
            slopes: vec![-1.3, -2.3, -2.3],
            limits: vec![0.08, 0.5, 0.51, 100.0],
        }
    }
}

/// Sample resolved stellar masses for a bulk population.
///
/// Draws `number_high_mass` stars (truncated to an integer count) from the
/// full broken power law and returns only the masses at or above
/// `config.mass_limit`, the stars the simulation would have tracked
/// individually. The bulk segments below the threshold take part in the draw
/// so the tail is normalized against the whole population, but their samples
/// are discarded.
pub fn sample_stellar_mass_from_spop<R: Rng + ?Sized>(
    number_high_mass: f64,
    config: &PopulationConfig,
    rng: &mut R,
) -> Result<Vec<f64>, ImfError> {
    if !number_high_mass.is_finite() || number_high_mass < 0.0 {
        return Err(ImfError::InvalidConfig(format!(
            "number_high_mass must be a non-negative finite count, got {number_high_mass}"
        )));
    }

    let imf = SplitPowerLawDistribution::new(&config.slopes, &config.limits)?;
    let total = number_high_mass as usize;
    let mass = imf.sample(rng, total);

    Ok(mass
        .into_iter()
        .filter(|&m| m >= config.mass_limit)
        .collect())
}
