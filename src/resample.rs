//! Stellar-mass resampling
//!
//! Replaces discretely-binned stellar masses from a simulation with continuous
//! draws from a power law fitted to each value's mass bin.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::power_law::PowerLawDistribution;
use crate::ImfError;

/// Bin geometry and IMF slope of the upstream star-by-star sampler.
///
/// Defaults correspond to the simulation setup: masses were drawn on a grid of
/// `nimf` edges (399 equal-width bins) spanning `[0.51, 100]` solar masses,
/// with a Salpeter-like slope of -2.3 inside each bin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Lower edge of the IMF grid, in solar masses.
    pub mmin: f64,
    /// Upper edge of the IMF grid, in solar masses.
    pub mmax: f64,
    /// Number of grid edges; the grid has `nimf - 1` bins.
    pub nimf: usize,
    /// Power-law slope applied within each bin.
    pub aimf: f64,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            mmin: 0.51,
            mmax: 100.0,
            nimf: 400,
            aimf: -2.3,
        }
    }
}

impl ResampleConfig {
    pub fn validate(&self) -> Result<(), ImfError> {
        if self.nimf < 2 {
            return Err(ImfError::InvalidConfig(
                "nimf must be at least 2 to form one bin".to_string(),
            ));
        }
        if !self.mmin.is_finite() || !self.mmax.is_finite() || self.mmin <= 0.0 {
            return Err(ImfError::InvalidRange {
                xmin: self.mmin,
                xmax: self.mmax,
            });
        }
        if self.mmin >= self.mmax {
            return Err(ImfError::InvalidRange {
                xmin: self.mmin,
                xmax: self.mmax,
            });
        }
        if !self.aimf.is_finite() {
            return Err(ImfError::InvalidConfig(
                "aimf must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Equal-width bin edges of the original IMF grid, `nimf` values from
    /// `mmin` to `mmax`.
    pub fn bin_edges(&self) -> Vec<f64> {
        let dm = (self.mmax - self.mmin) / (self.nimf - 1) as f64;
        (0..self.nimf).map(|i| self.mmin + i as f64 * dm).collect()
    }
}

/// Resample binned stellar masses into a fully sampled IMF.
///
/// Each input mass falling in a grid bin `[lo, hi)` is replaced by a draw from
/// a power law with slope `aimf` over that bin, so the output follows the IMF
/// continuously while staying consistent with the original discretization.
/// The output has the same length and ordering as `mform`; within a bin, draws
/// are assigned to matched elements in ascending index order.
///
/// Masses outside `[mmin, mmax)` belong to no bin and pass through unchanged;
/// upstream those are the particles that were never discretized.
pub fn resample_stellar_mass<R: Rng + ?Sized>(
    mform: &[f64],
    config: &ResampleConfig,
    rng: &mut R,
) -> Result<Vec<f64>, ImfError> {
    config.validate()?;

    let edges = config.bin_edges();
    let mut mass = mform.to_vec();

    for pair in edges.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let matched: Vec<usize> = mform
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m >= lo && m < hi)
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            continue;
        }

        let imf = PowerLawDistribution::new(config.aimf, [lo, hi])?;
        let draws = imf.sample(rng, matched.len());
        for (&idx, &draw) in matched.iter().zip(draws.iter()) {
            mass[idx] = draw;
        }
    }

    Ok(mass)
}
