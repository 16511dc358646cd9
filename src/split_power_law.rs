//! Broken power-law distribution
//!
//! Composes an ordered sequence of power-law segments into a piecewise
//! distribution whose density is continuous across segment boundaries.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::power_law::PowerLawDistribution;
use crate::ImfError;

/// A broken power law: N contiguous power-law segments joined at breakpoints.
///
/// Segment `i` spans `[limits[i], limits[i+1]]` with exponent `slopes[i]`.
/// Each segment is sampled in proportion to a weight derived at construction
/// from a continuity condition on the composite density, so the mixture
/// `sum_i weights[i] * pdf_i(x)` has no jump at any interior boundary.
#[derive(Debug, Clone)]
pub struct SplitPowerLawDistribution {
    segments: Vec<PowerLawDistribution>,
    weights: Vec<f64>,
    limits: Vec<f64>,
}

impl SplitPowerLawDistribution {
    /// Build a broken power law from `slopes` and the `slopes.len() + 1`
    /// strictly increasing `limits` bounding its segments.
    pub fn new(slopes: &[f64], limits: &[f64]) -> Result<Self, ImfError> {
        if slopes.len() + 1 != limits.len() {
            return Err(ImfError::ShapeMismatch {
                slopes: slopes.len(),
                limits: limits.len(),
            });
        }
        if slopes.is_empty() {
            return Err(ImfError::InvalidConfig(
                "at least one power-law segment is required".to_string(),
            ));
        }

        let mut segments = Vec::with_capacity(slopes.len());
        for (&slope, pair) in slopes.iter().zip(limits.windows(2)) {
            segments.push(PowerLawDistribution::new(slope, [pair[0], pair[1]])?);
        }

        // Continuity condition: match the composite density across each
        // interior boundary. Segment 0 anchors the unnormalized weights at 1;
        // each later weight is scaled by the ratio of the neighboring
        // segments' densities at the shared breakpoint.
        let mut weights = vec![1.0];
        for i in 1..segments.len() {
            let boundary = limits[i];
            let ratio = segments[i].pdf_at(boundary) / segments[i - 1].pdf_at(boundary);
            let next = weights[i - 1] / ratio;
            weights.push(next);
        }
        let total: f64 = weights.iter().sum();
        for w in weights.iter_mut() {
            *w /= total;
        }

        Ok(Self {
            segments,
            weights,
            limits: limits.to_vec(),
        })
    }

    /// Per-segment sampling proportions; non-negative and summing to 1.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The individual power-law segments, in breakpoint order.
    pub fn segments(&self) -> &[PowerLawDistribution] {
        &self.segments
    }

    /// Segment boundaries, `segments().len() + 1` strictly increasing values.
    pub fn limits(&self) -> &[f64] {
        &self.limits
    }

    /// Lower bound of the composite support.
    pub fn xmin(&self) -> f64 {
        self.limits[0]
    }

    /// Upper bound of the composite support.
    pub fn xmax(&self) -> f64 {
        self.limits[self.limits.len() - 1]
    }

    /// Draw `n` samples from the composite distribution.
    ///
    /// A single multinomial draw over `weights` allocates the `n` samples
    /// across segments, then each segment with a positive allocation draws
    /// from its own power law. The result concatenates the per-segment draws,
    /// so consecutive output values group by segment.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        let counts = multinomial(rng, n as u64, &self.weights);
        let mut out = Vec::with_capacity(n);
        for (segment, &count) in self.segments.iter().zip(counts.iter()) {
            if count > 0 {
                out.extend(segment.sample(rng, count as usize));
            }
        }
        out
    }
}

/// One draw from a multinomial over `weights` (which must sum to 1), as a
/// chain of conditional binomials. The counts sum to exactly `n`.
fn multinomial<R: Rng + ?Sized>(rng: &mut R, n: u64, weights: &[f64]) -> Vec<u64> {
    let mut counts = vec![0_u64; weights.len()];
    let mut remaining = n;
    let mut weight_left = 1.0;

    for (i, &w) in weights.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if i + 1 == weights.len() {
            counts[i] = remaining;
            break;
        }
        // Roundoff can push the conditional probability out of [0, 1].
        let p = if weight_left > 0.0 {
            (w / weight_left).min(1.0)
        } else {
            1.0
        };
        let drawn = Binomial::new(remaining, p)
            .expect("conditional probability lies in [0, 1]")
            .sample(rng);
        counts[i] = drawn;
        remaining -= drawn;
        weight_left -= w;
    }

    counts
}
