//! Single-segment power-law distribution
//!
//! Implements the normalized density, analytic CDF/quantile functions and
//! inverse-transform sampling for a power law over a bounded range.

use rand::Rng;

use crate::ImfError;

/// A power-law distribution `p(x) ~ x^slope` over `[xmin, xmax]`.
///
/// The density is normalized to integrate to 1 over the support and is zero
/// outside it. `slope == -1` is handled as the logarithmic singular case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawDistribution {
    slope: f64,
    xmin: f64,
    xmax: f64,
}

impl PowerLawDistribution {
    /// Create a power-law distribution with the given slope over `[xmin, xmax]`.
    ///
    /// Both bounds must be positive and finite with `xmin < xmax`, since the
    /// density involves non-integer powers of `x`.
    pub fn new(slope: f64, lim: [f64; 2]) -> Result<Self, ImfError> {
        let [xmin, xmax] = lim;
        if !xmin.is_finite() || !xmax.is_finite() || xmin <= 0.0 || xmin >= xmax {
            return Err(ImfError::InvalidRange { xmin, xmax });
        }
        Ok(Self { slope, xmin, xmax })
    }

    /// Power-law exponent.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Lower bound of the support.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper bound of the support.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Normalized probability density at `x`.
    ///
    /// Zero outside `[xmin, xmax]` (inclusive on both ends).
    pub fn pdf_at(&self, x: f64) -> f64 {
        if !(x >= self.xmin && x <= self.xmax) {
            return 0.0;
        }
        if self.slope == -1.0 {
            x.powf(self.slope) / (self.xmax / self.xmin).ln()
        } else {
            let a = self.slope + 1.0;
            x.powf(self.slope) * a / (self.xmax.powf(a) - self.xmin.powf(a))
        }
    }

    /// Element-wise [`pdf_at`](Self::pdf_at) over a slice.
    pub fn pdf(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.pdf_at(xi)).collect()
    }

    /// Analytic cumulative distribution function.
    ///
    /// Clamps to 0 below `xmin` and 1 above `xmax`.
    pub fn cdf_at(&self, x: f64) -> f64 {
        if x < self.xmin {
            return 0.0;
        }
        if x > self.xmax {
            return 1.0;
        }
        if self.slope == -1.0 {
            (x / self.xmin).ln() / (self.xmax / self.xmin).ln()
        } else {
            let a = self.slope + 1.0;
            (x.powf(a) - self.xmin.powf(a)) / (self.xmax.powf(a) - self.xmin.powf(a))
        }
    }

    /// Quantile function (inverse CDF): the `x` with `P(X <= x) = p`.
    ///
    /// Probabilities outside `[0, 1]` (including NaN) map to NaN rather than
    /// an error, so batch calls are never interrupted by a few out-of-range
    /// probes.
    pub fn ppf_at(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        if self.slope == -1.0 {
            self.xmin * (p * (self.xmax / self.xmin).ln()).exp()
        } else {
            let a = self.slope + 1.0;
            (p * (self.xmax.powf(a) - self.xmin.powf(a)) + self.xmin.powf(a)).powf(1.0 / a)
        }
    }

    /// Element-wise [`ppf_at`](Self::ppf_at) over a slice.
    pub fn ppf(&self, p: &[f64]) -> Vec<f64> {
        p.iter().map(|&pi| self.ppf_at(pi)).collect()
    }

    /// Draw `n` independent samples by inverse-transform sampling.
    ///
    /// Consumes `n` uniforms on `[0, 1)` from `rng`; seed the generator before
    /// calling for reproducible output.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.ppf_at(rng.gen::<f64>())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_rejects_invalid_range() {
        assert!(PowerLawDistribution::new(-2.3, [1.0, 1.0]).is_err());
        assert!(PowerLawDistribution::new(-2.3, [2.0, 1.0]).is_err());
        assert!(PowerLawDistribution::new(-2.3, [0.0, 1.0]).is_err());
        assert!(PowerLawDistribution::new(-2.3, [-1.0, 1.0]).is_err());
        assert!(PowerLawDistribution::new(-2.3, [1.0, f64::INFINITY]).is_err());
        assert!(PowerLawDistribution::new(-2.3, [0.51, 100.0]).is_ok());
    }

    #[test]
    fn test_pdf_zero_outside_support() {
        let dist = PowerLawDistribution::new(-2.3, [0.51, 100.0]).unwrap();
        assert_eq!(dist.pdf_at(0.5), 0.0);
        assert_eq!(dist.pdf_at(100.1), 0.0);
        assert!(dist.pdf_at(0.51) > 0.0);
        assert!(dist.pdf_at(100.0) > 0.0);

        let d = dist.pdf(&[0.1, 1.0, 200.0]);
        assert_eq!(d[0], 0.0);
        assert!(d[1] > 0.0);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn test_pdf_integrates_to_one() {
        // Trapezoidal integration over the support.
        for &slope in &[-2.3, -1.0, 0.7] {
            let dist = PowerLawDistribution::new(slope, [0.51, 100.0]).unwrap();
            let n = 200_000;
            let dx = (100.0 - 0.51) / n as f64;
            let mut integral = 0.0;
            for i in 0..n {
                let lo = 0.51 + i as f64 * dx;
                integral += 0.5 * (dist.pdf_at(lo) + dist.pdf_at(lo + dx)) * dx;
            }
            assert_relative_eq!(integral, 1.0, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_ppf_out_of_range_is_nan() {
        let dist = PowerLawDistribution::new(-2.3, [0.51, 100.0]).unwrap();
        assert!(dist.ppf_at(-0.1).is_nan());
        assert!(dist.ppf_at(1.1).is_nan());
        assert!(dist.ppf_at(f64::NAN).is_nan());

        let p = dist.ppf(&[-0.5, 0.0, 0.5, 1.0, 2.0]);
        assert!(p[0].is_nan());
        assert_relative_eq!(p[1], 0.51, max_relative = 1e-12);
        assert!(p[2].is_finite());
        assert_relative_eq!(p[3], 100.0, max_relative = 1e-12);
        assert!(p[4].is_nan());
    }

    #[test]
    fn test_ppf_endpoints() {
        let dist = PowerLawDistribution::new(-1.0, [0.08, 100.0]).unwrap();
        assert_relative_eq!(dist.ppf_at(0.0), 0.08, max_relative = 1e-12);
        assert_relative_eq!(dist.ppf_at(1.0), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_cdf_ppf_round_trip() {
        for &slope in &[-2.3, -1.0, -0.5, 1.5] {
            let dist = PowerLawDistribution::new(slope, [0.51, 100.0]).unwrap();
            for &x in &[0.51, 0.7, 1.0, 5.0, 42.0, 99.9, 100.0] {
                let p = dist.cdf_at(x);
                assert!((0.0..=1.0).contains(&p));
                assert_relative_eq!(dist.ppf_at(p), x, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_slope_minus_one_matches_general_limit() {
        let singular = PowerLawDistribution::new(-1.0, [0.51, 100.0]).unwrap();
        let nearby = PowerLawDistribution::new(-1.0 + 1e-9, [0.51, 100.0]).unwrap();
        for &x in &[0.6, 1.0, 10.0, 90.0] {
            assert_relative_eq!(singular.pdf_at(x), nearby.pdf_at(x), max_relative = 1e-6);
        }
        for &p in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_relative_eq!(singular.ppf_at(p), nearby.ppf_at(p), max_relative = 1e-6);
        }
    }

    #[test]
    fn test_sample_within_bounds() {
        let dist = PowerLawDistribution::new(-2.3, [0.51, 100.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let samples = dist.sample(&mut rng, 1000);
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|&m| (0.51..=100.0).contains(&m)));
    }

    #[test]
    fn test_sample_reproducible() {
        let dist = PowerLawDistribution::new(-2.3, [0.51, 100.0]).unwrap();
        let a = dist.sample(&mut StdRng::seed_from_u64(7), 100);
        let b = dist.sample(&mut StdRng::seed_from_u64(7), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_log_log_slope() {
        // Empirical histogram slope on a log-log plot should recover the
        // exponent to within sampling noise.
        let dist = PowerLawDistribution::new(-2.3, [0.51, 100.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let samples = dist.sample(&mut rng, 200_000);

        let nbins = 20;
        let lmin = 0.51_f64.ln();
        let lmax = 100.0_f64.ln();
        let mut counts = vec![0_usize; nbins];
        for &m in &samples {
            let bin = ((m.ln() - lmin) / (lmax - lmin) * nbins as f64) as usize;
            counts[bin.min(nbins - 1)] += 1;
        }

        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (i, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let lo = (lmin + i as f64 / nbins as f64 * (lmax - lmin)).exp();
            let hi = (lmin + (i + 1) as f64 / nbins as f64 * (lmax - lmin)).exp();
            xs.push((0.5 * (lo + hi)).log10());
            ys.push((count as f64 / (hi - lo)).log10());
        }

        let xbar = xs.iter().sum::<f64>() / xs.len() as f64;
        let ybar = ys.iter().sum::<f64>() / ys.len() as f64;
        let num: f64 = xs.iter().zip(&ys).map(|(x, y)| (x - xbar) * (y - ybar)).sum();
        let den: f64 = xs.iter().map(|x| (x - xbar) * (x - xbar)).sum();
        let fitted = num / den;
        assert!(
            (fitted - (-2.3)).abs() < 0.2,
            "fitted log-log slope {fitted} too far from -2.3"
        );
    }
}
