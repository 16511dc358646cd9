//! Age and metallicity conversions
//!
//! One-line physical formulas backing the simulation's derived stellar
//! quantities, as pure array functions.

use crate::ImfError;

/// Primordial helium mass fraction assumed by the simulations.
pub const HELIUM_MASS_FRACTION: f64 = 0.246;

/// Solar metallicity used to normalize `[M/H]`.
pub const SOLAR_METALLICITY: f64 = 0.0207;

/// `log10` of stellar ages given in years.
pub fn log_age(age_yr: &[f64]) -> Vec<f64> {
    age_yr.iter().map(|&age| age.log10()).collect()
}

/// Total metal mass fraction estimated from the tracked O and Fe fractions,
/// `Z = 2.09 * O + 1.06 * Fe`.
pub fn metallicity(metal_o: &[f64], metal_fe: &[f64]) -> Result<Vec<f64>, ImfError> {
    if metal_o.len() != metal_fe.len() {
        return Err(ImfError::LengthMismatch {
            context: "metallicity mass fractions",
            expected: metal_o.len(),
            got: metal_fe.len(),
        });
    }
    Ok(metal_o
        .iter()
        .zip(metal_fe.iter())
        .map(|(&o, &fe)| 2.09 * o + 1.06 * fe)
        .collect())
}

/// Hydrogen mass fraction `(1 - Y) * (1 - Z)` for a fixed helium fraction.
pub fn hydrogen_mass_fraction(metal_z: &[f64], helium: f64) -> Vec<f64> {
    metal_z.iter().map(|&z| (1.0 - helium) * (1.0 - z)).collect()
}

/// Logarithmic metallicity relative to solar, `[M/H] = log10(Z / Z_sun)`.
pub fn metal_over_h(metal_z: &[f64]) -> Vec<f64> {
    metal_z.iter().map(|&z| (z / SOLAR_METALLICITY).log10()).collect()
}
