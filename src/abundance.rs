//! Solar-relative elemental abundance ratios
//!
//! Bracket-notation ratios `[X/Y]` against the Asplund et al. (2009) solar
//! photospheric composition, computed from mass-fraction arrays.

use crate::ImfError;

/// Elements tracked by the simulation chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    H,
    C,
    N,
    O,
    Mg,
    Al,
    Si,
    Fe,
    Eu,
}

impl Element {
    /// Solar photospheric abundance `A(X) = log10(N_X / N_H) + 12`,
    /// Asplund et al. (2009).
    pub fn photospheric_abundance(self) -> f64 {
        match self {
            Element::H => 12.00,
            Element::C => 8.43,
            Element::N => 7.83,
            Element::O => 8.69,
            Element::Mg => 7.60,
            Element::Al => 6.45,
            Element::Si => 7.51,
            Element::Fe => 7.50,
            Element::Eu => 0.52,
        }
    }

    /// Standard atomic weight, in unified atomic mass units.
    pub fn atomic_weight(self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::Mg => 24.305,
            Element::Al => 26.982,
            Element::Si => 28.085,
            Element::Fe => 55.845,
            Element::Eu => 151.964,
        }
    }
}

/// Bracket abundance ratio `[X/Y]` for a single pair of mass fractions.
///
/// Converts the mass fractions `x` and `y` to number densities with the
/// atomic weights, takes the log ratio and subtracts the solar value. A zero
/// or negative mass fraction propagates through the logarithm as an infinity
/// or NaN rather than failing the call.
pub fn abundance_ratio_at(x: f64, y: f64, elem_x: Element, elem_y: Element) -> f64 {
    let number_ratio = (x / elem_x.atomic_weight()) / (y / elem_y.atomic_weight());
    number_ratio.log10()
        - (elem_x.photospheric_abundance() - elem_y.photospheric_abundance())
}

/// Element-wise [`abundance_ratio_at`] over paired mass-fraction arrays.
pub fn abundance_ratio(
    x: &[f64],
    y: &[f64],
    elem_x: Element,
    elem_y: Element,
) -> Result<Vec<f64>, ImfError> {
    if x.len() != y.len() {
        return Err(ImfError::LengthMismatch {
            context: "abundance_ratio mass fractions",
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| abundance_ratio_at(xi, yi, elem_x, elem_y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Mass fraction proportional to the solar number abundance of `elem`.
    fn solar_fraction(elem: Element, scale: f64) -> f64 {
        scale * elem.atomic_weight() * 10_f64.powf(elem.photospheric_abundance())
    }

    #[test]
    fn test_solar_composition_is_zero() {
        let fe = solar_fraction(Element::Fe, 1e-12);
        let h = solar_fraction(Element::H, 1e-12);
        assert_relative_eq!(
            abundance_ratio_at(fe, h, Element::Fe, Element::H),
            0.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_enhancement_shifts_ratio_by_decade() {
        let o = solar_fraction(Element::O, 1e-12);
        let fe = solar_fraction(Element::Fe, 1e-12);
        let enhanced = abundance_ratio_at(10.0 * o, fe, Element::O, Element::Fe);
        assert_relative_eq!(enhanced, 1.0, epsilon = 1e-10);

        let depleted = abundance_ratio_at(0.1 * o, fe, Element::O, Element::Fe);
        assert_relative_eq!(depleted, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_fraction_is_not_an_error() {
        let fe = solar_fraction(Element::Fe, 1e-12);
        let ratio = abundance_ratio_at(0.0, fe, Element::O, Element::Fe);
        assert!(ratio.is_infinite() && ratio.is_sign_negative());
    }

    #[test]
    fn test_array_form_matches_scalar() {
        let fe = [1e-5, 2e-5, 3e-5];
        let h = [0.7, 0.72, 0.74];
        let ratios = abundance_ratio(&fe, &h, Element::Fe, Element::H).unwrap();
        assert_eq!(ratios.len(), 3);
        for i in 0..3 {
            assert_relative_eq!(
                ratios[i],
                abundance_ratio_at(fe[i], h[i], Element::Fe, Element::H)
            );
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = abundance_ratio(&[1.0, 2.0], &[1.0], Element::Fe, Element::H);
        assert!(matches!(err, Err(ImfError::LengthMismatch { .. })));
    }
}
