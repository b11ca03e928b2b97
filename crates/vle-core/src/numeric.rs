use crate::VleError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tolerance for "the two fractions of a binary pair add up to one".
    pub const FRACTION_SUM: Tolerances = Tolerances {
        abs: 1e-9,
        rel: 0.0,
    };

    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, VleError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VleError::NonFinite { what, value: v })
    }
}

/// Fraction of the other component in a binary mixture.
///
/// No range check: values outside [0, 1] pass straight through.
#[inline]
pub fn complement(fraction: Real) -> Real {
    1.0 - fraction
}

/// `[1 - x, x]` for a fraction `x` of the second component.
#[inline]
pub fn binary_pair(fraction: Real) -> [Real; 2] {
    [complement(fraction), fraction]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pair_sums_to_one(x in 0.0_f64..1.0_f64) {
            let [a, b] = binary_pair(x);
            prop_assert!(nearly_equal(a + b, 1.0, Tolerances::FRACTION_SUM));
            prop_assert_eq!(b, x);
        }
    }
}
