use anyhow::{anyhow, Result};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// Given two strengths, returns their sum.
///
/// The identity element is `0`.
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::sum;
/// assert_eq!(0.8, sum(0.3, 0.5));
/// ```
pub fn sum(w1: f64, w2: f64) -> f64 {
    w1 + w2
}

/// Given two strengths, returns their product.
///
/// The identity element is `1`.
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::product;
/// assert_eq!(0.2, product(0.5, 0.4));
/// ```
pub fn product(w1: f64, w2: f64) -> f64 {
    w1 * w2
}

/// Given two strengths, returns the maximal one.
///
/// Unlike [`f64::max`], a NaN operand makes the result NaN.
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::top;
/// assert_eq!(0.9, top(0.2, 0.9));
/// assert!(top(0.2, f64::NAN).is_nan());
/// ```
pub fn top(w1: f64, w2: f64) -> f64 {
    if w1.is_nan() || w2.is_nan() {
        f64::NAN
    } else {
        w1.max(w2)
    }
}

/// The aggregation functions, identified by a stable name.
///
/// The name of a function is given by its [`AsRef<str>`] implementation,
/// while [`TryFrom<&str>`] performs the reverse lookup.
///
/// ```
/// # use qbaf_functions::functions::AggregationFunction;
/// let f = AggregationFunction::try_from("product").unwrap();
/// assert_eq!(AggregationFunction::Product, f);
/// assert_eq!("product", f.as_ref());
/// assert!(AggregationFunction::try_from("quadratic").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter)]
pub enum AggregationFunction {
    /// The [`sum`] function
    #[strum(serialize = "sum")]
    Sum,
    /// The [`product`] function
    #[strum(serialize = "product")]
    Product,
    /// The [`top`] function
    #[strum(serialize = "top")]
    Top,
}

impl AggregationFunction {
    /// Applies the function to a pair of strengths.
    pub fn apply(&self, w1: f64, w2: f64) -> f64 {
        (self.as_fn())(w1, w2)
    }

    /// Returns the plain function associated with this variant.
    pub fn as_fn(&self) -> fn(f64, f64) -> f64 {
        match self {
            AggregationFunction::Sum => sum,
            AggregationFunction::Product => product,
            AggregationFunction::Top => top,
        }
    }

    /// Returns the identity element of the function.
    ///
    /// This is the value to start from when folding the function over a sequence of strengths.
    /// For [`AggregationFunction::Top`], negative infinity is returned.
    pub fn identity(&self) -> f64 {
        match self {
            AggregationFunction::Sum => 0.,
            AggregationFunction::Product => 1.,
            AggregationFunction::Top => f64::NEG_INFINITY,
        }
    }

    /// Folds the function over a sequence of strengths, from left to right, starting from the identity element.
    ///
    /// An empty sequence gives the identity element.
    ///
    /// # Example
    ///
    /// ```
    /// # use qbaf_functions::functions::AggregationFunction;
    /// assert_eq!(0.9, AggregationFunction::Top.aggregate(vec![0.2, 0.9, 0.5]));
    /// assert_eq!(1., AggregationFunction::Product.aggregate(vec![]));
    /// ```
    pub fn aggregate<I>(&self, strengths: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        strengths.into_iter().fold(self.identity(), self.as_fn())
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Returns an iterator over the names of the aggregation functions.
    pub fn iter_names() -> impl Iterator<Item = &'static str> {
        AggregationFunction::iter().map(|f| f.name())
    }
}

impl TryFrom<&str> for AggregationFunction {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();
        AggregationFunction::iter()
            .find(|f| f.as_ref() == lowercase)
            .ok_or_else(|| anyhow!(r#"undefined aggregation function "{}""#, value))
    }
}

impl Display for AggregationFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [-3.5, -1., -0.25, 0., 0.1, 0.3, 0.5, 1., 42.];

    #[test]
    fn test_concrete_values() {
        assert_eq!(0.8, sum(0.3, 0.5));
        assert_eq!(0.2, product(0.5, 0.4));
        assert_eq!(0.9, top(0.2, 0.9));
    }

    #[test]
    fn test_commutativity() {
        for f in AggregationFunction::iter() {
            for a in SAMPLES {
                for b in SAMPLES {
                    assert_eq!(f.apply(a, b), f.apply(b, a), "{} on ({}, {})", f, a, b);
                }
            }
        }
    }

    #[test]
    fn test_identity_elements() {
        for a in SAMPLES {
            assert_eq!(a, sum(a, 0.));
            assert_eq!(a, product(a, 1.));
            assert_eq!(a, top(a, a));
            for f in AggregationFunction::iter() {
                assert_eq!(a, f.apply(f.identity(), a), "{} on {}", f, a);
            }
        }
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(0., AggregationFunction::Sum.aggregate(vec![]));
        assert_eq!(1.5, AggregationFunction::Sum.aggregate(vec![0.5, 0.25, 0.75]));
        assert_eq!(0.125, AggregationFunction::Product.aggregate(vec![0.5, 0.5, 0.5]));
        assert_eq!(0.75, AggregationFunction::Top.aggregate(vec![0.5, 0.25, 0.75]));
        assert_eq!(
            f64::NEG_INFINITY,
            AggregationFunction::Top.aggregate(std::iter::empty())
        );
    }

    #[test]
    fn test_nan_propagation() {
        assert!(sum(f64::NAN, 1.).is_nan());
        assert!(product(1., f64::NAN).is_nan());
        assert!(top(f64::NAN, 1.).is_nan());
        assert!(top(1., f64::NAN).is_nan());
        assert!(AggregationFunction::Top
            .aggregate(vec![0.5, f64::NAN, 0.75])
            .is_nan());
    }

    #[test]
    fn test_infinities() {
        assert_eq!(f64::INFINITY, sum(f64::MAX, f64::MAX));
        assert_eq!(f64::INFINITY, top(f64::INFINITY, 0.));
    }

    #[test]
    fn test_determinism() {
        for f in AggregationFunction::iter() {
            for a in SAMPLES {
                assert_eq!(f.apply(a, 0.3).to_bits(), f.apply(a, 0.3).to_bits());
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(
            vec!["sum", "product", "top"],
            AggregationFunction::iter_names().collect::<Vec<&str>>()
        );
        for f in AggregationFunction::iter() {
            assert_eq!(f, AggregationFunction::try_from(f.name()).unwrap());
            assert_eq!(f.name(), f.to_string());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            AggregationFunction::Top,
            AggregationFunction::try_from("TOP").unwrap()
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = AggregationFunction::try_from("quadratic").unwrap_err();
        assert_eq!(r#"undefined aggregation function "quadratic""#, err.to_string());
    }
}
