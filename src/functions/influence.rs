use anyhow::{anyhow, Result};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// Returns `max(0, x)`, keeping NaN values.
fn positive_part(x: f64) -> f64 {
    if x > 0. || x.is_nan() {
        x
    } else {
        0.
    }
}

/// The saturating function `x^p / (1 + x^p)` applied to the positive part of `x`.
///
/// The expression is computed as `1 - 1 / (1 + x^p)`, which gives 1 instead of NaN when `x^p` overflows.
fn saturation(x: f64, p: f64) -> f64 {
    1. - 1. / (1. + positive_part(x).powf(p))
}

/// Returns the influence result of the basic model.
///
/// The aggregate is added to the base weight, so the result is not bounded.
///
/// # Arguments
///
/// * `w` - the base weight of the argument
/// * `s` - the aggregate of the strengths of its attackers and supporters
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::simple_influence;
/// assert_eq!(0.6, simple_influence(0.6, 0.));
/// ```
pub fn simple_influence(w: f64, s: f64) -> f64 {
    w + s
}

/// Returns the result of the linear influence function with conservativeness `k`.
///
/// The formula is `w - (w / k) * max(0, -s) + ((1 - w) / k) * max(0, s)`.
/// The aggregate is first saturated to `[-k, k]`, the interval on which the formula keeps weights of `[0, 1]` in `[0, 1]`.
///
/// `k` is expected to be strictly positive.
///
/// # Arguments
///
/// * `w` - the base weight of the argument
/// * `s` - the aggregate of the strengths of its attackers and supporters
/// * `k` - the conservativeness of the function
pub fn linear(w: f64, s: f64, k: f64) -> f64 {
    let s = if s > k {
        k
    } else if s < -k {
        -k
    } else {
        s
    };
    w - (w / k) * positive_part(-s) + ((1. - w) / k) * positive_part(s)
}

/// Returns the result of the influence function Linear(1).
///
/// See [`linear`].
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::linear_1;
/// assert_eq!(0.5, linear_1(0.5, 0.));
/// assert_eq!(0.25, linear_1(0.5, -0.5));
/// assert_eq!(1., linear_1(0.5, 10.));
/// ```
pub fn linear_1(w: f64, s: f64) -> f64 {
    linear(w, s, 1.)
}

/// Returns the result of the Euler-based influence function.
///
/// The formula is `1 - (1 - w^2) / (1 + w * e^s)`.
/// For a weight in `[0, 1]`, the result lies in `[w^2, 1]`.
///
/// The formula is evaluated as `w + (1 - w) * (1 - (1 + w) / (1 + w * e^s))` for a support
/// and as `w * (1 - (1 - w) * (1 - e^s) / (1 + w * e^s))` for an attack,
/// so that a null aggregate gives exactly `w` and the result is non-decreasing in `s`.
///
/// # Arguments
///
/// * `w` - the base weight of the argument
/// * `s` - the aggregate of the strengths of its attackers and supporters
pub fn euler_based(w: f64, s: f64) -> f64 {
    // e^s may overflow, and 0 * inf is NaN
    if w == 0. && !s.is_nan() {
        return 0.;
    }
    let e = s.exp();
    if s < 0. {
        w * (1. - (1. - w) * ((1. - e) / (1. + w * e)))
    } else {
        w + (1. - w) * (1. - (1. + w) / (1. + w * e))
    }
}

/// Returns the result of the p-Max(k) influence function.
///
/// The formula is `w - w * h(-s / k) + (1 - w) * h(s / k)`, where `h(x) = max(0, x)^p / (1 + max(0, x)^p)`.
///
/// `p` and `k` are expected to be strictly positive.
///
/// # Arguments
///
/// * `w` - the base weight of the argument
/// * `s` - the aggregate of the strengths of its attackers and supporters
/// * `p` - the exponent applied to the aggregate
/// * `k` - the conservativeness of the function
pub fn p_max(w: f64, s: f64, p: f64, k: f64) -> f64 {
    w - w * saturation(-s / k, p) + (1. - w) * saturation(s / k, p)
}

/// Returns the result of the influence function 2-Max(1).
///
/// See [`p_max`].
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::max_2_1;
/// assert_eq!(0.5, max_2_1(0.5, 0.));
/// assert_eq!(0.75, max_2_1(0.5, 1.));
/// ```
pub fn max_2_1(w: f64, s: f64) -> f64 {
    p_max(w, s, 2., 1.)
}

/// Returns the result of the influence function 1-Max(1).
///
/// See [`p_max`].
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::max_1_1;
/// assert_eq!(0.5, max_1_1(0.5, 0.));
/// assert_eq!(0.25, max_1_1(0.5, -1.));
/// ```
pub fn max_1_1(w: f64, s: f64) -> f64 {
    p_max(w, s, 1., 1.)
}

/// The influence functions, identified by a stable name.
///
/// ```
/// # use qbaf_functions::functions::InfluenceFunction;
/// let f = InfluenceFunction::try_from("euler-based").unwrap();
/// assert_eq!(InfluenceFunction::EulerBased, f);
/// assert_eq!("euler-based", f.as_ref());
/// assert!(InfluenceFunction::try_from("quadratic").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter)]
pub enum InfluenceFunction {
    /// The [`simple_influence`] function
    #[strum(serialize = "simple")]
    Simple,
    /// The [`linear_1`] function
    #[strum(serialize = "linear-1")]
    Linear1,
    /// The [`euler_based`] function
    #[strum(serialize = "euler-based")]
    EulerBased,
    /// The [`max_2_1`] function
    #[strum(serialize = "max-2-1")]
    Max21,
    /// The [`max_1_1`] function
    #[strum(serialize = "max-1-1")]
    Max11,
}

impl InfluenceFunction {
    /// Applies the function to a base weight and an aggregate.
    pub fn apply(&self, w: f64, s: f64) -> f64 {
        (self.as_fn())(w, s)
    }

    /// Returns the plain function associated with this variant.
    pub fn as_fn(&self) -> fn(f64, f64) -> f64 {
        match self {
            InfluenceFunction::Simple => simple_influence,
            InfluenceFunction::Linear1 => linear_1,
            InfluenceFunction::EulerBased => euler_based,
            InfluenceFunction::Max21 => max_2_1,
            InfluenceFunction::Max11 => max_1_1,
        }
    }

    /// Returns the aggregate for which the function returns the base weight.
    pub fn neutral_aggregate(&self) -> f64 {
        0.
    }

    /// Returns `true` iff the function keeps base weights of `[0, 1]` in `[0, 1]`, whatever the aggregate.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, InfluenceFunction::Simple)
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Returns an iterator over the names of the influence functions.
    pub fn iter_names() -> impl Iterator<Item = &'static str> {
        InfluenceFunction::iter().map(|f| f.name())
    }
}

impl TryFrom<&str> for InfluenceFunction {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();
        InfluenceFunction::iter()
            .find(|f| f.as_ref() == lowercase)
            .ok_or_else(|| anyhow!(r#"undefined influence function "{}""#, value))
    }
}

impl Display for InfluenceFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: [f64; 7] = [0., 0.1, 0.25, 0.5, 0.6, 0.9, 1.];

    const AGGREGATES: [f64; 15] = [
        -1e300, -1000., -50., -2., -1., -0.5, -0.1, 0., 0.1, 0.5, 1., 2., 50., 1000., 1e300,
    ];

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    macro_rules! test_influence_properties {
        ($function:expr, $suffix:ident) => {
            paste::item! {
    #[test]
    fn [< test_neutrality_ $suffix >] () {
        let f: InfluenceFunction = $function;
        for w in WEIGHTS {
            assert_eq!(w, f.apply(w, f.neutral_aggregate()), "{}({}, 0)", f, w);
        }
        for i in 0..=100 {
            let w = i as f64 / 100.;
            assert_eq!(w, f.apply(w, f.neutral_aggregate()), "{}({}, 0)", f, w);
        }
    }

    #[test]
    fn [< test_monotonicity_ $suffix >] () {
        let f: InfluenceFunction = $function;
        for w in WEIGHTS {
            for pair in AGGREGATES.windows(2) {
                let (low, high) = (f.apply(w, pair[0]), f.apply(w, pair[1]));
                assert!(low <= high, "{}({}, {}) = {} > {}({}, {}) = {}", f, w, pair[0], low, f, w, pair[1], high);
            }
        }
    }

    #[test]
    fn [< test_boundedness_ $suffix >] () {
        let f: InfluenceFunction = $function;
        if !f.is_bounded() {
            return;
        }
        for w in WEIGHTS {
            for s in AGGREGATES {
                let r = f.apply(w, s);
                assert!((0. ..=1.).contains(&r), "{}({}, {}) = {}", f, w, s, r);
            }
        }
    }

    #[test]
    fn [< test_determinism_ $suffix >] () {
        let f: InfluenceFunction = $function;
        for w in WEIGHTS {
            for s in AGGREGATES {
                assert_eq!(f.apply(w, s).to_bits(), f.apply(w, s).to_bits());
            }
        }
    }

    #[test]
    fn [< test_nan_propagation_ $suffix >] () {
        let f: InfluenceFunction = $function;
        assert!(f.apply(f64::NAN, 0.5).is_nan());
        assert!(f.apply(0.5, f64::NAN).is_nan());
        assert!(f.apply(0., f64::NAN).is_nan());
        assert!(f.apply(1., f64::NAN).is_nan());
    }
            }
        };
    }

    test_influence_properties!(InfluenceFunction::Simple, simple);
    test_influence_properties!(InfluenceFunction::Linear1, linear_1);
    test_influence_properties!(InfluenceFunction::EulerBased, euler_based);
    test_influence_properties!(InfluenceFunction::Max21, max_2_1);
    test_influence_properties!(InfluenceFunction::Max11, max_1_1);

    #[test]
    fn test_simple_influence_neutral_is_exact() {
        assert_eq!(0.6, simple_influence(0.6, 0.));
        assert_eq!(0.75, simple_influence(0.5, 0.25));
    }

    #[test]
    fn test_linear_1_values() {
        assert_eq!(0.6, linear_1(0.6, 0.));
        assert_eq!(0.3, linear_1(0.6, -0.5));
        assert_eq!(0., linear_1(0.6, -1.));
        assert_eq!(0., linear_1(0.6, -3.));
        assert_eq!(0.75, linear_1(0.5, 0.5));
        assert_eq!(1., linear_1(0.5, 1.));
        assert_eq!(1., linear_1(0.5, 3.));
    }

    #[test]
    fn test_linear_k() {
        assert_eq!(0.375, linear(0.5, -0.5, 2.));
        assert_eq!(0.625, linear(0.5, 0.5, 2.));
        assert_eq!(1., linear(0.5, 5., 2.));
    }

    #[test]
    fn test_euler_based_values() {
        assert_eq!(0.5, euler_based(0.5, 0.));
        assert_eq!(0.01, euler_based(0.01, 0.));
        assert_close(1. - 0.75 / (1. + 0.5 * std::f64::consts::E), euler_based(0.5, 1.));
        assert_close(0.25, euler_based(0.5, -1e300));
        assert_eq!(1., euler_based(0.5, 1e300));
        assert_eq!(0., euler_based(0., 1e300));
        assert!(euler_based(0., f64::NAN).is_nan());
    }

    #[test]
    fn test_euler_based_matches_closed_form() {
        for w in WEIGHTS {
            for s in [-50., -2., -1., -0.5, -0.1, 0.1, 0.5, 1., 2., 50.] {
                let closed_form = 1. - (1. - w * w) / (1. + w * f64::exp(s));
                assert_close(closed_form, euler_based(w, s));
            }
        }
    }

    #[test]
    fn test_max_2_1_values() {
        assert_eq!(0.75, max_2_1(0.5, 1.));
        assert_eq!(0.25, max_2_1(0.5, -1.));
        assert_close(0.5 + 0.5 * 0.8, max_2_1(0.5, 2.));
        assert_eq!(1., max_2_1(0.5, 1e300));
        assert_eq!(0., max_2_1(0.5, -1e300));
    }

    #[test]
    fn test_max_1_1_values() {
        assert_eq!(0.75, max_1_1(0.5, 1.));
        assert_close(0.5 + 0.5 * 2. / 3., max_1_1(0.5, 2.));
        assert_close(0.5 - 0.5 * 2. / 3., max_1_1(0.5, -2.));
    }

    #[test]
    fn test_max_2_1_is_more_aggressive_than_max_1_1() {
        for s in [1.5, 2., 5., 10.] {
            assert!(max_2_1(0.5, s) > max_1_1(0.5, s));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(
            vec!["simple", "linear-1", "euler-based", "max-2-1", "max-1-1"],
            InfluenceFunction::iter_names().collect::<Vec<&str>>()
        );
        for f in InfluenceFunction::iter() {
            assert_eq!(f, InfluenceFunction::try_from(f.name()).unwrap());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = InfluenceFunction::try_from("quadratic").unwrap_err();
        assert_eq!(r#"undefined influence function "quadratic""#, err.to_string());
    }
}
