use super::{AggregationFunction, InfluenceFunction};
use anyhow::{anyhow, Context, Result};
use std::fmt::Display;

/// A pair made of an aggregation function and an influence function.
///
/// A strategy computes the revised strength of a single argument for a single revision step.
/// The choice of the pair, the order in which arguments are revised and the convergence policy are left to the caller.
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::{AggregationFunction, InfluenceFunction, Strategy};
/// let strategy = Strategy::new(AggregationFunction::Sum, InfluenceFunction::Simple);
/// assert_eq!(0.75, strategy.revise(0.5, vec![0.125, 0.125]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    aggregation: AggregationFunction,
    influence: InfluenceFunction,
}

impl Strategy {
    /// Builds a new strategy.
    pub fn new(aggregation: AggregationFunction, influence: InfluenceFunction) -> Self {
        Self {
            aggregation,
            influence,
        }
    }

    /// Returns the aggregation function of this strategy.
    pub fn aggregation(&self) -> AggregationFunction {
        self.aggregation
    }

    /// Returns the influence function of this strategy.
    pub fn influence(&self) -> InfluenceFunction {
        self.influence
    }

    /// Folds the aggregation function over the strengths.
    ///
    /// See [`AggregationFunction::aggregate`].
    pub fn aggregate<I>(&self, strengths: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        self.aggregation.aggregate(strengths)
    }

    /// Computes the revised strength of an argument given its base weight and the strengths to aggregate.
    ///
    /// An argument with no strengths to aggregate keeps its base weight:
    /// the influence function is then applied to its neutral aggregate instead of the identity element of the aggregation function.
    ///
    /// ```
    /// # use qbaf_functions::functions::{AggregationFunction, InfluenceFunction, Strategy};
    /// let strategy = Strategy::new(AggregationFunction::Top, InfluenceFunction::Linear1);
    /// assert_eq!(0.6, strategy.revise(0.6, vec![]));
    /// ```
    pub fn revise<I>(&self, base_weight: f64, strengths: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let mut strengths = strengths.into_iter().peekable();
        let aggregate = if strengths.peek().is_none() {
            self.influence.neutral_aggregate()
        } else {
            self.aggregate(strengths)
        };
        self.influence.apply(base_weight, aggregate)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.aggregation, self.influence)
    }
}

/// Reads a string depicting a strategy with an AGGREGATION:INFLUENCE pattern.
///
/// The string is split at the first colon found in it.
/// The substring before it is the name of the aggregation function, while the substring after it is the name of the influence function.
///
/// In case there is no colon, or if a name is undefined, an error is returned.
///
/// # Example
///
/// ```
/// # use qbaf_functions::functions::{read_strategy_string, AggregationFunction, InfluenceFunction};
/// let strategy = read_strategy_string("product:euler-based").unwrap();
/// assert_eq!(AggregationFunction::Product, strategy.aggregation());
/// assert_eq!(InfluenceFunction::EulerBased, strategy.influence());
/// ```
pub fn read_strategy_string(strategy: &str) -> Result<Strategy> {
    let context = || format!(r#"while parsing strategy string "{}""#, strategy);
    match strategy.find(':') {
        Some(n) => {
            let aggregation =
                AggregationFunction::try_from(strategy[0..n].trim()).with_context(context)?;
            let influence =
                InfluenceFunction::try_from(strategy[1 + n..].trim()).with_context(context)?;
            Ok(Strategy::new(aggregation, influence))
        }
        None => Err(anyhow!("no colon in strategy string")).with_context(context),
    }
}
