//! This module contains the functions used to compute argument strengths in a QBAF.
//!
//! Two families of functions are defined here.
//! [`AggregationFunction`] values combine the strengths of the attackers (or supporters) of an argument into an aggregate,
//! while [`InfluenceFunction`] values combine the base weight of an argument with this aggregate to get its revised strength.
//! Both families can be selected by their name, and a pair of them is handled by a [`Strategy`].

mod aggregation;
pub use aggregation::product;
pub use aggregation::sum;
pub use aggregation::top;
pub use aggregation::AggregationFunction;

mod influence;
pub use influence::euler_based;
pub use influence::linear;
pub use influence::linear_1;
pub use influence::max_1_1;
pub use influence::max_2_1;
pub use influence::p_max;
pub use influence::simple_influence;
pub use influence::InfluenceFunction;

mod strategy;
pub use strategy::read_strategy_string;
pub use strategy::Strategy;
