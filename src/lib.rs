//! Aggregation and influence functions for Quantitative Bipolar Argumentation Frameworks (QBAF).
//!
//! A strength-propagation engine computes, for each argument, an aggregate of the strengths of its attackers and supporters,
//! and then combines this aggregate with the base weight of the argument to get its revised strength.
//! This crate provides the two families of functions used in these steps, selectable by name.

#![warn(missing_docs)]

pub mod functions;
