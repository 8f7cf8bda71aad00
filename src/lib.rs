//! `credit-rater` library crate.
//!
//! Estimates a credit rating from an industry scorecard: each leaf factor's value is
//! converted onto a common numeric axis, weighted, summed and mapped to a rating
//! label through an aggregate band table. The `credit-rater` binary is a thin
//! wrapper around [`data::DataSnapshot`] and [`scoring::score`].

pub mod check;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod scoring;
pub mod telemetry;
pub mod types;
