//! # dose-decay: First-order decay engine.
//!
//! Implements [`dose_core::traits::DecayCalculator`] for a single dose:
//! - **Exponential decay**: remaining percentage is `100 * 0.5^(t / T)` for
//!   elapsed hours `t` and half-life `T`.
//! - **Millisecond elapsed time**: timestamps are differenced at millisecond
//!   precision before conversion to hours.
//! - **Explicit future doses**: a dose after the evaluation time is reported
//!   as [`dose_core::types::Remaining::FutureDose`], never as a number.

pub mod engine;

pub use engine::HalfLifeEngine;
