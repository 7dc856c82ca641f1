//! End-to-end scenario tests for the dose tracker.
//!
//! The tests drive the real shell with a file-backed preference store and a
//! fixed clock, across simulated restarts.

pub mod helpers;
