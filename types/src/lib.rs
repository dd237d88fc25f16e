//! Shared types for the Tally counter widget.
//!
//! Everything in this crate is framework-free: the bounded counter state
//! machine, the threshold classifier that drives display styling, and the
//! localized label dictionary. The `tally-ui` crate wires these into the
//! Dioxus front end.

pub mod counter;
pub mod i18n;
pub mod threshold;

#[cfg(test)]
mod counter_tests;

pub use counter::{BoundedCounter, CounterConfig, Transition};
pub use i18n::{Labels, Locale};
pub use threshold::Threshold;
