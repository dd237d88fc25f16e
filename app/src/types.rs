//! Frontend type definitions
//!
//! Re-exports the shared widget types from tally-types so component code has a
//! single import path.

pub use tally_types::{BoundedCounter, CounterConfig, Labels, Locale, Threshold, Transition};
