//! Bounded counter state.
//!
//! The counter is clamped to an inclusive `[min, max]` range. Moving past a
//! bound is a structural no-op, not an error: the UI disables the offending
//! button, so a rejected mutation never surfaces to the user. Mutations report
//! the transition they performed so callers can react to the change event
//! itself (the confetti trigger is edge-triggered, not level-triggered).

use serde::{Deserialize, Serialize};

use crate::threshold::Threshold;

/// Counter configuration, settable via host attributes.
///
/// `confetti_trigger` may lie outside `[min, max]`; the celebration then never
/// fires. `min < max` is a construction contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub min: i32,
    pub max: i32,
    pub confetti_trigger: i32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            min: -10,
            max: 25,
            confetti_trigger: 21,
        }
    }
}

/// A single completed value change, `from != to` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: i32,
    pub to: i32,
}

impl Transition {
    /// True iff this change landed on `trigger`.
    ///
    /// Because a `Transition` only exists when the value actually moved, this
    /// is edge-triggered: it holds on entry into the trigger value and never
    /// while merely sitting on it.
    pub fn crossed_into(&self, trigger: i32) -> bool {
        self.to == trigger
    }
}

/// Integer counter clamped to an inclusive range.
///
/// # Examples
/// ```
/// use tally_types::{BoundedCounter, CounterConfig};
///
/// let mut counter = BoundedCounter::new(0, CounterConfig::default());
/// assert_eq!(counter.value(), 0);
/// counter.increment();
/// assert_eq!(counter.value(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i32,
    config: CounterConfig,
}

impl BoundedCounter {
    /// Create a counter at `start`, clamped into the configured range so the
    /// bounds invariant holds from construction onward.
    pub fn new(start: i32, config: CounterConfig) -> Self {
        debug_assert!(config.min < config.max, "counter range must be non-empty");
        Self {
            value: start.clamp(config.min, config.max),
            config,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn at_min(&self) -> bool {
        self.value == self.config.min
    }

    pub fn at_max(&self) -> bool {
        self.value == self.config.max
    }

    /// Classify the current value for display styling.
    pub fn threshold(&self) -> Threshold {
        Threshold::classify(self.value, self.config.min, self.config.max)
    }

    /// Step up by one, saturating at `max`. Returns the transition that
    /// occurred, or `None` if the counter was already at the upper bound.
    pub fn increment(&mut self) -> Option<Transition> {
        if self.value < self.config.max {
            let from = self.value;
            self.value += 1;
            Some(Transition {
                from,
                to: self.value,
            })
        } else {
            None
        }
    }

    /// Step down by one, saturating at `min`.
    pub fn decrement(&mut self) -> Option<Transition> {
        if self.value > self.config.min {
            let from = self.value;
            self.value -= 1;
            Some(Transition {
                from,
                to: self.value,
            })
        } else {
            None
        }
    }
}
