//! Scenario tests for the counter state machine.
//!
//! Exercises the widget contract end to end: bounds invariant over all
//! reachable states, enabled-action edges, and the edge-triggered confetti
//! semantics the UI layer relies on.

use crate::counter::{BoundedCounter, CounterConfig};
use crate::threshold::Threshold;

/// Mimic the UI handler: mutate, then count a celebration iff the resulting
/// transition landed on the trigger.
fn step(counter: &mut BoundedCounter, up: bool, celebrations: &mut u32) {
    let transition = if up {
        counter.increment()
    } else {
        counter.decrement()
    };
    if let Some(t) = transition
        && t.crossed_into(counter.config().confetti_trigger)
    {
        *celebrations += 1;
    }
}

#[test]
fn bounds_invariant_holds_over_random_walk() {
    let config = CounterConfig::default();
    let mut counter = BoundedCounter::new(0, config);
    let mut celebrations = 0;

    // Deterministic zig-zag that hammers both bounds.
    for i in 0..500 {
        let up = (i / 40) % 2 == 0;
        step(&mut counter, up, &mut celebrations);
        assert!(counter.value() >= config.min);
        assert!(counter.value() <= config.max);
    }
}

#[test]
fn only_one_action_enabled_at_each_bound() {
    let config = CounterConfig::default();

    let floor = BoundedCounter::new(config.min, config);
    assert!(floor.at_min());
    assert!(!floor.at_max());

    let ceiling = BoundedCounter::new(config.max, config);
    assert!(ceiling.at_max());
    assert!(!ceiling.at_min());

    let interior = BoundedCounter::new(0, config);
    assert!(!interior.at_min());
    assert!(!interior.at_max());
}

#[test]
fn twenty_one_increments_from_zero() {
    // Defaults: min -10, max 25, trigger 21. Start at 0, press +1 twenty-one
    // times: value 21, exactly one celebration, styled with the 21 class.
    let mut counter = BoundedCounter::new(0, CounterConfig::default());
    let mut celebrations = 0;

    for _ in 0..21 {
        step(&mut counter, true, &mut celebrations);
    }

    assert_eq!(counter.value(), 21);
    assert_eq!(celebrations, 1);
    assert_eq!(counter.threshold(), Threshold::TwentyOne);
}

#[test]
fn construction_at_trigger_does_not_celebrate() {
    // No transition happened, so nothing may fire; the next mutation moves
    // away from the trigger and must not fire either.
    let mut counter = BoundedCounter::new(21, CounterConfig::default());
    let mut celebrations = 0;

    step(&mut counter, false, &mut celebrations);
    assert_eq!(counter.value(), 20);
    assert_eq!(celebrations, 0);
}

#[test]
fn celebration_refires_after_leaving_and_returning() {
    let mut counter = BoundedCounter::new(20, CounterConfig::default());
    let mut celebrations = 0;

    step(&mut counter, true, &mut celebrations); // 20 -> 21
    assert_eq!(celebrations, 1);

    step(&mut counter, true, &mut celebrations); // 21 -> 22
    step(&mut counter, false, &mut celebrations); // 22 -> 21, fires again
    assert_eq!(celebrations, 2);

    step(&mut counter, false, &mut celebrations); // 21 -> 20
    assert_eq!(celebrations, 2);
}

#[test]
fn saturated_mutation_never_celebrates() {
    // Trigger on the bound: entering it fires once, pressing again at the
    // bound is a no-op and must not re-fire.
    let config = CounterConfig {
        min: 0,
        max: 5,
        confetti_trigger: 5,
    };
    let mut counter = BoundedCounter::new(4, config);
    let mut celebrations = 0;

    step(&mut counter, true, &mut celebrations); // 4 -> 5
    assert_eq!(celebrations, 1);

    step(&mut counter, true, &mut celebrations); // no-op at max
    step(&mut counter, true, &mut celebrations);
    assert_eq!(counter.value(), 5);
    assert_eq!(celebrations, 1);
}

#[test]
fn trigger_outside_bounds_never_fires() {
    let config = CounterConfig {
        min: -10,
        max: 25,
        confetti_trigger: 40,
    };
    let mut counter = BoundedCounter::new(0, config);
    let mut celebrations = 0;

    for _ in 0..50 {
        step(&mut counter, true, &mut celebrations);
    }
    assert_eq!(counter.value(), 25);
    assert_eq!(celebrations, 0);
}
