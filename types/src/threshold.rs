//! Threshold classification for the counter display.
//!
//! The 18 and 21 breakpoints are deliberate literals (age thresholds), not the
//! configured bounds, and the bound check takes precedence over both: a
//! counter whose `max` happens to be 21 shows the boundary styling at 21.

/// Display category for a counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Value sits on either configured bound.
    Boundary,
    /// Value is exactly 21, regardless of the configured bounds.
    TwentyOne,
    /// Value is exactly 18, regardless of the configured bounds.
    Eighteen,
    /// Anything else.
    Default,
}

impl Threshold {
    /// Classify `value` against the configured bounds.
    ///
    /// Branches are evaluated in this order: boundary, 21, 18, default.
    ///
    /// # Examples
    /// ```
    /// use tally_types::Threshold;
    /// assert_eq!(Threshold::classify(-10, -10, 25), Threshold::Boundary);
    /// assert_eq!(Threshold::classify(21, -10, 25), Threshold::TwentyOne);
    /// assert_eq!(Threshold::classify(18, -10, 25), Threshold::Eighteen);
    /// assert_eq!(Threshold::classify(5, -10, 25), Threshold::Default);
    /// ```
    pub fn classify(value: i32, min: i32, max: i32) -> Self {
        if value == min || value == max {
            Threshold::Boundary
        } else if value == 21 {
            Threshold::TwentyOne
        } else if value == 18 {
            Threshold::Eighteen
        } else {
            Threshold::Default
        }
    }

    /// CSS class applied to the counter display for this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            Threshold::Boundary => "max",
            Threshold::TwentyOne => "threshold-21",
            Threshold::Eighteen => "threshold-18",
            Threshold::Default => "",
        }
    }
}
