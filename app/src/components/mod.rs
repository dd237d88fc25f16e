//! UI Components
//!
//! The counter widget itself plus the confetti container it celebrates with
//! and the locale context that feeds its labels.

pub mod confetti;
pub mod counter;
pub mod locale;

pub use confetti::ConfettiContainer;
pub use counter::CounterApp;
pub use locale::{LocaleContext, use_locale, use_locale_provider};
