//! Locale context for widget labels.
//!
//! Provides the active locale via context, with the label dictionary resolved
//! from it. Access via `use_locale()` from any component below the provider.

use dioxus::prelude::*;

use crate::types::{Labels, Locale};

/// Shared locale state for one widget tree.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    locale: Signal<Locale>,
}

impl LocaleContext {
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    /// Label set for the active locale.
    pub fn labels(&self) -> &'static Labels {
        Labels::for_locale(self.locale())
    }

    /// Switch the active locale; dependent components re-render.
    pub fn set(&mut self, locale: Locale) {
        self.locale.set(locale);
    }
}

/// Install the locale context at the widget root.
pub fn use_locale_provider(initial: Locale) -> LocaleContext {
    use_context_provider(|| LocaleContext {
        locale: Signal::new(initial),
    })
}

/// Get the locale context from any descendant component.
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}
