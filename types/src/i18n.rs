//! Localized label dictionary.
//!
//! Labels cover the widget chrome (title prefix, button tooltips); they are
//! not load-bearing for the counter logic. Unknown locale tags fall back to
//! English rather than erroring, matching how a host attribute would be
//! treated.

use serde::{Deserialize, Serialize};

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
    Es,
    Hi,
    Zh,
}

impl Locale {
    /// Parse a BCP 47-ish language tag, ignoring any region subtag
    /// (`"es-MX"` resolves to `Es`). Returns `None` for unsupported languages.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next().unwrap_or(tag);
        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            "es" => Some(Locale::Es),
            "hi" => Some(Locale::Hi),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Es => "es",
            Locale::Hi => "hi",
            Locale::Zh => "zh",
        }
    }
}

/// Widget labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub increment: &'static str,
    pub decrement: &'static str,
}

const EN: Labels = Labels {
    title: "Title",
    increment: "Increment",
    decrement: "Decrement",
};

const AR: Labels = Labels {
    title: "العنوان",
    increment: "زيادة",
    decrement: "إنقاص",
};

const ES: Labels = Labels {
    title: "Título",
    increment: "Incrementar",
    decrement: "Decrementar",
};

const HI: Labels = Labels {
    title: "शीर्षक",
    increment: "बढ़ाएँ",
    decrement: "घटाएँ",
};

const ZH: Labels = Labels {
    title: "标题",
    increment: "增加",
    decrement: "减少",
};

impl Labels {
    /// Look up the label set for a locale.
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ar => &AR,
            Locale::Es => &ES,
            Locale::Hi => &HI,
            Locale::Zh => &ZH,
        }
    }
}
