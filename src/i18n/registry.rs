//! Locale registry: single source of truth for all supported locales.
//!
//! The set of locales is closed and fixed at compile time. Every locale the
//! console ever works with is one of the `Locale` variants below; nothing at
//! runtime can synthesize another one.

use serde::Serialize;

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Static metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale identifier used in route prefixes and bundle names (e.g. "fa")
    pub code: &'static str,

    /// English name of the language (e.g. "Persian")
    pub name: &'static str,

    /// Native name of the language (e.g. "فارسی")
    pub native_name: &'static str,

    /// Script direction, drives the document `dir` attribute
    pub direction: Direction,
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fa,
    En,
    Ar,
}

const FA: LocaleConfig = LocaleConfig {
    code: "fa",
    name: "Persian",
    native_name: "فارسی",
    direction: Direction::Rtl,
};

const EN: LocaleConfig = LocaleConfig {
    code: "en",
    name: "English",
    native_name: "English",
    direction: Direction::Ltr,
};

const AR: LocaleConfig = LocaleConfig {
    code: "ar",
    name: "Arabic",
    native_name: "العربية",
    direction: Direction::Rtl,
};

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 3] = [Locale::Fa, Locale::En, Locale::Ar];

    /// The locale used when a request carries no locale prefix.
    pub const DEFAULT: Locale = Locale::Fa;

    /// Get the static configuration for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        match self {
            Locale::Fa => &FA,
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }

    /// Locale identifier (e.g. "en").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::DEFAULT
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
