//! Locale resolution: narrows an untrusted route segment to a `Locale`.

use crate::error::AppError;
use crate::i18n::Locale;
use tracing::debug;

impl Locale {
    /// Resolve a candidate locale string against the registry.
    ///
    /// Matching is exact: `"EN"` or `"en-US"` are not members. A miss is a
    /// not-found outcome, never a substitution of the default locale.
    ///
    /// # Example
    /// ```ignore
    /// let locale = Locale::resolve("ar")?;
    /// ```
    pub fn resolve(candidate: &str) -> Result<Locale, AppError> {
        match Locale::ALL.iter().find(|locale| locale.code() == candidate) {
            Some(locale) => Ok(*locale),
            None => {
                debug!("Rejected locale '{}'", candidate);
                Err(AppError::LocaleNotFound(candidate.to_string()))
            }
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::resolve(s)
    }
}
