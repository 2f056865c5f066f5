//! Fluent bundle loading with lazy static initialization.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use hwbot_common::{HwbotError, Result};
use once_cell::sync::OnceCell;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Locale of the embedded catalog.
pub const CATALOG_LOCALE: &str = "ru-RU";

const CATALOG_SOURCE: &str = include_str!("../locales/ru-RU/messages.ftl");

static CATALOG: OnceCell<MessageCatalog> = OnceCell::new();

/// Returns the process-wide catalog, parsing it on first use.
pub fn catalog() -> Result<&'static MessageCatalog> {
    CATALOG.get_or_try_init(MessageCatalog::load)
}

/// Parsed message catalog.
pub struct MessageCatalog {
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locale", &CATALOG_LOCALE)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog {
    /// Parses the embedded catalog.
    pub fn load() -> Result<Self> {
        Self::from_source(CATALOG_SOURCE)
    }

    /// Parses a catalog from Fluent source text.
    pub fn from_source(source: &str) -> Result<Self> {
        let locale: LanguageIdentifier = CATALOG_LOCALE
            .parse()
            .map_err(|e| HwbotError::localization(format!("invalid locale {CATALOG_LOCALE}: {e}")))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            HwbotError::localization(format!("failed to parse message catalog: {errors:?}"))
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        // Chat text must be byte-exact, without Unicode isolation marks around arguments
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            HwbotError::localization(format!("failed to add message catalog: {errors:?}"))
        })?;

        debug!(locale = CATALOG_LOCALE, "Message catalog loaded");
        Ok(Self { bundle })
    }

    /// Whether the catalog defines a message.
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Formats a message with optional arguments.
    pub fn format(&self, id: &str, args: Option<&FluentArgs<'_>>) -> Result<String> {
        let message = self
            .bundle
            .get_message(id)
            .ok_or_else(|| HwbotError::localization_key("message not found", id))?;
        let pattern = message
            .value()
            .ok_or_else(|| HwbotError::localization_key("message has no value", id))?;

        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            return Err(HwbotError::localization_key(
                format!("failed to format message: {errors:?}"),
                id,
            ));
        }

        Ok(text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog().unwrap();
        assert!(catalog.has_message("status-changed"));
        assert!(!catalog.has_message("does-not-exist"));
    }

    #[test]
    fn test_catalog_is_shared() {
        let first = catalog().unwrap();
        let second = catalog().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_invalid_source_rejected() {
        let err = MessageCatalog::from_source("broken = { $unterminated").unwrap_err();
        assert_eq!(err.kind(), "localization");
    }

    #[test]
    fn test_missing_message() {
        let err = catalog().unwrap().format("nope", None).unwrap_err();
        assert!(matches!(err, HwbotError::Localization { key: Some(ref k), .. } if k == "nope"));
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let err = catalog().unwrap().format("status-changed", None).unwrap_err();
        assert_eq!(err.kind(), "localization");
    }
}
