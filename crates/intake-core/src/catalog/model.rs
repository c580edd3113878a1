//! Catalog domain model.

use serde::{Deserialize, Serialize};

/// Supported interface languages (a fixed, closed set).
///
/// The discriminant doubles as the index into [`Catalog::entries`], so the
/// lookup is total: every `Lang` has an entry by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    En,
    Ru,
    Es,
    Zh,
    Fr,
}

impl Lang {
    /// All supported languages, in language-menu order.
    pub const ALL: [Lang; 5] = [Lang::En, Lang::Ru, Lang::Es, Lang::Zh, Lang::Fr];

    /// The fixed baseline language used whenever a session has not picked one.
    pub const DEFAULT: Lang = Lang::En;

    /// The wire code for this language (the value carried in menu tokens).
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Es => "es",
            Lang::Zh => "zh",
            Lang::Fr => "fr",
        }
    }

    /// Parses a wire code back into a language.
    ///
    /// Returns `None` for codes outside the supported set; the caller decides
    /// whether that is an invalid-selection error.
    pub fn from_code(code: &str) -> Option<Lang> {
        Lang::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::DEFAULT
    }
}

/// The localized content record for one language.
///
/// Template strings support at most one named placeholder each (`{name}` or
/// `{lang_name}`); rendering is plain substring replacement.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Language name in its own language (fills `{lang_name}`)
    pub native_name: &'static str,
    /// Label used on the language-choice menu
    pub menu_label: &'static str,
    /// Greeting shown on start/restart (placeholder: `{name}`)
    pub greeting: &'static str,
    /// Confirmation shown after a language pick (placeholder: `{lang_name}`)
    pub welcome: &'static str,
    /// Prompt for the wallet identifier
    pub wallet_prompt: &'static str,
    /// Hand-off message pointing the user at a human operator
    pub operator: &'static str,
    /// Feedback for an over-long wallet identifier
    pub wallet_too_long: &'static str,
    /// Reply to a status probe
    pub online: &'static str,
    /// Label of the back button
    pub back_label: &'static str,
    /// Label of the restart button
    pub restart_label: &'static str,
    /// The three frames of the processing animation, in order
    pub processing_frames: [&'static str; 3],
    /// Ordered issue-category labels
    pub issues: &'static [&'static str],
}

impl CatalogEntry {
    /// Renders the greeting with the user's display name.
    pub fn greeting_for(&self, name: &str) -> String {
        self.greeting.replace("{name}", name)
    }

    /// Renders the welcome message with this language's native name.
    pub fn welcome_message(&self) -> String {
        self.welcome.replace("{lang_name}", self.native_name)
    }
}

/// Static, read-only mapping from language to localized content.
///
/// One entry per [`Lang`], indexed by discriminant.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    entries: [CatalogEntry; Lang::ALL.len()],
}

impl Catalog {
    /// Creates a catalog from one entry per supported language, in
    /// [`Lang::ALL`] order.
    pub const fn new(entries: [CatalogEntry; Lang::ALL.len()]) -> Self {
        Self { entries }
    }

    /// Looks up the entry for a language. Never fails.
    pub fn entry(&self, lang: Lang) -> &CatalogEntry {
        &self.entries[lang as usize]
    }

    /// Looks up the entry for the fixed baseline language.
    pub fn default_entry(&self) -> &CatalogEntry {
        self.entry(Lang::DEFAULT)
    }

    /// Resolves a wire code to its language and entry.
    pub fn entry_for_code(&self, code: &str) -> Option<(Lang, &CatalogEntry)> {
        Lang::from_code(code).map(|lang| (lang, self.entry(lang)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn test_lang_code_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_entry_lookup_is_total() {
        let catalog = builtin_catalog();
        for lang in Lang::ALL {
            let entry = catalog.entry(lang);
            assert!(!entry.issues.is_empty());
            assert!(!entry.native_name.is_empty());
        }
    }

    #[test]
    fn test_greeting_substitutes_name() {
        let entry = builtin_catalog().default_entry();
        let rendered = entry.greeting_for("Alice");
        assert!(rendered.contains("Alice"));
        assert!(!rendered.contains("{name}"));
    }

    #[test]
    fn test_welcome_substitutes_native_name() {
        let catalog = builtin_catalog();
        let rendered = catalog.entry(Lang::Ru).welcome_message();
        assert!(rendered.contains("Русский"));
        assert!(!rendered.contains("{lang_name}"));
    }
}
