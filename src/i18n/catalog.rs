// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for hashroute.
//!
//! Embeds all chrome strings for the supported languages as compile-time
//! static tables. Lookup is O(n) on the key list per language, which is fine
//! for the ~10 keys we have — this runs once per navigation, not in a hot
//! loop.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the Japanese entry to `JA` (source language)
//! 2. Add the translation to `EN` (missing keys fall back to Japanese)

use serde::{Deserialize, Serialize};

/// Supported site languages.
///
/// Each variant maps to an ISO 639-1 two-letter code, which is also the
/// locale segment of the location fragment (`#/<locale>/...`) and the
/// directory name under `locales/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ja,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }

    /// Parse a locale segment into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1); the router treats anything that fails here
    /// as a malformed location to be corrected.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ja" => Some(Lang::Ja),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// All supported languages, in locale-switcher display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Ja, Lang::En]
    }

    /// Native display name, used as the locale-switcher entry label.
    pub fn native_name(&self) -> &'static str {
        t(*self, "ui.lang_name")
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ja
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to Japanese (the source language) if the key is not found in
/// the requested language. If the key is missing there too, returns the
/// empty string — UI sync skips empty values, leaving the element unchanged
/// (fail-open design, never panics).
///
/// # Examples
///
/// ```
/// use hashroute::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "ui.recent_news"), "Recent News");
/// assert_eq!(t(Lang::Ja, "ui.recent_news"), "最新ニュース");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::Ja {
        if let Some(value) = lookup(JA, key) {
            return value;
        }
    }
    ""
}

/// Non-static variant: returns the translation or the key itself if missing.
/// Useful for diagnostics where a blank label would be confusing.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Ja => JA,
        Lang::En => EN,
    }
}

// ─── Japanese (source language — all keys defined here) ─────────────

const JA: &[(&str, &str)] = &[
    // Chrome strings applied to locale-tagged elements
    ("ui.title", "xReality・知的解析研究室"),
    ("ui.footer", "&copy; 2025 xReality・知的解析研究室"),
    ("ui.lang_name", "日本語"),
    ("ui.recent_news", "最新ニュース"),
    ("ui.show_more", "もっと表示する"),
    // Roster sections
    ("roster.graduates", "卒業"),
    // Navigation degradation
    ("nav.load_failed", "ナビゲーションを読み込めませんでした"),
    // Content-region error blocks
    ("error.not_found", "コンテンツが見つかりません"),
    ("error.load_failed", "コンテンツを読み込めませんでした"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("ui.title", "xReality & Intellectual Analysis Laboratory"),
    ("ui.footer", "&copy; 2025 xReality & Intellectual Analysis Laboratory"),
    ("ui.lang_name", "English"),
    ("ui.recent_news", "Recent News"),
    ("ui.show_more", "Show More"),
    ("roster.graduates", "Graduates"),
    ("nav.load_failed", "Failed to load navigation"),
    ("error.not_found", "Content not found"),
    ("error.load_failed", "Content could not be loaded."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_keys_all_resolve() {
        for &(key, _) in JA {
            let result = t(Lang::Ja, key);
            assert!(!result.is_empty(), "JA key '{}' should resolve", key);
        }
    }

    #[test]
    fn english_mirrors_every_japanese_key() {
        assert_eq!(EN.len(), JA.len(), "EN catalog key count mismatch");
        for &(key, _) in JA {
            assert!(
                lookup(EN, key).is_some(),
                "EN catalog is missing key '{}'",
                key
            );
        }
    }

    #[test]
    fn fallback_to_japanese() {
        for lang in Lang::all() {
            let val = t(*lang, "ui.title");
            assert!(!val.is_empty(), "{:?} should have ui.title", lang);
        }
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "");
    }

    #[test]
    fn t_or_key_returns_key_for_missing() {
        assert_eq!(t_or_key(Lang::En, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn default_language_is_japanese() {
        assert_eq!(Lang::default(), Lang::Ja);
    }

    #[test]
    fn unsupported_code_rejected() {
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("JA"), None);
        assert_eq!(Lang::from_code(""), None);
    }
}
