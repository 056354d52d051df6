// SPDX-License-Identifier: PMPL-1.0-or-later

//! UI sync models: chrome strings and the locale-switcher control.

use crate::i18n::{t, Lang};

/// Keys the page chrome tags its elements with.
const UI_KEYS: &[&str] = &["ui.title", "ui.footer", "ui.recent_news", "ui.show_more"];

/// Localized strings for every locale-tagged element.
///
/// A key with no value in the catalog is omitted — the shell leaves such
/// elements unchanged, per the fail-open catalog contract.
pub fn ui_strings(lang: Lang) -> Vec<(&'static str, &'static str)> {
    UI_KEYS
        .iter()
        .map(|key| (*key, t(lang, key)))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

/// Locale-switcher menu rebuilt from the locale table, with the current
/// locale's entry marked active. Entries carry `data-lang` so the host's
/// delegated click handler can hand the code back to the `App`.
pub fn switcher_menu(current: Lang) -> String {
    let mut html = String::new();
    for lang in Lang::all() {
        let active = if *lang == current { " active" } else { "" };
        html.push_str(&format!(
            r##"<li><a class="dropdown-item{active}" href="#" data-lang="{code}">{name}</a></li>"##,
            code = lang.code(),
            name = lang.native_name(),
        ));
    }
    html
}

/// Label for the switcher toggle button.
pub fn switcher_button(current: Lang) -> String {
    format!(
        r#"<i class="fas fa-globe"></i> {}"#,
        current.native_name()
    )
}
