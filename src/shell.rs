// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host surface capability.
//!
//! The DOM, the location bar, and the theme's widgets all live on the host
//! side of this trait. The core only ever pushes strings through it and
//! reads the current fragment back; a browser host maps the calls onto its
//! document, [`BufferShell`] records them for the CLI and tests.

/// Capability interface for the page surface the router renders into.
///
/// The widget hooks default to no-ops: hosts without a dropdown or a
/// collapsible navbar simply ignore them.
pub trait Shell {
    /// Replace the content region.
    fn set_content(&mut self, html: &str);
    /// Append to the content region (home-page news augmentation).
    fn append_content(&mut self, html: &str);
    /// Replace the navigation list's contents.
    fn set_nav(&mut self, html: &str);
    /// Apply one localized chrome string to its tagged elements.
    fn set_ui_string(&mut self, key: &str, value: &str);
    /// Replace the locale-switcher menu.
    fn set_switcher_menu(&mut self, html: &str);
    /// Replace the locale-switcher button label.
    fn set_switcher_button(&mut self, html: &str);
    /// Current location fragment (with or without the leading `#`).
    fn fragment(&self) -> String;
    /// Replace the location fragment. On a browser host this re-triggers
    /// routing via the fragment-change event.
    fn set_fragment(&mut self, fragment: &str);
    /// Re-initialize the dropdown widget after the switcher menu changed.
    fn reinit_dropdown(&mut self) {}
    /// Close the locale dropdown after a selection.
    fn close_dropdown(&mut self) {}
    /// Collapse the mobile navigation after a nav click.
    fn collapse_nav(&mut self) {}
}

/// Recording shell: keeps the last write to every region.
///
/// Backs the authoring CLI (print what would have been injected) and the
/// integration tests (assert on what was injected).
#[derive(Debug, Default)]
pub struct BufferShell {
    pub content: String,
    pub nav: String,
    pub switcher_menu: String,
    pub switcher_button: String,
    pub fragment: String,
    pub ui_strings: Vec<(String, String)>,
    pub dropdown_reinits: usize,
    pub dropdown_closes: usize,
    pub nav_collapses: usize,
}

impl BufferShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a given location fragment.
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            ..Self::default()
        }
    }
}

impl Shell for BufferShell {
    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
    }

    fn append_content(&mut self, html: &str) {
        self.content.push_str(html);
    }

    fn set_nav(&mut self, html: &str) {
        self.nav = html.to_string();
    }

    fn set_ui_string(&mut self, key: &str, value: &str) {
        self.ui_strings.push((key.to_string(), value.to_string()));
    }

    fn set_switcher_menu(&mut self, html: &str) {
        self.switcher_menu = html.to_string();
    }

    fn set_switcher_button(&mut self, html: &str) {
        self.switcher_button = html.to_string();
    }

    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    fn reinit_dropdown(&mut self) {
        self.dropdown_reinits += 1;
    }

    fn close_dropdown(&mut self) {
        self.dropdown_closes += 1;
    }

    fn collapse_nav(&mut self) {
        self.nav_collapses += 1;
    }
}
