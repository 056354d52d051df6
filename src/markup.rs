// SPDX-License-Identifier: PMPL-1.0-or-later

//! Markup-to-HTML conversion capability.
//!
//! The conversion engine is an external collaborator: the core treats it as
//! a pure function from lightweight-markup text to an HTML string and never
//! re-implements it. Table wrapping and link rewriting happen *after*
//! conversion, on the HTML, so any engine works.
//!
//! The `markdown` cargo feature (on by default) provides [`CommonMark`], a
//! concrete adapter over pulldown-cmark with GFM tables enabled, used by the
//! authoring CLI and the integration tests.

/// Capability interface for the external markup engine.
pub trait MarkupEngine {
    fn to_html(&self, text: &str) -> String;
}

/// CommonMark adapter with GFM tables and strikethrough enabled.
#[cfg(feature = "markdown")]
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

#[cfg(feature = "markdown")]
impl MarkupEngine for CommonMark {
    fn to_html(&self, text: &str) -> String {
        use pulldown_cmark::{html, Options, Parser};

        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(text, options);
        let mut out = String::with_capacity(text.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(all(test, feature = "markdown"))]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_links() {
        let html = CommonMark.to_html("# Title\n\n[lab](/research)");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("href=\"/research\""));
    }

    #[test]
    fn renders_gfm_tables() {
        let html = CommonMark.to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"), "tables must be enabled: {html}");
    }
}
