// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation builder: locale-scoped link list from the navigation document.

use crate::fetch::ContentFetcher;
use crate::i18n::t;
use crate::markup::MarkupEngine;
use crate::types::RenderCtx;
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

/// Build the navigation list for the given locale.
///
/// Fetches `locales/<locale>/navigation.md`, converts it, extracts every
/// link, and rewrites each href to the locale-scoped hash form: the root
/// path maps to the locale root, everything else gets the locale prefix.
/// Fetch failure degrades to a single visible placeholder item — navigation
/// never blocks primary content.
pub fn build_nav<F: ContentFetcher, M: MarkupEngine>(
    fetcher: &F,
    markup: &M,
    ctx: RenderCtx,
) -> String {
    let path = format!("locales/{}/navigation.md", ctx.lang.code());
    let raw = match fetcher.fetch(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("could not load navigation from {}: {}", path, err);
            return format!(
                r#"<li class="nav-item"><span class="nav-link text-danger">{}</span></li>"#,
                t(ctx.lang, "nav.load_failed")
            );
        }
    };

    let html = markup.to_html(&raw);
    render_items(&html, ctx)
}

/// Extract anchors from the converted navigation document and emit nav
/// items. Hrefs are rewritten unconditionally — the navigation document is
/// site-authored and contains only internal paths.
fn render_items(html: &str, ctx: RenderCtx) -> String {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    let anchor = ANCHOR
        .get_or_init(|| Regex::new(r#"<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).expect("static pattern"));

    let mut items = String::new();
    for caps in anchor.captures_iter(html) {
        let href = &caps[1];
        let label = &caps[2];
        let scoped = if href == "/" {
            format!("/{}", ctx.lang.code())
        } else {
            format!("/{}{}", ctx.lang.code(), href)
        };
        items.push_str(&format!(
            r##"<li class="nav-item"><a class="nav-link" href="#{}">{}</a></li>"##,
            scoped, label
        ));
    }
    items
}
