// SPDX-License-Identifier: PMPL-1.0-or-later

//! Renderers: fetched raw content → HTML fragments.
//!
//! Every renderer is a pure function of the raw resource text and the
//! [`RenderCtx`] — no DOM, no fetching, no shared state. Dispatch is a total
//! match over the closed [`Resource`] enum declared by the route table.

pub mod document;
pub mod news;
pub mod publications;
pub mod roster;

use crate::error::LoadError;
use crate::i18n::t;
use crate::markup::MarkupEngine;
use crate::routes::Resource;
use crate::types::RenderCtx;
use regex::Regex;
use std::sync::OnceLock;

/// Render a fetched collection resource according to its declared shape.
///
/// `path` is the fetch path, carried into parse errors so the failure block
/// can say which resource broke.
pub fn render_resource<M: MarkupEngine>(
    resource: Resource,
    raw: &str,
    path: &str,
    markup: &M,
    ctx: RenderCtx,
) -> Result<String, LoadError> {
    match resource {
        Resource::Document(_) => Ok(document::render(markup, raw, ctx)),
        Resource::NewsListing => {
            let mut items = news::parse(raw, path)?;
            news::sort_newest_first(&mut items);
            news::render_list(&items, ctx)
        }
        Resource::PublicationListing => {
            let mut items = publications::parse(raw, path)?;
            publications::sort_newest_first(&mut items);
            Ok(publications::render_list(&items, ctx))
        }
        Resource::Roster => {
            let roster = roster::parse(raw, path)?;
            Ok(roster::render(&roster, ctx))
        }
    }
}

/// Localized, visible error block for the content region.
///
/// Distinguishes "not found" (the resource is absent) from generic load
/// failure; the region is never left blank.
pub fn error_block(err: &LoadError, ctx: RenderCtx) -> String {
    let message = if err.is_not_found() {
        format!("{}: {}", t(ctx.lang, "error.not_found"), escape_html(&err.to_string()))
    } else {
        t(ctx.lang, "error.load_failed").to_string()
    };
    format!(r#"<div class="alert alert-danger">{}</div>"#, message)
}

/// Rewrite internal absolute links to the locale-scoped hash form.
///
/// Matches `href="/..."` attributes; protocol-relative (`//`) hrefs are left
/// alone, and external / mail / already-fragment links never match because
/// they do not start with `/`. Idempotent: rewritten hrefs start with `#`.
/// Used both by the document renderer ahead of insertion and as the
/// post-render pass over the final fragment (defends against renderers that
/// could not rewrite ahead of time, e.g. externally supplied identifiers).
pub fn rewrite_internal_links(html: &str, ctx: RenderCtx) -> String {
    static HREF: OnceLock<Regex> = OnceLock::new();
    let href = HREF.get_or_init(|| Regex::new(r#"href="(/[^"]*)""#).expect("static pattern"));

    href.replace_all(html, |caps: &regex::Captures| {
        let path = &caps[1];
        if path.starts_with("//") {
            return caps[0].to_string();
        }
        format!(r##"href="#/{}{}""##, ctx.lang.code(), path)
    })
    .into_owned()
}

/// Minimal HTML escaping for text and attribute interpolations.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn internal_links_become_locale_scoped() {
        let ctx = RenderCtx::new(Lang::En);
        let html = r#"<a href="/research">research</a>"#;
        assert_eq!(
            rewrite_internal_links(html, ctx),
            r##"<a href="#/en/research">research</a>"##
        );
    }

    #[test]
    fn external_and_fragment_links_untouched() {
        let ctx = RenderCtx::new(Lang::En);
        for html in [
            r#"<a href="http://external">x</a>"#,
            r#"<a href="mailto:a@b">x</a>"#,
            r##"<a href="#/en/news">x</a>"##,
            r#"<a href="//cdn.example/x.js">x</a>"#,
        ] {
            assert_eq!(rewrite_internal_links(html, ctx), html);
        }
    }

    #[test]
    fn rewriting_is_idempotent() {
        let ctx = RenderCtx::new(Lang::Ja);
        let once = rewrite_internal_links(r#"<a href="/member/taro">x</a>"#, ctx);
        let twice = rewrite_internal_links(&once, ctx);
        assert_eq!(once, twice);
    }

    #[test]
    fn error_block_distinguishes_not_found() {
        let ctx = RenderCtx::new(Lang::En);
        let not_found = LoadError::NotFound {
            path: "locales/en/news/x.md".into(),
        };
        let generic = LoadError::Fetch {
            path: "locales/en/news.json".into(),
            reason: "boom".into(),
        };
        assert!(error_block(&not_found, ctx).contains("Content not found"));
        assert!(error_block(&generic, ctx).contains("Content could not be loaded."));
    }

    #[test]
    fn escaping_covers_the_usual_suspects() {
        assert_eq!(
            escape_html(r#"<b>&"quote"'</b>"#),
            "&lt;b&gt;&amp;&quot;quote&quot;&#39;&lt;/b&gt;"
        );
    }
}
