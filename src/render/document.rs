// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document renderer: markup → HTML, responsive tables, locale-scoped links.

use super::rewrite_internal_links;
use crate::markup::MarkupEngine;
use crate::types::RenderCtx;

/// Render a document resource.
///
/// Conversion itself is the external engine's job; this pass wraps every
/// table in a responsive container and rewrites internal absolute links so
/// in-page navigation stays hash-based.
pub fn render<M: MarkupEngine>(markup: &M, raw: &str, ctx: RenderCtx) -> String {
    let html = markup.to_html(raw);
    let html = wrap_tables(&html);
    rewrite_internal_links(&html, ctx)
}

/// Wrap each `<table>` element in a responsive container.
///
/// Works on the converted HTML rather than hooking the engine, so it holds
/// for any [`MarkupEngine`].
pub fn wrap_tables(html: &str) -> String {
    html.replace(
        "<table>",
        r#"<div class="table-responsive"><table class="table table-striped">"#,
    )
    .replace("</table>", "</table></div>")
}
