// SPDX-License-Identifier: PMPL-1.0-or-later

//! News listing renderer: chronological card grid.

use super::escape_html;
use crate::error::LoadError;
use crate::types::{NewsItem, RenderCtx};

/// Thumbnail used when an item does not carry one.
const DEFAULT_THUMBNAIL: &str = "../images/logo.png";

/// Parse the news listing JSON.
pub fn parse(raw: &str, path: &str) -> Result<Vec<NewsItem>, LoadError> {
    serde_json::from_str(raw).map_err(|err| LoadError::parse(path, err))
}

/// Sort by date descending. Ordering is a rendering-time responsibility —
/// resource order is never trusted. Unparseable dates sort last; the sort is
/// stable so equal dates keep source order.
pub fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
}

/// Render news items as a card grid.
///
/// An item with an external `url` opens externally; otherwise the card links
/// to the in-page item-detail route derived from `file`. An item with
/// neither is an unexpected shape.
pub fn render_list(items: &[NewsItem], ctx: RenderCtx) -> Result<String, LoadError> {
    let mut html = String::from(r#"<div class="row">"#);
    for item in items {
        html.push_str(&render_card(item, ctx)?);
    }
    html.push_str("</div>");
    Ok(html)
}

fn render_card(item: &NewsItem, ctx: RenderCtx) -> Result<String, LoadError> {
    let (link, target) = match (&item.url, &item.file) {
        (Some(url), _) => (
            escape_html(url),
            r#" target="_blank" rel="noopener noreferrer""#,
        ),
        (None, Some(file)) => (
            format!(
                "#/{}/news/{}",
                ctx.lang.code(),
                escape_html(file.trim_end_matches(".md"))
            ),
            "",
        ),
        (None, None) => {
            return Err(LoadError::Render(format!(
                "news item '{}' has neither url nor file",
                item.title
            )))
        }
    };
    let thumbnail = escape_html(item.thumbnail.as_deref().unwrap_or(DEFAULT_THUMBNAIL));
    let title = escape_html(&item.title);
    let date = escape_html(&item.date);

    Ok(format!(
        r#"<div class="col-md-4 mb-4"><div class="card h-100"><a href="{link}"{target} class="text-decoration-none text-dark"><div class="bg-image hover-overlay"><img src="{thumbnail}" class="card-img-top" alt="{title}"/><div class="mask" style="background-color: rgba(251, 251, 251, 0.15);"></div></div><div class="card-body"><h5 class="card-title">{title}</h5><p class="card-text"><small class="text-muted">{date}</small></p></div></a></div></div>"#
    ))
}
