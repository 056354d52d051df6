// SPDX-License-Identifier: PMPL-1.0-or-later

//! Publication listing renderer: year-ranked cards with typed link buttons.

use super::escape_html;
use crate::error::LoadError;
use crate::types::{PublicationItem, RenderCtx};

/// Parse the publications listing JSON.
pub fn parse(raw: &str, path: &str) -> Result<Vec<PublicationItem>, LoadError> {
    serde_json::from_str(raw).map_err(|err| LoadError::parse(path, err))
}

/// Sort by year descending; the sort is stable, so same-year entries keep
/// source order.
pub fn sort_newest_first(items: &mut [PublicationItem]) {
    items.sort_by_key(|item| std::cmp::Reverse(item.year));
}

/// Render publications as a card list.
///
/// Each of the three link kinds renders only if present. When a `web` link
/// exists the entire card becomes one clickable link; otherwise the card is
/// static with per-link buttons.
pub fn render_list(items: &[PublicationItem], _ctx: RenderCtx) -> String {
    let mut html = String::from(r#"<div class="row">"#);
    for item in items {
        let card = render_card(item);
        html.push_str(r#"<div class="col-md-12 mb-4">"#);
        match &item.links.web {
            Some(web) => {
                html.push_str(&format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-decoration-none publication-link">{}</a>"#,
                    escape_html(web),
                    card
                ));
            }
            None => html.push_str(&card),
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_card(item: &PublicationItem) -> String {
    let mut buttons = String::new();
    if let Some(pdf) = &item.links.pdf {
        buttons.push_str(&format!(
            r#"<a href="{}" class="btn btn-pdf btn-sm me-2" target="_blank" rel="noopener noreferrer"><i class="fas fa-file-pdf me-1"></i>PDF</a>"#,
            escape_html(pdf)
        ));
    }
    if let Some(web) = &item.links.web {
        buttons.push_str(&format!(
            r#"<a href="{}" class="btn btn-web btn-sm me-2" target="_blank" rel="noopener noreferrer"><i class="fas fa-external-link-alt me-1"></i>Web</a>"#,
            escape_html(web)
        ));
    }
    if let Some(doi) = &item.links.doi {
        buttons.push_str(&format!(
            r#"<a href="https://doi.org/{}" class="btn btn-doi btn-sm" target="_blank" rel="noopener noreferrer"><i class="fas fa-link me-1"></i>DOI</a>"#,
            escape_html(doi)
        ));
    }

    format!(
        r#"<div class="card publication-card"><div class="card-body"><h5 class="card-title publication-title">{title}</h5><p class="card-text publication-authors">{authors}</p><p class="card-text publication-journal"><em>{journal}, {year}</em></p></div><div class="card-footer d-flex justify-content-end">{buttons}</div></div>"#,
        title = escape_html(&item.title),
        authors = escape_html(&item.authors),
        journal = escape_html(&item.journal),
        year = item.year,
    )
}
