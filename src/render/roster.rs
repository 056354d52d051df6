// SPDX-License-Identifier: PMPL-1.0-or-later

//! Roster renderer: tabular member data → grouped card grids.
//!
//! The roster is comma-delimited with a bilingual header row. Data rows are
//! split naively on commas — the format has no quoting or escaping, a stated
//! limitation of the content pipeline, not something to silently fix here.

use super::escape_html;
use crate::error::LoadError;
use crate::i18n::t;
use crate::types::{RenderCtx, Roster, RosterRecord};

const DEFAULT_IMAGE: &str = "../images/logo.png";

/// Bilingual header vocabulary. Matching is case-insensitive on the ASCII
/// side; the Japanese names are exact.
const NAME: [&str; 2] = ["Name", "氏名"];
const POSITION: [&str; 2] = ["Position", "役職"];
const THEME: [&str; 2] = ["Research Theme", "研究テーマ"];
const IMAGE: [&str; 2] = ["Image", "画像"];
const LINK: [&str; 2] = ["Link", "リンク"];
const GRADUATED_YEAR: [&str; 2] = ["Graduated Year", "卒業年"];

struct Columns {
    name: usize,
    role: usize,
    theme: usize,
    image: Option<usize>,
    link: Option<usize>,
    cohort_year: Option<usize>,
}

/// Parse the roster table and apply the grouping rule: records with a usable
/// cohort year go into per-year graduate groups (newest first), everything
/// else stays in the primary listing in source order.
pub fn parse(raw: &str, path: &str) -> Result<Roster, LoadError> {
    let mut lines = raw.trim().lines();
    let header = lines
        .next()
        .ok_or_else(|| LoadError::parse(path, "roster table is empty"))?;
    let headers: Vec<&str> = header.split(',').map(str::trim).collect();
    let columns = resolve_columns(&headers, path)?;

    let mut roster = Roster::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        // Naive split: the format has no quoting, so embedded commas are a
        // content error, not a parser concern.
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let cell = |idx: usize| cells.get(idx).copied().unwrap_or("");
        let optional = |idx: Option<usize>| {
            idx.map(cell)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let record = RosterRecord {
            name: cell(columns.name).to_string(),
            role: cell(columns.role).to_string(),
            theme: cell(columns.theme).to_string(),
            image: optional(columns.image),
            link: optional(columns.link),
            cohort_year: columns.cohort_year.map(cell).map(String::from),
        };

        match record.graduated_year().map(String::from) {
            Some(year) => {
                match roster.graduates.iter().position(|(y, _)| *y == year) {
                    Some(idx) => roster.graduates[idx].1.push(record),
                    None => roster.graduates.push((year, vec![record])),
                }
            }
            None => roster.primary.push(record),
        }
    }

    // Newest cohort first; non-numeric years sort last. Stable, so equal
    // keys keep first-seen order.
    roster
        .graduates
        .sort_by_key(|(year, _)| std::cmp::Reverse(year.parse::<i32>().unwrap_or(i32::MIN)));

    Ok(roster)
}

fn resolve_columns(headers: &[&str], path: &str) -> Result<Columns, LoadError> {
    let required = |names: [&str; 2]| {
        find_column(headers, names).ok_or_else(|| {
            LoadError::parse(
                path,
                format!("roster header is missing a {}/{} column", names[0], names[1]),
            )
        })
    };
    Ok(Columns {
        name: required(NAME)?,
        role: required(POSITION)?,
        theme: required(THEME)?,
        image: find_column(headers, IMAGE),
        link: find_column(headers, LINK),
        cohort_year: find_column(headers, GRADUATED_YEAR),
    })
}

fn find_column(headers: &[&str], names: [&str; 2]) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(names[0]) || *header == names[1])
}

/// Render the grouped roster: primary grid first, then the localized
/// "Graduates" heading with one subsection per cohort year.
pub fn render(roster: &Roster, ctx: RenderCtx) -> String {
    let mut html = String::from(r#"<div class="row">"#);
    for record in &roster.primary {
        html.push_str(&render_card(record, ctx));
    }
    html.push_str("</div>");

    if !roster.graduates.is_empty() {
        html.push_str(&format!(
            r#"<h2 class="mt-5 mb-3">{}</h2>"#,
            t(ctx.lang, "roster.graduates")
        ));
        for (year, group) in &roster.graduates {
            html.push_str(&format!(
                r#"<h3 class="mt-4 mb-2">{}</h3><div class="row">"#,
                escape_html(year)
            ));
            for record in group {
                html.push_str(&render_card(record, ctx));
            }
            html.push_str("</div>");
        }
    }
    html
}

fn render_card(record: &RosterRecord, ctx: RenderCtx) -> String {
    let image = escape_html(record.image.as_deref().unwrap_or(DEFAULT_IMAGE));
    let name = escape_html(&record.name);
    let inner = format!(
        r#"<div class="card text-center h-100"><div class="card-body"><img src="{image}" class="rounded-circle mb-3 member-img" alt="{name}"><h5 class="card-title">{name}</h5><h6 class="card-subtitle mb-2 text-muted">{role}</h6><p class="card-text">{theme}</p></div></div>"#,
        role = escape_html(&record.role),
        theme = escape_html(&record.theme),
    );

    let body = match record.link.as_deref() {
        Some(link) if link.starts_with("http") => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-decoration-none text-dark">{inner}</a>"#,
            escape_html(link)
        ),
        Some(link) => format!(
            r##"<a href="#/{}/member/{}" class="text-decoration-none text-dark">{inner}</a>"##,
            ctx.lang.code(),
            escape_html(link)
        ),
        None => inner,
    };

    format!(r#"<div class="col-md-4 col-lg-3 mb-4">{body}</div>"#)
}
