// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for hashroute.
//!
//! Listing items deserialize straight from the site's JSON resources;
//! roster records come out of the tabular member roster. All of these are
//! render-time values — nothing here is cached between navigations.

use crate::i18n::Lang;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Explicit rendering context threaded through every renderer and
/// link-rewriter, instead of an ambient global: the current locale is the
/// only process-wide state the pipeline has, and it is owned by the `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCtx {
    pub lang: Lang,
}

impl RenderCtx {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }
}

/// One news entry from `news.json`.
///
/// `url` points at an external page and wins over `file`, which names the
/// single-item document under `news/` for in-page detail routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl NewsItem {
    /// Parsed publication date, used only for ordering. Accepts the date
    /// formats the site's content has used over time; unparseable dates
    /// sort last.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%B %d, %Y"))
            .ok()
    }
}

/// One publication entry from `publications.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationItem {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    #[serde(default)]
    pub links: PublicationLinks,
}

/// Up to three typed links per publication; each renders only if present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// One member from the roster table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub name: String,
    pub role: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// External absolute URL, or an internal member-page identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Non-blank cohort year moves the record into the graduate grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_year: Option<String>,
}

impl RosterRecord {
    /// The cohort-year tag, if usable (non-empty after trimming).
    pub fn graduated_year(&self) -> Option<&str> {
        self.cohort_year
            .as_deref()
            .map(str::trim)
            .filter(|year| !year.is_empty())
    }
}

/// Roster split per the grouping rule: current members in source order,
/// graduates grouped by cohort year, newest year first. A record never
/// appears in both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub primary: Vec<RosterRecord>,
    pub graduates: Vec<(String, Vec<RosterRecord>)>,
}
