// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for hashroute.
//!
//! Provides the static locale table for the routed site: the set of supported
//! languages and the per-language catalog of chrome strings (page title,
//! footer, section headings, button labels, error messages).
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | ja   | Japanese | 日本語       |
//! | en   | English  | English     |
//!
//! Japanese is the default: an unrecognised locale segment in the location
//! fragment is corrected to the current language, which starts out as `ja`.
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"ui.title"`, `"roster.graduates"`,
//! `"error.not_found"`. Lookups fall back to Japanese (the source language)
//! when a key is missing in the requested language. If the key is missing
//! there too, the empty string is returned — UI sync treats that as "leave
//! the element unchanged", never as an error.
//!
//! The catalog is embedded at compile time as static data — no file I/O and
//! no allocation during translation lookups.

mod catalog;

pub use catalog::{t, t_or_key, Lang};
