// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content-root validation for the authoring CLI.
//!
//! Walks every locale under `<root>/locales/` and checks that the resources
//! the route table will ask for actually exist and parse: listings
//! deserialize, the roster header resolves, navigation links point at known
//! routes, and item documents referenced by listings and roster links are
//! present. Purely advisory — the runtime pipeline degrades on its own; this
//! exists so authors hear about problems before visitors do.

use crate::fetch::{ContentFetcher, FetchError, FsFetcher};
use crate::i18n::Lang;
use crate::render::{news, publications, roster};
use crate::routes::{self, Resource};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level,
            detail: detail.into(),
        }
    }

    fn ok(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red().bold(),
        };
        println!("  [{}] {:28} {}", tag, self.label, self.detail);
    }
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.level == Level::Error)
    }

    pub fn print(&self) {
        for diag in &self.diagnostics {
            diag.print();
        }
    }
}

/// Validate a content root. Fails only if the root itself is unusable;
/// content problems land in the report.
pub fn check_content_root(root: &Path) -> Result<CheckReport> {
    let locales_dir = root.join("locales");
    if !locales_dir.is_dir() {
        return Err(anyhow!("{} is not a directory", locales_dir.display()));
    }

    let mut report = CheckReport::default();
    let mut found_any = false;

    let mut entries: Vec<_> = std::fs::read_dir(&locales_dir)
        .with_context(|| format!("reading {}", locales_dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let code = entry.file_name().to_string_lossy().into_owned();
        match Lang::from_code(&code) {
            Some(_) => {
                found_any = true;
                check_locale(root, &code, &mut report);
            }
            None => report.diagnostics.push(Diagnostic::warning(
                format!("locales/{}", code),
                "directory does not match a supported locale",
            )),
        }
    }

    if !found_any {
        report.diagnostics.push(Diagnostic::error(
            "locales",
            "no supported locale directories found",
        ));
    }

    Ok(report)
}

fn check_locale(root: &Path, code: &str, report: &mut CheckReport) {
    let fetcher = FsFetcher::new(root);
    let label = |name: &str| format!("locales/{}/{}", code, name);

    // Documents the route table serves directly. Only the home document is
    // load-bearing for every unmapped route.
    for (resource, required) in [
        (Resource::Document("home.md"), true),
        (Resource::Document("research.md"), false),
        (Resource::Document("courses.md"), false),
        (Resource::Document("navigation.md"), true),
    ] {
        let name = resource.file_name();
        match fetcher.fetch(&resource.fetch_path(code)) {
            Ok(_) => report.diagnostics.push(Diagnostic::ok(label(name), "present")),
            Err(FetchError::NotFound) if required => report
                .diagnostics
                .push(Diagnostic::error(label(name), "missing")),
            Err(FetchError::NotFound) => report
                .diagnostics
                .push(Diagnostic::warning(label(name), "missing")),
            Err(err) => report
                .diagnostics
                .push(Diagnostic::error(label(name), err.to_string())),
        }
    }

    check_navigation(&fetcher, code, report);
    let referenced_news = check_news(root, &fetcher, code, report);
    check_publications(&fetcher, code, report);
    let referenced_members = check_roster(root, &fetcher, code, report);

    check_orphans(root, code, "news", &referenced_news, report);
    check_orphans(root, code, "members", &referenced_members, report);
}

fn check_navigation(fetcher: &FsFetcher, code: &str, report: &mut CheckReport) {
    let path = format!("locales/{}/navigation.md", code);
    let raw = match fetcher.fetch(&path) {
        Ok(raw) => raw,
        // Presence was already diagnosed above.
        Err(_) => return,
    };

    let link = Regex::new(r"\]\(([^)]+)\)").expect("static pattern");
    let known: HashSet<&str> = routes::known_routes().collect();
    let mut bad = Vec::new();
    for caps in link.captures_iter(&raw) {
        let href = caps[1].trim();
        if href.starts_with('/') && !known.contains(href) {
            bad.push(href.to_string());
        }
    }
    if bad.is_empty() {
        report
            .diagnostics
            .push(Diagnostic::ok(path, "all links map to known routes"));
    } else {
        report.diagnostics.push(Diagnostic::warning(
            path,
            format!("links to unknown routes: {}", bad.join(", ")),
        ));
    }
}

/// Returns the set of item documents the listing references.
fn check_news(
    root: &Path,
    fetcher: &FsFetcher,
    code: &str,
    report: &mut CheckReport,
) -> HashSet<String> {
    let path = Resource::NewsListing.fetch_path(code);
    let mut referenced = HashSet::new();
    let raw = match fetcher.fetch(&path) {
        Ok(raw) => raw,
        Err(FetchError::NotFound) => {
            report
                .diagnostics
                .push(Diagnostic::error(path, "missing (news route will fail)"));
            return referenced;
        }
        Err(err) => {
            report
                .diagnostics
                .push(Diagnostic::error(path, err.to_string()));
            return referenced;
        }
    };

    let items = match news::parse(&raw, &path) {
        Ok(items) => items,
        Err(err) => {
            report
                .diagnostics
                .push(Diagnostic::error(path, err.to_string()));
            return referenced;
        }
    };

    let mut problems = Vec::new();
    for item in &items {
        if item.parsed_date().is_none() {
            problems.push(format!("'{}' has unparseable date '{}'", item.title, item.date));
        }
        match (&item.url, &item.file) {
            (None, None) => problems.push(format!("'{}' has neither url nor file", item.title)),
            (None, Some(file)) => {
                let doc = format!("{}.md", file.trim_end_matches(".md"));
                referenced.insert(doc.clone());
                if !root.join("locales").join(code).join("news").join(&doc).is_file() {
                    problems.push(format!("'{}' references missing news/{}", item.title, doc));
                }
            }
            _ => {}
        }
    }

    if problems.is_empty() {
        report
            .diagnostics
            .push(Diagnostic::ok(path, format!("{} items", items.len())));
    } else {
        for problem in problems {
            report
                .diagnostics
                .push(Diagnostic::warning(path.clone(), problem));
        }
    }
    referenced
}

fn check_publications(fetcher: &FsFetcher, code: &str, report: &mut CheckReport) {
    let path = Resource::PublicationListing.fetch_path(code);
    match fetcher.fetch(&path) {
        Ok(raw) => match publications::parse(&raw, &path) {
            Ok(items) => report
                .diagnostics
                .push(Diagnostic::ok(path, format!("{} items", items.len()))),
            Err(err) => report
                .diagnostics
                .push(Diagnostic::error(path, err.to_string())),
        },
        Err(FetchError::NotFound) => report
            .diagnostics
            .push(Diagnostic::error(path, "missing (publications route will fail)")),
        Err(err) => report
            .diagnostics
            .push(Diagnostic::error(path, err.to_string())),
    }
}

/// Returns the set of member documents the roster links to.
fn check_roster(
    root: &Path,
    fetcher: &FsFetcher,
    code: &str,
    report: &mut CheckReport,
) -> HashSet<String> {
    let path = Resource::Roster.fetch_path(code);
    let mut referenced = HashSet::new();
    let raw = match fetcher.fetch(&path) {
        Ok(raw) => raw,
        Err(FetchError::NotFound) => {
            report
                .diagnostics
                .push(Diagnostic::error(path, "missing (member route will fail)"));
            return referenced;
        }
        Err(err) => {
            report
                .diagnostics
                .push(Diagnostic::error(path, err.to_string()));
            return referenced;
        }
    };

    match roster::parse(&raw, &path) {
        Ok(parsed) => {
            let members = parsed.primary.len()
                + parsed
                    .graduates
                    .iter()
                    .map(|(_, group)| group.len())
                    .sum::<usize>();
            let mut problems = Vec::new();
            for record in parsed
                .primary
                .iter()
                .chain(parsed.graduates.iter().flat_map(|(_, group)| group))
            {
                if let Some(link) = record.link.as_deref().filter(|l| !l.starts_with("http")) {
                    let doc = format!("{}.md", link);
                    referenced.insert(doc.clone());
                    if !root
                        .join("locales")
                        .join(code)
                        .join("members")
                        .join(&doc)
                        .is_file()
                    {
                        problems.push(format!(
                            "'{}' links to missing members/{}",
                            record.name, doc
                        ));
                    }
                }
            }
            if problems.is_empty() {
                report
                    .diagnostics
                    .push(Diagnostic::ok(path, format!("{} members", members)));
            } else {
                for problem in problems {
                    report
                        .diagnostics
                        .push(Diagnostic::warning(path.clone(), problem));
                }
            }
        }
        Err(err) => report
            .diagnostics
            .push(Diagnostic::error(path, err.to_string())),
    }
    referenced
}

/// Item documents nothing references are probably authoring leftovers.
fn check_orphans(
    root: &Path,
    code: &str,
    collection: &str,
    referenced: &HashSet<String>,
    report: &mut CheckReport,
) {
    let dir = root.join("locales").join(code).join(collection);
    if !dir.is_dir() {
        return;
    }
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") && !referenced.contains(&name) {
            report.diagnostics.push(Diagnostic::warning(
                format!("locales/{}/{}/{}", code, collection, name),
                "not referenced by any listing or roster entry",
            ));
        }
    }
}
