// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: fragment in, DOM writes out.
//!
//! Drives the `App` with an in-memory fetcher, the CommonMark engine, and a
//! recording shell — the same wiring the authoring CLI uses.

#![cfg(feature = "markdown")]

use hashroute::app::App;
use hashroute::fetch::MemoryFetcher;
use hashroute::markup::CommonMark;
use hashroute::shell::{BufferShell, Shell};

fn site() -> MemoryFetcher {
    let mut fetcher = MemoryFetcher::new();
    fetcher.insert(
        "locales/en/home.md",
        "# Welcome\n\nSee [research](/research) or [the lab](https://example.org/lab).\n",
    );
    fetcher.insert("locales/ja/home.md", "# ようこそ\n");
    fetcher.insert(
        "locales/en/research.md",
        "# Research\n\n| Area | Lead |\n| ---- | ---- |\n| XR | Tanaka |\n",
    );
    fetcher.insert("locales/ja/research.md", "# 研究\n");
    fetcher.insert(
        "locales/en/navigation.md",
        "[Home](/)\n[Research](/research)\n[News](/news)\n",
    );
    fetcher.insert(
        "locales/en/news.json",
        r#"[
            {"title":"n1","date":"2024-01-01","file":"n1.md"},
            {"title":"n2","date":"2024-02-01","file":"n2.md"},
            {"title":"n3","date":"2024-03-01","file":"n3.md"},
            {"title":"n4","date":"2024-04-01","file":"n4.md"},
            {"title":"n5","date":"2024-05-01","url":"https://example.org/n5"},
            {"title":"n6","date":"2024-06-01","file":"n6.md"}
        ]"#,
    );
    fetcher.insert(
        "locales/en/publications.json",
        r#"[
            {"title":"p-2021","authors":"A","journal":"J","year":2021,"links":{}},
            {"title":"p-2023","authors":"B","journal":"J","year":2023,"links":{"web":"https://example.org/p"}},
            {"title":"p-2022","authors":"C","journal":"J","year":2022,"links":{"doi":"10.1/x"}}
        ]"#,
    );
    fetcher.insert(
        "locales/en/members.csv",
        "Name,Position,Research Theme,Link,Graduated Year\n\
         Active One,PhD Student,XR Interfaces,active-one,\n\
         Old Grad,MSc,Analysis,,2020\n",
    );
    fetcher.insert("locales/en/news/n3.md", "# n3 detail\n");
    fetcher.insert("locales/en/members/active-one.md", "# Active One\n");
    fetcher
}

fn app_at(fragment: &str) -> App<MemoryFetcher, CommonMark, BufferShell> {
    let mut app = App::new(site(), CommonMark, BufferShell::with_fragment(fragment));
    app.start();
    app
}

#[test]
fn fragment_without_locale_corrects_then_loads() {
    let app = app_at("#/research");
    // Default locale is ja, so the corrected fragment carries it.
    assert_eq!(app.shell().fragment(), "/ja/research");
    assert!(app.shell().content.contains("研究"));
}

#[test]
fn bare_slash_corrects_to_locale_root_without_doubling() {
    let app = app_at("#/");
    assert_eq!(app.shell().fragment(), "/ja");
    assert!(app.shell().content.contains("ようこそ"));
}

#[test]
fn publications_render_year_descending() {
    let app = app_at("#/en/publications");
    let content = &app.shell().content;
    let p2023 = content.find("p-2023").expect("2023 entry");
    let p2022 = content.find("p-2022").expect("2022 entry");
    let p2021 = content.find("p-2021").expect("2021 entry");
    assert!(p2023 < p2022 && p2022 < p2021, "expected 2023, 2022, 2021");
}

#[test]
fn news_renders_date_descending() {
    let app = app_at("#/en/news");
    let content = &app.shell().content;
    let n6 = content.find("n6").expect("newest");
    let n1 = content.find("n1").expect("oldest");
    assert!(n6 < n1, "newest item must render first");
}

#[test]
fn home_shows_at_most_five_recent_items() {
    let app = app_at("#/en");
    let content = &app.shell().content;
    assert!(content.contains("Welcome"), "primary content first");
    assert!(content.contains("Recent News"));
    for title in ["n2", "n3", "n4", "n5", "n6"] {
        assert!(content.contains(title), "{} should be in recent news", title);
    }
    assert!(!content.contains("n1"), "sixth-most-recent item must be cut");
    assert!(
        content.contains(r##"href="#/en/news""##),
        "show-more links to the full news route"
    );
}

#[test]
fn home_augmentation_failure_keeps_primary_content() {
    // ja has no news.json in the fixture.
    let app = app_at("#/ja");
    assert!(app.shell().content.contains("ようこそ"));
    assert!(!app.shell().content.contains("alert-danger"));
}

#[test]
fn roster_groups_graduates_under_their_year() {
    let app = app_at("#/en/member");
    let content = &app.shell().content;
    let heading = content.find("Graduates").expect("graduates heading");
    let active = content.find("Active One").expect("active member");
    let grad = content.find("Old Grad").expect("graduate");
    assert!(active < heading, "active member stays in the primary grid");
    assert!(grad > heading, "graduate appears only after the heading");
    assert!(content.contains(r#"<h3 class="mt-4 mb-2">2020</h3>"#));
}

#[test]
fn document_tables_get_responsive_wrappers() {
    let app = app_at("#/en/research");
    let content = &app.shell().content;
    assert!(content.contains(r#"<div class="table-responsive">"#));
    assert!(content.contains(r#"<table class="table table-striped">"#));
}

#[test]
fn document_links_are_locale_scoped_externals_kept() {
    let app = app_at("#/en");
    let content = &app.shell().content;
    assert!(content.contains(r##"href="#/en/research""##));
    assert!(content.contains(r#"href="https://example.org/lab""#));
}

#[test]
fn news_item_detail_renders_the_document() {
    let app = app_at("#/en/news/n3");
    assert!(app.shell().content.contains("n3 detail"));
}

#[test]
fn member_item_detail_renders_the_document() {
    let app = app_at("#/en/member/active-one");
    assert!(app.shell().content.contains("Active One"));
}

#[test]
fn missing_item_detail_is_not_found_not_generic() {
    let app = app_at("#/en/news/does-not-exist");
    let content = &app.shell().content;
    assert!(content.contains("Content not found"));
    assert!(!content.contains("Content could not be loaded."));
}

#[test]
fn unmapped_route_falls_back_to_home() {
    let app = app_at("#/en/no-such-page");
    assert!(app.shell().content.contains("Welcome"));
}

#[test]
fn navigation_is_locale_scoped() {
    let app = app_at("#/en");
    let nav = &app.shell().nav;
    assert!(nav.contains(r##"href="#/en">Home"##));
    assert!(nav.contains(r##"href="#/en/research">Research"##));
}

#[test]
fn navigation_failure_degrades_to_placeholder() {
    // ja has no navigation.md in the fixture.
    let app = app_at("#/ja");
    assert!(app.shell().nav.contains("nav-item"));
    assert!(app
        .shell()
        .nav
        .contains("ナビゲーションを読み込めませんでした"));
}

#[test]
fn ui_sync_applies_locale_strings_and_switcher() {
    let app = app_at("#/en");
    assert!(app
        .shell()
        .ui_strings
        .iter()
        .any(|(key, value)| key == "ui.title" && value.contains("Laboratory")));
    assert!(app
        .shell()
        .switcher_menu
        .contains(r##"dropdown-item active" href="#" data-lang="en""##));
    assert!(app.shell().switcher_button.contains("English"));
    assert!(app.shell().dropdown_reinits >= 1);
}

#[test]
fn locale_click_rewrites_fragment_for_reroute() {
    let mut app = app_at("#/en/research");
    app.handle_locale_click("ja");
    assert_eq!(app.shell().fragment(), "/ja/research");
    // The host's fragment-change event re-enters routing:
    app.handle_fragment("/ja/research");
    assert!(app.shell().content.contains("研究"));
    assert_eq!(app.lang().code(), "ja");
}
