// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application orchestration: routing events in, DOM writes out.
//!
//! `App` owns the current locale and the three capability handles (fetcher,
//! markup engine, shell). The host event loop maps its events onto the
//! `handle_*` methods; each call runs to completion before the next is
//! dispatched, so the content and navigation regions are only ever mutated
//! from one task and overlapping loads cannot interleave.

use crate::error::LoadError;
use crate::fetch::{ContentFetcher, FetchError};
use crate::i18n::{t, Lang};
use crate::markup::MarkupEngine;
use crate::nav;
use crate::render;
use crate::render::news;
use crate::router::{self, Outcome};
use crate::routes::{self, Resource};
use crate::shell::Shell;
use crate::types::RenderCtx;
use crate::ui;
use log::{debug, warn};

/// Home page shows at most this many recent news items.
const HOME_NEWS_COUNT: usize = 5;

/// The routed application.
pub struct App<F, M, S> {
    lang: Lang,
    fetcher: F,
    markup: M,
    shell: S,
}

impl<F, M, S> App<F, M, S>
where
    F: ContentFetcher,
    M: MarkupEngine,
    S: Shell,
{
    pub fn new(fetcher: F, markup: M, shell: S) -> Self {
        Self {
            lang: Lang::default(),
            fetcher,
            markup,
            shell,
        }
    }

    /// Locale currently in effect.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Initial load for hosts without a fragment-change event (CLI, tests):
    /// routes the current fragment and, if it was corrected, routes the
    /// corrected one — which is guaranteed to load. Browser-style hosts
    /// should instead wire their fragment-change event to
    /// [`App::handle_fragment`] and fire it once at startup.
    pub fn start(&mut self) {
        let fragment = self.shell.fragment();
        self.handle_fragment(&fragment);
        let corrected = self.shell.fragment();
        if corrected != fragment {
            self.handle_fragment(&corrected);
        }
    }

    /// Fragment-change entry point.
    ///
    /// Exactly one of {content load, fragment correction} happens per
    /// invocation. A correction writes the fixed fragment back to the
    /// shell, which re-triggers routing on event-driven hosts.
    pub fn handle_fragment(&mut self, fragment: &str) {
        match router::parse_fragment(fragment, self.lang) {
            Outcome::Correct { fragment } => {
                debug!("correcting location fragment to {}", fragment);
                self.shell.set_fragment(&fragment);
            }
            Outcome::Load { lang, path } => {
                self.lang = lang;
                self.sync_ui();
                self.load_content(&path);
            }
        }
    }

    /// Locale-switcher selection: swap the locale prefix of the current
    /// fragment and let routing take it from there.
    pub fn handle_locale_click(&mut self, code: &str) {
        if let Some(lang) = Lang::from_code(code) {
            if lang != self.lang {
                let current = self.shell.fragment();
                let hash = current.strip_prefix('#').unwrap_or(&current);
                let updated = hash.replacen(
                    &format!("/{}", self.lang.code()),
                    &format!("/{}", lang.code()),
                    1,
                );
                self.shell.set_fragment(&updated);
            }
        }
        self.shell.close_dropdown();
    }

    /// Navigation click on a mobile viewport: fold the expanded navbar.
    pub fn handle_nav_click(&mut self) {
        self.shell.collapse_nav();
    }

    /// Re-apply locale strings to the chrome, rebuild the locale switcher,
    /// and refresh the navigation list for the current locale.
    pub fn sync_ui(&mut self) {
        for (key, value) in ui::ui_strings(self.lang) {
            self.shell.set_ui_string(key, value);
        }
        self.shell.set_switcher_menu(&ui::switcher_menu(self.lang));
        self.shell
            .set_switcher_button(&ui::switcher_button(self.lang));
        self.shell.reinit_dropdown();
        self.refresh_navigation();
    }

    /// Rebuild the navigation list. Failures degrade to a placeholder item
    /// inside the builder; nothing propagates from here.
    pub fn refresh_navigation(&mut self) {
        let ctx = RenderCtx::new(self.lang);
        let items = nav::build_nav(&self.fetcher, &self.markup, ctx);
        self.shell.set_nav(&items);
    }

    /// Resolve and render the logical path into the content region.
    ///
    /// All failures are caught here and become a visible, localized error
    /// block; the content region is never left blank.
    pub fn load_content(&mut self, logical_path: &str) {
        let ctx = RenderCtx::new(self.lang);
        if let Err(err) = self.resolve_content(logical_path, ctx) {
            warn!("content load failed for {}: {}", logical_path, err);
            self.shell.set_content(&render::error_block(&err, ctx));
        }
    }

    fn resolve_content(&mut self, logical_path: &str, ctx: RenderCtx) -> Result<(), LoadError> {
        let segments: Vec<&str> = logical_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let base_route = format!("/{}", segments.first().copied().unwrap_or(""));
        let item_id = segments.get(1).copied();

        // Single-item documents route past the table: locales/<lang>/<collection>/<id>.md
        if let Some(id) = item_id {
            let collection = match base_route.as_str() {
                "/news" => Some("news"),
                "/member" => Some("members"),
                _ => None,
            };
            if let Some(collection) = collection {
                let path = format!("locales/{}/{}/{}.md", ctx.lang.code(), collection, id);
                let raw = self.fetch(&path)?;
                let html = self.markup.to_html(&raw);
                self.shell.set_content(&html);
                return Ok(());
            }
        }

        let resource = routes::resolve(&base_route);
        let fetch_path = resource.fetch_path(ctx.lang.code());
        let raw = self.fetch(&fetch_path)?;
        let html = render::render_resource(resource, &raw, &fetch_path, &self.markup, ctx)?;
        // Post-render normalization: catch any internal absolute href a
        // renderer could not rewrite ahead of insertion.
        let html = render::rewrite_internal_links(&html, ctx);
        self.shell.set_content(&html);

        if base_route == "/" {
            self.append_recent_news(ctx);
        }
        Ok(())
    }

    /// Home augmentation: the five most recent news items, appended after
    /// the primary content is already written. Failure here keeps the
    /// primary content and is only logged.
    fn append_recent_news(&mut self, ctx: RenderCtx) {
        match self.recent_news_section(ctx) {
            Ok(html) => self.shell.append_content(&html),
            Err(err) => warn!("recent-news augmentation skipped: {}", err),
        }
    }

    fn recent_news_section(&self, ctx: RenderCtx) -> Result<String, LoadError> {
        let path = Resource::NewsListing.fetch_path(ctx.lang.code());
        let raw = self.fetch(&path)?;
        let mut items = news::parse(&raw, &path)?;
        news::sort_newest_first(&mut items);
        items.truncate(HOME_NEWS_COUNT);

        let mut html = format!(
            r#"<hr class="my-4"><h2 class="mt-5 mb-3">{}</h2>"#,
            t(ctx.lang, "ui.recent_news")
        );
        html.push_str(&news::render_list(&items, ctx)?);
        html.push_str(&format!(
            r##"<div class="text-end mt-3"><a href="#/{}/news" class="btn btn-outline-light">{}</a></div>"##,
            ctx.lang.code(),
            t(ctx.lang, "ui.show_more")
        ));
        Ok(html)
    }

    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.fetcher.fetch(path).map_err(|err| match err {
            FetchError::NotFound => LoadError::NotFound {
                path: path.to_string(),
            },
            FetchError::Failed(reason) => LoadError::Fetch {
                path: path.to_string(),
                reason,
            },
        })
    }
}
