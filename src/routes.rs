// SPDX-License-Identifier: PMPL-1.0-or-later

//! Route table: logical top-level paths mapped to content resources.
//!
//! Each entry declares the resource identifier *and* its shape as a closed
//! [`Resource`] variant, so renderer selection downstream is a total match —
//! never inferred from a file extension. The table is static and never
//! mutated.

/// A content resource named by the route table, tagged with its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A document in the lightweight markup language (resource file name).
    Document(&'static str),
    /// The chronological news listing (`news.json`).
    NewsListing,
    /// The ranked publication listing (`publications.json`).
    PublicationListing,
    /// The tabular member roster (`members.csv`).
    Roster,
}

impl Resource {
    /// Resource file name under `locales/<locale>/`.
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Document(name) => name,
            Resource::NewsListing => "news.json",
            Resource::PublicationListing => "publications.json",
            Resource::Roster => "members.csv",
        }
    }

    /// Full fetch path for this resource in the given locale.
    pub fn fetch_path(&self, locale: &str) -> String {
        format!("locales/{}/{}", locale, self.file_name())
    }
}

/// Logical path prefix → resource. First match wins; unmapped paths fall
/// back to the home document.
const ROUTES: &[(&str, Resource)] = &[
    ("/", Resource::Document("home.md")),
    ("/research", Resource::Document("research.md")),
    ("/member", Resource::Roster),
    ("/publications", Resource::PublicationListing),
    ("/news", Resource::NewsListing),
    ("/courses", Resource::Document("courses.md")),
];

/// The home-route resource, also the fallback for unmapped routes.
pub const HOME: Resource = Resource::Document("home.md");

/// Resolve a base route (`/news`, `/member`, ...) to its resource.
///
/// Unmapped routes default to the home document rather than erroring — a
/// stale or mistyped link still lands the visitor somewhere useful.
pub fn resolve(base_route: &str) -> Resource {
    ROUTES
        .iter()
        .find(|(route, _)| *route == base_route)
        .map(|(_, resource)| *resource)
        .unwrap_or(HOME)
}

/// All route keys, for link validation in the authoring checker.
pub fn known_routes() -> impl Iterator<Item = &'static str> {
    ROUTES.iter().map(|(route, _)| *route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_routes_resolve_to_their_shape() {
        assert_eq!(resolve("/news"), Resource::NewsListing);
        assert_eq!(resolve("/publications"), Resource::PublicationListing);
        assert_eq!(resolve("/member"), Resource::Roster);
        assert_eq!(resolve("/research"), Resource::Document("research.md"));
    }

    #[test]
    fn unmapped_routes_fall_back_to_home() {
        assert_eq!(resolve("/no-such-route"), HOME);
        assert_eq!(resolve("/"), HOME);
    }

    #[test]
    fn fetch_paths_are_locale_scoped() {
        assert_eq!(
            Resource::NewsListing.fetch_path("en"),
            "locales/en/news.json"
        );
        assert_eq!(
            Resource::Document("courses.md").fetch_path("ja"),
            "locales/ja/courses.md"
        );
    }
}
