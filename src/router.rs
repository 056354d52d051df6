// SPDX-License-Identifier: PMPL-1.0-or-later

//! Location router: fragment → (language, logical path), or a corrected
//! fragment.
//!
//! Pure function; the `App` applies the side effects. Exactly one of
//! {load, correction} results from every invocation, never both. A corrected
//! fragment always begins with a valid locale, so re-routing it takes the
//! load branch — correction converges in at most two applications.

use crate::i18n::Lang;

/// Result of parsing a location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Recognized locale: switch to it and load content for the path.
    Load { lang: Lang, path: String },
    /// Missing or unknown locale: replace the fragment with this corrected
    /// one, which re-triggers routing.
    Correct { fragment: String },
}

/// Parse a location fragment of the form `#/<locale>[/<route>[/<item-id>]]`.
///
/// `current` is the locale in effect, used to synthesize the corrected
/// fragment when the locale segment is missing or unknown.
pub fn parse_fragment(fragment: &str, current: Lang) -> Outcome {
    let hash = fragment.strip_prefix('#').unwrap_or(fragment);
    let hash = if hash.is_empty() { "/" } else { hash };

    let parts: Vec<&str> = hash.split('/').filter(|part| !part.is_empty()).collect();

    match parts.first().copied().and_then(Lang::from_code) {
        Some(lang) => Outcome::Load {
            lang,
            path: format!("/{}", parts[1..].join("/")),
        },
        None => {
            // `/` alone must not produce a doubled separator.
            let tail = if hash == "/" { "" } else { hash };
            let corrected = format!("/{}{}", current.code(), tail).replacen("//", "/", 1);
            Outcome::Correct {
                fragment: corrected,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_locale_loads() {
        assert_eq!(
            parse_fragment("#/en/news", Lang::Ja),
            Outcome::Load {
                lang: Lang::En,
                path: "/news".into()
            }
        );
    }

    #[test]
    fn locale_alone_loads_the_root_path() {
        assert_eq!(
            parse_fragment("#/ja", Lang::En),
            Outcome::Load {
                lang: Lang::Ja,
                path: "/".into()
            }
        );
    }

    #[test]
    fn item_segments_survive_parsing() {
        assert_eq!(
            parse_fragment("#/en/news/open-house", Lang::Ja),
            Outcome::Load {
                lang: Lang::En,
                path: "/news/open-house".into()
            }
        );
    }

    #[test]
    fn missing_locale_corrects_with_current_prefix() {
        assert_eq!(
            parse_fragment("#/research", Lang::Ja),
            Outcome::Correct {
                fragment: "/ja/research".into()
            }
        );
    }

    #[test]
    fn bare_slash_corrects_without_doubling() {
        assert_eq!(
            parse_fragment("#/", Lang::Ja),
            Outcome::Correct {
                fragment: "/ja".into()
            }
        );
    }

    #[test]
    fn empty_fragment_corrects_like_bare_slash() {
        assert_eq!(
            parse_fragment("", Lang::En),
            Outcome::Correct {
                fragment: "/en".into()
            }
        );
    }

    #[test]
    fn correction_converges_in_two_applications() {
        for fragment in ["", "#/", "#/research", "#/xx/news", "#/member/taro"] {
            match parse_fragment(fragment, Lang::Ja) {
                Outcome::Load { .. } => {}
                Outcome::Correct { fragment } => {
                    assert!(
                        fragment.starts_with("/ja"),
                        "corrected '{}' must start with the current locale",
                        fragment
                    );
                    assert!(
                        matches!(parse_fragment(&fragment, Lang::Ja), Outcome::Load { .. }),
                        "second application of '{}' must load",
                        fragment
                    );
                }
            }
        }
    }

    #[test]
    fn empty_segments_are_discarded() {
        assert_eq!(
            parse_fragment("#//en//news//", Lang::Ja),
            Outcome::Load {
                lang: Lang::En,
                path: "/news".into()
            }
        );
    }
}
