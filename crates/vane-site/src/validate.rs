//! Structural validation of a site configuration.
//!
//! The generator only fails late (404s, broken heads) on a bad definition,
//! so these checks run before anything is written.

use std::collections::HashSet;

use crate::error::{Issue, SiteError};
use crate::locale::{locale_prefix, LocaleConfig, ROOT_LOCALE};
use crate::nav::{is_external, normalize_link};
use crate::site::SiteConfig;

impl SiteConfig {
    /// Collect every structural issue, in document order.
    #[must_use]
    pub fn validate(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        let codes = self.locale_codes();
        if codes.is_empty() {
            issues.push(Issue::NoLocales);
        }

        for (code, locale) in self.locales() {
            check_fields(code, locale, &mut issues);
            check_links(code, locale, &codes, &mut issues);
        }

        for (index, tag) in self.head().iter().enumerate() {
            for attribute in tag.missing_attributes() {
                issues.push(Issue::MissingHeadAttribute {
                    index,
                    tag: tag.tag().to_owned(),
                    attribute,
                });
            }
        }

        for (index, social) in self.theme().social_links().iter().enumerate() {
            let link = social.link();
            if !(link.starts_with("https://") || link.starts_with("http://")) {
                issues.push(Issue::InvalidSocialLink {
                    index,
                    link: link.to_owned(),
                });
            }
        }

        if !issues.is_empty() {
            tracing::debug!(issues = issues.len(), "Site validation found issues");
        }
        issues
    }

    /// Fail with every issue if the site is not structurally valid.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Invalid`] listing all issues found.
    pub fn ensure_valid(&self) -> Result<(), SiteError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(SiteError::Invalid(issues))
        }
    }
}

fn check_fields(code: &str, locale: &LocaleConfig, issues: &mut Vec<Issue>) {
    let fields = [
        ("label", locale.label()),
        ("lang", locale.lang()),
        ("title", locale.title()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            issues.push(Issue::EmptyField {
                locale: code.to_owned(),
                field,
            });
        }
    }
}

/// Whether an internal, normalized link lives under the locale's prefix.
///
/// The root locale owns everything not claimed by another locale.
fn under_prefix(code: &str, link: &str, codes: &[&str]) -> bool {
    if code == ROOT_LOCALE {
        return !codes
            .iter()
            .filter(|other| **other != ROOT_LOCALE)
            .any(|other| owns(&locale_prefix(other), link));
    }
    owns(&locale_prefix(code), link)
}

fn owns(prefix: &str, link: &str) -> bool {
    link.starts_with(prefix) || link == prefix.trim_end_matches('/')
}

fn check_links(code: &str, locale: &LocaleConfig, codes: &[&str], issues: &mut Vec<Issue>) {
    let prefix = locale_prefix(code);
    let outside = |link: &str, issues: &mut Vec<Issue>| {
        issues.push(Issue::OutsideLocalePrefix {
            locale: code.to_owned(),
            link: link.to_owned(),
            prefix: prefix.clone(),
        });
    };

    let mut sidebar = HashSet::new();
    for group in locale.theme().sidebar() {
        for (_, link) in group.resolved_links() {
            if is_external(&link) {
                continue;
            }
            let normalized = normalize_link(&link);
            if !under_prefix(code, &normalized, codes) {
                outside(&link, issues);
            }
            sidebar.insert(normalized);
        }
    }

    let home = normalize_link(&prefix);
    for item in locale.theme().nav() {
        if is_external(item.link()) {
            continue;
        }
        let normalized = normalize_link(item.link());
        if !under_prefix(code, &normalized, codes) {
            outside(item.link(), issues);
        } else if normalized != home && !sidebar.contains(&normalized) {
            issues.push(Issue::UnresolvedNavLink {
                locale: code.to_owned(),
                text: item.text().to_owned(),
                link: item.link().to_owned(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::HeadTag;
    use crate::nav::SidebarGroup;
    use crate::site::SiteBuilder;
    use crate::theme::{SocialIcon, ThemeConfig};
    use pretty_assertions::assert_eq;

    fn guide(label: &str, lang: &str, base: &str) -> crate::locale::LocaleBuilder {
        LocaleConfig::builder(label, lang).title("Guide").sidebar(
            SidebarGroup::new("Guide")
                .base(base)
                .item("Intro", "/intro")
                .item("Use", "/use"),
        )
    }

    fn site_with(locales: Vec<(&str, LocaleConfig)>) -> SiteConfig {
        locales
            .into_iter()
            .fold(SiteBuilder::new("docs", "dist"), |b, (code, locale)| {
                b.locale(code, locale)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_two_locale_site() {
        let site = site_with(vec![
            ("root", guide("简体中文", "zh-CN", "/").nav("使用", "/use").build()),
            ("en", guide("English", "en-US", "/en").nav("Use", "/en/use").build()),
        ]);
        assert_eq!(site.validate(), Vec::<Issue>::new());
        assert!(site.ensure_valid().is_ok());
    }

    #[test]
    fn test_nav_link_variants_resolve() {
        let site = site_with(vec![(
            "en",
            guide("English", "en-US", "/en")
                .nav("Home", "/en/")
                .nav("Use", "/en/use.html")
                .nav("Intro", "/en/intro/")
                .nav("Status", "https://status.example.com")
                .build(),
        )]);
        assert_eq!(site.validate(), Vec::<Issue>::new());
    }

    #[test]
    fn test_protocol_relative_nav_link_is_external() {
        let site = site_with(vec![(
            "en",
            guide("English", "en-US", "/en")
                .nav("Status", "//cdn.example.com/status")
                .build(),
        )]);
        assert_eq!(site.validate(), Vec::<Issue>::new());
    }

    #[test]
    fn test_nav_link_missing_from_sidebar() {
        let site = site_with(vec![(
            "en",
            guide("English", "en-US", "/en").nav("Pricing", "/en/pricing").build(),
        )]);
        assert_eq!(
            site.validate(),
            vec![Issue::UnresolvedNavLink {
                locale: "en".to_owned(),
                text: "Pricing".to_owned(),
                link: "/en/pricing".to_owned(),
            }]
        );
    }

    #[test]
    fn test_nav_link_in_other_locale() {
        let site = site_with(vec![
            ("root", guide("简体中文", "zh-CN", "/").nav("Use", "/en/use").build()),
            ("en", guide("English", "en-US", "/en").build()),
        ]);
        assert_eq!(
            site.validate(),
            vec![Issue::OutsideLocalePrefix {
                locale: "root".to_owned(),
                link: "/en/use".to_owned(),
                prefix: "/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_sidebar_outside_prefix() {
        let site = site_with(vec![("en", guide("English", "en-US", "/docs").build())]);
        let issues = site.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| matches!(i, Issue::OutsideLocalePrefix { prefix, .. } if prefix == "/en/")));
    }

    #[test]
    fn test_empty_fields() {
        let site = site_with(vec![("en", LocaleConfig::builder("", "en").build())]);
        assert_eq!(
            site.validate(),
            vec![
                Issue::EmptyField {
                    locale: "en".to_owned(),
                    field: "label",
                },
                Issue::EmptyField {
                    locale: "en".to_owned(),
                    field: "title",
                },
            ]
        );
    }

    #[test]
    fn test_head_icon_without_href() {
        let site = SiteBuilder::new("docs", "dist")
            .locale("en", guide("English", "en-US", "/en").build())
            .head(HeadTag::link("icon", "/favicon.ico"))
            .head(HeadTag::new("link").attr("rel", "icon"))
            .build()
            .unwrap();
        assert_eq!(
            site.validate(),
            vec![Issue::MissingHeadAttribute {
                index: 1,
                tag: "link".to_owned(),
                attribute: "href",
            }]
        );
    }

    #[test]
    fn test_social_link_requires_url() {
        let site = SiteBuilder::new("docs", "dist")
            .locale("en", guide("English", "en-US", "/en").build())
            .theme(ThemeConfig::new().social_link(SocialIcon::named("github"), "github.com/x"))
            .build()
            .unwrap();
        let err = site.ensure_valid().unwrap_err();
        assert!(matches!(err, SiteError::Invalid(ref issues) if issues.len() == 1));
    }

    #[test]
    fn test_no_locales_in_parsed_document() {
        let site: SiteConfig =
            serde_json::from_str(r#"{"srcDir":"docs","outDir":"dist","locales":{}}"#).unwrap();
        assert_eq!(site.validate(), vec![Issue::NoLocales]);
    }
}
