//! The site configuration value and its builder.
//!
//! A [`SiteConfig`] is assembled once, either by [`SiteBuilder`] or by
//! deserializing a site definition file, and is never mutated afterwards.
//! Locale order is insertion order and survives serialization.
//!
//! # Example
//!
//! ```
//! use vane_site::{LocaleConfig, SidebarGroup, SiteBuilder};
//!
//! let site = SiteBuilder::new("docs", "dist")
//!     .locale(
//!         "en",
//!         LocaleConfig::builder("English", "en-US")
//!             .title("Guide")
//!             .nav("Use", "/en/use")
//!             .sidebar(SidebarGroup::new("Guide").base("/en").item("Use", "/use"))
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert!(site.validate().is_empty());
//! assert_eq!(site.routes()[0].path, "/en/use");
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SiteError;
use crate::head::HeadTag;
use crate::locale::LocaleConfig;
use crate::theme::ThemeConfig;

/// Complete configuration document handed to the site generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    src_dir: String,
    out_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    clean_urls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<bool>,
    locales: Locales,
    #[serde(default)]
    head: Vec<HeadTag>,
    #[serde(default)]
    theme_config: ThemeConfig,
}

/// A resolved sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub locale: String,
    pub group: String,
    pub text: String,
    pub path: String,
}

impl SiteConfig {
    #[must_use]
    pub fn src_dir(&self) -> &str {
        &self.src_dir
    }

    #[must_use]
    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }

    #[must_use]
    pub fn clean_urls(&self) -> Option<bool> {
        self.clean_urls
    }

    #[must_use]
    pub fn last_updated(&self) -> Option<bool> {
        self.last_updated
    }

    /// Locales in declaration order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &LocaleConfig)> {
        self.locales.0.iter().map(|(code, locale)| (code.as_str(), locale))
    }

    #[must_use]
    pub fn locale(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.0.get(code)
    }

    #[must_use]
    pub fn locale_codes(&self) -> Vec<&str> {
        self.locales.0.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme_config
    }

    /// Every sidebar link resolved against its group base, in declaration order.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.locales()
            .flat_map(|(code, locale)| {
                locale.theme().sidebar().iter().flat_map(move |group| {
                    group.resolved_links().map(move |(item, path)| Route {
                        locale: code.to_owned(),
                        group: group.text().to_owned(),
                        text: item.text().to_owned(),
                        path,
                    })
                })
            })
            .collect()
    }

    /// Copy with `srcDir`/`outDir` replaced where an override is given.
    #[must_use]
    pub fn with_dirs(mut self, src_dir: Option<&str>, out_dir: Option<&str>) -> Self {
        if let Some(src_dir) = src_dir {
            src_dir.clone_into(&mut self.src_dir);
        }
        if let Some(out_dir) = out_dir {
            out_dir.clone_into(&mut self.out_dir);
        }
        self
    }

    /// Load a site definition from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or declares no locales.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let is_json = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => true,
            Some("toml") => false,
            _ => return Err(SiteError::UnsupportedFormat(path.to_path_buf())),
        };
        let content = std::fs::read_to_string(path)?;

        let site: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        if site.locales.0.is_empty() {
            return Err(SiteError::NoLocales);
        }

        tracing::debug!(
            path = %path.display(),
            locales = site.locales.0.len(),
            head_tags = site.head.len(),
            "Loaded site definition"
        );
        Ok(site)
    }
}

/// Locale map that refuses duplicate codes when deserialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
struct Locales(IndexMap<String, LocaleConfig>);

impl<'de> Deserialize<'de> for Locales {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocalesVisitor;

        impl<'de> Visitor<'de> for LocalesVisitor {
            type Value = Locales;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of locale code to locale configuration")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Locales, A::Error> {
                let mut locales = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, locale)) = map.next_entry::<String, LocaleConfig>()? {
                    if locales.contains_key(&code) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate locale code '{code}'"
                        )));
                    }
                    locales.insert(code, locale);
                }
                Ok(Locales(locales))
            }
        }

        deserializer.deserialize_map(LocalesVisitor)
    }
}

/// Builder for [`SiteConfig`].
#[derive(Debug)]
pub struct SiteBuilder {
    src_dir: String,
    out_dir: String,
    clean_urls: Option<bool>,
    last_updated: Option<bool>,
    locales: IndexMap<String, LocaleConfig>,
    duplicate: Option<String>,
    head: Vec<HeadTag>,
    theme: ThemeConfig,
}

impl SiteBuilder {
    pub fn new(src_dir: impl Into<String>, out_dir: impl Into<String>) -> Self {
        Self {
            src_dir: src_dir.into(),
            out_dir: out_dir.into(),
            clean_urls: None,
            last_updated: None,
            locales: IndexMap::new(),
            duplicate: None,
            head: Vec::new(),
            theme: ThemeConfig::default(),
        }
    }

    /// Add a locale. The first duplicate code is reported by [`build`](Self::build).
    #[must_use]
    pub fn locale(mut self, code: impl Into<String>, locale: LocaleConfig) -> Self {
        let code = code.into();
        if self.locales.contains_key(&code) {
            self.duplicate.get_or_insert(code);
        } else {
            self.locales.insert(code, locale);
        }
        self
    }

    #[must_use]
    pub fn head(mut self, tag: HeadTag) -> Self {
        self.head.push(tag);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn clean_urls(mut self, enabled: bool) -> Self {
        self.clean_urls = Some(enabled);
        self
    }

    #[must_use]
    pub fn last_updated(mut self, enabled: bool) -> Self {
        self.last_updated = Some(enabled);
        self
    }

    /// Finish the site.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::DuplicateLocale`] if a code was added twice and
    /// [`SiteError::NoLocales`] if none was added.
    pub fn build(self) -> Result<SiteConfig, SiteError> {
        if let Some(code) = self.duplicate {
            return Err(SiteError::DuplicateLocale(code));
        }
        if self.locales.is_empty() {
            return Err(SiteError::NoLocales);
        }
        Ok(SiteConfig {
            src_dir: self.src_dir,
            out_dir: self.out_dir,
            clean_urls: self.clean_urls,
            last_updated: self.last_updated,
            locales: Locales(self.locales),
            head: self.head,
            theme_config: self.theme,
        })
    }
}
