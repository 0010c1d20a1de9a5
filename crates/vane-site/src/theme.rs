//! Site-wide theme options shared by every locale.

use serde::{Deserialize, Serialize};

/// Global theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    site_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<Search>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logo: Option<Logo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    social_links: Vec<SocialLink>,
}

impl ThemeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn search(mut self, provider: SearchProvider) -> Self {
        self.search = Some(Search { provider });
        self
    }

    #[must_use]
    pub fn logo(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.logo = Some(Logo {
            light: light.into(),
            dark: dark.into(),
        });
        self
    }

    #[must_use]
    pub fn social_link(mut self, icon: SocialIcon, link: impl Into<String>) -> Self {
        self.social_links.push(SocialLink {
            icon,
            link: link.into(),
        });
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.site_title.as_deref()
    }

    #[must_use]
    pub fn search_provider(&self) -> Option<SearchProvider> {
        self.search.as_ref().map(|s| s.provider)
    }

    #[must_use]
    pub fn logos(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Search {
    provider: SearchProvider,
}

/// Search backend understood by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built at generation time.
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia,
}

/// Logo paths for light and dark color schemes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub light: String,
    pub dark: String,
}

/// Icon link shown in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    icon: SocialIcon,
    link: String,
}

impl SocialLink {
    #[must_use]
    pub fn icon(&self) -> &SocialIcon {
        &self.icon
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Either a named icon from the theme's set or inline SVG markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialIcon {
    Named(String),
    Svg { svg: String },
}

impl SocialIcon {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn svg(markup: impl Into<String>) -> Self {
        Self::Svg { svg: markup.into() }
    }

    /// Short label for listings: the icon name, or `svg`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Svg { .. } => "svg",
        }
    }
}
