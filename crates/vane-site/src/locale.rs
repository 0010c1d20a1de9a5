//! Per-locale metadata and theme labels.

use serde::{Deserialize, Serialize};

use crate::nav::{NavItem, SidebarGroup};

/// Code of the locale served from `/`.
pub const ROOT_LOCALE: &str = "root";

/// Path prefix owned by a locale: `/` for [`ROOT_LOCALE`], `/{code}/` otherwise.
#[must_use]
pub fn locale_prefix(code: &str) -> String {
    if code == ROOT_LOCALE {
        "/".to_owned()
    } else {
        format!("/{}/", code.trim_matches('/'))
    }
}

/// Metadata for one language variant of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    label: String,
    lang: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    theme_config: LocaleThemeConfig,
}

impl LocaleConfig {
    /// Start a locale with its switcher label and `lang` attribute.
    pub fn builder(label: impl Into<String>, lang: impl Into<String>) -> LocaleBuilder {
        LocaleBuilder {
            locale: Self {
                label: label.into(),
                lang: lang.into(),
                title: String::new(),
                title_template: None,
                description: None,
                theme_config: LocaleThemeConfig::default(),
            },
        }
    }

    /// Name shown in the language switcher.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// BCP 47 tag written to `<html lang>`.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn title_template(&self) -> Option<&str> {
        self.title_template.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn theme(&self) -> &LocaleThemeConfig {
        &self.theme_config
    }
}

/// Builder for [`LocaleConfig`].
#[derive(Debug)]
pub struct LocaleBuilder {
    locale: LocaleConfig,
}

impl LocaleBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.locale.title = title.into();
        self
    }

    /// Page title template, e.g. `:title | Guide`.
    #[must_use]
    pub fn title_template(mut self, template: impl Into<String>) -> Self {
        self.locale.title_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.locale.description = Some(description.into());
        self
    }

    /// Append a top navigation entry.
    #[must_use]
    pub fn nav(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.locale.theme_config.nav.push(NavItem::new(text, link));
        self
    }

    /// Append a sidebar group.
    #[must_use]
    pub fn sidebar(mut self, group: SidebarGroup) -> Self {
        self.locale.theme_config.sidebar.push(group);
        self
    }

    /// Footer message line; the copyright line is set separately.
    #[must_use]
    pub fn footer_message(mut self, message: impl Into<String>) -> Self {
        self.footer_mut().message = Some(message.into());
        self
    }

    #[must_use]
    pub fn footer_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.footer_mut().copyright = Some(copyright.into());
        self
    }

    fn footer_mut(&mut self) -> &mut Footer {
        self.locale.theme_config.footer.get_or_insert(Footer {
            message: None,
            copyright: None,
        })
    }

    /// Heading of the "on this page" outline.
    #[must_use]
    pub fn outline_label(mut self, label: impl Into<String>) -> Self {
        self.locale.theme_config.outline = Some(Outline {
            label: label.into(),
        });
        self
    }

    /// Labels of the previous/next page links.
    #[must_use]
    pub fn doc_footer(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.locale.theme_config.doc_footer = Some(DocFooter {
            prev: prev.into(),
            next: next.into(),
        });
        self
    }

    #[must_use]
    pub fn last_updated_text(mut self, text: impl Into<String>) -> Self {
        self.locale.theme_config.last_updated_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn return_to_top_label(mut self, label: impl Into<String>) -> Self {
        self.locale.theme_config.return_to_top_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn build(self) -> LocaleConfig {
        self.locale
    }
}

/// Theme labels and navigation trees for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleThemeConfig {
    #[serde(default)]
    nav: Vec<NavItem>,
    #[serde(default)]
    sidebar: Vec<SidebarGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    footer: Option<Footer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outline: Option<Outline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc_footer: Option<DocFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    return_to_top_label: Option<String>,
}

impl LocaleThemeConfig {
    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    #[must_use]
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    #[must_use]
    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    #[must_use]
    pub fn outline_label(&self) -> Option<&str> {
        self.outline.as_ref().map(|o| o.label.as_str())
    }

    #[must_use]
    pub fn doc_footer(&self) -> Option<&DocFooter> {
        self.doc_footer.as_ref()
    }

    #[must_use]
    pub fn last_updated_text(&self) -> Option<&str> {
        self.last_updated_text.as_deref()
    }

    #[must_use]
    pub fn return_to_top_label(&self) -> Option<&str> {
        self.return_to_top_label.as_deref()
    }
}

/// Page footer text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Outline {
    label: String,
}

/// Previous/next link labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocFooter {
    pub prev: String,
    pub next: String,
}
