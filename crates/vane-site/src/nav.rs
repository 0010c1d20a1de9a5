//! Navigation items, sidebar groups, and link resolution.
//!
//! Links are stored exactly as declared. Resolution joins a sidebar group's
//! base prefix with each item link; comparison goes through [`normalize_link`]
//! so `/en/use`, `/en/use/` and `/en/use.html` name the same page.
//!
//! # Example
//!
//! ```
//! use vane_site::resolve_link;
//!
//! assert_eq!(resolve_link(Some("/en"), "/use"), "/en/use");
//! assert_eq!(resolve_link(None, "/faq"), "/faq");
//! ```

use serde::{Deserialize, Serialize};

/// Menu entry: display text and link target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    text: String,
    link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Sidebar group: a heading over an ordered list of items.
///
/// When `base` is set, every item link is resolved relative to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            base: None,
            collapsed: None,
            items: Vec::new(),
        }
    }

    /// Set the base path prefix for item links.
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.items.push(NavItem::new(text, link));
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base.as_deref()
    }

    #[must_use]
    pub fn is_collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Item links joined with the group base, in declaration order.
    pub fn resolved_links(&self) -> impl Iterator<Item = (&NavItem, String)> {
        self.items
            .iter()
            .map(|item| (item, resolve_link(self.base.as_deref(), &item.link)))
    }
}

/// Whether `link` points off-site (`https://...`, `mailto:...`, `//cdn...`).
#[must_use]
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Join an optional base prefix with an item link.
///
/// External links and links without a base are returned unchanged.
#[must_use]
pub fn resolve_link(base: Option<&str>, link: &str) -> String {
    match base {
        Some(base) if !is_external(link) => {
            let base = base.trim_end_matches('/');
            let link = link.trim_start_matches('/');
            if link.is_empty() {
                format!("{base}/")
            } else {
                format!("{base}/{link}")
            }
        }
        _ => link.to_owned(),
    }
}

/// Canonical form used when comparing internal links.
///
/// Drops `#fragment` and `?query`, a `.html`/`.md` suffix, and a trailing
/// slash. The site root stays `/`.
#[must_use]
pub fn normalize_link(link: &str) -> String {
    let path = link
        .split_once(['#', '?'])
        .map_or(link, |(path, _)| path);
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "/".to_owned()
    } else if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
