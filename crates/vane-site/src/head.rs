//! HTML head tag declarations.
//!
//! Tags are emitted verbatim by the generator, so they serialize in its
//! `[tagName, { attr: value }]` pair form with attribute order preserved.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A `<tag attr="value">` element injected into every page head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeadTagRepr", into = "HeadTagRepr")]
pub struct HeadTag {
    tag: String,
    attrs: IndexMap<String, String>,
}

type HeadTagRepr = (String, IndexMap<String, String>);

impl From<HeadTagRepr> for HeadTag {
    fn from((tag, attrs): HeadTagRepr) -> Self {
        Self { tag, attrs }
    }
}

impl From<HeadTag> for HeadTagRepr {
    fn from(tag: HeadTag) -> Self {
        (tag.tag, tag.attrs)
    }
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
        }
    }

    /// `<link rel=... href=...>`
    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new("link").attr("rel", rel).attr("href", href)
    }

    /// `<meta name=... content=...>`
    pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    /// Set an attribute. Re-setting keeps the original position.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Attributes this tag needs but does not carry, in check order.
    ///
    /// Tags without rules (`style`, `noscript`, ...) never report anything.
    #[must_use]
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.tag.to_ascii_lowercase().as_str() {
            "link" => {
                if !self.has("rel") {
                    missing.push("rel");
                }
                let needs_href = self.get("rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|r| LINK_RELS_WITH_HREF.contains(&r.to_ascii_lowercase().as_str()))
                });
                if needs_href && !self.has("href") {
                    missing.push("href");
                }
            }
            "meta" => {
                if self.has("charset") {
                    return missing;
                }
                if !self.has("name") && !self.has("property") && !self.has("http-equiv") {
                    missing.push("name");
                }
                if !self.has("content") {
                    missing.push("content");
                }
            }
            "script" => {
                if !self.has("src") {
                    missing.push("src");
                }
            }
            "base" => {
                if !self.has("href") && !self.has("target") {
                    missing.push("href");
                }
            }
            _ => {}
        }
        missing
    }
}

/// `rel` values whose link is meaningless without `href`.
const LINK_RELS_WITH_HREF: &[&str] = &[
    "icon",
    "apple-touch-icon",
    "manifest",
    "stylesheet",
    "mask-icon",
    "preload",
    "prefetch",
    "preconnect",
    "canonical",
    "alternate",
];
