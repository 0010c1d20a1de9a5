//! Site errors and validation issues.

use std::path::PathBuf;

/// Structural problem found by [`SiteConfig::validate`](crate::SiteConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("no locales defined")]
    NoLocales,

    #[error("locale '{locale}': {field} cannot be empty")]
    EmptyField {
        locale: String,
        field: &'static str,
    },

    #[error("locale '{locale}': nav item '{text}' links to {link}, which is not in the sidebar")]
    UnresolvedNavLink {
        locale: String,
        text: String,
        link: String,
    },

    #[error("locale '{locale}': link {link} is outside the locale prefix {prefix}")]
    OutsideLocalePrefix {
        locale: String,
        link: String,
        prefix: String,
    },

    #[error("head[{index}] <{tag}> is missing required attribute '{attribute}'")]
    MissingHeadAttribute {
        index: usize,
        tag: String,
        attribute: &'static str,
    },

    #[error("socialLinks[{index}]: '{link}' is not an http(s) URL")]
    InvalidSocialLink { index: usize, link: String },
}

/// Site definition error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("site has no locales")]
    NoLocales,

    #[error("duplicate locale code '{0}'")]
    DuplicateLocale(String),

    #[error("site definition has {} issue(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Issue>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported site definition format: {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lists_every_issue() {
        let err = SiteError::Invalid(vec![
            Issue::NoLocales,
            Issue::InvalidSocialLink {
                index: 0,
                link: "github.com".to_owned(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("site definition has 2 issue(s)"));
        assert!(msg.contains("no locales defined"));
        assert!(msg.contains("socialLinks[0]"));
    }
}
