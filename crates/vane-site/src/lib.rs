//! Typed documentation-site configuration for Vane.
//!
//! This crate provides:
//! - [`SiteConfig`]: the configuration document consumed by the external
//!   static-site generator (locales, head tags, global theme)
//! - [`SiteBuilder`] and [`LocaleConfig::builder`] for assembling it
//! - [`proxy_site`]: the built-in proxy guide
//! - Structural validation ([`SiteConfig::validate`]) and deterministic JSON
//!   rendering ([`render`])
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use vane_site::{proxy_site, render};
//!
//! let site = proxy_site();
//! site.ensure_valid()?;
//! let json = render::to_json(&site, true)?;
//! assert!(json.contains("\"locales\""));
//! # Ok(())
//! # }
//! ```

mod error;
mod head;
mod locale;
mod nav;
mod proxy;
pub mod render;
mod site;
mod theme;
mod validate;

pub use error::{Issue, SiteError};
pub use head::HeadTag;
pub use locale::{
    DocFooter, Footer, LocaleBuilder, LocaleConfig, LocaleThemeConfig, ROOT_LOCALE, locale_prefix,
};
pub use nav::{NavItem, SidebarGroup, is_external, normalize_link, resolve_link};
pub use proxy::proxy_site;
pub use site::{Route, SiteBuilder, SiteConfig};
pub use theme::{Logo, SearchProvider, SocialIcon, SocialLink, ThemeConfig};

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::SiteConfig: Send, Sync, Clone);
    static_assertions::assert_impl_all!(super::SiteError: Send, Sync);
}
