//! The built-in proxy guide site.

use crate::head::HeadTag;
use crate::locale::LocaleConfig;
use crate::nav::SidebarGroup;
use crate::site::{SiteBuilder, SiteConfig};
use crate::theme::{SearchProvider, SocialIcon, ThemeConfig};

const TELEGRAM_SVG: &str = r#"<svg role="img" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><title>Telegram</title><path d="M12 0a12 12 0 1 0 0 24 12 12 0 0 0 0-24zm5.56 8.16-1.97 9.28c-.15.66-.54.82-1.09.51l-3-2.21-1.45 1.39c-.16.16-.3.3-.61.3l.21-3.05 5.56-5.02c.24-.21-.05-.33-.37-.12l-6.87 4.33-2.96-.92c-.64-.2-.66-.64.14-.95l11.57-4.46c.54-.2 1.01.13.84.92z"/></svg>"#;

/// Proxy guide: Simplified Chinese at `/`, English at `/en/`.
#[must_use]
pub fn proxy_site() -> SiteConfig {
    let root = LocaleConfig::builder("简体中文", "zh-CN")
        .title("Vane")
        .title_template(":title | Vane")
        .description("Vane 代理服务使用指南")
        .nav("首页", "/")
        .nav("使用指南", "/guide/use")
        .nav("客户端", "/clients/windows")
        .nav("常见问题", "/faq")
        .sidebar(
            SidebarGroup::new("入门")
                .base("/guide")
                .item("介绍", "/intro")
                .item("快速开始", "/start")
                .item("使用指南", "/use"),
        )
        .sidebar(
            SidebarGroup::new("客户端")
                .base("/clients")
                .item("Windows", "/windows")
                .item("macOS", "/macos")
                .item("Android", "/android")
                .item("iOS", "/ios"),
        )
        .sidebar(
            SidebarGroup::new("帮助")
                .item("常见问题", "/faq")
                .item("联系我们", "/contact"),
        )
        .footer_message("基于 MIT 许可发布")
        .footer_copyright("Copyright © 2024 Vane")
        .outline_label("本页目录")
        .doc_footer("上一页", "下一页")
        .last_updated_text("最后更新")
        .return_to_top_label("回到顶部")
        .build();

    let en = LocaleConfig::builder("English", "en-US")
        .title("Vane")
        .title_template(":title | Vane")
        .description("User guide for the Vane proxy service")
        .nav("Home", "/en/")
        .nav("Guide", "/en/guide/use")
        .nav("Clients", "/en/clients/windows")
        .nav("FAQ", "/en/faq")
        .sidebar(
            SidebarGroup::new("Getting Started")
                .base("/en/guide")
                .item("Introduction", "/intro")
                .item("Quick Start", "/start")
                .item("Usage", "/use"),
        )
        .sidebar(
            SidebarGroup::new("Clients")
                .base("/en/clients")
                .item("Windows", "/windows")
                .item("macOS", "/macos")
                .item("Android", "/android")
                .item("iOS", "/ios"),
        )
        .sidebar(
            SidebarGroup::new("Help")
                .base("/en")
                .item("FAQ", "/faq")
                .item("Contact", "/contact"),
        )
        .footer_message("Released under the MIT License")
        .footer_copyright("Copyright © 2024 Vane")
        .outline_label("On this page")
        .doc_footer("Previous page", "Next page")
        .last_updated_text("Last updated")
        .return_to_top_label("Return to top")
        .build();

    let theme = ThemeConfig::new()
        .site_title("Vane")
        .search(SearchProvider::Local)
        .logo("/logo-light.svg", "/logo-dark.svg")
        .social_link(
            SocialIcon::named("github"),
            "https://github.com/vane-proxy/vane-docs",
        )
        .social_link(SocialIcon::svg(TELEGRAM_SVG), "https://t.me/vane_proxy");

    SiteBuilder::new("docs", "dist")
        .clean_urls(true)
        .last_updated(true)
        .locale("root", root)
        .locale("en", en)
        .head(HeadTag::link("icon", "/favicon.ico"))
        .head(
            HeadTag::new("link")
                .attr("rel", "icon")
                .attr("type", "image/svg+xml")
                .attr("href", "/logo.svg"),
        )
        .head(HeadTag::link("apple-touch-icon", "/apple-touch-icon.png"))
        .head(HeadTag::link("manifest", "/manifest.webmanifest"))
        .head(HeadTag::meta("theme-color", "#3eaf7c"))
        .theme(theme)
        .build()
        .expect("built-in site has two distinct locales")
}
