//! `vane routes` command implementation.

use std::io::Write;

use clap::Args;
use vane_config::CliSettings;
use vane_site::{LocaleConfig, Route, SiteConfig};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only list routes of this locale code.
    #[arg(short, long)]
    locale: Option<String>,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load(CliSettings::default())?;

        let routes = select(&site, self.locale.as_deref())?;
        let mut stdout = std::io::stdout().lock();
        let mut current = None;
        for route in &routes {
            if current != Some(route.locale.as_str()) {
                current = Some(route.locale.as_str());
                let label = site.locale(&route.locale).map_or("", LocaleConfig::label);
                output.highlight(&format!("{} ({label})", route.locale));
            }
            writeln!(stdout, "{}", format_route(route))?;
        }

        output.info(&format!("{} route(s)", routes.len()));
        Ok(())
    }
}

fn select(site: &SiteConfig, locale: Option<&str>) -> Result<Vec<Route>, CliError> {
    let routes = site.routes();
    let Some(code) = locale else {
        return Ok(routes);
    };
    if site.locale(code).is_none() {
        return Err(CliError::Validation(format!(
            "unknown locale '{code}' (available: {})",
            site.locale_codes().join(", ")
        )));
    }
    Ok(routes.into_iter().filter(|r| r.locale == code).collect())
}

fn format_route(route: &Route) -> String {
    format!("{:<32} {} / {}", route.path, route.group, route.text)
}
