//! CLI command implementations.

mod check;
mod render;
mod routes;

use std::path::PathBuf;

use clap::Args;
use vane_config::{CliSettings, Config};
use vane_site::{SiteConfig, proxy_site};

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use routes::RoutesArgs;

use crate::error::CliError;

/// Where the site comes from; shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover vane.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site definition file, .json or .toml (overrides config).
    #[arg(short, long, env = "VANE_DEFINITION")]
    definition: Option<PathBuf>,
}

impl SiteArgs {
    /// Load project settings, then the site they point at.
    ///
    /// Without a definition file the built-in proxy guide is used.
    pub(crate) fn load(&self, mut settings: CliSettings) -> Result<(Config, SiteConfig), CliError> {
        if settings.definition.is_none() {
            settings.definition.clone_from(&self.definition);
        }
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let site = load_site(&config)?;
        Ok((config, site))
    }
}

fn load_site(config: &Config) -> Result<SiteConfig, CliError> {
    let site = match &config.site_resolved.definition {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading site definition");
            SiteConfig::load(path)?
        }
        None => {
            tracing::info!("Using built-in proxy guide");
            proxy_site()
        }
    };
    Ok(site.with_dirs(
        config.site_resolved.src_dir.as_deref(),
        config.site_resolved.out_dir.as_deref(),
    ))
}
