//! `vane render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use vane_config::CliSettings;
use vane_site::render;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output file (default: output.path from config).
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the document to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Emit compact JSON.
    #[arg(long)]
    compact: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            output_path: self.output,
            pretty: self.compact.then_some(false),
            ..CliSettings::default()
        };
        let (config, site) = self.site.load(settings)?;
        site.ensure_valid()?;

        let pretty = config.output_resolved.pretty;
        if self.stdout {
            let json = render::to_json(&site, pretty)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
            return Ok(());
        }

        let path = &config.output_resolved.path;
        render::write(&site, path, pretty)?;
        output.success(&format!("Wrote site configuration to {}", path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(dir: &std::path::Path, compact: bool) -> RenderArgs {
        let config = dir.join("vane.toml");
        std::fs::write(&config, "").unwrap();
        RenderArgs {
            site: SiteArgs {
                config: Some(config),
                definition: None,
            },
            output: Some(dir.join("out/site.json")),
            stdout: false,
            compact,
        }
    }

    #[test]
    fn test_compact_writes_single_line() {
        let dir = tempfile::tempdir().unwrap();

        args(dir.path(), true).execute().unwrap();

        let content = std::fs::read_to_string(dir.path().join("out/site.json")).unwrap();
        assert_eq!(content.trim_end().lines().count(), 1);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_default_output_is_pretty() {
        let dir = tempfile::tempdir().unwrap();

        args(dir.path(), false).execute().unwrap();

        let content = std::fs::read_to_string(dir.path().join("out/site.json")).unwrap();
        assert!(content.lines().count() > 1);
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["locales"]["en"]["lang"], "en-US");
    }
}
