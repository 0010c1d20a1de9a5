//! `vane check` command implementation.

use clap::Args;
use vane_config::CliSettings;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load(CliSettings::default())?;

        let issues = site.validate();
        if !issues.is_empty() {
            for issue in &issues {
                output.warning(&format!("  {issue}"));
            }
            return Err(CliError::Validation(format!(
                "{} issue(s) found in site definition",
                issues.len()
            )));
        }

        output.success(&format!(
            "Site definition is valid: {} locale(s), {} route(s), {} head tag(s)",
            site.locale_codes().len(),
            site.routes().len(),
            site.head().len()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_definition_fails_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("vane.toml");
        std::fs::write(&config, "").unwrap();
        let definition = dir.path().join("site.json");
        std::fs::write(
            &definition,
            r#"{"srcDir":"docs","outDir":"dist","locales":{"en":{"label":"English","lang":"en","title":"","themeConfig":{"nav":[{"text":"Pricing","link":"/en/pricing"}]}}}}"#,
        )
        .unwrap();
        let args = CheckArgs {
            site: SiteArgs {
                config: Some(config),
                definition: Some(definition),
            },
        };

        let err = args.execute().unwrap_err();

        let CliError::Validation(message) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(message.starts_with("2 issue(s)"));
    }

    #[test]
    fn test_builtin_site_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("vane.toml");
        std::fs::write(&config, "").unwrap();
        let args = CheckArgs {
            site: SiteArgs {
                config: Some(config),
                definition: None,
            },
        };

        assert!(args.execute().is_ok());
    }
}
