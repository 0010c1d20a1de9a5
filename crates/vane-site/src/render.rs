//! JSON rendering of the configuration document.
//!
//! Output is deterministic: locales, head tags, navigation, and attributes
//! keep insertion order, so rendering a parsed document reproduces it byte
//! for byte.

use std::path::Path;

use crate::error::SiteError;
use crate::site::SiteConfig;

/// Serialize the site as the generator's configuration document.
///
/// # Errors
///
/// Returns [`SiteError::Json`] if serialization fails.
pub fn to_json(site: &SiteConfig, pretty: bool) -> Result<String, SiteError> {
    let json = if pretty {
        serde_json::to_string_pretty(site)?
    } else {
        serde_json::to_string(site)?
    };
    Ok(json)
}

/// Parse a configuration document produced by [`to_json`].
///
/// # Errors
///
/// Returns [`SiteError::Json`] on malformed input or duplicate locale codes.
pub fn from_json(json: &str) -> Result<SiteConfig, SiteError> {
    Ok(serde_json::from_str(json)?)
}

/// Render the site to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn write(site: &SiteConfig, path: &Path, pretty: bool) -> Result<(), SiteError> {
    let mut json = to_json(site, pretty)?;
    json.push('\n');

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &json)?;

    tracing::info!(path = %path.display(), bytes = json.len(), "Wrote site configuration");
    Ok(())
}
