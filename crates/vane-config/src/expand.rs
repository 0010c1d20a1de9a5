//! `${VAR}` expansion for string settings in `vane.toml`.
//!
//! `${VAR:-default}` falls back to `default` when `VAR` is unset. Bare `$VAR`
//! is left alone so paths and URLs containing `$` survive untouched.

use crate::ConfigError;

/// Expand environment references in `value`, reporting failures against `field`.
///
/// Only `${...}` segments reach shellexpand; the text between them is copied
/// verbatim.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let (literal, tail) = rest.split_at(start);
        let (reference, tail) = tail.split_at(len + 1);
        expanded.push_str(literal);
        expanded.push_str(&expand_reference(reference, field)?);
        rest = tail;
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Expand an optional setting in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

/// Unset variable name.
struct Unset(String);

fn lookup(var: &str) -> Result<Option<String>, Unset> {
    std::env::var(var)
        .map(Some)
        .map_err(|_| Unset(var.to_owned()))
}
