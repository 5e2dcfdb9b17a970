//! Configuration loading for the request relay

use std::path::PathBuf;

use crate::{Error, Result};

/// Primary environment variable carrying the destination form prefill URL.
pub const FORM_URL_ENV: &str = "GOOGLE_FORM_URL";

/// Build-tool-prefixed fallback, kept for parity with deployments that only
/// configure the frontend bundler's environment.
pub const FORM_URL_ENV_FALLBACK: &str = "VITE_GOOGLE_FORM_URL";

/// Resolve the destination form prefill URL following priority order:
/// 1. Command-line argument (highest priority)
/// 2. `GOOGLE_FORM_URL` environment variable
/// 3. `VITE_GOOGLE_FORM_URL` environment variable
/// 4. `form_url` key in the TOML config file (fallback)
///
/// Returns `None` when no tier yields a value. Absence is not fatal at
/// startup: only submit requests need the URL, and they report it as a
/// configuration error per request.
pub fn resolve_form_url(cli_arg: Option<&str>) -> Option<String> {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        if !url.trim().is_empty() {
            tracing::debug!("Form URL resolved from command-line argument");
            return Some(url.to_string());
        }
    }

    // Priority 2 and 3: Environment variables
    for var in [FORM_URL_ENV, FORM_URL_ENV_FALLBACK] {
        if let Ok(url) = std::env::var(var) {
            if !url.trim().is_empty() {
                tracing::debug!(var = var, "Form URL resolved from environment");
                return Some(url);
            }
        }
    }

    // Priority 4: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(form_url) = config.get("form_url").and_then(|v| v.as_str()) {
                    tracing::debug!(path = %config_path.display(), "Form URL resolved from config file");
                    return Some(form_url.to_string());
                }
            }
        }
    }

    None
}

/// Get the configuration file path for the platform.
///
/// Linux tries `~/.config/djr/config.toml` first, then `/etc/djr/config.toml`;
/// other platforms use the OS config directory.
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("djr").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/djr/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(FORM_URL_ENV);
        std::env::remove_var(FORM_URL_ENV_FALLBACK);
    }

    #[test]
    #[serial]
    fn cli_argument_wins_over_environment() {
        clear_env();
        std::env::set_var(FORM_URL_ENV, "https://env.example/viewform");

        let resolved = resolve_form_url(Some("https://cli.example/viewform"));
        assert_eq!(resolved.as_deref(), Some("https://cli.example/viewform"));

        clear_env();
    }

    #[test]
    #[serial]
    fn primary_env_var_wins_over_fallback() {
        clear_env();
        std::env::set_var(FORM_URL_ENV, "https://primary.example/viewform");
        std::env::set_var(FORM_URL_ENV_FALLBACK, "https://fallback.example/viewform");

        let resolved = resolve_form_url(None);
        assert_eq!(resolved.as_deref(), Some("https://primary.example/viewform"));

        clear_env();
    }

    #[test]
    #[serial]
    fn fallback_env_var_used_when_primary_absent() {
        clear_env();
        std::env::set_var(FORM_URL_ENV_FALLBACK, "https://fallback.example/viewform");

        let resolved = resolve_form_url(None);
        assert_eq!(resolved.as_deref(), Some("https://fallback.example/viewform"));

        clear_env();
    }

    #[test]
    #[serial]
    fn blank_values_are_skipped() {
        clear_env();
        std::env::set_var(FORM_URL_ENV, "   ");

        // Blank CLI argument and blank primary env var both fall through
        let resolved = resolve_form_url(Some(""));
        assert_eq!(resolved, None);

        clear_env();
    }
}
