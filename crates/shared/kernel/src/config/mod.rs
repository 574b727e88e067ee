use config::{Config, Environment, File};
use regscope_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[regscope_derive::regscope_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under `REGSCOPE__*` environment
/// variables.
///
/// * `Some(path)`: the file must exist. The extension may be omitted
///   (`config/local` finds `config/local.toml`, `.yaml`, `.json`).
/// * `None`: `server.*` in the working directory is used when present;
///   otherwise only defaults and environment overrides apply.
///
/// Nested keys use a double underscore: `REGSCOPE__SERVER__PORT=8080`
/// sets `server.port`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when a required file is missing, a source
/// cannot be parsed, or the merged values do not fit `T`.
///
/// ```rust
/// use regscope_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/missing")).unwrap_or_default();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (source, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %source.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(source.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("compliance.high_risk_jurisdictions")
                .with_list_parse_key("compliance.sanctioned_names")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regscope_domain::config::ApiConfig;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn missing_optional_file_yields_defaults() {
        let cfg: ApiConfig = load_config(None::<&str>).expect("defaults load");
        assert_eq!(cfg.server.port, 4583);
    }

    #[test]
    #[serial]
    fn explicit_missing_file_is_an_error() {
        let result = load_config::<ApiConfig>(Some("definitely/not/here"));
        assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
    }

    #[test]
    #[serial]
    fn toml_file_is_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("regscope.toml");
        fs::write(
            &file,
            "[server]\nport = 9100\n\n[compliance]\nreporting_threshold = 15000.0\n",
        )
        .expect("write config");

        let cfg: ApiConfig = load_config(Some(&file)).expect("file loads");
        assert_eq!(cfg.server.port, 9100);
        assert!((cfg.compliance.reporting_threshold - 15_000.0).abs() < f64::EPSILON);
        assert_eq!(cfg.log.level, "info");
    }
}
