use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for the RegScope server.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub compliance: ComplianceConfig,
}

/// Arc-wrapped config so subsystems can hold a copy for free.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// PEM certificate and key paths; presence switches the server to HTTPS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    /// Extra filter directives, e.g. `regscope_compliance=debug`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Thresholds and watch lists used by the rule-based risk analyst.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Cash/transfer reporting threshold (currency-agnostic units).
    pub reporting_threshold: f64,
    /// Fraction below the reporting threshold that counts as structuring.
    pub structuring_margin: f64,
    /// Amount at or above which a transaction is considered unusually large.
    pub large_transaction_threshold: f64,
    /// ISO 3166 alpha-2 codes of high-risk jurisdictions.
    pub high_risk_jurisdictions: Vec<String>,
    /// Names on the local sanctions watch list.
    pub sanctioned_names: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, path: None, json: false }
    }
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            reporting_threshold: 10_000.0,
            structuring_margin: 0.1,
            large_transaction_threshold: 50_000.0,
            high_risk_jurisdictions: ["KP", "IR", "MM", "SY", "YE", "AF"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            sanctioned_names: Vec::new(),
        }
    }
}

impl ComplianceConfig {
    /// Case-insensitive membership test against [`Self::high_risk_jurisdictions`].
    #[must_use]
    pub fn is_high_risk(&self, country: &str) -> bool {
        let country = country.trim();
        self.high_risk_jurisdictions.iter().any(|code| code.eq_ignore_ascii_case(country))
    }
}
