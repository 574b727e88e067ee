//! Names shared between the server, the API docs and the pages.

pub const PRODUCT_NAME: &str = "RegScope";
pub const SERVICE_NAME: &str = "RegScope FinTech Compliance";

/// Environment variable prefix for configuration overrides (`REGSCOPE__SERVER__PORT`).
pub const ENV_PREFIX: &str = "REGSCOPE";
pub const DEFAULT_CONFIG_FILE: &str = "server";

pub const SYSTEM_TAG: &str = "System";
pub const FINTECH_TAG: &str = "FinTech Compliance";

/// Mount point of the compliance API.
pub const FINTECH_API_PREFIX: &str = "/api/v1/fintech";
