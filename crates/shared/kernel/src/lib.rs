//! Kernel utilities shared across slices: layered configuration loading and,
//! with the `server` feature, the Axum [`ApiState`](server::ApiState) and
//! the system router.
//!
//! ```rust,no_run
//! use regscope_kernel::config::load_config;
//! use regscope_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use regscope_domain as domain;
