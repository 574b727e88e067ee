//! Facade crate for `RegScope` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `regscope` with the `server` feature to get the Axum routers.
//! - Call `regscope::init` to build every feature slice for the API state.

pub use regscope_domain as domain;
use regscope_domain::config::ApiConfig;
pub use regscope_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use regscope_compliance::router::router as compliance_router;
        pub use regscope_kernel::server::router::system_router;
        pub use regscope_landing::server::router as pages_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use regscope_compliance as compliance;
    pub use regscope_landing as landing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "landing",
        "compliance",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    // Compliance (AML screening, transaction analysis, policy checks)
    let slices = vec![features::compliance::init(&config.compliance)?];

    Ok(slices)
}
