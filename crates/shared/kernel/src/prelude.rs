pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use regscope_domain::config::ApiConfig;
pub use regscope_domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError, ApiStateErrorExt};
