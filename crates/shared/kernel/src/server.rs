//! Axum-facing kernel pieces: the shared [`ApiState`] and the system router.

mod health;
pub mod router;
mod state;

pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
