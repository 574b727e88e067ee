//! # Domain Models
//!
//! Plain data shared by every RegScope crate: configuration, constants, the
//! slice registry, the regulation catalogue and compliance areas.
//! Depends on `serde` and `bitflags` only.

pub mod areas;
pub mod config;
pub mod constants;
pub mod registry;
pub mod regulations;
