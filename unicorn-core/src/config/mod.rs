//! Configuration types
//!
//! Board-agnostic panel layout, loaded from TOML on startup.

#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

#[cfg(feature = "toml")]
pub use self::toml::{parse_config, ConfigError};
pub use types::*;
