//! TOML panel layout files
//!
//! ```toml
//! [buffer]
//! width = 32
//! height = 16
//!
//! [render]
//! rotation = 90
//! brightness = 0.5
//! addressing = true
//!
//! [[panel]]
//! address = 0
//! x = 0
//! y = 0
//! rotation = 0
//! ```
//!
//! Every section is optional. More than eight `[[panel]]` tables is a parse
//! error.

use super::types::DisplayConfig;
use crate::error::Error;

/// Config loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid TOML, unknown value types, or too many panels
    Parse,
    /// Well-formed file with out-of-range values
    Invalid(Error),
}

impl From<Error> for ConfigError {
    fn from(e: Error) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Parse and validate a TOML panel layout
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let config: DisplayConfig = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
}
