//! Panel layout compiled in from panels.toml

use unicorn_core::config::{BufferConfig, DisplayConfig, PanelConfig, RenderConfig};

include!(concat!(env!("OUT_DIR"), "/panels.rs"));

/// Layout as a config ready for `Session::apply_config`
pub fn display_config() -> DisplayConfig {
    DisplayConfig {
        buffer: BUFFER,
        render: RENDER,
        // build.rs rejects more than eight panels
        panels: PANELS.iter().copied().collect(),
    }
}
