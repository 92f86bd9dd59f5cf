//! Build script for unicorn-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panels.toml and compiles it into the firmware as constants

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use unicorn_core::config::{parse_config, ConfigError, DisplayConfig};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    setup_linker(&out_dir);
    let config = validate_config();
    write_layout(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panels.toml at compile time
fn validate_config() -> DisplayConfig {
    println!("cargo:rerun-if-changed=panels.toml");

    let config_path = Path::new("panels.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panels.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panels.toml layout file in the          ║\n\
            ║  unicorn-firmware directory.                                     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("\nERROR: Failed to read panels.toml: {e}\n"),
    };

    // Syntax first, for a readable message with line numbers
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in panels.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let config = match parse_config(&content) {
        Ok(config) => config,
        Err(ConfigError::Parse) => panic!(
            "\nERROR: panels.toml has unknown value types or more than 8 [[panel]] tables\n"
        ),
        Err(ConfigError::Invalid(e)) => panic!("\nERROR: panels.toml is invalid: {e:?}\n"),
    };

    let mut addresses: Vec<i32> = config.panels.iter().map(|p| p.address).collect();
    addresses.sort_unstable();
    addresses.dedup();
    if addresses.len() != config.panels.len() {
        println!("cargo:warning=panels.toml lists a panel address twice; the last entry wins");
    }
    if config.render.addressing && config.panels.is_empty() {
        println!("cargo:warning=panels.toml enables addressing but defines no [[panel]]");
    }

    println!("cargo:warning=panels.toml validated successfully");
    config
}

/// Emit the layout as Rust constants in `$OUT_DIR/panels.rs`
fn write_layout(out_dir: &Path, config: &DisplayConfig) {
    let mut code = String::new();
    let _ = writeln!(code, "// Generated from panels.toml by build.rs");
    let _ = writeln!(
        code,
        "pub const BUFFER: BufferConfig = BufferConfig {{ width: {}, height: {} }};",
        config.buffer.width, config.buffer.height
    );
    let _ = writeln!(
        code,
        "pub const RENDER: RenderConfig = RenderConfig {{ rotation: {}, brightness: f32::from_bits({:#010x}), addressing: {} }};",
        config.render.rotation,
        config.render.brightness.to_bits(),
        config.render.addressing
    );
    let _ = writeln!(code, "pub const PANELS: &[PanelConfig] = &[");
    for panel in &config.panels {
        let _ = writeln!(
            code,
            "    PanelConfig {{ address: {}, x: {}, y: {}, rotation: {} }},",
            panel.address, panel.x, panel.y, panel.rotation
        );
    }
    let _ = writeln!(code, "];");

    fs::write(out_dir.join("panels.rs"), code).expect("write panels.rs");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
