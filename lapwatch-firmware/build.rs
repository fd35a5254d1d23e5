//! Build script for lapwatch-firmware
//!
//! - Sets up linker search paths for memory.x and the RP2040 link scripts
//! - Validates lapwatch.toml at compile time and bakes it into the binary

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lapwatch_core::config::{ConfigError, TimingConfig, MAX_RENDER_SHARE_PERCENT};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_timing(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lapwatch.toml configuration at compile time
fn validate_config() -> TimingConfig {
    // Re-run if lapwatch.toml changes
    println!("cargo:rerun-if-changed=lapwatch.toml");

    let config_path = Path::new("lapwatch.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lapwatch.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a lapwatch.toml timing file.              ║\n\
            ║  Please create one in the lapwatch-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read lapwatch.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML into the timing config (missing keys fall back to defaults)
    let config: TimingConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid lapwatch.toml                                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timing configuration in lapwatch.toml            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e, &config))
        );
    }

    println!(
        "cargo:warning=lapwatch.toml validated: render {}us per tick, debounce {}ms",
        config.render_us(),
        config.debounce_ms()
    );

    config
}

/// Human-readable explanation of a validation failure
fn describe(error: ConfigError, config: &TimingConfig) -> String {
    match error {
        ConfigError::ZeroClock => "clock_hz must be greater than 0".to_string(),
        ConfigError::ZeroSettleDelay => "[bus] settle_cycles must be greater than 0".to_string(),
        ConfigError::ZeroDebounce => {
            "[keypad] debounce_cycles must be greater than 0".to_string()
        }
        ConfigError::RenderTooSlow => format!(
            "[bus] settle_cycles = {} makes one render take {}us,\n\
             more than {}% of the tick interval",
            config.bus.settle_cycles,
            config.render_us(),
            MAX_RENDER_SHARE_PERCENT
        ),
    }
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

/// Write the validated config as a Rust constant for `src/config.rs`
fn generate_timing(config: &TimingConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("timing.rs")).unwrap();

    writeln!(f, "/// Timing configuration from lapwatch.toml").unwrap();
    writeln!(f, "pub const TIMING: TimingConfig = TimingConfig {{").unwrap();
    writeln!(f, "    clock_hz: {},", config.clock_hz).unwrap();
    writeln!(f, "    bus: BusTiming {{").unwrap();
    writeln!(f, "        settle_cycles: {},", config.bus.settle_cycles).unwrap();
    writeln!(f, "    }},").unwrap();
    writeln!(f, "    keypad: KeypadTiming {{").unwrap();
    writeln!(f, "        debounce_cycles: {},", config.keypad.debounce_cycles).unwrap();
    writeln!(f, "    }},").unwrap();
    writeln!(f, "}};").unwrap();
}
