//! Build script for viper-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Writes the validated values to `$OUT_DIR/config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs on the RP2040
const GPIO_COUNT: i64 = 30;

/// Fixed SPI0 wiring for the hardware transport
const SPI0_SCK: i64 = 18;
const SPI0_MOSI: i64 = 19;

/// SH1107 maximum serial clock
const MAX_SPI_HZ: i64 = 10_000_000;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
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

/// Values pulled out of game.toml
struct GameToml {
    move_delay_ms: i64,
    debounce_ms: i64,
    seed_salt: i64,
    buttons: [(&'static str, i64); 4],
    bitbang: bool,
    frequency_hz: i64,
    contrast: i64,
    cs: i64,
    dc: i64,
    rst: i64,
    sck: i64,
    mosi: i64,
}

/// Validate game.toml configuration at compile time
fn validate_config() -> GameToml {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file in the     ║\n\
            ║  viper-firmware directory.                                       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let parsed = extract(&config, &mut errors);
    if errors.is_empty() {
        check_ranges(&parsed, &mut errors);
        check_pins(&parsed, &mut errors);
    }
    report_errors("game.toml", &errors);

    println!("cargo:warning=game.toml validated successfully");
    parsed
}

/// Read every key, collecting missing or mistyped ones
fn extract(config: &toml::Value, errors: &mut Vec<String>) -> GameToml {
    let mut int = |section: &str, key: &str| -> i64 {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(v)) => *v,
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", section, key));
                0
            }
            None => {
                errors.push(format!("[{}] {} is missing", section, key));
                0
            }
        }
    };

    let move_delay_ms = int("game", "move_delay_ms");
    let debounce_ms = int("game", "debounce_ms");
    let seed_salt = int("game", "seed_salt");
    let buttons = [
        ("up", int("buttons", "up")),
        ("down", int("buttons", "down")),
        ("left", int("buttons", "left")),
        ("right", int("buttons", "right")),
    ];
    let frequency_hz = int("display", "frequency_hz");
    let contrast = int("display", "contrast");
    let cs = int("display", "cs");
    let dc = int("display", "dc");
    let rst = int("display", "rst");
    let sck = int("display", "sck");
    let mosi = int("display", "mosi");

    let bitbang = match config
        .get("display")
        .and_then(|d| d.get("transport"))
        .and_then(|t| t.as_str())
    {
        Some("hardware") | None => false,
        Some("bitbang") => true,
        Some(other) => {
            errors.push(format!(
                "[display] transport must be \"hardware\" or \"bitbang\", got \"{}\"",
                other
            ));
            false
        }
    };

    GameToml {
        move_delay_ms,
        debounce_ms,
        seed_salt,
        buttons,
        bitbang,
        frequency_hz,
        contrast,
        cs,
        dc,
        rst,
        sck,
        mosi,
    }
}

fn check_ranges(config: &GameToml, errors: &mut Vec<String>) {
    if !(1..=10_000).contains(&config.move_delay_ms) {
        errors.push(format!(
            "[game] move_delay_ms must be 1-10000, got {}",
            config.move_delay_ms
        ));
    }
    if !(0..=1_000).contains(&config.debounce_ms) {
        errors.push(format!(
            "[game] debounce_ms must be 0-1000, got {}",
            config.debounce_ms
        ));
    }
    if config.seed_salt < 0 {
        errors.push("[game] seed_salt must not be negative".to_string());
    }
    if !(0..=255).contains(&config.contrast) {
        errors.push(format!(
            "[display] contrast must be 0-255, got {}",
            config.contrast
        ));
    }
    if !(1..=MAX_SPI_HZ).contains(&config.frequency_hz) {
        errors.push(format!(
            "[display] frequency_hz must be 1-{}, got {}",
            MAX_SPI_HZ, config.frequency_hz
        ));
    }
}

fn check_pins(config: &GameToml, errors: &mut Vec<String>) {
    let mut pins: Vec<(String, i64)> = config
        .buttons
        .iter()
        .map(|(name, pin)| (format!("[buttons] {}", name), *pin))
        .collect();
    pins.push(("[display] cs".to_string(), config.cs));
    pins.push(("[display] dc".to_string(), config.dc));
    pins.push(("[display] rst".to_string(), config.rst));

    if config.bitbang {
        pins.push(("[display] sck".to_string(), config.sck));
        pins.push(("[display] mosi".to_string(), config.mosi));
    } else {
        if config.sck != SPI0_SCK || config.mosi != SPI0_MOSI {
            errors.push(format!(
                "hardware transport uses SPI0: sck must be {} and mosi {}",
                SPI0_SCK, SPI0_MOSI
            ));
        }
        for (name, pin) in &pins {
            if *pin == SPI0_SCK || *pin == SPI0_MOSI {
                errors.push(format!("{} = {} is reserved for SPI0", name, pin));
            }
        }
    }

    for (i, (name, pin)) in pins.iter().enumerate() {
        if !(0..GPIO_COUNT).contains(pin) {
            errors.push(format!("{} = {} is not a GPIO (0-29)", name, pin));
        }
        if let Some((other, _)) = pins[..i].iter().find(|(_, p)| p == pin) {
            errors.push(format!("{} and {} both use GPIO {}", other, name, pin));
        }
    }
}

/// Panic with a boxed report if anything failed
fn report_errors(file: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    let lines = errors
        .iter()
        .map(|e| format_error_lines(&format!("- {}", e)))
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format!("{} has {} problem(s)", file, errors.len()),
        lines
    );
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

/// Emit the validated values as Rust constants
fn generate_config(config: &GameToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("config.rs")).unwrap();

    let [up, down, left, right] = config.buttons.map(|(_, pin)| pin);
    writeln!(f, "// Generated from game.toml by build.rs").unwrap();
    writeln!(f, "pub const MOVE_DELAY_MS: u32 = {};", config.move_delay_ms).unwrap();
    writeln!(f, "pub const DEBOUNCE_MS: u32 = {};", config.debounce_ms).unwrap();
    writeln!(f, "pub const SEED_SALT: u64 = {};", config.seed_salt).unwrap();
    writeln!(f, "pub const BUTTON_UP: u8 = {};", up).unwrap();
    writeln!(f, "pub const BUTTON_DOWN: u8 = {};", down).unwrap();
    writeln!(f, "pub const BUTTON_LEFT: u8 = {};", left).unwrap();
    writeln!(f, "pub const BUTTON_RIGHT: u8 = {};", right).unwrap();
    writeln!(f, "pub const DISPLAY_BITBANG: bool = {};", config.bitbang).unwrap();
    writeln!(f, "pub const DISPLAY_FREQUENCY_HZ: u32 = {};", config.frequency_hz).unwrap();
    writeln!(f, "pub const DISPLAY_CONTRAST: u8 = {};", config.contrast).unwrap();
    writeln!(f, "pub const DISPLAY_CS: u8 = {};", config.cs).unwrap();
    writeln!(f, "pub const DISPLAY_DC: u8 = {};", config.dc).unwrap();
    writeln!(f, "pub const DISPLAY_RST: u8 = {};", config.rst).unwrap();
    writeln!(f, "pub const DISPLAY_SCK: u8 = {};", config.sck).unwrap();
    writeln!(f, "pub const DISPLAY_MOSI: u8 = {};", config.mosi).unwrap();
}
