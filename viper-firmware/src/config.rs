//! Board and game configuration
//!
//! The constants come from `game.toml`, validated and generated by the
//! build script.

use viper_core::config::{
    BoardConfig, ButtonPins, DisplayPins, GameConfig, PinConfig, TransportKind,
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

use generated::*;

/// Wiring from game.toml
pub fn board_config() -> BoardConfig {
    BoardConfig {
        buttons: ButtonPins {
            up: PinConfig::button(BUTTON_UP),
            down: PinConfig::button(BUTTON_DOWN),
            left: PinConfig::button(BUTTON_LEFT),
            right: PinConfig::button(BUTTON_RIGHT),
        },
        display: DisplayPins {
            cs: PinConfig::new(DISPLAY_CS),
            dc: PinConfig::new(DISPLAY_DC),
            rst: PinConfig::new(DISPLAY_RST),
            sck: PinConfig::new(DISPLAY_SCK),
            mosi: PinConfig::new(DISPLAY_MOSI),
            frequency_hz: DISPLAY_FREQUENCY_HZ,
            transport: if DISPLAY_BITBANG {
                TransportKind::BitBang
            } else {
                TransportKind::Hardware
            },
        },
    }
}

/// Timing and panel settings from game.toml
pub fn game_config() -> GameConfig {
    GameConfig {
        move_delay_ms: MOVE_DELAY_MS,
        debounce_ms: DEBOUNCE_MS,
        contrast: DISPLAY_CONTRAST,
        seed_salt: SEED_SALT,
    }
}
