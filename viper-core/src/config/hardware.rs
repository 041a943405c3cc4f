//! Board wiring configuration
//!
//! Pin numbers for the four buttons and the display control lines. The
//! firmware build script fills these in from `game.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Plain push-pull output or floating input
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low button with the internal pull-up enabled
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Which transport drives the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransportKind {
    /// On-chip SPI peripheral
    #[default]
    Hardware,
    /// GPIO bit-banged SPI
    BitBang,
}

/// Button inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonPins {
    pub up: PinConfig,
    pub down: PinConfig,
    pub left: PinConfig,
    pub right: PinConfig,
}

impl ButtonPins {
    /// All four pins, in arbitration priority order
    pub fn all(&self) -> [PinConfig; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

impl Default for ButtonPins {
    fn default() -> Self {
        Self {
            up: PinConfig::button(2),
            down: PinConfig::button(3),
            left: PinConfig::button(4),
            right: PinConfig::button(5),
        }
    }
}

/// Display control lines (clock and data are fixed by the SPI block)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// Chip select (active-low)
    pub cs: PinConfig,
    /// Data/command select (high = data)
    pub dc: PinConfig,
    /// Panel reset (active-low)
    pub rst: PinConfig,
    /// Clock line when bit-banging
    pub sck: PinConfig,
    /// Data line when bit-banging
    pub mosi: PinConfig,
    /// Bus frequency for the hardware transport
    pub frequency_hz: u32,
    pub transport: TransportKind,
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self {
            cs: PinConfig::new(17),
            dc: PinConfig::new(20),
            rst: PinConfig::new(21),
            sck: PinConfig::new(18),
            mosi: PinConfig::new(19),
            frequency_hz: 8_000_000,
            transport: TransportKind::Hardware,
        }
    }
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub buttons: ButtonPins,
    pub display: DisplayPins,
}

impl BoardConfig {
    /// Check that no GPIO is assigned twice
    ///
    /// Returns the first duplicated pin number.
    pub fn find_conflict(&self) -> Option<u8> {
        let d = &self.display;
        let mut used: heapless::Vec<u8, 9> = heapless::Vec::new();
        let mut candidates: heapless::Vec<PinConfig, 9> = heapless::Vec::new();
        for pin in self.buttons.all() {
            let _ = candidates.push(pin);
        }
        let _ = candidates.push(d.cs);
        let _ = candidates.push(d.dc);
        let _ = candidates.push(d.rst);
        if d.transport == TransportKind::BitBang {
            let _ = candidates.push(d.sck);
            let _ = candidates.push(d.mosi);
        }

        for pin in candidates {
            if used.contains(&pin.pin) {
                return Some(pin.pin);
            }
            let _ = used.push(pin.pin);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_has_no_conflicts() {
        assert_eq!(BoardConfig::default().find_conflict(), None);
    }

    #[test]
    fn test_conflict_detected() {
        let mut board = BoardConfig::default();
        board.display.dc = PinConfig::new(3);
        assert_eq!(board.find_conflict(), Some(3));
    }

    #[test]
    fn test_bitbang_pins_checked_only_when_used() {
        let mut board = BoardConfig::default();
        board.display.sck = PinConfig::new(2);
        assert_eq!(board.find_conflict(), None);

        board.display.transport = TransportKind::BitBang;
        assert_eq!(board.find_conflict(), Some(2));
    }

    #[test]
    fn test_buttons_are_active_low_with_pullup() {
        for pin in ButtonPins::default().all() {
            assert!(pin.inverted);
            assert!(pin.pull_up);
        }
    }
}
