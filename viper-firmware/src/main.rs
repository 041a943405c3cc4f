//! Viper - Snake firmware
//!
//! Main firmware binary for RP2040 boards with four buttons and a
//! 128x128 SH1107 OLED. Pin assignments and timing come from game.toml.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use viper_core::config::{BoardConfig, PinConfig, TransportKind};
use viper_drivers::{BitBangSpi, Sh1107};
use viper_hal::gpio::ActiveLow;
use viper_hal::SpiConfig;
use viper_hal_rp2040::pins::SPI_PINS;
use viper_hal_rp2040::{PinBank, PinError, RemainingPeripherals, RpInput, RpOutput, RpSpi};

use crate::display::{DisplayBus, Panel};
use crate::tasks::Buttons;

mod channels;
mod config;
mod display;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Viper firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut bank, remaining) = PinBank::from_peripherals(p);
    info!("Peripherals initialized");

    let board = config::board_config();
    let game = config::game_config();

    if let Some(pin) = board.find_conflict() {
        defmt::panic!("GPIO {} is assigned twice", pin);
    }

    let buttons = match claim_buttons(&mut bank, &board) {
        Ok(buttons) => buttons,
        Err(e) => defmt::panic!("Button setup failed: {}", e),
    };
    info!("Buttons initialized");

    let panel = match claim_panel(&mut bank, remaining, &board) {
        Ok(panel) => panel,
        Err(e) => defmt::panic!("Display setup failed: {}", e),
    };
    info!("Display bus initialized ({})", board.display.transport);

    spawner.spawn(tasks::button_task(buttons, game.debounce_ms)).unwrap();
    spawner.spawn(tasks::game_task(panel, game)).unwrap();

    info!("All tasks spawned, firmware running");
}

fn input(bank: &mut PinBank, pin: PinConfig) -> Result<ActiveLow<RpInput<'static>>, PinError> {
    Ok(ActiveLow::new(RpInput::new(bank.take(pin.pin)?, pin.pull_up)))
}

fn output(bank: &mut PinBank, pin: PinConfig, high: bool) -> Result<RpOutput<'static>, PinError> {
    Ok(RpOutput::new(bank.take(pin.pin)?, high))
}

fn claim_buttons(bank: &mut PinBank, board: &BoardConfig) -> Result<Buttons, PinError> {
    let b = &board.buttons;
    Ok(Buttons {
        up: input(bank, b.up)?,
        down: input(bank, b.down)?,
        left: input(bank, b.left)?,
        right: input(bank, b.right)?,
    })
}

fn claim_panel(
    bank: &mut PinBank,
    remaining: RemainingPeripherals,
    board: &BoardConfig,
) -> Result<Panel, PinError> {
    let d = &board.display;

    let bus = match d.transport {
        TransportKind::Hardware => {
            let spi_config = SpiConfig {
                frequency: d.frequency_hz,
                ..Default::default()
            };
            DisplayBus::Hardware(RpSpi::new(
                remaining.spi0,
                remaining.spi_sck,
                remaining.spi_mosi,
                &spi_config,
            ))
        }
        TransportKind::BitBang => {
            // SPI0 is unused; its pins become ordinary GPIOs
            bank.return_pin(SPI_PINS[0], remaining.spi_sck.into());
            bank.return_pin(SPI_PINS[1], remaining.spi_mosi.into());
            let sck = output(bank, d.sck, false)?;
            let mosi = output(bank, d.mosi, false)?;
            DisplayBus::BitBang(BitBangSpi::new(sck, mosi))
        }
    };

    let dc = output(bank, d.dc, false)?;
    let cs = output(bank, d.cs, true)?;
    let rst = output(bank, d.rst, true)?;

    Ok(Sh1107::new(bus, dc, cs, rst, Delay))
}
