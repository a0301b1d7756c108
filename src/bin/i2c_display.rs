//! Command-line frontend for an HD44780 display on `/dev/i2c-1`
//!
//! Two invocation forms:
//!
//! - `i2c-display i` — initialize the controller and clear the screen
//! - `i2c-display <position> <backlight> <text>` — set the backlight
//!   (`1` = on, anything else = off) and write `text` starting at the
//!   given DDRAM offset
//!
//! Any failure is reported as a single line on standard output and the
//! process still exits 0.

// Error reports go to stdout, matching the tools this frontend replaces.
#![allow(clippy::print_stdout)]

use std::env;

use anyhow::{Context, Result, anyhow};
use hd44780_i2c::{DEFAULT_ADDRESS, Display, I2cInterface};
use linux_embedded_hal::{Delay, I2cdev};

const BUS_PATH: &str = "/dev/i2c-1";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        println!("I2C Display - {err:#}");
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let bus = I2cdev::new(BUS_PATH).with_context(|| format!("opening {BUS_PATH}"))?;
    let mut display = Display::new(I2cInterface::new(bus, DEFAULT_ADDRESS));
    let mut delay = Delay {};

    match args.as_slice() {
        [mode] if mode == "i" => display
            .init(&mut delay)
            .map_err(|err| anyhow!("initialization failed: {err}"))?,
        [position, backlight, text, ..] => {
            display.set_backlight(backlight == "1");
            let offset: u8 = position
                .parse()
                .with_context(|| format!("invalid position {position:?}"))?;
            display
                .write_str(offset.wrapping_add(0x80), text)
                .map_err(|err| anyhow!("text write failed: {err}"))?;
        }
        _ => {}
    }

    Ok(())
}
