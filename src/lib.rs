//! HD44780 Character LCD Driver (I2C backpack)
//!
//! A driver for HD44780-family character LCD modules wired behind a
//! PCF8574 I2C-to-parallel backpack, speaking the controller's 4-bit
//! interface mode.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Write-only protocol: every logical byte becomes one atomic 4-byte
//!   enable-bracketed burst, so a backpack never sees a half-latched nibble
//! - Backlight control multiplexed onto the same transfers
//! - Linux command-line frontend over `/dev/i2c-1` (with the `linux` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_i2c::{Display, I2cInterface, DEFAULT_ADDRESS};
//!
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS);
//! let mut display = Display::new(interface);
//!
//! let _ = display.init(&mut delay);
//! display.set_backlight(true);
//! let _ = display.write_str(0x80, "Hello");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HD44780 command definitions and backpack bit layout
pub mod command;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

pub use display::{Backlight, Display};
pub use error::Error;
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface};
