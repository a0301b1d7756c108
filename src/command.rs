//! HD44780 command definitions
//!
//! This module defines the command bytes used to control the HD44780
//! character LCD controller, plus the control-bit layout of the PCF8574
//! I2C backpack that sits between the bus and the controller's 4-bit
//! parallel interface.
//!
//! ## Transfer byte structure
//!
//! The backpack maps its 8 output pins onto the controller like this:
//!
//! - Bits 4..=7: the data nibble currently being transferred
//! - Bit 3: backlight (1 = on)
//! - Bit 2: enable (data latched on the falling edge)
//! - Bit 1: read/write (always 0, this driver never reads back)
//! - Bit 0: register select (0 = command, 1 = data)
//!
//! Each logical byte is therefore sent as four transfer bytes: high nibble
//! with enable asserted, high nibble with enable released, then the same
//! pair for the low nibble.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hd44780_i2c::{command, Display, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut display = Display::new(MockInterface);
//! // Clear the screen
//! let _ = display.write_command(command::CLEAR_DISPLAY);
//!
//! // Move the cursor to the start of the second line
//! let _ = display.write_command(command::SET_DDRAM_ADDRESS | 0x40);
//! ```

// Backpack control bits (low nibble of every transfer byte)

/// Register select bit (0x01)
///
/// Clear for instruction-register writes, set for data-register writes.
pub const REGISTER_SELECT: u8 = 0x01;

/// Read/write bit (0x02)
///
/// Always clear: busy-flag polling is not supported, the backpack's data
/// lines are only ever driven towards the controller.
pub const READ_WRITE: u8 = 0x02;

/// Enable bit (0x04)
///
/// The controller latches the data nibble on the falling edge, so every
/// transfer is a pair: nibble with enable set, nibble with enable clear.
pub const ENABLE: u8 = 0x04;

/// Backlight bit (0x08)
///
/// Drives the backpack's backlight transistor; OR'd into every transfer
/// byte so the backlight holds its state between operations.
pub const BACKLIGHT: u8 = 0x08;

// Controller commands (sent through the nibble encoder)

/// Clear display command (0x01)
///
/// Blanks the display and returns the cursor to address 0.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Entry mode set: increment, no display shift (0x06)
///
/// The cursor moves right after each data write.
pub const ENTRY_MODE_INCREMENT: u8 = 0x06;

/// Display control: display on, cursor off, blink off (0x0C)
///
/// Bit 2 = display, bit 1 = cursor, bit 0 = blink.
pub const DISPLAY_ON: u8 = 0x0C;

/// Function set: 4-bit bus, two lines, 5x8 font (0x28)
///
/// The standard post-reset configuration for backpack-driven modules.
pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;

/// Set DDRAM address command bit (0x80)
///
/// OR with a row/column offset to position the cursor. Typical row bases
/// are 0x00 / 0x40 (and 0x14 / 0x54 on 20x4 modules).
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

// Reset-to-4-bit-mode bytes (sent raw, bypassing the nibble encoder)
//
// The controller may wake in 8-bit mode, so the function-set nibble 0x2 is
// clocked in twice as bare transfer bytes. 0x2C carries the nibble with
// enable asserted (and the backlight bit set), 0x28 is the same byte with
// enable released.

/// First reset byte: function-set nibble with enable asserted (0x2C)
pub const RESET_4BIT_ASSERT: u8 = 0x2C;

/// Second reset byte: function-set nibble with enable released (0x28)
pub const RESET_4BIT_RELEASE: u8 = 0x28;

/// Settle time after each raw reset byte, in microseconds
///
/// The controller needs at least 1 ms to process a function-set issued
/// during the 8-bit/4-bit transition window.
pub const RESET_SETTLE_US: u32 = 1_000;
