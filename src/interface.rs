//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the PCF8574 backpack
//! over I2C.
//!
//! ## Hardware Requirements
//!
//! The backpack needs nothing beyond a write-capable I2C bus: it has no
//! reset line and no busy/status output, so the channel is strictly
//! one-way. All protocol framing (nibble packing, enable bracketing) is
//! done by [`Display`](crate::display::Display) before bytes reach this
//! layer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_i2c::{DisplayInterface, I2cInterface, DEFAULT_ADDRESS};
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
//! // Create an interface at the backpack's default address
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Send one enable-bracketed nibble pair
//! let _ = interface.write(&[0x2C, 0x28, 0xCC, 0xC8]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Default 7-bit address of a PCF8574 backpack (A0..A2 unbridged)
///
/// PCF8574A parts enumerate at 0x3F instead; pass that to
/// [`I2cInterface::new`] if the display does not respond at 0x27.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x27;

/// Trait for the byte channel to the display backpack
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with anything that can
/// push a burst of bytes to the device. Each call must reach the device
/// as one atomic transaction: the enable-latch bracket for a nibble pair
/// is carried inside a single burst and must not be split.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement
/// this trait directly for transports the backpack may sit behind that
/// embedded-hal does not model (a bus multiplexer, a test recorder).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a burst of transfer bytes to the device
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails; the driver aborts the
    /// operation in progress when that happens.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// I2C interface implementation for the PCF8574 backpack
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus,
/// addressing the backpack at a fixed 7-bit address. The bus is owned
/// exclusively for the lifetime of the interface and released when it is
/// dropped.
///
/// ## Example
///
/// ```rust,no_run
/// use hd44780_i2c::{Display, I2cInterface, DEFAULT_ADDRESS};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
/// let _display = Display::new(interface);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus for communication
    i2c: I2C,
    /// 7-bit device address of the backpack
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for a backpack at `address`
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Get the configured device address
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }
}
