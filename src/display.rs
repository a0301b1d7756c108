//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{
    BACKLIGHT, CLEAR_DISPLAY, DISPLAY_ON, ENABLE, ENTRY_MODE_INCREMENT, FUNCTION_SET_4BIT_2LINE,
    REGISTER_SELECT, RESET_4BIT_ASSERT, RESET_4BIT_RELEASE, RESET_SETTLE_US,
};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Backlight state
///
/// The discriminants are the bit values OR'd into every transfer byte.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Backlight {
    /// Backlight off
    #[default]
    Off = 0x00,
    /// Backlight on
    On = BACKLIGHT,
}

/// Core display driver for HD44780 modules behind a PCF8574 backpack
///
/// Owns the hardware interface exclusively and tracks the backlight bit
/// that gets folded into every transfer. Not thread-safe; one instance
/// per display, serialized externally if shared.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Backlight bit applied to every transfer byte
    backlight: Backlight,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The backlight starts off; call [`set_backlight`](Self::set_backlight)
    /// before the next write to turn it on.
    pub fn new(interface: I) -> Self {
        Self {
            interface,
            backlight: Backlight::Off,
        }
    }

    /// Put the controller into 4-bit mode and configure it
    ///
    /// The controller may wake in 8-bit mode, so the sequence starts with
    /// two raw transfer bytes that clock in the function-set nibble,
    /// bypassing the nibble encoder, each followed by a blocking settle
    /// delay. The rest of the configuration (function set, display on,
    /// entry mode, clear) goes through the normal command path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on the first failed write; the
    /// remaining steps are not attempted and the controller state is
    /// indeterminate. Call `init` again rather than resuming.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("switching controller to 4-bit mode");
        self.write_raw(&[RESET_4BIT_ASSERT])?;
        delay.delay_us(RESET_SETTLE_US);
        self.write_raw(&[RESET_4BIT_RELEASE])?;
        delay.delay_us(RESET_SETTLE_US);

        self.write_command(FUNCTION_SET_4BIT_2LINE)?;
        self.write_command(DISPLAY_ON)?;
        self.write_command(ENTRY_MODE_INCREMENT)?;
        self.write_command(CLEAR_DISPLAY)?;
        debug!("controller initialized");
        Ok(())
    }

    /// Write text starting at a DDRAM position
    ///
    /// `position` is sent as-is and must already carry the set-DDRAM-address
    /// command bit (`0x80 | offset`); no range validation is performed.
    /// Text longer than the visible line spills into whatever the
    /// controller's own address wraparound does. The text is sent byte per
    /// byte in the controller's 8-bit character set, which matches ASCII
    /// for the printable range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on the first failed write; remaining
    /// characters are not sent.
    pub fn write_str(&mut self, position: u8, text: &str) -> DisplayResult<I> {
        trace!("writing {} bytes at {position:#04x}", text.len());
        self.write_command(position)?;
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }

    /// Set the backlight state
    ///
    /// Pure state mutation: no bus traffic happens here. The bit takes
    /// effect on the next transfer, and the last call wins.
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = if on { Backlight::On } else { Backlight::Off };
    }

    /// Get the current backlight state
    pub fn backlight(&self) -> Backlight {
        self.backlight
    }

    /// Send a byte to the instruction register
    pub fn write_command(&mut self, byte: u8) -> DisplayResult<I> {
        self.send(byte, 0)
    }

    /// Send a byte to the data register (one character cell)
    pub fn write_data(&mut self, byte: u8) -> DisplayResult<I> {
        self.send(byte, REGISTER_SELECT)
    }

    /// Release the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Encode one logical byte as two enable-bracketed nibble transfers
    /// and send all four bytes as a single burst
    ///
    /// The read/write bit stays clear in every transfer; reads are not
    /// supported. The backlight bit is latched at encode time.
    fn send(&mut self, byte: u8, register_select: u8) -> DisplayResult<I> {
        let control = register_select | self.backlight as u8;
        let high = (byte & 0xF0) | control;
        let low = ((byte << 4) & 0xF0) | control;
        self.write_raw(&[high | ENABLE, high, low | ENABLE, low])
    }

    fn write_raw(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.interface.write(bytes).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockError;

    #[derive(Debug, Default)]
    struct MockInterface {
        bursts: Vec<Vec<u8>>,
        attempts: usize,
        fail_on: Option<usize>,
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.attempts += 1;
            if self.fail_on == Some(self.attempts) {
                return Err(MockError);
            }
            self.bursts.push(bytes.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        delays_ns: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ns.push(ns);
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::default())
    }

    #[test]
    fn test_backlight_defaults_to_off() {
        let display = test_display();
        assert_eq!(display.backlight(), Backlight::Off);
    }

    #[test]
    fn test_write_command_sends_one_burst_of_four_bytes() {
        let mut display = test_display();
        display.write_command(0x28).unwrap();

        assert_eq!(display.interface.bursts.len(), 1);
        assert_eq!(display.interface.bursts[0].len(), 4);
    }

    #[test]
    fn test_write_command_nibble_packing() {
        let mut display = test_display();
        display.write_command(0x28).unwrap();

        // High nibble 0x20, low nibble 0x80, no control bits besides enable
        assert_eq!(
            display.interface.bursts[0].as_slice(),
            &[0x24, 0x20, 0x84, 0x80]
        );
    }

    #[test]
    fn test_write_data_sets_register_select() {
        let mut display = test_display();
        display.write_data(0x41).unwrap(); // 'A'

        assert_eq!(
            display.interface.bursts[0].as_slice(),
            &[0x45, 0x41, 0x15, 0x11]
        );
    }

    #[test]
    fn test_command_and_data_differ_only_in_register_select() {
        let mut display = test_display();
        display.write_command(0x5A).unwrap();
        display.write_data(0x5A).unwrap();

        let command = &display.interface.bursts[0];
        let data = &display.interface.bursts[1];
        for (c, d) in command.iter().zip(data.iter()) {
            assert_eq!(c | REGISTER_SELECT, *d);
            assert_eq!(c & REGISTER_SELECT, 0);
        }
    }

    #[test]
    fn test_enable_bracket_in_every_burst() {
        let mut display = test_display();
        display.write_data(0xF3).unwrap();

        let burst = &display.interface.bursts[0];
        assert_ne!(burst[0] & ENABLE, 0);
        assert_eq!(burst[1], burst[0] & !ENABLE);
        assert_ne!(burst[2] & ENABLE, 0);
        assert_eq!(burst[3], burst[2] & !ENABLE);
    }

    #[test]
    fn test_backlight_bit_in_all_four_transfer_bytes() {
        let mut display = test_display();
        display.set_backlight(true);
        display.write_command(0x01).unwrap();

        for byte in &display.interface.bursts[0] {
            assert_ne!(byte & BACKLIGHT, 0);
        }
    }

    #[test]
    fn test_backlight_toggle_restores_off_encoding() {
        let mut display = test_display();
        display.write_command(0x01).unwrap();
        display.set_backlight(true);
        display.set_backlight(false);
        display.write_command(0x01).unwrap();

        assert_eq!(
            display.interface.bursts[0],
            display.interface.bursts[1]
        );
        for byte in &display.interface.bursts[1] {
            assert_eq!(byte & BACKLIGHT, 0);
        }
    }

    #[test]
    fn test_set_backlight_issues_no_writes() {
        let mut display = test_display();
        display.set_backlight(true);
        display.set_backlight(false);

        assert!(display.interface.bursts.is_empty());
    }

    #[test]
    fn test_write_str_empty_sends_only_position_command() {
        let mut display = test_display();
        display.write_str(0x80, "").unwrap();

        assert_eq!(display.interface.bursts.len(), 1);
        assert_eq!(
            display.interface.bursts[0].as_slice(),
            &[0x84, 0x80, 0x04, 0x00]
        );
    }

    #[test]
    fn test_write_str_sends_position_then_characters_in_order() {
        let mut display = test_display();
        display.write_str(0x80, "AB").unwrap();

        let bursts = &display.interface.bursts;
        assert_eq!(bursts.len(), 3);
        assert!(bursts.iter().all(|burst| burst.len() == 4));

        // Position command first (register select clear)
        assert_eq!(bursts[0][0] & REGISTER_SELECT, 0);
        // Then 'A' and 'B' as data transfers
        assert_eq!(bursts[1].as_slice(), &[0x45, 0x41, 0x15, 0x11]);
        assert_eq!(bursts[2].as_slice(), &[0x45, 0x41, 0x25, 0x21]);
    }

    #[test]
    fn test_write_str_aborts_on_first_failed_character() {
        let mut display = test_display();
        display.interface.fail_on = Some(2);
        let result = display.write_str(0x80, "AB");

        assert!(matches!(result, Err(Error::Interface(_))));
        // Position command went out, 'A' failed, 'B' was never attempted
        assert_eq!(display.interface.attempts, 2);
        assert_eq!(display.interface.bursts.len(), 1);
    }

    #[test]
    fn test_init_write_sequence() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.init(&mut delay).unwrap();

        let bursts = &display.interface.bursts;
        assert_eq!(bursts.len(), 6);
        // Two raw reset bytes, bypassing the nibble encoder
        assert_eq!(bursts[0].as_slice(), &[RESET_4BIT_ASSERT]);
        assert_eq!(bursts[1].as_slice(), &[RESET_4BIT_RELEASE]);
        // Then function set, display on, entry mode, clear as nibble pairs
        assert_eq!(bursts[2].as_slice(), &[0x24, 0x20, 0x84, 0x80]);
        assert_eq!(bursts[3].as_slice(), &[0x04, 0x00, 0xC4, 0xC0]);
        assert_eq!(bursts[4].as_slice(), &[0x04, 0x00, 0x64, 0x60]);
        assert_eq!(bursts[5].as_slice(), &[0x04, 0x00, 0x14, 0x10]);
    }

    #[test]
    fn test_init_settles_after_each_raw_reset_byte() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.init(&mut delay).unwrap();

        assert_eq!(delay.delays_ns.len(), 2);
        assert!(delay.delays_ns.iter().all(|ns| *ns >= 1_000_000));
    }

    #[test]
    fn test_init_aborts_on_first_failed_write() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.interface.fail_on = Some(3);
        let result = display.init(&mut delay);

        assert!(matches!(result, Err(Error::Interface(_))));
        // Both raw bytes went out; the first encoded command failed and
        // nothing after it was attempted
        assert_eq!(display.interface.attempts, 3);
        assert_eq!(display.interface.bursts.len(), 2);
    }

    #[test]
    fn test_init_with_backlight_on_carries_bit_in_encoded_commands() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.set_backlight(true);
        display.init(&mut delay).unwrap();

        for burst in display.interface.bursts.iter().skip(2) {
            for byte in burst {
                assert_ne!(byte & BACKLIGHT, 0);
            }
        }
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = test_display();
        display.write_command(0x01).unwrap();
        let interface = display.release();
        assert_eq!(interface.bursts.len(), 1);
    }
}
