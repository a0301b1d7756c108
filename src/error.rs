//! Error types for the driver
//!
//! The protocol is write-only, so there is exactly one thing that can go
//! wrong at runtime: a burst fails to reach the device. [`Error`] wraps
//! the interface's own error type so callers can still match on the
//! underlying bus failure.
//!
//! A failed write aborts the operation in progress (initialization or a
//! text write) without retrying; the controller is left in whatever state
//! the last successful transfer produced, and the caller should
//! re-initialize before trusting the display contents again.

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus write failed mid-operation
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. The remaining transfers of the aborted operation
    /// were not attempted.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "bus write failed: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
