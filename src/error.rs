//! Unified error type for gatelab.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! All failures here are peripheral bring-up failures and are fatal:
//! the firmware halts before entering the main loop. The state machine
//! itself has no runtime error path since its inputs are plain level
//! and ADC reads.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the SSD1306 failed during init.
    DisplayInit,
}
