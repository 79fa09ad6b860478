//! User interface subsystem - OLED display, joystick, and buttons.
//!
//! Pure interpretation and rendering logic lives in `input_logic` and
//! `display` so it can be exercised on the host; the modules that touch
//! peripherals are compiled only for the target.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, full-frame redraws
//! - **Inputs**: joystick axis (ADC) + switch, two gate-input buttons

pub mod display;
pub mod input_logic;

#[cfg(feature = "embedded")]
pub mod inputs;
#[cfg(feature = "embedded")]
pub mod leds;
