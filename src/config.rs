//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! geometry live here so they can be tuned in one place.

// Main loop

/// Polling loop period (ms). Inputs are sampled and the state machine
/// ticked once per period.
pub const TICK_MS: u64 = 10;

// Joystick

/// Raw ADC value of the vertical axis at rest (12-bit ADC midpoint).
pub const AXIS_CENTER: u16 = 2048;

/// Dead-zone around the center; deflections within it are ignored.
pub const AXIS_DEADZONE: u16 = 300;

/// Minimum time between two honored menu moves (ms). The cooldown is
/// not renewed by a held deflection.
pub const NAV_COOLDOWN_MS: u64 = 200;

/// Idle time after which the menu is redrawn unconditionally (ms).
pub const MENU_REFRESH_MS: u64 = 1000;

// Buttons

/// Confirm-button settle delay after a detected press edge (ms).
pub const CONFIRM_DEBOUNCE_MS: u64 = 50;

// GPIO pin assignments (BitDogLab / Pico defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your own wiring.
//
//   Joystick SW (confirm)  → GPIO22 (pull-up, press = low)
//   Joystick VRY (axis)    → GPIO26 (ADC0)
//   Gate input A           → GPIO5  (active high)
//   Gate input B           → GPIO6  (active high)
//   I²C1 SDA               → GPIO14
//   I²C1 SCL               → GPIO15
//   Green LED (true)       → GPIO11 (PWM slice 5 B)
//   Red LED (false)        → GPIO13 (PWM slice 6 B)

// Display geometry (SSD1306 128x64, 6x10 mono font)

/// Display width in pixels.
pub const DISPLAY_WIDTH: i32 = 128;

/// Character cell width of the menu font.
pub const FONT_WIDTH: i32 = 6;

/// Y position of the centered title line.
pub const TITLE_Y: i32 = 2;

/// X position of the first menu column (items 0..4).
pub const MENU_COL1_X: i32 = 10;

/// X position of the second menu column (items 4..7).
pub const MENU_COL2_X: i32 = 74;

/// Y position of the first menu row.
pub const MENU_Y_START: i32 = 20;

/// Vertical spacing between menu rows.
pub const MENU_Y_STEP: i32 = 12;

/// Number of rows per menu column.
pub const MENU_ROWS: usize = 4;

/// Selection box size and offset relative to the item label origin.
pub const SELECT_BOX_W: u32 = 56;
pub const SELECT_BOX_H: u32 = 16;
pub const SELECT_BOX_DX: i32 = -8;
pub const SELECT_BOX_DY: i32 = -4;

/// Origin of the demo-view input line ("A: .. B: ..").
pub const DEMO_INPUT_X: i32 = 20;
pub const DEMO_INPUT_Y: i32 = 20;

/// Origin of the demo-view output line ("Saida: ..").
pub const DEMO_OUTPUT_X: i32 = 20;
pub const DEMO_OUTPUT_Y: i32 = 40;

// Indicator LEDs

/// PWM counter wrap; duty levels are 8-bit.
pub const INDICATOR_PWM_TOP: u16 = 255;

/// Duty level of the active indicator (~50% of full scale).
pub const INDICATOR_ON_LEVEL: u8 = 127;
