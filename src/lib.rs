//! Host-testable library interface for gatelab.
//!
//! All pure logic lives here: the gate evaluator, the menu/demo state
//! machine, input interpretation, indicator levels, and frame
//! rendering. None of it touches hardware, so `cargo test --lib` runs
//! on the host.
//!
//! The embedded binary uses main.rs with #![no_std] and #![no_main];
//! the modules that own peripherals (`ui::inputs`, `ui::leds`, the
//! SSD1306 wrapper in `ui::display`) are gated behind the `embedded`
//! cargo feature.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod error;
pub mod gate;
pub mod indicator_logic;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
