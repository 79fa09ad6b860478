//! GPIO/ADC input sampling.
//!
//! Three digital lines plus one analog axis:
//!   - CONFIRM - joystick switch, pull-up (press = low), edge-detected
//!     with a settle delay
//!   - A / B   - gate input buttons, read level-triggered, active high
//!   - VRY     - joystick vertical axis on ADC0
//!
//! The two polarities are deliberately different: unifying them would
//! change observable behavior at the physical interface.

use defmt::info;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::config::{AXIS_CENTER, CONFIRM_DEBOUNCE_MS};
use crate::ui::input_logic::EdgeDetector;

/// Owns the input peripherals for the lifetime of the process.
pub struct InputSampler<'d> {
    adc: Adc<'d, Async>,
    axis: Channel<'d>,
    confirm: Input<'d>,
    confirm_edge: EdgeDetector,
    input_a: Input<'d>,
    input_b: Input<'d>,
}

impl<'d> InputSampler<'d> {
    pub fn new(
        adc: Adc<'d, Async>,
        axis: Channel<'d>,
        confirm: Input<'d>,
        input_a: Input<'d>,
        input_b: Input<'d>,
    ) -> Self {
        Self {
            adc,
            axis,
            confirm,
            confirm_edge: EdgeDetector::new(),
            input_a,
            input_b,
        }
    }

    /// Raw reading of the joystick's vertical axis.
    ///
    /// A failed conversion reads as a centered stick; no runtime error
    /// surfaces from the polling loop.
    pub async fn sample_axis(&mut self) -> u16 {
        self.adc.read(&mut self.axis).await.unwrap_or(AXIS_CENTER)
    }

    /// True exactly once per confirm press, with a settle delay after
    /// the detected edge.
    pub async fn poll_confirm(&mut self) -> bool {
        let pressed = self.confirm_edge.update(self.confirm.is_high());
        if pressed {
            info!("confirm pressed");
            Timer::after(Duration::from_millis(CONFIRM_DEBOUNCE_MS)).await;
        }
        pressed
    }

    /// Gate input A, no debouncing.
    pub fn read_gate_a(&self) -> bool {
        self.input_a.is_high()
    }

    /// Gate input B, no debouncing.
    pub fn read_gate_b(&self) -> bool {
        self.input_b.is_high()
    }
}
