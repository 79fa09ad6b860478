//! PWM indicator LEDs.
//!
//! Green lights for a true result, red for false, both at a fixed ~50%
//! duty. Both LEDs sit on channel B of their PWM slice, 8-bit wrap.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use crate::config::INDICATOR_PWM_TOP;
use crate::indicator_logic;

/// Owns the two indicator PWM channels.
pub struct IndicatorLeds<'d> {
    green: Pwm<'d>,
    red: Pwm<'d>,
    green_cfg: PwmConfig,
    red_cfg: PwmConfig,
}

impl<'d> IndicatorLeds<'d> {
    /// Take ownership of the configured PWM channels, both off.
    pub fn new(green: Pwm<'d>, red: Pwm<'d>) -> Self {
        let mut cfg = PwmConfig::default();
        cfg.top = INDICATOR_PWM_TOP;
        cfg.compare_b = 0;

        let mut leds = Self {
            green,
            red,
            green_cfg: cfg.clone(),
            red_cfg: cfg,
        };
        leds.reset();
        leds
    }

    fn apply(&mut self, green_level: u8, red_level: u8) {
        self.green_cfg.compare_b = green_level as u16;
        self.red_cfg.compare_b = red_level as u16;
        self.green.set_config(&self.green_cfg);
        self.red.set_config(&self.red_cfg);
    }

    /// Drive the indicators from an evaluated result.
    pub fn set_result(&mut self, result: bool) {
        let (green, red) = indicator_logic::levels(result);
        self.apply(green, red);
    }

    /// Both indicators off.
    pub fn reset(&mut self) {
        self.apply(0, 0);
    }
}
