//! gatelab firmware entry point.
//!
//! Single cooperative polling loop on an RP2040: sample inputs, tick
//! the state machine, apply the resulting display/LED effects, sleep
//! one period. No spawned tasks; there is no concurrent work.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Instant, Timer};
use panic_probe as _;

use gatelab::app::{App, Controls, IndicatorCommand};
use gatelab::config::{INDICATOR_PWM_TOP, TICK_MS};
use gatelab::ui::display;
use gatelab::ui::inputs::InputSampler;
use gatelab::ui::leds::IndicatorLeds;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("gatelab starting");

    // SSD1306 on I2C1: SDA = GP14, SCL = GP15. Init failure is fatal.
    let i2c = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());
    let mut display = match display::init(i2c) {
        Ok(d) => d,
        Err(e) => defmt::panic!("display init failed: {}", e),
    };

    // Joystick vertical axis on GP26 (ADC0), switch on GP22.
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let axis = Channel::new_pin(p.PIN_26, Pull::None);
    let confirm = Input::new(p.PIN_22, Pull::Up);

    // Gate input buttons.
    let input_a = Input::new(p.PIN_5, Pull::Up);
    let input_b = Input::new(p.PIN_6, Pull::Up);

    let mut sampler = InputSampler::new(adc, axis, confirm, input_a, input_b);

    // Indicator LEDs: green on GP11 (slice 5 B), red on GP13 (slice 6 B).
    let mut pwm_cfg = PwmConfig::default();
    pwm_cfg.top = INDICATOR_PWM_TOP;
    let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_cfg.clone());
    let red = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm_cfg);
    let mut leds = IndicatorLeds::new(green, red);

    let mut app = App::new();
    display::present(&mut display, &app.menu_frame());
    info!("entering main loop");

    loop {
        let confirm = sampler.poll_confirm().await;
        let axis_raw = sampler.sample_axis().await;
        let controls = Controls {
            axis_raw,
            confirm,
            input_a: sampler.read_gate_a(),
            input_b: sampler.read_gate_b(),
        };

        let prev_mode = app.mode;
        let effects = app.tick(&controls, Instant::now().as_millis());
        if app.mode != prev_mode {
            info!("mode: {}", app.mode);
        }

        if let Some(frame) = effects.frame {
            display::present(&mut display, &frame);
        }
        match effects.indicators {
            IndicatorCommand::Set(result) => leds.set_result(result),
            IndicatorCommand::Reset => leds.reset(),
            IndicatorCommand::None => {}
        }

        Timer::after(Duration::from_millis(TICK_MS)).await;
    }
}
