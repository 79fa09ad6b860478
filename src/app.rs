//! Menu/demo state machine.
//!
//! All behavior is a function of the current state, one `Controls`
//! snapshot per tick, and the monotonic time in milliseconds. The tick
//! returns the side effects to apply (a frame to draw, an indicator
//! command) so the machine stays pure and host-testable; the firmware
//! loop owns the peripherals and applies the effects.

use crate::gate::GateKind;
use crate::ui::input_logic::{self, AxisDirection};

/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Gate list with a selection box.
    Menu,
    /// Live truth-table view for one gate.
    Demo(GateKind),
}

/// Menu navigation state.
#[derive(Debug, Clone, Copy)]
pub struct MenuState {
    /// Selected slot, 0..GateKind::COUNT.
    pub selected: usize,
    /// Timestamp of the last honored move (also the heartbeat reference).
    pub last_move_ms: u64,
    /// True until the first honored move; that move skips the cooldown.
    pub first_move: bool,
}

/// One snapshot of every input, sampled once per tick.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    /// Raw vertical-axis ADC reading.
    pub axis_raw: u16,
    /// Debounced confirm press edge (true at most once per press).
    pub confirm: bool,
    /// Gate input A, level-triggered.
    pub input_a: bool,
    /// Gate input B, level-triggered.
    pub input_b: bool,
}

/// Everything the renderer needs for one full-frame redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameModel {
    Menu { selected: usize },
    Demo { gate: GateKind, a: bool, b: bool, result: bool },
}

/// Indicator side effect of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorCommand {
    /// Leave the indicators as they are.
    None,
    /// Drive the true/false indicators from a result.
    Set(bool),
    /// Both indicators off (demo exit).
    Reset,
}

/// Side effects of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEffects {
    /// Frame to draw, if the display needs a redraw this tick.
    pub frame: Option<FrameModel>,
    pub indicators: IndicatorCommand,
}

/// Application state: current mode plus menu navigation state.
///
/// Created once at startup and ticked for the lifetime of the device;
/// there is no terminal state.
pub struct App {
    pub mode: Mode,
    pub menu: MenuState,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: Mode::Menu,
            menu: MenuState {
                selected: 0,
                last_move_ms: 0,
                first_move: true,
            },
        }
    }

    /// The frame describing the current menu screen.
    pub fn menu_frame(&self) -> FrameModel {
        FrameModel::Menu {
            selected: self.menu.selected,
        }
    }

    /// Advance the state machine by one polling period.
    pub fn tick(&mut self, controls: &Controls, now_ms: u64) -> TickEffects {
        match self.mode {
            Mode::Menu => self.tick_menu(controls, now_ms),
            Mode::Demo(gate) => self.tick_demo(gate, controls),
        }
    }

    fn tick_menu(&mut self, controls: &Controls, now_ms: u64) -> TickEffects {
        if controls.confirm {
            let gate = GateKind::ALL[self.menu.selected];
            self.mode = Mode::Demo(gate);
            return self.demo_effects(gate, controls);
        }

        let mut frame = None;

        match input_logic::classify_axis(controls.axis_raw) {
            AxisDirection::Center => {}
            direction => {
                if input_logic::nav_allowed(self.menu.first_move, self.menu.last_move_ms, now_ms) {
                    self.menu.selected = match direction {
                        AxisDirection::Down => {
                            input_logic::select_next(self.menu.selected, GateKind::COUNT)
                        }
                        _ => input_logic::select_prev(self.menu.selected, GateKind::COUNT),
                    };
                    self.menu.last_move_ms = now_ms;
                    self.menu.first_move = false;
                    frame = Some(self.menu_frame());
                }
            }
        }

        // Heartbeat redraw of the idle menu.
        if frame.is_none() && input_logic::menu_should_refresh(self.menu.last_move_ms, now_ms) {
            self.menu.last_move_ms = now_ms;
            frame = Some(self.menu_frame());
        }

        TickEffects {
            frame,
            indicators: IndicatorCommand::None,
        }
    }

    fn tick_demo(&mut self, gate: GateKind, controls: &Controls) -> TickEffects {
        if controls.confirm {
            // Back to the menu; selection is preserved.
            self.mode = Mode::Menu;
            return TickEffects {
                frame: Some(self.menu_frame()),
                indicators: IndicatorCommand::Reset,
            };
        }

        self.demo_effects(gate, controls)
    }

    fn demo_effects(&self, gate: GateKind, controls: &Controls) -> TickEffects {
        let a = controls.input_a;
        let b = if gate.is_unary() {
            false
        } else {
            controls.input_b
        };
        let result = gate.evaluate(a, b);

        TickEffects {
            frame: Some(FrameModel::Demo { gate, a, b, result }),
            indicators: IndicatorCommand::Set(result),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
