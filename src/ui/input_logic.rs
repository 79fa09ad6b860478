//! Pure input-interpretation logic, shared between the firmware and
//! host tests: joystick axis classification, menu navigation, the
//! navigation cooldown and the confirm-button edge detector.

use crate::config::{AXIS_CENTER, AXIS_DEADZONE, MENU_REFRESH_MS, NAV_COOLDOWN_MS};

/// Direction of a joystick deflection past the dead-zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisDirection {
    /// Stick pushed down (raw value below center); moves selection forward.
    Down,
    /// Stick pushed up (raw value above center); moves selection backward.
    Up,
    /// Within the dead-zone.
    Center,
}

/// Classify a raw vertical-axis reading against the dead-zone.
pub fn classify_axis(raw: u16) -> AxisDirection {
    if raw < AXIS_CENTER - AXIS_DEADZONE {
        AxisDirection::Down
    } else if raw > AXIS_CENTER + AXIS_DEADZONE {
        AxisDirection::Up
    } else {
        AxisDirection::Center
    }
}

/// Move selection cursor one item down, wrapping past the last item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    (selected + 1) % item_count
}

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if selected > 0 {
        selected - 1
    } else {
        item_count - 1
    }
}

/// Decide whether a deflection may be honored.
///
/// The very first move after boot passes unconditionally; afterwards a
/// fixed cooldown must have elapsed since the last honored move. Holding
/// the stick deflected does not renew the cooldown.
pub fn nav_allowed(first_move: bool, last_move_ms: u64, now_ms: u64) -> bool {
    first_move || now_ms.saturating_sub(last_move_ms) >= NAV_COOLDOWN_MS
}

/// Decide whether the idle menu is due for its heartbeat redraw.
pub fn menu_should_refresh(last_move_ms: u64, now_ms: u64) -> bool {
    now_ms.saturating_sub(last_move_ms) >= MENU_REFRESH_MS
}

/// Press-edge detector for a pull-up button (idle high, pressed low).
///
/// `update` returns true exactly once per press, on the high-to-low
/// transition. The caller applies the settle delay.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        // Unpressed reads high through the pull-up.
        Self { last_level: true }
    }

    pub fn update(&mut self, level: bool) -> bool {
        let pressed = self.last_level && !level;
        self.last_level = level;
        pressed
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}
