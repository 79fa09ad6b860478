//! Map an evaluated gate result to the two indicator duty levels.

use crate::config::INDICATOR_ON_LEVEL;

/// Duty levels `(green, red)` for a result.
///
/// The active indicator runs at a fixed ~50% duty, never a gradient:
/// true lights green, false lights red, the other channel is off.
pub fn levels(result: bool) -> (u8, u8) {
    if result {
        (INDICATOR_ON_LEVEL, 0)
    } else {
        (0, INDICATOR_ON_LEVEL)
    }
}
