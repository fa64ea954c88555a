//! Press tracking for one debounced push button.
//!
//! Hold policy: the short-press action fires on the debounced press edge.
//! Holding the button afterwards just keeps the associated preview on the
//! display; release performs no further action. This matches how the
//! timeout and sound buttons behave on the deployed unit.

use crate::debounce::Debouncer;

/// Edge produced by one poll of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// No change of debounced level this poll.
    None,
    /// Debounced transition to pressed; the action edge.
    Pressed,
    /// Debounced transition to released.
    Released,
}

/// One physical button: debounce filter plus edge detection.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    debouncer: Debouncer,
    down: bool,
}

impl Button {
    /// Button assumed released at startup.
    pub fn new(debounce_polls: u8) -> Self {
        Self {
            debouncer: Debouncer::new(false, debounce_polls),
            down: false,
        }
    }

    /// Feed one raw active-level sample; returns the edge, if any.
    pub fn update(&mut self, raw_active: bool) -> ButtonEdge {
        let level = self.debouncer.update(raw_active);
        let edge = match (self.down, level) {
            (false, true) => ButtonEdge::Pressed,
            (true, false) => ButtonEdge::Released,
            _ => ButtonEdge::None,
        };
        self.down = level;
        edge
    }

    /// Debounced held state.
    pub fn is_down(&self) -> bool {
        self.down
    }
}
