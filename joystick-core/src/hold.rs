//! START line gesture detector.
//!
//! Boards without a spare line share one button between START and FIRE2:
//! a short tap reports START for a grace window after release, a long hold
//! reports FIRE2 for as long as it is held. Time is counted in loop
//! iterations, there is no hardware timer involved.

use crate::types::Buttons;

/// Iteration thresholds for the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureTiming {
    /// Iterations the line must be held before it counts as a long press.
    pub long_press_ticks: u16,
    /// Iterations START stays reported after a short tap is released.
    pub release_window_ticks: u16,
}

impl GestureTiming {
    pub const DEFAULT: Self = Self {
        long_press_ticks: 15_000,
        release_window_ticks: 1_500,
    };
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Progress through one press/release gesture.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldState {
    hold_ticks: u16,
    release_ticks: u16,
    long_press: bool,
}

impl HoldState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hold_ticks: 0,
            release_ticks: 0,
            long_press: false,
        }
    }

    /// Advance the gesture by one iteration and return the buttons it reports.
    ///
    /// A re-press inside the grace window carries on counting from the
    /// current hold count; the grace count is only cleared once the window
    /// runs out.
    pub fn update(&mut self, asserted: bool, timing: &GestureTiming) -> Buttons {
        if asserted {
            if self.hold_ticks >= timing.long_press_ticks {
                self.long_press = true;
                return Buttons::FIRE2;
            }
            self.hold_ticks += 1;
        } else if self.hold_ticks != 0 {
            if self.long_press {
                self.long_press = false;
                self.hold_ticks = 0;
            } else if self.release_ticks < timing.release_window_ticks {
                self.release_ticks += 1;
                return Buttons::START;
            } else {
                self.hold_ticks = 0;
                self.release_ticks = 0;
            }
        }
        Buttons::NONE
    }

    #[inline]
    #[must_use]
    pub const fn hold_ticks(&self) -> u16 {
        self.hold_ticks
    }

    #[inline]
    #[must_use]
    pub const fn release_ticks(&self) -> u16 {
        self.release_ticks
    }

    /// True once the current hold has crossed the long-press threshold.
    #[inline]
    #[must_use]
    pub const fn long_press_fired(&self) -> bool {
        self.long_press
    }

    /// True when no gesture is in progress.
    #[inline]
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.hold_ticks == 0 && self.release_ticks == 0 && !self.long_press
    }
}
