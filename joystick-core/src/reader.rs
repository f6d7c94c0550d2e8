//! Port reader: turns one port sample into a [`HidReport`].

use crate::hold::{GestureTiming, HoldState};
use crate::pins::{Line, LineState, PinMap, StartMode};
use crate::types::{AxisPosition, Buttons, HidReport};

/// Samples input lines once per loop iteration.
///
/// Owns the [`HoldState`] of the START gesture; nothing else reads or
/// writes it. Apart from that state, [`sample`](Self::sample) is a pure
/// function of the lines it is given.
#[derive(Clone, Debug)]
pub struct PortReader {
    map: PinMap,
    timing: GestureTiming,
    hold: HoldState,
}

impl PortReader {
    /// Create a reader for the given board with default gesture timing.
    #[must_use]
    pub const fn new(map: PinMap) -> Self {
        Self::with_timing(map, GestureTiming::DEFAULT)
    }

    #[must_use]
    pub const fn with_timing(map: PinMap, timing: GestureTiming) -> Self {
        Self {
            map,
            timing,
            hold: HoldState::new(),
        }
    }

    /// Build the report for one set of asserted lines.
    pub fn sample(&mut self, lines: LineState) -> HidReport {
        let x = AxisPosition::from_lines(
            lines.is_asserted(Line::Left),
            lines.is_asserted(Line::Right),
        );
        let y = AxisPosition::from_lines(
            lines.is_asserted(Line::Up),
            lines.is_asserted(Line::Down),
        );

        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::FIRE1, lines.is_asserted(Line::Fire1));
        buttons.set(Buttons::FIRE2, lines.is_asserted(Line::Fire2));

        let start = lines.is_asserted(Line::Start);
        match self.map.start_mode {
            StartMode::Gesture => buttons |= self.hold.update(start, &self.timing),
            StartMode::Dedicated => buttons.set(Buttons::START, start),
        }

        HidReport { x, y, buttons }
    }

    /// Decode a raw port snapshot with this reader's pin map and sample it.
    pub fn sample_port(&mut self, port: u32) -> HidReport {
        let lines = self.map.decode(port);
        self.sample(lines)
    }

    #[inline]
    #[must_use]
    pub const fn hold_state(&self) -> &HoldState {
        &self.hold
    }
}
