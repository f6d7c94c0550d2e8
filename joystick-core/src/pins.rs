//! Logical input lines and per-board pin tables.
//!
//! Every line is a switch to ground with a pull-up, so a line reads low when
//! asserted. A [`PinMap`] says which port bit carries which line; the
//! sampling logic only ever sees the decoded [`LineState`].

/// A logical joystick input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Line {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
    Fire1 = 4,
    Fire2 = 5,
    Start = 6,
}

impl Line {
    pub const ALL: [Line; 7] = [
        Line::Left,
        Line::Right,
        Line::Up,
        Line::Down,
        Line::Fire1,
        Line::Fire2,
        Line::Start,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of asserted lines for one sample.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineState(u8);

impl LineState {
    /// Nothing asserted.
    pub const NONE: Self = Self(0);

    /// Check whether `line` is asserted.
    #[inline]
    #[must_use]
    pub const fn is_asserted(self, line: Line) -> bool {
        self.0 & line.bit() != 0
    }

    /// Return a copy with `line` asserted.
    #[inline]
    #[must_use]
    pub const fn with(self, line: Line) -> Self {
        Self(self.0 | line.bit())
    }

    /// Build a state from a list of asserted lines.
    #[must_use]
    pub fn from_lines(lines: &[Line]) -> Self {
        lines.iter().fold(Self::NONE, |state, line| state.with(*line))
    }
}

/// How the START line is turned into buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartMode {
    /// The board has no spare line for START: a short tap reports START,
    /// a long hold reports FIRE2.
    Gesture,
    /// The START line maps straight to the START button.
    Dedicated,
}

/// Port bit position of every line on one board, plus its START handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub left: u8,
    pub right: u8,
    pub up: u8,
    pub down: u8,
    pub fire1: u8,
    pub fire2: u8,
    pub start: u8,
    pub start_mode: StartMode,
}

impl PinMap {
    /// Seven-line board where START doubles as the long-press FIRE2.
    pub const GESTURE_BOARD: Self = Self {
        left: 4,
        right: 3,
        up: 6,
        down: 5,
        fire1: 7,
        fire2: 2,
        start: 8,
        start_mode: StartMode::Gesture,
    };

    /// Board with a dedicated START line.
    pub const DEDICATED_START_BOARD: Self = Self {
        left: 10,
        right: 11,
        up: 5,
        down: 7,
        fire1: 6,
        fire2: 12,
        start: 4,
        start_mode: StartMode::Dedicated,
    };

    /// Port bit carrying `line`.
    #[must_use]
    pub const fn pin(&self, line: Line) -> u8 {
        match line {
            Line::Left => self.left,
            Line::Right => self.right,
            Line::Up => self.up,
            Line::Down => self.down,
            Line::Fire1 => self.fire1,
            Line::Fire2 => self.fire2,
            Line::Start => self.start,
        }
    }

    /// Width of the port word.
    pub const PORT_BITS: u8 = 32;

    /// Check that every line sits on its own bit of the port word.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        let mut seen = 0u32;
        let mut i = 0;
        while i < Line::ALL.len() {
            let pin = self.pin(Line::ALL[i]);
            if pin >= Self::PORT_BITS {
                return false;
            }
            let bit = 1u32 << pin;
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
            i += 1;
        }
        true
    }

    /// Port bit of `line`, or `None` if the table puts it off the port.
    #[inline]
    fn bit(&self, line: Line) -> Option<u32> {
        1u32.checked_shl(u32::from(self.pin(line)))
    }

    /// Mask of every port bit this board reads.
    #[must_use]
    pub fn input_mask(&self) -> u32 {
        Line::ALL
            .iter()
            .filter_map(|line| self.bit(*line))
            .fold(0, |mask, bit| mask | bit)
    }

    /// Decode a raw port snapshot (bit set = line high) into asserted lines.
    ///
    /// A line whose pin lies off the port never reads as asserted.
    #[must_use]
    pub fn decode(&self, port: u32) -> LineState {
        Line::ALL.iter().fold(LineState::NONE, |state, line| match self.bit(*line) {
            Some(bit) if port & bit == 0 => state.with(*line),
            _ => state,
        })
    }
}
