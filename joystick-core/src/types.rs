//! Core report types: AxisPosition, Buttons, HidReport.

use core::ops::{BitOr, BitOrAssign};

/// Position of one digital axis.
///
/// The stick is a set of switches, so an axis only ever reports one of three
/// levels even though the descriptor declares a full 0-255 range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AxisPosition {
    /// Full left / full up.
    Min = 0x00,
    Center = 0x7F,
    /// Full right / full down.
    Max = 0xFF,
}

impl AxisPosition {
    /// Resolve an axis from its two direction lines.
    ///
    /// The negative line is checked first, so it wins when both are asserted.
    #[inline]
    #[must_use]
    pub const fn from_lines(negative: bool, positive: bool) -> Self {
        if negative {
            Self::Min
        } else if positive {
            Self::Max
        } else {
            Self::Center
        }
    }

    /// Wire value of this position.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Button state represented as an 8-bit field, one bit per HID button.
///
/// # Example
///
/// ```
/// use joystick_core::Buttons;
///
/// let buttons = Buttons::FIRE1 | Buttons::START;
/// assert!(buttons.contains(Buttons::FIRE1));
/// assert!(!buttons.contains(Buttons::FIRE2));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u8);

impl Buttons {
    pub const FIRE2: Self = Self(1 << 0);
    pub const FIRE1: Self = Self(1 << 1);
    pub const START: Self = Self(1 << 7);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u8 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The 3-byte input report described by [`REPORT_DESCRIPTOR`].
///
/// Wire layout: `[x, y, buttons]`.
///
/// [`REPORT_DESCRIPTOR`]: crate::descriptor::REPORT_DESCRIPTOR
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidReport {
    pub x: AxisPosition,
    pub y: AxisPosition,
    pub buttons: Buttons,
}

impl HidReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 3;

    /// State held before the first report is sent: all bytes zero.
    ///
    /// This is not the same as a centred stick, so the first sampled report
    /// always differs from it.
    pub const POWER_ON: Self = Self {
        x: AxisPosition::Min,
        y: AxisPosition::Min,
        buttons: Buttons::NONE,
    };

    /// Stick centred, nothing pressed.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            x: AxisPosition::Center,
            y: AxisPosition::Center,
            buttons: Buttons::NONE,
        }
    }

    /// Convert the report to bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; Self::SIZE] {
        [self.x.raw(), self.y.raw(), self.buttons.raw()]
    }
}
