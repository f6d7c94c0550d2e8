//! GPIO-backed port source.

use embedded_hal::digital::InputPin;
use joystick_core::{PinMap, PortSource};
use rp2040_hal::gpio::{DynPinId, FunctionSioInput, Pin, PullUp};

/// A joystick line: a pulled-up SIO input with its GPIO number erased.
pub type LinePin = Pin<DynPinId, FunctionSioInput, PullUp>;

/// Error building a [`GpioPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PortError {
    /// The pin table puts a line off the port or two lines on one pin.
    InvalidPinMap,
    /// A GPIO number does not fit the 32-bit port word.
    PinOutOfRange(u8),
    /// A pin was given that the board's pin table does not use.
    UnmappedPin(u8),
    /// The same GPIO was given twice.
    DuplicatePin(u8),
}

/// Snapshot of the joystick lines as one port word.
///
/// Bit `n` of [`read_port`](PortSource::read_port) is the level of GPIO
/// `n`. Bits of GPIOs that are not joystick lines always read high.
pub struct GpioPort {
    pins: [LinePin; 7],
}

impl GpioPort {
    /// Wrap the seven line inputs of `map`.
    ///
    /// Fails if `map` is not a valid table, or a pin is not part of `map`
    /// or is given twice.
    pub fn new(map: &PinMap, pins: [LinePin; 7]) -> Result<Self, PortError> {
        if !map.is_valid() {
            return Err(PortError::InvalidPinMap);
        }
        let mask = map.input_mask();
        let mut seen = 0u32;
        for pin in &pins {
            let num = pin.id().num;
            let bit = 1u32
                .checked_shl(u32::from(num))
                .ok_or(PortError::PinOutOfRange(num))?;
            if mask & bit == 0 {
                return Err(PortError::UnmappedPin(num));
            }
            if seen & bit != 0 {
                return Err(PortError::DuplicatePin(num));
            }
            seen |= bit;
        }
        Ok(Self { pins })
    }
}

impl PortSource for GpioPort {
    fn read_port(&mut self) -> u32 {
        self.pins.iter_mut().fold(u32::MAX, |port, pin| {
            // SIO reads cannot fail; pins were range-checked in `new`
            if pin.is_low().unwrap_or(false) {
                port & !(1u32 << pin.id().num)
            } else {
                port
            }
        })
    }
}
