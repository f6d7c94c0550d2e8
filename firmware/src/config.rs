//! Build-time configuration: USB identity, clocks and board pins.

use joystick_core::PinMap;

/// Shared V-USB vendor ID.
pub const USB_VID: u16 = 0x16C0;
/// Shared V-USB product ID for HID joysticks.
pub const USB_PID: u16 = 0x27DC;
/// Device release number (bcdDevice), 1.00.
pub const DEVICE_RELEASE: u16 = 0x0100;

pub const MANUFACTURER: &str = "Immortal Joysticks";
pub const PRODUCT: &str = "Immortal Joysticks USB Adapter";
pub const SERIAL_NUMBER: &str = "IMJOY0001";

/// Bus current drawn, in mA.
pub const MAX_POWER_MA: usize = 100;

/// External crystal on Pico-compatible boards.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Pin table of the board this image is built for.
#[cfg(feature = "board-gesture")]
pub const PIN_MAP: PinMap = PinMap::GESTURE_BOARD;

/// Pin table of the board this image is built for.
#[cfg(feature = "board-dedicated-start")]
pub const PIN_MAP: PinMap = PinMap::DEDICATED_START_BOARD;
