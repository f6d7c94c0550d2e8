//! HID joystick on the `usb-device` stack.
//!
//! [`JoystickClass`] is the class driver; [`UsbJoystick`] pairs it with the
//! device and implements [`UsbStack`](crate::UsbStack) for the bridge. Both
//! are generic over the bus, so any `usb-device` HAL driver plugs in.

mod class;
mod stack;

#[cfg(test)]
mod test_bus;

pub use class::{JoystickClass, ENDPOINT_MAX_PACKET_SIZE, POLL_INTERVAL_MS};
pub use stack::UsbJoystick;
