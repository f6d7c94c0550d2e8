//! Digital joystick to USB HID adapter for RP2040.
//!
//! This crate provides the embedded side of the adapter: GPIO sampling,
//! board configuration and the boot code that drives [`JoystickBridge`]
//! from a plain busy-wait loop. The HID class itself lives in
//! [`joystick_core::usb`] so it can be tested on the host.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Services the USB device stack
//! 2. Samples seven active-low switch lines once the interrupt endpoint is free
//! 3. Sends a 3-byte joystick report when it changes, and every 255 idle
//!    samples regardless
//!
//! # Hardware Configuration
//!
//! All lines are switches to ground, read with the internal pull-ups.
//!
//! | Line  | `board-gesture` | `board-dedicated-start` |
//! |-------|-----------------|-------------------------|
//! | LEFT  | GPIO 4          | GPIO 10                 |
//! | RIGHT | GPIO 3          | GPIO 11                 |
//! | UP    | GPIO 6          | GPIO 5                  |
//! | DOWN  | GPIO 5          | GPIO 7                  |
//! | FIRE1 | GPIO 7          | GPIO 6                  |
//! | FIRE2 | GPIO 2          | GPIO 12                 |
//! | START | GPIO 8          | GPIO 4                  |
//!
//! # Modules
//!
//! - [`config`]: USB identity and the selected [`PinMap`]
//! - [`gpio_port`]: GPIO port source ([`GpioPort`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)
//! - **`board-gesture`** (default): START shares its button with FIRE2
//! - **`board-dedicated-start`**: START has its own line
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`joystick_core`] that the
//! binary needs, so it only has to depend on this crate.

#![no_std]

// Exactly one board pin table
#[cfg(all(feature = "board-gesture", feature = "board-dedicated-start"))]
compile_error!("Cannot enable both `board-gesture` and `board-dedicated-start` features - they select conflicting pin tables");

#[cfg(not(any(feature = "board-gesture", feature = "board-dedicated-start")))]
compile_error!("Enable one of the `board-gesture` or `board-dedicated-start` features");

// Re-export core types for convenience
pub use joystick_core::{
    BridgeError, HidReport, JoystickBridge, JoystickClass, OutputError, PinMap, PortReader,
    PortSource, Step, UsbJoystick, UsbStack,
};

pub mod config;
pub mod gpio_port;

pub use gpio_port::{GpioPort, LinePin, PortError};
