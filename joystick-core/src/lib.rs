//! Platform-agnostic joystick sampling, HID report and USB polling logic.
//!
//! This crate holds everything about the joystick adapter that does not
//! touch hardware. It can be used both in embedded `no_std` environments
//! and on host for testing.
//!
//! # Overview
//!
//! - [`types`]: The 3-byte report ([`HidReport`], [`AxisPosition`], [`Buttons`])
//! - [`descriptor`]: Report and HID class descriptors ([`REPORT_DESCRIPTOR`])
//! - [`pins`]: Logical lines and board pin tables ([`PinMap`], [`LineState`])
//! - [`hold`]: START tap / long-press gesture ([`HoldState`])
//! - [`reader`]: Port sample to report ([`PortReader`])
//! - [`cache`]: Change detection and keepalive ([`ReportCache`])
//! - [`control`]: Control request replies ([`respond`])
//! - [`input`]: Port source trait ([`PortSource`])
//! - [`output`]: USB stack trait ([`UsbStack`])
//! - [`bridge`]: The main loop ([`JoystickBridge`])
//! - `usb`: HID class and [`UsbStack`] over `usb-device` (`JoystickClass`, `UsbJoystick`)
//!
//! # Report
//!
//! ```text
//! byte 0: X axis   0x00 left / 0x7F center / 0xFF right
//! byte 1: Y axis   0x00 up   / 0x7F center / 0xFF down
//! byte 2: buttons  bit 0 FIRE2, bit 1 FIRE1, bit 7 START
//! ```
//!
//! # Example
//!
//! ```rust
//! use joystick_core::{PinMap, PortReader};
//!
//! let mut reader = PortReader::new(PinMap::GESTURE_BOARD);
//!
//! // Lines are active low: clear the LEFT bit, everything else idle.
//! let port = !(1u32 << PinMap::GESTURE_BOARD.left);
//! assert_eq!(reader.sample_port(port).as_bytes(), [0x00, 0x7F, 0x00]);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`usb`** (default): HID class and device glue for any `usb-device` bus
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod bridge;
pub mod cache;
pub mod control;
pub mod descriptor;
pub mod hold;
pub mod input;
pub mod output;
pub mod pins;
pub mod reader;
pub mod types;
#[cfg(feature = "usb")]
pub mod usb;

// Re-export main types at crate root
pub use bridge::{BridgeError, JoystickBridge, Step};
pub use cache::{should_send, ReportCache, KEEPALIVE_TICKS};
pub use control::{respond, ControlRequest, HidRequest, RequestKind};
pub use descriptor::{DescriptorType, REPORT_DESCRIPTOR, REPORT_DESCRIPTOR_LEN};
pub use hold::{GestureTiming, HoldState};
pub use input::PortSource;
pub use output::{OutputError, UsbStack};
pub use pins::{Line, LineState, PinMap, StartMode};
pub use reader::PortReader;
pub use types::{AxisPosition, Buttons, HidReport};
#[cfg(feature = "usb")]
pub use usb::{JoystickClass, UsbJoystick};
