//! `usb-device` stack driven from the main loop.

use usb_device::bus::UsbBus;
use usb_device::device::{UsbDevice, UsbDeviceState};
use usb_device::UsbError;

use super::class::JoystickClass;
use crate::output::{OutputError, UsbStack};
use crate::types::HidReport;

/// The USB device together with its single joystick class.
///
/// Nothing runs from the USB interrupt; all bus work happens in
/// [`poll`](UsbStack::poll).
pub struct UsbJoystick<'a, B: UsbBus> {
    device: UsbDevice<'a, B>,
    class: JoystickClass<'a, B>,
    state: UsbDeviceState,
}

impl<'a, B: UsbBus> UsbJoystick<'a, B> {
    /// Create a new stack from a built device and its class.
    pub fn new(device: UsbDevice<'a, B>, class: JoystickClass<'a, B>) -> Self {
        let state = device.state();
        Self {
            device,
            class,
            state,
        }
    }
}

impl<B: UsbBus> UsbStack for UsbJoystick<'_, B> {
    fn poll(&mut self) {
        self.device.poll(&mut [&mut self.class]);

        let state = self.device.state();
        if state != self.state {
            info!("USB state: {}", state);
            self.state = state;
        }
    }

    fn interrupt_ready(&self) -> bool {
        endpoint_ready(self.device.state(), self.class.is_busy())
    }

    fn submit(&mut self, report: &[u8; HidReport::SIZE]) -> Result<(), OutputError> {
        if self.device.state() != UsbDeviceState::Configured {
            return Err(OutputError::NotReady);
        }
        self.class.push(report).map(|_| ()).map_err(output_error)
    }
}

/// The interrupt endpoint takes reports once configured and idle.
fn endpoint_ready(state: UsbDeviceState, busy: bool) -> bool {
    state == UsbDeviceState::Configured && !busy
}

/// Map a `usb-device` error onto the bridge's output error.
fn output_error(err: UsbError) -> OutputError {
    match err {
        UsbError::WouldBlock => OutputError::Busy,
        UsbError::InvalidState => OutputError::NotReady,
        _ => OutputError::Io,
    }
}
