//! In-memory `UsbBus` for driving the class and device from tests.

extern crate std;

use std::sync::Mutex;
use std::vec::Vec;

use usb_device::bus::{PollResult, UsbBus, UsbBusAllocator};
use usb_device::device::{UsbDevice, UsbDeviceBuilder, UsbVidPid};
use usb_device::endpoint::{EndpointAddress, EndpointType};
use usb_device::{Result, UsbDirection, UsbError};

/// Host side of the fake bus: what it sent and what the device wrote.
#[derive(Default)]
pub(crate) struct TestHost {
    setup: Mutex<Option<[u8; 8]>>,
    control_in: Mutex<Vec<Vec<u8>>>,
    interrupt_in: Mutex<Option<Vec<u8>>>,
    interrupt_index: Mutex<usize>,
    refuse_interrupt: Mutex<Option<UsbError>>,
    in_complete: Mutex<u16>,
    stalled: Mutex<bool>,
}

impl TestHost {
    /// Queue a setup packet for the next poll.
    pub(crate) fn send_setup(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        length: u16,
    ) {
        let value = value.to_le_bytes();
        let index = index.to_le_bytes();
        let length = length.to_le_bytes();
        *self.setup.lock().unwrap() = Some([
            request_type,
            request,
            value[0],
            value[1],
            index[0],
            index[1],
            length[0],
            length[1],
        ]);
        self.control_in.lock().unwrap().clear();
        *self.stalled.lock().unwrap() = false;
    }

    /// Address and configure the device, calling `poll` to service each step.
    pub(crate) fn enumerate(&self, mut poll: impl FnMut()) {
        self.send_setup(0x00, 0x05, 5, 0, 0);
        poll();
        poll();
        self.send_setup(0x00, 0x09, 1, 0, 0);
        poll();
        poll();
    }

    /// Last packet the device wrote on the control endpoint since the last
    /// setup.
    pub(crate) fn last_control_in(&self) -> Option<Vec<u8>> {
        self.control_in.lock().unwrap().last().cloned()
    }

    /// Take the pending interrupt report and acknowledge it.
    pub(crate) fn collect_interrupt(&self) -> Option<Vec<u8>> {
        let report = self.interrupt_in.lock().unwrap().take();
        if report.is_some() {
            let index = *self.interrupt_index.lock().unwrap();
            *self.in_complete.lock().unwrap() |= 1 << index;
        }
        report
    }

    /// Make interrupt writes fail with `err`, or succeed again with `None`.
    pub(crate) fn refuse_interrupt(&self, err: Option<UsbError>) {
        *self.refuse_interrupt.lock().unwrap() = err;
    }

    pub(crate) fn stalled(&self) -> bool {
        *self.stalled.lock().unwrap()
    }
}

pub(crate) struct TestBus<'h> {
    host: &'h TestHost,
    next_index: usize,
}

impl<'h> TestBus<'h> {
    pub(crate) fn new(host: &'h TestHost) -> Self {
        Self {
            host,
            next_index: 0,
        }
    }
}

impl UsbBus for TestBus<'_> {
    fn alloc_ep(
        &mut self,
        ep_dir: UsbDirection,
        ep_addr: Option<EndpointAddress>,
        ep_type: EndpointType,
        _max_packet_size: u16,
        _interval: u8,
    ) -> Result<EndpointAddress> {
        let index = match (ep_type, ep_addr) {
            (EndpointType::Control, _) => 0,
            (_, Some(addr)) => addr.index(),
            (_, None) => {
                self.next_index += 1;
                self.next_index
            }
        };
        if matches!(ep_type, EndpointType::Interrupt) {
            *self.host.interrupt_index.lock().unwrap() = index;
        }
        Ok(EndpointAddress::from_parts(index, ep_dir))
    }

    fn enable(&mut self) {}

    fn reset(&self) {}

    fn set_device_address(&self, _addr: u8) {}

    fn write(&self, ep_addr: EndpointAddress, buf: &[u8]) -> Result<usize> {
        if ep_addr.index() == 0 {
            self.host.control_in.lock().unwrap().push(buf.to_vec());
            // The host acknowledges every control packet.
            *self.host.in_complete.lock().unwrap() |= 1;
            return Ok(buf.len());
        }

        if let Some(err) = *self.host.refuse_interrupt.lock().unwrap() {
            return Err(err);
        }
        let mut pending = self.host.interrupt_in.lock().unwrap();
        if pending.is_some() {
            return Err(UsbError::WouldBlock);
        }
        *pending = Some(buf.to_vec());
        Ok(buf.len())
    }

    fn read(&self, ep_addr: EndpointAddress, buf: &mut [u8]) -> Result<usize> {
        if ep_addr.index() != 0 {
            return Err(UsbError::WouldBlock);
        }
        match self.host.setup.lock().unwrap().take() {
            Some(packet) => {
                buf[..packet.len()].copy_from_slice(&packet);
                Ok(packet.len())
            }
            None => Err(UsbError::WouldBlock),
        }
    }

    fn set_stalled(&self, _ep_addr: EndpointAddress, stalled: bool) {
        if stalled {
            *self.host.stalled.lock().unwrap() = true;
        }
    }

    fn is_stalled(&self, _ep_addr: EndpointAddress) -> bool {
        false
    }

    fn suspend(&self) {}

    fn resume(&self) {}

    fn poll(&self) -> PollResult {
        let ep_setup = u16::from(self.host.setup.lock().unwrap().is_some());
        let ep_in_complete = core::mem::take(&mut *self.host.in_complete.lock().unwrap());
        if ep_setup == 0 && ep_in_complete == 0 {
            PollResult::None
        } else {
            PollResult::Data {
                ep_out: 0,
                ep_in_complete,
                ep_setup,
            }
        }
    }
}

/// Build a device on `alloc` with a control endpoint large enough for the
/// report descriptor in one packet.
pub(crate) fn test_device<'a, 'h>(
    alloc: &'a UsbBusAllocator<TestBus<'h>>,
) -> UsbDevice<'a, TestBus<'h>> {
    UsbDeviceBuilder::new(alloc, UsbVidPid(0x16C0, 0x27DC))
        .max_packet_size_0(64)
        .unwrap()
        .build()
}
