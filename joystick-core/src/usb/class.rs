//! HID joystick class for `usb-device`.
//!
//! One interface, one interrupt IN endpoint, no boot protocol. Descriptor
//! bytes and control replies come from [`descriptor`](crate::descriptor)
//! and [`control`](crate::control); this module only wires them into the
//! device stack.

use usb_device::class_prelude::*;
use usb_device::control::{Recipient, Request, RequestType};
use usb_device::Result;

use crate::control::{respond, ControlRequest, RequestKind};
use crate::descriptor::{
    hid_descriptor, hid_descriptor_body, DescriptorType, REPORT_DESCRIPTOR, USB_CLASS_HID,
};
use crate::types::HidReport;

/// Interrupt IN endpoint packet size. One report fits in one packet.
pub const ENDPOINT_MAX_PACKET_SIZE: u16 = 8;
/// Interrupt IN polling interval requested from the host.
pub const POLL_INTERVAL_MS: u8 = 10;

const SUBCLASS_NONE: u8 = 0x00;
const PROTOCOL_NONE: u8 = 0x00;

/// USB HID class presenting a 2-axis, 8-button joystick.
pub struct JoystickClass<'a, B: UsbBus> {
    interface: InterfaceNumber,
    endpoint: EndpointIn<'a, B>,
    report: [u8; HidReport::SIZE],
    busy: bool,
}

impl<'a, B: UsbBus> JoystickClass<'a, B> {
    /// Allocate the interface and endpoint on `alloc`.
    pub fn new(alloc: &'a UsbBusAllocator<B>) -> Self {
        Self {
            interface: alloc.interface(),
            endpoint: alloc.interrupt(ENDPOINT_MAX_PACKET_SIZE, POLL_INTERVAL_MS),
            report: HidReport::POWER_ON.as_bytes(),
            busy: false,
        }
    }

    /// Queue a report on the interrupt endpoint.
    ///
    /// The report also becomes the `GET_REPORT` reply, even if the endpoint
    /// refuses it.
    pub fn push(&mut self, report: &[u8; HidReport::SIZE]) -> Result<usize> {
        self.report = *report;
        let written = self.endpoint.write(report)?;
        self.busy = true;
        Ok(written)
    }

    /// True while a queued report has not been collected by the host.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn is_for_interface(&self, request: &Request) -> bool {
        request.recipient == Recipient::Interface
            && request.index == u16::from(u8::from(self.interface))
    }

    /// Class requests to our interface and vendor requests to the device.
    fn is_ours(&self, request: &Request) -> bool {
        match request.request_type {
            RequestType::Class => self.is_for_interface(request),
            RequestType::Vendor => {
                request.recipient == Recipient::Device || self.is_for_interface(request)
            }
            _ => false,
        }
    }

    fn get_descriptor(transfer: ControlIn<B>) {
        let request = transfer.request();
        let result = match DescriptorType::try_from((request.value >> 8) as u8) {
            Ok(DescriptorType::Report) => {
                trace!("GET_DESCRIPTOR(Report)");
                transfer.accept_with_static(&REPORT_DESCRIPTOR)
            }
            Ok(DescriptorType::Hid) => {
                trace!("GET_DESCRIPTOR(HID)");
                transfer.accept_with(&hid_descriptor())
            }
            Err(other) => {
                warn!("unsupported descriptor type {=u8:#x}", other);
                transfer.reject()
            }
        };
        if let Err(e) = result {
            warn!("descriptor reply failed: {}", e);
        }
    }
}

fn request_kind(request_type: RequestType) -> RequestKind {
    match request_type {
        RequestType::Standard => RequestKind::Standard,
        RequestType::Class => RequestKind::Class,
        RequestType::Vendor => RequestKind::Vendor,
        RequestType::Reserved => RequestKind::Reserved,
    }
}

impl<B: UsbBus> UsbClass<B> for JoystickClass<'_, B> {
    fn get_configuration_descriptors(&self, writer: &mut DescriptorWriter) -> Result<()> {
        writer.interface(self.interface, USB_CLASS_HID, SUBCLASS_NONE, PROTOCOL_NONE)?;
        writer.write(DescriptorType::Hid as u8, &hid_descriptor_body())?;
        writer.endpoint(&self.endpoint)?;
        debug!("wrote joystick configuration descriptors");
        Ok(())
    }

    fn reset(&mut self) {
        debug!("bus reset");
        self.busy = false;
    }

    fn control_in(&mut self, transfer: ControlIn<B>) {
        let request = *transfer.request();

        if request.request_type == RequestType::Standard
            && request.request == Request::GET_DESCRIPTOR
            && self.is_for_interface(&request)
        {
            Self::get_descriptor(transfer);
            return;
        }

        if !self.is_ours(&request) {
            return;
        }

        let control = ControlRequest::new(request_kind(request.request_type), request.request);
        let reply = respond(&control, &self.report);
        let len = reply.len().min(usize::from(request.length));
        if let Err(e) = transfer.accept_with(&reply[..len]) {
            warn!("control reply failed: {}", e);
        }
    }

    fn control_out(&mut self, transfer: ControlOut<B>) {
        let request = *transfer.request();
        if !self.is_ours(&request) {
            return;
        }

        // SET_IDLE, SET_REPORT and friends are acknowledged and ignored
        trace!("control out {=u8:#x} ignored", request.request);
        if let Err(e) = transfer.accept() {
            warn!("control ack failed: {}", e);
        }
    }

    fn endpoint_in_complete(&mut self, addr: EndpointAddress) {
        if addr == self.endpoint.address() {
            self.busy = false;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::usb::test_bus::{test_device, TestBus, TestHost};
    use std::vec::Vec;
    use usb_device::{UsbDirection, UsbError};

    const GET_REPORT: u8 = 0x01;
    const GET_IDLE: u8 = 0x02;
    const SET_IDLE: u8 = 0x0A;

    const CLASS_IN: u8 = 0xA1;
    const CLASS_OUT: u8 = 0x21;
    const STANDARD_IN_INTERFACE: u8 = 0x81;
    const STANDARD_IN_DEVICE: u8 = 0x80;
    const VENDOR_IN_DEVICE: u8 = 0xC0;

    const LEFT_FIRE1: [u8; 3] = [0x00, 0x7F, 0x02];

    #[test]
    fn test_configuration_descriptor_layout() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);

        host.send_setup(STANDARD_IN_DEVICE, Request::GET_DESCRIPTOR, 0x0200, 0, 255);
        device.poll(&mut [&mut class]);

        let config = host.last_control_in().unwrap();
        assert_eq!(config.len(), 34);
        assert_eq!(&config[9..11], &[0x09, 0x04]);
        assert_eq!(config[14], USB_CLASS_HID);
        assert_eq!(&config[18..27], &hid_descriptor());
        assert_eq!(&config[27..34], &[0x07, 0x05, 0x81, 0x03, 0x08, 0x00, 10]);
    }

    #[test]
    fn test_busy_until_our_endpoint_completes() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });

        assert!(!class.is_busy());
        assert_eq!(class.push(&LEFT_FIRE1), Ok(3));
        assert!(class.is_busy());

        class.endpoint_in_complete(EndpointAddress::from_parts(2, UsbDirection::In));
        class.endpoint_in_complete(EndpointAddress::from_parts(1, UsbDirection::Out));
        assert!(class.is_busy());

        device.poll(&mut [&mut class]);
        assert!(class.is_busy());

        assert_eq!(host.collect_interrupt(), Some(LEFT_FIRE1.to_vec()));
        device.poll(&mut [&mut class]);
        assert!(!class.is_busy());
    }

    #[test]
    fn test_reset_clears_busy() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let _device = test_device(&alloc);

        class.push(&LEFT_FIRE1).unwrap();
        assert!(class.is_busy());
        UsbClass::reset(&mut class);
        assert!(!class.is_busy());
    }

    #[test]
    fn test_get_report_before_any_push() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);

        host.send_setup(CLASS_IN, GET_REPORT, 0x0100, 0, 3);
        device.poll(&mut [&mut class]);
        assert_eq!(
            host.last_control_in(),
            Some(HidReport::POWER_ON.as_bytes().to_vec())
        );
    }

    #[test]
    fn test_refused_push_still_updates_get_report() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });

        host.refuse_interrupt(Some(UsbError::WouldBlock));
        assert_eq!(class.push(&LEFT_FIRE1), Err(UsbError::WouldBlock));
        assert!(!class.is_busy());
        assert_eq!(host.collect_interrupt(), None);

        host.send_setup(CLASS_IN, GET_REPORT, 0x0100, 0, 3);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(LEFT_FIRE1.to_vec()));
    }

    #[test]
    fn test_get_report_truncated_to_length() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });
        class.push(&LEFT_FIRE1).unwrap();

        host.send_setup(CLASS_IN, GET_REPORT, 0x0100, 0, 2);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(LEFT_FIRE1[..2].to_vec()));
    }

    #[test]
    fn test_class_request_for_other_interface_stalls() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });

        host.send_setup(CLASS_IN, GET_REPORT, 0x0100, 1, 3);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), None);
        assert!(host.stalled());

        host.send_setup(CLASS_OUT, SET_IDLE, 0, 1, 0);
        device.poll(&mut [&mut class]);
        assert!(host.stalled());
    }

    #[test]
    fn test_other_requests_reply_empty() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });

        host.send_setup(CLASS_IN, GET_IDLE, 0, 0, 1);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(Vec::new()));
        assert!(!host.stalled());

        host.send_setup(VENDOR_IN_DEVICE, 0x42, 0, 0, 64);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(Vec::new()));
        assert!(!host.stalled());
    }

    #[test]
    fn test_set_idle_acknowledged() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);
        host.enumerate(|| {
            device.poll(&mut [&mut class]);
        });

        host.send_setup(CLASS_OUT, SET_IDLE, 0, 0, 0);
        device.poll(&mut [&mut class]);
        assert!(!host.stalled());
        assert_eq!(host.last_control_in(), Some(Vec::new()));
    }

    #[test]
    fn test_interface_descriptors() {
        let host = TestHost::default();
        let alloc = UsbBusAllocator::new(TestBus::new(&host));
        let mut class = JoystickClass::new(&alloc);
        let mut device = test_device(&alloc);

        host.send_setup(STANDARD_IN_INTERFACE, Request::GET_DESCRIPTOR, 0x2200, 0, 255);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(REPORT_DESCRIPTOR.to_vec()));

        host.send_setup(STANDARD_IN_INTERFACE, Request::GET_DESCRIPTOR, 0x2100, 0, 255);
        device.poll(&mut [&mut class]);
        assert_eq!(host.last_control_in(), Some(hid_descriptor().to_vec()));

        host.send_setup(STANDARD_IN_INTERFACE, Request::GET_DESCRIPTOR, 0x2300, 0, 255);
        device.poll(&mut [&mut class]);
        assert!(host.stalled());
    }
}
