//! Control-transfer request decoding and replies.
//!
//! Only HID `GET_REPORT` gets data back: the last report handed to the
//! interrupt endpoint. Every other class or vendor request is accepted
//! with a zero-length reply.

use crate::types::HidReport;

/// Request type field of `bmRequestType` (bits 5-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestKind {
    Standard,
    Class,
    Vendor,
    Reserved,
}

impl RequestKind {
    #[must_use]
    pub const fn from_bm_request_type(bm_request_type: u8) -> Self {
        match (bm_request_type >> 5) & 0x03 {
            0 => Self::Standard,
            1 => Self::Class,
            2 => Self::Vendor,
            _ => Self::Reserved,
        }
    }
}

/// HID class request codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HidRequest {
    GetReport = 0x01,
    GetIdle = 0x02,
    GetProtocol = 0x03,
    SetReport = 0x09,
    SetIdle = 0x0A,
    SetProtocol = 0x0B,
}

impl TryFrom<u8> for HidRequest {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::GetReport),
            0x02 => Ok(Self::GetIdle),
            0x03 => Ok(Self::GetProtocol),
            0x09 => Ok(Self::SetReport),
            0x0A => Ok(Self::SetIdle),
            0x0B => Ok(Self::SetProtocol),
            other => Err(other),
        }
    }
}

/// A decoded setup packet, reduced to the fields the reply depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlRequest {
    pub kind: RequestKind,
    pub request: u8,
}

impl ControlRequest {
    #[must_use]
    pub const fn new(kind: RequestKind, request: u8) -> Self {
        Self { kind, request }
    }

    /// Decode from the first two bytes of a setup packet.
    #[must_use]
    pub const fn from_setup(bm_request_type: u8, b_request: u8) -> Self {
        Self::new(RequestKind::from_bm_request_type(bm_request_type), b_request)
    }

    /// The HID request code, if this is a known class request.
    #[must_use]
    pub fn hid_request(&self) -> Option<HidRequest> {
        match self.kind {
            RequestKind::Class => HidRequest::try_from(self.request).ok(),
            _ => None,
        }
    }
}

/// Reply data for a class or vendor request.
///
/// Returns the current report for `GET_REPORT`, an empty slice otherwise.
/// Requests that carry data towards the device are acknowledged and their
/// payload ignored.
#[must_use]
pub fn respond<'a>(request: &ControlRequest, report: &'a [u8; HidReport::SIZE]) -> &'a [u8] {
    match request.hid_request() {
        Some(HidRequest::GetReport) => {
            trace!("GET_REPORT");
            report
        }
        _ => {
            debug!("control request {=u8:#x} answered with no data", request.request);
            &[]
        }
    }
}
