//! HID descriptors and class constants.

/// USB interface class code for HID.
pub const USB_CLASS_HID: u8 = 0x03;

/// HID specification release, 1.11 in BCD.
pub const HID_SPEC_VERSION: u16 = 0x0111;

pub const COUNTRY_CODE_NOT_SUPPORTED: u8 = 0x00;

/// Length of [`REPORT_DESCRIPTOR`], as advertised in the HID descriptor.
pub const REPORT_DESCRIPTOR_LEN: usize = 43;

/// Joystick report descriptor.
///
/// Declares two 8-bit axes (X, Y; logical range 0-255) followed by eight
/// 1-bit buttons, matching [`HidReport`](crate::HidReport). Hosts bind drivers by these exact
/// bytes, so they must not change.
#[rustfmt::skip]
pub static REPORT_DESCRIPTOR: [u8; REPORT_DESCRIPTOR_LEN] = [
    0x05, 0x01,       // Usage Page (Generic Desktop)
    0x09, 0x04,       // Usage (Joystick)
    0xA1, 0x01,       // Collection (Application)
    0xA1, 0x02,       //   Collection (Physical)
    0x05, 0x01,       //     Usage Page (Generic Desktop)
    0x09, 0x30,       //     Usage (X)
    0x09, 0x31,       //     Usage (Y)
    0x15, 0x00,       //     Logical Minimum (0)
    0x26, 0xFF, 0x00, //     Logical Maximum (255)
    0x75, 0x08,       //     Report Size (8)
    0x95, 0x02,       //     Report Count (2)
    0x81, 0x02,       //     Input (Data, Variable, Absolute)
    //
    0x05, 0x09,       //     Usage Page (Button)
    0x19, 0x01,       //     Usage Minimum (Button 1)
    0x29, 0x08,       //     Usage Maximum (Button 8)
    0x15, 0x00,       //     Logical Minimum (0)
    0x25, 0x01,       //     Logical Maximum (1)
    0x75, 0x01,       //     Report Size (1)
    0x95, 0x08,       //     Report Count (8)
    0x81, 0x02,       //     Input (Data, Variable, Absolute)
    0xC0,             //   End Collection
    0xC0,             // End Collection
];

/// Class-specific descriptor types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DescriptorType {
    Hid = 0x21,
    Report = 0x22,
}

impl TryFrom<u8> for DescriptorType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x21 => Ok(Self::Hid),
            0x22 => Ok(Self::Report),
            other => Err(other),
        }
    }
}

/// Body of the HID class descriptor, without the length and type prefix.
///
/// This is what goes after the interface descriptor in the configuration.
#[must_use]
pub const fn hid_descriptor_body() -> [u8; 7] {
    let version = HID_SPEC_VERSION.to_le_bytes();
    let len = (REPORT_DESCRIPTOR_LEN as u16).to_le_bytes();
    [
        version[0],
        version[1],
        COUNTRY_CODE_NOT_SUPPORTED,
        1, // bNumDescriptors
        DescriptorType::Report as u8,
        len[0],
        len[1],
    ]
}

/// Complete HID class descriptor, as returned for GET_DESCRIPTOR(HID).
#[must_use]
pub const fn hid_descriptor() -> [u8; 9] {
    let body = hid_descriptor_body();
    [
        9,
        DescriptorType::Hid as u8,
        body[0],
        body[1],
        body[2],
        body[3],
        body[4],
        body[5],
        body[6],
    ]
}
