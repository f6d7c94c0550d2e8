//! Input source trait.

/// Something that can snapshot the joystick's input port.
///
/// Each bit of the returned word is the level of one pin, set when the pin
/// reads high. Lines are active low, so an idle port reads all ones on
/// every mapped bit. Reading must not block.
pub trait PortSource {
    fn read_port(&mut self) -> u32;
}

impl<T: PortSource + ?Sized> PortSource for &mut T {
    fn read_port(&mut self) -> u32 {
        (**self).read_port()
    }
}
