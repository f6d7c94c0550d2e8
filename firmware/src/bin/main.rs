#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use joystick_adapter::config::{
    DEVICE_RELEASE, MANUFACTURER, MAX_POWER_MA, PIN_MAP, PRODUCT, SERIAL_NUMBER, USB_PID, USB_VID,
    XTAL_FREQ_HZ,
};
use joystick_adapter::{GpioPort, JoystickBridge, JoystickClass, LinePin, PortReader, UsbJoystick};
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::gpio::Pins;
use rp2040_hal::pac;
use rp2040_hal::usb::UsbBus;
use rp2040_hal::{Sio, Watchdog};
use static_cell::StaticCell;
use usb_device::bus::UsbBusAllocator;
use usb_device::device::{StringDescriptors, UsbDeviceBuilder, UsbVidPid};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Second-stage bootloader for the W25Q080 flash on Pico-compatible boards.
#[link_section = ".boot2"]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// USB bus allocator; the device and class borrow it for the program's lifetime.
static USB_BUS: StaticCell<UsbBusAllocator<UsbBus>> = StaticCell::new();

#[cfg(feature = "board-gesture")]
fn line_pins(pins: Pins) -> [LinePin; 7] {
    [
        pins.gpio4.into_pull_up_input().into_dyn_pin(), // LEFT
        pins.gpio3.into_pull_up_input().into_dyn_pin(), // RIGHT
        pins.gpio6.into_pull_up_input().into_dyn_pin(), // UP
        pins.gpio5.into_pull_up_input().into_dyn_pin(), // DOWN
        pins.gpio7.into_pull_up_input().into_dyn_pin(), // FIRE1
        pins.gpio2.into_pull_up_input().into_dyn_pin(), // FIRE2
        pins.gpio8.into_pull_up_input().into_dyn_pin(), // START
    ]
}

#[cfg(feature = "board-dedicated-start")]
fn line_pins(pins: Pins) -> [LinePin; 7] {
    [
        pins.gpio10.into_pull_up_input().into_dyn_pin(), // LEFT
        pins.gpio11.into_pull_up_input().into_dyn_pin(), // RIGHT
        pins.gpio5.into_pull_up_input().into_dyn_pin(),  // UP
        pins.gpio7.into_pull_up_input().into_dyn_pin(),  // DOWN
        pins.gpio6.into_pull_up_input().into_dyn_pin(),  // FIRE1
        pins.gpio12.into_pull_up_input().into_dyn_pin(), // FIRE2
        pins.gpio4.into_pull_up_input().into_dyn_pin(),  // START
    ]
}

#[rp2040_hal::entry]
fn main() -> ! {
    info!("Joystick adapter starting...");

    let mut pac = defmt::unwrap!(pac::Peripherals::take());
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = defmt::unwrap!(init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok());

    // --- GPIO Setup ---
    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let port = defmt::unwrap!(GpioPort::new(&PIN_MAP, line_pins(pins)));

    // --- USB Setup ---
    let usb_bus: &'static UsbBusAllocator<UsbBus> = USB_BUS.init(UsbBusAllocator::new(UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    )));

    let class = JoystickClass::new(usb_bus);

    // `BuilderError` implements `Debug` but not `defmt::Format`
    let device = UsbDeviceBuilder::new(usb_bus, UsbVidPid(USB_VID, USB_PID))
        .strings(&[StringDescriptors::default()
            .manufacturer(MANUFACTURER)
            .product(PRODUCT)
            .serial_number(SERIAL_NUMBER)])
        .unwrap()
        .max_power(MAX_POWER_MA)
        .unwrap()
        .device_class(0) // per interface
        .device_release(DEVICE_RELEASE)
        .build();

    let usb = UsbJoystick::new(device, class);

    let mut bridge = JoystickBridge::new(port, usb, PortReader::new(PIN_MAP));

    info!("Joystick adapter initialized, board {}", PIN_MAP);
    bridge.run()
}
