//! Car firmware entry point
//!
//! Brings up the serial link and spawns the control tasks.

#![no_std]
#![no_main]

use crate::task::{
    interpret::interpret, led_indicate::led_indicate, serial_receive::serial_receive,
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::uart::{self, BufferedUart};
use static_cell::StaticCell;
use system::resources::{
    AssignedResources, Irqs, MotorDriverResources, SerialResources, StatusLedResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Symbol rate of the Bluetooth transceiver link (HC-05/06 factory default)
const BAUD_RATE: u32 = 9600;

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task.
    let r = split_resources!(p);

    // Bring up the serial link once, here, so the receive and transmit
    // halves can go to different tasks: 8 data bits, no parity, 1 stop bit.
    let mut config = uart::Config::default();
    config.baudrate = BAUD_RATE;
    config.data_bits = uart::DataBits::DataBits8;
    config.stop_bits = uart::StopBits::STOP1;
    config.parity = uart::Parity::ParityNone;

    // The transmit buffer must cover one echo plus the longest
    // acknowledgement line; the receive side only ever hoards bytes when
    // dispatch lags, and then we want old bytes dropped, not buffered.
    static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
    static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
    let serial = BufferedUart::new(
        r.serial.uart,
        r.serial.tx_pin,
        r.serial.rx_pin,
        Irqs,
        &mut TX_BUF.init([0; 64])[..],
        &mut RX_BUF.init([0; 16])[..],
        config,
    );
    let (tx, rx) = serial.split();

    info!("bt-car up, listening at {} baud", BAUD_RATE);

    spawner.spawn(serial_receive(rx)).unwrap();
    spawner.spawn(interpret(r.motor_driver, tx)).unwrap();
    spawner.spawn(led_indicate(r.status_led)).unwrap();
}
