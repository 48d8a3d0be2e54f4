//! Firmware tasks

pub mod interpret;
pub mod led_indicate;
pub mod serial_receive;
