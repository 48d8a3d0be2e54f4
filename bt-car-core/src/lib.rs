//! Control logic for the bt-car firmware.
//!
//! Everything in this crate is hardware-independent: the command table, the
//! speed bookkeeping, the dual H-bridge drivetrain (generic over
//! `embedded-hal` pins and PWM channels) and the command interpreter itself
//! (generic over an async serial sink). The firmware crate binds these to
//! RP2350 peripherals; the test suite binds them to mocks and runs on the
//! host.

#![cfg_attr(not(test), no_std)]

pub mod car;
pub mod command;
pub mod mailbox;
pub mod motor;
pub mod speed;

pub use car::Car;
pub use command::{Command, DriveAction};
pub use mailbox::Mailbox;
pub use motor::Drivetrain;
pub use speed::SpeedLevel;
