//! Command byte classification.
//!
//! The remote sends one byte per command. The table is fixed and
//! case-sensitive:
//!
//! | byte          | action               |
//! |---------------|----------------------|
//! | `'0'`..`'9'`  | set speed level 0..9 |
//! | `'q'`         | set speed level 10   |
//! | `'F'`         | drive forward        |
//! | `'B'`         | drive backward       |
//! | `'L'`         | turn left            |
//! | `'R'`         | turn right           |
//! | `'S'`         | stop                 |
//! | anything else | stop                 |
//!
//! Unknown bytes deliberately resolve to [`DriveAction::Stop`]: a garbled
//! link halts the car instead of leaving it running on a stale command.

use defmt::Format;

use crate::speed::SpeedLevel;

/// The stop byte. Stop is the one command that is never echoed, so dispatch
/// needs the raw byte value outside the classification table.
pub const STOP_BYTE: u8 = b'S';

/// Byte selecting speed level 10, which has no single-digit encoding.
const FULL_SPEED_BYTE: u8 = b'q';

/// One received command, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Command {
    /// Change the persistent speed level. Direction lines stay untouched.
    SetSpeed(SpeedLevel),
    /// Assert a drivetrain direction pattern. Duty stays untouched.
    Drive(DriveAction),
}

/// Direction patterns the drivetrain can assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum DriveAction {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

impl Command {
    /// Classifies one received byte.
    pub fn classify(byte: u8) -> Command {
        match byte {
            digit @ b'0'..=b'9' => Command::SetSpeed(SpeedLevel::new(digit - b'0')),
            FULL_SPEED_BYTE => Command::SetSpeed(SpeedLevel::MAX),
            b'F' => Command::Drive(DriveAction::Forward),
            b'B' => Command::Drive(DriveAction::Backward),
            b'L' => Command::Drive(DriveAction::Left),
            b'R' => Command::Drive(DriveAction::Right),
            STOP_BYTE => Command::Drive(DriveAction::Stop),
            _ => Command::Drive(DriveAction::Stop),
        }
    }
}

impl DriveAction {
    /// Acknowledgement line sent after the action, if any. Stop is silent.
    pub const fn ack_line(self) -> Option<&'static [u8]> {
        match self {
            DriveAction::Forward => Some(b"forward\r\n"),
            DriveAction::Backward => Some(b"backward\r\n"),
            DriveAction::Left => Some(b"left\r\n"),
            DriveAction::Right => Some(b"right\r\n"),
            DriveAction::Stop => None,
        }
    }
}
