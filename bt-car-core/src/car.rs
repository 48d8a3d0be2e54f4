//! The command interpreter.
//!
//! One [`Car`] owns everything a command can touch: the drivetrain, the
//! transmit half of the serial link and the persistent speed level.
//! [`Car::handle`] consumes one received byte and performs the full dispatch
//! before returning, so commands never overlap and there is nothing to queue.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_io_async::Write;

use crate::command::{self, Command, DriveAction};
use crate::motor::Drivetrain;
use crate::speed::SpeedLevel;

/// Anything a dispatch can fail on: a direction line, a duty channel or the
/// serial link. On the RP2350 the first two are infallible; the split keeps
/// each failure attributable on targets where they are not.
#[derive(Debug)]
pub enum Error<P, D, L> {
    /// A direction line write failed.
    Direction(P),
    /// A duty channel write failed.
    Duty(D),
    /// Echo or acknowledgement could not be sent.
    Link(L),
}

/// Interpreter state: drivetrain, serial sink and speed level.
pub struct Car<P: OutputPin, D: SetDutyCycle, L: Write> {
    drivetrain: Drivetrain<P, D>,
    link: L,
    speed: SpeedLevel,
}

impl<P: OutputPin, D: SetDutyCycle, L: Write> Car<P, D, L> {
    /// Creates the interpreter and drives the outputs to their boot state:
    /// stop pattern on the direction lines, full duty on both channels. The
    /// speed level starts at the maximum, so the first motion command moves
    /// the car without needing a set-speed first.
    pub fn new(
        mut drivetrain: Drivetrain<P, D>,
        link: L,
    ) -> Result<Self, Error<P::Error, D::Error, L::Error>> {
        let speed = SpeedLevel::MAX;
        drivetrain
            .apply(DriveAction::Stop)
            .map_err(Error::Direction)?;
        drivetrain.set_duty(speed.duty()).map_err(Error::Duty)?;
        Ok(Self {
            drivetrain,
            link,
            speed,
        })
    }

    /// Current speed level.
    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    /// Dispatches one received byte and returns the classified command.
    ///
    /// Order on the wire: the echo goes out first (every byte except the
    /// stop byte is echoed unmodified, including unknown bytes), then the
    /// action runs, then its acknowledgement line follows. Stop and the
    /// unknown bytes that fall back to it produce no acknowledgement, and
    /// for the stop byte itself even the echo is suppressed, so stopping
    /// generates no traffic at all.
    pub async fn handle(
        &mut self,
        byte: u8,
    ) -> Result<Command, Error<P::Error, D::Error, L::Error>> {
        if byte != command::STOP_BYTE {
            self.link.write_all(&[byte]).await.map_err(Error::Link)?;
        }

        let cmd = Command::classify(byte);
        match cmd {
            Command::SetSpeed(level) => {
                self.speed = level;
                self.drivetrain
                    .set_duty(level.duty())
                    .map_err(Error::Duty)?;
                self.link
                    .write_all(b"Speed set to ")
                    .await
                    .map_err(Error::Link)?;
                self.link
                    .write_all(level.label().as_bytes())
                    .await
                    .map_err(Error::Link)?;
                self.link.write_all(b"\r\n").await.map_err(Error::Link)?;
            }
            Command::Drive(action) => {
                self.drivetrain.apply(action).map_err(Error::Direction)?;
                if let Some(line) = action.ack_line() {
                    self.link.write_all(line).await.map_err(Error::Link)?;
                }
            }
        }
        Ok(cmd)
    }
}
