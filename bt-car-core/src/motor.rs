//! Dual H-bridge drivetrain.
//!
//! Two DC motors behind an H-bridge driver. Each motor has a forward and a
//! backward direction line plus one PWM channel for speed. Direction and
//! speed are independent: motion commands rewrite the four direction lines,
//! set-speed commands reprogram the two duty channels, and neither touches
//! the other's outputs.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::command::DriveAction;

/// Full scale of the protocol's duty range. Duties are expressed in
/// `0..=255` regardless of the underlying PWM resolution.
pub const DUTY_RANGE: u8 = u8::MAX;

/// Both motors of the car: four direction lines and two duty channels.
pub struct Drivetrain<P: OutputPin, D: SetDutyCycle> {
    left_forward: P,
    left_backward: P,
    right_forward: P,
    right_backward: P,
    left_duty: D,
    right_duty: D,
}

impl<P: OutputPin, D: SetDutyCycle> Drivetrain<P, D> {
    /// Wires up the drivetrain. Nothing is written to the outputs here; the
    /// caller owns the initial pattern and duty.
    pub fn new(
        left_forward: P,
        left_backward: P,
        right_forward: P,
        right_backward: P,
        left_duty: D,
        right_duty: D,
    ) -> Self {
        Self {
            left_forward,
            left_backward,
            right_forward,
            right_backward,
            left_duty,
            right_duty,
        }
    }

    /// Asserts the complete four-line pattern for `action`.
    ///
    /// Every line is written on every call. Patterns replace each other
    /// wholesale rather than toggling individual lines, so exactly one of
    /// the five patterns is on the wires afterwards, regardless of history.
    pub fn apply(&mut self, action: DriveAction) -> Result<(), P::Error> {
        let (lf, lb, rf, rb) = match action {
            DriveAction::Forward => (true, false, true, false),
            DriveAction::Backward => (false, true, false, true),
            // Turns pivot in place: one side forward, the other in reverse.
            DriveAction::Left => (false, true, true, false),
            DriveAction::Right => (true, false, false, true),
            DriveAction::Stop => (false, false, false, false),
        };
        self.left_forward.set_state(lf.into())?;
        self.left_backward.set_state(lb.into())?;
        self.right_forward.set_state(rf.into())?;
        self.right_backward.set_state(rb.into())?;
        Ok(())
    }

    /// Programs both duty channels to `duty` out of [`DUTY_RANGE`].
    pub fn set_duty(&mut self, duty: u8) -> Result<(), D::Error> {
        self.left_duty
            .set_duty_cycle_fraction(duty as u16, DUTY_RANGE as u16)?;
        self.right_duty
            .set_duty_cycle_fraction(duty as u16, DUTY_RANGE as u16)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakePin {
        high: Rc<Cell<bool>>,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high.set(true);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeDutyChannel {
        duty: Rc<Cell<u16>>,
    }

    impl embedded_hal::pwm::ErrorType for FakeDutyChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeDutyChannel {
        fn max_duty_cycle(&self) -> u16 {
            DUTY_RANGE as u16
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty.set(duty);
            Ok(())
        }
    }

    struct Bench {
        lines: [Rc<Cell<bool>>; 4],
        duty_cells: [Rc<Cell<u16>>; 2],
        drivetrain: Drivetrain<FakePin, FakeDutyChannel>,
    }

    impl Bench {
        fn new() -> Self {
            let pins: [FakePin; 4] = Default::default();
            let channels: [FakeDutyChannel; 2] = Default::default();
            let lines = [
                pins[0].high.clone(),
                pins[1].high.clone(),
                pins[2].high.clone(),
                pins[3].high.clone(),
            ];
            let duty_cells = [channels[0].duty.clone(), channels[1].duty.clone()];
            let [lf, lb, rf, rb] = pins;
            let [left, right] = channels;
            Bench {
                lines,
                duty_cells,
                drivetrain: Drivetrain::new(lf, lb, rf, rb, left, right),
            }
        }

        /// (left fwd, left back, right fwd, right back)
        fn pattern(&self) -> [bool; 4] {
            [
                self.lines[0].get(),
                self.lines[1].get(),
                self.lines[2].get(),
                self.lines[3].get(),
            ]
        }

        fn duties(&self) -> (u16, u16) {
            (self.duty_cells[0].get(), self.duty_cells[1].get())
        }
    }

    #[test]
    fn forward_drives_both_sides_forward() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Forward).unwrap();
        assert_eq!(bench.pattern(), [true, false, true, false]);
    }

    #[test]
    fn backward_drives_both_sides_in_reverse() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Backward).unwrap();
        assert_eq!(bench.pattern(), [false, true, false, true]);
    }

    #[test]
    fn left_pivots_right_side_forward() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Left).unwrap();
        assert_eq!(bench.pattern(), [false, true, true, false]);
    }

    #[test]
    fn right_pivots_left_side_forward() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Right).unwrap();
        assert_eq!(bench.pattern(), [true, false, false, true]);
    }

    #[test]
    fn stop_releases_every_line() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Forward).unwrap();
        bench.drivetrain.apply(DriveAction::Stop).unwrap();
        assert_eq!(bench.pattern(), [false, false, false, false]);
    }

    #[test]
    fn patterns_replace_each_other_wholesale() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Forward).unwrap();
        bench.drivetrain.apply(DriveAction::Left).unwrap();
        // No leftover line from the forward pattern.
        assert_eq!(bench.pattern(), [false, true, true, false]);
    }

    #[test]
    fn reapplying_a_pattern_is_idempotent() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Right).unwrap();
        bench.drivetrain.apply(DriveAction::Right).unwrap();
        assert_eq!(bench.pattern(), [true, false, false, true]);
    }

    #[test]
    fn set_duty_programs_both_channels() {
        let mut bench = Bench::new();
        bench.drivetrain.set_duty(127).unwrap();
        assert_eq!(bench.duties(), (127, 127));
    }

    #[test]
    fn duty_and_direction_do_not_interfere() {
        let mut bench = Bench::new();
        bench.drivetrain.apply(DriveAction::Forward).unwrap();
        bench.drivetrain.set_duty(0).unwrap();
        // Zero duty does not release the direction lines.
        assert_eq!(bench.pattern(), [true, false, true, false]);

        bench.drivetrain.set_duty(204).unwrap();
        bench.drivetrain.apply(DriveAction::Stop).unwrap();
        // Stopping does not reprogram the duty channels.
        assert_eq!(bench.duties(), (204, 204));
    }
}
