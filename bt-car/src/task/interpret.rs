//! Command interpreter task
//!
//! Owns the drivetrain and the transmit half of the serial link. Takes one
//! byte at a time from the inbound mailbox and runs the full dispatch for
//! it: echo, classify, actuate, acknowledge.

use crate::system::resources::MotorDriverResources;
use crate::system::{indicator, mailbox};
use bt_car_core::{Car, Drivetrain};
use defmt::info;
use embassy_rp::gpio;
use embassy_rp::pwm;
use embassy_rp::uart::BufferedUartTx;

#[embassy_executor::task]
pub async fn interpret(r: MotorDriverResources, tx: BufferedUartTx<'static>) {
    // Configure PWM for motor control
    // We use 10kHz frequency as cheaper DC motors often work better at lower frequencies
    let desired_freq_hz = 10_000;
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / desired_freq_hz) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (desired_freq_hz * divider as u32)) as u16 - 1;

    // Configure PWM
    let mut pwm_config = pwm::Config::default();
    pwm_config.divider = divider.into();
    pwm_config.top = period;

    // Left motor: direction lines and PWM channel
    let left_forward = gpio::Output::new(r.left_forward_pin, gpio::Level::Low);
    let left_backward = gpio::Output::new(r.left_backward_pin, gpio::Level::Low);
    let left_pwm = pwm::Pwm::new_output_a(r.left_slice, r.left_pwm_pin, pwm_config.clone());

    // Right motor: direction lines and PWM channel
    let right_forward = gpio::Output::new(r.right_forward_pin, gpio::Level::Low);
    let right_backward = gpio::Output::new(r.right_backward_pin, gpio::Level::Low);
    let right_pwm = pwm::Pwm::new_output_b(r.right_slice, r.right_pwm_pin, pwm_config.clone());

    let drivetrain = Drivetrain::new(
        left_forward,
        left_backward,
        right_forward,
        right_backward,
        left_pwm,
        right_pwm,
    );

    // Boots stopped with the speed level at maximum, so the first motion
    // byte moves the car without a set-speed first.
    let mut car = Car::new(drivetrain, tx).unwrap();
    info!("interpreter ready, speed level {}", car.speed());

    loop {
        let byte = mailbox::take().await;
        let command = car.handle(byte).await.unwrap();
        indicator::pulse();
        info!("dispatched {}", command);
    }
}
