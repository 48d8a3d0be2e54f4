//! Hardware Resource Management
//!
//! Manages and allocates hardware resources (pins, peripherals) to the
//! firmware tasks. Each task owns its group exclusively, so hardware access
//! never conflicts.
//!
//! # Resource Groups
//! - Serial Link: UART0 wired to the Bluetooth transceiver
//! - Motor Driver: dual H-bridge direction pins and PWM channels
//! - Status LED: onboard LED used as the command-activity indicator

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{self, UART0};
use embassy_rp::uart::BufferedInterruptHandler;

assign_resources! {
    /// UART0 wired to the Bluetooth serial transceiver (HC-05/06 class)
    serial: SerialResources {
        uart: UART0,
        tx_pin: PIN_0,
        rx_pin: PIN_1,
    },
    /// Dual H-bridge motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        // Left motor
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // Right motor
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
    /// Onboard LED, pulsed on command activity
    status_led: StatusLedResources {
        led_pin: PIN_25,
    },
}

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});
