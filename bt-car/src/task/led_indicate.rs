//! Status LED control
//!
//! The onboard LED doubles as a link activity indicator: it lights on the
//! first dispatched command and stays lit while commands keep arriving,
//! going dark once the link has been quiet for a moment.

use crate::system::indicator;
use crate::system::resources::StatusLedResources;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

/// How long the LED stays lit after the last command
const ACTIVITY_HOLD: Duration = Duration::from_millis(150);

/// Activity LED task
#[embassy_executor::task]
pub async fn led_indicate(r: StatusLedResources) {
    let mut led = Output::new(r.led_pin, Level::Low);

    loop {
        indicator::wait().await;
        led.set_high();

        // Keep extending the lit window while commands keep coming.
        loop {
            match select(Timer::after(ACTIVITY_HOLD), indicator::wait()).await {
                Either::First(_) => break,
                Either::Second(_) => continue,
            }
        }

        led.set_low();
    }
}
