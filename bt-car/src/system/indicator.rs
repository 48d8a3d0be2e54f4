//! Command activity indication
//!
//! Dispatch pulses this signal once per handled command; the LED task
//! listens and keeps the onboard LED lit while commands keep arriving.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Signal pulsed on every dispatched command
static COMMAND_ACTIVITY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Records one dispatched command, never blocks
pub fn pulse() {
    COMMAND_ACTIVITY.signal(());
}

/// Waits for the next dispatched command
pub async fn wait() {
    COMMAND_ACTIVITY.wait().await
}
