//! Inbound command mailbox
//!
//! Hands received bytes from the serial receive pump to the interpreter.
//! One static slot, last write wins: an unconsumed byte is replaced by the
//! next arrival, so the interpreter always acts on the newest command.

use bt_car_core::Mailbox;

/// The one mailbox between the receive pump and the interpreter
static INBOX: Mailbox = Mailbox::new();

/// Posts one received byte, replacing any unread one
pub fn post(byte: u8) {
    INBOX.post(byte);
}

/// Waits for the next unread byte
pub async fn take() -> u8 {
    INBOX.take().await
}
