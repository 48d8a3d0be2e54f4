//! Serial receive pump
//!
//! Pulls bytes off the UART one at a time and posts each into the inbound
//! mailbox. The mailbox holds a single byte, so when the remote sends faster
//! than dispatch keeps up, older unread bytes are replaced. The car acts on
//! the newest command, never on a backlog.

use crate::system::mailbox;
use defmt::warn;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

#[embassy_executor::task]
pub async fn serial_receive(mut rx: BufferedUartRx<'static>) {
    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(0) => continue,
            Ok(_) => mailbox::post(byte[0]),
            // A garbled byte is simply not latched; the next one starts clean.
            Err(e) => warn!("serial receive error: {}", e),
        }
    }
}
