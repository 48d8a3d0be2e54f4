//! Single-slot hand-off between the serial receive path and the interpreter.
//!
//! The receive side posts each incoming byte; the interpreter takes them one
//! at a time. The slot holds at most one unread byte and posting over an
//! unconsumed byte replaces it silently: last write wins. That is the whole
//! back-pressure story of the protocol. There is no queue, and a remote that
//! outruns dispatch loses the older commands, never the newest.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// One-byte mailbox with last-write-wins semantics.
pub struct Mailbox {
    slot: Signal<CriticalSectionRawMutex, u8>,
}

impl Mailbox {
    /// Creates an empty mailbox. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Posts one byte, replacing any unread one. Never blocks, so the
    /// receive path may call it from interrupt context.
    pub fn post(&self, byte: u8) {
        self.slot.signal(byte);
    }

    /// Waits for an unread byte, returns it and clears the slot.
    ///
    /// The take is one critical section: a concurrent `post` lands either
    /// before it (and is the byte returned) or after it (and stays latched
    /// for the next take). A byte is never duplicated or torn.
    pub async fn take(&self) -> u8 {
        self.slot.wait().await
    }

    /// Whether an unread byte is latched right now.
    pub fn has_byte(&self) -> bool {
        self.slot.signaled()
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}
