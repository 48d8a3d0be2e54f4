//! Speed levels and their PWM duty mapping.
//!
//! The remote expresses speed as eleven discrete levels: the digits `'0'`
//! through `'9'` plus a dedicated byte for level 10. The level is persistent
//! state that outlives any single command; only a set-speed command changes
//! it.

use defmt::Format;

/// Discrete speed level in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Format)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Slowest level. Motors get zero duty but keep their direction lines.
    pub const MIN: SpeedLevel = SpeedLevel(0);
    /// Fastest level, also the startup default.
    pub const MAX: SpeedLevel = SpeedLevel(10);

    /// Creates a level, saturating anything above 10.
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX.0 {
            Self::MAX
        } else {
            SpeedLevel(level)
        }
    }

    /// Numeric level value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Duty cycle on the 8-bit scale both motor channels run on.
    ///
    /// Plain integer division: levels map linearly onto `0..=255` and
    /// fractions are truncated, so level 5 is 127, not 128. The truncation
    /// is observable over the wire and kept as-is.
    pub const fn duty(self) -> u8 {
        ((self.0 as u16 * 255) / 10) as u8
    }

    /// Decimal text of the level, for acknowledgement lines.
    pub const fn label(self) -> &'static str {
        const LABELS: [&str; 11] = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
        ];
        LABELS[self.0 as usize]
    }
}
