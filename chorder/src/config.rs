//! Timing and retry settings.

/// Tunables for the control loop.  Times are in milliseconds and are turned
/// into polling ticks by rounding up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Interval between polls of the buttons.
    pub tick_ms: u32,
    /// How long the buttons must be unchanged before a chord is accepted.
    pub debounce_ms: u32,
    /// A chord held this long is reported as stuck.
    pub long_hold_ms: u32,
    /// How many times a busy HID endpoint is retried before giving up.
    pub retry_limit: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_ms: 10,
            debounce_ms: 30,
            long_hold_ms: 2000,
            retry_limit: 8,
        }
    }
}

impl Config {
    pub fn debounce_ticks(&self) -> u32 {
        self.to_ticks(self.debounce_ms)
    }

    pub fn long_hold_ticks(&self) -> u32 {
        self.to_ticks(self.long_hold_ms)
    }

    fn to_ticks(&self, ms: u32) -> u32 {
        if self.tick_ms == 0 {
            return ms;
        }
        ms.div_ceil(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_round_up() {
        let config = Config { tick_ms: 10, debounce_ms: 25, long_hold_ms: 2000, retry_limit: 1 };
        assert_eq!(config.debounce_ticks(), 3);
        assert_eq!(config.long_hold_ticks(), 200);

        let config = Config { debounce_ms: 0, ..Config::default() };
        assert_eq!(config.debounce_ticks(), 0);
    }
}
