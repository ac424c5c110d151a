//! Chord sampling.
//!
//! Buttons are read once per tick.  Any change in the raw mask restarts the
//! debounce count, and the mask is only trusted once it has held steady for
//! the whole debounce window.  Fingers rarely land at exactly the same time,
//! so this also gives a chord time to settle before it is acted on.
//!
//! A chord fires once per press.  After firing, nothing else fires until the
//! buttons have been seen steadily released.  Holding a chord does not
//! repeat it; a chord held past the long-hold threshold is reported once as
//! stuck, and still waits for the release.

use crate::log::{debug, warn};
use crate::{ButtonSampler, Chord, Config};

pub struct ChordSampler<B> {
    buttons: B,

    // The most recently read mask.
    candidate: Chord,

    // How many ticks the candidate has been unchanged.
    stable: u32,

    // Ticks the candidate must be unchanged before it is trusted.
    debounce: u32,

    // Set once the buttons are released, cleared when a chord fires.
    armed: bool,

    // Ticks since the last chord fired, while it has not been released.
    held: u32,

    // Ticks after which a held chord is reported as stuck.
    long_hold: u32,

    // Has the current hold been reported as stuck.
    stuck: bool,
}

impl<B: ButtonSampler> ChordSampler<B> {
    pub fn new(buttons: B, config: &Config) -> Self {
        ChordSampler {
            buttons,
            candidate: Chord::EMPTY,
            stable: 0,
            debounce: config.debounce_ticks(),
            armed: true,
            held: 0,
            long_hold: config.long_hold_ticks(),
            stuck: false,
        }
    }

    /// Poll the buttons once.  Returns the chord when one fires on this
    /// tick.
    pub fn sample(&mut self) -> Option<Chord> {
        let raw = Chord::from_raw(self.buttons.read_raw());
        if raw != self.candidate {
            self.candidate = raw;
            self.stable = 0;
        } else {
            self.stable = self.stable.saturating_add(1);
        }

        if !self.armed {
            self.held = self.held.saturating_add(1);
            if !self.stuck && self.held >= self.long_hold {
                warn!("Chord held past long-hold: {:?}", self.candidate);
                self.stuck = true;
            }
        }

        if self.stable < self.debounce {
            return None;
        }

        if self.candidate.is_empty() {
            if !self.armed {
                debug!("Chord released");
                self.armed = true;
                self.held = 0;
                self.stuck = false;
            }
            return None;
        }

        if self.armed {
            self.armed = false;
            debug!("Chord: {:?}", self.candidate);
            return Some(self.candidate);
        }

        None
    }

    /// Is the sampler waiting for the buttons to be released.
    pub fn is_holding(&self) -> bool {
        !self.armed
    }

    /// Has the chord being held been reported as stuck.
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }
}
