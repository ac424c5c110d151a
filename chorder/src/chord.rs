//! Chords
//!
//! A chord is the set of buttons held at one instant.  The seven buttons are
//! packed into the low seven bits, from the far thumb button down to the
//! pinky:
//!
//! ```text
//!    F  C  N     I  M  R  P
//!   40 20 10    08 04 02 01
//! ```
//!
//! Chords print in the same notation, with a dash for each button that is
//! not pressed, so `0x2d` is `-C- IM-P`.

use core::fmt;
use core::str::FromStr;

/// Number of physical buttons.
pub const NBUTTONS: usize = 7;

/// Number of distinct chords, including the empty one.
pub const NCHORDS: usize = 1 << NBUTTONS;

/// The physical buttons, thumbs first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    FarThumb,
    CenterThumb,
    NearThumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Button {
    pub const ALL: [Button; NBUTTONS] = [
        Button::FarThumb,
        Button::CenterThumb,
        Button::NearThumb,
        Button::Index,
        Button::Middle,
        Button::Ring,
        Button::Pinky,
    ];

    /// The bit for this button within a chord.
    pub const fn bit(self) -> u8 {
        match self {
            Button::FarThumb => 0x40,
            Button::CenterThumb => 0x20,
            Button::NearThumb => 0x10,
            Button::Index => 0x08,
            Button::Middle => 0x04,
            Button::Ring => 0x02,
            Button::Pinky => 0x01,
        }
    }

    /// The letter used for this button in chord patterns.
    pub const fn letter(self) -> char {
        match self {
            Button::FarThumb => 'F',
            Button::CenterThumb => 'C',
            Button::NearThumb => 'N',
            Button::Index => 'I',
            Button::Middle => 'M',
            Button::Ring => 'R',
            Button::Pinky => 'P',
        }
    }
}

/// A debounced set of pressed buttons.  Always below [`NCHORDS`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chord(u8);

impl Chord {
    /// No buttons pressed.  This is the released state.
    pub const EMPTY: Chord = Chord(0);

    const MASK: u8 = (NCHORDS - 1) as u8;

    /// Build a chord from a bit pattern, if it only uses the seven button
    /// bits.
    pub const fn new(bits: u8) -> Option<Chord> {
        if bits & !Self::MASK == 0 {
            Some(Chord(bits))
        } else {
            None
        }
    }

    /// Build a chord from a raw sample, ignoring any bits past the buttons.
    pub const fn from_raw(raw: u8) -> Chord {
        Chord(raw & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Index of this chord in a chord table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Every chord, in table order.
    pub fn all() -> impl Iterator<Item = Chord> {
        (0..NCHORDS as u8).map(Chord)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, button) in Button::ALL.iter().enumerate() {
            if i == 3 {
                write!(f, " ")?;
            }
            if self.is_pressed(*button) {
                write!(f, "{}", button.letter())?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}

/// A chord could not be parsed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParseChordError;

impl fmt::Display for ParseChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid chord, expected a pattern like \"-C- IM-P\" or a hex value")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseChordError {}

/// Chords parse either as a pattern (`-C- IM-P`, the space is optional) or
/// as a hex value with a `0x` prefix.
impl FromStr for Chord {
    type Err = ParseChordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            let bits = u8::from_str_radix(hex, 16).map_err(|_| ParseChordError)?;
            return Chord::new(bits).ok_or(ParseChordError);
        }

        let mut bits = 0u8;
        let mut count = 0;
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            let button = Button::ALL.get(count).ok_or(ParseChordError)?;
            if ch == button.letter() || ch == button.letter().to_ascii_lowercase() {
                bits |= button.bit();
            } else if ch != '-' {
                return Err(ParseChordError);
            }
            count += 1;
        }
        if count != NBUTTONS {
            return Err(ParseChordError);
        }
        Ok(Chord(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_masks_drop_extra_bits() {
        assert_eq!(Chord::from_raw(0xff).bits(), 0x7f);
        assert_eq!(Chord::new(0x80), None);
        assert_eq!(Chord::new(0x7f).map(|c| c.index()), Some(127));
    }

    #[test]
    fn patterns() {
        assert_eq!(Chord::from_raw(0x2d).to_string(), "-C- IM-P");
        assert_eq!(Chord::EMPTY.to_string(), "--- ----");
        assert_eq!(Chord::from_raw(0x7f).to_string(), "FCN IMRP");

        assert_eq!("-C- IM-P".parse(), Ok(Chord::from_raw(0x2d)));
        assert_eq!("fcnimrp".parse(), Ok(Chord::from_raw(0x7f)));
        assert_eq!("0x30".parse(), Ok(Chord::from_raw(0x30)));
        assert_eq!("0x80".parse::<Chord>(), Err(ParseChordError));
        assert_eq!("-C- IM-".parse::<Chord>(), Err(ParseChordError));
        assert_eq!("C-- ----".parse::<Chord>(), Err(ParseChordError));
    }

    #[test]
    fn every_chord_round_trips_through_its_pattern() {
        for chord in Chord::all() {
            assert_eq!(chord.to_string().parse(), Ok(chord));
        }
        assert_eq!(Chord::all().count(), NCHORDS);
    }
}
