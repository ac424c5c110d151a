//! Actions bound to chords.
//!
//! Every entry in a chord table is one of these.  Besides the sum type
//! itself, this module decodes the older single byte encoding, where each
//! kind of action lives in its own numeric range:
//!
//! ```text
//! 0x00        unused chord
//! 0x01..0x03  HID error codes (treated as unused)
//! 0x04..0x64  HID keyboard usages
//! 0x65..0x6c  modifiers: lctrl lshift lalt lgui rctrl rshift ralt rgui
//! 0x6d..0x72  modes: reset, master reset, num, num lock, func, func lock
//! 0x73..0x74  combined: num+shift, ctrl+alt
//! 0x75..0x7a  media: play/pause, next, previous, stop, vol up, vol down
//! 0x7b..0x8d  macros
//! 0x8e..0x8f  battery level, factory reset
//! ```

use core::fmt;

use usbd_human_interface_device::page::{Consumer, Keyboard};

use crate::log::warn;
use crate::macros::{self, Macro};
use crate::{Layer, Mods, Signal};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing is bound to this chord.
    None,
    /// An ordinary key.
    Key(Keyboard),
    /// Toggle a one-shot modifier for the next key.
    Modifier(Mods),
    /// Change which table the next chord is looked up in.
    Mode(ModeChange),
    /// Switch layer and add modifiers at the same time.
    Multi(Combo),
    /// A consumer control key.
    Media(Consumer),
    /// A sequence of keystrokes.
    Macro(&'static Macro),
    /// Something for the BLE side of the device to handle.
    System(Signal),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeChange {
    /// Back to the default layer, with all locks released.
    Reset,
    /// As reset, but also asks for a device reset.
    MasterReset,
    /// Use `target` for the next chord, or toggle a lock on it.
    Switch { target: Layer, lock: bool },
}

/// Two effects at once: an optional one-shot layer and one-shot modifiers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combo {
    pub layer: Option<Layer>,
    pub mods: Mods,
}

impl Combo {
    /// Numbers and symbols, shifted.
    pub const NUM_SHIFT: Combo = Combo { layer: Some(Layer::NumSym), mods: Mods::LSHIFT };
    /// Control and alt together.
    pub const CTRL_ALT: Combo = Combo { layer: None, mods: Mods::LCTRL.union(Mods::LALT) };
}

// Start of each range in the byte encoding.
const FIRST_KEY: u8 = 0x04;
const LAST_KEY: u8 = 0x64;
const FIRST_MOD: u8 = 0x65;
const FIRST_MODE: u8 = 0x6d;
const FIRST_MULTI: u8 = 0x73;
const FIRST_MEDIA: u8 = 0x75;
const FIRST_MACRO: u8 = 0x7b;
const FIRST_SYSTEM: u8 = 0x8e;
const END: u8 = 0x90;

const MODES: [ModeChange; 6] = [
    ModeChange::Reset,
    ModeChange::MasterReset,
    ModeChange::Switch { target: Layer::NumSym, lock: false },
    ModeChange::Switch { target: Layer::NumSym, lock: true },
    ModeChange::Switch { target: Layer::Function, lock: false },
    ModeChange::Switch { target: Layer::Function, lock: true },
];

const MULTIS: [Combo; 2] = [Combo::NUM_SHIFT, Combo::CTRL_ALT];

const MEDIA: [Consumer; 6] = [
    Consumer::PlayPause,
    Consumer::ScanNextTrack,
    Consumer::ScanPreviousTrack,
    Consumer::Stop,
    Consumer::VolumeIncrement,
    Consumer::VolumeDecrement,
];

static MACROS: [&Macro; 19] = [
    &macros::TRIPLE_ZERO,
    &macros::DOUBLE_ZERO,
    &macros::QUOTES,
    &macros::PARENS,
    &macros::DOLLAR,
    &macros::PERCENT,
    &macros::AMPERSAND,
    &macros::ASTERISK,
    &macros::QUESTION,
    &macros::PLUS,
    &macros::OPEN_PAREN,
    &macros::CLOSE_PAREN,
    &macros::OPEN_CURLY,
    &macros::CLOSE_CURLY,
    &macros::ANDROID_SEARCH,
    &macros::ANDROID_HOME,
    &macros::ANDROID_MENU,
    &macros::ANDROID_BACK,
    &macros::ANDROID_DPAD_CENTER,
];

const SYSTEM: [Signal; 2] = [Signal::BatteryLevel, Signal::FactoryReset];

impl Action {
    /// Decode an action from the byte encoding.  Codes that don't mean
    /// anything are logged and treated as unused.
    pub fn from_code(code: u8) -> Action {
        match code {
            0x00..=0x03 => Action::None,
            FIRST_KEY..=LAST_KEY => Action::Key(Keyboard::from(code)),
            FIRST_MOD..=0x6c => Action::Modifier(Mods::from_bits_truncate(1 << (code - FIRST_MOD))),
            FIRST_MODE..=0x72 => Action::Mode(MODES[(code - FIRST_MODE) as usize]),
            FIRST_MULTI..=0x74 => Action::Multi(MULTIS[(code - FIRST_MULTI) as usize]),
            FIRST_MEDIA..=0x7a => Action::Media(MEDIA[(code - FIRST_MEDIA) as usize]),
            FIRST_MACRO..=0x8d => Action::Macro(MACROS[(code - FIRST_MACRO) as usize]),
            FIRST_SYSTEM..=0x8f => Action::System(SYSTEM[(code - FIRST_SYSTEM) as usize]),
            END..=0xff => {
                warn!("Unknown action code {:x}, ignoring", code);
                Action::None
            }
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Action::None
    }

    /// Does this action type anything.
    pub fn types(&self) -> bool {
        matches!(self, Action::Key(_) | Action::Media(_) | Action::Macro(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => write!(f, "-"),
            Action::Key(key) => write!(f, "{:?}", key),
            Action::Modifier(mods) => write!(f, "{}", mods),
            Action::Mode(ModeChange::Reset) => write!(f, "reset"),
            Action::Mode(ModeChange::MasterReset) => write!(f, "master reset"),
            Action::Mode(ModeChange::Switch { target, lock: false }) => write!(f, "{:?}", target),
            Action::Mode(ModeChange::Switch { target, lock: true }) => write!(f, "{:?} lock", target),
            Action::Multi(Combo { layer: Some(layer), mods }) => write!(f, "{:?}+{}", layer, mods),
            Action::Multi(Combo { layer: None, mods }) => write!(f, "{}", mods),
            Action::Media(code) => write!(f, "media {:?}", code),
            Action::Macro(mac) => write!(f, "macro {}", mac.name()),
            Action::System(signal) => write!(f, "{:?}", signal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_decode_as_usages() {
        assert_eq!(Action::from_code(0x00), Action::None);
        assert_eq!(Action::from_code(0x01), Action::None);
        assert_eq!(Action::from_code(0x1a), Action::Key(Keyboard::W));
        assert_eq!(Action::from_code(0x22), Action::Key(Keyboard::Keyboard5));
        assert_eq!(Action::from_code(0x64), Action::Key(Keyboard::NonUSBackslash));
    }

    #[test]
    fn ranges() {
        assert_eq!(Action::from_code(0x65), Action::Modifier(Mods::LCTRL));
        assert_eq!(Action::from_code(0x66), Action::Modifier(Mods::LSHIFT));
        assert_eq!(Action::from_code(0x6c), Action::Modifier(Mods::RGUI));
        assert_eq!(Action::from_code(0x6d), Action::Mode(ModeChange::Reset));
        assert_eq!(
            Action::from_code(0x70),
            Action::Mode(ModeChange::Switch { target: Layer::NumSym, lock: true })
        );
        assert_eq!(
            Action::from_code(0x71),
            Action::Mode(ModeChange::Switch { target: Layer::Function, lock: false })
        );
        assert_eq!(Action::from_code(0x73), Action::Multi(Combo::NUM_SHIFT));
        assert_eq!(Action::from_code(0x74), Action::Multi(Combo::CTRL_ALT));
        assert_eq!(Action::from_code(0x79), Action::Media(Consumer::VolumeIncrement));
        assert_eq!(Action::from_code(0x7e), Action::Macro(&macros::PARENS));
        assert_eq!(Action::from_code(0x85), Action::Macro(&macros::OPEN_PAREN));
        assert_eq!(Action::from_code(0x8d), Action::Macro(&macros::ANDROID_DPAD_CENTER));
        assert_eq!(Action::from_code(0x8e), Action::System(Signal::BatteryLevel));
        assert_eq!(Action::from_code(0x8f), Action::System(Signal::FactoryReset));
    }

    #[test]
    fn display() {
        assert_eq!(Action::from_code(0x1a).to_string(), "W");
        assert_eq!(Action::from_code(0x66).to_string(), "LSHIFT");
        assert_eq!(Action::from_code(0x73).to_string(), "NumSym+LSHIFT");
        assert_eq!(Action::from_code(0x74).to_string(), "LCTRL | LALT");
        assert_eq!(Action::from_code(0x72).to_string(), "Function lock");
        assert_eq!(Action::from_code(0x7c).to_string(), "macro 00");
    }

    #[test]
    fn unknown_codes_are_unused() {
        crate::testlog::setup();
        for code in END..=0xff {
            assert_eq!(Action::from_code(code), Action::None);
        }
    }

    #[test]
    fn every_code_decodes() {
        // Nothing in the byte space panics, and the defined ones are used.
        let used = (0..=0xffu8).filter(|&c| !Action::from_code(c).is_none()).count();
        assert_eq!(used, (END - FIRST_KEY) as usize);
    }
}
