//! Seven button chording keyboard core.
//!
//! The chorder turns combinations of seven buttons (three thumb keys and four
//! finger keys) into HID keyboard and consumer-control reports.  The flow
//! through the crate follows a single polling tick:
//!
//! - [`sampler`] debounces the raw button mask into a [`Chord`].
//! - [`layout`] looks the chord up in the table of the active [`Layer`].
//! - [`mode`] tracks layers, locks, and one-shot modifiers.
//! - [`macros`] expands the resulting [`Action`] into keystrokes.
//! - [`emit`] sends press/release report pairs to a [`HidSink`].
//!
//! [`Chorder`] ties these together into the control loop.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// #![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

use core::fmt;

use bitflags::bitflags;

pub use usbd_human_interface_device::page::{Consumer, Keyboard};

pub use action::{Action, Combo, ModeChange};
pub use chord::{Button, Chord};
pub use chorder::Chorder;
pub use config::Config;
pub use emit::Emitter;
pub use layout::{Keymap, Layer, Table};
pub use macros::{Macro, Step};
pub use mode::{ModeState, Transition};
pub use sampler::ChordSampler;

pub mod action;
pub mod chord;
pub mod chorder;
pub mod config;
pub mod emit;
pub mod layout;
pub mod macros;
pub mod mode;
pub mod sampler;

#[cfg(feature = "usb")]
pub mod usb;

#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::debug;
            pub use defmt::info;
            pub use defmt::warn;
        }
    } else {
        mod log {
            pub use log::debug;
            pub use log::info;
            pub use log::warn;
        }
    }
}

bitflags! {
    /// A modifier map.  The bits match the modifier byte of a boot keyboard
    /// report, so `bits()` is what goes on the wire.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
    pub struct Mods: u8 {
        const LCTRL = 0b0000_0001;
        const LSHIFT = 0b0000_0010;
        const LALT = 0b0000_0100;
        const LGUI = 0b0000_1000;
        const RCTRL = 0b0001_0000;
        const RSHIFT = 0b0010_0000;
        const RALT = 0b0100_0000;
        const RGUI = 0b1000_0000;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mods {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Mods({=u8:#x})", self.bits())
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Mods {
    /// The keyboard usages for the modifiers in this set.  Modifier usages
    /// are contiguous from LeftControl (0xE0), in the same order as the bits.
    pub fn usages(self) -> impl Iterator<Item = Keyboard> {
        (0..8u8)
            .filter(move |bit| self.bits() & (1 << bit) != 0)
            .map(|bit| Keyboard::from(0xE0 + bit))
    }
}

/// What a keystroke sends: a key on the keyboard page, or a consumer control
/// (media) usage.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Usage {
    Key(Keyboard),
    Media(Consumer),
}

/// A single keystroke: the usage plus the modifiers held while it is down.
/// Every stroke goes out as a press followed by its release.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stroke {
    pub mods: Mods,
    pub usage: Usage,
}

impl Stroke {
    pub const fn key(mods: Mods, key: Keyboard) -> Stroke {
        Stroke { mods, usage: Usage::Key(key) }
    }

    pub const fn media(code: Consumer) -> Stroke {
        Stroke { mods: Mods::empty(), usage: Usage::Media(code) }
    }

    /// The press and release events for this stroke, in order.
    pub fn events(&self) -> [OutputEvent; 2] {
        [
            OutputEvent { mods: self.mods, usage: self.usage, phase: Phase::Press },
            OutputEvent { mods: self.mods, usage: self.usage, phase: Phase::Release },
        ]
    }
}

/// Whether an output event puts a key down or lifts it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Press,
    Release,
}

/// One half of a stroke, ready to be turned into a report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputEvent {
    pub mods: Mods,
    pub usage: Usage,
    pub phase: Phase,
}

impl OutputEvent {
    pub fn is_press(&self) -> bool {
        self.phase == Phase::Press
    }

    /// The report that carries this event.  Releases clear everything,
    /// modifiers included.
    pub fn report(&self) -> Report {
        match (self.usage, self.phase) {
            (Usage::Key(key), Phase::Press) => Report::Keyboard { mods: self.mods, key },
            (Usage::Key(_), Phase::Release) => Report::Keyboard {
                mods: Mods::empty(),
                key: Keyboard::NoEventIndicated,
            },
            (Usage::Media(code), Phase::Press) => Report::Consumer(code),
            (Usage::Media(_), Phase::Release) => Report::Consumer(Consumer::Unassigned),
        }
    }
}

/// A report handed to the HID transport.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Standard keyboard report: the modifier byte and a single key.
    Keyboard { mods: Mods, key: Keyboard },
    /// Consumer control report.
    Consumer(Consumer),
}

impl Report {
    /// Does this report leave nothing held down?
    pub fn is_release(&self) -> bool {
        match self {
            Report::Keyboard { mods, key } => mods.is_empty() && *key == Keyboard::NoEventIndicated,
            Report::Consumer(code) => *code == Consumer::Unassigned,
        }
    }
}

/// Signals that belong to the BLE management side of the device.  The core
/// only reports them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Reset the device and re-announce its identity.
    MasterReset,
    /// Forget all pairing information.
    FactoryReset,
    /// Report the battery level.
    BatteryLevel,
}

/// Source of the raw button state.
pub trait ButtonSampler {
    /// Read the buttons, one bit per button, set when pressed.  Only the low
    /// seven bits are used.
    fn read_raw(&mut self) -> u8;
}

impl<F: FnMut() -> u8> ButtonSampler for F {
    fn read_raw(&mut self) -> u8 {
        self()
    }
}

/// The HID transport.
pub trait HidSink {
    fn send(&mut self, report: Report) -> core::result::Result<(), SinkError>;
}

impl<S: HidSink + ?Sized> HidSink for &mut S {
    fn send(&mut self, report: Report) -> core::result::Result<(), SinkError> {
        (**self).send(report)
    }
}

/// Receiver for the signals in [`Signal`].
pub trait SystemHandler {
    fn signal(&mut self, signal: Signal);
}

/// Without a BLE side, signals are only logged.
impl SystemHandler for () {
    fn signal(&mut self, signal: Signal) {
        crate::log::info!("Ignoring signal: {:?}", signal);
    }
}

/// The wait between polling ticks.
pub trait Pacer {
    /// Wait out one polling interval.  Returns false when the loop should
    /// stop instead of running another tick.
    fn wait(&mut self) -> bool;
}

/// Failures reported by a [`HidSink`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The endpoint is busy; the same report can be tried again.
    Busy,
    /// No host is connected.
    Disconnected,
    /// The transport refused the report.
    Rejected,
}

impl SinkError {
    pub fn is_transient(&self) -> bool {
        matches!(self, SinkError::Busy)
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Busy => write!(f, "HID endpoint busy"),
            SinkError::Disconnected => write!(f, "HID host not connected"),
            SinkError::Rejected => write!(f, "HID report rejected"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The HID sink failed, after any retries.
    Sink(SinkError),
    /// A chord table did not have one entry per chord.
    TableLength { layer: Layer, len: usize },
    /// A keymap was given two tables for the same layer.
    DuplicateLayer { layer: Layer },
}

impl From<SinkError> for Error {
    fn from(err: SinkError) -> Self {
        Error::Sink(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sink(err) => write!(f, "{}", err),
            Error::TableLength { layer, len } => write!(
                f,
                "{:?} table has {} entries, expected {}",
                layer,
                len,
                chord::NCHORDS
            ),
            Error::DuplicateLayer { layer } => write!(f, "{:?} table given more than once", layer),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {}

pub type Result<T> = core::result::Result<T, Error>;
