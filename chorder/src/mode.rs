//! Layer and modifier state.
//!
//! The state that carries from one chord to the next:
//!
//! - The active layer, which picks the table the next chord is looked up in.
//! - The lock, if any.  A locked layer becomes the base layer that the
//!   keyboard returns to after a one-shot layer switch.  Only one layer can be
//!   locked at a time.
//! - The one-shot modifiers, which apply to whatever the next typing chord
//!   sends, and are then cleared.
//!
//! A plain layer switch only lasts for the chord after it.  Any resolved
//! chord other than another layer change returns to the base layer,
//! including chords with nothing bound to them.

use enumset::EnumSet;

use crate::log::info;
use crate::{Action, Combo, Layer, ModeChange, Mods, Signal};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModeState {
    active: Layer,
    locks: EnumSet<Layer>,
    oneshot: Mods,
}

/// What the caller should do after an action has been applied to the state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing to send.
    Idle,
    /// Type the action, with these modifiers merged into every stroke.
    Type(Mods),
    /// Pass a signal on to the system handler.
    Signal(Signal),
}

impl Default for ModeState {
    fn default() -> Self {
        ModeState::new()
    }
}

impl ModeState {
    pub fn new() -> ModeState {
        ModeState {
            active: Layer::Default,
            locks: EnumSet::empty(),
            oneshot: Mods::empty(),
        }
    }

    /// The layer the next chord is looked up in.
    pub fn active(&self) -> Layer {
        self.active
    }

    /// The layer returned to after a one-shot switch.
    pub fn base(&self) -> Layer {
        self.locks.iter().next().unwrap_or(Layer::Default)
    }

    pub fn is_locked(&self, layer: Layer) -> bool {
        self.locks.contains(layer)
    }

    /// The modifiers waiting for the next typed key.
    pub fn pending(&self) -> Mods {
        self.oneshot
    }

    /// Apply a resolved action.
    pub fn update(&mut self, action: &Action) -> Transition {
        match *action {
            Action::Mode(change) => {
                self.change(change);
                match change {
                    ModeChange::MasterReset => Transition::Signal(Signal::MasterReset),
                    _ => Transition::Idle,
                }
            }
            Action::Multi(Combo { layer, mods }) => {
                if let Some(layer) = layer {
                    self.active = layer;
                }
                self.oneshot |= mods;
                info!("Combo: {:?} {:?}", self.active, self.oneshot);
                Transition::Idle
            }
            Action::Modifier(mods) => {
                self.revert();
                self.oneshot ^= mods;
                Transition::Idle
            }
            Action::Key(_) | Action::Media(_) | Action::Macro(_) => {
                self.revert();
                Transition::Type(core::mem::take(&mut self.oneshot))
            }
            Action::System(signal) => {
                self.revert();
                Transition::Signal(signal)
            }
            Action::None => {
                self.revert();
                Transition::Idle
            }
        }
    }

    fn change(&mut self, change: ModeChange) {
        match change {
            ModeChange::Reset | ModeChange::MasterReset => {
                self.locks.clear();
                self.oneshot = Mods::empty();
                self.active = Layer::Default;
            }
            ModeChange::Switch { target, lock: false } => {
                self.active = target;
            }
            ModeChange::Switch { target, lock: true } => {
                if self.locks.contains(target) {
                    self.locks.clear();
                } else {
                    self.locks = EnumSet::only(target);
                }
                self.active = self.base();
            }
        }
        info!("Mode: {:?}, base {:?}", self.active, self.base());
    }

    // Drop any one-shot layer.
    fn revert(&mut self) {
        self.active = self.base();
    }
}
