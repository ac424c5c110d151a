//! The control loop.
//!
//! Each tick samples the buttons.  When a chord fires, it is looked up in
//! the active layer, applied to the mode state, and whatever it types is
//! sent to the HID sink.  Between chords, the tick retries any release that
//! could not be delivered earlier.

use crate::log::{info, warn};
use crate::macros;
use crate::{
    ButtonSampler, Chord, ChordSampler, Config, Emitter, HidSink, Keymap, ModeState, Pacer,
    Result, SystemHandler, Transition,
};

pub struct Chorder<B, S, H> {
    sampler: ChordSampler<B>,
    keymap: Keymap,
    state: ModeState,
    emitter: Emitter<S>,
    system: H,
}

impl<B, S, H> Chorder<B, S, H>
where
    B: ButtonSampler,
    S: HidSink,
    H: SystemHandler,
{
    pub fn new(buttons: B, sink: S, system: H, keymap: Keymap, config: &Config) -> Self {
        Chorder {
            sampler: ChordSampler::new(buttons, config),
            keymap,
            state: ModeState::new(),
            emitter: Emitter::new(sink, config),
            system,
        }
    }

    /// Run one polling tick.  Returns the chord, if one fired.
    pub fn tick(&mut self) -> Result<Option<Chord>> {
        match self.sampler.sample() {
            Some(chord) => {
                self.process(chord)?;
                Ok(Some(chord))
            }
            None => {
                self.emitter.flush()?;
                Ok(None)
            }
        }
    }

    /// Handle a chord that has fired.  The mode state is always updated,
    /// even if sending fails.
    pub fn process(&mut self, chord: Chord) -> Result<()> {
        let action = self.keymap.resolve(chord, &self.state);
        info!("{} ({:?}): {}", chord, self.state.active(), action);

        match self.state.update(&action) {
            Transition::Idle => Ok(()),
            Transition::Type(mods) => {
                let strokes = macros::expand(&action, mods);
                self.emitter.emit(&strokes)
            }
            Transition::Signal(signal) => {
                info!("Signal: {:?}", signal);
                self.system.signal(signal);
                Ok(())
            }
        }
    }

    /// Tick until the pacer says to stop, then release every key.  Errors
    /// during a tick are logged and the loop carries on.
    pub fn run<P: Pacer>(&mut self, pacer: &mut P) -> Result<()> {
        while pacer.wait() {
            if let Err(err) = self.tick() {
                warn!("Tick failed: {:?}", err);
            }
        }
        info!("Stopping, releasing keys");
        self.emitter.release_all()
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Swap in a new set of tables.  The mode state is kept.
    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.keymap = keymap;
    }

    pub fn sampler(&self) -> &ChordSampler<B> {
        &self.sampler
    }

    pub fn emitter(&self) -> &Emitter<S> {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut Emitter<S> {
        &mut self.emitter
    }

    pub fn system(&self) -> &H {
        &self.system
    }

    pub fn into_parts(self) -> (S, H) {
        (self.emitter.into_inner(), self.system)
    }
}
