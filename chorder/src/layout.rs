//! Chord tables.
//!
//! There are three layers, each a table with one action for every possible
//! chord.  Which table a chord is looked up in is decided by the
//! [`ModeState`]; the tables themselves never change once built.
//!
//! The built-in tables are in the submodules, one per layer.  Tables can also
//! be built at runtime from the byte encoding understood by
//! [`Action::from_code`], which is how alternate layouts are loaded.

use enumset::{EnumSet, EnumSetType};

use crate::chord::NCHORDS;
use crate::log::info;
use crate::{Action, Chord, Error, ModeState, Result};

mod default;
mod function;
mod numsym;

/// The layers, each with its own table.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Letters and navigation.
    Default,
    /// Numbers and symbols.
    NumSym,
    /// Function keys.
    Function,
}

impl Layer {
    pub fn all() -> EnumSet<Layer> {
        EnumSet::all()
    }
}

/// The actions for one layer, indexed by chord.
#[derive(Clone, Debug)]
pub struct Table {
    layer: Layer,
    entries: [Action; NCHORDS],
}

impl Table {
    pub const fn new(layer: Layer, entries: [Action; NCHORDS]) -> Table {
        Table { layer, entries }
    }

    /// Build a table from a slice, which must have exactly one entry per
    /// chord.
    pub fn from_slice(layer: Layer, entries: &[Action]) -> Result<Table> {
        let entries: [Action; NCHORDS] = entries
            .try_into()
            .map_err(|_| Error::TableLength { layer, len: entries.len() })?;
        Ok(Table { layer, entries })
    }

    /// Build a table from the byte encoding.
    pub fn from_codes(layer: Layer, codes: &[u8]) -> Result<Table> {
        if codes.len() != NCHORDS {
            return Err(Error::TableLength { layer, len: codes.len() });
        }
        let entries = core::array::from_fn(|i| Action::from_code(codes[i]));
        Ok(Table { layer, entries })
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// The action for a chord.  Every chord has an entry, so this never
    /// fails.
    pub fn get(&self, chord: Chord) -> Action {
        self.entries[chord.index()]
    }

    /// All of the entries, paired with their chords.
    pub fn iter(&self) -> impl Iterator<Item = (Chord, Action)> + '_ {
        Chord::all().zip(self.entries.iter().copied())
    }
}

/// The three tables together.
#[derive(Clone, Debug)]
pub struct Keymap {
    tables: [Table; 3],
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap::builtin()
    }
}

impl Keymap {
    /// The tables compiled into the firmware.
    pub fn builtin() -> Keymap {
        Keymap {
            tables: [
                Table::new(Layer::Default, default::DEFAULT),
                Table::new(Layer::NumSym, numsym::NUMSYM),
                Table::new(Layer::Function, function::FUNCTION),
            ],
        }
    }

    /// Build a keymap from three tables.  Each table is placed by its own
    /// layer, so they can be given in any order, but each layer must be
    /// present exactly once.
    pub fn new(first: Table, second: Table, third: Table) -> Result<Keymap> {
        let mut seen = EnumSet::<Layer>::empty();
        for layer in [first.layer, second.layer, third.layer] {
            if !seen.insert(layer) {
                return Err(Error::DuplicateLayer { layer });
            }
        }

        let mut tables = [first, second, third];
        tables.sort_unstable_by_key(|t| t.layer as usize);
        Ok(Keymap { tables })
    }

    /// Build a keymap from three tables in the byte encoding.
    pub fn from_codes(default: &[u8], numsym: &[u8], function: &[u8]) -> Result<Keymap> {
        let keymap = Keymap {
            tables: [
                Table::from_codes(Layer::Default, default)?,
                Table::from_codes(Layer::NumSym, numsym)?,
                Table::from_codes(Layer::Function, function)?,
            ],
        };
        info!("Loaded chord tables");
        Ok(keymap)
    }

    pub fn table(&self, layer: Layer) -> &Table {
        &self.tables[layer as usize]
    }

    /// Look up a chord in the table for the active layer.
    pub fn resolve(&self, chord: Chord, state: &ModeState) -> Action {
        self.table(state.active()).get(chord)
    }
}

/// Short names used to keep the tables readable.
mod short {
    use crate::macros::Macro;
    use crate::{Action, Combo, Consumer, Keyboard, Layer, ModeChange, Mods};

    pub const ___: Action = Action::None;

    pub const fn k(key: Keyboard) -> Action {
        Action::Key(key)
    }

    pub const fn media(code: Consumer) -> Action {
        Action::Media(code)
    }

    pub const fn mac(mac: &'static Macro) -> Action {
        Action::Macro(mac)
    }

    const fn switch(target: Layer, lock: bool) -> Action {
        Action::Mode(ModeChange::Switch { target, lock })
    }

    pub const NUM: Action = switch(Layer::NumSym, false);
    pub const NUM_LOCK: Action = switch(Layer::NumSym, true);
    pub const FUNC: Action = switch(Layer::Function, false);
    pub const RESET: Action = Action::Mode(ModeChange::Reset);
    pub const MASTER_RESET: Action = Action::Mode(ModeChange::MasterReset);
    pub const NUM_SHIFT: Action = Action::Multi(Combo::NUM_SHIFT);

    pub const LCTRL: Action = Action::Modifier(Mods::LCTRL);
    pub const LSHIFT: Action = Action::Modifier(Mods::LSHIFT);
    pub const LALT: Action = Action::Modifier(Mods::LALT);
    pub const LGUI: Action = Action::Modifier(Mods::LGUI);
    pub const RCTRL: Action = Action::Modifier(Mods::RCTRL);
    pub const RSHIFT: Action = Action::Modifier(Mods::RSHIFT);
    pub const RALT: Action = Action::Modifier(Mods::RALT);
    pub const RGUI: Action = Action::Modifier(Mods::RGUI);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros;
    use crate::{Combo, Consumer, Keyboard, ModeChange, Mods};

    fn chord(bits: u8) -> Chord {
        Chord::from_raw(bits)
    }

    #[test]
    fn tables_are_in_layer_order() {
        let keymap = Keymap::builtin();
        for layer in Layer::all() {
            assert_eq!(keymap.table(layer).layer(), layer);
            assert_eq!(keymap.table(layer).iter().count(), NCHORDS);
        }
    }

    #[test]
    fn spot_checks() {
        let keymap = Keymap::builtin();
        let default = keymap.table(Layer::Default);
        let numsym = keymap.table(Layer::NumSym);
        let function = keymap.table(Layer::Function);

        assert_eq!(default.get(chord(0x00)), Action::None);
        assert_eq!(default.get(chord(0x01)), Action::Key(Keyboard::W));
        assert_eq!(default.get(chord(0x05)), Action::Macro(&macros::OPEN_PAREN));
        assert_eq!(
            default.get(chord(0x10)),
            Action::Mode(ModeChange::Switch { target: Layer::NumSym, lock: false })
        );
        assert_eq!(
            default.get(chord(0x1f)),
            Action::Mode(ModeChange::Switch { target: Layer::NumSym, lock: true })
        );
        assert_eq!(default.get(chord(0x20)), Action::Key(Keyboard::Space));
        assert_eq!(default.get(chord(0x40)), Action::Modifier(Mods::LSHIFT));
        assert_eq!(default.get(chord(0x66)), Action::Media(Consumer::PlayPause));
        assert_eq!(default.get(chord(0x70)), Action::Mode(ModeChange::MasterReset));

        assert_eq!(numsym.get(chord(0x01)), Action::Key(Keyboard::Keyboard5));
        assert_eq!(numsym.get(chord(0x1f)), Action::Mode(ModeChange::Reset));
        assert_eq!(numsym.get(chord(0x2a)), Action::Macro(&macros::PARENS));
        assert_eq!(numsym.get(chord(0x66)), Action::Key(Keyboard::KeypadDot));

        assert_eq!(function.get(chord(0x01)), Action::Key(Keyboard::F5));
        assert_eq!(function.get(chord(0x11)), Action::Mode(ModeChange::Reset));
        assert_eq!(function.get(chord(0x70)), Action::Mode(ModeChange::Reset));
    }

    #[test]
    fn num_shift_everywhere() {
        let keymap = Keymap::builtin();
        for layer in Layer::all() {
            assert_eq!(
                keymap.table(layer).get(chord(0x30)),
                Action::Multi(Combo::NUM_SHIFT),
                "{:?}",
                layer
            );
        }
    }

    #[test]
    fn resolve_uses_active_layer() {
        let keymap = Keymap::builtin();
        let mut state = ModeState::new();
        assert_eq!(keymap.resolve(chord(0x01), &state), Action::Key(Keyboard::W));
        assert_eq!(keymap.resolve(chord(0x01), &state), Action::Key(Keyboard::W));

        state.update(&keymap.resolve(chord(0x10), &state));
        assert_eq!(keymap.resolve(chord(0x01), &state), Action::Key(Keyboard::Keyboard5));
    }

    #[test]
    fn from_codes() {
        let mut codes = [0u8; NCHORDS];
        codes[0x01] = 0x1a;
        codes[0x10] = 0x6f;
        codes[0x20] = 0x99;
        let table = Table::from_codes(Layer::NumSym, &codes).unwrap();
        assert_eq!(table.get(chord(0x01)), Action::Key(Keyboard::W));
        assert_eq!(
            table.get(chord(0x10)),
            Action::Mode(ModeChange::Switch { target: Layer::NumSym, lock: false })
        );
        assert_eq!(table.get(chord(0x20)), Action::None);

        let keymap = Keymap::from_codes(&codes, &codes, &codes).unwrap();
        assert_eq!(keymap.table(Layer::Function).layer(), Layer::Function);
    }

    #[test]
    fn wrong_length_is_an_error() {
        assert_eq!(
            Table::from_codes(Layer::Function, &[0u8; 127]).unwrap_err(),
            Error::TableLength { layer: Layer::Function, len: 127 }
        );
        assert_eq!(
            Table::from_slice(Layer::Default, &[Action::None; 129]).unwrap_err(),
            Error::TableLength { layer: Layer::Default, len: 129 }
        );
        let codes = [0u8; NCHORDS];
        assert!(Keymap::from_codes(&codes, &codes[..64], &codes).is_err());
    }

    #[test]
    fn tables_in_any_order() {
        let keymap = Keymap::new(
            Table::new(Layer::Function, function::FUNCTION),
            Table::new(Layer::Default, default::DEFAULT),
            Table::new(Layer::NumSym, numsym::NUMSYM),
        )
        .unwrap();
        assert_eq!(keymap.table(Layer::NumSym).get(chord(0x01)), Action::Key(Keyboard::Keyboard5));
        for layer in Layer::all() {
            assert_eq!(keymap.table(layer).layer(), layer);
        }
    }

    #[test]
    fn each_layer_once() {
        let err = Keymap::new(
            Table::new(Layer::Default, default::DEFAULT),
            Table::new(Layer::Default, default::DEFAULT),
            Table::new(Layer::NumSym, numsym::NUMSYM),
        )
        .unwrap_err();
        assert_eq!(err, Error::DuplicateLayer { layer: Layer::Default });

        let err = Keymap::new(
            Table::new(Layer::Function, function::FUNCTION),
            Table::new(Layer::NumSym, numsym::NUMSYM),
            Table::new(Layer::Function, function::FUNCTION),
        )
        .unwrap_err();
        assert_eq!(err, Error::DuplicateLayer { layer: Layer::Function });
    }
}
