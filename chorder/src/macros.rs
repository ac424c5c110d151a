//! Macros
//!
//! A macro is a fixed list of keystrokes typed for a single chord.  Each step
//! names its key and any modifiers the key needs (mostly shift, for the
//! symbols above the number row).  One-shot modifiers pending when the macro
//! fires are added to every step, except for the "bare" macros, which are
//! always sent without modifiers.

use arrayvec::ArrayVec;
use usbd_human_interface_device::page::Keyboard;

use crate::{Action, Mods, Stroke, Usage};

/// The most strokes any single action expands into.
pub const MAX_STROKES: usize = 4;

/// The strokes produced by one action.
pub type Expansion = ArrayVec<Stroke, MAX_STROKES>;

/// A single step of a macro.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub mods: Mods,
    pub key: Keyboard,
}

#[derive(PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Macro {
    name: &'static str,
    steps: &'static [Step],
    /// Send the steps exactly as written, ignoring pending modifiers.
    bare: bool,
}

impl Macro {
    /// A macro with the given steps.  No more than [`MAX_STROKES`] steps are
    /// allowed.  In a `const` or `static` this is checked at compile time.
    pub const fn new(name: &'static str, steps: &'static [Step]) -> Macro {
        assert!(steps.len() <= MAX_STROKES, "macro has too many steps");
        Macro { name, steps, bare: false }
    }

    /// Like [`Macro::new`], but the steps are always sent without the
    /// pending modifiers.
    pub const fn bare(name: &'static str, steps: &'static [Step]) -> Macro {
        let mac = Macro::new(name, steps);
        Macro { bare: true, ..mac }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn is_bare(&self) -> bool {
        self.bare
    }

    /// The strokes for this macro, with the pending one-shot modifiers
    /// merged in.
    pub fn expand(&self, pending: Mods) -> Expansion {
        let pending = if self.bare { Mods::empty() } else { pending };
        self.steps
            .iter()
            .map(|step| Stroke::key(step.mods | pending, step.key))
            .collect()
    }
}

/// Expand an action into the strokes to type.  Actions that don't type
/// anything produce no strokes.
pub fn expand(action: &Action, pending: Mods) -> Expansion {
    let mut strokes = Expansion::new();
    match action {
        Action::Key(key) => strokes.push(Stroke::key(pending, *key)),
        Action::Media(code) => strokes.push(Stroke { mods: pending, usage: Usage::Media(*code) }),
        Action::Macro(mac) => return mac.expand(pending),
        _ => (),
    }
    strokes
}

/// A plain keypress.
const fn n(key: Keyboard) -> Step {
    Step { mods: Mods::empty(), key }
}

/// A keypress with shift held.
const fn s(key: Keyboard) -> Step {
    Step { mods: Mods::LSHIFT, key }
}

/// A keypress with the given modifiers.
const fn with(mods: Mods, key: Keyboard) -> Step {
    Step { mods, key }
}

pub static TRIPLE_ZERO: Macro = Macro {
    name: "000",
    steps: &[n(Keyboard::Keyboard0), n(Keyboard::Keyboard0), n(Keyboard::Keyboard0)],
    bare: false,
};

pub static DOUBLE_ZERO: Macro = Macro {
    name: "00",
    steps: &[n(Keyboard::Keyboard0), n(Keyboard::Keyboard0)],
    bare: false,
};

/// A pair of double quotes, leaving the cursor between them.
pub static QUOTES: Macro = Macro {
    name: "\"\"",
    steps: &[s(Keyboard::Apostrophe), s(Keyboard::Apostrophe), n(Keyboard::LeftArrow)],
    bare: false,
};

/// A pair of parentheses, leaving the cursor between them.
pub static PARENS: Macro = Macro {
    name: "()",
    steps: &[s(Keyboard::Keyboard9), s(Keyboard::Keyboard0), n(Keyboard::LeftArrow)],
    bare: false,
};

pub static DOLLAR: Macro = Macro {
    name: "$",
    steps: &[s(Keyboard::Keyboard4)],
    bare: false,
};

pub static PERCENT: Macro = Macro {
    name: "%",
    steps: &[s(Keyboard::Keyboard5)],
    bare: false,
};

pub static AMPERSAND: Macro = Macro {
    name: "&",
    steps: &[s(Keyboard::Keyboard7)],
    bare: false,
};

pub static ASTERISK: Macro = Macro {
    name: "*",
    steps: &[s(Keyboard::Keyboard8)],
    bare: false,
};

pub static QUESTION: Macro = Macro {
    name: "?",
    steps: &[s(Keyboard::ForwardSlash)],
    bare: false,
};

pub static PLUS: Macro = Macro {
    name: "+",
    steps: &[s(Keyboard::Equal)],
    bare: false,
};

/// An open parenthesis, then back over it.
pub static OPEN_PAREN: Macro = Macro {
    name: "(",
    steps: &[s(Keyboard::Keyboard9), n(Keyboard::LeftArrow)],
    bare: false,
};

pub static CLOSE_PAREN: Macro = Macro {
    name: ")",
    steps: &[s(Keyboard::Keyboard0)],
    bare: false,
};

pub static OPEN_CURLY: Macro = Macro {
    name: "{",
    steps: &[s(Keyboard::LeftBrace)],
    bare: false,
};

pub static CLOSE_CURLY: Macro = Macro {
    name: "}",
    steps: &[s(Keyboard::RightBrace)],
    bare: false,
};

// Android navigation.

pub static ANDROID_SEARCH: Macro = Macro {
    name: "android search",
    steps: &[with(Mods::LALT, Keyboard::Space)],
    bare: false,
};

pub static ANDROID_HOME: Macro = Macro {
    name: "android home",
    steps: &[with(Mods::LALT, Keyboard::Escape)],
    bare: false,
};

pub static ANDROID_MENU: Macro = Macro {
    name: "android menu",
    steps: &[with(Mods::LCTRL, Keyboard::Escape)],
    bare: false,
};

pub static ANDROID_BACK: Macro = Macro {
    name: "android back",
    steps: &[n(Keyboard::Escape)],
    bare: true,
};

pub static ANDROID_DPAD_CENTER: Macro = Macro {
    name: "android dpad center",
    steps: &[n(Keyboard::Keypad5)],
    bare: true,
};

#[cfg(test)]
mod tests {
    use usbd_human_interface_device::page::Consumer;

    use super::*;

    fn key(mods: Mods, key: Keyboard) -> Stroke {
        Stroke::key(mods, key)
    }

    #[test]
    fn parens_leave_the_cursor_inside() {
        let strokes = PARENS.expand(Mods::empty());
        assert_eq!(
            strokes.as_slice(),
            &[
                key(Mods::LSHIFT, Keyboard::Keyboard9),
                key(Mods::LSHIFT, Keyboard::Keyboard0),
                key(Mods::empty(), Keyboard::LeftArrow),
            ]
        );
    }

    #[test]
    fn open_paren() {
        let strokes = expand(&Action::Macro(&OPEN_PAREN), Mods::empty());
        assert_eq!(
            strokes.as_slice(),
            &[key(Mods::LSHIFT, Keyboard::Keyboard9), key(Mods::empty(), Keyboard::LeftArrow)]
        );
    }

    #[test]
    fn pending_mods_apply_to_every_step() {
        let strokes = DOUBLE_ZERO.expand(Mods::LCTRL);
        assert_eq!(
            strokes.as_slice(),
            &[key(Mods::LCTRL, Keyboard::Keyboard0), key(Mods::LCTRL, Keyboard::Keyboard0)]
        );

        let strokes = DOLLAR.expand(Mods::LALT);
        assert_eq!(strokes.as_slice(), &[key(Mods::LSHIFT | Mods::LALT, Keyboard::Keyboard4)]);
    }

    #[test]
    fn bare_macros_ignore_pending_mods() {
        let strokes = ANDROID_BACK.expand(Mods::LSHIFT | Mods::RGUI);
        assert_eq!(strokes.as_slice(), &[key(Mods::empty(), Keyboard::Escape)]);
    }

    #[test]
    fn expansion_is_repeatable() {
        let all = [
            &TRIPLE_ZERO, &DOUBLE_ZERO, &QUOTES, &PARENS, &DOLLAR, &PERCENT, &AMPERSAND,
            &ASTERISK, &QUESTION, &PLUS, &OPEN_PAREN, &CLOSE_PAREN, &OPEN_CURLY, &CLOSE_CURLY,
            &ANDROID_SEARCH, &ANDROID_HOME, &ANDROID_MENU, &ANDROID_BACK, &ANDROID_DPAD_CENTER,
        ];
        for mac in all {
            assert!(mac.steps().len() <= MAX_STROKES, "{}", mac.name());
            let first = mac.expand(Mods::RSHIFT);
            assert!(!first.is_empty());
            assert!(first.len() <= MAX_STROKES);
            for _ in 0..3 {
                assert_eq!(mac.expand(Mods::RSHIFT), first, "{}", mac.name);
            }
        }
    }

    #[test]
    fn built_macros() {
        const STEPS: &[Step] = &[
            n(Keyboard::A),
            n(Keyboard::B),
            s(Keyboard::C),
            n(Keyboard::LeftArrow),
        ];
        static FULL: Macro = Macro::new("abC", STEPS);
        static PLAIN: Macro = Macro::bare("abC", STEPS);

        assert_eq!(FULL.expand(Mods::LALT).len(), MAX_STROKES);
        assert!(!FULL.is_bare());
        assert!(PLAIN.is_bare());
        assert_eq!(PLAIN.expand(Mods::LALT)[0], key(Mods::empty(), Keyboard::A));
        assert_eq!(PLAIN.name(), "abC");
    }

    #[test]
    #[should_panic(expected = "too many steps")]
    fn too_many_steps() {
        static STEPS: [Step; 5] = [
            n(Keyboard::A),
            n(Keyboard::B),
            n(Keyboard::C),
            n(Keyboard::D),
            n(Keyboard::E),
        ];
        let _ = Macro::new("abcde", &STEPS);
    }

    #[test]
    fn single_keys() {
        assert_eq!(
            expand(&Action::Key(Keyboard::W), Mods::LGUI).as_slice(),
            &[key(Mods::LGUI, Keyboard::W)]
        );
        assert_eq!(
            expand(&Action::Media(Consumer::PlayPause), Mods::empty()).as_slice(),
            &[Stroke::media(Consumer::PlayPause)]
        );
        assert!(expand(&Action::None, Mods::LSHIFT).is_empty());
        assert!(expand(&Action::Modifier(Mods::LSHIFT), Mods::empty()).is_empty());
    }
}
