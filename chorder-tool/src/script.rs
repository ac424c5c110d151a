//! Scripted button presses.
//!
//! A script is a list of chords, one per line, each held for a number of
//! ticks:
//!
//! ```text
//! # W, then release
//! --- ---P 10
//! --- ---- 5
//! 0x30 10
//! ```
//!
//! The chord is a pattern or a hex value.  The tick count is optional.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chorder::{ButtonSampler, Chord, Pacer};

/// Ticks a line holds its chord when no count is given.
const DEFAULT_TICKS: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Hold {
    pub chord: Chord,
    pub ticks: usize,
}

pub fn load(path: &Path) -> Result<Vec<Hold>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("loading {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<Hold>> {
    let mut holds = Vec::new();
    for (num, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let (chord, ticks) = match words.split_last() {
            Some((last, rest)) if !rest.is_empty() && !last.starts_with("0x") => {
                match last.parse::<usize>() {
                    Ok(ticks) => (rest.concat(), ticks),
                    Err(_) => (words.concat(), DEFAULT_TICKS),
                }
            }
            _ => (words.concat(), DEFAULT_TICKS),
        };
        let chord: Chord = chord
            .parse()
            .map_err(|err| anyhow!("line {}: {}", num + 1, err))?;
        holds.push(Hold { chord, ticks });
    }
    Ok(holds)
}

/// Where playback is in a script.  Shared by the sampler and the pacer.
struct Cursor {
    holds: Vec<Hold>,
    index: usize,
    tick: usize,
}

impl Cursor {
    fn done(&self) -> bool {
        self.index >= self.holds.len()
    }

    // Move past lines that have been held for all their ticks.
    fn settle(&mut self) {
        while let Some(hold) = self.holds.get(self.index) {
            if self.tick < hold.ticks {
                break;
            }
            self.index += 1;
            self.tick = 0;
        }
    }

    // The chord for the current tick, then advance.
    fn next(&mut self) -> Chord {
        self.settle();
        match self.holds.get(self.index) {
            Some(hold) => {
                self.tick += 1;
                hold.chord
            }
            None => Chord::EMPTY,
        }
    }
}

/// Build the buttons and the pacer for playing a script.  Playback stops
/// once every line has been held for its ticks.
pub fn player(holds: Vec<Hold>, tick: Option<Duration>) -> (ScriptButtons, ScriptPacer) {
    let cursor = Rc::new(RefCell::new(Cursor { holds, index: 0, tick: 0 }));
    (ScriptButtons(cursor.clone()), ScriptPacer { cursor, tick })
}

pub struct ScriptButtons(Rc<RefCell<Cursor>>);

impl ButtonSampler for ScriptButtons {
    fn read_raw(&mut self) -> u8 {
        self.0.borrow_mut().next().bits()
    }
}

pub struct ScriptPacer {
    cursor: Rc<RefCell<Cursor>>,
    // Sleep this long between ticks, when playing in real time.
    tick: Option<Duration>,
}

impl Pacer for ScriptPacer {
    fn wait(&mut self) -> bool {
        let done = {
            let mut cursor = self.cursor.borrow_mut();
            cursor.settle();
            cursor.done()
        };
        if done {
            return false;
        }
        if let Some(tick) = self.tick {
            thread::sleep(tick);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_patterns_and_hex() {
        let holds = parse("# comment\n--- ---P 4\n0x30\n\nFCN IMRP\n-c- im-p 2 # parens\n").unwrap();
        assert_eq!(
            holds,
            vec![
                Hold { chord: Chord::from_raw(0x01), ticks: 4 },
                Hold { chord: Chord::from_raw(0x30), ticks: DEFAULT_TICKS },
                Hold { chord: Chord::from_raw(0x7f), ticks: DEFAULT_TICKS },
                Hold { chord: Chord::from_raw(0x2d), ticks: 2 },
            ]
        );
        assert!(parse("--- --X- 3").is_err());
        assert!(parse("0x80 3").is_err());
    }

    #[test]
    fn plays_every_tick() {
        let holds = parse("0x01 2\n0x00 1\n0x02 3").unwrap();
        let (mut buttons, mut pacer) = player(holds, None);
        let mut seen = Vec::new();
        while pacer.wait() {
            seen.push(buttons.read_raw());
        }
        assert_eq!(seen, vec![1, 1, 0, 2, 2, 2]);
        assert_eq!(buttons.read_raw(), 0);
    }
}
