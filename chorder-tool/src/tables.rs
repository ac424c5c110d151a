//! Loading chord tables from text.
//!
//! The file has a section for each layer, holding the 128 entries in the
//! byte encoding, as hex:
//!
//! ```text
//! # Letters.
//! [default]
//! 00 1a 1c 18 15 85 0b 16
//! ...
//! [numsym]
//! ...
//! [function]
//! ...
//! ```
//!
//! Bytes may be separated by spaces or commas, and may have a `0x` prefix.
//! Anything after a `#` is a comment.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chorder::{Keymap, Layer};

pub fn load(path: &Path) -> Result<Keymap> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("loading {}", path.display()))
}

pub fn parse(text: &str) -> Result<Keymap> {
    let mut codes: [Option<Vec<u8>>; 3] = [None, None, None];
    let mut current: Option<Layer> = None;

    for (num, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let layer = section(name.trim()).with_context(|| format!("line {}", num + 1))?;
            if codes[layer as usize].is_some() {
                bail!("line {}: duplicate section [{}]", num + 1, name);
            }
            codes[layer as usize] = Some(Vec::new());
            current = Some(layer);
            continue;
        }

        let layer = current.ok_or_else(|| anyhow!("line {}: entries before any section", num + 1))?;
        let table = codes[layer as usize].get_or_insert_with(Vec::new);
        for word in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if word.is_empty() {
                continue;
            }
            let hex = word.strip_prefix("0x").unwrap_or(word);
            let code = u8::from_str_radix(hex, 16)
                .with_context(|| format!("line {}: bad entry {:?}", num + 1, word))?;
            table.push(code);
        }
    }

    let [default, numsym, function] = codes;
    let default = default.ok_or_else(|| anyhow!("missing [default] section"))?;
    let numsym = numsym.ok_or_else(|| anyhow!("missing [numsym] section"))?;
    let function = function.ok_or_else(|| anyhow!("missing [function] section"))?;
    Ok(Keymap::from_codes(&default, &numsym, &function)?)
}

fn section(name: &str) -> Result<Layer> {
    match name.to_ascii_lowercase().as_str() {
        "default" => Ok(Layer::Default),
        "numsym" => Ok(Layer::NumSym),
        "function" => Ok(Layer::Function),
        _ => Err(anyhow!("unknown section [{}]", name)),
    }
}
