//! Chorder tool.
//!
//! Works with the chorder's tables and runs the decoder on the desktop:
//!
//! - show: print a layer's table, chord by chord.
//! - check: load a tables file and report what it binds.
//! - play: feed a script of button presses through the decoder and print the
//!   reports it sends.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use chorder::{Action, Chorder, Config, Keymap, Layer};
use clap::{Parser, Subcommand};
use log::{info, warn};

mod script;
mod sink;
mod tables;

#[derive(Parser)]
#[command(name = "chorder")]
#[command(about = "Inspect chord tables and play button scripts", long_about = None)]
struct Cli {
    /// Load the chord tables from this file instead of the built-in ones.
    #[arg(long, global = true, value_name = "FILE")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table for a layer, or all of them.
    Show {
        #[arg(value_enum)]
        layer: Option<Layer>,

        /// Include chords with nothing bound.
        #[arg(short, long)]
        all: bool,
    },

    /// Load a tables file and summarize it.
    Check {
        /// The tables file.
        file: PathBuf,
    },

    /// Play a script of button presses.
    Play {
        /// The script file.
        script: PathBuf,

        /// Sleep for each tick, instead of running as fast as possible.
        #[arg(long)]
        realtime: bool,

        #[arg(long, value_name = "MS", default_value_t = Config::default().tick_ms)]
        tick_ms: u32,

        #[arg(long, value_name = "MS", default_value_t = Config::default().debounce_ms)]
        debounce_ms: u32,

        #[arg(long, default_value_t = Config::default().retry_limit)]
        retries: u8,

        /// Act as if the host never accepts a report.
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let keymap = match &cli.tables {
        Some(path) => tables::load(path)?,
        None => Keymap::builtin(),
    };

    match &cli.command {
        Commands::Show { layer, all } => {
            let layers: Vec<Layer> = match layer {
                Some(layer) => vec![*layer],
                None => Layer::all().iter().collect(),
            };
            for layer in layers {
                show(&keymap, layer, *all);
            }
        }
        Commands::Check { file } => {
            check(file)?;
        }
        Commands::Play { script, realtime, tick_ms, debounce_ms, retries, offline } => {
            let config = Config {
                tick_ms: *tick_ms,
                debounce_ms: *debounce_ms,
                retry_limit: *retries,
                ..Config::default()
            };
            play(keymap, script, &config, *realtime, *offline)?;
        }
    }

    Ok(())
}

fn show(keymap: &Keymap, layer: Layer, all: bool) {
    println!("[{:?}]", layer);
    for (chord, action) in keymap.table(layer).iter() {
        if all || !action.is_none() {
            println!("  {}  {:#04x}  {}", chord, chord.bits(), action);
        }
    }
}

fn check(file: &Path) -> Result<()> {
    let keymap = tables::load(file)?;
    for layer in Layer::all() {
        let table = keymap.table(layer);
        let bound = table.iter().filter(|(_, a)| !a.is_none()).count();
        let typing = table.iter().filter(|(_, a)| a.types()).count();
        let modes = table
            .iter()
            .filter(|(_, a)| matches!(a, Action::Mode(_) | Action::Multi(_)))
            .count();
        println!("{:?}: {} bound, {} typing, {} mode changes", layer, bound, typing, modes);
    }
    Ok(())
}

fn play(keymap: Keymap, path: &Path, config: &Config, realtime: bool, offline: bool) -> Result<()> {
    let holds = script::load(path)?;
    info!("Playing {} lines", holds.len());

    let tick = if realtime { Some(Duration::from_millis(config.tick_ms.into())) } else { None };
    let (buttons, mut pacer) = script::player(holds, tick);
    let output = if offline { sink::PrintSink::busy() } else { sink::PrintSink::default() };

    let mut chorder = Chorder::new(buttons, output, sink::Console::default(), keymap, config);
    if let Err(err) = chorder.run(&mut pacer) {
        warn!("Keys may be left down: {}", err);
    }

    let (output, console) = chorder.into_parts();
    println!("{} reports, {} signals", output.reports, console.signals.len());
    Ok(())
}
