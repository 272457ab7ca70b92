use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minesweep_core::{CellCount, Coord, Difficulty, StartTile};
use web_time::Instant;

use command::Command;
use session::{GameSession, SessionState};
use settings::Settings;

mod command;
mod render;
mod session;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Preset name or WIDTHxHEIGHT:MINES, skips the menu
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Custom board width
    #[arg(long, requires_all = ["height", "mines"], conflicts_with = "difficulty")]
    width: Option<Coord>,

    /// Custom board height
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<Coord>,

    /// Custom mine count
    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<CellCount>,

    /// How safe the first click is: random, simple-safe or always-zero
    #[arg(long)]
    first_click: Option<StartTile>,

    /// TOML settings file, arguments take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let (Some(width), Some(height), Some(mines)) = (self.width, self.height, self.mines) {
            settings.difficulty = Some(Difficulty::custom((width, height), mines).context("Invalid custom board")?);
        } else if self.difficulty.is_some() {
            settings.difficulty = self.difficulty;
        }
        if let Some(first_click) = self.first_click {
            settings.first_click = first_click;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }
}

fn random_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    let seed = settings.seed.unwrap_or_else(random_seed);
    log::debug!("seed: {seed}");

    let mut session = GameSession::new(seed, settings.first_click);
    if let Some(difficulty) = settings.difficulty {
        session.start(difficulty)?;
    }

    run(&mut session, io::stdin().lock(), io::stdout().lock())
}

/// Reads one command per line until `q` or end of input, redrawing after each.
fn run(session: &mut GameSession, input: impl BufRead, mut out: impl Write) -> Result<()> {
    write!(out, "{}", render::render_session(session, Instant::now()))?;

    for line in input.lines() {
        let line = line.context("Could not read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::trace!("command: {command:?}");

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", command::HELP)?;
                continue;
            }
            Command::Menu => {
                session.back_to_menu();
                Ok(())
            }
            Command::NewRound => {
                session.new_round();
                Ok(())
            }
            Command::Choose(option) => session.choose(option),
            Command::Select(difficulty) => session.start(difficulty),
            command => match session.engine() {
                Some(engine) if session.state() == SessionState::Playing => {
                    for event in command.events(engine.grid().layout()) {
                        session.handle(event);
                    }
                    Ok(())
                }
                _ => Err(anyhow::anyhow!("No round in progress, pick a difficulty or type n")),
            },
        };
        if let Err(err) = result {
            writeln!(out, "{err:#}")?;
            continue;
        }

        write!(out, "{}", render::render_session(session, Instant::now()))?;
    }
    out.flush()?;
    Ok(())
}
