use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, ensure};
use minesweep_core::{Difficulty, GridLayout, InputEvent, MouseButtons, Point};

pub(crate) const HELP: &str = "\
Commands:
  r X Y    reveal a tile (press and release)
  p X Y    press a tile without releasing
  u X Y    release over a tile, reveals it if it is the pressed one
  f X Y    toggle a flag
  c X Y    chord, reveals around a number when its flags match
  n        new round
  m        back to the difficulty menu
  1-3      pick a menu option, or type a difficulty such as expert or 20x15:40
  h        this help
  q        quit";

/// Typed tile coordinates, not checked against the board so that misses land outside the grid.
pub(crate) type TilePos = (u16, u16);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(TilePos),
    Press(TilePos),
    Release(TilePos),
    Flag(TilePos),
    Chord(TilePos),
    NewRound,
    Menu,
    /// Zero-based menu option
    Choose(usize),
    Select(Difficulty),
    Help,
    Quit,
}

impl Command {
    /// Pointer events aimed at the middle of the tile, as a mouse would produce them.
    pub fn events(self, layout: GridLayout) -> Vec<InputEvent> {
        let press = |button, pos| InputEvent::Press {
            button,
            point: tile_center(layout, pos),
        };
        let release = |button, pos| InputEvent::Release {
            button,
            point: tile_center(layout, pos),
        };

        match self {
            Self::Reveal(pos) => vec![press(MouseButtons::LEFT, pos), release(MouseButtons::LEFT, pos)],
            Self::Press(pos) => vec![press(MouseButtons::LEFT, pos)],
            Self::Release(pos) => vec![release(MouseButtons::LEFT, pos)],
            Self::Flag(pos) => vec![press(MouseButtons::RIGHT, pos), release(MouseButtons::RIGHT, pos)],
            Self::Chord(pos) => vec![InputEvent::ChordKey {
                point: tile_center(layout, pos),
            }],
            _ => Vec::new(),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let name = words.next().context("Empty command, type h for help")?;

        let at: Option<fn(TilePos) -> Self> = match name {
            "r" => Some(Self::Reveal),
            "p" => Some(Self::Press),
            "u" => Some(Self::Release),
            "f" => Some(Self::Flag),
            "c" => Some(Self::Chord),
            _ => None,
        };
        if let Some(at) = at {
            let mut coord = |axis: &str| -> Result<u16> {
                let word = words.next().with_context(|| format!("Missing {axis} coordinate"))?;
                word.parse()
                    .with_context(|| format!("Invalid {axis} coordinate {word:?}"))
            };
            let pos = (coord("x")?, coord("y")?);
            ensure!(words.next().is_none(), "Too many arguments for {name}");
            return Ok(at(pos));
        }

        match name {
            "n" => Ok(Self::NewRound),
            "m" => Ok(Self::Menu),
            "h" | "?" => Ok(Self::Help),
            "q" => Ok(Self::Quit),
            _ => {
                if let Ok(option) = name.parse::<usize>() {
                    return option
                        .checked_sub(1)
                        .map(Self::Choose)
                        .context("Menu options start at 1");
                }
                s.parse::<Difficulty>()
                    .map(Self::Select)
                    .map_err(|_| anyhow!("Unknown command {name:?}, type h for help"))
            }
        }
    }
}

fn tile_center(layout: GridLayout, (x, y): TilePos) -> Point {
    let GridLayout { origin, tile_size } = layout;
    Point::new(
        origin.x + x as i32 * tile_size + tile_size / 2,
        origin.y + y as i32 * tile_size + tile_size / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::GameConfig;

    #[test]
    fn parses_tile_commands() {
        assert_eq!("r 3 4".parse::<Command>().unwrap(), Command::Reveal((3, 4)));
        assert_eq!("  f 0 12 ".parse::<Command>().unwrap(), Command::Flag((0, 12)));
        assert_eq!("c 1 1".parse::<Command>().unwrap(), Command::Chord((1, 1)));
        assert_eq!("p 2 2".parse::<Command>().unwrap(), Command::Press((2, 2)));
        assert_eq!("u 2 3".parse::<Command>().unwrap(), Command::Release((2, 3)));
    }

    #[test]
    fn parses_menu_and_session_commands() {
        assert_eq!("n".parse::<Command>().unwrap(), Command::NewRound);
        assert_eq!("m".parse::<Command>().unwrap(), Command::Menu);
        assert_eq!("2".parse::<Command>().unwrap(), Command::Choose(1));
        assert_eq!("expert".parse::<Command>().unwrap(), Command::Select(Difficulty::Expert));
        assert_eq!(
            "12x8:20".parse::<Command>().unwrap(),
            Command::Select(Difficulty::Custom(GameConfig::new_unchecked((12, 8), 20)))
        );
    }

    #[test]
    fn reports_malformed_commands() {
        let message = |s: &str| s.parse::<Command>().unwrap_err().to_string();

        assert_eq!(message(""), "Empty command, type h for help");
        assert_eq!(message("r 3"), "Missing y coordinate");
        assert_eq!(message("r -1 3"), "Invalid x coordinate \"-1\"");
        assert_eq!(message("f 1 2 3"), "Too many arguments for f");
        assert_eq!(message("0"), "Menu options start at 1");
        assert_eq!(message("boom"), "Unknown command \"boom\", type h for help");
    }

    #[test]
    fn events_target_tile_centers() {
        let layout = GridLayout::new(Point::new(10, 20), 16);

        assert_eq!(
            Command::Reveal((1, 2)).events(layout),
            [
                InputEvent::Press {
                    button: MouseButtons::LEFT,
                    point: Point::new(34, 60)
                },
                InputEvent::Release {
                    button: MouseButtons::LEFT,
                    point: Point::new(34, 60)
                },
            ]
        );
        assert_eq!(
            Command::Chord((0, 0)).events(layout),
            [InputEvent::ChordKey {
                point: Point::new(18, 28)
            }]
        );
        assert!(Command::Quit.events(layout).is_empty());
    }
}
