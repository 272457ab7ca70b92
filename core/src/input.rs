use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MouseButtons: u8 {
        const LEFT   = 1;
        const RIGHT  = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

/// Discrete pointer input in pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Press { button: MouseButtons, point: Point },
    Release { button: MouseButtons, point: Point },
    /// Keyboard shortcut that chords the tile under the pointer.
    ChordKey { point: Point },
}

/// Turns pointer events into engine calls.
///
/// Left press arms a tile and left release confirms it; right release flags; middle press, both buttons held, or the
/// chord key chord. Once a chord happened, releases neither reveal nor flag until every button is up again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputController {
    held: MouseButtons,
    chording: bool,
}

impl Default for InputController {
    fn default() -> Self {
        Self {
            held: MouseButtons::empty(),
            chording: false,
        }
    }
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> MouseButtons {
        self.held
    }

    /// Applies `event` to `engine`. Returns `None` when the event did not target a tile.
    pub fn handle(&mut self, engine: &mut MinefieldEngine, event: InputEvent) -> Option<ActionOutcome> {
        match event {
            InputEvent::Press { button, point } => {
                self.held.insert(button);
                let chord = button.contains(MouseButtons::MIDDLE)
                    || self.held.contains(MouseButtons::LEFT | MouseButtons::RIGHT);
                if chord {
                    self.chording = true;
                    engine.cancel_press();
                }
                let coords = Self::target(engine, point)?;

                if chord {
                    Some(engine.chord_at(coords))
                } else if button.contains(MouseButtons::LEFT) {
                    Some(engine.press_at(coords).into())
                } else {
                    None
                }
            }
            InputEvent::Release { button, point } => {
                self.held.remove(button);
                let chorded = self.chording;
                if self.held.is_empty() {
                    self.chording = false;
                }
                let target = Self::target(engine, point);

                if button.contains(MouseButtons::LEFT) {
                    match target {
                        Some(coords) if !chorded => Some(engine.release_at(coords).into()),
                        _ => Some(engine.cancel_press().into()),
                    }
                } else if button.contains(MouseButtons::RIGHT) && !chorded {
                    let coords = target?;
                    if engine.tile_at(coords).state().is_flaggable() {
                        Some(engine.toggle_flag(coords).into())
                    } else {
                        Some(MarkOutcome::NoChange.into())
                    }
                } else {
                    None
                }
            }
            InputEvent::ChordKey { point } => {
                let coords = Self::target(engine, point)?;
                engine.cancel_press();
                Some(engine.chord_at(coords))
            }
        }
    }

    fn target(engine: &MinefieldEngine, point: Point) -> Option<Coord2> {
        engine
            .contains_point(point)
            .then(|| engine.coord_from_pixel(point))
    }
}
