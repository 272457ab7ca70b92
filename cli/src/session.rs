use anyhow::{Context, Result};
use minesweep_core::{
    ActionOutcome, Difficulty, DifficultyMenu, InputController, InputEvent, MinefieldEngine, StartTile,
};
use web_time::Instant;

/// Valid transitions:
///
/// - any -> Playing
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> InMenu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SessionState {
    InMenu,
    Playing,
    Won,
    Lost,
}

/// One player sitting at the terminal: menu, current minefield, stopwatch and move counter.
#[derive(Debug)]
pub(crate) struct GameSession {
    state: SessionState,
    menu: DifficultyMenu,
    engine: Option<MinefieldEngine>,
    input: InputController,
    start_tile: StartTile,
    seed: u64,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    move_count: u32,
}

impl GameSession {
    pub fn new(seed: u64, start_tile: StartTile) -> Self {
        Self {
            state: SessionState::InMenu,
            menu: DifficultyMenu::new(),
            engine: None,
            input: InputController::new(),
            start_tile,
            seed,
            started_at: None,
            ended_at: None,
            move_count: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn menu(&self) -> &DifficultyMenu {
        &self.menu
    }

    pub fn engine(&self) -> Option<&MinefieldEngine> {
        self.engine.as_ref()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Picks a preset by its zero-based menu index and starts it, from any state like [`Self::start`].
    pub fn choose(&mut self, option: usize) -> Result<()> {
        self.menu.highlight(Some(option));
        let difficulty = self
            .menu
            .select(Some(option))
            .with_context(|| format!("No menu option {}", option + 1))?;
        self.start(difficulty)
    }

    /// Starts a round on `difficulty`, reusing the engine so every round draws from the same seeded sequence.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<()> {
        if let Some(engine) = self.engine.as_mut() {
            engine.reconfigure(difficulty.config())?;
        } else {
            let engine = MinefieldEngine::from_difficulty(difficulty, self.seed)?.with_start_tile(self.start_tile);
            self.engine = Some(engine);
        }
        log::debug!("Starting {difficulty} round");
        self.begin_round();
        Ok(())
    }

    /// Same board dimensions, fresh mines.
    pub fn new_round(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.restart();
            self.begin_round();
        }
    }

    pub fn back_to_menu(&mut self) {
        let previous = self
            .menu
            .selected()
            .and_then(|difficulty| Difficulty::PRESETS.iter().position(|&preset| preset == difficulty));
        self.menu.clear_selection();
        self.menu.highlight(previous);
        self.state = SessionState::InMenu;
    }

    /// Forwards pointer input to the engine while a round is being played.
    pub fn handle(&mut self, event: InputEvent) -> Option<ActionOutcome> {
        if self.state != SessionState::Playing {
            return None;
        }
        let engine = self.engine.as_mut()?;

        let flagged_before = engine.flagged_count();
        let outcome = self.input.handle(engine, event)?;
        let revealed = matches!(outcome, ActionOutcome::Reveal(reveal) if reveal.has_update());
        if !revealed && engine.flagged_count() == flagged_before {
            return Some(outcome);
        }

        let now = Instant::now();
        self.move_count += 1;
        if revealed && self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if engine.exploded() {
            log::info!("Round lost after {} moves", self.move_count);
            self.state = SessionState::Lost;
            self.ended_at = Some(now);
        } else if engine.is_complete() {
            log::info!("Round won after {} moves", self.move_count);
            engine.flag_remaining_mines();
            self.state = SessionState::Won;
            self.ended_at = Some(now);
        }
        Some(outcome)
    }

    /// Whole seconds on the stopwatch, frozen once the round ended.
    pub fn elapsed_secs(&self, now: Instant) -> u32 {
        if let Some(started_at) = self.started_at {
            self.ended_at
                .unwrap_or(now)
                .saturating_duration_since(started_at)
                .as_secs()
                .min(u32::MAX as u64) as u32
        } else {
            0
        }
    }

    pub fn mines_left(&self) -> i32 {
        self.engine
            .as_ref()
            .map(|engine| engine.mines_left() as i32)
            .unwrap_or(0)
    }

    fn begin_round(&mut self) {
        self.state = SessionState::Playing;
        self.input = InputController::new();
        self.started_at = None;
        self.ended_at = None;
        self.move_count = 0;
    }
}

#[cfg(test)]
impl GameSession {
    pub fn with_engine(engine: MinefieldEngine) -> Self {
        let mut session = Self::new(0, engine.start_tile());
        session.engine = Some(engine);
        session.begin_round();
        session
    }
}
