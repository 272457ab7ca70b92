use minesweep_core::{Coord, Coord2, DifficultyMenu, MinefieldEngine, TileState};
use web_time::Instant;

use crate::session::{GameSession, SessionState};

/// Three character counter like on the classic seven segment displays.
pub(crate) fn format_for_counter(num: i32) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

pub(crate) fn tile_glyph(engine: &MinefieldEngine, coords: Coord2) -> char {
    if engine.triggered_mine() == Some(coords) {
        return 'X';
    }

    let lost = engine.exploded();
    let mine_shown = engine.shows_mine_at(coords);
    match engine.tile_at(coords).state() {
        TileState::Flagged if lost && !mine_shown => 'x',
        TileState::Flagged => 'F',
        TileState::Hidden | TileState::PartiallyRevealed if lost && mine_shown => '*',
        TileState::Hidden => '#',
        TileState::PartiallyRevealed => '.',
        TileState::Revealed => match engine.adjacent_mines_at(coords) {
            Some(count @ 1..=8) => char::from(b'0' + count),
            _ => ' ',
        },
    }
}

pub(crate) fn render_menu(menu: &DifficultyMenu) -> String {
    let mut out = String::from("Choose a difficulty:\n");
    for (index, difficulty) in menu.options().iter().enumerate() {
        let config = difficulty.config();
        let marker = if menu.highlighted() == Some(index) { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} {}. {:<12} {}x{}, {} mines\n",
            index + 1,
            difficulty.name(),
            config.width(),
            config.height(),
            config.mines
        ));
    }
    out
}

pub(crate) fn render_board(engine: &MinefieldEngine) -> String {
    let (width, height) = engine.size();
    let mut out = String::from("    ");
    out.extend((0..width).map(|x| char::from(b'0' + x % 10)));
    out.push('\n');

    for y in 0..height {
        out.push_str(&format!("{y:>3} "));
        out.extend((0..width).map(|x: Coord| tile_glyph(engine, (x, y))));
        out.push('\n');
    }
    out
}

/// Everything shown after each command.
pub(crate) fn render_session(session: &GameSession, now: Instant) -> String {
    let engine = match (session.state(), session.engine()) {
        (SessionState::InMenu, _) | (_, None) => return render_menu(session.menu()),
        (_, Some(engine)) => engine,
    };

    let face = match session.state() {
        SessionState::Won => "B)",
        SessionState::Lost => "X(",
        _ if engine.armed_tile().is_some() => ":O",
        _ => ":)",
    };
    let elapsed = session.elapsed_secs(now);
    let mut out = format!(
        "{} {face} {}\n",
        format_for_counter(session.mines_left()),
        format_for_counter(elapsed.min(i32::MAX as u32) as i32)
    );
    out.push_str(&render_board(engine));

    match session.state() {
        SessionState::Won => out.push_str(&format!(
            "Cleared in {elapsed}s with {} moves, n for another round\n",
            session.move_count()
        )),
        SessionState::Lost => out.push_str("Boom, n for another round\n"),
        _ => {}
    }
    out
}
