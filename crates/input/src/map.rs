//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the runner should do with one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward the action to the game loop
    Play(GameAction),
    /// Start a new game on an empty board
    Restart,
    /// Leave the game
    Quit,
    /// Unmapped key or key release
    Ignore,
}

impl Command {
    /// Interpret a key event.
    ///
    /// Presses and terminal auto-repeats both act, so holding an arrow key
    /// keeps the piece moving. Releases never do anything.
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Command::Ignore;
        }
        if should_quit(key) {
            return Command::Quit;
        }
        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
            return Command::Restart;
        }
        match handle_key_event(key) {
            Some(action) => Command::Play(action),
            None => Command::Ignore,
        }
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::MoveDown),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(GameAction::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
