//! Game loop - gravity timing, input dispatch, locking and spawning
//!
//! The loop is driven by one external scheduler. Each call to [`GameLoop::tick`]
//! or [`GameLoop::apply_action`] runs to completion: if the active piece froze,
//! it is merged into the board, full rows are cleared and the next piece is
//! spawned before the call returns. Input is therefore never applied to a
//! frozen piece.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::board::Board;
use crate::piece::Piece;
use crate::shuffler::Shuffler;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent, Shape, GRAVITY_INTERVAL_MS};

/// Maximum number of actions buffered between two ticks
pub const INPUT_QUEUE_CAPACITY: usize = 16;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameLoop {
    board: Board,
    active: Piece,
    shuffler: Shuffler,
    gravity_interval_ms: u32,
    /// Time accumulated towards the next gravity step
    elapsed_ms: u32,
    /// Actions queued for the next tick, oldest first
    pending: ArrayVec<GameAction, INPUT_QUEUE_CAPACITY>,
    pieces_spawned: u32,
    lines_cleared: u32,
    /// Set once a piece spawns on top of locked blocks
    topped_out: bool,
}

impl GameLoop {
    /// New game with a seeded shuffler and the default gravity interval
    pub fn new(seed: u64) -> Self {
        Self::with_shuffler(Shuffler::new(seed), GRAVITY_INTERVAL_MS)
    }

    /// New game on an empty board
    pub fn with_shuffler(shuffler: Shuffler, gravity_interval_ms: u32) -> Self {
        Self::with_board(Board::new(), shuffler, gravity_interval_ms)
    }

    /// New game on a prepared board; the first piece comes from the shuffler
    pub fn with_board(board: Board, mut shuffler: Shuffler, gravity_interval_ms: u32) -> Self {
        let active = Piece::spawn(shuffler.next());
        Self::from_parts(board, active, shuffler, gravity_interval_ms)
    }

    /// Assemble a game from explicit parts (replays, tests, puzzles)
    pub fn from_parts(
        board: Board,
        active: Piece,
        shuffler: Shuffler,
        gravity_interval_ms: u32,
    ) -> Self {
        let topped_out = active.overlaps(&board);
        Self {
            board,
            active,
            shuffler,
            gravity_interval_ms,
            elapsed_ms: 0,
            pending: ArrayVec::new(),
            pieces_spawned: 1,
            lines_cleared: 0,
            topped_out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_interval_ms
    }

    /// Time accumulated since the last gravity step
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Pieces spawned so far, including the current one
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    /// Actions waiting for the next tick
    pub fn pending_actions(&self) -> &[GameAction] {
        &self.pending
    }

    /// Advance the clock.
    ///
    /// Once the accumulated time reaches the gravity interval the active piece
    /// drops one row and the accumulator restarts from zero (at most one drop
    /// per call). Any lock is fully resolved before queued actions are
    /// applied, in order. Returns the last lock that happened during the call.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockEvent> {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        let mut last = None;
        if self.elapsed_ms >= self.gravity_interval_ms {
            self.elapsed_ms = 0;
            self.active.move_down(&self.board);
            last = self.settle();
        }

        let pending = std::mem::take(&mut self.pending);
        for action in pending {
            if let Some(event) = self.apply_action(action) {
                last = Some(event);
            }
        }

        last
    }

    /// Buffer an action for the next tick. Returns false (dropping the action)
    /// when the queue is full.
    pub fn queue_action(&mut self, action: GameAction) -> bool {
        match self.pending.try_push(action) {
            Ok(()) => true,
            Err(_) => {
                debug!("input queue full, dropping {}", action.as_str());
                false
            }
        }
    }

    /// Apply an action to the active piece right away and resolve any lock.
    pub fn apply_action(&mut self, action: GameAction) -> Option<LockEvent> {
        match action {
            GameAction::MoveLeft => self.active.move_left(&self.board),
            GameAction::MoveRight => self.active.move_right(&self.board),
            GameAction::MoveDown => self.active.move_down(&self.board),
            GameAction::Rotate => self.active.rotate(),
        };
        self.settle()
    }

    /// Merge a frozen piece, clear rows and spawn its successor.
    fn settle(&mut self) -> Option<LockEvent> {
        if !self.active.is_frozen() {
            return None;
        }

        let shape = self.active.shape();
        let anchor = self.active.anchor();
        let rotation = self.active.rotation();
        let cells = self.active.cells();
        self.board.merge(&cells, shape);

        let rows_cleared = self.board.clear_full_rows() as u32;
        if rows_cleared > 0 {
            self.lines_cleared = self.lines_cleared.saturating_add(rows_cleared);
            info!(
                "cleared {} row(s), {} total",
                rows_cleared, self.lines_cleared
            );
        }

        let next = self.spawn_next();
        debug!(
            "{} locked at anchor ({}, {}) rotation {}, next {}",
            shape.as_str(),
            anchor.col,
            anchor.row,
            rotation.number(),
            next.as_str()
        );

        Some(LockEvent {
            shape,
            cells,
            rows_cleared,
            next,
        })
    }

    fn spawn_next(&mut self) -> Shape {
        let shape = self.shuffler.next();
        self.active = Piece::spawn(shape);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if self.active.overlaps(&self.board) && !self.topped_out {
            self.topped_out = true;
            warn!(
                "{} spawned on top of the stack after {} pieces",
                shape.as_str(),
                self.pieces_spawned
            );
        }
        shape
    }

    /// Start over on an empty board, keeping the shuffler's sequence going.
    pub fn reset(&mut self) {
        self.board.clear();
        self.pending.clear();
        self.elapsed_ms = 0;
        self.pieces_spawned = 0;
        self.lines_cleared = 0;
        self.topped_out = false;
        self.spawn_next();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.into();
        out.topped_out = self.topped_out;
        out.pieces_spawned = self.pieces_spawned;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::with_shuffler(Shuffler::from_entropy(), GRAVITY_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Rotation};

    fn game_with(active: Piece, board: Board) -> GameLoop {
        GameLoop::from_parts(board, active, Shuffler::new(3), GRAVITY_INTERVAL_MS)
    }

    #[test]
    fn new_game_has_a_spawned_piece() {
        let game = GameLoop::new(42);
        assert_eq!(game.active().anchor(), crate::types::SPAWN_ANCHOR);
        assert_eq!(game.active().rotation(), Rotation::One);
        assert_eq!(game.pieces_spawned(), 1);
        assert_eq!(game.board().occupied_count(), 0);
        assert!(!game.topped_out());
    }

    #[test]
    fn gravity_waits_for_the_full_interval() {
        let mut game = game_with(Piece::spawn(Shape::O), Board::new());

        game.tick(GRAVITY_INTERVAL_MS - 1);
        assert_eq!(game.active().anchor(), Cell::new(4, 0));
        assert_eq!(game.elapsed_ms(), GRAVITY_INTERVAL_MS - 1);

        game.tick(1);
        assert_eq!(game.active().anchor(), Cell::new(4, 1));
        assert_eq!(game.elapsed_ms(), 0);
    }

    #[test]
    fn one_drop_per_tick_even_after_a_long_stall() {
        let mut game = game_with(Piece::spawn(Shape::O), Board::new());
        game.tick(GRAVITY_INTERVAL_MS * 5);
        assert_eq!(game.active().anchor(), Cell::new(4, 1));
        assert_eq!(game.elapsed_ms(), 0);
    }

    #[test]
    fn queue_is_bounded() {
        let mut game = GameLoop::new(1);
        for _ in 0..INPUT_QUEUE_CAPACITY {
            assert!(game.queue_action(GameAction::Rotate));
        }
        assert!(!game.queue_action(GameAction::Rotate));
        assert_eq!(game.pending_actions().len(), INPUT_QUEUE_CAPACITY);

        game.tick(0);
        assert!(game.pending_actions().is_empty());
    }

    #[test]
    fn reset_clears_board_and_counters() {
        let mut game = game_with(
            Piece::new(Shape::O, Rotation::One, Cell::new(4, 18)),
            Board::new(),
        );
        assert!(game.apply_action(GameAction::MoveDown).is_some());
        assert_eq!(game.board().occupied_count(), 4);

        game.queue_action(GameAction::MoveLeft);
        game.reset();
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.pieces_spawned(), 1);
        assert!(game.pending_actions().is_empty());
        assert_eq!(game.active().anchor(), crate::types::SPAWN_ANCHOR);
    }
}
