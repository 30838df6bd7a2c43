//! Engine module - piece lifecycle, scoring, leveling, and game flow.
//!
//! [`GameEngine`] owns all mutable game state and exposes the command
//! surface the controls layer calls. It is synchronous and timer-agnostic:
//! gravity arrives as [`GameEngine::tick`] calls from whatever scheduler
//! the host runs, and every command is a no-op in states where it does not
//! apply. The flow is `NotStarted -> Running <-> Paused -> GameOver`, with
//! game over left only through [`GameEngine::start`].

use blockfall_types::{Cell, GameAction, PieceKind, AUTOPLAY_STEP_MS};

use crate::board::Board;
use crate::piece::Tetromino;
use crate::rng::SimpleRng;
use crate::scoring::{drop_points, gravity_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};

/// Emitted every time a piece settles; consumed by observers via
/// [`GameEngine::take_last_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    /// Rows cleared by this settle (0..=4).
    pub lines_cleared: u32,
    /// Line-clear points awarded (drop points are not included).
    pub points: u32,
    /// Level after the settle.
    pub level: u32,
}

/// The game engine: board, active/next pieces, and all counters.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    rng: SimpleRng,
    /// Demo/testing hook: overrides random generation of the next piece
    /// until cleared.
    forced_next: Option<PieceKind>,
    score: u32,
    lines: u32,
    level: u32,
    gravity_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Increments on every successful spawn; lets external drivers notice
    /// a fresh piece.
    piece_id: u32,
    autoplay: bool,
    autoplay_ms: u32,
    last_event: Option<SettleEvent>,
}

impl GameEngine {
    /// Create an engine on the default 10x20 board with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create an engine on a custom board.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            current: None,
            next: None,
            rng: SimpleRng::new(seed),
            forced_next: None,
            score: 0,
            lines: 0,
            level: 1,
            gravity_ms: gravity_interval_ms(1),
            started: false,
            paused: false,
            game_over: false,
            piece_id: 0,
            autoplay: false,
            autoplay_ms: AUTOPLAY_STEP_MS,
            last_event: None,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval; the host's gravity timer reads this after
    /// level-ups.
    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Tetromino> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&Tetromino> {
        self.next.as_ref()
    }

    /// Monotonic id of the active piece; bumps on every successful spawn.
    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn autoplay_interval_ms(&self) -> u32 {
        self.autoplay_ms
    }

    /// Enable or disable the autoplay hook. The engine itself does not
    /// search for moves; an external driver does, paced by the host.
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
    }

    /// Pacing interval for autoplay commands (spectator visibility only).
    pub fn set_autoplay_interval_ms(&mut self, interval_ms: u32) {
        self.autoplay_ms = interval_ms.max(1);
    }

    /// Force the kind of subsequently generated pieces (demo/testing
    /// determinism). Persists until cleared with `None`.
    pub fn set_forced_next(&mut self, kind: Option<PieceKind>) {
        self.forced_next = kind;
    }

    /// Take and clear the most recent settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// True while commands should act on the active piece.
    fn running(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Start a new game (also the restart command): empty board, zeroed
    /// counters, level 1, fresh spawn. A next piece left over from the
    /// previous game is reused; otherwise one is generated.
    pub fn start(&mut self) {
        self.board.reset();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.gravity_ms = gravity_interval_ms(self.level);
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.last_event = None;
        if self.next.is_none() {
            self.next = Some(self.generate_piece());
        }
        self.spawn();
    }

    fn generate_piece(&mut self) -> Tetromino {
        let kind = match self.forced_next {
            Some(kind) => kind,
            None => self.rng.piece(),
        };
        Tetromino::new(kind, self.board.width())
    }

    /// Promote next to current and queue a fresh next. If the promoted
    /// piece collides immediately or the top row is already occupied, the
    /// game ends with no live piece.
    fn spawn(&mut self) {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.generate_piece(),
        };
        self.next = Some(self.generate_piece());

        if piece.collides(&self.board) || self.board.top_row_occupied() {
            self.game_over = true;
            self.current = None;
            return;
        }
        self.current = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
    }

    /// Move the active piece one cell left.
    pub fn move_left(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.move_left(&self.board),
            None => false,
        }
    }

    /// Move the active piece one cell right.
    pub fn move_right(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.move_right(&self.board),
            None => false,
        }
    }

    /// Player-commanded descent: scores one point per cell; a blocked
    /// down-move settles the piece instead of being a no-op.
    pub fn move_down(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if piece.move_down(&self.board) {
            self.score += drop_points(1, false);
            true
        } else {
            self.settle_piece();
            false
        }
    }

    /// Rotate the active piece; fails in place when blocked (no kicks).
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.running() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.rotate(&self.board, clockwise),
            None => false,
        }
    }

    /// Drop the active piece to rest, score three points per cell fallen,
    /// and settle immediately. Returns the cells moved.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.running() {
            return 0;
        }
        let Some(piece) = self.current.as_mut() else {
            return 0;
        };
        let moved = piece.drop_to_rest(&self.board);
        self.score += drop_points(moved, true);
        self.settle_piece();
        moved
    }

    /// Gravity step: one down-move, settling on contact. Scores nothing.
    /// No-op unless running.
    pub fn tick(&mut self) {
        if !self.running() {
            return;
        }
        let Some(piece) = self.current.as_mut() else {
            return;
        };
        if !piece.move_down(&self.board) {
            self.settle_piece();
        }
    }

    /// Commit the active piece to the board, apply line-clear scoring and
    /// leveling, record the settle event, and spawn the next piece. The
    /// whole sequence is synchronous; any line-clear presentation delay
    /// belongs to the rendering layer.
    fn settle_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        let cleared = self.board.settle(piece.kind, &piece.cells());
        let lines_cleared = cleared.len() as u32;

        let points = line_clear_points(cleared.len(), self.level);
        if lines_cleared > 0 {
            self.score += points;
            self.lines += lines_cleared;
            let new_level = level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.gravity_ms = gravity_interval_ms(self.level);
            }
        }
        self.last_event = Some(SettleEvent {
            lines_cleared,
            points,
            level: self.level,
        });

        self.spawn();
    }

    /// Suspend gravity. Board and piece state are untouched; the host
    /// simply stops calling `tick` (and the autoplay driver goes quiet).
    pub fn pause(&mut self) {
        if self.started && !self.game_over {
            self.paused = true;
        }
    }

    /// Resume from pause at the existing gravity interval.
    pub fn resume(&mut self) {
        if self.started && !self.game_over {
            self.paused = false;
        }
    }

    /// Where the active piece would land if hard-dropped now. Pure query:
    /// works on a copy, the live piece and board are untouched.
    pub fn ghost(&self) -> Option<[(i8, i8); 4]> {
        let mut ghost = *self.current.as_ref()?;
        ghost.drop_to_rest(&self.board);
        Some(ghost.cells())
    }

    /// Owned copy of everything the rendering collaborator reads.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            active: self.current.as_ref().map(ActiveSnapshot::from),
            ghost: self.ghost(),
            next: self.next.as_ref().map(NextSnapshot::from),
            score: self.score,
            level: self.level,
            lines: self.lines,
            gravity_ms: self.gravity_ms,
            started: self.started,
            paused: self.paused,
            game_over: self.game_over,
            piece_id: self.piece_id,
        }
    }

    /// Apply a controller command. Returns whether the command had effect
    /// (for commands with a success notion).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::HardDrop => {
                if !self.running() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::Pause => {
                self.pause();
                self.paused
            }
            GameAction::Resume => {
                self.resume();
                self.started && !self.paused
            }
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }

    /// Direct cell read for observers (None when off the grid).
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        self.board.get(x, y)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
