//! Core game logic - pure, deterministic, and rendering-agnostic.
//!
//! This crate contains the whole falling-block engine: board rules, piece
//! geometry, scoring, and the game state machine. It has **zero
//! dependencies** on UI, timers, or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a synchronous method on plain data
//! - **Portable**: hosts supply their own schedulers and renderers
//!
//! # Module structure
//!
//! - [`board`]: the settled-cell grid; collision and line-clear authority
//! - [`piece`]: tetromino shapes, rotation, and movement
//! - [`rng`]: seedable uniform piece selection
//! - [`scoring`]: classic line-clear scoring, leveling, gravity intervals
//! - [`engine`]: piece lifecycle, game flow, and the command surface
//! - [`snapshot`]: owned read-only state copies for renderers
//!
//! # Game rules
//!
//! - Classic scoring: {40, 100, 300, 1200} base points x level
//! - Level = lines/10 + 1; gravity = max(100, 1000 - (level-1)*100) ms
//! - Rotation is a plain 90-degree matrix around the piece center with no
//!   wall kicks; a blocked rotation fails in place
//! - Pieces spawn at the top middle and may extend above the visible board
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//!
//! let mut game = GameEngine::new(12345);
//! game.start();
//!
//! game.move_left();
//! game.rotate(true);
//! game.hard_drop();
//!
//! assert!(game.score() > 0); // hard drops award points
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, GeometryError};
pub use engine::{GameEngine, SettleEvent};
pub use piece::Tetromino;
pub use rng::SimpleRng;
pub use scoring::{drop_points, gravity_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
