//! Autoplay driver - paced execution of a chosen placement.
//!
//! The driver never teleports a piece. Each [`AutoplayDriver::step`] call
//! issues at most one ordinary engine command (rotate, one-cell shift,
//! soft drop, or the final hard drop), re-deriving the next action by
//! comparing the live piece against the plan. This paces the AI's play for
//! spectators; the search itself would happily place pieces instantly.

use blockfall_core::GameEngine;

use crate::finder::{find_best_move, MovePlan};

/// Soft drops issued after alignment, before the hard drop is allowed.
const PACING_SOFT_DROPS: u8 = 2;

/// Minimum anchor row the piece must reach before hard-dropping, so the
/// spectator sees it fall.
const MIN_FALL_ROWS: i8 = 3;

/// Drives a [`GameEngine`] through the same command surface a human uses.
///
/// The host schedules `step` on its own cadence (see
/// [`GameEngine::autoplay_interval_ms`]); the driver is a no-op whenever
/// the engine is paused, over, or has autoplay disabled.
#[derive(Debug, Default)]
pub struct AutoplayDriver {
    plan: Option<MovePlan>,
    /// Piece id the plan was computed for; a new id invalidates the plan.
    plan_piece: u32,
    soft_drops: u8,
}

impl AutoplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The placement currently being executed, if any.
    pub fn plan(&self) -> Option<&MovePlan> {
        self.plan.as_ref()
    }

    /// Issue at most one command toward the planned placement.
    ///
    /// Returns whether a command was issued. A fresh piece triggers a new
    /// search before the first command.
    pub fn step(&mut self, game: &mut GameEngine) -> bool {
        if !game.autoplay_enabled() || !game.started() || game.paused() || game.game_over() {
            return false;
        }
        let Some(piece) = game.current().copied() else {
            return false;
        };

        if self.plan.is_none() || self.plan_piece != game.piece_id() {
            self.plan = find_best_move(&piece, game.board());
            self.plan_piece = game.piece_id();
            self.soft_drops = 0;
        }

        let Some(plan) = self.plan else {
            // No legal placement anywhere: drop straight down and let the
            // engine decide whether that ends the game.
            game.hard_drop();
            return true;
        };

        if piece.rotation() != plan.rotation {
            // A rotation blocked in place stays blocked until gravity or a
            // shift frees it; the driver retries on the next step.
            game.rotate(true);
        } else if piece.x < plan.column {
            game.move_right();
        } else if piece.x > plan.column {
            game.move_left();
        } else if self.soft_drops < PACING_SOFT_DROPS || piece.y < MIN_FALL_ROWS {
            self.soft_drops = self.soft_drops.saturating_add(1);
            game.move_down();
        } else {
            game.hard_drop();
        }
        true
    }
}
