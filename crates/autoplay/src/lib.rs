//! Heuristic autoplay for the blockfall engine.
//!
//! Three pieces, leaf to root:
//!
//! - [`evaluate`]: scores a candidate placement on a scratch board
//!   (surface flatness, holes, completed rows, stack height, open middle)
//! - [`finder`]: exhaustive rotation x column search, arg-max over the
//!   evaluation; pure with respect to the live piece and board
//! - [`driver`]: executes the winning plan one engine command per step,
//!   paced for spectators rather than for the search
//!
//! The driver goes through [`GameEngine`](blockfall_core::GameEngine)'s
//! ordinary command surface, so autoplay and human play are
//! indistinguishable to the engine.

pub mod driver;
pub mod evaluate;
pub mod finder;

pub use driver::AutoplayDriver;
pub use evaluate::evaluate_placement;
pub use finder::{find_best_move, MovePlan};
