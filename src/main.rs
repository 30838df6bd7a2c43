//! Headless autoplay demo (default binary).
//!
//! Runs the engine under the heuristic driver until game over, with the
//! two host-owned cadences (gravity tick, autoplay step) advanced on a
//! virtual clock. The engine itself is timer-agnostic; this loop is the
//! host from its point of view. Output is plain stdout: one line per line
//! clear, then the final board and totals.

use anyhow::{Context, Result};

use blockfall::autoplay::AutoplayDriver;
use blockfall::core::{GameEngine, GameSnapshot};

/// Virtual milliseconds advanced per loop iteration.
const STEP_MS: u64 = 16;

/// Stop after this many pieces even if the driver never tops out.
const MAX_PIECES: u32 = 1000;

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("seed must be a number, got {arg:?}"))?,
        None => 1,
    };
    run(seed)
}

fn run(seed: u32) -> Result<()> {
    let mut game = GameEngine::new(seed);
    let mut driver = AutoplayDriver::new();
    game.set_autoplay(true);
    game.start();

    println!("blockfall autoplay demo (seed {seed})");

    let mut clock_ms: u64 = 0;
    let mut next_gravity = game.gravity_interval_ms() as u64;
    let mut next_autoplay = game.autoplay_interval_ms() as u64;

    while !game.game_over() && game.piece_id() <= MAX_PIECES {
        clock_ms += STEP_MS;

        // Two independent cadences, each firing one engine call. Pausing
        // or game over makes both calls no-ops, so the timers need no
        // special cases.
        if clock_ms >= next_autoplay {
            driver.step(&mut game);
            next_autoplay = clock_ms + game.autoplay_interval_ms() as u64;
        }
        if clock_ms >= next_gravity {
            game.tick();
            // Re-read the interval: a level-up changes it.
            next_gravity = clock_ms + game.gravity_interval_ms() as u64;
        }

        if let Some(event) = game.take_last_event() {
            if event.lines_cleared > 0 {
                println!(
                    "cleared {} line(s) for {} points (level {}, score {})",
                    event.lines_cleared,
                    event.points,
                    event.level,
                    game.score()
                );
            }
        }
    }

    let snap = game.snapshot();
    print_board(&snap);
    println!(
        "final: score {} / lines {} / level {} / pieces {}",
        snap.score, snap.lines, snap.level, snap.piece_id
    );
    Ok(())
}

/// Dump the settled grid as one character per cell.
fn print_board(snap: &GameSnapshot) {
    for y in 0..snap.height as usize {
        let row: String = (0..snap.width as usize)
            .map(|x| match snap.cells[y * snap.width as usize + x] {
                Some(kind) => kind.as_char(),
                None => '.',
            })
            .collect();
        println!("{row}");
    }
}
