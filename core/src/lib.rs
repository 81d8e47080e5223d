//! Deterministic core engine for a 2048-style sliding-tile game.
//!
//! The crate is a pure state machine: a [`Board`] of numbered tiles, a
//! [`GameEngine`] that resolves directional moves (slide, merge, spawn)
//! against it, and a [`GameObserver`] that receives one callback per
//! effect so an external renderer can animate the outcome. Rendering,
//! input handling, and persistence are for the caller.
//!
//! Move requests are queued as plain data and drained one at a time, so
//! rapid repeated input can never interleave two moves:
//!
//! ```
//! use tidetiles_core::{Direction, GameConfig, GameEngine, RandomSpawner};
//!
//! let mut engine = GameEngine::new(GameConfig::new(4, 2048), RandomSpawner::new(7), ());
//! engine.new_game(0);
//! engine.queue_move(Direction::Left);
//! engine.queue_move(Direction::Up);
//! engine.process_queue();
//! assert!(engine.board().tile_count() >= 2);
//! ```
//!
//! All randomness sits behind the [`SpawnPolicy`] trait; seed a
//! [`RandomSpawner`] (or script your own policy) to make every game
//! reproducible.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use spawn::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod spawn;
mod tile;
mod types;

/// Fixed per-game parameters, set once at engine construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub dimension: Coord,
    /// Tile value that counts as a win.
    pub threshold: Value,
}

impl GameConfig {
    pub const fn new_unchecked(dimension: Coord, threshold: Value) -> Self {
        Self {
            dimension,
            threshold,
        }
    }

    /// Clamps to the supported minimums: boards are at least 2x2 and the
    /// winning tile is at least 8.
    pub fn new(dimension: Coord, threshold: Value) -> Self {
        Self::new_unchecked(dimension.max(2), threshold.max(8))
    }

    pub const fn total_cells(&self) -> usize {
        let d = self.dimension as usize;
        d * d
    }
}
