use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Token identifying one queued move request. Returned by
/// [`GameEngine::queue_move`] and echoed back through
/// [`GameObserver::move_completed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveId(u64);

/// Receiver for the effect stream of an in-flight move. One method per
/// effect kind; all default to no-ops so callers override only what
/// they render. Effects arrive in a stable order: line by line in
/// leading-edge scan order, source order within a line, then the score
/// update, then the spawned tile, then the completion notification.
pub trait GameObserver {
    fn tile_moved(&mut self, _from: Coord2, _to: Coord2, _value: Value) {}

    fn tiles_merged(&mut self, _from: (Coord2, Coord2), _to: Coord2, _new_value: Value) {}

    fn tile_inserted(&mut self, _at: Coord2, _value: Value) {}

    fn score_changed(&mut self, _new_score: Score) {}

    /// Delivered exactly once per queued move, in submission order.
    fn move_completed(&mut self, _id: MoveId, _changed: bool) {}
}

/// Observer that ignores every effect.
impl GameObserver for () {}

#[derive(Copy, Clone, Debug)]
struct MoveRequest {
    id: MoveId,
    direction: Direction,
}

/// Slide/merge outcome of one line, positions counted from the leading
/// edge. Only actual changes are recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LineOp {
    Slide {
        from: usize,
        to: usize,
        value: Value,
    },
    Merge {
        from: (usize, usize),
        to: usize,
        new_value: Value,
    },
}

/// Resolves one line toward its leading edge (index 0): equal neighbors
/// merge once into a doubled tile, pairing leading-edge-first, and
/// everything else slides into the next free slot. Returns the new line
/// contents plus the ops in source order.
fn resolve_line(cells: &[Cell]) -> (Vec<Cell>, Vec<LineOp>) {
    let tiles: Vec<(usize, Value)> = cells
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.value().map(|value| (i, value)))
        .collect();

    let mut out = vec![Cell::Empty; cells.len()];
    let mut ops = Vec::new();
    let mut dest = 0;
    let mut i = 0;
    while i < tiles.len() {
        let (src, value) = tiles[i];
        if let Some(&(next_src, next_value)) = tiles.get(i + 1) {
            if value == next_value {
                let new_value = value + next_value;
                out[dest] = Cell::Tile(new_value);
                ops.push(LineOp::Merge {
                    from: (src, next_src),
                    to: dest,
                    new_value,
                });
                dest += 1;
                i += 2;
                continue;
            }
        }
        out[dest] = Cell::Tile(value);
        if src != dest {
            ops.push(LineOp::Slide {
                from: src,
                to: dest,
                value,
            });
        }
        dest += 1;
        i += 1;
    }
    (out, ops)
}

/// The move engine: sole mutator of the board. Requests enter through
/// [`queue_move`](Self::queue_move) and are drained strictly in
/// submission order by [`process_queue`](Self::process_queue); at most
/// one move mutates the board at any instant.
pub struct GameEngine<O, S = RandomSpawner> {
    config: GameConfig,
    board: Board,
    score: Score,
    spawner: S,
    observer: O,
    queue: VecDeque<MoveRequest>,
    next_id: u64,
    in_flight: bool,
}

impl<O: GameObserver, S: SpawnPolicy> GameEngine<O, S> {
    pub fn new(config: GameConfig, spawner: S, observer: O) -> Self {
        Self {
            board: Board::new(config.dimension),
            config,
            score: 0,
            spawner,
            observer,
            queue: VecDeque::new(),
            next_id: 0,
            in_flight: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn pending_moves(&self) -> usize {
        self.queue.len()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Enqueues a move request. Never blocks, drops, or reorders; the
    /// request runs when it reaches the front of the queue during
    /// [`process_queue`](Self::process_queue).
    pub fn queue_move(&mut self, direction: Direction) -> MoveId {
        let id = MoveId(self.next_id);
        self.next_id += 1;
        self.queue.push_back(MoveRequest { id, direction });
        id
    }

    /// Drains pending requests, oldest first. Each request's full effect
    /// sequence and its completion notification are delivered before the
    /// next request starts; a nested call while a move is in flight
    /// returns immediately and leaves the drain to the outer loop.
    pub fn process_queue(&mut self) {
        if self.in_flight {
            return;
        }
        self.in_flight = true;
        while let Some(request) = self.queue.pop_front() {
            log::debug!("processing move {:?} ({:?})", request.id, request.direction);
            let changed = self.perform_move(request.direction);
            if changed {
                self.spawn_tile();
            }
            self.observer.move_completed(request.id, changed);
        }
        self.in_flight = false;
    }

    fn perform_move(&mut self, direction: Direction) -> bool {
        let mut changed = false;
        let mut gained: Score = 0;
        for line in direction.lines(self.config.dimension) {
            let cells: Vec<Cell> = line.iter().map(|&coords| self.board[coords]).collect();
            let (new_cells, ops) = resolve_line(&cells);
            if ops.is_empty() {
                continue;
            }
            changed = true;
            for (&coords, &cell) in line.iter().zip(new_cells.iter()) {
                self.board.put(coords, cell);
            }
            for op in ops {
                match op {
                    LineOp::Slide { from, to, value } => {
                        self.observer.tile_moved(line[from], line[to], value);
                    }
                    LineOp::Merge {
                        from,
                        to,
                        new_value,
                    } => {
                        gained += new_value;
                        self.observer
                            .tiles_merged((line[from.0], line[from.1]), line[to], new_value);
                    }
                }
            }
        }
        if gained > 0 {
            self.score += gained;
            self.observer.score_changed(self.score);
        }
        changed
    }

    fn spawn_tile(&mut self) {
        let value = self.spawner.choose_value();
        match self.board.insert_at_random_empty(value, &mut self.spawner) {
            Ok(at) => self.observer.tile_inserted(at, value),
            // Expected at game over; the move still completes normally.
            Err(GameError::BoardFull) => log::debug!("skipping spawn, board is full"),
            Err(err) => log::warn!("skipping spawn: {err}"),
        }
    }

    /// Places `value` in a random empty cell and reports the insertion.
    pub fn insert_tile_at_random_location(&mut self, value: Value) -> Result<Coord2> {
        let at = self.board.insert_at_random_empty(value, &mut self.spawner)?;
        self.observer.tile_inserted(at, value);
        Ok(at)
    }

    /// Clears the board and restarts the score at `initial_score`.
    /// Already-queued moves are kept: an accepted request always runs to
    /// completion, even if that is now against a fresh board.
    pub fn reset_state(&mut self, initial_score: Score) {
        if !self.queue.is_empty() {
            log::debug!("{} queued move(s) survive the reset", self.queue.len());
        }
        self.board.clear();
        self.score = initial_score;
        self.observer.score_changed(self.score);
    }

    /// Resets and places the two starting tiles of value 2.
    pub fn new_game(&mut self, initial_score: Score) {
        self.reset_state(initial_score);
        for _ in 0..2 {
            if let Err(err) = self.insert_tile_at_random_location(2) {
                log::warn!("failed to place starting tile: {err}");
            }
        }
    }

    /// The largest tile, when it has reached the winning threshold.
    pub fn user_has_won(&self) -> Option<Value> {
        let max = self.board.max_tile();
        (max >= self.config.threshold).then_some(max)
    }

    /// True when the board is full and no orthogonally adjacent pair of
    /// equal tiles is left, i.e. no move can change the board.
    pub fn user_has_lost(&self) -> bool {
        let dimension = self.config.dimension;
        for r in 0..dimension {
            for c in 0..dimension {
                let Some(value) = self.board[(r, c)].value() else {
                    return false;
                };
                if c + 1 < dimension && self.board[(r, c + 1)].value() == Some(value) {
                    return false;
                }
                if r + 1 < dimension && self.board[(r + 1, c)].value() == Some(value) {
                    return false;
                }
            }
        }
        true
    }
}
