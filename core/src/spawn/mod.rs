use crate::*;
pub use random::*;

mod random;

/// Source of the randomness behind tile spawning. The engine never
/// touches an RNG directly, so tests can script every placement.
pub trait SpawnPolicy {
    /// Index of the chosen cell within the current row-major list of
    /// empty cells. `empty_count` is always at least 1.
    fn choose_slot(&mut self, empty_count: usize) -> usize;

    /// Value of the next auto-spawned tile.
    fn choose_value(&mut self) -> Value;
}
