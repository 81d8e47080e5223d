use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tile cells. Holds values and invariant-preserving
/// primitives only; direction and merge semantics live in the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(dimension: Coord) -> Self {
        Self {
            cells: Array2::default((dimension as usize, dimension as usize)),
        }
    }

    pub fn dimension(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let dimension = self.dimension();
        if coords.0 < dimension && coords.1 < dimension {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if cell == Cell::Tile(0) {
            return Err(GameError::InvalidValue);
        }
        self.cells[coords.to_nd_index()] = cell;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Writes a cell whose coordinates were produced by in-bounds line
    /// enumeration.
    pub(crate) fn put(&mut self, coords: Coord2, cell: Cell) {
        self.cells[coords.to_nd_index()] = cell;
    }

    /// Empty-cell coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|((r, c), _)| (r as Coord, c as Coord))
            .collect()
    }

    /// Places `value` in one empty cell, chosen by the spawn policy from
    /// the row-major list of empty cells.
    pub fn insert_at_random_empty(
        &mut self,
        value: Value,
        spawner: &mut impl SpawnPolicy,
    ) -> Result<Coord2> {
        if value == 0 {
            return Err(GameError::InvalidValue);
        }
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(GameError::BoardFull);
        }
        let slot = spawner.choose_slot(empty.len()).min(empty.len() - 1);
        let coords = empty[slot];
        self.cells[coords.to_nd_index()] = Cell::Tile(value);
        Ok(coords)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(|cell| cell.value())
            .map(u64::from)
            .sum()
    }

    pub fn max_tile(&self) -> Value {
        self.cells
            .iter()
            .filter_map(|cell| cell.value())
            .max()
            .unwrap_or(0)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
