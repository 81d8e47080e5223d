use serde::{Deserialize, Serialize};

use crate::Value;

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Tile(Value),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn value(self) -> Option<Value> {
        match self {
            Self::Empty => None,
            Self::Tile(value) => Some(value),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
