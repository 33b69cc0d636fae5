use crate::error::{BlockError, BlockResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of a block
pub const BLOCK_SIZE: usize = 3;

/// One of the nine positions inside a 3x3 block (eight compass points plus center)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// (row, col) of each direction, indexed by discriminant
const DIRECTION_TO_INDEX: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

const INDEX_TO_DIRECTION: [[Direction; BLOCK_SIZE]; BLOCK_SIZE] = [
    [Direction::NorthWest, Direction::North, Direction::NorthEast],
    [Direction::West, Direction::Center, Direction::East],
    [Direction::SouthWest, Direction::South, Direction::SouthEast],
];

impl Direction {
    /// All directions in row-major order
    pub const ALL: [Direction; 9] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::Center,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Direction occupying cell (row, col) of a block
    pub fn from_index(row: usize, col: usize) -> BlockResult<Self> {
        if row >= BLOCK_SIZE || col >= BLOCK_SIZE {
            return Err(BlockError::IndexOutOfRange { row, col });
        }
        Ok(INDEX_TO_DIRECTION[row][col])
    }

    /// Cell (row, col) this direction occupies in a block
    pub fn index(self) -> (usize, usize) {
        DIRECTION_TO_INDEX[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::NorthWest => "NORTH_WEST",
            Direction::North => "NORTH",
            Direction::NorthEast => "NORTH_EAST",
            Direction::West => "WEST",
            Direction::Center => "CENTER",
            Direction::East => "EAST",
            Direction::SouthWest => "SOUTH_WEST",
            Direction::South => "SOUTH",
            Direction::SouthEast => "SOUTH_EAST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
