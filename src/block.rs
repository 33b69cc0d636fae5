use crate::container::Container;
use crate::direction::{Direction, BLOCK_SIZE};
use crate::error::{BlockError, BlockResult};
use std::fmt;

pub const DEFAULT_SEPARATOR: &str = " ";

/// A 3x3 tile of containers.
///
/// Every cell always holds exactly one container. After construction each
/// container's direction matches its cell; callers that swap containers in
/// are responsible for keeping it that way (see [`Block::set_container`]).
#[derive(Clone, Debug)]
pub struct Block {
    cells: [[Container; BLOCK_SIZE]; BLOCK_SIZE],
    pos_x: i32,
    pos_y: i32,
    /// Revision number - incremented whenever a cell is replaced
    revision: u64,
}

impl Block {
    /// Create a block with an empty container in every cell
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Container::empty(Direction::ALL[row * BLOCK_SIZE + col]))
        });
        Block {
            cells,
            pos_x: 0,
            pos_y: 0,
            revision: 0,
        }
    }

    /// Create a block with wall containers on the border and a floor in the center
    pub fn walled() -> Self {
        let mut block = Self::new();
        for direction in Direction::ALL {
            let container = if direction == Direction::Center {
                Container::floor(direction)
            } else {
                Container::wall(direction)
            };
            block.set_container(container);
        }
        block
    }

    pub fn get_element(&self, row: usize, col: usize) -> BlockResult<&Container> {
        check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    pub fn get_element_mut(&mut self, row: usize, col: usize) -> BlockResult<&mut Container> {
        check_bounds(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// Install `container` in the cell its own direction maps to.
    ///
    /// The target cell is derived from the container's stored direction, not
    /// from the caller, so a container built with the wrong direction lands
    /// in the wrong cell. The previous occupant is dropped. Returns the
    /// (row, col) that was written.
    pub fn set_container(&mut self, container: Container) -> (usize, usize) {
        let (row, col) = container.direction().index();
        self.cells[row][col] = container;
        self.revision += 1;
        (row, col)
    }

    /// Install `container` at (row, col), rejecting it unless its direction maps to that cell.
    ///
    /// On error the block is left untouched.
    pub fn replace_at(&mut self, row: usize, col: usize, container: Container) -> BlockResult<()> {
        let expected = Direction::from_index(row, col)?;
        if container.direction() != expected {
            return Err(BlockError::DirectionMismatch {
                row,
                col,
                found: container.direction(),
            });
        }
        self.cells[row][col] = container;
        self.revision += 1;
        Ok(())
    }

    /// Containers in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.cells.iter().flatten()
    }

    /// One line per row, cells separated by a single space
    pub fn render(&self) -> Vec<String> {
        self.render_with(DEFAULT_SEPARATOR, false)
    }

    /// One line per row, top row first. With `trailing` the separator also follows the last cell.
    pub fn render_with(&self, separator: &str, trailing: bool) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                let glyphs: Vec<&str> = row.iter().map(Container::repr).collect();
                let mut line = glyphs.join(separator);
                if trailing {
                    line.push_str(separator);
                }
                line
            })
            .collect()
    }

    /// Placement tag inside a larger maze; has no effect on the block itself
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.pos_x = x;
        self.pos_y = y;
    }

    pub fn get_position(&self) -> (i32, i32) {
        (self.pos_x, self.pos_y)
    }

    /// Get current block revision number
    pub fn get_revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

fn check_bounds(row: usize, col: usize) -> BlockResult<()> {
    if row >= BLOCK_SIZE || col >= BLOCK_SIZE {
        return Err(BlockError::IndexOutOfRange { row, col });
    }
    Ok(())
}
