use crate::direction::Direction;
use crate::element::{Element, EMPTY, FLOOR, WALL};
use std::sync::Arc;

/// Binds a direction to a shared [`Element`].
///
/// The direction is the container's own state; the glyph table behind it is
/// shared with every other container pointing at the same element.
#[derive(Clone, Debug)]
pub struct Container {
    direction: Direction,
    element: Arc<Element>,
}

impl Container {
    pub fn new(direction: Direction, element: Arc<Element>) -> Self {
        Container { direction, element }
    }

    /// Container bound to the EMPTY element
    pub fn empty(direction: Direction) -> Self {
        Self::new(direction, Arc::clone(&EMPTY))
    }

    /// Container bound to the WALL element
    pub fn wall(direction: Direction) -> Self {
        Self::new(direction, Arc::clone(&WALL))
    }

    /// Container bound to the FLOOR element
    pub fn floor(direction: Direction) -> Self {
        Self::new(direction, Arc::clone(&FLOOR))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn element(&self) -> &Arc<Element> {
        &self.element
    }

    pub fn set_element(&mut self, element: Arc<Element>) {
        self.element = element;
    }

    /// Glyph of the bound element for this container's direction
    pub fn repr(&self) -> &str {
        self.element.repr(self.direction)
    }
}
