use crate::direction::Direction;
use crate::error::{BlockError, BlockResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const WALL_GLYPH: &str = "■";
pub const BLANK_GLYPH: &str = " ";

/// Shared, immutable glyph table keyed by direction.
///
/// Elements are the flyweights: one instance is built per kind and every
/// [`Container`](crate::Container) showing that kind holds an `Arc` to it.
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    representations: HashMap<Direction, String>,
}

/// Renders nothing in any direction. Has no CENTER entry.
pub static EMPTY: Lazy<Arc<Element>> = Lazy::new(|| {
    let representations = Direction::ALL
        .iter()
        .filter(|&&d| d != Direction::Center)
        .map(|&d| (d, String::new()))
        .collect();
    Arc::new(Element::new("empty", representations))
});

/// Wall glyph on every edge, blank center
pub static WALL: Lazy<Arc<Element>> =
    Lazy::new(|| Arc::new(Element::bordered("wall", WALL_GLYPH, BLANK_GLYPH)));

/// Blank in every direction
pub static FLOOR: Lazy<Arc<Element>> =
    Lazy::new(|| Arc::new(Element::uniform("floor", BLANK_GLYPH)));

impl Element {
    pub fn new(name: impl Into<String>, representations: HashMap<Direction, String>) -> Self {
        Element {
            name: name.into(),
            representations,
        }
    }

    /// Same glyph in all nine directions
    pub fn uniform(name: impl Into<String>, glyph: &str) -> Self {
        Self::bordered(name, glyph, glyph)
    }

    /// `border` for the eight compass points, `center` for CENTER
    pub fn bordered(name: impl Into<String>, border: &str, center: &str) -> Self {
        let representations = Direction::ALL
            .iter()
            .map(|&d| {
                let glyph = if d == Direction::Center { center } else { border };
                (d, glyph.to_string())
            })
            .collect();
        Self::new(name, representations)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph for `direction`, or `""` when none is registered
    pub fn repr(&self, direction: Direction) -> &str {
        self.representations
            .get(&direction)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Glyph for `direction`, failing with [`BlockError::MissingGlyph`] when none is registered
    pub fn try_repr(&self, direction: Direction) -> BlockResult<&str> {
        self.representations
            .get(&direction)
            .map(String::as_str)
            .ok_or(BlockError::MissingGlyph(direction))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.name)
    }
}
