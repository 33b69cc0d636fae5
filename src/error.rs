use crate::direction::Direction;

pub type BlockResult<T> = Result<T, BlockError>;

#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("Cell ({row}, {col}) is outside the 3x3 block.")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("No glyph registered for direction {0}.")]
    MissingGlyph(Direction),
    #[error("Container facing {found} does not belong in cell ({row}, {col}).")]
    DirectionMismatch {
        row: usize,
        col: usize,
        found: Direction,
    },
    #[error("Could not read config file: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Could not parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
