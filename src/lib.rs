pub mod block;
pub mod config;
pub mod container;
pub mod direction;
pub mod edit_log;
pub mod element;
pub mod error;

pub use block::Block;
pub use config::{Config, Palette};
pub use container::Container;
pub use direction::{Direction, BLOCK_SIZE};
pub use edit_log::{Edit, EditLog};
pub use element::{Element, EMPTY, FLOOR, WALL};
pub use error::{BlockError, BlockResult};
