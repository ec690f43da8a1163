//! Save files: the JSON layout and reading/writing it on disk.

mod format;
mod store;

pub use format::{cell_code, parse_cell_code, SavedGame, SavedPlayer, EMPTY_CODE};
