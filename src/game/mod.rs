//! Core game logic: the grid, player inventories, and the drop rules for
//! ordinary, boring and magnetic discs.

mod board;
mod player;
mod state;

pub use board::{Cell, DiscKind, Grid, MAX_DIMENSION, MIN_COLUMNS, MIN_ROWS};
pub use player::{Owner, Player, SPECIAL_DISCS_PER_KIND};
pub use state::{check_dimensions, Game, GameMode, GameOutcome, Placement, CONNECT_N};
