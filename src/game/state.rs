use log::debug;
use serde::{Deserialize, Serialize};

use super::board::{Cell, DiscKind, Grid, MIN_COLUMNS, MIN_ROWS};
use super::player::{Owner, Player, SPECIAL_DISCS_PER_KIND};
use crate::error::{GameError, MoveError};

/// Markers in a row needed to win.
pub const CONNECT_N: usize = 4;

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Apply the board size rules without allocating a grid.
///
/// Returns the ordinary disc count each player starts with.
pub fn check_dimensions(rows: usize, columns: usize) -> Result<u32, GameError> {
    if rows < MIN_ROWS || columns < MIN_COLUMNS {
        return Err(GameError::BoardTooSmall { rows, columns });
    }
    if columns < rows {
        return Err(GameError::TooNarrow { rows, columns });
    }

    let cells = rows
        .checked_mul(columns)
        .ok_or(GameError::BoardTooLarge { rows, columns })?;
    let per_player =
        u32::try_from(cells / 2).map_err(|_| GameError::BoardTooLarge { rows, columns })?;
    per_player
        .checked_sub(SPECIAL_DISCS_PER_KIND * 2)
        .ok_or(GameError::NotEnoughCells { rows, columns })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Owner),
    Draw,
}

/// Where a successful drop finally resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub owner: Owner,
    pub kind: DiscKind,
    /// Row the dropper's marker ended up in; 0 for a boring disc
    pub row: usize,
    pub column: usize,
    pub win: bool,
}

/// Full game: grid, both players' inventories and whose turn it is.
///
/// The only mutations are [`Game::drop_disc`] and [`Game::switch_player`].
/// Turn order is left to the caller: a drop does not advance the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    players: [Player; 2],
    current: usize,
    mode: GameMode,
}

impl Game {
    /// Create a new game on an empty `rows` x `columns` board.
    ///
    /// Each player gets half the cells as discs, two of which of each special kind.
    pub fn new(rows: usize, columns: usize, mode: GameMode) -> Result<Self, GameError> {
        let ordinary = check_dimensions(rows, columns)?;

        Ok(Game {
            grid: Grid::new(rows, columns),
            players: [
                Player::starting(Owner::PlayerOne, false, ordinary),
                Player::starting(
                    Owner::PlayerTwo,
                    mode == GameMode::HumanVsComputer,
                    ordinary,
                ),
            ],
            current: 0,
            mode,
        })
    }

    /// Assemble a game from already validated parts
    pub(crate) fn from_parts(
        grid: Grid,
        players: [Player; 2],
        current: usize,
        mode: GameMode,
    ) -> Self {
        debug_assert!(current < 2);
        Game {
            grid,
            players,
            current,
            mode,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Cell at (row, col), or `None` off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Columns off the board count as full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.grid.is_column_full(col)
    }

    /// Columns a non-boring disc can still go into
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn player(&self, owner: Owner) -> &Player {
        &self.players[owner.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Hand the turn to the other player
    pub fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }

    /// True when no column accepts another non-boring disc
    pub fn board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Drop a disc of `kind` for `owner` into `column`.
    ///
    /// Checks, in order: column range, remaining inventory, and a full
    /// column (only boring discs may go into a full one). A rejected drop
    /// changes nothing.
    pub fn drop_disc(
        &mut self,
        owner: Owner,
        kind: DiscKind,
        column: usize,
    ) -> Result<Placement, MoveError> {
        let columns = self.columns();
        if column >= columns {
            return Err(MoveError::InvalidColumn { column, columns });
        }
        if !self.player(owner).has_disc(kind) {
            return Err(MoveError::NoDiscsRemaining(kind));
        }
        let landing = match self.grid.landing_row(column) {
            Some(row) => row,
            None if kind == DiscKind::Boring => self.rows() - 1,
            None => return Err(MoveError::ColumnFull(column)),
        };

        let spent = self.players[owner.index()].spend(kind);
        debug_assert!(spent);

        let row = match kind {
            DiscKind::Ordinary => {
                self.grid.set(landing, column, Cell::ordinary(owner));
                landing
            }
            DiscKind::Boring => {
                self.bore(owner, column, landing);
                0
            }
            DiscKind::Magnetic => {
                self.magnetize(owner, column, landing);
                landing
            }
        };

        let win = self.check_win(row, column, owner);
        debug!(
            "{} dropped {} disc in column {}: resolved at row {}{}",
            owner.name(),
            kind,
            column,
            row,
            if win { ", winning" } else { "" }
        );

        Ok(Placement {
            owner,
            kind,
            row,
            column,
            win,
        })
    }

    /// Drop a disc for whoever's turn it is
    pub fn play(&mut self, kind: DiscKind, column: usize) -> Result<Placement, MoveError> {
        let owner = self.current_player().id();
        self.drop_disc(owner, kind, column)
    }

    /// Dry-run a drop on a copy of the game
    pub fn simulate_drop(
        &self,
        owner: Owner,
        kind: DiscKind,
        column: usize,
    ) -> Result<Placement, MoveError> {
        let mut probe = self.clone();
        probe.drop_disc(owner, kind, column)
    }

    /// How the game stands after `placement`, if it ended
    pub fn outcome_of(&self, placement: &Placement) -> Option<GameOutcome> {
        if placement.win {
            Some(GameOutcome::Winner(placement.owner))
        } else if self.board_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check whether `owner` has `CONNECT_N` in a line through (row, column).
    ///
    /// Only lines through this cell are scanned; a new line can only form
    /// through the disc just placed.
    pub fn check_win(&self, row: usize, column: usize, owner: Owner) -> bool {
        if row >= self.rows() || column >= self.columns() {
            return false;
        }
        if !self.grid.at(row, column).is_owned_by(owner) {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_ray(row, column, dr, dc, owner)
                + self.count_ray(row, column, -dr, -dc, owner);
            count >= CONNECT_N
        })
    }

    /// Contiguous `owner` discs from (row, column), exclusive, stepping by (dr, dc)
    fn count_ray(&self, row: usize, column: usize, dr: isize, dc: isize, owner: Owner) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = column as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows()
            && (c as usize) < self.columns()
            && self.grid.at(r as usize, c as usize).is_owned_by(owner)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Clear the column up to and including `landing`, refunding one ordinary
    /// disc per cleared disc below `landing`, then seat the driller at row 0.
    fn bore(&mut self, owner: Owner, column: usize, landing: usize) {
        let mut refunded = 0;
        for row in 0..landing {
            if let Some(displaced) = self.grid.at(row, column).owner() {
                self.players[displaced.index()].refund_ordinary();
                refunded += 1;
            }
            self.grid.set(row, column, Cell::Empty);
        }
        self.grid.set(landing, column, Cell::Empty);
        self.grid.set(0, column, Cell::ordinary(owner));
        debug!("boring disc cleared column {column}, refunded {refunded} ordinary discs");
    }

    /// Pull the nearest own disc below `landing` up one slot, then leave an
    /// ordinary marker at `landing`.
    fn magnetize(&mut self, owner: Owner, column: usize, landing: usize) {
        let target = (0..landing)
            .rev()
            .find(|&row| self.grid.at(row, column).is_owned_by(owner));
        if let Some(target) = target {
            if target + 1 < landing {
                self.grid.swap(column, target, target + 1);
                debug!("magnetic disc lifted row {target} in column {column}");
            }
        }
        self.grid.set(landing, column, Cell::ordinary(owner));
    }
}
