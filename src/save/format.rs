use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::game::{
    check_dimensions, Cell, DiscKind, Game, GameMode, Grid, Owner, Player, MAX_DIMENSION,
};

/// Code written for an empty cell.
pub const EMPTY_CODE: char = '.';

/// Player inventory as stored in a save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlayer {
    pub id: Owner,
    pub is_computer_controlled: bool,
    pub ordinary: u32,
    pub boring: u32,
    pub magnetic: u32,
}

/// Top-level save file layout.
///
/// `board` holds one string per row, bottom row first, one code per cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub rows: usize,
    pub columns: usize,
    pub mode: GameMode,
    pub board: Vec<String>,
    pub players: Vec<SavedPlayer>,
    pub current_player_index: usize,
}

/// Single-character code for a cell
pub fn cell_code(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_CODE,
        Cell::Occupied { owner, kind } => {
            let code = match kind {
                DiscKind::Ordinary => 'X',
                DiscKind::Boring => 'B',
                DiscKind::Magnetic => 'M',
            };
            match (owner, kind) {
                (Owner::PlayerOne, _) => code,
                (Owner::PlayerTwo, DiscKind::Ordinary) => 'O',
                (Owner::PlayerTwo, _) => code.to_ascii_lowercase(),
            }
        }
    }
}

/// Inverse of [`cell_code`]. A blank also reads as empty.
pub fn parse_cell_code(code: char) -> Option<Cell> {
    let (owner, kind) = match code {
        EMPTY_CODE | ' ' => return Some(Cell::Empty),
        'X' => (Owner::PlayerOne, DiscKind::Ordinary),
        'B' => (Owner::PlayerOne, DiscKind::Boring),
        'M' => (Owner::PlayerOne, DiscKind::Magnetic),
        'O' => (Owner::PlayerTwo, DiscKind::Ordinary),
        'b' => (Owner::PlayerTwo, DiscKind::Boring),
        'm' => (Owner::PlayerTwo, DiscKind::Magnetic),
        _ => return None,
    };
    Some(Cell::Occupied { owner, kind })
}

impl From<&Player> for SavedPlayer {
    fn from(player: &Player) -> Self {
        SavedPlayer {
            id: player.id(),
            is_computer_controlled: player.is_computer(),
            ordinary: player.remaining(DiscKind::Ordinary),
            boring: player.remaining(DiscKind::Boring),
            magnetic: player.remaining(DiscKind::Magnetic),
        }
    }
}

impl From<&Game> for SavedGame {
    fn from(game: &Game) -> Self {
        let grid = game.grid();
        let board = (0..grid.rows())
            .map(|row| {
                (0..grid.columns())
                    .map(|col| cell_code(grid.at(row, col)))
                    .collect()
            })
            .collect();

        SavedGame {
            rows: grid.rows(),
            columns: grid.columns(),
            mode: game.mode(),
            board,
            players: game.players().iter().map(SavedPlayer::from).collect(),
            current_player_index: game.current_player_index(),
        }
    }
}

impl TryFrom<SavedGame> for Game {
    type Error = SaveError;

    /// Rebuild a game, rejecting anything a real game could not have reached.
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let SavedGame {
            rows,
            columns,
            mode,
            board,
            players,
            current_player_index,
        } = saved;

        // Everything about the size is checked before the grid is allocated
        if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(SaveError::Malformed(format!(
                "a {rows}x{columns} board exceeds the {MAX_DIMENSION}x{MAX_DIMENSION} limit"
            )));
        }
        check_dimensions(rows, columns).map_err(|e| SaveError::Malformed(e.to_string()))?;

        if board.len() != rows {
            return Err(SaveError::Malformed(format!(
                "board has {} rows, expected {rows}",
                board.len()
            )));
        }
        for (row, line) in board.iter().enumerate() {
            let width = line.chars().count();
            if width != columns {
                return Err(SaveError::Malformed(format!(
                    "board row {row} has {width} cells, expected {columns}"
                )));
            }
        }

        let mut grid = Grid::new(rows, columns);
        for (row, line) in board.iter().enumerate() {
            for (col, code) in line.chars().enumerate() {
                let cell = parse_cell_code(code).ok_or_else(|| {
                    SaveError::Malformed(format!(
                        "unknown cell code '{code}' at row {row}, column {col}"
                    ))
                })?;
                grid.set(row, col, cell);
            }
        }
        if let Some((row, col)) = grid.find_gap() {
            return Err(SaveError::Malformed(format!(
                "disc at row {row}, column {col} is floating above an empty cell"
            )));
        }

        let players: [SavedPlayer; 2] = players.try_into().map_err(|v: Vec<SavedPlayer>| {
            SaveError::Malformed(format!("expected 2 players, found {}", v.len()))
        })?;
        let players = restore_players(players)?;

        if current_player_index > 1 {
            return Err(SaveError::Malformed(format!(
                "current player index {current_player_index} is not 0 or 1"
            )));
        }

        Ok(Game::from_parts(grid, players, current_player_index, mode))
    }
}

fn restore_players(saved: [SavedPlayer; 2]) -> Result<[Player; 2], SaveError> {
    let [one, two] = saved;
    Ok([restore_player(0, one)?, restore_player(1, two)?])
}

fn restore_player(index: usize, saved: SavedPlayer) -> Result<Player, SaveError> {
    if Owner::from_index(index) != Some(saved.id) {
        return Err(SaveError::Malformed(format!(
            "player {index} has id {:?}",
            saved.id
        )));
    }
    Ok(Player::new(
        saved.id,
        saved.is_computer_controlled,
        saved.ordinary,
        saved.boring,
        saved.magnetic,
    ))
}
