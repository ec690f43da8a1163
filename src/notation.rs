//! Text notation for moves (`O4`, `B3`, `M5`) and scripted replays of
//! comma-separated move lists.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{MoveError, NotationError};
use crate::game::{DiscKind, Game, GameOutcome};

/// A disc kind and a 0-based column. In text the column is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: DiscKind,
    pub column: usize,
}

impl Move {
    pub fn new(kind: DiscKind, column: usize) -> Self {
        Move { kind, column }
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let kind = match letter.to_ascii_uppercase() {
            // a zero is a common slip for the letter O
            'O' | '0' => DiscKind::Ordinary,
            'B' => DiscKind::Boring,
            'M' => DiscKind::Magnetic,
            other => return Err(NotationError::UnknownKind(other)),
        };

        let number: usize = chars
            .as_str()
            .parse()
            .map_err(|_| NotationError::BadColumn(s.to_string()))?;
        let column = number
            .checked_sub(1)
            .ok_or_else(|| NotationError::BadColumn(s.to_string()))?;
        Ok(Move { kind, column })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.kind {
            DiscKind::Ordinary => 'O',
            DiscKind::Boring => 'B',
            DiscKind::Magnetic => 'M',
        };
        write!(f, "{}{}", letter, self.column + 1)
    }
}

/// Parse a comma-separated move list. Blank entries are skipped.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, NotationError> {
    sequence
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// What happened while replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayReport {
    /// Moves that were placed
    pub applied: usize,
    /// Moves the engine refused; these did not use up a turn
    pub rejected: Vec<(Move, MoveError)>,
    /// Set if the replay ended the game
    pub outcome: Option<GameOutcome>,
}

/// Play `sequence` on `game`, alternating turns after every placed move.
///
/// Stops at the first win or draw; later moves are ignored. The whole
/// sequence is parsed before any move is made.
pub fn replay(game: &mut Game, sequence: &str) -> Result<ReplayReport, NotationError> {
    let moves = parse_moves(sequence)?;
    let mut report = ReplayReport::default();

    for mv in moves {
        match game.play(mv.kind, mv.column) {
            Ok(placement) => {
                report.applied += 1;
                if let Some(outcome) = game.outcome_of(&placement) {
                    report.outcome = Some(outcome);
                    break;
                }
                game.switch_player();
            }
            Err(err) => {
                debug!("replay move {mv} rejected: {err}");
                report.rejected.push((mv, err));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameMode, Owner};

    fn new_game() -> Game {
        Game::new(6, 7, GameMode::HumanVsHuman).unwrap()
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("O4".parse::<Move>(), Ok(Move::new(DiscKind::Ordinary, 3)));
        assert_eq!("o1".parse::<Move>(), Ok(Move::new(DiscKind::Ordinary, 0)));
        assert_eq!("04".parse::<Move>(), Ok(Move::new(DiscKind::Ordinary, 3)));
        assert_eq!(" b3 ".parse::<Move>(), Ok(Move::new(DiscKind::Boring, 2)));
        assert_eq!("M12".parse::<Move>(), Ok(Move::new(DiscKind::Magnetic, 11)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(NotationError::Empty));
        assert_eq!("X4".parse::<Move>(), Err(NotationError::UnknownKind('X')));
        assert_eq!(
            "O".parse::<Move>(),
            Err(NotationError::BadColumn("O".into()))
        );
        assert_eq!(
            "B0".parse::<Move>(),
            Err(NotationError::BadColumn("B0".into()))
        );
        assert_eq!(
            "Mx".parse::<Move>(),
            Err(NotationError::BadColumn("Mx".into()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for text in ["O1", "B7", "M3"] {
            let mv: Move = text.parse().unwrap();
            assert_eq!(mv.to_string(), text);
        }
    }

    #[test]
    fn test_parse_moves_skips_blanks() {
        let moves = parse_moves("O1, ,B2,,M3,").unwrap();
        assert_eq!(moves.len(), 3);
        assert!(parse_moves("O1,Q2").is_err());
    }

    #[test]
    fn test_replay_horizontal_win() {
        let mut game = new_game();
        let report = replay(&mut game, "O2,O2,O3,O3,O4,O4,O5,O6").unwrap();
        assert_eq!(report.applied, 7);
        assert!(report.rejected.is_empty());
        assert_eq!(report.outcome, Some(GameOutcome::Winner(Owner::PlayerOne)));
        // the eighth move was never played
        assert_eq!(game.cell(0, 5), Some(Cell::Empty));
    }

    #[test]
    fn test_replay_rejected_move_keeps_turn() {
        let mut game = new_game();
        let report = replay(&mut game, "O1,O9,O1").unwrap();
        assert_eq!(report.applied, 2);
        assert_eq!(
            report.rejected,
            vec![(
                Move::new(DiscKind::Ordinary, 8),
                MoveError::InvalidColumn {
                    column: 8,
                    columns: 7
                }
            )]
        );
        assert_eq!(game.cell(1, 0), Some(Cell::ordinary(Owner::PlayerTwo)));
        assert_eq!(game.current_player().id(), Owner::PlayerOne);
        assert_eq!(report.outcome, None);
    }

    #[test]
    fn test_replay_special_discs() {
        let mut game = new_game();
        let report = replay(&mut game, "O3,O3,O3,M3,B3").unwrap();
        assert_eq!(report.applied, 5);
        // the boring disc leaves only P1's marker in column 3
        assert_eq!(game.grid().height(2), 1);
        assert_eq!(game.cell(0, 2), Some(Cell::ordinary(Owner::PlayerOne)));
        assert_eq!(game.player(Owner::PlayerOne).remaining(DiscKind::Boring), 1);
        assert_eq!(game.player(Owner::PlayerTwo).remaining(DiscKind::Magnetic), 1);
    }

    #[test]
    fn test_replay_bad_token_plays_nothing() {
        let mut game = new_game();
        let before = game.clone();
        assert!(replay(&mut game, "O1,Z2").is_err());
        assert_eq!(game, before);
    }
}
