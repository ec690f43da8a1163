use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::{DiscKind, Game};
use crate::notation::Move;

/// One-ply greedy player: takes an immediate win with an ordinary disc if
/// there is one, otherwise plays a random disc kind into a random column.
pub struct GreedyAgent<R = StdRng> {
    rng: R,
}

impl GreedyAgent<StdRng> {
    /// Deterministic agent for tests and replays
    pub fn seeded(seed: u64) -> Self {
        GreedyAgent::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        GreedyAgent::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> GreedyAgent<R> {
    pub fn new(rng: R) -> Self {
        GreedyAgent { rng }
    }

    /// First open column where an ordinary disc wins on the spot
    pub fn winning_column(game: &Game) -> Option<usize> {
        let player = game.current_player();
        if !player.has_disc(DiscKind::Ordinary) {
            return None;
        }
        game.open_columns().into_iter().find(|&col| {
            game.simulate_drop(player.id(), DiscKind::Ordinary, col)
                .is_ok_and(|placement| placement.win)
        })
    }
}

impl<R: Rng> Agent for GreedyAgent<R> {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        if let Some(column) = Self::winning_column(game) {
            return Some(Move::new(DiscKind::Ordinary, column));
        }

        let kinds = game.current_player().available_kinds();
        let &kind = kinds.choose(&mut self.rng)?;
        let column = match kind {
            // boring discs may go into a full column
            DiscKind::Boring => self.rng.random_range(0..game.columns()),
            _ => *game.open_columns().choose(&mut self.rng)?,
        };
        Some(Move::new(kind, column))
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, GameOutcome, Owner};
    use crate::save::{SavedGame, SavedPlayer};

    fn new_game() -> Game {
        Game::new(6, 7, GameMode::HumanVsComputer).unwrap()
    }

    /// A 6x7 game with every cell taken and the given inventory for both players
    fn full_board(ordinary: u32, boring: u32, magnetic: u32) -> Game {
        let player = |id| SavedPlayer {
            id,
            is_computer_controlled: true,
            ordinary,
            boring,
            magnetic,
        };
        let saved = SavedGame {
            rows: 6,
            columns: 7,
            mode: GameMode::HumanVsComputer,
            board: ["XOXOXOX", "XOXOXOX", "OXOXOXO", "OXOXOXO", "XOXOXOX", "XOXOXOX"]
                .map(String::from)
                .to_vec(),
            players: vec![player(Owner::PlayerOne), player(Owner::PlayerTwo)],
            current_player_index: 0,
        };
        Game::try_from(saved).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut game = new_game();
        // P1 builds three in column 4, P2 plays elsewhere
        for _ in 0..3 {
            game.play(DiscKind::Ordinary, 4).unwrap();
            game.switch_player();
            game.play(DiscKind::Ordinary, 0).unwrap();
            game.switch_player();
        }
        assert_eq!(GreedyAgent::<StdRng>::winning_column(&game), Some(4));

        let mut agent = GreedyAgent::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                agent.select_move(&game),
                Some(Move::new(DiscKind::Ordinary, 4))
            );
        }
    }

    #[test]
    fn test_look_ahead_does_not_touch_game() {
        let game = new_game();
        let before = game.clone();
        let mut agent = GreedyAgent::seeded(1);
        agent.select_move(&game);
        assert_eq!(game, before);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let game = new_game();
        let mut a = GreedyAgent::seeded(42);
        let mut b = GreedyAgent::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.select_move(&game), b.select_move(&game));
        }
    }

    #[test]
    fn test_random_moves_are_legal() {
        let mut game = new_game();
        for col in [0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2] {
            game.play(DiscKind::Ordinary, col).unwrap();
            game.switch_player();
        }
        let mut agent = GreedyAgent::seeded(3);
        for _ in 0..200 {
            let mv = agent.select_move(&game).unwrap();
            assert!(mv.column < game.columns());
            if mv.kind != DiscKind::Boring {
                assert!(!game.is_column_full(mv.column), "{mv} is illegal");
            }
            assert!(game
                .simulate_drop(Owner::PlayerOne, mv.kind, mv.column)
                .is_ok());
        }
    }

    #[test]
    fn test_full_board_leaves_only_boring() {
        let game = full_board(5, 2, 2);
        assert!(game.board_full());
        let mut agent = GreedyAgent::seeded(9);
        let moves: Vec<_> = (0..50).filter_map(|_| agent.select_move(&game)).collect();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.kind == DiscKind::Boring));
    }

    #[test]
    fn test_no_move_without_discs_or_columns() {
        let mut agent = GreedyAgent::seeded(5);
        assert_eq!(agent.select_move(&full_board(0, 0, 0)), None);
        assert_eq!(agent.select_move(&full_board(3, 0, 1)), None);
    }

    #[test]
    fn test_plays_a_full_game() {
        let mut game = new_game();
        let mut agents = [GreedyAgent::seeded(11), GreedyAgent::seeded(12)];
        let mut outcome = None;

        for _ in 0..500 {
            let seat = game.current_player_index();
            let Some(mv) = agents[seat].select_move(&game) else {
                break;
            };
            let placement = game.play(mv.kind, mv.column).unwrap();
            outcome = game.outcome_of(&placement);
            if outcome.is_some() {
                break;
            }
            game.switch_player();
        }

        match outcome {
            Some(GameOutcome::Winner(owner)) => {
                let placement_owner = game.current_player().id();
                assert_eq!(owner, placement_owner);
            }
            Some(GameOutcome::Draw) => assert!(game.board_full()),
            None => assert!(game.current_player().available_kinds().is_empty()),
        }
    }
}
