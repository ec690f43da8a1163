use crate::game::Game;
use crate::notation::Move;

/// Universal interface for computer players.
pub trait Agent {
    /// Pick a move for the current player, or `None` if no legal move exists.
    ///
    /// Implementations only read the game; any look-ahead goes through
    /// [`Game::simulate_drop`].
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
