//! Computer players.

mod agent;
mod greedy;

pub use agent::Agent;
pub use greedy::GreedyAgent;
