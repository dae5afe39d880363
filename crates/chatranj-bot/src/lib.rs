//! Move selectors for chatranj: a one-ply greedy capture heuristic and a
//! uniform random picker. Both depend on the rule engine only through
//! `possible_moves`.

pub mod greedy;
pub mod material;
pub mod random;

pub use greedy::best_move;
pub use material::piece_value;
pub use random::random_move;
