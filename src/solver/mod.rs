//! Mixed-strategy solvers.
//!
//! Free functions over strategy sets (or raw payoff matrices for the
//! iterative method): saddle-point detection, closed-form 2x2 and 3x3
//! distributions, and the fictitious-play approximation for arbitrary
//! m x n zero-sum games.

pub mod fictitious;
pub mod minimax;
pub mod oddments;

pub use fictitious::{solve_fictitious_play, FictitiousPlaySolution};
pub use minimax::minimaxi;
pub use oddments::{formula_2x2, oddments2, oddments3, transpose_strategy_set};
