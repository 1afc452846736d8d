//! # matrix-games
//!
//! Analysis of two-player normal-form games given as payoff matrices:
//! dominance detection, iterated elimination of dominated strategies,
//! pure-strategy Nash equilibria, and mixed-strategy equilibria
//! (closed-form for 2x2/3x3 games, fictitious-play approximation for
//! arbitrary zero-sum matrices).
//!
//! ## Design Principles
//!
//! 1. **Game-mediated mutation**: strategy removal must keep both
//!    players' payoff indices aligned, so the only mutation path is
//!    [`Game::remove_strategy`]; player- and strategy-level mutators are
//!    crate-private.
//!
//! 2. **Identity, not structure**: two strategies with identical payoff
//!    rows are still distinct. Dominance bookkeeping relies on
//!    [`StrategyId`] equality.
//!
//! 3. **Structured errors over output**: the engine never prints; it
//!    returns [`GameError`] values and reports elimination events
//!    through the `log` facade. Degenerate numeric conditions are
//!    distinct from usage errors so callers can pick a fallback solver.
//!
//! ## Modules
//!
//! - `core`: strategies, players, games, errors
//! - `solver`: minimax, oddments, the 2x2 formula, fictitious play
//! - `config`: serde-friendly game definitions
//! - `display`: payoff-matrix table rendering
//!
//! ## Example
//!
//! ```
//! use matrix_games::{Game, Player};
//!
//! let player = Player::from_payoff_spec("P", "(10, 1), (25, 3)").unwrap();
//! let opponent = Player::from_payoff_spec("O", "(10, 1), (25, 3)").unwrap();
//! let mut game = Game::new(player, opponent).unwrap();
//!
//! let pure = game.pure_nash_equilibrium().unwrap();
//! assert_eq!(pure.len(), 1);
//!
//! game.solve_by_iterated_deletion(false);
//! assert_eq!(game.player().strategy_count(), 1);
//! ```
//!
//! The `Game` is mutated in place by elimination and is not internally
//! synchronized; concurrent callers need external locking.

pub mod config;
pub mod core;
pub mod display;
pub mod solver;

pub use crate::core::{Game, GameError, PayoffVec, Player, PlayerRole, Strategy, StrategyId};
pub use crate::solver::{
    formula_2x2, minimaxi, oddments2, oddments3, solve_fictitious_play, transpose_strategy_set,
    FictitiousPlaySolution,
};
pub use crate::config::{GameSpec, PlayerSpec};
