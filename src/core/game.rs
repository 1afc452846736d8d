//! The game: two players sharing one payoff matrix.
//!
//! ## Shared-index invariant
//!
//! Cell `(p, o)` of the matrix is described jointly by
//! `player.strategy(p).payoff(o)` and `opponent.strategy(o).payoff(p)`.
//! Removing either side's strategy at index `i` therefore requires
//! truncating payoff index `i` from every strategy of the *other* side.
//! [`Game::remove_strategy`] is the only mutation path that preserves
//! this; the player-level removal is crate-private for that reason.
//!
//! ## Concurrency
//!
//! A `Game` is mutated in place by elimination and never reconstructed
//! mid-analysis. Concurrent access requires external synchronization.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Player;
use super::strategy::{Strategy, StrategyId};
use crate::solver::{formula_2x2, oddments2, oddments3};

/// Selects one of the game's two sides.
///
/// `Player` is the row player, `Opponent` the column player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    /// The row player.
    Player,
    /// The column player.
    Opponent,
}

impl PlayerRole {
    /// Both roles in matrix order (rows first).
    pub const BOTH: [PlayerRole; 2] = [PlayerRole::Player, PlayerRole::Opponent];

    /// The opposing role.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            PlayerRole::Player => PlayerRole::Opponent,
            PlayerRole::Opponent => PlayerRole::Player,
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRole::Player => write!(f, "player"),
            PlayerRole::Opponent => write!(f, "opponent"),
        }
    }
}

/// A two-player normal-form game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    player: Player,
    opponent: Player,
}

impl Game {
    /// Pair two fully-populated players into a game.
    ///
    /// Each side's payoff-row length must equal the other side's strategy
    /// count, otherwise the two sets do not describe one matrix.
    pub fn new(player: Player, opponent: Player) -> Result<Self, GameError> {
        for (side, other) in [(&player, &opponent), (&opponent, &player)] {
            if let Some(first) = side.strategy_set().first() {
                if first.payoff_count() != other.strategy_count() {
                    return Err(GameError::ShapeMismatch {
                        player: side.name().to_string(),
                        len: first.payoff_count(),
                        other: other.name().to_string(),
                        count: other.strategy_count(),
                    });
                }
            }
        }
        Ok(Self { player, opponent })
    }

    /// The row player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The column player.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    /// The side playing `role`.
    #[must_use]
    pub fn side(&self, role: PlayerRole) -> &Player {
        match role {
            PlayerRole::Player => &self.player,
            PlayerRole::Opponent => &self.opponent,
        }
    }

    /// Remove a strategy from the side playing `role` and truncate the
    /// matching payoff index from every strategy of the other side.
    ///
    /// Fails with [`GameError::StrategyNotFound`] when the id is not (or
    /// no longer) a member of that side's set.
    pub fn remove_strategy(&mut self, role: PlayerRole, id: StrategyId) -> Result<(), GameError> {
        let (owner, other) = match role {
            PlayerRole::Player => (&mut self.player, &mut self.opponent),
            PlayerRole::Opponent => (&mut self.opponent, &mut self.player),
        };
        let index = owner.remove_strategy(id)?;
        other.truncate_payoffs(index);
        Ok(())
    }

    /// Find all pure-strategy Nash equilibria.
    ///
    /// A cell `(p, o)` qualifies when the row player's payoff is maximal
    /// within column `o` *and* the column player's payoff is maximal
    /// within row `p`. Ties at the maximum mark every tied cell as a best
    /// response. Results are in row-major order.
    ///
    /// Fails with [`GameError::EmptyStrategySet`] when either side has no
    /// strategies left; an empty product has no cells to inspect.
    pub fn pure_nash_equilibrium(&self) -> Result<Vec<(&Strategy, &Strategy)>, GameError> {
        let rows = self.player.strategy_count();
        let cols = self.opponent.strategy_count();
        for side in [&self.player, &self.opponent] {
            if side.strategy_count() == 0 {
                return Err(GameError::EmptyStrategySet {
                    player: side.name().to_string(),
                });
            }
        }

        // Row player: best response per opponent column.
        let mut row_best = vec![vec![false; cols]; rows];
        for o in 0..cols {
            let column: Vec<f64> = (0..rows)
                .map(|p| self.player.strategy(p)?.payoff(o))
                .collect::<Result<_, _>>()?;
            let best = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            for p in 0..rows {
                row_best[p][o] = column[p] == best;
            }
        }

        // Column player: best response per player row.
        let mut col_best = vec![vec![false; cols]; rows];
        for p in 0..rows {
            let row: Vec<f64> = (0..cols)
                .map(|o| self.opponent.strategy(o)?.payoff(p))
                .collect::<Result<_, _>>()?;
            let best = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            for o in 0..cols {
                col_best[p][o] = row[o] == best;
            }
        }

        let mut equilibria = Vec::new();
        for p in 0..rows {
            for o in 0..cols {
                if row_best[p][o] && col_best[p][o] {
                    equilibria.push((self.player.strategy(p)?, self.opponent.strategy(o)?));
                }
            }
        }
        Ok(equilibria)
    }

    /// Iteratively delete dominated strategies until a full pass removes
    /// nothing.
    ///
    /// Each pass visits the player then the opponent, removing all of that
    /// side's strictly-dominated strategies; when a side has none and
    /// `use_weakly` is set, its weakly-dominated strategies are removed
    /// instead. Strategy counts are non-increasing and bounded, so the
    /// loop always halts.
    ///
    /// Removals are reported through `log::info!` for auditability.
    /// Duplicate removal attempts within a batch (a strategy dominated by
    /// several others) are silent no-ops.
    ///
    /// With `use_weakly`, the outcome is order-dependent: the result is
    /// *a* reduction consistent with iterated weak dominance, not
    /// necessarily the unique one.
    pub fn solve_by_iterated_deletion(&mut self, use_weakly: bool) {
        let mut pass = 0u32;
        loop {
            log::debug!("elimination pass {pass}");
            let mut removed_any = false;
            for role in PlayerRole::BOTH {
                let side = self.side(role);
                let strict: Vec<StrategyId> =
                    side.strictly_dominated().iter().map(|s| s.id()).collect();
                let (batch, kind) = if !strict.is_empty() {
                    (strict, "strictly")
                } else if use_weakly {
                    let weak = side.weakly_dominated().iter().map(|s| s.id()).collect();
                    (weak, "weakly")
                } else {
                    (Vec::new(), "")
                };
                for id in batch {
                    let label = self
                        .side(role)
                        .strategy_set()
                        .iter()
                        .find(|s| s.id() == id)
                        .map(ToString::to_string);
                    // Removal only fails for a strategy that is already
                    // gone; such duplicate attempts are idempotent no-ops.
                    if self.remove_strategy(role, id).is_ok() {
                        log::info!(
                            "{}: removing {kind} dominated strategy {}",
                            self.side(role).name(),
                            label.unwrap_or_default()
                        );
                        removed_any = true;
                    }
                }
            }
            if !removed_any {
                log::debug!("no further eliminations after pass {pass}");
                return;
            }
            pass += 1;
        }
    }

    /// Mixed-strategy distribution for the side playing `role`, derived
    /// from the *other* side's payoff rows.
    ///
    /// Dispatch on the other side's strategy count: 2 uses [`oddments2`],
    /// falling back to [`formula_2x2`] when an oddment is zero; 3 uses
    /// [`oddments3`]. Any other size fails with
    /// [`GameError::UnsupportedSize`]; callers with larger zero-sum games
    /// should use [`solve_fictitious_play`](crate::solver::solve_fictitious_play).
    pub fn mixed_nash_equilibrium(&self, role: PlayerRole) -> Result<Vec<f64>, GameError> {
        let other = self.side(role.other());
        match other.strategy_count() {
            2 => match oddments2(other.strategy_set()) {
                Ok((a, b)) => Ok(vec![a, b]),
                Err(GameError::ZeroOddment) => {
                    log::info!("zero oddment for {}, switching to the 2x2 formula", other.name());
                    let (q, p) = formula_2x2(other.strategy_set())?;
                    Ok(vec![q, p])
                }
                Err(err) => Err(err),
            },
            3 => oddments3(other.strategy_set()).map(|(a, b, c)| vec![a, b, c]),
            size => Err(GameError::UnsupportedSize {
                size,
                expected: "2 or 3",
            }),
        }
    }
}
