//! Strategies: named payoff rows.
//!
//! ## Identity
//!
//! A `Strategy` is equal only to itself. Dominance queries must be able to
//! tell apart two strategies with identical names and payoff rows, so each
//! `Strategy` carries a `StrategyId` drawn from a process-wide counter and
//! equality compares ids alone.
//!
//! ## Mutation
//!
//! Payoffs are fixed at construction. The single exception is the Game's
//! strategy-removal protocol: when the opponent drops strategy `i`, payoff
//! index `i` must be truncated from every strategy on this side. That hook
//! is crate-private; callers outside the crate cannot mutate payoffs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;

/// Payoff row storage. Strategy counts are single digits in practice,
/// so rows stay inline.
pub type PayoffVec = SmallVec<[f64; 4]>;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique strategy identifier.
///
/// Ids establish object identity; they carry no positional meaning.
/// Matrix indices come from the owning player's set order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyId(pub u64);

impl StrategyId {
    /// Allocate a fresh, never-before-used id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One discrete action available to a player, with its payoff against
/// each of the opponent's actions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Strategy {
    id: StrategyId,
    name: String,
    payoffs: PayoffVec,
}

impl PartialEq for Strategy {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Strategy {}

impl Strategy {
    /// Create a strategy with a fresh identity.
    pub fn new(name: impl Into<String>, payoffs: impl IntoIterator<Item = f64>) -> Self {
        Self {
            id: StrategyId::fresh(),
            name: name.into(),
            payoffs: payoffs.into_iter().collect(),
        }
    }

    /// This strategy's identity.
    #[must_use]
    pub fn id(&self) -> StrategyId {
        self.id
    }

    /// This strategy's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full payoff row, indexed by the opponent's strategy order.
    #[must_use]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    /// Number of payoff entries (the opponent's current strategy count).
    #[must_use]
    pub fn payoff_count(&self) -> usize {
        self.payoffs.len()
    }

    /// The payoff against the opponent's strategy at `index`.
    pub fn payoff(&self, index: usize) -> Result<f64, GameError> {
        self.payoffs
            .get(index)
            .copied()
            .ok_or_else(|| GameError::IndexOutOfRange {
                context: self.name.clone(),
                index,
                size: self.payoffs.len(),
            })
    }

    /// Drop the payoff at `index` after the opponent removed the matching
    /// strategy. Only the Game's removal protocol may call this.
    pub(crate) fn truncate_payoff(&mut self, index: usize) {
        if index < self.payoffs.len() {
            self.payoffs.remove(index);
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.name, self.payoffs.as_slice())
    }
}
