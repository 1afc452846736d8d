//! Players: ordered strategy sets and dominance queries.
//!
//! ## Ordering
//!
//! The strategy set's order is significant: it defines the row (or column)
//! indices of the payoff matrix and is preserved across removals.
//!
//! ## Invariant
//!
//! Every strategy in the set has the same payoff length, equal to the
//! opponent's current strategy count. Constructors reject ragged input;
//! afterwards only the Game's removal protocol changes payoff lengths,
//! and it truncates every row of a side in lockstep.
//!
//! ## Dominance
//!
//! The four dominance queries use the single-player definition: they
//! compare a player's own payoff rows position by position and never
//! consult the opponent's payoffs.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::strategy::{PayoffVec, Strategy, StrategyId};

/// A named player owning an ordered set of strategies.
///
/// A player never holds a reference to its opponent; the
/// [`Game`](super::game::Game) mediates cross-player consistency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    strategy_set: Vec<Strategy>,
}

impl Player {
    /// Build a player from explicit payoff rows.
    ///
    /// Strategies are named `{player}_S{n}` in row order. Rows must all
    /// have the same length.
    pub fn from_rows(name: impl Into<String>, rows: &[Vec<f64>]) -> Result<Self, GameError> {
        let name = name.into();
        let expected = rows.first().map_or(0, Vec::len);
        for (row, payoffs) in rows.iter().enumerate() {
            if payoffs.len() != expected {
                return Err(GameError::RaggedMatrix {
                    row,
                    len: payoffs.len(),
                    expected,
                });
            }
        }
        let strategy_set = rows
            .iter()
            .enumerate()
            .map(|(n, payoffs)| Strategy::new(format!("{name}_S{n}"), payoffs.iter().copied()))
            .collect();
        Ok(Self { name, strategy_set })
    }

    /// Build a player from a payoff specification string.
    ///
    /// The syntax is a sequence of parenthesized, comma-separated numeric
    /// tuples, e.g. `"(10, 1), (25, 3)"`, where tuple `n` supplies
    /// strategy `n`'s payoff row. Malformed input is rejected with the
    /// offending player name and the raw text attached.
    pub fn from_payoff_spec(name: impl Into<String>, spec: &str) -> Result<Self, GameError> {
        let name = name.into();
        let rows = parse_payoff_spec(&name, spec)?;
        let strategy_set = rows
            .into_iter()
            .enumerate()
            .map(|(n, payoffs)| Strategy::new(format!("{name}_S{n}"), payoffs))
            .collect();
        Ok(Self { name, strategy_set })
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered strategy set.
    #[must_use]
    pub fn strategy_set(&self) -> &[Strategy] {
        &self.strategy_set
    }

    /// Number of strategies currently in the set.
    #[must_use]
    pub fn strategy_count(&self) -> usize {
        self.strategy_set.len()
    }

    /// Positional strategy lookup.
    pub fn strategy(&self, index: usize) -> Result<&Strategy, GameError> {
        self.strategy_set
            .get(index)
            .ok_or_else(|| GameError::IndexOutOfRange {
                context: self.name.clone(),
                index,
                size: self.strategy_set.len(),
            })
    }

    /// Remove the identified strategy and return its pre-removal index.
    ///
    /// Crate-private on purpose: the returned index is needed to truncate
    /// the opponent's payoff rows, so removal must go through
    /// [`Game::remove_strategy`](super::game::Game::remove_strategy).
    pub(crate) fn remove_strategy(&mut self, id: StrategyId) -> Result<usize, GameError> {
        let index = self
            .strategy_set
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| GameError::StrategyNotFound {
                player: self.name.clone(),
                name: format!("#{}", id.0),
            })?;
        self.strategy_set.remove(index);
        Ok(index)
    }

    /// Truncate payoff `index` from every strategy in the set. Called by
    /// the Game when the opponent drops the strategy at that index.
    pub(crate) fn truncate_payoffs(&mut self, index: usize) {
        for strategy in &mut self.strategy_set {
            strategy.truncate_payoff(index);
        }
    }

    /// Strategies whose payoff is `<=` some other strategy's at every
    /// position: equal-or-worse outcomes regardless of the opponent.
    #[must_use]
    pub fn weakly_dominated(&self) -> Vec<&Strategy> {
        self.dominance_scan(|own, other| own <= other)
    }

    /// Strategies whose payoff is `<` some other strategy's at every
    /// position: always-worse outcomes regardless of the opponent.
    #[must_use]
    pub fn strictly_dominated(&self) -> Vec<&Strategy> {
        self.dominance_scan(|own, other| own < other)
    }

    /// Strategies whose payoff is `>=` some other strategy's at every
    /// position.
    #[must_use]
    pub fn weakly_dominant(&self) -> Vec<&Strategy> {
        self.dominance_scan(|own, other| own >= other)
    }

    /// Strategies whose payoff is `>` some other strategy's at every
    /// position.
    #[must_use]
    pub fn strictly_dominant(&self) -> Vec<&Strategy> {
        self.dominance_scan(|own, other| own > other)
    }

    /// All-pairs scan: strategy A qualifies against B when `relation`
    /// holds at every payoff position. Qualifiers are appended once, in
    /// first-encountered order. Sets of fewer than 2 strategies have no
    /// meaningful "every position against another" reading and yield an
    /// empty list.
    fn dominance_scan(&self, relation: impl Fn(f64, f64) -> bool) -> Vec<&Strategy> {
        let mut found: Vec<&Strategy> = Vec::new();
        if self.strategy_set.len() < 2 {
            return found;
        }
        let positions = self.strategy_set[0].payoff_count();
        for under_test in &self.strategy_set {
            for against in &self.strategy_set {
                if under_test.id() == against.id() {
                    continue;
                }
                let holding = (0..positions)
                    .filter(|&i| relation(under_test.payoffs()[i], against.payoffs()[i]))
                    .count();
                if holding == positions && !found.iter().any(|s| s.id() == under_test.id()) {
                    found.push(under_test);
                }
            }
        }
        found
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Parse `"(a, b), (c, d)"` into payoff rows.
fn parse_payoff_spec(player: &str, raw: &str) -> Result<Vec<PayoffVec>, GameError> {
    let malformed = |reason: String| GameError::MalformedPayoffs {
        player: player.to_string(),
        raw: raw.to_string(),
        reason,
    };

    let mut rows: Vec<PayoffVec> = Vec::new();
    let mut rest = raw.trim();
    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix('(') else {
            return Err(malformed(format!("expected '(' at {rest:?}")));
        };
        let Some(close) = after_open.find(')') else {
            return Err(malformed("unbalanced parentheses".to_string()));
        };
        let body = &after_open[..close];
        if body.contains('(') {
            return Err(malformed("unbalanced parentheses".to_string()));
        }
        let mut row = PayoffVec::new();
        for token in body.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(malformed("empty payoff entry".to_string()));
            }
            let value: f64 = token
                .parse()
                .map_err(|_| malformed(format!("non-numeric payoff {token:?}")))?;
            row.push(value);
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(malformed(format!(
                    "tuple {} has {} entries, expected {}",
                    rows.len(),
                    row.len(),
                    first.len()
                )));
            }
        }
        rows.push(row);

        rest = after_open[close + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
            if rest.is_empty() {
                return Err(malformed("trailing comma".to_string()));
            }
        } else if !rest.is_empty() {
            return Err(malformed(format!("expected ',' between tuples at {rest:?}")));
        }
    }
    if rows.is_empty() {
        return Err(malformed("no payoff tuples found".to_string()));
    }
    Ok(rows)
}
