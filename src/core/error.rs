//! Error taxonomy for the analysis engine.
//!
//! The engine never prints or logs as part of its error contract; every
//! fallible operation returns a structured `GameError` and the embedding
//! application decides how to present it. Degenerate numeric conditions
//! (`ZeroOddment`, `ZeroDenominator`, `DegenerateInput`) are distinct from
//! `UnsupportedSize` so callers can pick a fallback algorithm instead of
//! treating them as fatal.

use thiserror::Error;

/// Errors produced by game construction and analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// A payoff specification string could not be parsed.
    #[error("malformed payoffs for {player}: {reason} (input: {raw:?})")]
    MalformedPayoffs {
        /// Name of the player whose specification failed.
        player: String,
        /// The raw specification text as supplied.
        raw: String,
        /// What went wrong.
        reason: String,
    },

    /// A strategy or payoff index was outside the valid range.
    #[error("index {index} out of range for {context} (size {size})")]
    IndexOutOfRange {
        /// What was being indexed (player or strategy name).
        context: String,
        /// The offending index.
        index: usize,
        /// The current size of the indexed collection.
        size: usize,
    },

    /// A strategy handed to a removal was not a member of the set.
    #[error("strategy {name} is not in {player}'s strategy set")]
    StrategyNotFound {
        /// Owning player's name.
        player: String,
        /// Name of the missing strategy.
        name: String,
    },

    /// An analysis needs at least one strategy per player.
    #[error("{player} has no strategies left to analyze")]
    EmptyStrategySet {
        /// Name of the player with the empty set.
        player: String,
    },

    /// A closed-form solver was invoked on a set size it does not handle.
    #[error("strategy set of size {size} unsupported here, expected {expected}")]
    UnsupportedSize {
        /// Actual strategy count.
        size: usize,
        /// What the solver accepts, e.g. "exactly 2".
        expected: &'static str,
    },

    /// A raw oddment is exactly zero; the algebraic method is invalid and
    /// the caller should switch to the 2x2 formula.
    #[error("zero oddment in strategy set, use the 2x2 formula instead")]
    ZeroOddment,

    /// The 2x2 formula denominator `ca + bd` is zero.
    #[error("degenerate 2x2 game: formula denominator is zero")]
    ZeroDenominator,

    /// The payoff structure is fully degenerate (all oddments vanish).
    #[error("degenerate payoff structure: oddments sum to zero")]
    DegenerateInput,

    /// Two players' shapes do not describe a single payoff matrix.
    #[error("{player}'s payoff rows have {len} entries but {other} has {count} strategies")]
    ShapeMismatch {
        /// Player whose rows are the wrong length.
        player: String,
        /// That player's payoff-row length.
        len: usize,
        /// The other player's name.
        other: String,
        /// The other player's strategy count.
        count: usize,
    },

    /// A payoff matrix handed to the iterative solver is not rectangular.
    #[error("ragged payoff matrix: row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of row 0.
        expected: usize,
    },

    /// The iterative solver needs at least one round.
    #[error("iteration count must be positive")]
    ZeroIterations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::StrategyNotFound {
            player: "P".to_string(),
            name: "P_S1".to_string(),
        };
        assert_eq!(err.to_string(), "strategy P_S1 is not in P's strategy set");

        let err = GameError::UnsupportedSize {
            size: 4,
            expected: "exactly 2",
        };
        assert!(err.to_string().contains("size 4"));
    }

    #[test]
    fn test_degenerate_distinct_from_unsupported() {
        // Callers match on these to pick a fallback algorithm.
        assert_ne!(
            GameError::ZeroOddment,
            GameError::UnsupportedSize {
                size: 2,
                expected: "exactly 2"
            }
        );
    }
}
