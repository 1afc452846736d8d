//! Saddle-point detection via the minimax criterion.

use crate::core::{GameError, Strategy};

/// Compute `(rows_max, columns_min)` for a strategy set read as the rows
/// of a zero-sum payoff matrix.
///
/// `rows_max` is the maximum over rows of each row's minimum payoff
/// (maximin); `columns_min` is the minimum over columns of each column's
/// maximum payoff. When the two are equal the matrix has a saddle point
/// and a pure strategy suffices; otherwise the game calls for mixing.
pub fn minimaxi(strategy_set: &[Strategy]) -> Result<(f64, f64), GameError> {
    let first = strategy_set
        .first()
        .ok_or_else(|| GameError::EmptyStrategySet {
            player: "strategy set".to_string(),
        })?;
    let columns = first.payoff_count();
    if columns == 0 {
        return Err(GameError::EmptyStrategySet {
            player: first.name().to_string(),
        });
    }

    let rows_max = strategy_set
        .iter()
        .map(|s| s.payoffs().iter().copied().fold(f64::INFINITY, f64::min))
        .fold(f64::NEG_INFINITY, f64::max);

    let mut columns_min = f64::INFINITY;
    for column in 0..columns {
        let mut column_max = f64::NEG_INFINITY;
        for strategy in strategy_set {
            column_max = column_max.max(strategy.payoff(column)?);
        }
        columns_min = columns_min.min(column_max);
    }

    Ok((rows_max, columns_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(rows: &[&[f64]]) -> Vec<Strategy> {
        rows.iter()
            .enumerate()
            .map(|(n, row)| Strategy::new(format!("S{n}"), row.iter().copied()))
            .collect()
    }

    #[test]
    fn test_no_saddle_point() {
        let (rows_max, columns_min) = minimaxi(&set(&[&[9.0, 7.0], &[5.0, 11.0]])).unwrap();
        assert_eq!(rows_max, 7.0);
        assert_eq!(columns_min, 9.0);
    }

    #[test]
    fn test_saddle_point() {
        // Cell (0, 0) holds both the maximin and the minimax.
        let (rows_max, columns_min) =
            minimaxi(&set(&[&[4.0, 5.0, 6.0], &[3.0, 5.0, 4.0]])).unwrap();
        assert_eq!(rows_max, 4.0);
        assert_eq!(columns_min, 4.0);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            minimaxi(&[]),
            Err(GameError::EmptyStrategySet { .. })
        ));
        let no_payoffs = vec![Strategy::new("S0", Vec::<f64>::new())];
        assert!(matches!(
            minimaxi(&no_payoffs),
            Err(GameError::EmptyStrategySet { .. })
        ));
    }
}
