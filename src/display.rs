//! Payoff-matrix rendering.
//!
//! `Strategy` and `Player` format themselves in their own modules; this
//! one renders a whole [`Game`] as an aligned text grid, one cell per
//! strategy pair showing `(row payoff | column payoff)`. Rendering is a
//! read-only view and never fails; a cell that cannot be resolved (which
//! the shared-index invariant rules out) would print as `?`.

use std::fmt;

use crate::core::Game;

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.player().strategy_count();
        let cols = self.opponent().strategy_count();
        if rows == 0 || cols == 0 {
            return write!(f, "{} vs {}: empty game", self.player(), self.opponent());
        }

        // header row, then one row of cells per player strategy
        let mut table: Vec<Vec<String>> = Vec::with_capacity(rows + 1);
        let mut header = vec![String::new()];
        header.extend(
            self.opponent()
                .strategy_set()
                .iter()
                .map(|s| s.name().to_string()),
        );
        table.push(header);

        for (p, row_strategy) in self.player().strategy_set().iter().enumerate() {
            let mut row = vec![row_strategy.name().to_string()];
            for (o, col_strategy) in self.opponent().strategy_set().iter().enumerate() {
                row.push(format!(
                    "({} | {})",
                    fmt_payoff(row_strategy.payoffs().get(o)),
                    fmt_payoff(col_strategy.payoffs().get(p)),
                ));
            }
            table.push(row);
        }

        let widths: Vec<usize> = (0..=cols)
            .map(|c| table.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        for (i, row) in table.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn fmt_payoff(payoff: Option<&f64>) -> String {
    payoff.map_or_else(|| "?".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use crate::core::{Game, Player};

    #[test]
    fn test_render_grid() {
        let player = Player::from_payoff_spec("P", "(10, 1), (25, 3)").unwrap();
        let opponent = Player::from_payoff_spec("O", "(10, 1), (25, 3)").unwrap();
        let game = Game::new(player, opponent).unwrap();
        let rendered = game.to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("O_S0"));
        assert!(lines[0].contains("O_S1"));
        assert!(lines[1].contains("P_S0"));
        // cell (0, 0): player payoff 10, opponent payoff 10
        assert!(lines[1].contains("(10 | 10)"));
        // cell (1, 0): player payoff 25, opponent payoff 1
        assert!(lines[2].contains("(25 | 1)"));
    }

    #[test]
    fn test_render_empty_game() {
        let player = Player::from_payoff_spec("P", "(1)").unwrap();
        let opponent = Player::from_payoff_spec("O", "(1)").unwrap();
        let mut game = Game::new(player, opponent).unwrap();
        let id = game.player().strategy(0).unwrap().id();
        game.remove_strategy(crate::core::PlayerRole::Player, id)
            .unwrap();
        assert!(game.to_string().contains("empty game"));
    }
}
