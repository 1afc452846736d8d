//! Declarative game definitions.
//!
//! The analyzer itself consumes already-parsed payoff data; embedding
//! applications usually start from a configuration file instead. A
//! [`GameSpec`] is the serde-friendly shape of that file: two payoff
//! specification strings and optional player names, turned into a
//! [`Game`] with [`GameSpec::build`].
//!
//! ## Example
//!
//! ```
//! use matrix_games::config::GameSpec;
//!
//! let spec: GameSpec = serde_json::from_str(
//!     r#"{
//!         "player":   { "payoffs": "(10, 1), (25, 3)" },
//!         "opponent": { "name": "Column", "payoffs": "(10, 1), (25, 3)" }
//!     }"#,
//! ).unwrap();
//! let game = spec.build().unwrap();
//! assert_eq!(game.player().name(), "P");
//! assert_eq!(game.opponent().name(), "Column");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameError, Player};

/// One player's slice of a game definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name; defaults to "P" for the player and "O" for the
    /// opponent when omitted.
    #[serde(default)]
    pub name: Option<String>,

    /// Payoff specification string, e.g. `"(10, 1), (25, 3)"`.
    pub payoffs: String,
}

/// A complete two-player game definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSpec {
    /// The row player.
    pub player: PlayerSpec,
    /// The column player.
    pub opponent: PlayerSpec,
}

impl GameSpec {
    /// Parse both payoff specifications and pair the players.
    ///
    /// Errors carry the offending player's name and raw payoff text, so
    /// the application can point at the broken configuration entry.
    pub fn build(&self) -> Result<Game, GameError> {
        let player = Player::from_payoff_spec(
            self.player.name.as_deref().unwrap_or("P"),
            &self.player.payoffs,
        )?;
        let opponent = Player::from_payoff_spec(
            self.opponent.name.as_deref().unwrap_or("O"),
            &self.opponent.payoffs,
        )?;
        Game::new(player, opponent)
    }
}
