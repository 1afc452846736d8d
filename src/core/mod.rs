//! Core types: strategies, players, games, errors.
//!
//! These are the fundamental building blocks of the analyzer. The
//! algorithmic surface on top of them lives in [`crate::solver`].

pub mod error;
pub mod game;
pub mod player;
pub mod strategy;

pub use error::GameError;
pub use game::{Game, PlayerRole};
pub use player::Player;
pub use strategy::{PayoffVec, Strategy, StrategyId};
