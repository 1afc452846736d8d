//! Dominance-query and strategy-removal behavior across the public API.

use matrix_games::{Game, GameError, Player, PlayerRole};

fn prisoners_dilemma() -> Game {
    let player = Player::from_payoff_spec("P", "(10, 1), (25, 3)").unwrap();
    let opponent = Player::from_payoff_spec("O", "(10, 1), (25, 3)").unwrap();
    Game::new(player, opponent).unwrap()
}

#[test]
fn test_prisoners_dilemma_dominance_both_sides() {
    let game = prisoners_dilemma();
    for side in [game.player(), game.opponent()] {
        let dominant = side.strictly_dominant();
        assert_eq!(dominant.len(), 1);
        assert_eq!(dominant[0].payoffs(), &[25.0, 3.0]);

        let dominated = side.strictly_dominated();
        assert_eq!(dominated.len(), 1);
        assert_eq!(dominated[0].payoffs(), &[10.0, 1.0]);
    }
}

#[test]
fn test_dominance_queries_idempotent_without_mutation() {
    let player = Player::from_payoff_spec("P", "(3, 1, 4), (1, 5, 9), (2, 6, 5)").unwrap();

    let first: Vec<_> = player.weakly_dominated().iter().map(|s| s.id()).collect();
    let second: Vec<_> = player.weakly_dominated().iter().map(|s| s.id()).collect();
    assert_eq!(first, second);

    let first: Vec<_> = player.strictly_dominated().iter().map(|s| s.id()).collect();
    let second: Vec<_> = player.strictly_dominated().iter().map(|s| s.id()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_identical_payoff_rows_weakly_dominate_each_other() {
    // Structural equality would conflate these two; identity keeps them
    // apart, and each is weakly dominated by the other.
    let player = Player::from_rows("P", &[vec![1.0, 2.0], vec![1.0, 2.0]]).unwrap();
    let weak = player.weakly_dominated();
    assert_eq!(weak.len(), 2);
    assert_ne!(weak[0].id(), weak[1].id());
    assert!(player.strictly_dominated().is_empty());
}

#[test]
fn test_removal_keeps_matrix_aligned() {
    let mut game = prisoners_dilemma();
    let id = game.opponent().strategy(1).unwrap().id();
    game.remove_strategy(PlayerRole::Opponent, id).unwrap();

    // every remaining strategy's payoff length equals the other side's count
    for s in game.player().strategy_set() {
        assert_eq!(s.payoff_count(), game.opponent().strategy_count());
    }
    for s in game.opponent().strategy_set() {
        assert_eq!(s.payoff_count(), game.player().strategy_count());
    }
    // the player lost payoff index 1, keeping index 0
    assert_eq!(game.player().strategy(0).unwrap().payoffs(), &[10.0]);
    assert_eq!(game.player().strategy(1).unwrap().payoffs(), &[25.0]);
}

#[test]
fn test_removal_of_foreign_strategy_is_not_found() {
    let mut game = prisoners_dilemma();
    let foreign = Player::from_payoff_spec("X", "(1, 2)").unwrap();
    let id = foreign.strategy(0).unwrap().id();
    assert!(matches!(
        game.remove_strategy(PlayerRole::Player, id),
        Err(GameError::StrategyNotFound { .. })
    ));
    // nothing was disturbed
    assert_eq!(game.player().strategy_count(), 2);
    assert_eq!(game.opponent().strategy(0).unwrap().payoff_count(), 2);
}

#[test]
fn test_dominant_and_dominated_are_independent_queries() {
    // A middle strategy that is neither dominant nor dominated.
    let player = Player::from_rows(
        "P",
        &[vec![0.0, 5.0], vec![3.0, 3.0], vec![5.0, 0.0]],
    )
    .unwrap();
    assert!(player.strictly_dominated().is_empty());
    assert!(player.strictly_dominant().is_empty());
    assert!(player.weakly_dominated().is_empty());
    assert!(player.weakly_dominant().is_empty());
}
