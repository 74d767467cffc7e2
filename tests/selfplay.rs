use tacbot::game::{Game, GameState};
use tacbot::board::Mark;
use tacbot::selfplay::{generate_games, Policy, SelfPlayParams};

#[test]
fn selfplay_generates_games_deterministically() {
    let params = SelfPlayParams {
        games: 5,
        seed: 42,
        x_policy: Policy::Random,
        o_policy: Policy::Optimal,
    };
    let g1 = generate_games(&params);
    let g2 = generate_games(&params);
    assert_eq!(g1.len(), 5);
    assert_eq!(g1, g2, "same seed must replay the same games");
}

#[test]
fn different_seeds_vary_random_play() {
    let mut params = SelfPlayParams {
        games: 5,
        seed: 1,
        x_policy: Policy::Random,
        o_policy: Policy::Random,
    };
    let g1 = generate_games(&params);
    params.seed = 2;
    let g2 = generate_games(&params);
    assert_ne!(g1, g2, "seed did not alter move sampling");
}

#[test]
fn optimal_o_never_loses_to_random_x() {
    let params = SelfPlayParams {
        games: 200,
        seed: 7,
        x_policy: Policy::Random,
        o_policy: Policy::Optimal,
    };
    for (i, g) in generate_games(&params).iter().enumerate() {
        assert_ne!(g.result, 1, "engine lost game {i}: {:?}", g.moves);
    }
}

#[test]
fn optimal_x_never_loses_to_random_o() {
    let params = SelfPlayParams {
        games: 200,
        seed: 11,
        x_policy: Policy::Optimal,
        o_policy: Policy::Random,
    };
    for (i, g) in generate_games(&params).iter().enumerate() {
        assert_ne!(g.result, -1, "engine lost game {i}: {:?}", g.moves);
    }
}

#[test]
fn all_optimal_play_draws_every_game() {
    let params = SelfPlayParams {
        games: 3,
        seed: 0,
        x_policy: Policy::Optimal,
        o_policy: Policy::Optimal,
    };
    for g in generate_games(&params) {
        assert_eq!(g.result, 0, "all-optimal game was decisive: {:?}", g.moves);
    }
}

#[test]
fn records_replay_legally_and_match_their_result() {
    let params = SelfPlayParams {
        games: 50,
        seed: 3,
        x_policy: Policy::Random,
        o_policy: Policy::Random,
    };
    for record in generate_games(&params) {
        let mut game = Game::new(Mark::X);
        for &idx in &record.moves {
            game.play(idx).expect("recorded move replays cleanly");
        }
        let expected = match game.state() {
            GameState::Won { mark: Mark::X, .. } => 1,
            GameState::Won { mark: Mark::O, .. } => -1,
            GameState::Drawn => 0,
            other => panic!("record ended mid-game in state {other:?}"),
        };
        assert_eq!(record.result, expected);
    }
}
