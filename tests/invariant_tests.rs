//! Property tests over random games.
//!
//! Games are driven by a seeded `GameRng` and arbitrary guess sequences;
//! the state invariants are checked after every command.

use proptest::prelude::*;

use hand_cricket::core::{
    Coin, Difficulty, EngineConfig, GameRng, GameState, GuessHistory, Innings, Phase, Role,
    MAX_GUESS,
};
use hand_cricket::engine::GameEngine;
use hand_cricket::opponent::opponent_move;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn check_invariants(state: &GameState) {
    assert_eq!(state.target.is_some(), state.innings == Innings::Second);
    assert_eq!(state.result.is_some(), state.phase == Phase::Finished);
    if state.phase == Phase::Playing || state.phase == Phase::Finished {
        assert!(state.role.is_some());
    }
    if state.innings == Innings::Second {
        assert!(matches!(state.phase, Phase::Playing | Phase::Finished));
    }
    if state.last_guess.is_some() {
        assert!(state.repeat_streak >= 1);
    }
    assert!(state.guess_history.iter().all(|&g| g <= MAX_GUESS));
}

proptest! {
    #[test]
    fn prop_opponent_move_in_range(
        d in difficulty(),
        history in prop::collection::vec(0u8..=10, 0..40),
        seed in any::<u64>(),
    ) {
        let history: GuessHistory = history.into_iter().collect();
        let mut rng = GameRng::new(seed);
        for _ in 0..20 {
            prop_assert!(opponent_move(d, &history, &mut rng) <= MAX_GUESS);
        }
    }

    #[test]
    fn prop_game_invariants_hold(
        d in difficulty(),
        seed in any::<u64>(),
        call_head in any::<bool>(),
        bat in any::<bool>(),
        guesses in prop::collection::vec(0i64..=10, 1..120),
    ) {
        let config = EngineConfig::default().with_difficulty(d).with_seed(seed);
        let mut engine = GameEngine::new(config);
        let call = if call_head { Coin::Head } else { Coin::Tails };
        engine.call_toss(call).unwrap();
        if engine.state().phase == Phase::RoleChoice {
            let role = if bat { Role::Batting } else { Role::Bowling };
            engine.choose_role(role).unwrap();
        }
        check_invariants(engine.state());

        let first_batter = engine.state().batting_side().unwrap();
        let mut frozen_target: Option<u32> = None;
        let mut prev = engine.state().clone();

        for n in guesses {
            if engine.state().is_finished() {
                prop_assert!(engine.submit_guess(n).is_err());
                prop_assert_eq!(engine.state(), &prev);
                continue;
            }
            engine.submit_guess(n).unwrap();
            let state = engine.state().clone();
            check_invariants(&state);

            // Runs never go down
            prop_assert!(state.player_runs >= prev.player_runs);
            prop_assert!(state.opponent_runs >= prev.opponent_runs);

            // Target is set once, to the first batter's total, and never moves
            match (frozen_target, state.target) {
                (None, Some(t)) => {
                    prop_assert_eq!(t, state.runs(first_batter));
                    frozen_target = Some(t);
                }
                (Some(t), current) => prop_assert_eq!(Some(t), current),
                (None, None) => {}
            }

            // The first batter's runs are frozen during the chase
            if prev.innings == Innings::Second {
                prop_assert_eq!(state.runs(first_batter), prev.runs(first_batter));
            }

            // Innings never go back
            prop_assert!(!(prev.innings == Innings::Second && state.innings == Innings::First));

            prev = state;
        }
    }

    #[test]
    fn prop_chase_result_matches_totals(
        d in difficulty(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(0i64..=10, 1..200),
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_difficulty(d).with_seed(seed));
        engine.call_toss(Coin::Head).unwrap();
        if engine.state().phase == Phase::RoleChoice {
            engine.choose_role(Role::Batting).unwrap();
        }

        for n in guesses {
            if engine.state().is_finished() {
                break;
            }
            engine.submit_guess(n).unwrap();
        }

        let state = engine.state();
        if let (Some(result), Some(target)) = (state.result, state.target) {
            let chaser = state.batting_side().unwrap();
            let total = state.runs(chaser);
            prop_assert!(total <= target + u32::from(MAX_GUESS));
            match result.winner() {
                Some(winner) if winner == chaser => prop_assert!(total >= target),
                Some(_) => prop_assert!(total < target),
                None => prop_assert_eq!(total, target),
            }
        }
    }

    #[test]
    fn prop_reset_restores_fresh_state(
        seed in any::<u64>(),
        guesses in prop::collection::vec(0i64..=10, 0..60),
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        engine.call_toss(Coin::Tails).unwrap();
        if engine.state().phase == Phase::RoleChoice {
            engine.choose_role(Role::Bowling).unwrap();
        }
        for n in guesses {
            let _ = engine.submit_guess(n);
        }

        engine.reset();
        prop_assert_eq!(engine.state(), &GameState::new(Difficulty::Easy));
    }
}
