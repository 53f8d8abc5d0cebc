use frp_pong::Config;
use frp_pong::sim::{Action, BodyHandles, GameState, Phase, reduce, step};
use glam::DVec2;
use proptest::prelude::*;

fn new_game(config: &Config) -> GameState {
    GameState::new(config, BodyHandles::sequential())
}

fn started(config: &Config) -> GameState {
    reduce(&new_game(config), Some(&Action::Click), config)
}

/// Mostly ticks, with the occasional user action (never a click)
fn step_input() -> impl Strategy<Value = Option<Action>> {
    prop_oneof![
        12 => Just(None),
        4 => (50.0..=550.0f64).prop_map(|y| Some(Action::Move { x: 50.0, y })),
        1 => prop_oneof![Just(100.0), Just(200.0)]
            .prop_map(|height| Some(Action::Resize { width: 25.0, height })),
        1 => Just(Some(Action::Pull { color: "#FF0000".to_string() })),
        1 => Just(Some(Action::Highlight { color: "#FFFFFF".to_string() })),
        1 => Just(Some(Action::SpawnBlocks)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn speeds_stay_within_limits(inputs in prop::collection::vec(step_input(), 0..1500)) {
        let config = Config::default();
        let mut state = started(&config);
        for input in &inputs {
            state = reduce(&state, input.as_ref(), &config);
            prop_assert!(state.ball.velocity.x.abs() <= config.max_ball_speed_x);
            prop_assert!(state.ball.velocity.y.abs() <= config.max_ball_speed_y);
        }
    }

    #[test]
    fn scores_only_grow_and_end_the_game(inputs in prop::collection::vec(step_input(), 0..1500)) {
        let config = Config::default();
        let mut state = started(&config);
        for input in &inputs {
            let next = reduce(&state, input.as_ref(), &config);
            prop_assert!(next.left_score.score >= state.left_score.score);
            prop_assert!(next.right_score.score >= state.right_score.score);
            let over = next.left_score.score >= config.winning_score
                || next.right_score.score >= config.winning_score;
            prop_assert_eq!(next.running, !over);
            state = next;
        }
    }

    #[test]
    fn blocks_never_exceed_one_grid(inputs in prop::collection::vec(step_input(), 0..1500)) {
        let config = Config::default();
        let mut state = started(&config);
        for input in &inputs {
            let next = reduce(&state, input.as_ref(), &config);
            if state.blocks.is_empty() && matches!(input, Some(Action::SpawnBlocks)) {
                prop_assert_eq!(next.blocks.len(), config.blocks.len());
            } else {
                // Struck blocks are dropped and never come back
                prop_assert!(next.blocks.len() <= state.blocks.len());
                prop_assert!(next
                    .blocks
                    .iter()
                    .all(|b| state.blocks.iter().any(|old| old.handle == b.handle)));
            }
            state = next;
        }
    }

    #[test]
    fn ended_game_is_frozen(
        inputs in prop::collection::vec(step_input(), 1..200),
        left_wins in any::<bool>(),
    ) {
        let config = Config::default();
        let mut state = reduce(&started(&config), Some(&Action::SpawnBlocks), &config);
        if left_wins {
            state.left_score.score = config.winning_score;
        } else {
            state.right_score.score = config.winning_score;
        }
        state.running = false;

        let frozen = state.clone();
        for input in &inputs {
            state = reduce(&state, input.as_ref(), &config);
            prop_assert_eq!(state.phase(), Phase::Ended);
            prop_assert_eq!(&state.ball, &frozen.ball);
            prop_assert_eq!(&state.blocks, &frozen.blocks);
            prop_assert_eq!(&state.left_paddle, &frozen.left_paddle);
            prop_assert_eq!(state.left_score.score, frozen.left_score.score);
            prop_assert_eq!(state.right_score.score, frozen.right_score.score);
        }
    }

    #[test]
    fn paddle_rebound_bounds(offset in 0.0..=100.0f64, right_side in any::<bool>()) {
        let config = Config::default();
        let mut state = started(&config);
        let paddle = if right_side { &state.right_paddle } else { &state.left_paddle };
        let center = DVec2::new(paddle.pos.x + 10.0, paddle.pos.y + offset);
        state.ball.center = center;

        let next = step(&state, &config);
        let vx = next.ball.velocity.x;
        prop_assert!(vx.abs() >= 1.0);
        prop_assert!(next.ball.velocity.y.abs() <= config.max_ball_speed_y);
        // Rebound always heads away from the struck paddle
        prop_assert_eq!(vx < 0.0, right_side);
    }

    #[test]
    fn click_starts_from_any_fresh_state(
        ball_x in 0.0..600.0f64,
        ball_y in 0.0..600.0f64,
        with_blocks in any::<bool>(),
    ) {
        let config = Config::default();
        let mut state = new_game(&config);
        state.ball.center = DVec2::new(ball_x, ball_y);
        if with_blocks {
            let spawned = frp_pong::sim::spawn_blocks(&[], &config, state.next_handle);
            state.blocks = spawned.blocks;
            state.next_handle = spawned.next_handle;
        }

        let next = reduce(&state, Some(&Action::Click), &config);
        prop_assert!(next.started && next.running);
        prop_assert_eq!(next.ball.center, config.canvas_center());
        prop_assert_eq!(next.ball.velocity, DVec2::new(-config.serve_speed, 0.0));
        prop_assert_eq!(next.left_score.score, 0);
        prop_assert_eq!(next.right_score.score, 0);
        prop_assert_eq!(&next.blocks, &state.blocks);
    }
}

#[test]
fn spawn_twice_gives_one_grid() {
    let config = Config::default();
    let state = started(&config);
    let once = reduce(&state, Some(&Action::SpawnBlocks), &config);
    let twice = reduce(&once, Some(&Action::SpawnBlocks), &config);
    assert_eq!(twice.blocks.len(), 36);
}

#[test]
fn full_game_reaches_winner() {
    // Nobody moves the player paddle, so the AI wins eventually
    let config = Config::default();
    let mut state = started(&config);
    let mut ticks = 0;
    while state.phase() == Phase::Running && ticks < 200_000 {
        state = reduce(&state, None, &config);
        ticks += 1;
    }
    assert_eq!(state.phase(), Phase::Ended);
    assert!(state.left_score.score == 7 || state.right_score.score == 7);

    let announced = reduce(&state, None, &config);
    assert!(announced.center_text.text.ends_with("Wins! Restart?"));

    let restarted = reduce(&announced, Some(&Action::Click), &config);
    assert_eq!(restarted.phase(), Phase::Running);
    assert_eq!(restarted.center_text.text, "");
}
