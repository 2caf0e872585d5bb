//! End-to-end behaviour of a single run: physics, obstacle lifecycle,
//! scoring and difficulty.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use escape_earth::core::GameConfig;
use escape_earth::game::{prune, GameSession, Obstacle, SessionStatus, TickInput};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Config whose gap range collapses to the vertical centre, so every
/// obstacle is passable by hovering.
fn centred_gap_config() -> GameConfig {
    let mut config = GameConfig::default();
    let (min, _) = config.gap_center_range();
    config.gap_margin += config.screen_height / 2.0 - min;
    config
}

/// Flap whenever the UFO has sunk 20 units below the screen centre.
fn hover(session: &GameSession) -> TickInput {
    let centre = session.actor.y + session.actor.size / 2.0;
    TickInput {
        flap: centre > session.config.screen_height / 2.0 + 20.0,
    }
}

#[test]
fn test_no_input_ends_within_1000_ticks() {
    let mut rng = test_rng(42);
    let mut session = GameSession::new(GameConfig::default(), &mut rng);

    let mut ended_at = None;
    for tick in 1..=1000 {
        let events = session.tick(&TickInput::default(), &mut rng);
        if events.ended.is_some() {
            ended_at = Some(tick);
            break;
        }
    }

    assert!(ended_at.is_some(), "session should end from falling");
    assert_eq!(session.status, SessionStatus::Ended { final_score: 0 });
    let bounds = session.actor.bounds();
    assert!(bounds.bottom() >= session.config.screen_height);
    assert!(bounds.top() > 0.0);
}

#[test]
fn test_ended_session_ignores_ticks() {
    let mut rng = test_rng(7);
    let mut session = GameSession::new(GameConfig::default(), &mut rng);
    while session.is_running() {
        session.tick(&TickInput::default(), &mut rng);
    }
    let frozen = (session.actor.clone(), session.tick_count, session.score);

    let events = session.tick(&TickInput { flap: true }, &mut rng);
    assert_eq!(events.ended, None);
    assert_eq!(session.actor, frozen.0);
    assert_eq!(session.tick_count, frozen.1);
    assert_eq!(session.score, frozen.2);
}

#[test]
fn test_obstacle_pruned_after_151_ticks_at_base_speed() {
    let config = GameConfig::default();
    let mut obstacles = vec![Obstacle::new(config.screen_width, 300.0, &config)];

    for _ in 0..150 {
        obstacles[0].advance(config.base_speed);
        assert_eq!(prune(&mut obstacles), 0);
    }
    // Right edge sits exactly on x = 0: still on screen.
    assert_eq!(obstacles[0].right_edge(), 0.0);

    obstacles[0].advance(config.base_speed);
    assert_eq!(prune(&mut obstacles), 1);
    assert!(obstacles.is_empty());
}

#[test]
fn test_hovering_scores_and_speeds_up() {
    let mut rng = test_rng(99);
    let mut session = GameSession::new(centred_gap_config(), &mut rng);

    for _ in 0..3000 {
        let input = hover(&session);
        session.tick(&input, &mut rng);
    }

    assert!(session.is_running(), "hovering through centred gaps is safe");
    assert!(session.score >= 10, "score was {}", session.score);
    assert_eq!(session.difficulty_level, session.score / 5);
    let expected = 3.0 + 0.5 * (session.score / 5) as f64;
    assert!((session.current_speed - expected).abs() < 1e-9);
}

#[test]
fn test_each_obstacle_scores_once() {
    let mut rng = test_rng(3);
    let mut session = GameSession::new(centred_gap_config(), &mut rng);

    let mut total_points = 0;
    for _ in 0..1500 {
        let input = hover(&session);
        total_points += session.tick(&input, &mut rng).points;
    }

    assert_eq!(total_points, session.score);
    let unpassed_behind = session
        .obstacles
        .iter()
        .filter(|o| !o.passed && o.right_edge() < session.actor.x)
        .count();
    assert_eq!(unpassed_behind, 0);
}

proptest! {
    #[test]
    fn prop_spawned_gap_keeps_both_segments(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = test_rng(seed);
        for _ in 0..20 {
            let obstacle = Obstacle::spawn(&mut rng, &config);
            prop_assert!(obstacle.top_rect().height >= config.gap_margin);
            prop_assert!(obstacle.bottom_rect().height >= config.gap_margin);
            prop_assert_eq!(obstacle.x, config.screen_width);
        }
    }

    #[test]
    fn prop_score_only_grows_by_passing(
        seed in any::<u64>(),
        flaps in proptest::collection::vec(any::<bool>(), 1..400),
    ) {
        let mut rng = test_rng(seed);
        let mut session = GameSession::new(GameConfig::default(), &mut rng);

        for flap in flaps {
            let before = session.score;
            let speed_before = session.current_speed;
            let events = session.tick(&TickInput { flap }, &mut rng);

            prop_assert!(session.score >= before);
            prop_assert_eq!(session.score - before, events.points);
            prop_assert!(events.points <= 1);

            if session.current_speed != speed_before {
                prop_assert_eq!(session.score % 5, 0);
                prop_assert!(events.level_up.is_some());
            }
            if !session.is_running() {
                break;
            }
        }
    }
}
