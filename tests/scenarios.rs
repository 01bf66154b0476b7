use glam::Vec2;
use maze_chase::consts::SIM_DT;
use maze_chase::sim::{
    DirectionKeys, EnemyMode, GameEvent, GamePhase, GameRng, GameState, HeadingSequence,
    TickInput, WallSet, flee_input, tick,
};
use maze_chase::{ManualClock, Tuning};

fn started(clock: &ManualClock, headings: &mut HeadingSequence) -> GameState {
    let mut state = GameState::new(Tuning::default(), clock, headings);
    state.start(clock);
    state
}

#[test]
fn test_enemy_keeps_patrolling_far_from_spawned_player() {
    let walls = WallSet::maze();
    let clock = ManualClock::new(0.0);
    let mut rng = GameRng::new(7);
    let mut state = GameState::new(Tuning::default(), &clock, &mut rng);
    state.start(&clock);

    // 120 ticks at patrol speed cannot close the ~830 unit gap to 200
    for _ in 0..120 {
        tick(&mut state, &TickInput::default(), &walls, &clock, &mut rng);
        assert_eq!(state.enemy.mode, EnemyMode::Patrol);
    }
    assert_eq!(state.player.pos, Vec2::new(60.0, 60.0));
    assert_eq!(state.lives(), 3);
}

#[test]
fn test_enemy_pinned_against_wall_never_chases() {
    let walls = WallSet::maze();
    let clock = ManualClock::new(0.0);
    // Straight down into the bottom boundary, rerolling the same heading
    let mut headings = HeadingSequence::constant(std::f32::consts::FRAC_PI_2);
    let mut state = started(&clock, &mut headings);

    for _ in 0..2_000 {
        tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
        assert_eq!(state.enemy.mode, EnemyMode::Patrol);
    }
    assert!(state.enemy.pos.y <= 565.0);
    assert!((state.enemy.pos.x - 740.0).abs() < 1e-3);
}

#[test]
fn test_enemy_chases_visible_player_within_range() {
    let walls = WallSet::maze();
    let clock = ManualClock::new(0.0);
    let mut headings = HeadingSequence::constant(0.0);
    let mut state = started(&clock, &mut headings);

    state.enemy.pos = Vec2::new(350.0, 200.0);
    state.player.pos = Vec2::new(440.0, 320.0);
    assert!((state.player.pos.distance(state.enemy.pos) - 150.0).abs() < 1e-3);

    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);

    assert!(state.enemy.is_chasing());
    let step = state.enemy.pos - Vec2::new(350.0, 200.0);
    let toward = (Vec2::new(440.0, 320.0) - Vec2::new(350.0, 200.0)).normalize();
    assert!((step.length() - 4.0).abs() < 1e-3);
    assert!(step.normalize().dot(toward) > 0.9999);
}

#[test]
fn test_last_life_lost_ends_game() {
    let walls = WallSet::maze();
    let clock = ManualClock::new(0.0);
    let mut headings = HeadingSequence::constant(0.0);
    let mut state = started(&clock, &mut headings);

    state.player.lives = 1;
    state.player.pos = Vec2::new(400.0, 250.0);
    state.enemy.pos = Vec2::new(405.0, 250.0);

    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);

    assert_eq!(state.lives(), 0);
    assert_eq!(state.player.pos, Vec2::new(60.0, 60.0));
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(matches!(state.events[0], GameEvent::Hit { lives_left: 0, .. }));
    assert!(matches!(state.events[1], GameEvent::GameOver { .. }));

    // Terminal: inputs no longer move anything
    let enemy_pos = state.enemy.pos;
    let input = TickInput {
        keys: DirectionKeys {
            right: true,
            ..Default::default()
        },
        target: None,
    };
    tick(&mut state, &input, &walls, &clock, &mut headings);
    assert_eq!(state.player.pos, Vec2::new(60.0, 60.0));
    assert_eq!(state.enemy.pos, enemy_pos);
    assert!(state.events.is_empty());
}

#[test]
fn test_invincible_player_is_not_hit_again() {
    let walls = WallSet::maze();
    let clock = ManualClock::new(0.0);
    let mut headings = HeadingSequence::constant(0.0);
    let mut state = started(&clock, &mut headings);

    state.player.pos = Vec2::new(400.0, 250.0);
    state.enemy.pos = Vec2::new(400.0, 250.0);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert_eq!(state.lives(), 2);

    // Enemy lands on the respawn point while the player is still invincible
    state.enemy.pos = Vec2::new(60.0, 60.0);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert_eq!(state.lives(), 2);
    assert!(state.events.is_empty());
}

#[test]
fn test_win_signaled_once_at_time_limit() {
    let walls = WallSet::maze();
    let mut clock = ManualClock::new(0.0);
    let mut headings = HeadingSequence::constant(0.0);
    let mut state = started(&clock, &mut headings);

    clock.set(299.9);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert!(state.is_playing());

    clock.set(300.0);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(state.events, vec![GameEvent::Won { elapsed: 300.0 }]);
    assert_eq!(state.elapsed_label(), "300.0");

    let player_pos = state.player.pos;
    let enemy_pos = state.enemy.pos;
    let input = TickInput {
        keys: DirectionKeys {
            down: true,
            ..Default::default()
        },
        target: None,
    };
    for _ in 0..10 {
        clock.advance(SIM_DT);
        tick(&mut state, &input, &walls, &clock, &mut headings);
        assert!(state.events.is_empty());
    }
    assert_eq!(state.player.pos, player_pos);
    assert_eq!(state.enemy.pos, enemy_pos);
}

#[test]
fn test_restart_after_game_over() {
    let walls = WallSet::maze();
    let mut clock = ManualClock::new(0.0);
    let mut headings = HeadingSequence::constant(0.0);
    let mut state = started(&clock, &mut headings);

    state.player.lives = 1;
    state.player.pos = Vec2::new(400.0, 250.0);
    state.enemy.pos = Vec2::new(400.0, 250.0);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert_eq!(state.phase, GamePhase::GameOver);

    clock.set(50.0);
    state.restart(&clock, &mut headings);
    assert!(state.is_playing());
    assert_eq!(state.lives(), 3);
    assert!(!state.player.is_invincible());

    clock.advance(SIM_DT);
    tick(&mut state, &TickInput::default(), &walls, &clock, &mut headings);
    assert!((state.elapsed - SIM_DT).abs() < 1e-9);
}

#[test]
fn test_autopilot_session_respects_walls_and_terminates() {
    let walls = WallSet::maze();
    let mut clock = ManualClock::new(0.0);
    let mut rng = GameRng::new(2024);
    let mut state = GameState::new(Tuning::default(), &clock, &mut rng);
    state.start(&clock);

    let mut won = 0;
    for n in 1..=18_000u32 {
        clock.set(f64::from(n) / 60.0);
        let input = flee_input(&state, &walls);
        tick(&mut state, &input, &walls, &clock, &mut rng);

        assert!(!walls.blocks_circle(state.player.pos, state.player.radius));
        assert!(!walls.blocks_circle(state.enemy.pos, state.enemy.radius));
        assert!(state.enemy.speed_multiplier() <= 3.0 + 1e-6);
        won += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Won { .. }))
            .count();

        if state.is_over() {
            break;
        }
    }

    assert!(state.is_over());
    match state.phase {
        GamePhase::Won => assert_eq!(won, 1),
        GamePhase::GameOver => assert_eq!(state.lives(), 0),
        other => panic!("unexpected phase {:?}", other),
    }
}
