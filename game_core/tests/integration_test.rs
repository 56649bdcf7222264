use game_core::*;
use glam::Vec2;
use std::f32::consts::FRAC_PI_8;

fn run_until_scored(game: &mut Game, max_ticks: usize) -> Option<(usize, Side)> {
    for tick in 1..=max_ticks {
        game.tick();
        if let Some(side) = game.events.scored {
            return Some((tick, side));
        }
    }
    None
}

#[test]
fn test_ball_reaches_left_paddle_on_known_tick() {
    let mut game = Game::new(42, Difficulty::Medium);
    let speed = game.config.ball_speed();
    let paddle_right_edge = game.config.paddle_x(Side::Left) + game.config.paddle_width;
    let contact_x = paddle_right_edge + game.config.ball_radius;

    // Three ticks of travel away from contact, hitting 25px above paddle center
    game.state.phase = Phase::InMotion;
    let ball_y = game.config.center_y() - 25.0;
    game.set_ball(
        Vec2::new(contact_x + 3.0 * speed - 1.0, ball_y),
        Vec2::new(-speed, 0.0),
    );

    for tick in 1..=3 {
        game.tick();
        assert_eq!(game.events.paddle_hit, None, "no contact on tick {tick}");
    }
    game.tick();
    assert_eq!(game.events.paddle_hit, Some(Side::Left), "contact on tick 4");
    assert_eq!(game.events.sounds, vec![SoundCue::Collision]);

    // relative_intersect = 25 / 50 = 0.5 -> bounce angle = pi/8
    let ball = game.ball().unwrap();
    let expected = Vec2::new(speed * FRAC_PI_8.cos(), -speed * FRAC_PI_8.sin());
    assert!((ball.vel - expected).length() < 1e-4, "got {:?}", ball.vel);
    assert_eq!(ball.color, Color::RED);
    assert!((ball.pos.x - (contact_x + 1.0 + expected.x)).abs() < 1e-3);
}

/// Follow the ball with the same per-tick rules (walls, then move) until
/// the left paddle's face is in reach. Returns ticks from now and the ball
/// position the paddle check will see.
fn ticks_until_left_contact(config: &Config, mut pos: Vec2, mut vel: Vec2) -> (usize, Vec2) {
    let radius = config.ball_radius;
    let face = config.paddle_x(Side::Left) + config.paddle_width;
    for tick in 1..=500 {
        if (pos.y - config.upper_boundary).abs() <= radius {
            vel.y = -vel.y;
            pos.y = config.upper_boundary + radius;
        }
        if (pos.y - config.lower_boundary).abs() <= radius {
            vel.y = -vel.y;
            pos.y = config.lower_boundary - radius;
        }
        if pos.x - radius <= face {
            return (tick, pos);
        }
        pos += vel;
    }
    panic!("ball never reached the left paddle");
}

#[test]
fn test_seeded_serve_reaches_human_paddle_on_known_tick() {
    let mut game = Game::new(2024, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    let served = game.ball().unwrap();
    assert!(served.vel.x < 0.0);

    let (contact_tick, contact_pos) =
        ticks_until_left_contact(&game.config, served.pos, served.vel);

    // Human paddle waits with its center 20px below the arrival point
    let top = game
        .config
        .clamp_paddle_top(contact_pos.y + 20.0 - game.config.paddle_height / 2.0);
    for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.top = top;
        }
    }

    let mut hit_tick = None;
    for tick in 1..=contact_tick {
        game.tick();
        if game.events.paddle_hit.is_some() {
            hit_tick = Some(tick);
            break;
        }
    }
    assert_eq!(hit_tick, Some(contact_tick));
    assert_eq!(game.events.paddle_hit, Some(Side::Left));

    let paddle_center = top + game.config.paddle_height / 2.0;
    let expected = systems::bounce_velocity(
        Side::Left,
        paddle_center,
        contact_pos.y,
        game.config.paddle_height,
        game.config.ball_speed(),
    );
    let ball = game.ball().unwrap();
    assert!((ball.vel - expected).length() < 1e-4, "got {:?}, want {expected:?}", ball.vel);
    assert!(ball.vel.x > 0.0);
}

#[test]
fn test_serve_while_paused_waits_for_unpause() {
    let mut game = Game::new(6, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Pause));
    game.push_input(InputEvent::KeyDown(Key::Serve));
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.phase(), Phase::InMotion);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, game.config.ball_rest_pos());
    assert_ne!(ball.vel, Vec2::ZERO);

    game.push_input(InputEvent::KeyDown(Key::Pause));
    game.tick();
    assert_eq!(game.ball().unwrap().pos, game.config.ball_rest_pos() + ball.vel);
}

#[test]
fn test_same_seed_same_match() {
    let mut a = Game::new(2024, Difficulty::Easy);
    let mut b = Game::new(2024, Difficulty::Easy);
    a.push_input(InputEvent::KeyDown(Key::Serve));
    b.push_input(InputEvent::KeyDown(Key::Serve));

    for _ in 0..1_000 {
        a.tick();
        b.tick();
        let (ball_a, ball_b) = (a.ball().unwrap(), b.ball().unwrap());
        assert_eq!(ball_a.pos, ball_b.pos);
        assert_eq!(ball_a.vel, ball_b.vel);
        assert_eq!(a.paddle(Side::Right).unwrap().top, b.paddle(Side::Right).unwrap().top);
        // Keep serving whenever a point ends
        if a.phase() == Phase::Resting {
            a.push_input(InputEvent::KeyDown(Key::Serve));
            b.push_input(InputEvent::KeyDown(Key::Serve));
        }
    }
    assert_eq!(a.score, b.score);
}

#[test]
fn test_serve_heads_for_human_at_bounded_angle() {
    for seed in 0..50 {
        let mut game = Game::new(seed, Difficulty::Medium);
        game.push_input(InputEvent::KeyDown(Key::Serve));
        game.tick();

        assert!(game.events.served);
        assert_eq!(game.phase(), Phase::InMotion);
        let speed = game.config.ball_speed();
        let vel = game.ball().unwrap().vel;
        assert!(vel.x < 0.0);
        assert!(vel.x.abs() >= speed / 2f32.sqrt() - 1e-4);
        assert!(vel.x.abs() <= speed * 3f32.sqrt() / 2.0 + 1e-4);
        assert!((vel.length_squared() - speed * speed).abs() < 1e-2);
    }
}

#[test]
fn test_point_scores_once_then_resets() {
    let mut game = Game::new(7, Difficulty::Medium);
    let speed = game.config.ball_speed();

    // Human paddle heads up, ball sent low past it
    game.push_input(InputEvent::KeyDown(Key::Up));
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    game.set_ball(Vec2::new(60.0, 600.0), Vec2::new(-speed, 0.0));

    let (_, scorer) = run_until_scored(&mut game, 50).expect("ball should leave the court");
    assert_eq!(scorer, Side::Right);
    assert_eq!(game.score, Score { left: 0, right: 1 });
    assert_eq!(game.phase(), Phase::Resting);
    assert_eq!(game.events.sounds, vec![SoundCue::Score]);

    game.push_input(InputEvent::KeyUp(Key::Up));
    for _ in 0..game.config.serve_cooldown_ticks {
        game.tick();
        assert_eq!(game.events.scored, None, "no second point for the same exit");
    }
    assert!(game.events.round_reset);
    assert_eq!(game.score.right, 1);

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, game.config.ball_rest_pos());
    assert_eq!(ball.vel, Vec2::ZERO);
    assert!(game.trail().is_empty());
    for side in [Side::Left, Side::Right] {
        assert_eq!(game.paddle(side).unwrap().top, game.config.paddle_start_top());
    }
}

#[test]
fn test_ai_misses_and_human_scores() {
    let mut game = Game::new(11, Difficulty::Hard);
    let speed = game.config.ball_speed();

    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    // Too close and too fast for the AI paddle to get from center to the floor
    let x = game.config.width - 60.0;
    game.set_ball(Vec2::new(x, 650.0), Vec2::new(speed, 0.0));

    let (_, scorer) = run_until_scored(&mut game, 50).expect("ball should leave the court");
    assert_eq!(scorer, Side::Left);
    assert_eq!(game.score, Score { left: 1, right: 0 });
}

#[test]
fn test_serve_refused_until_cooldown_ends() {
    let mut game = Game::new(3, Difficulty::Medium);
    let speed = game.config.ball_speed();
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    game.set_ball(Vec2::new(-4.0, 600.0), Vec2::new(-speed, 0.0));
    run_until_scored(&mut game, 5).expect("scores immediately");

    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    assert_eq!(game.phase(), Phase::Resting, "serve ignored while cooling down");

    for _ in 0..game.config.serve_cooldown_ticks {
        game.tick();
    }
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    assert_eq!(game.phase(), Phase::InMotion);
}

#[test]
fn test_pause_freezes_simulation_but_not_input() {
    let mut game = Game::new(5, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();

    game.push_input(InputEvent::KeyDown(Key::Pause));
    game.tick();
    let frozen = game.ball().unwrap();
    let human_top = game.paddle(Side::Left).unwrap().top;

    game.push_input(InputEvent::KeyDown(Key::Down));
    game.push_input(InputEvent::KeyDown(Key::Difficulty(Difficulty::Easy)));
    for _ in 0..30 {
        game.tick();
    }
    assert_eq!(game.ball().unwrap().pos, frozen.pos);
    assert_eq!(game.paddle(Side::Left).unwrap().top, human_top);
    assert_eq!(game.state.difficulty, Difficulty::Easy, "input still handled");

    game.push_input(InputEvent::KeyDown(Key::Pause));
    game.tick();
    assert_ne!(game.ball().unwrap().pos, frozen.pos);
    assert_eq!(game.paddle(Side::Left).unwrap().top, human_top + game.config.paddle_speed);
}

#[test]
fn test_paddle_held_down_never_leaves_playfield() {
    let mut game = Game::new(9, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Down));
    for _ in 0..500 {
        game.tick();
        let top = game.paddle(Side::Left).unwrap().top;
        assert!(top <= game.config.lower_boundary - game.config.paddle_height);
    }

    game.push_input(InputEvent::KeyDown(Key::Up));
    for _ in 0..500 {
        game.tick();
        let top = game.paddle(Side::Left).unwrap().top;
        assert!(top >= game.config.upper_boundary);
    }
}

#[test]
fn test_trail_is_bounded_during_play() {
    let mut game = Game::new(13, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Serve));
    for _ in 0..40 {
        game.tick();
        assert!(game.trail().len() <= game.config.trail_length);
    }
}

#[test]
fn test_advance_runs_fixed_ticks_and_collects_cues() {
    let mut game = Game::new(21, Difficulty::Medium);
    let speed = game.config.ball_speed();
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.tick();
    game.set_ball(Vec2::new(-4.0, 600.0), Vec2::new(-speed, 0.0));

    // Two ticks' worth of host time
    let cues = game.advance(Params::FIXED_DT * 2.0 + 0.001);
    assert_eq!(game.clock.ticks, 2);
    assert_eq!(cues, vec![SoundCue::Score]);
}

#[test]
fn test_quit_stops_advance() {
    let mut game = Game::new(1, Difficulty::Medium);
    game.push_input(InputEvent::KeyDown(Key::Serve));
    game.push_input(InputEvent::Quit);
    game.advance(Params::FIXED_DT * 3.0 + 0.001);

    assert!(game.state.quit);
    // Only the tick that saw Quit ran
    let ball = game.ball().unwrap();
    let rest = game.config.ball_rest_pos();
    assert!((ball.pos - (rest + ball.vel)).length() < 1e-4);
}
