use crate::audio::SoundCue;
use crate::{
    AiControlled, Ball, Config, Events, GameRng, MatchState, Paddle, PaddleIntent, Phase, Score,
    ServeCooldown, Side, Trail,
};
use glam::Vec2;
use hecs::World;
use rand::Rng;
use tracing::{debug, info};

/// Check if the ball left the court and award the point.
///
/// Only fires while the ball is in play, so each exit scores exactly once:
/// the phase drops to `Resting` in the same call.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    cooldown: &mut ServeCooldown,
    events: &mut Events,
) -> Option<Side> {
    if !state.in_motion() {
        return None;
    }

    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)?;

    let margin = config.ball_radius / 2.0;
    let scorer = if ball_x < -margin {
        Side::Right // Ball got past the human
    } else if ball_x > config.width + margin {
        Side::Left // Ball got past the AI
    } else {
        return None;
    };

    score.increment(scorer);
    state.phase = Phase::Resting;
    events.scored = Some(scorer);
    events.sounds.push(SoundCue::Score);
    info!(?scorer, left = score.left, right = score.right, "point scored");

    if config.serve_cooldown_ticks == 0 {
        reset_round(world, config);
        events.round_reset = true;
    } else {
        cooldown.start(config.serve_cooldown_ticks);
    }

    Some(scorer)
}

/// Advance the post-point cooldown and put the ball back when it ends
pub fn tick_cooldown(
    world: &mut World,
    config: &Config,
    cooldown: &mut ServeCooldown,
    events: &mut Events,
) {
    if cooldown.update() {
        reset_round(world, config);
        events.round_reset = true;
    }
}

/// Center both paddles, park the ball in front of the AI paddle, clear the trail
pub fn reset_round(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.top = config.paddle_start_top();
    }

    // The AI holds still until the next serve gives it something to track
    for (_entity, (intent, _ai)) in world.query_mut::<(&mut PaddleIntent, &AiControlled)>() {
        intent.velocity = 0.0;
    }

    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        ball.pos = config.ball_rest_pos();
        ball.vel = Vec2::ZERO;
        trail.clear();
    }
}

/// Launch the ball toward the human paddle.
///
/// Returns false (and changes nothing) unless the ball is resting and the
/// post-point cooldown is over.
pub fn serve(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    cooldown: &ServeCooldown,
    rng: &mut GameRng,
    events: &mut Events,
) -> bool {
    if state.phase != Phase::Resting || !cooldown.is_ready() {
        return false;
    }

    reset_round(world, config);
    let vel = serve_velocity(config.ball_speed(), rng);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
    }

    state.phase = Phase::InMotion;
    events.served = true;
    debug!(vx = vel.x, vy = vel.y, "ball served");
    true
}

/// Random serve velocity with magnitude `speed`.
///
/// The horizontal part is always negative (toward the human) and lies
/// between `speed * cos 45°` and `speed * cos 30°`; the vertical sign is a
/// coin flip.
pub fn serve_velocity(speed: f32, rng: &mut GameRng) -> Vec2 {
    let steep = speed / 2f32.sqrt(); // 45 degrees
    let shallow = speed * 3f32.sqrt() / 2.0; // 30 degrees

    let t: f32 = rng.0.gen();
    let vx = -(t * (steep - shallow) + shallow);

    let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let vy = (speed * speed - vx * vx).max(0.0).sqrt() * sign;

    Vec2::new(vx, vy)
}
