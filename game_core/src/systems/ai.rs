use crate::{AiControlled, Ball, Config, GameRng, MatchState, Paddle, PaddleIntent};
use hecs::World;
use rand::Rng;

/// Steer the AI paddle for one tick.
///
/// Strategy:
/// 1. Ball coming toward us: predict where it crosses our paddle face,
///    blur the guess by the difficulty's error margin, and chase it. With
///    the difficulty's reaction-delay probability, skip the update so the
///    previous command keeps driving the paddle.
/// 2. Ball moving away: drift back to the vertical center at half speed.
pub fn update_ai(world: &mut World, config: &Config, state: &MatchState, rng: &mut GameRng) {
    if !state.in_motion() {
        return;
    }

    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel));
    let Some((ball_pos, ball_vel)) = ball else {
        return;
    };

    let difficulty = state.difficulty;

    for (_entity, (paddle, intent, _ai)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &AiControlled)>()
    {
        let rect = config.paddle_rect(paddle.side, paddle.top);
        let paddle_center = rect.center().y;

        if ball_vel.x > 0.0 {
            let time_to_reach = (rect.min.x - ball_pos.x) / ball_vel.x;
            let error = difficulty.error_margin();
            let predicted_y =
                ball_pos.y + ball_vel.y * time_to_reach + rng.0.gen_range(-error..=error);

            let roll: f64 = rng.0.gen();
            if roll > difficulty.reaction_delay() {
                intent.velocity = track_velocity(predicted_y, paddle_center, config);
            }
        } else {
            intent.velocity = drift_velocity(paddle_center, config);
        }
    }
}

/// Full speed toward `target_y`, or stop inside the dead-zone
pub fn track_velocity(target_y: f32, paddle_center: f32, config: &Config) -> f32 {
    if target_y > paddle_center + config.ai_track_deadzone {
        config.paddle_speed
    } else if target_y < paddle_center - config.ai_track_deadzone {
        -config.paddle_speed
    } else {
        0.0
    }
}

/// Half speed back toward the vertical center, or stop inside the dead-zone
pub fn drift_velocity(paddle_center: f32, config: &Config) -> f32 {
    let offset = paddle_center - config.center_y();
    if offset.abs() > config.ai_drift_deadzone {
        -offset.signum() * config.paddle_speed / 2.0
    } else {
        0.0
    }
}
