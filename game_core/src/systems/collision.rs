use std::f32::consts::FRAC_PI_4;

use crate::audio::SoundCue;
use crate::{Ball, Color, Config, Events, Paddle, Side, Trail};
use glam::Vec2;
use hecs::World;
use tracing::trace;

/// Resolve ball collisions with walls and paddles for one tick.
///
/// Order matters and is fixed: trail, top wall, bottom wall, left paddle,
/// right paddle. A later check may overwrite the velocity an earlier one set.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data before borrowing the ball mutably
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.top))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, &mut Trail)>() {
        trail.push(ball.pos);

        bounce_off_walls(ball, config, events);

        for &(side, top) in &paddles {
            bounce_off_paddle(ball, side, top, config, events);
        }
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    if (ball.pos.y - config.upper_boundary).abs() <= radius {
        ball.vel.y = -ball.vel.y;
        // Park just inside so the next tick doesn't bounce again
        ball.pos.y = config.upper_boundary + radius;
        ball.color = Color::GREEN;
        events.hit_top_wall = true;
        events.sounds.push(SoundCue::Collision);
        trace!(y = ball.pos.y, "ball hit top wall");
    }

    if (ball.pos.y - config.lower_boundary).abs() <= radius {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = config.lower_boundary - radius;
        ball.color = Color::YELLOW;
        events.hit_bottom_wall = true;
        events.sounds.push(SoundCue::Collision);
        trace!(y = ball.pos.y, "ball hit bottom wall");
    }
}

fn bounce_off_paddle(ball: &mut Ball, side: Side, top: f32, config: &Config, events: &mut Events) {
    let rect = config.paddle_rect(side, top);
    let radius = config.ball_radius;

    if !rect.overlaps_circle_bounds(ball.pos, radius) {
        return;
    }

    ball.vel = bounce_velocity(
        side,
        rect.center().y,
        ball.pos.y,
        config.paddle_height,
        config.ball_speed(),
    );

    // Move ball clear of the paddle face to prevent repeat hits
    ball.pos.x = match side {
        Side::Left => rect.max.x + radius + 1.0,
        Side::Right => rect.min.x - radius - 1.0,
    };

    ball.color = Paddle::new(side, top).color();
    events.paddle_hit = Some(side);
    events.sounds.push(SoundCue::Collision);
    trace!(?side, vx = ball.vel.x, vy = ball.vel.y, "ball hit paddle");
}

/// Outgoing velocity after a paddle hit.
///
/// The further from the paddle center the ball lands, the steeper the
/// rebound, up to 45 degrees at the very edge. Hits above center go up.
pub fn bounce_velocity(
    side: Side,
    paddle_center_y: f32,
    ball_y: f32,
    paddle_height: f32,
    speed: f32,
) -> Vec2 {
    let relative_intersect = ((paddle_center_y - ball_y) / (paddle_height / 2.0)).clamp(-1.0, 1.0);
    let bounce_angle = relative_intersect * FRAC_PI_4;

    let vx = (speed * bounce_angle.cos()).abs();
    let vx = match side {
        Side::Left => vx,   // Away from the left paddle = right
        Side::Right => -vx, // Away from the right paddle = left
    };

    Vec2::new(vx, -speed * bounce_angle.sin())
}
