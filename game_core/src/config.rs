use glam::Vec2;

use crate::components::Side;
use crate::geometry::Aabb;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub upper_boundary: f32,
    pub lower_boundary: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_factor: f32,
    pub ball_rest_gap: f32,
    pub trail_length: usize,
    pub ai_track_deadzone: f32,
    pub ai_drift_deadzone: f32,
    pub serve_cooldown_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            upper_boundary: Params::UPPER_BOUNDARY,
            lower_boundary: Params::HEIGHT - Params::LOWER_MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_factor: Params::BALL_SPEED_FACTOR,
            ball_rest_gap: Params::BALL_REST_GAP,
            trail_length: Params::TRAIL_LENGTH,
            ai_track_deadzone: Params::AI_TRACK_DEADZONE,
            ai_drift_deadzone: Params::AI_DRIFT_DEADZONE,
            serve_cooldown_ticks: Params::SERVE_COOLDOWN_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ball speed in pixels per tick.
    ///
    /// Scaled so a paddle-speed chase across the window diagonal stays
    /// winnable: `(diagonal / travel) * paddle_speed * factor`.
    pub fn ball_speed(&self) -> f32 {
        let diagonal = (self.height * self.height + self.width * self.width).sqrt();
        (diagonal / (self.height - self.paddle_height)) * self.paddle_speed * self.ball_speed_factor
    }

    /// Get left edge X of the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Vertical center the paddles start at and the AI drifts back to
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Paddle top when centered vertically
    pub fn paddle_start_top(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }

    /// Clamp paddle top so the whole paddle stays inside the playfield
    pub fn clamp_paddle_top(&self, top: f32) -> f32 {
        top.clamp(self.upper_boundary, self.lower_boundary - self.paddle_height)
    }

    /// Rectangle covered by the paddle on `side` with its top at `top`
    pub fn paddle_rect(&self, side: Side, top: f32) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.paddle_x(side), top),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Where the ball waits before a serve: just in front of the AI paddle
    pub fn ball_rest_pos(&self) -> Vec2 {
        Vec2::new(
            self.paddle_x(Side::Right) - self.ball_radius - self.ball_rest_gap,
            self.paddle_start_top() + self.paddle_height / 2.0,
        )
    }
}
