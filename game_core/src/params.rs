/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 700.0;

    // Playfield sits below the score bar
    pub const UPPER_BOUNDARY: f32 = 100.0;
    pub const LOWER_MARGIN: f32 = 5.0; // lower boundary = HEIGHT - LOWER_MARGIN

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 5.0; // gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 4.0; // pixels per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_FACTOR: f32 = 1.5; // applied on top of the diagonal-crossing speed
    pub const BALL_REST_GAP: f32 = 5.0; // pre-serve gap in front of the AI paddle
    pub const TRAIL_LENGTH: usize = 10;

    // AI
    pub const AI_TRACK_DEADZONE: f32 = 5.0;
    pub const AI_DRIFT_DEADZONE: f32 = 10.0;

    // Timing
    pub const TICK_RATE: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / Self::TICK_RATE as f32;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const SERVE_COOLDOWN_TICKS: u32 = 12; // ~0.2s at 60 Hz
}
