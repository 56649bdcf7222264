use crate::audio::SoundCue;
use crate::components::Side;
use crate::params::Params;

/// Whether the ball is waiting for a serve or in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Resting,
    InMotion,
}

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that the AI skips reacting on a given tick
    pub fn reaction_delay(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.1,
            Difficulty::Hard => 0.0,
        }
    }

    /// Maximum random error (pixels) added to the predicted intercept
    pub fn error_margin(self) -> f32 {
        match self {
            Difficulty::Easy => 30.0,
            Difficulty::Medium => 15.0,
            Difficulty::Hard => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Match-level flags owned by the input handler
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub phase: Phase,
    pub paused: bool,
    pub difficulty: Difficulty,
    pub quit: bool,
}

impl MatchState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn in_motion(&self) -> bool {
        self.phase == Phase::InMotion
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Human
    pub right: u32, // AI
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub hit_top_wall: bool,
    pub hit_bottom_wall: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
    pub served: bool,
    pub round_reset: bool,
    pub sounds: Vec<SoundCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.hit_top_wall = false;
        self.hit_bottom_wall = false;
        self.paddle_hit = None;
        self.scored = None;
        self.served = false;
        self.round_reset = false;
        self.sounds.clear();
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.hit_top_wall || self.hit_bottom_wall
    }
}

/// Ticks left before the ball is put back after a point
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeCooldown {
    pub ticks: u32, // 0 = ready
}

impl ServeCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, ticks: u32) {
        self.ticks = ticks;
    }

    /// Count down one tick; returns true on the tick the cooldown finishes
    pub fn update(&mut self) -> bool {
        if self.ticks > 0 {
            self.ticks -= 1;
            return self.ticks == 0;
        }
        false
    }

    pub fn is_ready(&self) -> bool {
        self.ticks == 0
    }
}

/// Symbolic keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Serve,
    Pause,
    Difficulty(Difficulty),
    Up,
    Down,
}

/// Input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Input events gathered since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Turns variable host frame times into whole fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    pub accumulator: f32, // Seconds not yet consumed by a tick
    pub ticks: u64,       // Total ticks handed out
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Clamp dt to prevent large jumps (e.g. a backgrounded tab)
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);

        let mut due = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }
}
