//! A whole match bundled behind one handle, for hosts that just want to
//! feed input and pull frames.

use hecs::World;

use crate::audio::SoundCue;
use crate::render::{build_frame, Frame};
use crate::{
    create_ai_paddle, create_ball, create_paddle, step, Ball, Config, Difficulty, Events,
    FrameClock, GameRng, InputEvent, InputQueue, MatchState, Paddle, Phase, Score, ServeCooldown,
    Side, Trail,
};

pub struct Game {
    pub world: World,
    pub config: Config,
    pub state: MatchState,
    pub score: Score,
    pub cooldown: ServeCooldown,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub clock: FrameClock,
}

impl Game {
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self::with_config(Config::new(), seed, difficulty)
    }

    pub fn with_config(config: Config, seed: u64, difficulty: Difficulty) -> Self {
        let mut world = World::new();
        let start_top = config.paddle_start_top();

        create_paddle(&mut world, Side::Left, start_top);
        create_ai_paddle(&mut world, start_top);
        create_ball(&mut world, &config, config.ball_rest_pos(), glam::Vec2::ZERO);

        Self {
            world,
            config,
            state: MatchState::new(difficulty),
            score: Score::new(),
            cooldown: ServeCooldown::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        }
    }

    /// Queue an input event for the next tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run exactly one tick
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.state,
            &mut self.score,
            &mut self.cooldown,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    /// Feed `dt` seconds of host time and run the ticks that are due.
    ///
    /// Returns the sound cues raised by all of those ticks, in order.
    pub fn advance(&mut self, dt: f32) -> Vec<SoundCue> {
        let mut cues = Vec::new();
        for _ in 0..self.clock.advance(dt) {
            self.tick();
            cues.extend_from_slice(&self.events.sounds);
            if self.state.quit {
                break;
            }
        }
        cues
    }

    pub fn frame(&self) -> Frame {
        build_frame(&self.world, &self.config, &self.state, &self.score)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn trail(&self) -> Vec<glam::Vec2> {
        self.world
            .query::<&Trail>()
            .iter()
            .next()
            .map(|(_e, trail)| trail.points.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Overwrite ball position and velocity (scenario setup and tooling)
    pub fn set_ball(&mut self, pos: glam::Vec2, vel: glam::Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}
