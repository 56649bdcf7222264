pub mod audio;
pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one 60 Hz tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    cooldown: &mut ServeCooldown,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (paddle intents, serve, pause, difficulty)
    ingest_inputs(world, input, state, cooldown, config, rng, events);

    // Paused: nothing moves, only input is honored
    if state.paused {
        return;
    }

    // 2. Put the ball back once the post-point cooldown runs out
    tick_cooldown(world, config, cooldown, events);

    // 3. Check scoring (ball exited court)
    let scored = check_scoring(world, config, state, score, cooldown, events).is_some();

    // 4. Move paddles based on intents
    move_paddles(world, config);

    // 5. Check collisions (trail, walls, paddles)
    if state.in_motion() {
        check_collisions(world, config, events);
    }

    // 6. AI picks its next paddle command
    update_ai(world, config, state, rng);

    // 7. Move ball
    if state.in_motion() && !scored {
        move_ball(world);
    }
}

/// Helper to create the human paddle entity
pub fn create_paddle(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, top), PaddleIntent::new()))
}

/// Helper to create the AI-controlled right paddle
pub fn create_ai_paddle(world: &mut World, top: f32) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Right, top), PaddleIntent::new(), AiControlled))
}

/// Helper to create the ball entity with an empty trail
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel), Trail::new(config.trail_length)))
}
