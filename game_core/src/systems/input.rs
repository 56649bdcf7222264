use hecs::World;
use tracing::debug;

use crate::systems::scoring::serve;
use crate::{
    Config, Events, GameRng, InputEvent, InputQueue, Key, MatchState, Paddle, PaddleIntent,
    ServeCooldown, Side,
};

/// Ingest queued input events: paddle commands and match toggles.
///
/// Runs even while paused, so the player can always unpause. A serve
/// while paused is accepted; the ball waits for the unpause to move.
#[allow(clippy::too_many_arguments)]
pub fn ingest_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    state: &mut MatchState,
    cooldown: &ServeCooldown,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    for event in queue.drain() {
        match event {
            InputEvent::Quit => state.quit = true,
            InputEvent::KeyDown(Key::Serve) => {
                serve(world, config, state, cooldown, rng, events);
            }
            InputEvent::KeyDown(Key::Pause) => {
                state.paused = !state.paused;
                debug!(paused = state.paused, "pause toggled");
            }
            InputEvent::KeyDown(Key::Difficulty(difficulty)) => {
                if state.difficulty != difficulty {
                    debug!(from = ?state.difficulty, to = ?difficulty, "difficulty changed");
                }
                state.difficulty = difficulty;
            }
            InputEvent::KeyDown(Key::Up) => set_human_velocity(world, -config.paddle_speed),
            InputEvent::KeyDown(Key::Down) => set_human_velocity(world, config.paddle_speed),
            // Releasing either arrow stops the paddle, even if the other is held
            InputEvent::KeyUp(Key::Up) | InputEvent::KeyUp(Key::Down) => {
                set_human_velocity(world, 0.0)
            }
            InputEvent::KeyUp(_) => {}
        }
    }
}

fn set_human_velocity(world: &mut World, velocity: f32) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Left {
            intent.velocity = velocity;
        }
    }
}
