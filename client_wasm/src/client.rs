//! JS-facing handle that owns one match and its canvas

use game_core::{load_or_silent, play_cues, AudioSink, Difficulty, Game};
use tracing::{info, Level};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::audio::BrowserAudio;
use crate::input::{captures, handle_key_down, handle_key_up};
use crate::logging;
use crate::renderer::CanvasRenderer;
use crate::ClientError;

#[wasm_bindgen]
pub struct PongClient {
    game: Game,
    renderer: CanvasRenderer,
    audio: Box<dyn AudioSink>,
    last_ms: Option<f64>,
}

#[wasm_bindgen]
impl PongClient {
    /// Attach to the `<canvas>` with id `canvas_id` and start a match
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, seed: u64) -> Result<PongClient, JsValue> {
        logging::init(Level::DEBUG);

        let canvas = find_canvas(canvas_id)?;
        let game = Game::new(seed, Difficulty::default());
        canvas.set_width(game.config.width as u32);
        canvas.set_height(game.config.height as u32);

        let renderer = CanvasRenderer::new(&canvas)?;
        let audio = load_or_silent(BrowserAudio::load);
        info!(seed, "pong client ready");

        Ok(Self {
            game,
            renderer,
            audio,
            last_ms: None,
        })
    }

    /// Returns true if the key belongs to the game and its default should be prevented
    pub fn key_down(&mut self, key: &str) -> bool {
        if let Some(event) = handle_key_down(key) {
            self.game.push_input(event);
        }
        captures(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        if let Some(event) = handle_key_up(key) {
            self.game.push_input(event);
        }
        captures(key)
    }

    /// Advance to `now_ms` (a `requestAnimationFrame` timestamp) and redraw.
    ///
    /// Returns false once the player has quit.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let dt = match self.last_ms.replace(now_ms) {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };

        let cues = self.game.advance(dt);
        play_cues(self.audio.as_mut(), &cues);
        self.renderer.draw(&self.game.frame());

        if self.game.state.quit {
            info!(
                left = self.game.score.left,
                right = self.game.score.right,
                "player quit"
            );
        }
        !self.game.state.quit
    }

    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u32 {
        self.game.score.left
    }

    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u32 {
        self.game.score.right
    }
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ClientError::NoCanvas(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ClientError::NoCanvas(canvas_id.to_string()))
}
