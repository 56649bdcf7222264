//! Browser frontend for Pong
//!
//! Runs the `game_core` simulation on `requestAnimationFrame`, draws it on a
//! 2D canvas and plays sound cues through `<audio>` elements.
//! Note: DOM-facing modules are only compiled for the wasm32 target.

pub mod audio;
pub mod input;
pub mod logging;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod client;

#[cfg(target_arch = "wasm32")]
pub use client::PongClient;

use thiserror::Error;

/// Failures while attaching to the page
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no canvas element with id '{0}'")]
    NoCanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
