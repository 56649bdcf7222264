//! Sound effects through `<audio>` elements

use game_core::{AudioError, SoundCue};

/// Asset file for a cue, relative to the page
pub fn asset_for(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Collision => "assets/wall_collision.wav",
        SoundCue::Score => "assets/beep.wav",
    }
}

/// Whether a rejected `play()` means the cue can never play.
///
/// `NotAllowedError` is the autoplay policy before the first key press and
/// `AbortError` is our own `pause()` cutting a cue short; both are transient.
pub fn rejection_is_fatal(name: Option<&str>) -> bool {
    !matches!(name, Some("NotAllowedError") | Some("AbortError"))
}

/// Cues whose asset failed to load. Each failure is reported once.
#[derive(Debug, Default)]
pub struct AssetHealth {
    failed: Vec<SoundCue>,
}

impl AssetHealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_failed(&self, cue: SoundCue) -> bool {
        self.failed.contains(&cue)
    }

    /// Mute `cue`; returns the error to report the first time only
    pub fn fail(&mut self, cue: SoundCue, reason: &str) -> Option<AudioError> {
        if self.is_failed(cue) {
            return None;
        }
        self.failed.push(cue);
        Some(AudioError::AssetMissing(format!(
            "{} ({reason})",
            asset_for(cue)
        )))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserAudio;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{asset_for, rejection_is_fatal, AssetHealth};
    use game_core::{AudioError, AudioSink, SoundCue};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tracing::{trace, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;
    use web_sys::HtmlAudioElement;

    fn report(health: &RefCell<AssetHealth>, cue: SoundCue, reason: &str) {
        if let Some(err) = health.borrow_mut().fail(cue, reason) {
            warn!("{err}; {cue:?} sounds muted");
        }
    }

    /// One element per cue; starting a cue stops the other
    pub struct BrowserAudio {
        collision: HtmlAudioElement,
        score: HtmlAudioElement,
        health: Rc<RefCell<AssetHealth>>,
        on_reject_collision: Closure<dyn FnMut(JsValue)>,
        on_reject_score: Closure<dyn FnMut(JsValue)>,
    }

    impl BrowserAudio {
        pub fn load() -> Result<Self, AudioError> {
            let health = Rc::new(RefCell::new(AssetHealth::new()));
            Ok(Self {
                collision: load_element(SoundCue::Collision)?,
                score: load_element(SoundCue::Score)?,
                on_reject_collision: on_reject(SoundCue::Collision, health.clone()),
                on_reject_score: on_reject(SoundCue::Score, health.clone()),
                health,
            })
        }

        fn element(&self, cue: SoundCue) -> &HtmlAudioElement {
            match cue {
                SoundCue::Collision => &self.collision,
                SoundCue::Score => &self.score,
            }
        }

        fn rejection_handler(&self, cue: SoundCue) -> &Closure<dyn FnMut(JsValue)> {
            match cue {
                SoundCue::Collision => &self.on_reject_collision,
                SoundCue::Score => &self.on_reject_score,
            }
        }
    }

    fn load_element(cue: SoundCue) -> Result<HtmlAudioElement, AudioError> {
        let element = HtmlAudioElement::new_with_src(asset_for(cue))
            .map_err(|err| AudioError::Unavailable(format!("{err:?}")))?;
        element.set_preload("auto");
        Ok(element)
    }

    /// Handler for a rejected `play()` promise of `cue`
    fn on_reject(cue: SoundCue, health: Rc<RefCell<AssetHealth>>) -> Closure<dyn FnMut(JsValue)> {
        Closure::new(move |reason: JsValue| {
            let name = js_sys::Reflect::get(&reason, &JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string());
            if rejection_is_fatal(name.as_deref()) {
                report(&health, cue, name.as_deref().unwrap_or("playback failed"));
            } else {
                trace!(?cue, ?name, "playback interrupted");
            }
        })
    }

    impl AudioSink for BrowserAudio {
        fn play(&mut self, cue: SoundCue) {
            let current = self.element(cue);
            if let Some(media_error) = current.error() {
                report(&self.health, cue, &format!("media error {}", media_error.code()));
            }
            if self.health.borrow().is_failed(cue) {
                return;
            }

            let other = self.element(match cue {
                SoundCue::Collision => SoundCue::Score,
                SoundCue::Score => SoundCue::Collision,
            });
            let _ = other.pause();
            other.set_current_time(0.0);

            current.set_current_time(0.0);
            match current.play() {
                Ok(promise) => {
                    let _ = promise.catch(self.rejection_handler(cue));
                }
                Err(err) => trace!(?cue, ?err, "play() threw"),
            }
        }
    }
}
