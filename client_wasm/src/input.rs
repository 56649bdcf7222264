//! Keyboard input handling

use game_core::{Difficulty, InputEvent, Key};

/// Map a `KeyboardEvent.key` value to the key the game knows about
pub fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        " " | "Spacebar" => Some(Key::Serve),
        "p" | "P" => Some(Key::Pause),
        "1" => Some(Key::Difficulty(Difficulty::Easy)),
        "2" => Some(Key::Difficulty(Difficulty::Medium)),
        "3" => Some(Key::Difficulty(Difficulty::Hard)),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<InputEvent> {
    if key == "Escape" {
        return Some(InputEvent::Quit);
    }
    map_key(key).map(InputEvent::KeyDown)
}

/// Handle key up event. Only the arrows care about release.
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    match map_key(key) {
        Some(k @ (Key::Up | Key::Down)) => Some(InputEvent::KeyUp(k)),
        _ => None,
    }
}

/// Whether the browser's default action for this key should be suppressed
pub fn captures(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | " " | "Spacebar")
}
