//! Input state management
//!
//! Polls the macroquad keyboard state once per frame and maps it to actions.

use macroquad::prelude::*;
use super::Action;

/// Raw movement direction from the four directional actions.
///
/// Each axis takes the later-checked key when both are held (right beats
/// left, down beats up). The result is not normalized; the player scales it.
pub fn direction_from_held(left: bool, right: bool, up: bool, down: bool) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if left { direction.x = -1.0; }
    if right { direction.x = 1.0; }
    if up { direction.y = -1.0; }
    if down { direction.y = 1.0; }
    direction
}

/// Keyboard input state
#[derive(Debug, Default)]
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Movement direction for this frame (screen space, y down)
    pub fn move_direction(&self) -> Vec2 {
        direction_from_held(
            self.action_down(Action::MoveLeft),
            self.action_down(Action::MoveRight),
            self.action_down(Action::MoveUp),
            self.action_down(Action::MoveDown),
        )
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        is_key_down(key_for(action))
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(key_for(action))
    }
}

fn key_for(action: Action) -> KeyCode {
    match action {
        Action::MoveLeft => KeyCode::Left,
        Action::MoveRight => KeyCode::Right,
        Action::MoveUp => KeyCode::Up,
        Action::MoveDown => KeyCode::Down,
        Action::ToggleDebugOverlay => KeyCode::F3,
    }
}
