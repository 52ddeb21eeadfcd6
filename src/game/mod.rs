//! Game module
//!
//! Per-frame simulation and drawing:
//! - Player: circle with constant-speed movement
//! - Collision: rect pass then circle pass against static obstacles
//! - Camera: screen offset centered on the player
//! - State: everything the frame loop owns
//! - Renderer: culled world drawing and debug overlay
//! - Runtime: frame rate limiting

pub mod camera;
pub mod collision;
pub mod player;
pub mod renderer;
pub mod runtime;
pub mod state;

// Re-export main types
pub use renderer::{draw_debug_overlay, draw_world};
pub use runtime::{limit_frame_rate, FpsLimit};
pub use state::GameState;
