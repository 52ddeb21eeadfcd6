//! Keyboard input
//!
//! Action-based input: systems ask about actions, only `InputState` knows
//! which keys they map to.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
