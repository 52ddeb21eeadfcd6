//! World-space geometry
//!
//! Small value types used for both positional state and spatial queries.
//! Everything works in floating-point world units; vectors are macroquad's
//! `Vec2`.

mod rect;
mod circle;

pub use rect::Rect;
pub use circle::Circle;
