//! Colors and draw constants

use macroquad::prelude::Color;

// =============================================================================
// World
// =============================================================================

/// Ground
pub const GRASS_GREEN: Color = Color::new(0.275, 0.588, 0.275, 1.0); // 70, 150, 70

/// House walls
pub const WALL_BROWN: Color = Color::new(0.545, 0.271, 0.075, 1.0); // 139, 69, 19

/// Stone body
pub const STONE_GRAY: Color = Color::new(0.627, 0.627, 0.627, 1.0); // 160, 160, 160

/// Stone outline
pub const STONE_OUTLINE: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Stone highlight
pub const STONE_HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Scrap boxes
pub const SCRAP_BLACK: Color = Color::new(0.078, 0.078, 0.078, 1.0); // 20, 20, 20

/// Bushes
pub const BUSH_GREEN: Color = Color::new(0.157, 0.471, 0.157, 1.0); // 40, 120, 40

/// Player
pub const SKIN_COLOR: Color = Color::new(0.871, 0.722, 0.529, 1.0); // 222, 184, 135

// =============================================================================
// Stone shape
// =============================================================================

/// Outline width on each side of a stone
pub const STONE_OUTLINE_WIDTH: f32 = 3.0;

/// Highlight radius as a fraction of stone width
pub const STONE_HIGHLIGHT_SCALE: f32 = 0.15;

/// Smallest highlight radius in pixels
pub const STONE_HIGHLIGHT_MIN_RADIUS: f32 = 2.0;

/// Highlight offset up-left from center, as a fraction of stone size
pub const STONE_HIGHLIGHT_OFFSET: f32 = 0.1;

// =============================================================================
// Debug overlay
// =============================================================================

pub const OVERLAY_BG: Color = Color::new(0.0, 0.0, 0.0, 0.6);
pub const OVERLAY_TEXT: Color = Color::new(0.9, 0.9, 0.9, 1.0);
pub const FONT_SIZE_OVERLAY: f32 = 18.0;
