//! World renderer
//!
//! Projects every object through the camera, skips anything off screen and
//! draws the rest with macroquad primitives. Draw order: ground, walls,
//! stones, scrap, bushes, player.

use macroquad::prelude::*;
use crate::geometry::Rect;
use crate::theme::*;
use crate::world::ObjectKind;
use super::state::GameState;

/// Draw one frame of the world. Returns how many objects were drawn.
pub fn draw_world(state: &GameState) -> usize {
    clear_background(GRASS_GREEN);

    let mut drawn = 0;
    for (kind, rect) in state.world.objects() {
        let Some(screen) = state.camera.project(rect) else { continue };
        match kind {
            ObjectKind::Wall => draw_filled_rect(&screen, WALL_BROWN),
            ObjectKind::Stone => draw_stone(&screen),
            ObjectKind::Scrap => draw_filled_rect(&screen, SCRAP_BLACK),
            ObjectKind::Bush => {
                draw_circle(screen.center_x(), screen.center_y(), screen.w * 0.5, BUSH_GREEN);
            }
        }
        drawn += 1;
    }

    if state.camera.project(&state.player.bounds()).is_some() {
        let center = state.camera.world_to_screen(state.player.center);
        draw_circle(center.x, center.y, state.player.radius, SKIN_COLOR);
        drawn += 1;
    }

    drawn
}

fn draw_filled_rect(rect: &Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

/// Outlined grey disc with a small white highlight toward the top-left
fn draw_stone(rect: &Rect) {
    let outline = rect.inflate(STONE_OUTLINE_WIDTH * 2.0, STONE_OUTLINE_WIDTH * 2.0);
    draw_circle(outline.center_x(), outline.center_y(), outline.w * 0.5, STONE_OUTLINE);
    draw_circle(rect.center_x(), rect.center_y(), rect.w * 0.5, STONE_GRAY);

    let highlight_radius = (rect.w * STONE_HIGHLIGHT_SCALE).trunc().max(STONE_HIGHLIGHT_MIN_RADIUS);
    let offset_x = (rect.w * STONE_HIGHLIGHT_OFFSET).trunc();
    let offset_y = (rect.h * STONE_HIGHLIGHT_OFFSET).trunc();
    draw_circle(
        rect.center_x() - offset_x,
        rect.center_y() - offset_y,
        highlight_radius,
        STONE_HIGHLIGHT,
    );
}

/// Top-left HUD with player / camera numbers
pub fn draw_debug_overlay(state: &GameState, drawn: usize) {
    let lines = [
        format!("pos  {:.1}, {:.1}", state.player.center.x, state.player.center.y),
        format!("cam  {:.1}, {:.1}", state.camera.offset.x, state.camera.offset.y),
        format!("fps  {}", get_fps()),
        format!("drawn {} / {}", drawn, state.world.objects().count() + 1),
        format!("world {:.0} x {:.0}, seed {}", state.world.bounds.w, state.world.bounds.h, state.seed),
        collision_line(state),
    ];

    let line_height = FONT_SIZE_OVERLAY + 2.0;
    let width = 300.0;
    let height = line_height * lines.len() as f32 + 8.0;
    draw_rectangle(4.0, 4.0, width, height, OVERLAY_BG);

    for (i, line) in lines.iter().enumerate() {
        let y = 4.0 + line_height * (i as f32 + 1.0);
        draw_text(line, 10.0, y, FONT_SIZE_OVERLAY, OVERLAY_TEXT);
    }
}

fn collision_line(state: &GameState) -> String {
    match state.last_collision {
        Some(c) => format!(
            "hit {}{}  push {:.1}, {:.1} ({})",
            if c.hit_x { "X" } else { "-" },
            if c.hit_y { "Y" } else { "-" },
            c.push_back.x,
            c.push_back.y,
            c.circle_contacts
        ),
        None => "hit --".to_string(),
    }
}
