//! OUTPOST: a top-down survival prototype
//!
//! A survivor walks around an open world larger than the screen:
//! - A small house at the origin with a single door on its right side
//! - Stones, scrap and bushes scattered at random
//! - Camera locked on the player, everything off screen culled
//!
//! Walls and scrap block as rectangles, stones and bushes as circles.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod geometry;
mod input;
mod theme;
mod world;

use macroquad::prelude::*;
use config::CONFIG_PATH;
use game::{draw_debug_overlay, draw_world, limit_frame_rate, GameState};
use input::{Action, InputState};

fn window_conf() -> Conf {
    // Errors are reported once, from main
    let config = config::load_config(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: format!("Outpost v{}", VERSION),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// World seed from the wall clock (milliseconds)
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // First run: leave an editable copy of the defaults behind
    #[cfg(not(target_arch = "wasm32"))]
    {
        if !std::path::Path::new(CONFIG_PATH).exists() {
            match config::save_config(&config::GameConfig::default(), CONFIG_PATH) {
                Ok(()) => println!("Wrote default config to {}", CONFIG_PATH),
                Err(e) => eprintln!("Failed to write default config {}: {}", CONFIG_PATH, e),
            }
        }
    }

    let config = config::load_or_default(CONFIG_PATH);
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::new(&config, seed);
    let input = InputState::new();

    println!("=== OUTPOST v{} ===", VERSION);
    println!(
        "World seed {}: {} stones, {} scrap, {} bushes",
        seed,
        state.world.stones.len(),
        state.world.scraps.len(),
        state.world.bushes.len()
    );
    let door = state.world.house.door();
    println!(
        "Spawned at ({:.0}, {:.0}), door at x={:.0} y={:.0}..{:.0}, fps limit {}",
        state.player.center.x,
        state.player.center.y,
        door.x,
        door.top(),
        door.bottom(),
        config.fps_limit.label()
    );

    // Handle the close button ourselves so the current frame finishes first
    prevent_quit();

    loop {
        let frame_start = get_time();

        if is_quit_requested() {
            println!("Quit requested after {} frames", state.frame);
            break;
        }

        if input.action_pressed(Action::ToggleDebugOverlay) {
            state.show_debug_overlay = !state.show_debug_overlay;
        }

        state.set_viewport_size(vec2(screen_width(), screen_height()));
        state.update(input.move_direction());

        let drawn = draw_world(&state);
        if state.show_debug_overlay {
            draw_debug_overlay(&state, drawn);
        }

        limit_frame_rate(frame_start, config.fps_limit);
        next_frame().await;
    }
}
