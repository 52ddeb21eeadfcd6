//! Game state owned by the frame loop
//!
//! Everything the loop reads and writes lives here and is passed by reference
//! to the systems that need it. The world and its obstacles are fixed at
//! construction; only the player and camera change per frame.

use macroquad::math::Vec2;
use crate::config::GameConfig;
use crate::world::World;
use super::camera::Camera;
use super::collision::{move_player, CollisionResult, Obstacles};
use super::player::Player;

pub struct GameState {
    pub world: World,
    /// Obstacles derived from `world`, split by collision shape
    pub obstacles: Obstacles,
    pub player: Player,
    pub camera: Camera,
    pub viewport_size: Vec2,

    /// Seed the world was generated from
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    /// Result of the most recent update
    pub last_collision: Option<CollisionResult>,

    pub debug_log: bool,
    /// Show debug overlay (position, camera, FPS)
    pub show_debug_overlay: bool,
}

impl GameState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let world = World::generate(config, seed);
        let obstacles = Obstacles::from_world(&world);
        let spawn = world.house.spawn_point(config.player_radius);
        let player = Player::new(spawn, config.player_radius, config.player_speed);
        let viewport_size = Vec2::new(config.screen_width, config.screen_height);

        Self {
            world,
            obstacles,
            player,
            camera: Camera::follow(spawn, viewport_size),
            viewport_size,
            seed,
            frame: 0,
            last_collision: None,
            debug_log: config.debug_log,
            show_debug_overlay: false,
        }
    }

    /// Track the real drawable size, which can differ from the configured one
    /// (a browser canvas, a window manager that ignores the request)
    pub fn set_viewport_size(&mut self, viewport_size: Vec2) {
        if viewport_size != self.viewport_size {
            self.viewport_size = viewport_size;
            self.camera = Camera::follow(self.player.center, viewport_size);
        }
    }

    /// Advance one frame: move the player along `direction`, then re-center
    /// the camera on it
    pub fn update(&mut self, direction: Vec2) -> CollisionResult {
        let movement = self.player.movement(direction);
        let result = move_player(&mut self.player, movement, &self.obstacles, self.debug_log);
        self.camera = Camera::follow(self.player.center, self.viewport_size);
        self.last_collision = Some(result);
        self.frame += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default config with no random objects, so only the house collides
    fn empty_world_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.stones = crate::world::SpawnRange::new(0, 0, 25, 60);
        config.scraps = crate::world::SpawnRange::new(0, 0, 30, 50);
        config.bushes = crate::world::SpawnRange::new(0, 0, 40, 70);
        config
    }

    #[test]
    fn test_spawns_outside_door() {
        let state = GameState::new(&empty_world_config(), 1);
        assert_eq!(state.player.center, Vec2::new(125.0, 0.0));
        assert_eq!(state.camera.offset, Vec2::new(125.0 - 500.0, -400.0));
        assert_eq!(state.obstacles.rects.len(), 5);
        assert!(state.obstacles.circles.is_empty());
    }

    #[test]
    fn test_idle_frames_do_not_move() {
        let mut state = GameState::new(&GameConfig::default(), 42);
        let start = state.player.center;
        for _ in 0..10 {
            state.update(Vec2::ZERO);
        }
        assert_eq!(state.player.center, start);
        assert_eq!(state.frame, 10);
    }

    #[test]
    fn test_walk_through_door() {
        let mut state = GameState::new(&empty_world_config(), 1);
        // Walk left through the door gap into the house until the left wall stops us
        for _ in 0..200 {
            state.update(Vec2::new(-1.0, 0.0));
        }
        let left_wall = state.world.house.walls[2];
        assert_eq!(state.player.bounds().left(), left_wall.right());
        assert_eq!(state.player.center.y, 0.0);
        assert_eq!(state.camera.offset, state.player.center - Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_camera_follows_actual_viewport() {
        let mut state = GameState::new(&empty_world_config(), 1);
        state.set_viewport_size(Vec2::new(640.0, 480.0));
        assert_eq!(state.camera.offset, Vec2::new(125.0 - 320.0, -240.0));

        state.update(Vec2::new(0.0, 1.0));
        assert_eq!(state.camera.offset, state.player.center - Vec2::new(320.0, 240.0));
        assert_eq!(state.camera.viewport.w, 640.0);
        assert_eq!(state.camera.viewport.h, 480.0);
    }

    #[test]
    fn test_blocked_by_right_wall() {
        let mut state = GameState::new(&empty_world_config(), 1);
        // Step up out of the gap's line, then walk left into the upper right segment
        state.player.center = Vec2::new(125.0, -60.0);
        for _ in 0..20 {
            state.update(Vec2::new(-1.0, 0.0));
        }
        let right_top = *state.world.house.right_top();
        assert_eq!(state.player.bounds().left(), right_top.right());
        assert!(state.last_collision.map_or(false, |c| c.hit_x));
    }
}
