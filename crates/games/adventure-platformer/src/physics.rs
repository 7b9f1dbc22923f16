use adventure_core::input::{InputSource, Key};

use crate::config::PhysicsConfig;
use crate::entity::{Enemy, Platform, Player};

/// Input for one tick, snapshotted from the frontend's input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Jump key held.
    pub jump: bool,
    /// Start key pressed this tick.
    pub start: bool,
    /// Restart key pressed this tick.
    pub restart: bool,
}

impl FrameInput {
    pub fn poll(source: &dyn InputSource) -> Self {
        Self {
            left: source.is_held(Key::Left),
            right: source.is_held(Key::Right),
            jump: source.is_held(Key::Up),
            start: source.just_pressed(Key::Space),
            restart: source.just_pressed(Key::Restart),
        }
    }

    /// -1, 0 or +1. Both directions held cancel out.
    pub fn move_dir(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Turn held keys into velocity intent. Returns true if a jump started.
pub fn apply_intent(player: &mut Player, input: &FrameInput, physics: &PhysicsConfig) -> bool {
    player.vx = input.move_dir() * physics.player_speed;

    if input.jump && player.is_on_ground {
        player.vy = physics.jump_power * player.jump_multiplier;
        player.is_on_ground = false;
        return true;
    }
    false
}

/// Gravity, fall-speed clamp, then unconditional position update.
pub fn integrate(player: &mut Player, physics: &PhysicsConfig) {
    player.vy += physics.gravity;
    if player.vy > physics.max_fall_speed {
        player.vy = physics.max_fall_speed;
    }

    player.x += player.vx;
    player.y += player.vy;
}

/// Advance an enemy along its patrol platform, turning around at either end.
pub fn tick_enemy(enemy: &mut Enemy, platform: &Platform) {
    let min_x = platform.x;
    let max_x = (platform.x + platform.width - enemy.width).max(min_x);

    enemy.x += enemy.vx;
    if enemy.x < min_x {
        enemy.x = min_x;
        enemy.vx = enemy.vx.abs();
    } else if enemy.x > max_x {
        enemy.x = max_x;
        enemy.vx = -enemy.vx.abs();
    }
}
