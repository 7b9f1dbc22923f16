use adventure_core::color::Color;

use crate::config::{GROUND_HEIGHT, GameConfig};
use crate::entity::{Platform, Rect};
use crate::level::{EnemySpawn, Level, PowerUpSpawn};
use crate::powerups::PowerUpKind;

/// Side length of coins and power-ups.
const PICKUP_SIZE: f32 = 20.0;
/// Side length of enemies.
const ENEMY_SIZE: f32 = 30.0;

fn ground(config: &GameConfig) -> Platform {
    Platform::new(
        0.0,
        config.screen_height - GROUND_HEIGHT,
        config.screen_width,
        GROUND_HEIGHT,
    )
}

fn enemy(platform: usize, offset_x: f32) -> EnemySpawn {
    EnemySpawn {
        platform,
        offset_x,
        width: ENEMY_SIZE,
        height: ENEMY_SIZE,
    }
}

fn pickup(x: f32, y: f32) -> Rect {
    Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE)
}

fn jump_boost(x: f32, y: f32) -> PowerUpSpawn {
    PowerUpSpawn {
        rect: pickup(x, y),
        kind: PowerUpKind::JumpBoost,
    }
}

/// Level one: a staircase of ledges over the ground, one guarded ledge.
pub fn level_one(config: &GameConfig) -> Level {
    let platforms = vec![
        ground(config),
        Platform::new(150.0, 500.0, 200.0, 20.0),
        Platform::new(420.0, 430.0, 160.0, 20.0),
        Platform::new(220.0, 350.0, 150.0, 20.0),
        Platform::new(520.0, 270.0, 180.0, 20.0),
    ];
    let enemies = [enemy(1, 0.0), enemy(4, 60.0)];
    let coins = vec![
        pickup(700.0, 550.0),
        pickup(240.0, 460.0),
        pickup(490.0, 390.0),
        pickup(285.0, 310.0),
        pickup(600.0, 230.0),
    ];
    let powerups = vec![jump_boost(330.0, 550.0)];

    Level::new(
        "Level 1",
        Color::DARK_BLUE,
        platforms,
        &enemies,
        config.physics.enemy_speed,
        coins,
        powerups,
    )
}

/// Level two: zig-zag climb with three patrolled ledges.
pub fn level_two(config: &GameConfig) -> Level {
    let platforms = vec![
        ground(config),
        Platform::new(80.0, 500.0, 140.0, 20.0),
        Platform::new(300.0, 440.0, 140.0, 20.0),
        Platform::new(520.0, 380.0, 140.0, 20.0),
        Platform::new(330.0, 300.0, 120.0, 20.0),
        Platform::new(100.0, 230.0, 150.0, 20.0),
    ];
    let enemies = [enemy(2, 40.0), enemy(3, 100.0), enemy(5, 0.0)];
    let coins = vec![
        pickup(750.0, 550.0),
        pickup(130.0, 460.0),
        pickup(360.0, 400.0),
        pickup(580.0, 340.0),
        pickup(380.0, 260.0),
        pickup(160.0, 190.0),
    ];
    let powerups = vec![jump_boost(450.0, 550.0), jump_boost(560.0, 340.0)];

    Level::new(
        "Level 2",
        Color::DARK_GREEN,
        platforms,
        &enemies,
        config.physics.enemy_speed,
        coins,
        powerups,
    )
}

/// The full ordered level sequence.
pub fn campaign(config: &GameConfig) -> Vec<Level> {
    vec![level_one(config), level_two(config)]
}
