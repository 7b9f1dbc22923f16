use serde::{Deserialize, Serialize};

use adventure_core::color::Color;

use crate::entity::{Coin, Enemy, Platform, PowerUp, Rect};
use crate::physics::tick_enemy;
use crate::powerups::PowerUpKind;

/// Where an enemy starts: which platform it patrols and how far along it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub platform: usize,
    pub offset_x: f32,
    pub width: f32,
    pub height: f32,
}

/// Initial placement of a power-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpSpawn {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

/// One hand-authored stage.
///
/// Platforms and enemies live for the whole session. Coins and power-ups are
/// rebuilt from their initial placements by [`Level::reset`].
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    background: Color,
    platforms: Vec<Platform>,
    enemies: Vec<Enemy>,
    coins: Vec<Coin>,
    powerups: Vec<PowerUp>,
    initial_coins: Vec<Rect>,
    initial_powerups: Vec<PowerUpSpawn>,
}

impl Level {
    pub fn new(
        name: impl Into<String>,
        background: Color,
        platforms: Vec<Platform>,
        enemy_spawns: &[EnemySpawn],
        enemy_speed: f32,
        coins: Vec<Rect>,
        powerups: Vec<PowerUpSpawn>,
    ) -> Self {
        let name = name.into();
        let mut enemies = Vec::with_capacity(enemy_spawns.len());
        for spawn in enemy_spawns {
            match platforms.get(spawn.platform) {
                Some(platform) => enemies.push(Enemy::on_platform(
                    spawn.platform,
                    platform,
                    spawn.offset_x,
                    spawn.width,
                    spawn.height,
                    enemy_speed,
                )),
                None => tracing::warn!(
                    level = %name,
                    platform = spawn.platform,
                    "Enemy spawn references a missing platform, skipping"
                ),
            }
        }

        let mut level = Self {
            name,
            background,
            platforms,
            enemies,
            coins: Vec::new(),
            powerups: Vec::new(),
            initial_coins: coins,
            initial_powerups: powerups,
        };
        level.reset();
        level
    }

    /// Restore coins and power-ups to the initial layout with fresh,
    /// uncollected instances. Platforms and enemies are left alone.
    pub fn reset(&mut self) {
        self.coins = self.initial_coins.iter().copied().map(Coin::at).collect();
        self.powerups = self
            .initial_powerups
            .iter()
            .map(|s| PowerUp::at(s.rect, s.kind))
            .collect();
    }

    /// Move every enemy one step along its patrol platform.
    pub fn tick_enemies(&mut self) {
        for enemy in &mut self.enemies {
            if let Some(platform) = self.platforms.get(enemy.platform) {
                tick_enemy(enemy, platform);
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn powerups(&self) -> &[PowerUp] {
        &self.powerups
    }

    pub fn coins_mut(&mut self) -> &mut Vec<Coin> {
        &mut self.coins
    }

    pub fn powerups_mut(&mut self) -> &mut Vec<PowerUp> {
        &mut self.powerups
    }

    /// Number of coins in the initial layout.
    pub fn initial_coin_count(&self) -> u32 {
        self.initial_coins.len() as u32
    }

    /// True once every coin of the current run has been collected.
    pub fn is_cleared(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Bounded, Player};

    fn small_level() -> Level {
        Level::new(
            "test",
            Color::DARK_BLUE,
            vec![
                Platform::new(0.0, 580.0, 800.0, 20.0),
                Platform::new(200.0, 450.0, 100.0, 20.0),
            ],
            &[EnemySpawn {
                platform: 1,
                offset_x: 0.0,
                width: 30.0,
                height: 30.0,
            }],
            2.0,
            vec![
                Rect::new(300.0, 550.0, 20.0, 20.0),
                Rect::new(600.0, 550.0, 20.0, 20.0),
            ],
            vec![PowerUpSpawn {
                rect: Rect::new(400.0, 550.0, 20.0, 20.0),
                kind: PowerUpKind::JumpBoost,
            }],
        )
    }

    #[test]
    fn new_level_starts_with_initial_layout() {
        let level = small_level();
        assert_eq!(level.coins().len(), 2);
        assert_eq!(level.powerups().len(), 1);
        assert_eq!(level.enemies().len(), 1);
        assert_eq!(level.initial_coin_count(), 2);
        assert!(level.coins().iter().all(|c| !c.collected));
    }

    #[test]
    fn reset_restores_coins_and_powerups_only() {
        let mut level = small_level();
        let player = Player::new(290.0, 540.0, 40.0, 40.0);
        crate::collision::collect_coins(&player.rect(), level.coins_mut());
        level.powerups_mut().clear();
        for _ in 0..10 {
            level.tick_enemies();
        }
        let enemy_x = level.enemies()[0].x;
        let platforms = level.platforms().to_vec();

        level.reset();

        assert_eq!(level.coins().len(), 2);
        assert!(level.coins().iter().all(|c| !c.collected));
        assert_eq!(level.powerups().len(), 1);
        assert_eq!(level.enemies()[0].x, enemy_x, "Enemies keep patrolling");
        assert_eq!(level.platforms(), &platforms[..]);
    }

    #[test]
    fn spawn_with_bad_platform_is_skipped() {
        let level = Level::new(
            "broken",
            Color::BLACK,
            vec![Platform::new(0.0, 580.0, 800.0, 20.0)],
            &[EnemySpawn {
                platform: 7,
                offset_x: 0.0,
                width: 30.0,
                height: 30.0,
            }],
            2.0,
            Vec::new(),
            Vec::new(),
        );
        assert!(level.enemies().is_empty());
        assert!(level.is_cleared(), "A level without coins is already cleared");
    }
}
