use serde::{Deserialize, Serialize};

/// Gravity added to vertical velocity every tick (units/tick^2, downward).
pub const GRAVITY: f32 = 0.5;
/// Terminal fall speed (units/tick). Upward speed is not capped.
pub const MAX_FALL_SPEED: f32 = 10.0;
/// Horizontal speed while a direction key is held.
pub const PLAYER_SPEED: f32 = 5.0;
/// Initial vertical velocity of a jump (negative is up).
pub const JUMP_POWER: f32 = -10.0;
/// Patrol speed of enemies (units/tick).
pub const ENEMY_SPEED: f32 = 2.0;
/// Player width for AABB collision.
pub const PLAYER_WIDTH: f32 = 40.0;
/// Player height for AABB collision.
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Power-up effect duration in milliseconds.
pub const POWERUP_DURATION_MS: u64 = 3000;
/// Jump multiplier applied while a power-up is active.
pub const POWERUP_JUMP_MULTIPLIER: f32 = 1.5;
/// Thickness of the ground strip along the bottom of the screen.
pub const GROUND_HEIGHT: f32 = 20.0;

/// Configurable physics parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub player_speed: f32,
    pub jump_power: f32,
    pub enemy_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            player_speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,
            enemy_speed: ENEMY_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Player spawn, top-left corner.
    pub spawn_x: f32,
    /// Unset means standing on the ground strip; see [`GameConfig::spawn_y`].
    pub spawn_y: Option<f32>,
    pub powerup_duration_ms: u64,
    pub powerup_jump_multiplier: f32,
    pub tick_rate_hz: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            screen_width: 800.0,
            screen_height: 600.0,
            spawn_x: 100.0,
            spawn_y: None,
            powerup_duration_ms: POWERUP_DURATION_MS,
            powerup_jump_multiplier: POWERUP_JUMP_MULTIPLIER,
            tick_rate_hz: 60.0,
        }
    }
}

/// A configuration value outside the range the simulation can work with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "{field} = {value} is invalid (expected {expected})"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn check(
    field: &'static str,
    value: f32,
    ok: bool,
    expected: &'static str,
) -> Result<(), ConfigError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

impl GameConfig {
    /// Spawn height: the configured value, or the player's top edge when
    /// standing on the ground strip with the configured player height.
    pub fn spawn_y(&self) -> f32 {
        self.spawn_y
            .unwrap_or(self.screen_height - GROUND_HEIGHT - self.physics.player_height)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("ADVENTURE_CONFIG")
            .unwrap_or_else(|_| "config/adventure.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }

    /// Reject tuning values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        check("physics.gravity", p.gravity, p.gravity > 0.0, "> 0")?;
        check(
            "physics.max_fall_speed",
            p.max_fall_speed,
            p.max_fall_speed > 0.0,
            "> 0",
        )?;
        check(
            "physics.player_speed",
            p.player_speed,
            p.player_speed >= 0.0,
            ">= 0",
        )?;
        check(
            "physics.jump_power",
            p.jump_power,
            p.jump_power < 0.0,
            "< 0 (upward)",
        )?;
        check(
            "physics.enemy_speed",
            p.enemy_speed,
            p.enemy_speed >= 0.0,
            ">= 0",
        )?;
        check(
            "physics.player_width",
            p.player_width,
            p.player_width > 0.0,
            "> 0",
        )?;
        check(
            "physics.player_height",
            p.player_height,
            p.player_height > 0.0,
            "> 0",
        )?;
        check(
            "screen_width",
            self.screen_width,
            self.screen_width > 0.0,
            "> 0",
        )?;
        check(
            "screen_height",
            self.screen_height,
            self.screen_height > 0.0,
            "> 0",
        )?;
        check(
            "tick_rate_hz",
            self.tick_rate_hz,
            self.tick_rate_hz > 0.0,
            "> 0",
        )?;
        check(
            "powerup_jump_multiplier",
            self.powerup_jump_multiplier,
            self.powerup_jump_multiplier >= 1.0,
            ">= 1.0",
        )?;
        check("spawn_x", self.spawn_x, true, "a finite number")?;
        let spawn_y = self.spawn_y();
        let ground_top = self.screen_height - GROUND_HEIGHT;
        check(
            "spawn_y",
            spawn_y,
            spawn_y + p.player_height <= ground_top,
            "player bottom at or above the ground strip",
        )?;
        Ok(())
    }
}
