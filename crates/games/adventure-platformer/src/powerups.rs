use serde::{Deserialize, Serialize};

use adventure_core::powerup;

/// Platformer power-up types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Multiplies jump velocity while active.
    JumpBoost,
}

impl powerup::PowerUpKind for PowerUpKind {}

/// The single timed effect a player can carry.
pub type ActivePowerUp = powerup::ActivePowerUp<PowerUpKind>;
