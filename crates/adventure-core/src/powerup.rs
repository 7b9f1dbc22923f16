use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Marker for game-specific power-up kind enums.
pub trait PowerUpKind: Clone + Copy + PartialEq + Serialize + DeserializeOwned {}

/// Timed power-up effect, generic over the kind enum.
///
/// The effect is live while `now - started_at_ms <= duration_ms` and expires on
/// the first query where that difference exceeds the duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ActivePowerUp<K: PowerUpKind> {
    pub kind: K,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl<K: PowerUpKind> ActivePowerUp<K> {
    pub fn with_duration(kind: K, now_ms: u64, duration_ms: u64) -> Self {
        Self {
            kind,
            started_at_ms: now_ms,
            duration_ms,
        }
    }

    /// Restart the timer from `now_ms`, keeping kind and duration.
    pub fn restart(&mut self, now_ms: u64) {
        self.started_at_ms = now_ms;
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) > self.duration_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }
}
