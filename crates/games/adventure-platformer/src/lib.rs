pub mod campaign;
pub mod collision;
pub mod config;
pub mod entity;
pub mod level;
pub mod physics;
pub mod powerups;
pub mod render;
pub mod scoring;

use serde::{Deserialize, Serialize};

use adventure_core::color::Color;
use adventure_core::input::InputSource;
use adventure_core::time::Clock;

use config::GameConfig;
use entity::{Bounded, Coin, Enemy, Platform, Player, PowerUp};
use level::Level;
use physics::FrameInput;
use powerups::{ActivePowerUp, PowerUpKind};

/// Lifecycle of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
    Finished,
}

/// Things that happened during a tick. Informational; the session state is
/// authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted,
    Landed,
    HitEnemy,
    CoinCollected { level: usize, level_coins: u32 },
    PowerUpCollected,
    PowerUpExpired,
    LevelAdvanced { index: usize },
    Finished { final_time_ms: u64 },
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: String,
    pub background: Color,
    pub screen_width: f32,
    pub screen_height: f32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    pub score: u32,
    pub total_coins: u32,
    pub level_coin_counts: Vec<u32>,
    pub elapsed_ms: u64,
    pub powerup_remaining_ms: Option<u64>,
}

/// One play session: the ordered levels, the player, and the state machine
/// that moves between them.
pub struct GameSession {
    config: GameConfig,
    levels: Vec<Level>,
    current_level: usize,
    level_coin_counts: Vec<u32>,
    /// Coins across all levels, fixed at construction.
    total_coins: u32,
    player: Player,
    /// Whether the previous tick ended resting on a platform top.
    supported: bool,
    state: GameState,
    start_time_ms: u64,
    final_time_ms: Option<u64>,
    /// At most one effect at a time; collecting another restarts it.
    active_powerup: Option<ActivePowerUp>,
}

impl GameSession {
    /// Session over the built-in campaign.
    pub fn new(config: GameConfig) -> Self {
        let levels = campaign::campaign(&config);
        Self::with_levels(config, levels)
    }

    /// Session over a custom level sequence. An empty sequence falls back to
    /// the built-in campaign.
    pub fn with_levels(config: GameConfig, levels: Vec<Level>) -> Self {
        let levels = if levels.is_empty() {
            tracing::warn!("No levels supplied, using the built-in campaign");
            campaign::campaign(&config)
        } else {
            levels
        };
        let total_coins = levels.iter().map(Level::initial_coin_count).sum();
        let mut player = Player::new(
            config.spawn_x,
            config.spawn_y(),
            config.physics.player_width,
            config.physics.player_height,
        );
        player.is_on_ground = true;

        Self {
            level_coin_counts: vec![0; levels.len()],
            config,
            levels,
            current_level: 0,
            total_coins,
            player,
            supported: true,
            state: GameState::Start,
            start_time_ms: 0,
            final_time_ms: None,
            active_powerup: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn level_coin_counts(&self) -> &[u32] {
        &self.level_coin_counts
    }

    pub fn total_coins(&self) -> u32 {
        self.total_coins
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn powerup_active(&self) -> bool {
        self.active_powerup.is_some()
    }

    pub fn final_time_ms(&self) -> Option<u64> {
        self.final_time_ms
    }

    /// Run time so far: zero before the first start, frozen once finished.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.state {
            GameState::Start => 0,
            GameState::Finished => self.final_time_ms.unwrap_or(0),
            GameState::Playing | GameState::GameOver => now_ms.saturating_sub(self.start_time_ms),
        }
    }

    /// Poll the input source and clock, then advance one tick.
    pub fn tick(&mut self, input: &dyn InputSource, clock: &dyn Clock) -> Vec<GameEvent> {
        self.step(&FrameInput::poll(input), clock.now_ms())
    }

    /// Advance one tick: handle lifecycle input, then simulate if playing.
    pub fn step(&mut self, input: &FrameInput, now_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.state {
            GameState::Start => {
                if input.start {
                    self.start_run(now_ms);
                    events.push(GameEvent::Started);
                }
            },
            GameState::Playing => {
                if input.restart {
                    self.restart_level();
                    events.push(GameEvent::Restarted);
                }
            },
            GameState::GameOver => {
                if input.start || input.restart {
                    self.restart_level();
                    self.state = GameState::Playing;
                    events.push(GameEvent::Restarted);
                }
            },
            GameState::Finished => {
                if input.start || input.restart {
                    self.start_run(now_ms);
                    events.push(GameEvent::Started);
                }
            },
        }

        if self.state == GameState::Playing {
            self.simulate(input, now_ms, &mut events);
        }

        events
    }

    /// Copy out the state a renderer needs.
    pub fn snapshot(&self, now_ms: u64) -> SessionSnapshot {
        let level = self.current_level();
        SessionSnapshot {
            state: self.state,
            level_index: self.current_level,
            level_count: self.levels.len(),
            level_name: level.name().to_string(),
            background: level.background(),
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            player: self.player.clone(),
            platforms: level.platforms().to_vec(),
            enemies: level.enemies().to_vec(),
            coins: level.coins().to_vec(),
            powerups: level.powerups().to_vec(),
            score: self.player.score,
            total_coins: self.total_coins,
            level_coin_counts: self.level_coin_counts.clone(),
            elapsed_ms: self.elapsed_ms(now_ms),
            powerup_remaining_ms: self
                .active_powerup
                .as_ref()
                .map(|pu| pu.remaining_ms(now_ms)),
        }
    }

    fn simulate(&mut self, input: &FrameInput, now_ms: u64, events: &mut Vec<GameEvent>) {
        if self
            .active_powerup
            .as_ref()
            .is_some_and(|pu| pu.is_expired(now_ms))
        {
            self.clear_powerup();
            tracing::debug!("Power-up expired");
            events.push(GameEvent::PowerUpExpired);
        }

        let physics_cfg = &self.config.physics;
        physics::apply_intent(&mut self.player, input, physics_cfg);
        physics::integrate(&mut self.player, physics_cfg);

        let idx = self.current_level;
        let level = &mut self.levels[idx];
        level.tick_enemies();

        let landed = collision::resolve_platforms(&mut self.player, level.platforms());
        if landed && !self.supported {
            events.push(GameEvent::Landed);
        }
        self.supported = landed;

        let rect = self.player.rect();
        if collision::hits_enemy(&rect, level.enemies()) {
            self.state = GameState::GameOver;
            tracing::info!(level = idx + 1, score = self.player.score, "Game over");
            events.push(GameEvent::HitEnemy);
            return;
        }

        let coins = collision::collect_coins(&rect, level.coins_mut());
        let powerups = collision::collect_powerups(&rect, level.powerups_mut());
        let cleared = level.is_cleared();

        if coins > 0 {
            self.level_coin_counts[idx] += coins;
            self.sync_score();
            tracing::debug!(
                level = idx + 1,
                level_coins = self.level_coin_counts[idx],
                score = self.player.score,
                "Coin collected"
            );
            events.push(GameEvent::CoinCollected {
                level: idx,
                level_coins: self.level_coin_counts[idx],
            });
        }

        if powerups > 0 {
            self.activate_powerup(now_ms);
            events.push(GameEvent::PowerUpCollected);
        }

        if cleared {
            self.advance_or_finish(now_ms, events);
        }
    }

    fn advance_or_finish(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        if self.current_level + 1 < self.levels.len() {
            self.current_level += 1;
            self.respawn_player();
            self.clear_powerup();
            tracing::debug!(level = self.current_level + 1, "Advanced to next level");
            events.push(GameEvent::LevelAdvanced {
                index: self.current_level,
            });
        } else {
            let final_time_ms = now_ms.saturating_sub(self.start_time_ms);
            self.final_time_ms = Some(final_time_ms);
            self.state = GameState::Finished;
            tracing::info!(final_time_ms, score = self.player.score, "Run finished");
            events.push(GameEvent::Finished { final_time_ms });
        }
    }

    /// Fresh run from the first level: all progress cleared, timer restarted.
    fn start_run(&mut self, now_ms: u64) {
        self.current_level = 0;
        self.level_coin_counts.fill(0);
        for level in &mut self.levels {
            level.reset();
        }
        self.respawn_player();
        self.clear_powerup();
        self.start_time_ms = now_ms;
        self.final_time_ms = None;
        self.state = GameState::Playing;
        self.sync_score();
        tracing::info!(levels = self.levels.len(), "Run started");
    }

    /// Replay the current level only; earlier levels keep their coins.
    fn restart_level(&mut self) {
        let idx = self.current_level;
        self.level_coin_counts[idx] = 0;
        self.levels[idx].reset();
        self.respawn_player();
        self.clear_powerup();
        self.sync_score();
        tracing::info!(level = idx + 1, score = self.player.score, "Level restarted");
    }

    fn respawn_player(&mut self) {
        self.player
            .respawn(self.config.spawn_x, self.config.spawn_y());
        self.supported = true;
    }

    /// Start the boost, or restart the running timer if one is already active.
    fn activate_powerup(&mut self, now_ms: u64) {
        if let Some(active) = self.active_powerup.as_mut() {
            active.restart(now_ms);
        } else {
            self.active_powerup = Some(ActivePowerUp::with_duration(
                PowerUpKind::JumpBoost,
                now_ms,
                self.config.powerup_duration_ms,
            ));
        }
        self.player.jump_multiplier = self.config.powerup_jump_multiplier;
        tracing::debug!(
            duration_ms = self.config.powerup_duration_ms,
            "Power-up activated"
        );
    }

    fn clear_powerup(&mut self) {
        self.active_powerup = None;
        self.player.jump_multiplier = 1.0;
    }

    fn sync_score(&mut self) {
        self.player.score = scoring::total_score(&self.level_coin_counts);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
