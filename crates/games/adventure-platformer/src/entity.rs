use serde::{Deserialize, Serialize};

use adventure_core::color::Color;

use crate::powerups::PowerUpKind;

/// Axis-aligned bounding box, top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything with a current bounding box. The box is derived from position and
/// size on every call, so it can never go stale after a mutation.
pub trait Bounded {
    fn rect(&self) -> Rect;
}

/// The player-controlled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub is_on_ground: bool,
    /// 1.0 normally, boosted while a power-up is active.
    pub jump_multiplier: f32,
    /// Mirror of the session's per-level coin total; never edited on its own.
    pub score: u32,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            is_on_ground: false,
            jump_multiplier: 1.0,
            score: 0,
        }
    }

    /// Put the player back at a spawn point, standing and at rest.
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.is_on_ground = true;
    }
}

impl Bounded for Player {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Static level geometry. Never moves once the level is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Bounded for Platform {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A hazard patrolling the top of one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    /// Index of the patrol platform in the owning level's platform list.
    pub platform: usize,
}

impl Enemy {
    /// Place an enemy on top of `platform`, `offset_x` from its left edge,
    /// initially moving right at `speed`.
    pub fn on_platform(
        platform_index: usize,
        platform: &Platform,
        offset_x: f32,
        width: f32,
        height: f32,
        speed: f32,
    ) -> Self {
        let max_x = (platform.x + platform.width - width).max(platform.x);
        Self {
            x: (platform.x + offset_x).clamp(platform.x, max_x),
            y: platform.y - height,
            width,
            height,
            vx: speed.abs(),
            platform: platform_index,
        }
    }
}

impl Bounded for Enemy {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A collectible worth one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub collected: bool,
}

impl Coin {
    pub fn at(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            collected: false,
        }
    }
}

impl Bounded for Coin {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A collectible that grants a timed effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
}

impl PowerUp {
    pub fn at(rect: Rect, kind: PowerUpKind) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            kind,
            collected: false,
        }
    }
}

impl Bounded for PowerUp {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Borrowed view over every kind of visible entity, so renderers handle each
/// variant exhaustively.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Platform(&'a Platform),
    Enemy(&'a Enemy),
    Coin(&'a Coin),
    PowerUp(&'a PowerUp),
}

impl EntityRef<'_> {
    pub fn rect(&self) -> Rect {
        match self {
            EntityRef::Player(p) => p.rect(),
            EntityRef::Platform(p) => p.rect(),
            EntityRef::Enemy(e) => e.rect(),
            EntityRef::Coin(c) => c.rect(),
            EntityRef::PowerUp(p) => p.rect(),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EntityRef::Player(_) | EntityRef::Platform(_) => Color::WHITE,
            EntityRef::Enemy(_) => Color::RED,
            EntityRef::Coin(_) => Color::YELLOW,
            EntityRef::PowerUp(_) => Color::CYAN,
        }
    }

    /// Collected items linger for one tick at most; they are never drawn.
    pub fn is_visible(&self) -> bool {
        match self {
            EntityRef::Coin(c) => !c.collected,
            EntityRef::PowerUp(p) => !p.collected,
            _ => true,
        }
    }
}
