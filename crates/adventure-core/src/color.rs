use serde::{Deserialize, Serialize};

/// An opaque RGB color handed to the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 200, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 50);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);

    /// Perceived brightness in 0..=255, used by text backends to pick glyph density.
    pub fn luma(&self) -> u8 {
        let l = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        l.round().clamp(0.0, 255.0) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
