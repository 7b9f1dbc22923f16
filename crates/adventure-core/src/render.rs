use crate::color::Color;

/// Drawing backend the game pushes its visible state into once per frame.
///
/// The game only supplies positions, sizes, colors and strings; how they end
/// up on screen is entirely up to the implementor.
pub trait RenderSink {
    /// Start a new frame filled with `background`.
    fn clear(&mut self, background: Color);

    /// Draw an axis-aligned filled rectangle with its top-left at (`x`, `y`).
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draw a line of text with its top-left at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);

    /// Finish the frame.
    fn present(&mut self);
}
