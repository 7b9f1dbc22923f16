pub mod color;
pub mod input;
pub mod powerup;
pub mod render;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::cell::Cell;

    use crate::color::Color;
    use crate::input::{InputState, Key};
    use crate::render::RenderSink;
    use crate::time::Clock;

    /// Clock that only moves when told to.
    #[derive(Debug, Default)]
    pub struct ManualClock {
        now: Cell<u64>,
    }

    impl ManualClock {
        pub fn new(start_ms: u64) -> Self {
            Self {
                now: Cell::new(start_ms),
            }
        }

        pub fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }

        pub fn set(&self, ms: u64) {
            self.now.set(ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }

    /// Input with the given keys held (not freshly pressed).
    pub fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.on_key_down(key);
        }
        input.end_frame();
        input
    }

    /// Input with the given keys pressed this frame.
    pub fn pressed(keys: &[Key]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.on_key_down(key);
        }
        input
    }

    /// A single recorded render call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        Clear(Color),
        Rect {
            x: f32,
            y: f32,
            width: f32,
            height: f32,
            color: Color,
        },
        Text {
            text: String,
            x: f32,
            y: f32,
            color: Color,
        },
        Present,
    }

    /// Render sink that records every call for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn rects_with_color(&self, wanted: Color) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == wanted))
                .count()
        }
    }

    impl RenderSink for RecordingSink {
        fn clear(&mut self, background: Color) {
            self.commands.push(DrawCommand::Clear(background));
        }

        fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.commands.push(DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            });
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
            self.commands.push(DrawCommand::Text {
                text: text.to_string(),
                x,
                y,
                color,
            });
        }

        fn present(&mut self) {
            self.commands.push(DrawCommand::Present);
        }
    }
}
