use adventure_core::color::Color;
use adventure_core::render::RenderSink;

/// Failure to set up the text frame buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererError {
    /// Terminal viewport with no rows or columns.
    ZeroViewport { cols: usize, rows: usize },
    /// Game field that cannot be scaled onto the viewport.
    InvalidField { width: f32, height: f32 },
}

impl std::fmt::Display for RendererError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroViewport { cols, rows } => {
                write!(f, "viewport {cols}x{rows} has no drawable cells")
            },
            Self::InvalidField { width, height } => {
                write!(f, "game field {width}x{height} must be positive and finite")
            },
        }
    }
}

impl std::error::Error for RendererError {}

/// ASCII frame buffer. World coordinates are scaled down onto a grid of
/// character cells; the finished frame is kept as a string after `present`.
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<char>,
    frame: String,
}

impl TextRenderer {
    pub fn new(
        cols: usize,
        rows: usize,
        field_width: f32,
        field_height: f32,
    ) -> Result<Self, RendererError> {
        if cols == 0 || rows == 0 {
            return Err(RendererError::ZeroViewport { cols, rows });
        }
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(field_width) || !valid(field_height) {
            return Err(RendererError::InvalidField {
                width: field_width,
                height: field_height,
            });
        }

        Ok(Self {
            cols,
            rows,
            scale_x: cols as f32 / field_width,
            scale_y: rows as f32 / field_height,
            cells: vec![' '; cols * rows],
            frame: String::new(),
        })
    }

    /// The last presented frame, one line per row.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::RED => 'E',
            Color::YELLOW => 'o',
            Color::CYAN => '+',
            c if c.luma() > 128 => '#',
            _ => '=',
        }
    }

    fn to_cell(&self, x: f32, y: f32) -> (isize, isize) {
        (
            (x * self.scale_x).floor() as isize,
            (y * self.scale_y).floor() as isize,
        )
    }

    fn put(&mut self, col: isize, row: isize, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }
}

impl RenderSink for TextRenderer {
    fn clear(&mut self, _background: Color) {
        self.cells.fill(' ');
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (c0, r0) = self.to_cell(x, y);
        let (c1, r1) = self.to_cell(x + width, y + height);
        let ch = Self::glyph(color);
        // Anything with a positive size covers at least one cell.
        for row in r0..r1.max(r0 + 1) {
            for col in c0..c1.max(c0 + 1) {
                self.put(col, row, ch);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _color: Color) {
        let (c0, row) = self.to_cell(x, y);
        for (i, ch) in text.chars().enumerate() {
            self.put(c0 + i as isize, row, ch);
        }
    }

    fn present(&mut self) {
        self.frame.clear();
        for row in self.cells.chunks(self.cols) {
            self.frame.extend(row.iter());
            self.frame.push('\n');
        }
    }
}
