//! Cell-grid render primitives for the panel view-models.
//!
//! View-models draw rows of text with semantic roles; tests assert on
//! `row_text`/`snapshot` output. No terminal backend is attached here.

/// Frame dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

/// Semantic role for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRole {
    #[default]
    Primary,
    Muted,
    Accent,
    Danger,
}

/// A single frame cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: char,
    pub role: TextRole,
}

impl FrameCell {
    const BLANK: FrameCell = FrameCell {
        glyph: ' ',
        role: TextRole::Primary,
    };
}

/// Row-addressable text frame with per-cell roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    size: FrameSize,
    cells: Vec<FrameCell>,
}

impl RenderFrame {
    /// Create a blank frame of the given dimensions.
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            cells: vec![FrameCell::BLANK; size.width.saturating_mul(size.height)],
        }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Returns one frame cell for assertions.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<FrameCell> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.cells[y * self.size.width + x])
    }

    /// Write a single cell, clipped to frame bounds.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: FrameCell) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        self.cells[y * self.size.width + x] = cell;
    }

    /// Draw text on a single row, clipped to frame width.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str, role: TextRole) {
        if y >= self.size.height || x >= self.size.width {
            return;
        }
        for (offset, glyph) in text.chars().enumerate() {
            let col = x + offset;
            if col >= self.size.width {
                break;
            }
            self.cells[y * self.size.width + col] = FrameCell { glyph, role };
        }
    }

    /// Copy another frame into this one at the given offset, clipped.
    pub fn blit(&mut self, src: &RenderFrame, x_offset: usize, y_offset: usize) {
        for sy in 0..src.size.height {
            for sx in 0..src.size.width {
                if let Some(cell) = src.cell(sx, sy) {
                    self.set_cell(x_offset + sx, y_offset + sy, cell);
                }
            }
        }
    }

    /// The text content of one row.
    #[must_use]
    pub fn row_text(&self, y: usize) -> String {
        if y >= self.size.height {
            return String::new();
        }
        let start = y * self.size.width;
        let end = start + self.size.width;
        self.cells[start..end].iter().map(|cell| cell.glyph).collect()
    }

    /// Text-only snapshot helper for lightweight regression tests.
    #[must_use]
    pub fn snapshot(&self) -> String {
        (0..self.size.height)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameSize, RenderFrame, TextRole};

    #[test]
    fn draw_text_clips_to_frame_width() {
        let mut frame = RenderFrame::new(FrameSize {
            width: 5,
            height: 1,
        });
        frame.draw_text(2, 0, "abcdef", TextRole::Primary);
        assert_eq!(frame.row_text(0), "  abc");
    }

    #[test]
    fn roles_are_tracked_per_cell() {
        let mut frame = RenderFrame::new(FrameSize {
            width: 4,
            height: 1,
        });
        frame.draw_text(0, 0, "hi", TextRole::Accent);
        assert_eq!(frame.cell(0, 0).map(|cell| cell.role), Some(TextRole::Accent));
        assert_eq!(
            frame.cell(3, 0).map(|cell| cell.role),
            Some(TextRole::Primary)
        );
    }

    #[test]
    fn blit_copies_with_offset() {
        let mut dest = RenderFrame::new(FrameSize {
            width: 6,
            height: 2,
        });
        let mut src = RenderFrame::new(FrameSize {
            width: 3,
            height: 1,
        });
        src.draw_text(0, 0, "xyz", TextRole::Primary);
        dest.blit(&src, 2, 1);
        assert_eq!(dest.snapshot(), "      \n  xyz ");
    }

    #[test]
    fn out_of_bounds_access_is_harmless() {
        let mut frame = RenderFrame::new(FrameSize {
            width: 2,
            height: 2,
        });
        frame.draw_text(0, 9, "nope", TextRole::Primary);
        assert!(frame.cell(9, 0).is_none());
        assert_eq!(frame.row_text(9), "");
    }
}
