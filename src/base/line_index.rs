//! Offset ↔ line/column conversion.
//!
//! Editor hosts address positions by line and column; the parser works in
//! byte offsets. [`LineIndex`] is built once per buffer and converts both ways.

use text_size::TextSize;

/// A line/column pair (0-indexed, columns in bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first character of each line.
    newlines: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut newlines = vec![TextSize::new(0)];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                newlines.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { newlines }
    }

    /// Convert a byte offset to line/column.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .newlines
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = u32::from(offset) - u32::from(self.newlines[line]);
        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Convert a line/column to a byte offset.
    ///
    /// Returns `None` if the line is out of range.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.newlines.get(line_col.line as usize)?;
        Some(start + TextSize::new(line_col.col))
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        self.newlines.len()
    }
}
