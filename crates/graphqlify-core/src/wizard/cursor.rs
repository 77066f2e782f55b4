//! Highlight position and viewport size for one option list

use std::ops::Range;

/// Highlighted row of a list plus how many rows fit on screen
///
/// A window of 0 means the viewport is not known yet; every row is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    window: usize,
}

impl SelectionCursor {
    pub fn at(index: usize) -> Self {
        Self { index, window: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            (self.index - 1).min(len - 1)
        };
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Only the window changes; the highlighted row is kept.
    pub fn set_window(&mut self, rows: usize) {
        self.window = rows;
    }

    /// Rows to draw so that the highlighted row stays in view
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        if self.window == 0 || self.window >= len {
            return 0..len;
        }
        let index = self.index.min(len.saturating_sub(1));
        let start = (index + 1).saturating_sub(self.window);
        start..start + self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut cursor = SelectionCursor::default();
        cursor.previous(3);
        assert_eq!(cursor.index(), 2);
        cursor.next(3);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut cursor = SelectionCursor::at(0);
        cursor.next(0);
        cursor.previous(0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_set_window_keeps_index() {
        let mut cursor = SelectionCursor::at(3);
        cursor.set_window(2);
        cursor.set_window(10);
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.window(), 10);
    }

    #[test]
    fn test_visible_range_follows_cursor() {
        let mut cursor = SelectionCursor::at(0);
        assert_eq!(cursor.visible_range(5), 0..5);

        cursor.set_window(2);
        assert_eq!(cursor.visible_range(5), 0..2);

        for _ in 0..3 {
            cursor.next(5);
        }
        assert_eq!(cursor.visible_range(5), 2..4);

        cursor.set_window(8);
        assert_eq!(cursor.visible_range(5), 0..5);
    }
}
