/*
[INPUT]:  Tab titles, horizontal padding, inter-tab spacing
[OUTPUT]: StripLayout with per-tab spans in content coordinates
[POS]:    Measurement layer for the scrollable tab strip
[UPDATE]: When changing label measurement or tab spacing
*/

use unicode_width::UnicodeWidthStr;

/// Horizontal extent of one tab inside the scrollable content, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpan {
    pub x: u16,
    pub width: u16,
}

impl TabSpan {
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.right()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripLayout {
    spans: Vec<TabSpan>,
    content_width: u16,
}

impl StripLayout {
    /// Lays tabs out left to right. Each tab is its label's display width plus
    /// `padding` cells on both sides; tabs are separated by `spacing` cells.
    pub fn measure<S: AsRef<str>>(titles: &[S], padding: u16, spacing: u16) -> Self {
        let mut spans = Vec::with_capacity(titles.len());
        let mut x: u16 = 0;
        for (index, title) in titles.iter().enumerate() {
            if index > 0 {
                x = x.saturating_add(spacing);
            }
            let label_width = u16::try_from(title.as_ref().width()).unwrap_or(u16::MAX);
            let width = label_width.saturating_add(padding.saturating_mul(2));
            spans.push(TabSpan { x, width });
            x = x.saturating_add(width);
        }
        Self {
            spans,
            content_width: x,
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn span(&self, index: usize) -> Option<TabSpan> {
        self.spans.get(index).copied()
    }

    pub fn spans(&self) -> &[TabSpan] {
        &self.spans
    }

    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    /// Largest scroll offset that still keeps the viewport filled.
    pub fn max_offset(&self, viewport_width: u16) -> u16 {
        self.content_width.saturating_sub(viewport_width)
    }

    /// Tab under a content-space column, spacing gaps excluded.
    pub fn index_at(&self, x: u16) -> Option<usize> {
        self.spans.iter().position(|span| span.contains(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        (1..=10).map(|n| format!("Tab{n}")).collect()
    }

    #[test]
    fn test_measure_spans() {
        let layout = StripLayout::measure(&titles(), 2, 1);
        assert_eq!(layout.len(), 10);
        assert_eq!(layout.span(0), Some(TabSpan { x: 0, width: 8 }));
        assert_eq!(layout.span(2), Some(TabSpan { x: 18, width: 8 }));
        assert_eq!(layout.span(5), Some(TabSpan { x: 45, width: 8 }));
        assert_eq!(layout.span(9), Some(TabSpan { x: 81, width: 9 }));
        assert_eq!(layout.content_width(), 90);
        assert_eq!(layout.span(10), None);
    }

    #[test]
    fn test_wide_characters_measured_by_display_width() {
        let layout = StripLayout::measure(&["タブ", "ab"], 1, 0);
        assert_eq!(layout.span(0), Some(TabSpan { x: 0, width: 6 }));
        assert_eq!(layout.span(1), Some(TabSpan { x: 6, width: 4 }));
    }

    #[test]
    fn test_index_at_skips_gaps() {
        let layout = StripLayout::measure(&titles(), 2, 1);
        assert_eq!(layout.index_at(0), Some(0));
        assert_eq!(layout.index_at(7), Some(0));
        assert_eq!(layout.index_at(8), None);
        assert_eq!(layout.index_at(9), Some(1));
        assert_eq!(layout.index_at(89), Some(9));
        assert_eq!(layout.index_at(90), None);
    }

    #[test]
    fn test_max_offset() {
        let layout = StripLayout::measure(&titles(), 2, 1);
        assert_eq!(layout.max_offset(40), 50);
        assert_eq!(layout.max_offset(120), 0);
    }

    #[test]
    fn test_empty_titles() {
        let layout = StripLayout::measure::<&str>(&[], 2, 1);
        assert!(layout.is_empty());
        assert_eq!(layout.content_width(), 0);
        assert_eq!(layout.index_at(0), None);
    }
}
