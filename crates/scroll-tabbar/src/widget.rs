/*
[INPUT]:  SelectionBinding, tab titles, TabBarStyle, TabBarState, frame area
[OUTPUT]: Ratatui StatefulWidget rendering the scrollable tab strip, tap handling
[POS]:    Tab bar widget - composes selection, indicator, and scroll animators
[UPDATE]: When changing tab strip rendering or hit testing
*/

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::StatefulWidget;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::indicator::{IndicatorAnimator, IndicatorSpan};
use crate::layout::StripLayout;
use crate::scroll::{self, ScrollPhase, ScrollSynchronizer};
use crate::selection::SelectionBinding;
use crate::style::TabBarStyle;

/// Horizontally scrollable tab strip with an animated underline.
///
/// The bar reads and writes the host's [`SelectionBinding`]; everything that
/// must survive between frames lives in [`TabBarState`].
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    binding: SelectionBinding,
    titles: Vec<&'a str>,
    style: TabBarStyle,
}

impl<'a> TabBar<'a> {
    pub fn new<S: AsRef<str>>(binding: SelectionBinding, titles: &'a [S]) -> Self {
        Self {
            binding,
            titles: titles.iter().map(|title| title.as_ref()).collect(),
            style: TabBarStyle::default(),
        }
    }

    /// Replaces the whole style, selected color included.
    pub fn style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn selected_color(mut self, color: Color) -> Self {
        self.style.selected_color = color;
        self
    }

    pub fn titles(&self) -> &[&'a str] {
        &self.titles
    }

    pub fn binding(&self) -> &SelectionBinding {
        &self.binding
    }

    pub fn height(&self) -> u16 {
        self.style.height()
    }

    /// User selected tab `index`.
    pub fn tap(&self, index: usize) {
        debug!(index, "tab tapped");
        self.binding.set(index);
    }

    /// Taps whatever tab was drawn under the given screen cell last frame.
    pub fn handle_click(&self, state: &TabBarState, column: u16, row: u16) -> Option<usize> {
        let index = state.tab_at(column, row)?;
        self.tap(index);
        Some(index)
    }

    fn resolve_selection(&self, state: &TabBarState) -> usize {
        let raw = self.binding.get();
        let last = self.titles.len().saturating_sub(1);
        if raw <= last {
            return raw;
        }
        if state.observed != Some(last) {
            warn!(
                selected = raw,
                tab_count = self.titles.len(),
                "selected index out of range; clamping"
            );
        }
        last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitRegion {
    index: usize,
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

impl HitRegion {
    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.left && column < self.right && row >= self.top && row < self.bottom
    }
}

/// Per-instance animation state of a [`TabBar`].
#[derive(Debug, Clone)]
pub struct TabBarState {
    now: Instant,
    observed: Option<usize>,
    indicator: IndicatorAnimator,
    scroll: ScrollSynchronizer,
    layout: StripLayout,
    hit_regions: Vec<HitRegion>,
}

impl Default for TabBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBarState {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            observed: None,
            indicator: IndicatorAnimator::default(),
            scroll: ScrollSynchronizer::default(),
            layout: StripLayout::default(),
            hit_regions: Vec::new(),
        }
    }

    /// Advances animations to `now`. Call once per frame before drawing.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.scroll.advance(now);
        self.indicator.advance(now);
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Selection seen by the last render, `None` before the first one.
    pub fn observed(&self) -> Option<usize> {
        self.observed
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll.phase()
    }

    pub fn scroll_target(&self) -> Option<f32> {
        self.scroll.target()
    }

    pub fn indicator_target(&self) -> Option<usize> {
        self.indicator.target()
    }

    /// Underline geometry in content coordinates at the current frame time.
    pub fn indicator_span(&self) -> Option<IndicatorSpan> {
        self.indicator.span_at(&self.layout, self.now)
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.phase() == ScrollPhase::Scrolling || self.indicator.is_animating()
    }

    /// Tab drawn under a screen cell during the last render.
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        self.hit_regions
            .iter()
            .find(|region| region.contains(column, row))
            .map(|region| region.index)
    }

    fn observe(&mut self, selected: usize, layout: StripLayout, viewport_width: u16, style: &TabBarStyle) {
        self.layout = layout;
        match self.observed {
            None => {
                self.indicator.snap(selected);
            }
            Some(previous) if previous == selected => {}
            Some(previous) => {
                debug!(from = previous, to = selected, "selection changed");
                self.indicator.retarget(
                    selected,
                    &self.layout,
                    self.now,
                    style.animation_duration(),
                    style.easing,
                );
                if let Some(span) = self.layout.span(selected) {
                    let target = scroll::target_offset(
                        span,
                        viewport_width,
                        self.layout.content_width(),
                        style.leading_fraction,
                    );
                    self.scroll
                        .scroll_to(target, self.now, style.animation_duration(), style.easing);
                }
            }
        }
        self.observed = Some(selected);
        self.scroll
            .clamp_to(f32::from(self.layout.max_offset(viewport_width)));
    }
}

impl StatefulWidget for &TabBar<'_> {
    type State = TabBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.hit_regions.clear();
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style.base_style());
        if self.titles.is_empty() {
            return;
        }

        let selected = self.resolve_selection(state);
        let layout = StripLayout::measure(
            &self.titles,
            self.style.horizontal_padding,
            self.style.spacing,
        );
        state.observe(selected, layout, area.width, &self.style);

        let label_row = area.y.saturating_add(self.style.top_padding);
        if label_row >= area.bottom() {
            return;
        }
        let indicator_row = label_row.saturating_add(1);
        let offset = state.scroll.offset().round() as i32;
        let origin = i32::from(area.x) - offset;
        let padding = " ".repeat(usize::from(self.style.horizontal_padding));

        for (index, (title, span)) in self.titles.iter().zip(state.layout.spans()).enumerate() {
            let left = origin + i32::from(span.x);
            let label = format!("{padding}{title}{padding}");
            put_str(
                buf,
                area,
                left,
                label_row,
                &label,
                self.style.label_style(index == selected),
            );

            let start = left.max(i32::from(area.left()));
            let end = (left + i32::from(span.width)).min(i32::from(area.right()));
            if start < end {
                state.hit_regions.push(HitRegion {
                    index,
                    left: start as u16,
                    right: end as u16,
                    top: label_row,
                    bottom: indicator_row.saturating_add(1).min(area.bottom()),
                });
            }
        }

        if indicator_row >= area.bottom() {
            return;
        }
        let Some(span) = state.indicator_span() else {
            return;
        };
        let (start, end) = span.cells();
        let style = self.style.indicator_style();
        for column in start..end {
            let x = origin + column;
            if x < i32::from(area.left()) || x >= i32::from(area.right()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, indicator_row)) {
                cell.set_symbol(&self.style.indicator_symbol).set_style(style);
            }
        }
    }
}

/// Writes `text` starting at a possibly off-screen column, dropping any
/// character that does not fit entirely inside `clip`.
fn put_str(buf: &mut Buffer, clip: Rect, x: i32, y: u16, text: &str, style: Style) {
    let mut cursor = x;
    let mut scratch = [0u8; 4];
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        if cursor >= i32::from(clip.left()) && cursor + width <= i32::from(clip.right()) {
            let symbol: &str = ch.encode_utf8(&mut scratch);
            buf.set_stringn(cursor as u16, y, symbol, width as usize, style);
        }
        cursor += width;
    }
}
