/*
[INPUT]:  Selected TabSpan, viewport width, content width, injected frame time
[OUTPUT]: Animated horizontal scroll offset and ScrollPhase state machine
[POS]:    Scroll synchronizer - keeps the selected tab near the leading edge
[UPDATE]: When changing scroll alignment or restart semantics
*/

use std::time::{Duration, Instant};

use tracing::debug;

use crate::animation::{Easing, Tween};
use crate::layout::TabSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Scrolling,
}

/// Offset that puts `tab`'s leading edge `leading_fraction` of the viewport
/// away from the viewport's leading edge, clamped to the scrollable range.
pub fn target_offset(tab: TabSpan, viewport_width: u16, content_width: u16, leading_fraction: f32) -> f32 {
    let max = f32::from(content_width.saturating_sub(viewport_width));
    let desired = f32::from(tab.x) - leading_fraction * f32::from(viewport_width);
    desired.clamp(0.0, max)
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSynchronizer {
    offset: f32,
    tween: Option<Tween>,
}

impl ScrollSynchronizer {
    pub fn phase(&self) -> ScrollPhase {
        if self.tween.is_some() {
            ScrollPhase::Scrolling
        } else {
            ScrollPhase::Idle
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Where the in-flight scroll will end, if any.
    pub fn target(&self) -> Option<f32> {
        self.tween.map(|tween| tween.target())
    }

    /// Starts (or redirects) the scroll from the current offset.
    pub fn scroll_to(&mut self, target: f32, now: Instant, duration: Duration, easing: Easing) {
        if self.tween.is_some() {
            debug!(offset = self.offset, target, "scroll redirected");
        } else {
            debug!(offset = self.offset, target, "scroll started");
        }
        self.tween = Some(Tween::new(self.offset, target, now, duration, easing));
    }

    pub fn advance(&mut self, now: Instant) {
        let Some(tween) = self.tween else {
            return;
        };
        self.offset = tween.value_at(now);
        if tween.is_finished(now) {
            self.offset = tween.target();
            self.tween = None;
            debug!(offset = self.offset, "scroll settled");
        }
    }

    /// Keeps a resting offset inside `[0, max]` after the viewport changes.
    pub fn clamp_to(&mut self, max: f32) {
        if self.tween.is_none() {
            self.offset = self.offset.clamp(0.0, max.max(0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    #[test]
    fn test_target_offset_leading_fraction() {
        let tab = TabSpan { x: 45, width: 8 };
        assert!((target_offset(tab, 40, 90, 0.1) - 41.0).abs() < 1e-4);
        assert_eq!(target_offset(tab, 40, 90, 0.0), 45.0);
    }

    #[test]
    fn test_target_offset_clamps_to_scrollable_range() {
        let first = TabSpan { x: 0, width: 8 };
        assert_eq!(target_offset(first, 40, 90, 0.1), 0.0);

        let last = TabSpan { x: 81, width: 9 };
        assert_eq!(target_offset(last, 40, 90, 0.1), 50.0);

        assert_eq!(target_offset(last, 120, 90, 0.1), 0.0);
    }

    #[test]
    fn test_idle_to_scrolling_to_idle() {
        let start = Instant::now();
        let mut scroll = ScrollSynchronizer::default();
        assert_eq!(scroll.phase(), ScrollPhase::Idle);

        scroll.scroll_to(30.0, start, DURATION, Easing::Linear);
        assert_eq!(scroll.phase(), ScrollPhase::Scrolling);
        assert_eq!(scroll.target(), Some(30.0));

        scroll.advance(start + Duration::from_millis(100));
        assert_eq!(scroll.phase(), ScrollPhase::Scrolling);
        assert!((scroll.offset() - 15.0).abs() < 0.01);

        scroll.advance(start + DURATION);
        assert_eq!(scroll.phase(), ScrollPhase::Idle);
        assert_eq!(scroll.offset(), 30.0);
        assert_eq!(scroll.target(), None);
    }

    #[test]
    fn test_redirect_restarts_from_current_offset() {
        let start = Instant::now();
        let mut scroll = ScrollSynchronizer::default();
        scroll.scroll_to(40.0, start, DURATION, Easing::Linear);

        let mid = start + Duration::from_millis(100);
        scroll.advance(mid);
        scroll.scroll_to(0.0, mid, DURATION, Easing::Linear);
        assert_eq!(scroll.target(), Some(0.0));

        scroll.advance(mid);
        assert!((scroll.offset() - 20.0).abs() < 0.01);

        scroll.advance(mid + DURATION);
        assert_eq!(scroll.phase(), ScrollPhase::Idle);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_clamp_only_when_idle() {
        let start = Instant::now();
        let mut scroll = ScrollSynchronizer::default();
        scroll.scroll_to(50.0, start, DURATION, Easing::Linear);
        scroll.advance(start + DURATION);

        scroll.clamp_to(20.0);
        assert_eq!(scroll.offset(), 20.0);

        scroll.scroll_to(60.0, start + DURATION, DURATION, Easing::Linear);
        scroll.clamp_to(0.0);
        assert_eq!(scroll.offset(), 20.0);
    }
}
