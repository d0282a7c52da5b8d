/*
[INPUT]:  Selected tab index, StripLayout, injected frame time
[OUTPUT]: Animated underline geometry (IndicatorSpan) for the single indicator
[POS]:    Indicator animator - underline morph between tabs
[UPDATE]: When changing underline motion or snapping rules
*/

use std::time::{Duration, Instant};

use tracing::debug;

use crate::animation::{lerp, Easing, Tween};
use crate::layout::{StripLayout, TabSpan};

/// Underline geometry in content coordinates, possibly between two tabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSpan {
    pub x: f32,
    pub width: f32,
}

impl IndicatorSpan {
    /// Whole-cell range `[start, end)` covered by the span.
    pub fn cells(&self) -> (i32, i32) {
        let start = self.x.round() as i32;
        let end = (self.x + self.width).round() as i32;
        (start, end.max(start))
    }
}

impl From<TabSpan> for IndicatorSpan {
    fn from(span: TabSpan) -> Self {
        Self {
            x: f32::from(span.x),
            width: f32::from(span.width),
        }
    }
}

/// Drives the one underline shared by all tabs.
///
/// The destination is stored as a tab index, not as coordinates, and is looked
/// up in the current layout on every sample.
#[derive(Debug, Clone, Default)]
pub struct IndicatorAnimator {
    target: Option<usize>,
    from: Option<IndicatorSpan>,
    tween: Option<Tween>,
}

impl IndicatorAnimator {
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Places the underline under `index` without motion.
    pub fn snap(&mut self, index: usize) {
        self.target = Some(index);
        self.from = None;
        self.tween = None;
    }

    /// Starts moving toward `index` from wherever the underline is right now.
    pub fn retarget(
        &mut self,
        index: usize,
        layout: &StripLayout,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        let Some(current) = self.span_at(layout, now) else {
            self.snap(index);
            return;
        };
        debug!(from = ?self.target, to = index, "indicator retarget");
        self.target = Some(index);
        self.from = Some(current);
        self.tween = Some(Tween::new(0.0, 1.0, now, duration, easing));
    }

    /// Drops the finished transition so the underline rests on its tab.
    pub fn advance(&mut self, now: Instant) {
        if self.tween.is_some_and(|tween| tween.is_finished(now)) {
            self.tween = None;
            self.from = None;
        }
    }

    pub fn span_at(&self, layout: &StripLayout, now: Instant) -> Option<IndicatorSpan> {
        let target = IndicatorSpan::from(layout.span(self.target?)?);
        match (self.tween, self.from) {
            (Some(tween), Some(from)) => {
                let t = tween.value_at(now);
                Some(IndicatorSpan {
                    x: lerp(from.x, target.x, t),
                    width: lerp(from.width, target.width, t),
                })
            }
            _ => Some(target),
        }
    }
}
