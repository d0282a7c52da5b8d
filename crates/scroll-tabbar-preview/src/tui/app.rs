/*
[INPUT]:  PreviewConfig, user paging and click requests, frame time
[OUTPUT]: PreviewApp host state owning the selection binding and tab bar state
[POS]:    TUI app state - host side of the tab bar
[UPDATE]: When changing paging behavior or host-owned state
*/

use std::time::Instant;

use ratatui::style::Color;
use scroll_tabbar::{SelectionBinding, TabBar, TabBarState, TabBarStyle};
use tracing::debug;

use crate::config::PreviewConfig;

/// Host of the tab bar: owns the selection and the paged content beneath it.
pub struct PreviewApp {
    pub(super) selection: SelectionBinding,
    pub(super) titles: Vec<String>,
    pub(super) style: TabBarStyle,
    pub(super) page_background: Option<Color>,
    pub(super) tab_state: TabBarState,
    pub(super) status_message: String,
    pub(super) should_quit: bool,
}

impl PreviewApp {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            selection: SelectionBinding::new(config.initial_index),
            titles: config.titles,
            style: config.style,
            page_background: config.page_background,
            tab_state: TabBarState::new(),
            status_message: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selection.get()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn tab_state(&self) -> &TabBarState {
        &self.tab_state
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn tick(&mut self, now: Instant) {
        self.tab_state.tick(now);
    }

    pub(super) fn next_page(&mut self) {
        let last = self.titles.len().saturating_sub(1);
        self.show_page((self.selected() + 1).min(last));
    }

    pub(super) fn previous_page(&mut self) {
        self.show_page(self.selected().saturating_sub(1));
    }

    /// Jumps to a page when it exists; out-of-range requests are ignored.
    pub(super) fn jump_to(&mut self, index: usize) {
        if index < self.titles.len() {
            self.show_page(index);
        }
    }

    pub(super) fn click(&mut self, column: u16, row: u16) {
        let bar = tab_bar(&self.selection, &self.titles, &self.style);
        if let Some(index) = bar.handle_click(&self.tab_state, column, row) {
            self.status_message = format!("tapped {}", self.titles[index]);
        }
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    fn show_page(&mut self, index: usize) {
        if index == self.selected() {
            return;
        }
        debug!(from = self.selected(), to = index, "page changed");
        self.selection.set(index);
        self.status_message = format!("page {}/{}", index + 1, self.titles.len());
    }
}

pub(super) fn tab_bar<'a>(
    selection: &SelectionBinding,
    titles: &'a [String],
    style: &TabBarStyle,
) -> TabBar<'a> {
    TabBar::new(selection.clone(), titles).style(style.clone())
}
