/*
[INPUT]:  PreviewConfig and terminal input
[OUTPUT]: Ratatui-based preview hosting the tab bar above paged content
[POS]:    TUI module for scroll-tabbar-preview binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use app::PreviewApp;
pub use runtime::{FRAME_INTERVAL, UiEvent, drive, run_preview};
