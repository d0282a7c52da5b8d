/*
[INPUT]:  Public API exports for scroll-tabbar-preview crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - preview library used by the binary and its tests
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod tui;

pub use config::PreviewConfig;
pub use tui::{PreviewApp, UiEvent, drive, run_preview};
