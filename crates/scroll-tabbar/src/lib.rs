/*
[INPUT]:  Public API exports for scroll-tabbar crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod animation;
pub mod indicator;
pub mod layout;
pub mod scroll;
pub mod selection;
pub mod style;
pub mod widget;

// Re-export main types for convenience
pub use animation::{Easing, Tween};
pub use scroll::ScrollPhase;
pub use selection::SelectionBinding;
pub use style::{ConfigError, TabBarStyle};
pub use widget::{TabBar, TabBarState};
