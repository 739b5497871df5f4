//! # Lazy module
//!
//! Platform-independent core of the lazy image: the two monotonic state
//! flags, the one-shot visibility watcher, the guarded load coordinator and
//! the controller that sequences them. The Dioxus side only forwards
//! platform callbacks as [`LazyImageEvent`](controller::LazyImageEvent)s and
//! executes the returned [`Effect`](controller::Effect)s.

pub mod config;
pub mod controller;
pub mod coordinator;
pub mod error;
pub mod presentation;
pub mod state;
pub mod watcher;

pub mod prelude {
    pub use super::config::{AttributeBag, Threshold};
    pub use super::controller::{Effect, LazyImageController, LazyImageEvent};
    pub use super::coordinator::DecodeOutcome;
    pub use super::error::LazyImageError;
    pub use super::presentation::ImageLayers;
    pub use super::state::{LazyImageState, Phase};
    pub use super::watcher::VisibilityReport;
}
