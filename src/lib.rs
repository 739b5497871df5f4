//! Viewport-deferred images for Dioxus.
//!
//! [`LazyImage`](components::lazy_image::LazyImage) leaves its `src` unbound
//! until the element crosses a visibility threshold, then decodes the image
//! out of band and cross-fades from a blurred gradient placeholder to the
//! sharp picture. The decision logic lives in [`lazy`] and does not depend
//! on a renderer.

pub mod components;
pub mod lazy;
pub mod utils;

pub mod prelude {
    pub use super::components::lazy_image::LazyImage;
    pub use super::lazy::prelude::{
        AttributeBag, DecodeOutcome, ImageLayers, LazyImageController, LazyImageError,
        LazyImageEvent, LazyImageState, Phase, Threshold, VisibilityReport,
    };
    pub use super::utils::CCStr;
    pub use dioxus::prelude::*;
}
