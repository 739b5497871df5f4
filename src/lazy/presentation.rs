//! Pure rendering values of a lazy image.
//!
//! Everything here is a function of the two state flags and the source; the
//! component only turns these values into markup.

use super::state::LazyImageState;
use crate::utils::CCStr;

/// Duration of every cross-fade, in milliseconds.
pub const TRANSITION_MS: u32 = 500;

const PLACEHOLDER_GRADIENT: &str = "linear-gradient(135deg, hsl(var(--muted, 210 40% 96.1%)) 0%, \
    hsl(var(--muted-foreground, 215.4 16.3% 46.9%) / 0.1) 100%)";
const PLACEHOLDER_BACKDROP_BLUR_PX: u8 = 12;

pub const CONTAINER_STYLE: &str = "position: relative; overflow: hidden;";

/// Gradient layer stacked beneath the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderLayer {
    pub opacity: f32,
}

impl PlaceholderLayer {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; inset: 0; pointer-events: none; \
             background: {PLACEHOLDER_GRADIENT}; \
             backdrop-filter: blur({PLACEHOLDER_BACKDROP_BLUR_PX}px); \
             transition: opacity {TRANSITION_MS}ms; opacity: {};",
            self.opacity
        )
    }
}

/// The real image element.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    /// Bound only once the image has been in view, so nothing is requested before.
    pub src: Option<CCStr>,
    pub opacity: f32,
    pub blur_px: u8,
    pub scale: f32,
}

impl ImageLayer {
    pub fn style(&self) -> String {
        format!(
            "width: 100%; height: 100%; object-fit: cover; \
             transition: all {TRANSITION_MS}ms; \
             opacity: {}; filter: blur({}px); transform: scale({});",
            self.opacity, self.blur_px, self.scale
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayers {
    pub placeholder: PlaceholderLayer,
    pub image: ImageLayer,
}

impl ImageLayers {
    pub fn new(state: LazyImageState, src: &CCStr) -> Self {
        let loaded = state.is_loaded();
        Self {
            placeholder: PlaceholderLayer {
                opacity: if loaded { 0.0 } else { 1.0 },
            },
            image: ImageLayer {
                src: state.in_view().then(|| src.clone()),
                opacity: if loaded { 1.0 } else { 0.0 },
                blur_px: if loaded { 0 } else { 4 },
                scale: if loaded { 1.0 } else { 1.05 },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_image_has_no_source() {
        let layers = ImageLayers::new(LazyImageState::default(), &"a.jpg".into());
        assert_eq!(layers.image.src, None);
        assert_eq!(layers.placeholder.opacity, 1.0);
        assert_eq!(layers.image.opacity, 0.0);
        assert_eq!(layers.image.blur_px, 4);
        assert_eq!(layers.image.scale, 1.05);
    }

    #[test]
    fn visible_image_binds_source_but_stays_blurred() {
        let mut state = LazyImageState::default();
        state.mark_in_view();
        let layers = ImageLayers::new(state, &"a.jpg".into());
        assert_eq!(layers.image.src.as_deref(), Some("a.jpg"));
        assert_eq!(layers.placeholder.opacity, 1.0);
        assert_eq!(layers.image.blur_px, 4);
    }

    #[test]
    fn loaded_image_is_sharp_and_placeholder_faded() {
        let mut state = LazyImageState::default();
        state.mark_in_view();
        state.mark_loaded().unwrap();
        let layers = ImageLayers::new(state, &"a.jpg".into());
        assert_eq!(layers.placeholder.opacity, 0.0);
        assert_eq!(layers.image.opacity, 1.0);
        assert_eq!(layers.image.blur_px, 0);
        assert_eq!(layers.image.scale, 1.0);

        let style = layers.image.style();
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("filter: blur(0px);"));
        assert!(style.contains("transform: scale(1);"));
        assert!(layers.placeholder.style().contains("opacity: 0;"));
        assert!(layers.placeholder.style().contains("transition: opacity 500ms"));
    }
}
