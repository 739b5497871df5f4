use super::error::LazyImageError;

/// Position of an instance in its lifecycle.
///
/// `Loaded` is terminal: nothing leads back to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    NotVisible,
    Visible,
    Loaded,
}

/// The two monotonic flags owned by one mounted lazy image.
///
/// Both only ever go from `false` to `true`, and `is_loaded` requires `in_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LazyImageState {
    in_view: bool,
    is_loaded: bool,
}

impl LazyImageState {
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn phase(&self) -> Phase {
        match (self.in_view, self.is_loaded) {
            (false, _) => Phase::NotVisible,
            (true, false) => Phase::Visible,
            (true, true) => Phase::Loaded,
        }
    }

    /// Whether the out-of-band fetch may begin.
    pub fn should_fetch(&self) -> bool {
        self.in_view && !self.is_loaded
    }

    /// Returns `true` when this call performed the transition.
    pub fn mark_in_view(&mut self) -> bool {
        let changed = !self.in_view;
        self.in_view = true;
        changed
    }

    /// Returns `Ok(true)` when this call performed the transition.
    pub fn mark_loaded(&mut self) -> Result<bool, LazyImageError> {
        if !self.in_view {
            return Err(LazyImageError::NotInView);
        }
        let changed = !self.is_loaded;
        self.is_loaded = true;
        Ok(changed)
    }
}
