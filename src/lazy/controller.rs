use super::{
    config::Threshold,
    coordinator::{Completion, DecodeOutcome, LoadCoordinator},
    state::LazyImageState,
    watcher::{VisibilityReport, VisibilityWatcher},
};
use crate::utils::{log_error, CCStr};

/// Everything that can happen to a lazy image instance.
#[derive(Debug, Clone, PartialEq)]
pub enum LazyImageEvent {
    /// Sent on mount and every time the threshold prop changes.
    Watch { threshold: Threshold },
    /// The platform observer reported an intersection.
    Visibility(VisibilityReport),
    /// The source prop changed.
    SourceChanged(CCStr),
    /// A detached decode finished.
    Decoded { src: CCStr, outcome: DecodeOutcome },
    /// The instance left the tree.
    Unmounted,
}

/// Platform work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Register a visibility observation on the render target.
    Observe {
        threshold: Threshold,
        generation: u32,
    },
    /// Tear down the visibility observation on the render target.
    Disconnect,
    /// Fetch and decode `src` out of band.
    Decode { src: CCStr },
}

/// Per-instance state machine driving a lazy image.
///
/// Events go in, platform [`Effect`]s come out. The controller never talks
/// to the platform itself, which keeps the ordering rules in one place:
/// the image is loaded only after it was in view, the observation is torn
/// down on the first crossing, and nothing happens after unmount.
#[derive(Debug, Clone)]
pub struct LazyImageController {
    state: LazyImageState,
    watcher: VisibilityWatcher,
    coordinator: LoadCoordinator,
    mounted: bool,
}

impl LazyImageController {
    pub fn new(src: CCStr) -> Self {
        Self {
            state: LazyImageState::default(),
            watcher: VisibilityWatcher::default(),
            coordinator: LoadCoordinator::new(src),
            mounted: true,
        }
    }

    pub fn state(&self) -> LazyImageState {
        self.state
    }

    pub fn src(&self) -> &CCStr {
        self.coordinator.src()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// `true` while reports tagged `generation` are still of interest.
    pub fn is_watching(&self, generation: u32) -> bool {
        self.mounted && self.watcher.is_current(generation)
    }

    pub fn handle(&mut self, event: LazyImageEvent) -> Vec<Effect> {
        if !self.mounted {
            log::debug!("LazyImageController - unmounted, dropping {event:?}");
            return vec![];
        }
        log::debug!("LazyImageController - processing {event:?}");

        match event {
            LazyImageEvent::Watch { threshold } => self.watcher.watch(threshold),
            LazyImageEvent::Visibility(report) => {
                if !self.watcher.report(report) {
                    return vec![];
                }
                self.state.mark_in_view();
                log::info!("lazy image {} is in view", self.coordinator.src());
                let mut effects = vec![Effect::Disconnect];
                effects.extend(self.coordinator.poll(&self.state));
                effects
            }
            LazyImageEvent::SourceChanged(src) => {
                self.coordinator.set_source(src);
                self.coordinator.poll(&self.state).into_iter().collect()
            }
            LazyImageEvent::Decoded { src, outcome } => {
                match self.coordinator.complete(&src, outcome) {
                    Completion::MarkLoaded => match self.state.mark_loaded() {
                        Ok(true) => log::info!("lazy image {src} is loaded"),
                        Ok(false) => (),
                        Err(e) => {
                            log_error(e);
                        }
                    },
                    Completion::GiveUp => {
                        log::warn!("lazy image {src} failed to load, keeping the placeholder")
                    }
                    Completion::Stale => {
                        log::debug!("LazyImageController - ignoring decode of replaced {src}")
                    }
                }
                vec![]
            }
            LazyImageEvent::Unmounted => {
                self.mounted = false;
                if self.watcher.stop() {
                    vec![Effect::Disconnect]
                } else {
                    vec![]
                }
            }
        }
    }
}
