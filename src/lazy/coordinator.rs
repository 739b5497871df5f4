use serde::{Deserialize, Serialize};

use super::{controller::Effect, state::LazyImageState};
use crate::utils::CCStr;

/// Result of a detached decode, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeOutcome {
    Loaded,
    Failed,
}

impl From<bool> for DecodeOutcome {
    fn from(loaded: bool) -> Self {
        if loaded {
            DecodeOutcome::Loaded
        } else {
            DecodeOutcome::Failed
        }
    }
}

/// What the controller has to do with a decode completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    MarkLoaded,
    GiveUp,
    /// The completion belongs to a source that is no longer displayed.
    Stale,
}

/// Starts at most one out-of-band decode per source, and only once the
/// image is in view and not yet loaded.
///
/// A source whose decode failed is never retried.
#[derive(Debug, Clone, Default)]
pub struct LoadCoordinator {
    src: CCStr,
    in_flight: Option<CCStr>,
    failed: Option<CCStr>,
}

impl LoadCoordinator {
    pub fn new(src: CCStr) -> Self {
        Self {
            src,
            in_flight: None,
            failed: None,
        }
    }

    pub fn src(&self) -> &CCStr {
        &self.src
    }

    pub fn in_flight(&self) -> Option<&CCStr> {
        self.in_flight.as_ref()
    }

    pub fn set_source(&mut self, src: CCStr) {
        self.src = src;
    }

    /// Issues a decode if the guard allows it. Safe to call on every state change.
    pub fn poll(&mut self, state: &LazyImageState) -> Option<Effect> {
        if !state.should_fetch()
            || self.in_flight.as_ref() == Some(&self.src)
            || self.failed.as_ref() == Some(&self.src)
        {
            return None;
        }
        self.in_flight = Some(self.src.clone());
        Some(Effect::Decode {
            src: self.src.clone(),
        })
    }

    pub fn complete(&mut self, src: &CCStr, outcome: DecodeOutcome) -> Completion {
        if self.in_flight.as_ref() == Some(src) {
            self.in_flight = None;
        }
        if *src != self.src {
            return Completion::Stale;
        }
        match outcome {
            DecodeOutcome::Loaded => Completion::MarkLoaded,
            DecodeOutcome::Failed => {
                self.failed = Some(src.clone());
                Completion::GiveUp
            }
        }
    }
}
