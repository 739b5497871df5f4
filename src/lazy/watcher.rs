use serde::{Deserialize, Serialize};

use super::{config::Threshold, controller::Effect};

/// One intersection report forwarded by the platform observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReport {
    /// Registration the report comes from, see [`Effect::Observe`].
    pub generation: u32,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchStatus {
    Idle,
    Watching { generation: u32 },
    Stopped,
}

/// One-shot visibility signal for a single render target.
///
/// The watcher stops for good on the first report that crosses the
/// threshold, or when [`VisibilityWatcher::stop`] is called. Once stopped,
/// every later report is ignored.
#[derive(Debug, Clone)]
pub struct VisibilityWatcher {
    threshold: Threshold,
    status: WatchStatus,
    next_generation: u32,
}

impl Default for VisibilityWatcher {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            status: WatchStatus::Idle,
            next_generation: 0,
        }
    }
}

impl VisibilityWatcher {
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// `true` while a registration is live on the platform side.
    pub fn is_watching(&self) -> bool {
        matches!(self.status, WatchStatus::Watching { .. })
    }

    /// `true` while `generation` is the live registration.
    pub fn is_current(&self, generation: u32) -> bool {
        self.status == WatchStatus::Watching { generation }
    }

    pub fn is_stopped(&self) -> bool {
        self.status == WatchStatus::Stopped
    }

    /// Starts watching with `threshold`, or re-registers if the threshold changed.
    pub fn watch(&mut self, threshold: Threshold) -> Vec<Effect> {
        match self.status {
            WatchStatus::Stopped => vec![],
            WatchStatus::Watching { .. } if self.threshold == threshold => vec![],
            WatchStatus::Watching { .. } => {
                self.threshold = threshold;
                let generation = self.bump_generation();
                vec![
                    Effect::Disconnect,
                    Effect::Observe {
                        threshold,
                        generation,
                    },
                ]
            }
            WatchStatus::Idle => {
                self.threshold = threshold;
                let generation = self.bump_generation();
                vec![Effect::Observe {
                    threshold,
                    generation,
                }]
            }
        }
    }

    /// Feeds a platform report. Returns `true` exactly once, on the first
    /// report of the live registration that crosses the threshold; the
    /// watcher is stopped from then on.
    pub fn report(&mut self, report: VisibilityReport) -> bool {
        if !self.is_current(report.generation) {
            log::debug!("VisibilityWatcher - ignoring report {report:?}");
            return false;
        }
        if report.is_intersecting && self.threshold.is_reached_by(report.ratio) {
            self.status = WatchStatus::Stopped;
            true
        } else {
            false
        }
    }

    /// Stops watching. Returns `true` if a live registration must be torn down.
    pub fn stop(&mut self) -> bool {
        let was_watching = self.is_watching();
        self.status = WatchStatus::Stopped;
        was_watching
    }

    fn bump_generation(&mut self) -> u32 {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.status = WatchStatus::Watching { generation };
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(generation: u32, ratio: f64) -> VisibilityReport {
        VisibilityReport {
            generation,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn first_watch_registers_once() {
        let mut watcher = VisibilityWatcher::default();
        assert_eq!(
            watcher.watch(Threshold::new(0.5)),
            vec![Effect::Observe {
                threshold: Threshold::new(0.5),
                generation: 0
            }]
        );
        assert!(watcher.watch(Threshold::new(0.5)).is_empty());
        assert!(watcher.is_current(0));
    }

    #[test]
    fn fires_once_then_ignores_everything() {
        let mut watcher = VisibilityWatcher::default();
        watcher.watch(Threshold::new(0.5));
        assert!(!watcher.report(report(0, 0.2)));
        assert!(watcher.report(report(0, 0.6)));
        assert!(watcher.is_stopped());
        // scrolled out and back in
        assert!(!watcher.report(report(0, 0.0)));
        assert!(!watcher.report(report(0, 0.9)));
        assert!(watcher.watch(Threshold::new(0.1)).is_empty());
    }

    #[test]
    fn non_intersecting_report_never_counts() {
        let mut watcher = VisibilityWatcher::default();
        watcher.watch(Threshold::new(0.0));
        assert!(!watcher.report(VisibilityReport {
            generation: 0,
            ratio: 0.0,
            is_intersecting: false,
        }));
        assert!(watcher.report(VisibilityReport {
            generation: 0,
            ratio: 0.0,
            is_intersecting: true,
        }));
    }

    #[test]
    fn threshold_change_reregisters_and_drops_stale_reports() {
        let mut watcher = VisibilityWatcher::default();
        watcher.watch(Threshold::new(0.1));
        assert_eq!(
            watcher.watch(Threshold::new(0.8)),
            vec![
                Effect::Disconnect,
                Effect::Observe {
                    threshold: Threshold::new(0.8),
                    generation: 1
                }
            ]
        );
        assert!(!watcher.report(report(0, 0.9)));
        assert!(!watcher.report(report(1, 0.5)));
        assert!(watcher.report(report(1, 0.85)));
    }

    #[test]
    fn stop_reports_whether_teardown_is_needed() {
        let mut idle = VisibilityWatcher::default();
        assert!(!idle.stop());

        let mut watching = VisibilityWatcher::default();
        watching.watch(Threshold::default());
        assert!(watching.stop());
        assert!(!watching.stop());
        assert!(!watching.report(report(0, 1.0)));
    }
}
