// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

/// A deferred task that fires once its quiet period has passed without being
/// rescheduled. Scheduling again replaces the pending task and restarts the
/// clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: None,
        }
    }

    pub fn schedule(&mut self, task: T, now: Instant) {
        self.pending = Some((task, now + self.quiet));
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(t, _)| t)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Hand out the task if its deadline has been reached.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(at) if now >= at => self.cancel(),
            _ => None,
        }
    }
}
