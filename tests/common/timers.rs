//! Deterministic clock and scheduler for driving controllers without a
//! runtime.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use showreel::rotation::{Clock, TimerId, TimerScheduler};

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Scheduled { timer: TimerId, delay: Duration },
    Cancelled { timer: TimerId },
}

#[derive(Debug, Default)]
struct TimerLog {
    events: Vec<TimerEvent>,
    outstanding: Vec<(TimerId, Instant)>,
    max_outstanding: usize,
}

/// Scheduler that records every call and fires only when asked.
///
/// Clones share one log, so a test can keep a handle after boxing the
/// scheduler into a controller.
#[derive(Debug, Clone)]
pub struct RecordingScheduler {
    clock: ManualClock,
    log: Arc<Mutex<TimerLog>>,
}

impl RecordingScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            log: Arc::new(Mutex::new(TimerLog::default())),
        }
    }

    pub fn events(&self) -> Vec<TimerEvent> {
        self.log.lock().events.clone()
    }

    pub fn outstanding(&self) -> usize {
        self.log.lock().outstanding.len()
    }

    /// Highest number of simultaneously pending timers seen so far.
    pub fn max_outstanding(&self) -> usize {
        self.log.lock().max_outstanding
    }

    /// Delay of the most recent schedule call.
    pub fn last_delay(&self) -> Option<Duration> {
        self.log.lock().events.iter().rev().find_map(|event| match event {
            TimerEvent::Scheduled { delay, .. } => Some(*delay),
            TimerEvent::Cancelled { .. } => None,
        })
    }

    /// Remove and return the timers whose deadline has passed.
    pub fn take_due(&self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut log = self.log.lock();
        let (due, pending): (Vec<_>, Vec<_>) = log
            .outstanding
            .drain(..)
            .partition(|(_, deadline)| *deadline <= now);
        log.outstanding = pending;
        due.into_iter().map(|(timer, _)| timer).collect()
    }
}

impl TimerScheduler for RecordingScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let deadline = self.clock.now() + delay;
        let mut log = self.log.lock();
        let timer = TimerId::next();
        log.events.push(TimerEvent::Scheduled { timer, delay });
        log.outstanding.push((timer, deadline));
        log.max_outstanding = log.max_outstanding.max(log.outstanding.len());
        timer
    }

    fn cancel(&mut self, timer: TimerId) {
        let mut log = self.log.lock();
        log.events.push(TimerEvent::Cancelled { timer });
        log.outstanding.retain(|(id, _)| *id != timer);
    }
}
