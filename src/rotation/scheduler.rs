//! One-shot timers for auto-advance.
//!
//! A scheduler only delivers a fired [`TimerId`] back to its owner. Deciding
//! whether the timer is still current is the controller's job, so a late
//! delivery of a cancelled timer is harmless.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Identifier of one scheduled timer.
///
/// Ids come from a process-wide counter, so a timer from a torn-down
/// controller can never match the timer of the controller that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

static NEXT_TIMER: AtomicU64 = AtomicU64::new(1);

impl TimerId {
    /// Allocate an id no other scheduler has handed out.
    pub fn next() -> Self {
        TimerId(NEXT_TIMER.fetch_add(1, Ordering::Relaxed))
    }
}

pub trait TimerScheduler: Send {
    /// Schedule a one-shot callback after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, timer: TimerId);
}

type FireCallback = Arc<dyn Fn(TimerId) + Send + Sync>;

/// Timers backed by tokio tasks on an existing runtime.
pub struct TokioScheduler {
    runtime: Handle,
    on_fire: FireCallback,
    pending: Arc<Mutex<HashMap<TimerId, JoinHandle<()>>>>,
}

impl TokioScheduler {
    pub fn new<F>(runtime: Handle, on_fire: F) -> Self
    where
        F: Fn(TimerId) + Send + Sync + 'static,
    {
        Self {
            runtime,
            on_fire: Arc::new(on_fire),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }
}

impl TimerScheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId::next();
        let pending = Arc::clone(&self.pending);
        let on_fire = Arc::clone(&self.on_fire);

        // Hold the lock across spawn so the task cannot remove its entry
        // before it has been inserted.
        let mut guard = self.pending.lock();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if pending.lock().remove(&id).is_some() {
                on_fire(id);
            }
        });
        guard.insert(id, handle);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(handle) = self.pending.lock().remove(&timer) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.pending.lock().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = TokioScheduler::new(Handle::current(), move |id| {
            let _ = tx.send(id);
        });

        let id = scheduler.schedule(Duration::from_millis(3500));
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(3600)).await;
        assert_eq!(rx.try_recv().ok(), Some(id));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ids_are_unique_across_schedulers() {
        let mut first = TokioScheduler::new(Handle::current(), |_| {});
        let mut second = TokioScheduler::new(Handle::current(), |_| {});

        let a = first.schedule(Duration::from_secs(1));
        let b = second.schedule(Duration::from_secs(1));
        let c = first.schedule(Duration::from_secs(1));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = TokioScheduler::new(Handle::current(), move |id| {
            let _ = tx.send(id);
        });

        let id = scheduler.schedule(Duration::from_millis(100));
        scheduler.cancel(id);
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
