use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownPhase {
    Running = 0,
    Signaled = 1,
    StoppingInput = 2,
    TearingDownCarousels = 3,
    RestoringTerminal = 4,
    Complete = 5,
}

pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU8::new(ShutdownPhase::Running as u8)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal shutdown start
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("graceful shutdown initiated");
            self.phase
                .store(ShutdownPhase::Signaled as u8, Ordering::SeqCst);
            self.notify.notify_waiters();
        }
    }

    /// Check if shutdown is in progress
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Get current phase
    pub fn phase(&self) -> ShutdownPhase {
        match self.phase.load(Ordering::SeqCst) {
            0 => ShutdownPhase::Running,
            1 => ShutdownPhase::Signaled,
            2 => ShutdownPhase::StoppingInput,
            3 => ShutdownPhase::TearingDownCarousels,
            4 => ShutdownPhase::RestoringTerminal,
            _ => ShutdownPhase::Complete,
        }
    }

    /// Advance to next phase
    pub fn advance(&self, phase: ShutdownPhase) {
        self.phase.store(phase as u8, Ordering::SeqCst);
        tracing::debug!(?phase, "shutdown phase");
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Subscribe before checking the flag so a signal() in between is not lost
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_idempotent_and_moves_phase() {
        let coordinator = ShutdownCoordinator::new();
        assert_eq!(coordinator.phase(), ShutdownPhase::Running);
        coordinator.signal();
        coordinator.signal();
        assert!(coordinator.is_shutting_down());
        assert_eq!(coordinator.phase(), ShutdownPhase::Signaled);
        coordinator.advance(ShutdownPhase::Complete);
        assert_eq!(coordinator.phase(), ShutdownPhase::Complete);
    }

    #[tokio::test]
    async fn handle_wait_returns_after_signal() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        let waiter = tokio::spawn({
            let handle = handle.clone();
            async move { handle.wait().await }
        });
        handle.signal();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("wait should finish")
            .expect("task should not panic");
        assert!(coordinator.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_after_signal_returns_immediately() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.signal();
        tokio::time::timeout(Duration::from_millis(100), coordinator.handle().wait())
            .await
            .expect("already signaled");
    }
}
