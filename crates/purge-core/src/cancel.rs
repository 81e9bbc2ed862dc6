use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Cooperative interruption flag shared between the signal handler and the
/// workflow. Once raised it stays raised.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](CancelSignal::cancel) has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clones_share_state() {
        let signal = CancelSignal::new();
        let other = signal.clone();
        assert!(!other.is_cancelled());
        signal.cancel();
        assert!(other.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let signal = CancelSignal::new();
        let waiter = signal.clone();
        let raise = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            signal.cancel();
        };
        tokio::join!(waiter.cancelled(), raise);
        assert!(waiter.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_returns_immediately_when_already_raised() {
        let signal = CancelSignal::new();
        signal.cancel();
        tokio::time::timeout(Duration::from_secs(1), signal.cancelled())
            .await
            .unwrap();
    }
}
