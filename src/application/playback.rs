// Playback controller - the single-timer state machine behind the RAG
// drift animation
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Stopped/Running timer with exactly one ticking task while running.
/// Starting while already running aborts the previous task first, so two
/// concurrent timers never coexist for one controller. Each start bumps an
/// epoch; a tick whose epoch is no longer current must be discarded by the
/// tick action, which closes the window where an in-flight tick outlives a
/// stop-then-restart.
pub struct PlaybackController {
    tick: Duration,
    timer: Option<JoinHandle<()>>,
    epoch: u64,
}

impl PlaybackController {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            timer: None,
            epoch: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// True only for ticks spawned by the latest start and not yet stopped.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.is_running() && self.epoch == epoch
    }

    /// Begin ticking `on_tick` at the configured cadence. Each invocation
    /// receives the epoch its timer runs under; the tick action must carry
    /// it back through `is_current` before applying the tick.
    pub fn start<F>(&mut self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) + Send + 'static,
    {
        self.stop();
        self.epoch += 1;
        let epoch = self.epoch;
        let tick = self.tick;
        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick completes immediately; the animation
            // waits a full period before its first advance.
            interval.tick().await;
            loop {
                interval.tick().await;
                on_tick(epoch);
            }
        }));
        tracing::debug!("rag playback started (epoch {})", epoch);
        epoch
    }

    /// Cancel the pending timer. Idempotent, safe when already stopped.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            tracing::debug!("rag playback stopped (epoch {})", self.epoch);
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_cadence() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let mut playback = PlaybackController::new(Duration::from_millis(1500));

        playback.start(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(playback.is_running());

        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_leaves_one_timer() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut playback = PlaybackController::new(Duration::from_millis(1500));

        let counter = first.clone();
        let first_epoch = playback.start(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = second.clone();
        let second_epoch = playback.start(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1600)).await;

        // The first timer was aborted before it ever fired.
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert!(!playback.is_current(first_epoch));
        assert!(playback.is_current(second_epoch));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_cancels() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let mut playback = PlaybackController::new(Duration::from_millis(1500));

        playback.stop(); // stopping while stopped is fine
        let epoch = playback.start(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        playback.stop();
        playback.stop();

        assert!(!playback.is_running());
        assert!(!playback.is_current(epoch));
        tokio::time::sleep(Duration::from_millis(3200)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }
}
