//! Async driver that runs an [`UnlockTimer`] against a [`Ticker`].

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::{Ticker, UnlockState, UnlockTimer};

/// Spawns countdown tasks.
#[derive(Debug, Clone, Copy)]
pub struct Countdown;

impl Countdown {
    /// Start a countdown of `wait_seconds` driven by `ticker`.
    ///
    /// Must be called from within a tokio runtime. The countdown stops when
    /// it completes, when [`CountdownHandle::cancel`] is called, or when the
    /// handle is dropped.
    #[must_use]
    pub fn spawn<T>(wait_seconds: u32, ticker: T) -> CountdownHandle
    where
        T: Ticker + 'static,
    {
        let timer = UnlockTimer::new(wait_seconds);
        let (state_tx, state_rx) = watch::channel(timer.state());
        let (done_tx, done_rx) = oneshot::channel();
        let token = CancellationToken::new();

        let task = tokio::spawn(drive(timer, ticker, state_tx, done_tx, token.clone()));

        CountdownHandle {
            state: state_rx,
            done: Some(done_rx),
            token,
            task,
        }
    }
}

async fn drive<T: Ticker>(
    mut timer: UnlockTimer,
    mut ticker: T,
    state_tx: watch::Sender<UnlockState>,
    done_tx: oneshot::Sender<()>,
    token: CancellationToken,
) {
    if timer.take_completion() {
        debug!("Zero wait, unlocked immediately");
        let _ = done_tx.send(());
        return;
    }

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(remaining = timer.state().remaining(), "Countdown cancelled");
                return;
            }
            () = ticker.tick() => {}
        }

        let state = timer.tick();
        trace!(remaining = state.remaining(), "Countdown tick");
        state_tx.send_replace(state);

        if timer.take_completion() {
            debug!(wait_seconds = timer.wait_seconds(), "Countdown complete");
            let _ = done_tx.send(());
            return;
        }
    }
}

/// Owner-side handle to a running countdown.
///
/// Dropping the handle cancels the countdown.
#[derive(Debug)]
pub struct CountdownHandle {
    state: watch::Receiver<UnlockState>,
    done: Option<oneshot::Receiver<()>>,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Latest state.
    #[must_use]
    pub fn state(&self) -> UnlockState {
        *self.state.borrow()
    }

    /// A receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UnlockState> {
        self.state.clone()
    }

    /// Wait for the completion signal.
    ///
    /// Returns `true` if the countdown completed, `false` if it was cancelled
    /// first. The signal is delivered once; later calls report the final state.
    pub async fn completed(&mut self) -> bool {
        match self.done.take() {
            Some(rx) => rx.await.is_ok(),
            None => self.state().is_complete(),
        }
    }

    /// Stop the countdown. No completion signal follows a cancel.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the driver task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::unlock::{IntervalTicker, ManualTicker};
    use pretty_assertions::assert_eq;

    async fn step(sender: &crate::unlock::TickSender, rx: &mut watch::Receiver<UnlockState>) {
        assert!(sender.tick());
        rx.changed().await.unwrap();
    }

    #[tokio::test]
    async fn test_completes_after_n_ticks() {
        let (ticker, sender) = ManualTicker::new();
        let mut handle = Countdown::spawn(3, ticker);
        let mut rx = handle.subscribe();

        assert_eq!(handle.state(), UnlockState::Counting { remaining: 3 });
        step(&sender, &mut rx).await;
        assert_eq!(*rx.borrow(), UnlockState::Counting { remaining: 2 });
        step(&sender, &mut rx).await;
        step(&sender, &mut rx).await;

        assert!(handle.completed().await);
        assert_eq!(handle.state(), UnlockState::Complete);
    }

    #[tokio::test]
    async fn test_completion_signal_is_single() {
        let (ticker, sender) = ManualTicker::new();
        let mut handle = Countdown::spawn(1, ticker);

        sender.tick();
        assert!(handle.completed().await);

        // The driver has exited; extra ticks go nowhere.
        tokio::time::timeout(Duration::from_secs(1), async {
            while !handle.is_finished() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        assert!(!sender.tick());
        assert_eq!(handle.state(), UnlockState::Complete);
        // Subsequent waits report the final state, not a new signal.
        assert!(handle.completed().await);
    }

    #[tokio::test]
    async fn test_zero_wait_completes_without_tick() {
        let (ticker, _sender) = ManualTicker::new();
        let mut handle = Countdown::spawn(0, ticker);

        assert_eq!(handle.state(), UnlockState::Complete);
        assert!(handle.completed().await);
    }

    #[tokio::test]
    async fn test_cancel_suppresses_signal() {
        let (ticker, sender) = ManualTicker::new();
        let mut handle = Countdown::spawn(5, ticker);
        let mut rx = handle.subscribe();

        step(&sender, &mut rx).await;
        step(&sender, &mut rx).await;
        handle.cancel();

        assert!(!handle.completed().await);
        assert_eq!(handle.state(), UnlockState::Counting { remaining: 3 });

        // Ticks after cancellation change nothing.
        sender.tick();
        sender.tick();
        sender.tick();
        tokio::task::yield_now().await;
        assert_eq!(handle.state(), UnlockState::Counting { remaining: 3 });
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let (ticker, sender) = ManualTicker::new();
        let handle = Countdown::spawn(2, ticker);
        let mut rx = handle.subscribe();
        drop(handle);

        sender.tick();
        sender.tick();
        // The sender side of the watch is dropped once the driver exits.
        while rx.changed().await.is_ok() {}
        assert_eq!(*rx.borrow(), UnlockState::Counting { remaining: 2 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticker_countdown_takes_wait_seconds() {
        let start = tokio::time::Instant::now();
        let mut handle = Countdown::spawn(3, IntervalTicker::every_second());

        assert!(handle.completed().await);
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
