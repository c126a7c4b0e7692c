//! Countdown-gated unlocking of external links.
//!
//! Each detail view owns one countdown. [`UnlockTimer`] is the pure state
//! machine (`Counting` down to `Complete`); [`Countdown`] runs it against an
//! injected [`Ticker`] on the tokio runtime and hands back a
//! [`CountdownHandle`] for observing, awaiting, or cancelling it.
//!
//! # Examples
//!
//! ```
//! use systemshub::unlock::{Countdown, ManualTicker, UnlockState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (ticker, ticks) = ManualTicker::new();
//! let mut countdown = Countdown::spawn(2, ticker);
//! ticks.tick();
//! ticks.tick();
//! assert!(countdown.completed().await);
//! assert_eq!(countdown.state(), UnlockState::Complete);
//! # }
//! ```

mod countdown;
mod ticker;
mod timer;

pub use countdown::{Countdown, CountdownHandle};
pub use ticker::{IntervalTicker, ManualTicker, TickSender, Ticker};
pub use timer::{progress_percent, UnlockState, UnlockTimer};
