//! Recurring timer capability injected into the life counter.
//!
//! The counter never owns a clock. It asks a [`Scheduler`] for a repeating
//! interval and gets back a [`TimerId`]; every time the interval elapses the
//! owner of the event loop hands that id back to
//! [`LifeCounter::on_repeat_tick`](super::LifeCounter::on_repeat_tick) on the
//! UI thread.

use std::time::Duration;

pub type TimerId = u64;

pub trait Scheduler {
    /// Start a recurring interval. The first tick is due one `period` from now.
    fn start_interval(&mut self, period: Duration) -> TimerId;

    /// Stop an interval. Unknown or already-cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[cfg(test)]
pub use manual::ManualScheduler;
