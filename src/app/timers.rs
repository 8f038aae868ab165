//! Tokio-backed timers.
//!
//! Timer tasks never touch application state. They only post events to the
//! main loop, which applies them on the UI task.

use crate::app::event::{AppEvent, PressId};
use crate::counter::scheduler::{Scheduler, TimerId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub struct TokioScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: TimerId,
}

impl TokioScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            tasks: HashMap::new(),
            next_id: 0,
        }
    }
}

impl Scheduler for TokioScheduler {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::RepeatTick(id)).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

/// One-shot long-press timer. Fires `HoldElapsed` for `press` after `after`;
/// the handler ignores it if that press has already ended.
pub fn arm_hold_timer(
    event_tx: mpsc::UnboundedSender<AppEvent>,
    press: PressId,
    after: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let _ = event_tx.send(AppEvent::HoldElapsed { press });
    })
}
