//! Life counter state machine.
//!
//! Owns the life total and every rule that changes it: single taps,
//! hold-to-repeat and quantized crown rotation. Rendering and gesture
//! recognition live elsewhere and only report events here.

pub mod scheduler;

use scheduler::{Scheduler, TimerId};
use std::time::Duration;
use tracing::{debug, trace};

/// The life total never drops below this.
pub const LOWER_BOUND: i64 = 0;

pub type SubscriptionId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Increase => 1,
            Direction::Decrease => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Increase => "+",
            Direction::Decrease => "-",
        }
    }
}

/// Where the current press gesture is.
///
/// `Pressing` resolves to a single tap on release; `Repeating` is entered once
/// the hold threshold elapses and resolves to nothing on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Idle,
    Pressing(Direction),
    Repeating(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// A plain `apply_delta` call.
    Direct,
    Tap,
    Repeat,
    Rotation,
}

/// Delivered to subscribers whenever the life total actually moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeChange {
    pub previous: i64,
    pub current: i64,
    pub cause: ChangeCause,
}

impl LifeChange {
    /// True when this change took the total from alive to lost.
    pub fn is_loss(&self) -> bool {
        self.previous > 0 && self.current <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeDisplay {
    Alive(i64),
    Lost,
}

impl LifeDisplay {
    pub fn for_value(value: i64) -> Self {
        if value > 0 {
            LifeDisplay::Alive(value)
        } else {
            LifeDisplay::Lost
        }
    }
}

/// Tunable numbers behind the counter's transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRules {
    pub starting_life: i64,
    pub tap_delta: i64,
    pub repeat_multiplier: i64,
    pub repeat_interval: Duration,
    /// Smallest rotation step (in whole crown units) that counts as input.
    pub rotation_min_step: i64,
    /// Largest rotation step that counts as input. Anything bigger is a
    /// wrap-around artifact of the crown and is dropped.
    pub rotation_max_step: i64,
}

impl Default for CounterRules {
    fn default() -> Self {
        Self {
            starting_life: 40,
            tap_delta: 1,
            repeat_multiplier: 10,
            repeat_interval: Duration::from_millis(300),
            rotation_min_step: 1,
            rotation_max_step: 4,
        }
    }
}

type Listener = Box<dyn FnMut(&LifeChange)>;

pub struct LifeCounter {
    rules: CounterRules,
    value: i64,
    repeat_delta: i64,
    repeat_timer: Option<TimerId>,
    phase: PressPhase,
    last_quantized_rotation: i64,
    scheduler: Box<dyn Scheduler>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl LifeCounter {
    pub fn new(rules: CounterRules, scheduler: Box<dyn Scheduler>) -> Self {
        let value = rules.starting_life.max(LOWER_BOUND);
        Self {
            rules,
            value,
            repeat_delta: 0,
            repeat_timer: None,
            phase: PressPhase::Idle,
            last_quantized_rotation: 0,
            scheduler,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn display(&self) -> LifeDisplay {
        LifeDisplay::for_value(self.value)
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat_timer.is_some()
    }

    pub fn repeat_delta(&self) -> i64 {
        self.repeat_delta
    }

    pub fn last_quantized_rotation(&self) -> i64 {
        self.last_quantized_rotation
    }

    /// Register a listener for value changes. Listeners run synchronously,
    /// in subscription order, after the new value is stored.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&LifeChange) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Add `delta` to the total, clamping at [`LOWER_BOUND`]. There is no
    /// upper bound.
    pub fn apply_delta(&mut self, delta: i64) {
        self.apply(delta, ChangeCause::Direct);
    }

    /// A completed quick press. Ignored while a hold-repeat is running.
    pub fn on_tap(&mut self, direction: Direction) {
        if self.is_repeating() {
            trace!(?direction, "tap ignored while repeating");
            return;
        }
        self.apply(
            self.rules.tap_delta.saturating_mul(direction.sign()),
            ChangeCause::Tap,
        );
    }

    pub fn on_press(&mut self, direction: Direction) {
        if self.phase != PressPhase::Idle {
            debug!(phase = ?self.phase, "new press while previous gesture active, ending it");
            self.on_hold_end();
        }
        self.phase = PressPhase::Pressing(direction);
    }

    pub fn on_release(&mut self) {
        match self.phase {
            PressPhase::Idle => {}
            PressPhase::Pressing(direction) => {
                self.on_hold_end();
                self.on_tap(direction);
            }
            PressPhase::Repeating(_) => self.on_hold_end(),
        }
    }

    /// The press has been held past the threshold: start repeating a
    /// multiplied delta every `repeat_interval`.
    pub fn on_hold_start(&mut self, direction: Direction) {
        self.cancel_repeat();
        self.repeat_delta = self
            .rules
            .tap_delta
            .saturating_mul(self.rules.repeat_multiplier)
            .saturating_mul(direction.sign());
        let timer = self.scheduler.start_interval(self.rules.repeat_interval);
        self.repeat_timer = Some(timer);
        self.phase = PressPhase::Repeating(direction);
        debug!(timer, delta = self.repeat_delta, "hold repeat started");
    }

    /// Single release point for every press. Safe to call when nothing is
    /// running.
    pub fn on_hold_end(&mut self) {
        self.cancel_repeat();
        self.phase = PressPhase::Idle;
    }

    /// A tick from the scheduler. Ticks from an interval that is no longer
    /// the active repeat are dropped, so nothing queued before
    /// [`on_hold_end`](Self::on_hold_end) can land after it.
    pub fn on_repeat_tick(&mut self, timer: TimerId) {
        if self.repeat_timer != Some(timer) {
            trace!(timer, "stale repeat tick dropped");
            return;
        }
        self.apply(self.repeat_delta, ChangeCause::Repeat);
    }

    /// Feed an absolute crown reading.
    pub fn on_rotate(&mut self, absolute: f64) {
        if !absolute.is_finite() {
            debug!(absolute, "non-finite crown reading ignored");
            return;
        }
        let quantized = absolute.round() as i64;
        // Readings far enough apart to overflow are out of band anyway.
        match quantized.checked_sub(self.last_quantized_rotation) {
            Some(difference) if self.in_rotation_band(difference) => {
                self.apply(difference, ChangeCause::Rotation);
            }
            Some(0) => {}
            difference => trace!(?difference, "rotation jump outside band dropped"),
        }
        self.last_quantized_rotation = quantized;
    }

    fn in_rotation_band(&self, difference: i64) -> bool {
        let step = difference.unsigned_abs();
        let min = self.rules.rotation_min_step.max(0).unsigned_abs();
        let max = self.rules.rotation_max_step.max(0).unsigned_abs();
        step >= min && step <= max
    }

    fn cancel_repeat(&mut self) {
        if let Some(timer) = self.repeat_timer.take() {
            self.scheduler.cancel(timer);
            debug!(timer, "hold repeat cancelled");
        }
    }

    fn apply(&mut self, delta: i64, cause: ChangeCause) {
        let previous = self.value;
        self.value = previous.saturating_add(delta).max(LOWER_BOUND);
        if self.value == previous {
            return;
        }
        let change = LifeChange {
            previous,
            current: self.value,
            cause,
        };
        trace!(?change, "life changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl Drop for LifeCounter {
    fn drop(&mut self) {
        self.cancel_repeat();
    }
}
