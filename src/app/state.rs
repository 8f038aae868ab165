use crate::app::event::PressId;
use crate::config::AppConfig;
use crate::counter::scheduler::Scheduler;
use crate::counter::{Direction, LifeChange, LifeCounter, PressPhase};
use crate::input::Crown;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// Which device started the press currently being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressSource {
    Mouse,
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePress {
    pub id: PressId,
    pub direction: Direction,
    pub source: PressSource,
}

pub struct AppState {
    pub config: AppConfig,
    pub counter: LifeCounter,
    pub crown: Crown,
    pub press: Option<ActivePress>,
    pub next_press_id: PressId,
    /// Terminal area, used to hit-test mouse presses against the buttons
    pub viewport: Rect,
    /// The terminal reports key releases, so keys can be held like buttons
    pub key_releases: bool,
    pub last_change: Option<LifeChange>,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    changes: Rc<RefCell<Vec<LifeChange>>>,
}

impl AppState {
    pub fn new(config: AppConfig, scheduler: Box<dyn Scheduler>) -> Self {
        let mut counter = LifeCounter::new(config.counter_rules(), scheduler);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        counter.subscribe(move |change: &LifeChange| sink.borrow_mut().push(*change));
        let crown = Crown::new(&config.crown);
        Self {
            config,
            counter,
            crown,
            press: None,
            next_press_id: 0,
            viewport: Rect::default(),
            key_releases: false,
            last_change: None,
            should_quit: false,
            dirty: true,
            pending_bell: false,
            changes,
        }
    }

    /// Life changes published by the counter since the last call.
    pub fn take_changes(&mut self) -> Vec<LifeChange> {
        self.changes.borrow_mut().drain(..).collect()
    }

    pub fn begin_press(&mut self, direction: Direction, source: PressSource) -> PressId {
        let id = self.next_press_id;
        self.next_press_id += 1;
        self.press = Some(ActivePress {
            id,
            direction,
            source,
        });
        self.counter.on_press(direction);
        self.dirty = true;
        id
    }

    /// Finish the tracked press: a tap if the hold threshold never fired.
    pub fn end_press(&mut self) {
        if self.press.take().is_some() {
            self.counter.on_release();
            self.dirty = true;
        }
    }

    /// Drop the tracked press without a tap (focus lost, terminal went away).
    pub fn abandon_press(&mut self) {
        if self.press.take().is_some() {
            self.counter.on_hold_end();
            self.dirty = true;
        }
    }

    pub fn rotate_crown(&mut self, detents: i32) {
        let reading = self.crown.rotate(detents);
        self.counter.on_rotate(reading);
        self.dirty = true;
    }

    /// Direction currently held down, for highlighting the matching button.
    pub fn held_direction(&self) -> Option<Direction> {
        match self.counter.phase() {
            PressPhase::Idle => None,
            PressPhase::Pressing(d) | PressPhase::Repeating(d) => Some(d),
        }
    }

    pub fn status_line(&self) -> String {
        let phase = match self.counter.phase() {
            PressPhase::Idle => "idle".to_string(),
            PressPhase::Pressing(d) => format!("pressing {}", d.label()),
            PressPhase::Repeating(d) => format!(
                "repeating {} ({:+}/{}ms)",
                d.label(),
                self.counter.repeat_delta(),
                self.config.timing.repeat_interval_ms
            ),
        };
        let mut s = format!("{} | crown {:+.1}", phase, self.crown.value());
        if let Some(change) = self.last_change {
            s.push_str(&format!(
                " | last {:+} ({:?})",
                change.current - change.previous,
                change.cause
            ));
        }
        s
    }
}
