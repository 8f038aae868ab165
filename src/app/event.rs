use crate::counter::scheduler::TimerId;
use crossterm::event::Event as CrosstermEvent;

pub type PressId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A press has been held for the long-press threshold
    HoldElapsed { press: PressId },

    /// A hold-repeat interval elapsed
    RepeatTick(TimerId),
}
