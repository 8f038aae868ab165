use crate::app::event::PressId;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    ArmHoldTimer { press: PressId, after: Duration },
    Quit,
}
