//! Application logic: state, event handling, timers and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
pub mod timers;
