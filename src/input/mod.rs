//! Input adapters: turn raw terminal events into counter-level intents.

pub mod crown;
pub mod keymap;

pub use crown::Crown;
pub use keymap::{map_key, KeyIntent};
