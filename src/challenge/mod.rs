//! Challenge Controller (C6).
//!
//! Spins up an ephemeral local HTTP listener, renders a challenge page keyed
//! on challenge type, collects the human verdict, and tears everything down.
//! See [`session`] for the state machine and [`render`] for the page markup.

pub mod kinds;
pub mod render;
mod session;
pub mod words;

pub use kinds::Kind;
pub use session::{open, open_probed, Resolution};
