//! Window-bound invariant: at most six marks are visible.

use super::Invariant;
use crate::engine::Engine;
use crate::rules::WINDOW;

/// Invariant: the move history never exceeds the window size.
///
/// The 7th placement must have evicted the oldest entry before the
/// applying call returned.
pub struct WindowBoundedInvariant;

impl Invariant<Engine> for WindowBoundedInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().len() <= WINDOW
    }

    fn description() -> &'static str {
        "Move history never exceeds the six-mark window"
    }
}
