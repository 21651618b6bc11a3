// Use cases layer: the round workflow driven by the runtime.

pub mod round;
pub mod types;

pub use round::{RoundSettings, round_task};
pub use types::{InputEvent, RoundOutcome, RoundUpdate};
