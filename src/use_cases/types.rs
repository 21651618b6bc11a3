// Use-case level inputs/outputs for the round loop.

use crate::domain::{Action, FrameSnapshot, PlayerColor, RoundResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed { player: PlayerColor, action: Action },
    Released { player: PlayerColor, action: Action },
    Quit,
}

/// Published by the round task once per frame, after the simulation step.
#[derive(Debug, Clone)]
pub enum RoundUpdate {
    Frame(FrameSnapshot),
    Ended(RoundResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed(RoundResult),
    // Stopped by a quit event or an external shutdown before the timer ran out.
    Quit,
}
