// Gameplay tuning, kept apart from runtime configuration (frame rate, channel sizes, etc.).

pub mod player;
pub mod round;
