// Per-frame simulation systems.

pub mod collisions;
pub mod physics;
pub mod scoring;
