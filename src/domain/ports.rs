// Capabilities the simulation needs from its surroundings, plus the update/draw pair
// shared by the simulated bodies.

use crate::domain::geometry::Rect;
use crate::domain::level::Level;
use crate::domain::player::PlayerColor;
use crate::domain::tuning::round::Arena;

// Source of random bits for knockback direction.
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

// Bodies that advance once per frame against the level.
pub trait Updatable {
    fn update(&mut self, level: &Level, arena: &Arena);
}

/// Which asset the renderer should pick for a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Platform,
    Player { color: PlayerColor, crowned: bool },
    Crown,
}

// Bodies the renderer can draw from plain geometry.
pub trait Drawable {
    fn bounds(&self) -> Rect;
    fn visual(&self) -> Visual;
}
