// Domain layer: core simulation types and rules.

pub mod crown;
pub mod geometry;
pub mod level;
pub mod player;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use crown::CrownToken;
pub use geometry::Rect;
pub use level::{Level, LevelError, Platform};
pub use player::{Player, PlayerColor};
pub use ports::{CoinFlip, Drawable, Updatable, Visual};
pub use state::{
    Action, FrameSnapshot, PlayerSnapshot, RoundConfig, RoundPhase, RoundState, TimerMode,
};
pub use systems::collisions::CollisionEvent;
pub use systems::scoring::RoundResult;
