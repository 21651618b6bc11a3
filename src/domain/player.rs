// Player bodies: movement commands, knockback and crown/score state.

use crate::domain::geometry::Rect;
use crate::domain::level::Level;
use crate::domain::ports::{CoinFlip, Drawable, Updatable, Visual};
use crate::domain::systems::physics;
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::round::Arena;

/// Player identity. Order here is slot order and the tie-break precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Blue,
    Pink,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 3] = [PlayerColor::Red, PlayerColor::Blue, PlayerColor::Pink];

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Pink => "Pink",
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Blue => 1,
            PlayerColor::Pink => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub color: PlayerColor,
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,

    // Round state.
    pub has_crown: bool,
    pub score: u32,

    pub tuning: PlayerTuning,
}

impl Player {
    pub fn new(color: PlayerColor, x: f32, y: f32, tuning: PlayerTuning) -> Self {
        Self {
            color,
            rect: Rect::new(x, y, tuning.width, tuning.height),
            vel_x: 0.0,
            vel_y: 0.0,
            has_crown: false,
            score: 0,
            tuning,
        }
    }

    /// Places a fresh player standing on the arena floor.
    pub fn spawn_on_floor(color: PlayerColor, x: f32, arena: &Arena, tuning: PlayerTuning) -> Self {
        Self::new(color, x, arena.floor_y(tuning.height), tuning)
    }

    pub fn go_left(&mut self) {
        self.vel_x = -self.tuning.move_speed;
    }

    pub fn go_right(&mut self) {
        self.vel_x = self.tuning.move_speed;
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
    }

    /// Jumps if standing on a platform or the floor. Returns whether the jump happened.
    pub fn jump(&mut self, level: &Level, arena: &Arena) -> bool {
        let probe = self.rect.offset(0.0, self.tuning.ground_probe);
        let grounded = level.any_overlap(&probe) || self.rect.bottom() >= arena.height;
        if grounded {
            self.vel_y = self.tuning.jump_speed;
        }
        grounded
    }

    /// Knockback after bumping into another player.
    ///
    /// A stationary player is first given a random direction; a player already moving at or
    /// above the cap is reset to zero, so repeated hits alternate between strong and no push.
    pub fn hit(&mut self, coin: &mut impl CoinFlip) {
        let t = self.tuning;
        if self.vel_x == 0.0 {
            self.vel_x = if coin.flip() {
                t.knockback_seed
            } else {
                -t.knockback_seed
            };
        }
        if self.vel_x.abs() >= t.knockback_cap {
            self.vel_x = 0.0;
        }
        self.vel_x *= t.knockback_factor;
        self.vel_y = t.knockback_bounce;
    }

    pub fn clamp_to_arena(&mut self, arena: &Arena) {
        if self.rect.right() > arena.width {
            self.rect.set_right(arena.width);
        }
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
    }
}

impl Updatable for Player {
    fn update(&mut self, level: &Level, arena: &Arena) {
        physics::tick_player(self, level, arena);
    }
}

impl Drawable for Player {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Player {
            color: self.color,
            crowned: self.has_crown,
        }
    }
}
