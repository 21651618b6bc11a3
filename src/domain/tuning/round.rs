use crate::domain::geometry::Rect;

/// Screen bounds the players are kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Y coordinate a body of the given height rests at when standing on the floor.
    pub fn floor_y(&self, body_height: f32) -> f32 {
        self.height - body_height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Gameplay tuning for a single round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTuning {
    /// Timer value at round start.
    pub round_seconds: f32,

    /// Amount taken off the timer per simulated frame in frame-coupled mode.
    pub timer_step: f32,

    /// Score awarded to the crown holder per frame.
    pub points_per_frame: u32,

    /// Where the crown token waits to be picked up.
    pub crown_rect: Rect,

    /// Left edge of each player's spawn, in player order. Players spawn on the floor.
    pub spawn_x: [f32; 3],
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            round_seconds: 4.0,
            timer_step: 0.015,
            points_per_frame: 1,
            // Floats just above the centre platform.
            crown_rect: Rect::new(670.0, 410.0, 30.0, 30.0),
            spawn_x: [400.0, 800.0, 1120.0],
        }
    }
}
