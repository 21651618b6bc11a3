/// Gameplay tuning for player bodies.
///
/// All speeds are in pixels per frame; the simulation runs one step per rendered frame.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    /// Body size in pixels.
    pub width: f32,
    pub height: f32,

    /// Horizontal speed assigned by `go_left` / `go_right`.
    pub move_speed: f32,

    /// Vertical speed assigned on the first airborne frame.
    pub initial_fall_speed: f32,

    /// Added to vertical speed on every later airborne frame.
    pub gravity: f32,

    /// Vertical speed assigned by a successful jump (negative is up).
    pub jump_speed: f32,

    /// How far below the feet the jump probe looks for a platform.
    pub ground_probe: f32,

    /// Horizontal speed seeded into a stationary player before knockback.
    pub knockback_seed: f32,

    /// Horizontal speeds at or above this are reset to zero before knockback.
    pub knockback_cap: f32,

    /// Factor applied to horizontal speed on knockback.
    pub knockback_factor: f32,

    /// Vertical speed assigned on knockback.
    pub knockback_bounce: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            move_speed: 6.0,
            initial_fall_speed: 1.0,
            gravity: 0.35,
            jump_speed: -10.0,
            ground_probe: 2.0,
            knockback_seed: 5.0,
            knockback_cap: 10.0,
            knockback_factor: -2.0,
            knockback_bounce: -10.0,
        }
    }
}
