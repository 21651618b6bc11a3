use crate::domain::geometry::Rect;
use crate::domain::level::Level;
use crate::domain::player::Player;
use crate::domain::tuning::round::Arena;

pub fn tick_player(p: &mut Player, level: &Level, arena: &Arena) {
    apply_gravity(p, arena);

    // horizontal sweep
    p.rect.x += p.vel_x;
    sweep_horizontal(p, level);

    // vertical sweep
    p.rect.y += p.vel_y;
    sweep_vertical(p, level);
}

// Minimum first-frame fall speed, then constant acceleration. The floor stops any
// downward motion.
fn apply_gravity(p: &mut Player, arena: &Arena) {
    if p.vel_y == 0.0 {
        p.vel_y = p.tuning.initial_fall_speed;
    } else {
        p.vel_y += p.tuning.gravity;
    }

    let floor_y = arena.floor_y(p.rect.height);
    if p.rect.y >= floor_y && p.vel_y >= 0.0 {
        p.vel_y = 0.0;
        p.rect.y = floor_y;
    }
}

// Contacts are collected once after the move and every correction is applied in level
// order, so with several walls the last one listed decides the final edge.
fn contacts(p: &Player, level: &Level) -> Vec<Rect> {
    level.overlapping(&p.rect).map(|platform| *platform.rect()).collect()
}

// Horizontal speed is kept on contact so a held direction keeps pushing into the wall.
fn sweep_horizontal(p: &mut Player, level: &Level) {
    for block in contacts(p, level) {
        if p.vel_x > 0.0 {
            p.rect.set_right(block.left());
        } else if p.vel_x < 0.0 {
            p.rect.set_left(block.right());
        }
    }
}

// The first contact zeroes vertical speed, so later contacts only keep it at zero.
fn sweep_vertical(p: &mut Player, level: &Level) {
    for block in contacts(p, level) {
        if p.vel_y > 0.0 {
            p.rect.set_bottom(block.top());
        } else if p.vel_y < 0.0 {
            p.rect.set_top(block.bottom());
        }
        p.vel_y = 0.0;
    }
}
