use crate::domain::crown::CrownToken;
use crate::domain::player::{Player, PlayerColor};
use crate::domain::ports::CoinFlip;
use tracing::debug;

/// Player pairs in resolution order. Each pair sees the velocities left by the previous one.
pub const PLAYER_PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    PlayersHit {
        a: PlayerColor,
        b: PlayerColor,
        crown_to: Option<PlayerColor>,
    },
    CrownCaptured {
        by: PlayerColor,
    },
}

pub fn resolve_collisions(
    players: &mut [Player],
    crown: &mut CrownToken,
    coin: &mut impl CoinFlip,
) -> Vec<CollisionEvent> {
    let mut events = resolve_player_hits(players, coin);
    if let Some(by) = capture_crown(crown, players) {
        events.push(CollisionEvent::CrownCaptured { by });
    }
    events
}

pub fn resolve_player_hits(
    players: &mut [Player],
    coin: &mut impl CoinFlip,
) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    for (i, j) in PLAYER_PAIRS {
        let Some((a, b)) = pair_mut(players, i, j) else {
            continue;
        };
        if !a.rect.overlaps(&b.rect) {
            continue;
        }

        a.hit(coin);
        b.hit(coin);
        let crown_to = transfer_crown(a, b);

        debug!(
            a = a.color.name(),
            b = b.color.name(),
            a_vel_x = a.vel_x,
            b_vel_x = b.vel_x,
            crown_to = crown_to.map(PlayerColor::name),
            "players hit"
        );
        events.push(CollisionEvent::PlayersHit {
            a: a.color,
            b: b.color,
            crown_to,
        });
    }
    events
}

/// Moves the crown across a colliding pair. Returns the new holder if it moved.
pub fn transfer_crown(a: &mut Player, b: &mut Player) -> Option<PlayerColor> {
    if a.has_crown {
        a.has_crown = false;
        b.has_crown = true;
        Some(b.color)
    } else if b.has_crown {
        b.has_crown = false;
        a.has_crown = true;
        Some(a.color)
    } else {
        None
    }
}

/// First player in slot order touching a live token takes the crown.
pub fn capture_crown(crown: &mut CrownToken, players: &mut [Player]) -> Option<PlayerColor> {
    if !crown.is_live() {
        return None;
    }
    let player = players.iter_mut().find(|p| p.rect.overlaps(&crown.rect))?;
    player.has_crown = true;
    crown.captured = true;
    debug!(by = player.color.name(), "crown captured");
    Some(player.color)
}

fn pair_mut(players: &mut [Player], i: usize, j: usize) -> Option<(&mut Player, &mut Player)> {
    debug_assert!(i < j);
    if j >= players.len() {
        return None;
    }
    let (head, tail) = players.split_at_mut(j);
    Some((&mut head[i], &mut tail[0]))
}
