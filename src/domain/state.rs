// Domain-level round state plus the plain snapshots handed to the renderer.

use crate::domain::crown::CrownToken;
use crate::domain::geometry::Rect;
use crate::domain::level::Level;
use crate::domain::player::{Player, PlayerColor};
use crate::domain::ports::{Drawable, Visual};
use crate::domain::systems::collisions::CollisionEvent;
use crate::domain::systems::scoring::{RoundResult, score_text};
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::round::{Arena, RoundTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

/// How the round timer is drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    // Fixed step per simulated frame; round length depends on the frame rate.
    #[default]
    PerFrame,
    // Real elapsed seconds between frames.
    WallClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundConfig {
    pub arena: Arena,
    pub player: PlayerTuning,
    pub round: RoundTuning,
    pub timer_mode: TimerMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Running,
    Ended,
}

pub struct RoundState {
    pub config: RoundConfig,
    pub level: Level,
    pub players: [Player; 3],
    pub crown: CrownToken,
    pub timer: f32,
    pub frame: u64,
    pub phase: RoundPhase,
    // Hits and captures from the most recent frame.
    pub events: Vec<CollisionEvent>,
}

impl RoundState {
    pub fn new(config: RoundConfig, level: Level) -> Self {
        let spawn = |color: PlayerColor| {
            Player::spawn_on_floor(
                color,
                config.round.spawn_x[color.index()],
                &config.arena,
                config.player,
            )
        };
        Self {
            players: PlayerColor::ALL.map(spawn),
            crown: CrownToken::new(config.round.crown_rect),
            timer: config.round.round_seconds,
            frame: 0,
            phase: RoundPhase::Running,
            events: Vec::new(),
            config,
            level,
        }
    }

    pub fn player_mut(&mut self, color: PlayerColor) -> &mut Player {
        &mut self.players[color.index()]
    }

    pub fn crown_holders(&self) -> usize {
        self.players.iter().filter(|p| p.has_crown).count()
    }

    /// Drains the timer and reports the phase after the drain.
    pub fn drain_timer(&mut self, amount: f32) -> RoundPhase {
        self.timer -= amount;
        if self.timer <= 0.0 {
            self.phase = RoundPhase::Ended;
        }
        self.phase
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            RoundPhase::Running => None,
            RoundPhase::Ended => Some(RoundResult::from_players(&self.players)),
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            platforms: self.level.platforms().iter().map(|p| p.bounds()).collect(),
            players: self.players.iter().map(PlayerSnapshot::from).collect(),
            crown: self.crown.is_live().then(|| self.crown.bounds()),
            events: self.events.clone(),
            time_left: self.timer.max(0.0),
            timer_text: format!("Time: {:.2}", self.timer.max(0.0)),
            score_texts: self
                .players
                .iter()
                .map(|p| score_text(p.color, p.score))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub color: PlayerColor,
    pub rect: Rect,
    pub crowned: bool,
    pub score: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        let crowned = matches!(p.visual(), Visual::Player { crowned: true, .. });
        Self {
            color: p.color,
            rect: p.bounds(),
            crowned,
            score: p.score,
        }
    }
}

/// Everything the renderer needs for one frame, taken after all simulation writes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub platforms: Vec<Rect>,
    pub players: Vec<PlayerSnapshot>,
    pub crown: Option<Rect>,
    pub events: Vec<CollisionEvent>,
    pub time_left: f32,
    pub timer_text: String,
    pub score_texts: Vec<String>,
}
