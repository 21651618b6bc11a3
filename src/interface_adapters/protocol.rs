// Serialized shapes for the frame stream and the level file format.
// Domain types stay serde-free; conversions live here.

use crate::domain::{
    CollisionEvent, FrameSnapshot, PlayerColor, PlayerSnapshot, Rect, RoundResult,
};
use crate::use_cases::RoundUpdate;
use serde::{Deserialize, Serialize};

/// Messages written by the JSON renderer, one per line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RenderMessage {
    // Everything needed to draw one frame.
    Frame(FrameDto),
    // End-of-round summary.
    RoundEnded(RoundEndDto),
}

impl From<RoundUpdate> for RenderMessage {
    fn from(update: RoundUpdate) -> Self {
        match update {
            RoundUpdate::Frame(frame) => RenderMessage::Frame(FrameDto::from(&frame)),
            RoundUpdate::Ended(result) => RenderMessage::RoundEnded(RoundEndDto::from(&result)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDto {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Rect> for RectDto {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<RectDto> for Rect {
    fn from(r: RectDto) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorDto {
    Red,
    Blue,
    Pink,
}

impl From<PlayerColor> for ColorDto {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Red => ColorDto::Red,
            PlayerColor::Blue => ColorDto::Blue,
            PlayerColor::Pink => ColorDto::Pink,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub color: ColorDto,
    pub rect: RectDto,
    // Which sprite variant to draw.
    pub crowned: bool,
    pub score: u32,
}

impl From<&PlayerSnapshot> for PlayerDto {
    fn from(p: &PlayerSnapshot) -> Self {
        Self {
            color: p.color.into(),
            rect: p.rect.into(),
            crowned: p.crowned,
            score: p.score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventDto {
    PlayersHit {
        a: ColorDto,
        b: ColorDto,
        #[serde(skip_serializing_if = "Option::is_none")]
        crown_to: Option<ColorDto>,
    },
    CrownCaptured {
        by: ColorDto,
    },
}

impl From<&CollisionEvent> for EventDto {
    fn from(event: &CollisionEvent) -> Self {
        match *event {
            CollisionEvent::PlayersHit { a, b, crown_to } => EventDto::PlayersHit {
                a: a.into(),
                b: b.into(),
                crown_to: crown_to.map(ColorDto::from),
            },
            CollisionEvent::CrownCaptured { by } => EventDto::CrownCaptured { by: by.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub frame: u64,
    pub platforms: Vec<RectDto>,
    pub players: Vec<PlayerDto>,
    // Absent once the crown has been picked up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crown: Option<RectDto>,
    // Sound cues and effects; omitted on quiet frames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventDto>,
    pub timer_text: String,
    pub score_texts: Vec<String>,
}

impl From<&FrameSnapshot> for FrameDto {
    fn from(frame: &FrameSnapshot) -> Self {
        Self {
            frame: frame.frame,
            platforms: frame.platforms.iter().copied().map(RectDto::from).collect(),
            players: frame.players.iter().map(PlayerDto::from).collect(),
            crown: frame.crown.map(RectDto::from),
            events: frame.events.iter().map(EventDto::from).collect(),
            timer_text: frame.timer_text.clone(),
            score_texts: frame.score_texts.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundEndDto {
    pub winner: ColorDto,
    pub winner_text: String,
    pub score_texts: Vec<String>,
}

impl From<&RoundResult> for RoundEndDto {
    fn from(result: &RoundResult) -> Self {
        Self {
            winner: result.winner.into(),
            winner_text: result.winner_label(),
            score_texts: result.score_lines(),
        }
    }
}

/// On-disk level description.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelFileDto {
    pub platforms: Vec<RectDto>,
}
