use crate::domain::player::{Player, PlayerColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: PlayerColor,
    // Final scores in slot order.
    pub scores: [(PlayerColor, u32); 3],
}

impl RoundResult {
    pub fn from_players(players: &[Player; 3]) -> Self {
        let scores = players.each_ref().map(|p| (p.color, p.score));
        Self {
            winner: decide_winner(&scores),
            scores,
        }
    }

    pub fn winner_label(&self) -> String {
        format!("{} Wins!", self.winner.name())
    }

    pub fn score_lines(&self) -> Vec<String> {
        self.scores
            .iter()
            .map(|&(color, score)| score_text(color, score))
            .collect()
    }
}

pub fn score_text(color: PlayerColor, score: u32) -> String {
    format!("{}: {}", color.name(), score)
}

/// Gives the per-frame points to whoever holds the crown. Returns the holder, if any.
pub fn award_crown_holder(players: &mut [Player], points: u32) -> Option<PlayerColor> {
    let holder = players.iter_mut().find(|p| p.has_crown)?;
    holder.score = holder.score.saturating_add(points);
    Some(holder.color)
}

/// Highest score wins; exact ties go to the earlier color in Red, Blue, Pink order.
pub fn decide_winner(scores: &[(PlayerColor, u32); 3]) -> PlayerColor {
    let mut best = scores[0];
    // Slots are walked in order, so a strict `>` keeps the earlier color on ties.
    for &(color, score) in &scores[1..] {
        if score > best.1 {
            best = (color, score);
        }
    }
    best.0
}
