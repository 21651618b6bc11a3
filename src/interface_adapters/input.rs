// Maps raw key names to round input events and feeds them from a line-based source.
//
// Line format: `down <KEY>`, `up <KEY>` or `quit`. Key names are case-insensitive.

use crate::domain::{Action, PlayerColor};
use crate::use_cases::InputEvent;
use std::collections::HashMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, (PlayerColor, Action)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = [
            ("LEFT", PlayerColor::Red, Action::Left),
            ("RIGHT", PlayerColor::Red, Action::Right),
            ("UP", PlayerColor::Red, Action::Jump),
            ("A", PlayerColor::Blue, Action::Left),
            ("D", PlayerColor::Blue, Action::Right),
            ("W", PlayerColor::Blue, Action::Jump),
            ("J", PlayerColor::Pink, Action::Left),
            ("L", PlayerColor::Pink, Action::Right),
            ("I", PlayerColor::Pink, Action::Jump),
        ]
        .into_iter()
        .map(|(key, player, action)| (key.to_string(), (player, action)))
        .collect();
        Self { bindings }
    }
}

impl KeyMap {
    pub fn lookup(&self, key: &str) -> Option<(PlayerColor, Action)> {
        self.bindings.get(&key.to_ascii_uppercase()).copied()
    }

    /// Returns `None` for blank lines, unknown verbs and unmapped keys.
    pub fn parse_line(&self, line: &str) -> Option<InputEvent> {
        let mut parts = line.split_whitespace();
        let verb = parts.next()?;
        if verb.eq_ignore_ascii_case("quit") {
            return Some(InputEvent::Quit);
        }

        let (player, action) = self.lookup(parts.next()?)?;
        if verb.eq_ignore_ascii_case("down") {
            Some(InputEvent::Pressed { player, action })
        } else if verb.eq_ignore_ascii_case("up") {
            Some(InputEvent::Released { player, action })
        } else {
            None
        }
    }
}

/// Forwards parsed lines into the round until the source ends or the round stops listening.
pub async fn input_reader_task<R>(reader: R, keymap: KeyMap, input_tx: mpsc::Sender<InputEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("input source ended");
                break;
            }
            Err(e) => {
                info!(error = %e, "input source failed; no more input");
                break;
            }
        };

        let Some(event) = keymap.parse_line(&line) else {
            debug!(line = %line.trim(), "ignored input line");
            continue;
        };

        if input_tx.send(event).await.is_err() {
            debug!("round no longer accepts input; reader exiting");
            break;
        }
    }
}
