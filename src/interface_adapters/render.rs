// Headless presentation of the frame stream. A graphical frontend would subscribe to the
// same broadcast channel and draw from the snapshots instead.

use crate::interface_adapters::protocol::RenderMessage;
use crate::use_cases::RoundUpdate;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    // Frames as debug events, the summary as an info event.
    #[default]
    Log,
    // One JSON message per line on the output.
    Json,
}

/// Consumes round updates until the round ends or the channel closes.
pub async fn render_task<W>(
    mut update_rx: broadcast::Receiver<RoundUpdate>,
    mode: RenderMode,
    mut out: W,
) where
    W: AsyncWrite + Unpin,
{
    loop {
        let update = match update_rx.recv().await {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "renderer lagged; skipping to latest frame");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("round updates channel closed; renderer exiting");
                break;
            }
        };
        let finished = matches!(update, RoundUpdate::Ended(_));

        match mode {
            RenderMode::Log => log_update(&update),
            RenderMode::Json => {
                if let Err(e) = write_json_line(&mut out, update).await {
                    error!(error = %e, "failed to write frame; renderer exiting");
                    break;
                }
            }
        }

        if finished {
            break;
        }
    }
}

fn log_update(update: &RoundUpdate) {
    match update {
        RoundUpdate::Frame(frame) => {
            debug!(
                frame = frame.frame,
                timer = %frame.timer_text,
                scores = ?frame.score_texts,
                crown_on_stage = frame.crown.is_some(),
                "frame"
            );
            for event in &frame.events {
                debug!(frame = frame.frame, event = ?event, "collision");
            }
        }
        RoundUpdate::Ended(result) => info!(
            winner = %result.winner_label(),
            scores = ?result.score_lines(),
            "round summary"
        ),
    }
}

async fn write_json_line<W>(out: &mut W, update: RoundUpdate) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(&RenderMessage::from(update)).map_err(std::io::Error::other)?;
    line.push('\n');
    out.write_all(line.as_bytes()).await?;
    out.flush().await
}
