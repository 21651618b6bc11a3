// Shared helpers for driving whole rounds through the public runtime entry point.
use crown_clash::domain::{Level, RoundConfig, RoundState};
use crown_clash::interface_adapters::render::RenderMode;
use crown_clash::interface_adapters::utils::rng::SeededCoin;
use crown_clash::use_cases::{RoundOutcome, RoundSettings};
use std::time::Duration;
use tokio::io::AsyncReadExt;

// Large enough to hold every JSON frame of a default round without back-pressure.
const OUTPUT_BUFFER: usize = 4 * 1024 * 1024;

pub fn new_round() -> RoundState {
    RoundState::new(RoundConfig::default(), Level::stage_one())
}

// Runs one round with scripted input lines and returns the outcome plus every JSON message
// the renderer wrote.
pub async fn run_scripted(
    state: RoundState,
    script: &'static [u8],
) -> (RoundOutcome, Vec<serde_json::Value>) {
    let (writer, mut reader) = tokio::io::duplex(OUTPUT_BUFFER);
    let settings = RoundSettings {
        frame_interval: Duration::from_millis(16),
    };

    let outcome = crown_clash::run(
        state,
        settings,
        SeededCoin::from_seed(1),
        script,
        RenderMode::Json,
        writer,
    )
    .await
    .expect("round should run");

    // The renderer has exited and dropped its half, so this reads to EOF.
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .await
        .expect("renderer output is utf8");
    let messages = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is one JSON message"))
        .collect();

    (outcome, messages)
}
