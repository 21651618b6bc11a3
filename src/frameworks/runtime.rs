// Framework bootstrap: logging, configuration and task wiring for one round.

use crate::domain::{Level, RoundPhase, RoundState};
use crate::frameworks::config;
use crate::interface_adapters::input::{KeyMap, input_reader_task};
use crate::interface_adapters::level_file::load_level;
use crate::interface_adapters::render::{RenderMode, render_task};
use crate::interface_adapters::utils::rng::SeededCoin;
use crate::use_cases::{InputEvent, RoundOutcome, RoundSettings, RoundUpdate, round_task};

use std::{io::Result, sync::Arc};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::{Notify, broadcast, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // In `CROWN_RENDER=json` mode stdout is a machine-read stream of one frame per line, so any
    // log line there would corrupt it. Logs always go to stderr, in either format.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if config::json_logs() {
        builder.json().with_current_span(true).init();
    } else {
        builder.compact().init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Plays one round: input from `input`, rendered frames to `out`.
pub async fn run<R, W>(
    state: RoundState,
    settings: RoundSettings,
    coin: SeededCoin,
    input: R,
    render_mode: RenderMode,
    out: W,
) -> Result<RoundOutcome>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    // input_tx/rx: key events flow from the reader into the round task.
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>(config::INPUT_CHANNEL_CAPACITY);
    // update_tx/rx: post-step snapshots flow to the renderer.
    let (update_tx, update_rx) = broadcast::channel::<RoundUpdate>(config::UPDATE_BROADCAST_CAPACITY);
    let (phase_tx, _phase_rx) = watch::channel::<RoundPhase>(RoundPhase::Running);
    let shutdown = Arc::new(Notify::new());

    let renderer = tokio::spawn(render_task(update_rx, render_mode, out));
    let reader = tokio::spawn(input_reader_task(input, KeyMap::default(), input_tx));

    let interrupt = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received");
                shutdown.notify_one();
            }
        })
    };

    let outcome = tokio::spawn(round_task(
        state, input_rx, update_tx, phase_tx, settings, shutdown, coin,
    ))
    .await
    .map_err(std::io::Error::other)?;

    interrupt.abort();
    reader.abort();
    // The round task dropped its sender, so the renderer drains and exits.
    renderer.await.map_err(std::io::Error::other)?;

    Ok(outcome)
}

pub async fn run_with_config() -> Result<RoundOutcome> {
    init_runtime();

    let level = match config::level_path() {
        Some(path) => load_level(&path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to load level");
            std::io::Error::other(e)
        })?,
        None => Level::stage_one(),
    };

    let coin = match config::rng_seed() {
        Some(seed) => SeededCoin::from_seed(seed),
        None => SeededCoin::from_entropy(),
    };

    let settings = RoundSettings {
        frame_interval: config::frame_interval(),
    };
    tracing::debug!(
        fps = config::frames_per_second(),
        platforms = level.platforms().len(),
        seeded = config::rng_seed().is_some(),
        "round configured"
    );

    run(
        RoundState::new(config::round_config(), level),
        settings,
        coin,
        BufReader::new(tokio::io::stdin()),
        config::render_mode(),
        tokio::io::stdout(),
    )
    .await
}
