use super::types::{InputEvent, RoundOutcome, RoundUpdate};
use crate::domain::systems::{collisions, scoring};
use crate::domain::{Action, CoinFlip, RoundPhase, RoundState, TimerMode, Updatable};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Runtime settings for a round loop.
#[derive(Debug, Clone)]
pub struct RoundSettings {
    /// Fixed frame interval; the loop sleeps until the next boundary each iteration.
    pub frame_interval: Duration,
}

/// Applies one input event. `Quit` breaks without touching the state.
pub fn apply_input(state: &mut RoundState, event: InputEvent) -> ControlFlow<()> {
    let RoundState {
        config,
        level,
        players,
        ..
    } = state;
    match event {
        InputEvent::Quit => return ControlFlow::Break(()),
        InputEvent::Pressed { player, action } => {
            let p = &mut players[player.index()];
            match action {
                Action::Left => p.go_left(),
                Action::Right => p.go_right(),
                Action::Jump => {
                    p.jump(level, &config.arena);
                }
            }
        }
        InputEvent::Released { player, action } => {
            // Releasing a direction only stops the player if it is still moving that way.
            let p = &mut players[player.index()];
            match action {
                Action::Left if p.vel_x < 0.0 => p.stop(),
                Action::Right if p.vel_x > 0.0 => p.stop(),
                _ => {}
            }
        }
    }
    ControlFlow::Continue(())
}

/// Advances the round by one frame and drains `timer_drain` off the clock.
pub fn step_frame(
    state: &mut RoundState,
    coin: &mut impl CoinFlip,
    timer_drain: f32,
) -> RoundPhase {
    if state.phase == RoundPhase::Ended {
        return RoundPhase::Ended;
    }

    {
        let RoundState {
            config,
            level,
            players,
            crown,
            events,
            ..
        } = &mut *state;

        for p in players.iter_mut() {
            p.update(level, &config.arena);
        }

        *events = collisions::resolve_collisions(players, crown, coin);

        for p in players.iter_mut() {
            p.clamp_to_arena(&config.arena);
        }

        scoring::award_crown_holder(players, config.round.points_per_frame);
    }

    debug_assert!(state.crown_holders() <= 1, "more than one crown holder");
    debug_assert!(
        !state.crown.is_live() || state.crown_holders() == 0,
        "crown held while the token is still on the stage"
    );

    state.frame += 1;
    state.drain_timer(timer_drain)
}

pub async fn round_task(
    mut state: RoundState,
    mut input_rx: mpsc::Receiver<InputEvent>,
    update_tx: broadcast::Sender<RoundUpdate>,
    phase_tx: watch::Sender<RoundPhase>,
    settings: RoundSettings,
    shutdown: Arc<Notify>,
    mut coin: impl CoinFlip,
) -> RoundOutcome {
    let _ = phase_tx.send(RoundPhase::Running);
    info!(
        round_seconds = state.timer,
        frame_ms = settings.frame_interval.as_millis() as u64,
        timer_mode = ?state.config.timer_mode,
        "round started"
    );

    // Frame limiter: late frames push the schedule back instead of bursting to catch up.
    let mut interval = tokio::time::interval(settings.frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_frame = Instant::now();

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(frame = state.frame, "round shut down");
                return RoundOutcome::Quit;
            }
            _ = interval.tick() => {}
        }

        // Drain everything queued since the last frame before simulating.
        while let Ok(ev) = input_rx.try_recv() {
            if apply_input(&mut state, ev).is_break() {
                info!(frame = state.frame, "quit requested");
                return RoundOutcome::Quit;
            }
        }

        let now = Instant::now();
        let timer_drain = match state.config.timer_mode {
            TimerMode::PerFrame => state.config.round.timer_step,
            TimerMode::WallClock => now.duration_since(last_frame).as_secs_f32(),
        };
        last_frame = now;

        let phase = step_frame(&mut state, &mut coin, timer_drain);

        // Render-after-mutate: the snapshot is taken once all frame writes are done.
        let _ = update_tx.send(RoundUpdate::Frame(state.snapshot()));

        if let Some(result) = state.result() {
            let _ = phase_tx.send(phase);
            info!(
                frames = state.frame,
                winner = result.winner.name(),
                scores = ?result.score_lines(),
                "round ended"
            );
            let _ = update_tx.send(RoundUpdate::Ended(result.clone()));
            return RoundOutcome::Completed(result);
        }

        if state.frame % 60 == 0 {
            debug!(frame = state.frame, timer = state.timer, "round tick");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollisionEvent, Level, PlayerColor, RoundConfig};

    struct AlwaysRight;

    impl CoinFlip for AlwaysRight {
        fn flip(&mut self) -> bool {
            true
        }
    }

    fn new_round() -> RoundState {
        RoundState::new(RoundConfig::default(), Level::stage_one())
    }

    #[test]
    fn when_key_is_released_in_other_direction_then_player_keeps_moving() {
        let mut state = new_round();
        let red = PlayerColor::Red;

        let _ = apply_input(
            &mut state,
            InputEvent::Pressed {
                player: red,
                action: Action::Right,
            },
        );
        let _ = apply_input(
            &mut state,
            InputEvent::Released {
                player: red,
                action: Action::Left,
            },
        );
        assert_eq!(state.players[0].vel_x, 6.0);

        let _ = apply_input(
            &mut state,
            InputEvent::Released {
                player: red,
                action: Action::Right,
            },
        );
        assert_eq!(state.players[0].vel_x, 0.0);
    }

    #[test]
    fn when_jump_is_pressed_on_floor_then_only_that_player_jumps() {
        let mut state = new_round();

        let flow = apply_input(
            &mut state,
            InputEvent::Pressed {
                player: PlayerColor::Pink,
                action: Action::Jump,
            },
        );

        assert!(flow.is_continue());
        assert_eq!(state.players[2].vel_y, -10.0);
        assert_eq!(state.players[0].vel_y, 0.0);
    }

    #[test]
    fn when_quit_arrives_then_input_breaks() {
        let mut state = new_round();

        assert!(apply_input(&mut state, InputEvent::Quit).is_break());
    }

    #[test]
    fn when_timer_drains_per_frame_then_round_ends_after_267_frames() {
        let mut state = new_round();
        let mut frames = 0;

        while step_frame(&mut state, &mut AlwaysRight, 0.015) == RoundPhase::Running {
            frames += 1;
            assert!(frames < 1000, "round never ended");
        }
        frames += 1;

        assert_eq!(frames, 267);
        assert_eq!(state.frame, 267);
        assert_eq!(step_frame(&mut state, &mut AlwaysRight, 0.015), RoundPhase::Ended);
        assert_eq!(state.frame, 267);
    }

    #[test]
    fn when_player_holds_crown_then_only_they_score_each_frame() {
        let mut state = new_round();
        state.crown.captured = true;
        state.players[1].has_crown = true;

        for _ in 0..10 {
            step_frame(&mut state, &mut AlwaysRight, 0.015);
        }

        assert_eq!(state.players[1].score, 10);
        assert_eq!(state.players[0].score, 0);
        assert_eq!(state.players[2].score, 0);
    }

    #[test]
    fn when_player_walks_into_crown_then_it_is_captured_and_scored_same_frame() {
        let mut state = new_round();
        state.crown.rect = crate::domain::Rect::new(445.0, 760.0, 30.0, 30.0);
        state.player_mut(PlayerColor::Red).go_right();

        let mut captured_at = None;
        for frame in 1..=5 {
            step_frame(&mut state, &mut AlwaysRight, 0.015);
            if state.crown.captured && captured_at.is_none() {
                captured_at = Some(frame);
                assert_eq!(
                    state.snapshot().events,
                    vec![CollisionEvent::CrownCaptured {
                        by: PlayerColor::Red
                    }]
                );
            }
        }
        // Events only describe the frame that produced them.
        assert!(state.events.is_empty());

        // Red starts at x=400 (right edge 440) and moves 6 per frame.
        assert_eq!(captured_at, Some(1));
        assert!(state.players[0].has_crown);
        assert_eq!(state.players[0].score, 5);
        assert!(state.snapshot().crown.is_none());
    }

    #[test]
    fn when_simulating_many_frames_with_input_then_crown_holders_never_exceed_one() {
        let mut state = new_round();
        state.crown.rect = crate::domain::Rect::new(600.0, 760.0, 30.0, 30.0);
        let mut before_capture_zero = true;

        for frame in 0..400u32 {
            let (player, action) = match frame % 6 {
                0 => (PlayerColor::Red, Action::Right),
                1 => (PlayerColor::Blue, Action::Left),
                2 => (PlayerColor::Pink, Action::Left),
                3 => (PlayerColor::Blue, Action::Jump),
                4 => (PlayerColor::Red, Action::Jump),
                _ => (PlayerColor::Pink, Action::Jump),
            };
            let _ = apply_input(&mut state, InputEvent::Pressed { player, action });
            step_frame(&mut state, &mut AlwaysRight, 0.001);

            assert!(state.crown_holders() <= 1);
            if !state.crown.captured {
                before_capture_zero &= state.crown_holders() == 0;
            } else {
                assert_eq!(state.crown_holders(), 1);
            }
        }

        assert!(before_capture_zero);
    }

    fn settings() -> RoundSettings {
        RoundSettings {
            frame_interval: Duration::from_millis(16),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn when_round_task_runs_out_of_time_then_every_frame_and_summary_are_published() {
        let (_input_tx, input_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = broadcast::channel(512);
        let (phase_tx, phase_rx) = watch::channel(RoundPhase::Running);
        let mut state = new_round();
        state.crown.captured = true;
        state.players[2].has_crown = true;

        let outcome = round_task(
            state,
            input_rx,
            update_tx,
            phase_tx,
            settings(),
            Arc::new(Notify::new()),
            AlwaysRight,
        )
        .await;

        let result = match outcome {
            RoundOutcome::Completed(result) => result,
            other => panic!("expected the round to complete, got {other:?}"),
        };
        assert_eq!(result.winner, PlayerColor::Pink);
        assert_eq!(result.scores[2], (PlayerColor::Pink, 267));
        assert_eq!(*phase_rx.borrow(), RoundPhase::Ended);

        let mut frames = 0;
        let mut ended = 0;
        while let Ok(update) = update_rx.try_recv() {
            match update {
                RoundUpdate::Frame(_) => frames += 1,
                RoundUpdate::Ended(_) => ended += 1,
            }
        }
        assert_eq!(frames, 267);
        assert_eq!(ended, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn when_timer_follows_wall_clock_then_round_length_depends_on_frame_interval() {
        let (_input_tx, input_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = broadcast::channel(512);
        let (phase_tx, _phase_rx) = watch::channel(RoundPhase::Running);
        let config = RoundConfig {
            timer_mode: TimerMode::WallClock,
            ..RoundConfig::default()
        };

        let outcome = round_task(
            RoundState::new(config, Level::stage_one()),
            input_rx,
            update_tx,
            phase_tx,
            settings(),
            Arc::new(Notify::new()),
            AlwaysRight,
        )
        .await;
        assert!(matches!(outcome, RoundOutcome::Completed(_)));

        let mut timers = Vec::new();
        while let Ok(update) = update_rx.try_recv() {
            if let RoundUpdate::Frame(frame) = update {
                timers.push(frame.time_left);
            }
        }

        // The first tick fires immediately, then about 16ms per frame: 4.0 / 0.016 = 250 more
        // frames, well short of the 267 a per-frame timer would run.
        assert!((timers[0] - 4.0).abs() < 1e-3, "first frame drained {}", 4.0 - timers[0]);
        assert!((timers[1] - (4.0 - 0.016)).abs() < 2e-3, "second frame at {}", timers[1]);
        assert!(
            (240..=260).contains(&timers.len()),
            "round lasted {} frames",
            timers.len()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn when_quit_is_queued_then_round_task_stops_before_simulating() {
        let (input_tx, input_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = broadcast::channel(8);
        let (phase_tx, _phase_rx) = watch::channel(RoundPhase::Running);
        input_tx.send(InputEvent::Quit).await.expect("round listening");

        let outcome = round_task(
            new_round(),
            input_rx,
            update_tx,
            phase_tx,
            settings(),
            Arc::new(Notify::new()),
            AlwaysRight,
        )
        .await;

        assert_eq!(outcome, RoundOutcome::Quit);
        assert!(update_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn when_shutdown_is_signalled_then_round_task_returns_quit() {
        let (_input_tx, input_rx) = mpsc::channel(8);
        let (update_tx, _update_rx) = broadcast::channel(8);
        let (phase_tx, _phase_rx) = watch::channel(RoundPhase::Running);
        let shutdown = Arc::new(Notify::new());
        shutdown.notify_one();

        let outcome = round_task(
            new_round(),
            input_rx,
            update_tx,
            phase_tx,
            settings(),
            shutdown,
            AlwaysRight,
        )
        .await;

        assert_eq!(outcome, RoundOutcome::Quit);
    }
}
