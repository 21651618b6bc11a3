use crate::domain::{RoundConfig, TimerMode};
use crate::interface_adapters::render::RenderMode;
use std::{env, path::PathBuf, time::Duration};

// Runtime constants and env-driven settings (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 256;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_FPS: u32 = 60;
// Above this the frame interval rounds toward zero, which tokio's interval rejects.
pub const MAX_FPS: u32 = 1000;

pub fn frames_per_second() -> u32 {
    parse_fps(env::var("CROWN_FPS").ok().as_deref())
}

pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(frames_per_second()))
}

pub fn round_config() -> RoundConfig {
    let mut config = RoundConfig::default();
    if let Some(seconds) = parse_round_seconds(env::var("CROWN_ROUND_SECONDS").ok().as_deref()) {
        config.round.round_seconds = seconds;
    }
    config.timer_mode = parse_timer_mode(env::var("CROWN_TIMER_MODE").ok().as_deref());
    config
}

// Unset means a fresh seed from the OS on every run.
pub fn rng_seed() -> Option<u64> {
    env::var("CROWN_SEED").ok().and_then(|v| v.trim().parse().ok())
}

// Unset means the built-in stage.
pub fn level_path() -> Option<PathBuf> {
    env::var("CROWN_LEVEL_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub fn render_mode() -> RenderMode {
    parse_render_mode(env::var("CROWN_RENDER").ok().as_deref())
}

// Log lines as JSON objects instead of the compact text format.
pub fn json_logs() -> bool {
    parse_json_logs(env::var("LOG_FORMAT").ok().as_deref())
}

fn parse_json_logs(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

fn parse_fps(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|fps| (1..=MAX_FPS).contains(fps))
        .unwrap_or(DEFAULT_FPS)
}

fn parse_round_seconds(value: Option<&str>) -> Option<f32> {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
}

fn parse_timer_mode(value: Option<&str>) -> TimerMode {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("wall") => TimerMode::WallClock,
        _ => TimerMode::PerFrame,
    }
}

fn parse_render_mode(value: Option<&str>) -> RenderMode {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => RenderMode::Json,
        _ => RenderMode::Log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_fps_is_missing_or_invalid_then_default_is_used() {
        assert_eq!(parse_fps(None), 60);
        assert_eq!(parse_fps(Some("0")), 60);
        assert_eq!(parse_fps(Some("fast")), 60);
        assert_eq!(parse_fps(Some(" 30 ")), 30);
    }

    #[test]
    fn when_fps_is_too_large_then_default_is_used() {
        assert_eq!(parse_fps(Some("4294967295")), DEFAULT_FPS);
        assert_eq!(parse_fps(Some("1001")), DEFAULT_FPS);
        assert_eq!(parse_fps(Some("1000")), MAX_FPS);

        let interval = Duration::from_secs_f64(1.0 / f64::from(parse_fps(Some("4294967295"))));
        assert!(!interval.is_zero());
    }

    #[test]
    fn when_round_seconds_is_not_positive_then_it_is_ignored() {
        assert_eq!(parse_round_seconds(Some("-1")), None);
        assert_eq!(parse_round_seconds(Some("NaN")), None);
        assert_eq!(parse_round_seconds(Some("10.5")), Some(10.5));
    }

    #[test]
    fn when_modes_are_parsed_then_unknown_values_fall_back_to_defaults() {
        assert_eq!(parse_timer_mode(Some("WALL")), TimerMode::WallClock);
        assert_eq!(parse_timer_mode(Some("frame")), TimerMode::PerFrame);
        assert_eq!(parse_timer_mode(None), TimerMode::PerFrame);
        assert_eq!(parse_render_mode(Some("json")), RenderMode::Json);
        assert_eq!(parse_render_mode(Some("pixels")), RenderMode::Log);
    }

    #[test]
    fn when_log_format_is_json_then_json_logs_are_enabled() {
        assert!(parse_json_logs(Some("json")));
        assert!(parse_json_logs(Some(" JSON ")));
        assert!(!parse_json_logs(Some("compact")));
        assert!(!parse_json_logs(None));
    }
}
