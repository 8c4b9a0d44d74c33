//! Runner configuration from environment variables.
//!
//! Every variable is optional; unset or unparsable values fall back to the
//! defaults. Rejected values are collected so they can be logged once the
//! logger is up.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::types::{GameConfig, ObstacleKind};

/// Default time a key counts as held without a release or repeat event.
pub const DEFAULT_KEY_RELEASE_MS: u32 = 550;

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub game: GameConfig,
    pub key_release_ms: u32,
    /// Log file; no logging when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// `(variable, raw value)` pairs that were ignored.
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
            log_path: None,
            log_level: LevelFilter::INFO,
            rejected: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let mut env = EnvReader {
            lookup,
            rejected: Vec::new(),
        };

        let game = GameConfig {
            spawn_interval_ticks: env.parse("DINO_SPAWN_INTERVAL", defaults.spawn_interval_ticks),
            initial_speed: env.parse("DINO_INITIAL_SPEED", defaults.initial_speed),
            min_speed: env.parse("DINO_MIN_SPEED", defaults.min_speed),
            speed_up_interval_ticks: env
                .parse("DINO_SPEED_UP_INTERVAL", defaults.speed_up_interval_ticks),
            tick_period_ms: env.parse("DINO_TICK_MS", defaults.tick_period_ms),
            tick_period_step_ms: env.parse("DINO_TICK_STEP_MS", defaults.tick_period_step_ms),
            min_tick_period_ms: env.parse("DINO_MIN_TICK_MS", defaults.min_tick_period_ms),
            hang_ticks_tapped: env.parse("DINO_HANG_TAPPED", defaults.hang_ticks_tapped),
            hang_ticks_held: env.parse("DINO_HANG_HELD", defaults.hang_ticks_held),
            max_obstacles: env.parse("DINO_MAX_OBSTACLES", defaults.max_obstacles),
            obstacle_kind: env.obstacle_kind("DINO_OBSTACLE_KIND", defaults.obstacle_kind),
            confirm_debounce_ticks: defaults.confirm_debounce_ticks,
        };

        Self {
            game: game.sanitized(),
            key_release_ms: env.parse("DINO_KEY_RELEASE_MS", DEFAULT_KEY_RELEASE_MS),
            log_path: env.read("DINO_LOG_PATH").map(PathBuf::from),
            log_level: env.parse("DINO_LOG_LEVEL", LevelFilter::INFO),
            rejected: env.rejected,
        }
    }
}

struct EnvReader<F> {
    lookup: F,
    rejected: Vec<(&'static str, String)>,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    /// Trimmed value; blank counts as unset.
    fn read(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
    }

    fn parse<T: FromStr>(&mut self, key: &'static str, default: T) -> T {
        match self.read(key) {
            None => default,
            Some(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    self.rejected.push((key, raw));
                    default
                }
            },
        }
    }

    fn obstacle_kind(&mut self, key: &'static str, default: ObstacleKind) -> ObstacleKind {
        match self.read(key) {
            None => default,
            Some(raw) => match ObstacleKind::from_name(&raw) {
                Some(kind) => kind,
                None => {
                    self.rejected.push((key, raw));
                    default
                }
            },
        }
    }
}
