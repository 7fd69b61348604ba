//! Frame driver settings, read from the environment.

use std::time::Duration;

pub const DEFAULT_FPS: u64 = 60;

pub const FPS_VAR: &str = "MAZE_CHASE_FPS";
pub const SEED_VAR: &str = "MAZE_CHASE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Frames (one tick plus one draw) per second.
    pub fps: u64,
    /// Fixed seed for a reproducible run.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Missing, unparseable or zero values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fps = lookup(FPS_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_FPS);
        let seed = lookup(SEED_VAR).and_then(|v| v.trim().parse::<u64>().ok());
        Self { fps, seed }
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1))
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }
}
