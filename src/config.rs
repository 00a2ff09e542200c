//! Host settings, read once from the environment at startup.
//!
//! Only the terminal host is configurable. Game rules are fixed constants in
//! `star_raid::consts`.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;
const DEFAULT_LOG_FILE: &str = "star_raid.log";

#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Target frames per second for the frame pacer.
    pub fps: u32,
    /// Log destination; stderr belongs to the raw-mode terminal.
    pub log_file: PathBuf,
    /// Problems found while reading the environment, logged once the logger
    /// is up.
    pub warnings: Vec<String>,
}

impl HostConfig {
    /// `STAR_RAID_FPS` (1..=240, default 60) and `STAR_RAID_LOG`.
    pub fn from_env() -> HostConfig {
        Self::from_vars(
            std::env::var("STAR_RAID_FPS").ok(),
            std::env::var("STAR_RAID_LOG").ok(),
        )
    }

    fn from_vars(fps: Option<String>, log_file: Option<String>) -> HostConfig {
        let mut warnings = Vec::new();

        let fps = match fps {
            None => DEFAULT_FPS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(v) if (1..=MAX_FPS).contains(&v) => v,
                _ => {
                    warnings.push(format!(
                        "STAR_RAID_FPS={raw:?} out of range 1..={MAX_FPS}, using {DEFAULT_FPS}"
                    ));
                    DEFAULT_FPS
                }
            },
        };

        let log_file = log_file
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        HostConfig {
            fps,
            log_file,
            warnings,
        }
    }

    /// Frame period for the pacer.
    pub fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let c = HostConfig::from_vars(None, None);
        assert_eq!(c.fps, 60);
        assert_eq!(c.log_file, PathBuf::from("star_raid.log"));
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn bad_fps_falls_back_with_warning() {
        for raw in ["0", "abc", "1000"] {
            let c = HostConfig::from_vars(Some(raw.to_string()), None);
            assert_eq!(c.fps, 60);
            assert_eq!(c.warnings.len(), 1);
        }
    }

    #[test]
    fn frame_period_follows_fps() {
        let c = HostConfig::from_vars(Some("50".into()), Some("game.log".into()));
        assert_eq!(c.frame(), Duration::from_millis(20));
        assert_eq!(c.log_file, PathBuf::from("game.log"));
    }
}
