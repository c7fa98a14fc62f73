use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-carousel rotation timing.
///
/// The hero defaults to a slower 5000 ms interval so its longer copy can be
/// read; testimonials keep the 3500 ms default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default = "default_hero_rotation")]
    pub hero: CarouselConfig,
    #[serde(default = "default_testimonials_rotation")]
    pub testimonials: CarouselConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Time between automatic advances (default: 3500, hero: 5000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Auto-advance pause after a manual jump (default: 8000). A value
    /// below `interval_ms` still holds for one full interval.
    #[serde(default = "default_suppression_ms")]
    pub suppression_ms: u64,
    /// Start with auto-advance enabled (default: true).
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

/// Contact form behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Simulated send time before the success message (default: 1200).
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long the success message stays before the form resets (default: 3000).
    #[serde(default = "default_reset_after_ms")]
    pub reset_after_ms: u64,
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "showreel=debug" (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_interval_ms() -> u64 {
    3500
}

fn default_suppression_ms() -> u64 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_submit_delay_ms() -> u64 {
    1200
}

fn default_reset_after_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_hero_rotation() -> CarouselConfig {
    CarouselConfig {
        interval_ms: 5000,
        ..CarouselConfig::default()
    }
}

fn default_testimonials_rotation() -> CarouselConfig {
    CarouselConfig::default()
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn suppression(&self) -> Duration {
        Duration::from_millis(self.suppression_ms)
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            suppression_ms: default_suppression_ms(),
            autoplay: true,
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            hero: default_hero_rotation(),
            testimonials: default_testimonials_rotation(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            reset_after_ms: default_reset_after_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
