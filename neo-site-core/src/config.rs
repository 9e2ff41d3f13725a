//! Tunable timings and effect parameters for the site.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when site configuration values are out of range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("loading fail-safe {failsafe}ms fires before the loading screen ({loading}ms)")]
    FailsafeBeforeLoading { loading: u32, failsafe: u32 },
    #[error("typing effect needs at least one non-empty text")]
    NoTypingTexts,
    #[error("invalid configuration JSON: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub texts: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub pause_ms: u32,
    pub start_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "Turning complex ideas into elegant digital products".to_string(),
                "Crafting inventive user interfaces".to_string(),
                "Building the future of web technology".to_string(),
                "Pushing the limits of digital design".to_string(),
            ],
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            pause_ms: 500,
            start_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    /// Pointer distance in px inside which elements are pulled.
    pub radius: f64,
    pub strength: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            strength: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// How long the submit confirmation stays up.
    pub notice_ms: u32,
    pub loading_ms: u32,
    pub loading_failsafe_ms: u32,
    pub typing: TypingConfig,
    pub counter_ms: u32,
    pub frame_ms: u32,
    pub magnetic: MagneticConfig,
    pub tilt_divisor: f64,
    pub particle_count: usize,
    pub hero_points: usize,
    pub header_scroll_threshold: f64,
    pub reveal_threshold: f64,
    pub stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notice_ms: 3000,
            loading_ms: 2000,
            loading_failsafe_ms: 5000,
            typing: TypingConfig::default(),
            counter_ms: 2000,
            frame_ms: 16,
            magnetic: MagneticConfig::default(),
            tilt_divisor: 25.0,
            particle_count: 50,
            hero_points: 1500,
            header_scroll_threshold: 100.0,
            reveal_threshold: 0.1,
            stagger_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("notice_ms", self.notice_ms),
            ("counter_ms", self.counter_ms),
            ("frame_ms", self.frame_ms),
            ("typing.type_ms", self.typing.type_ms),
            ("typing.delete_ms", self.typing.delete_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        if self.loading_failsafe_ms < self.loading_ms {
            return Err(ConfigError::FailsafeBeforeLoading {
                loading: self.loading_ms,
                failsafe: self.loading_failsafe_ms,
            });
        }
        if !self.typing.texts.iter().any(|t| !t.is_empty()) {
            return Err(ConfigError::NoTypingTexts);
        }
        check_range("magnetic.radius", self.magnetic.radius, 1.0, 1000.0)?;
        check_range("magnetic.strength", self.magnetic.strength, 0.0, 1.0)?;
        check_range("tilt_divisor", self.tilt_divisor, 1.0, 1000.0)?;
        check_range("reveal_threshold", self.reveal_threshold, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RangeViolation {
            field,
            min,
            max,
            value,
        })
    }
}
