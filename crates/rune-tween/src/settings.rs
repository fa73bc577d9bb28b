//! Engine-wide defaults, derived from [`rune_config::TweenConfig`].

use rune_config::TweenConfig;

use crate::easing::Easing;
use crate::error::{Result, TweenError};

/// Defaults applied to every tween created by a [`Tweener`](crate::registry::Tweener).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenerSettings {
    /// Tick rate of every tween's frame loop.
    pub fps: u32,
    /// Default duration in seconds.
    pub time: f64,
    /// Default easing.
    pub transition: Easing,
    /// Default start delay in seconds.
    pub delay: f64,
}

impl Default for TweenerSettings {
    fn default() -> Self {
        Self {
            fps: 55,
            time: 1.0,
            transition: Easing::OutCubic,
            delay: 0.0,
        }
    }
}

impl TweenerSettings {
    /// Validate a loaded configuration.
    pub fn from_config(config: &TweenConfig) -> Result<Self> {
        if config.fps == 0 {
            return Err(TweenError::Configuration("fps must be positive".into()));
        }
        if !config.time.is_finite() || config.time < 0.0 {
            return Err(TweenError::Configuration(format!(
                "invalid default time: {}",
                config.time
            )));
        }
        if !config.delay.is_finite() || config.delay < 0.0 {
            return Err(TweenError::Configuration(format!(
                "invalid default delay: {}",
                config.delay
            )));
        }
        let transition = Easing::from_name(&config.transition).ok_or_else(|| {
            TweenError::Configuration(format!("unknown transition: {}", config.transition))
        })?;

        Ok(Self {
            fps: config.fps,
            time: config.time,
            transition,
            delay: config.delay,
        })
    }

    /// Milliseconds between two ticks: `floor(1000 / fps)`, at least 1.
    pub fn frame_interval(&self) -> f64 {
        (1000 / self.fps.max(1)).max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_interval() {
        let settings = TweenerSettings::default();
        assert_eq!(settings.frame_interval(), 18.0);
    }

    #[test]
    fn test_frame_interval_floor() {
        let mut settings = TweenerSettings::default();
        settings.fps = 60;
        assert_eq!(settings.frame_interval(), 16.0);
        settings.fps = 5000;
        assert_eq!(settings.frame_interval(), 1.0);
    }

    #[test]
    fn test_from_config() {
        let settings = TweenerSettings::from_config(&TweenConfig::default()).unwrap();
        assert_eq!(settings, TweenerSettings::default());

        let config = TweenConfig {
            transition: "EASEINOUTBACK".into(),
            ..TweenConfig::default()
        };
        let settings = TweenerSettings::from_config(&config).unwrap();
        assert_eq!(settings.transition, Easing::InOutBack);
    }

    #[test]
    fn test_from_config_rejects_bad_values() {
        let zero_fps = TweenConfig {
            fps: 0,
            ..TweenConfig::default()
        };
        assert!(matches!(
            TweenerSettings::from_config(&zero_fps),
            Err(TweenError::Configuration(_))
        ));

        let unknown = TweenConfig {
            transition: "wobble".into(),
            ..TweenConfig::default()
        };
        assert!(TweenerSettings::from_config(&unknown).is_err());

        let negative = TweenConfig {
            delay: -1.0,
            ..TweenConfig::default()
        };
        assert!(TweenerSettings::from_config(&negative).is_err());
    }
}
