//! Player Settings
//!
//! Small tunables that persist alongside game progress.

use serde::{Deserialize, Serialize};

/// User-adjustable settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Look sensitivity multiplier (1.0 = 100%).
    pub aim_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aim_sensitivity: 1.0,
        }
    }
}

impl Settings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set aim sensitivity, clamped to a sane range.
    pub fn set_aim_sensitivity(&mut self, sensitivity: f32) {
        self.aim_sensitivity = sensitivity.clamp(0.1, 3.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sensitivity() {
        assert_eq!(Settings::new().aim_sensitivity, 1.0);
    }

    #[test]
    fn test_sensitivity_clamped() {
        let mut settings = Settings::new();
        settings.set_aim_sensitivity(100.0);
        assert_eq!(settings.aim_sensitivity, 3.0);
        settings.set_aim_sensitivity(0.0);
        assert_eq!(settings.aim_sensitivity, 0.1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut settings = Settings::new();
        settings.set_aim_sensitivity(1.5);
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
