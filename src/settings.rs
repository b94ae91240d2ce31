//! Game balance settings
//!
//! Loaded from a JSON file by the native host; every field falls back to its
//! default when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Bodies ===
    /// Collector diameter
    pub collector_diameter: f32,
    /// Token diameter
    pub token_diameter: f32,
    /// Spike diameter
    pub spike_diameter: f32,
    /// Collector travel per frame
    pub collector_speed: f32,

    // === Boards ===
    /// Thickness of the wall strips used for bouncing
    pub wall_thickness: f32,
    /// Children of a board larger than this area get a new token
    pub token_area_threshold: f32,
    /// Spikes placed on a board that is not inheriting any
    pub spikes_per_board: u32,
    /// Attempts at placing a token/spike clear of the collector
    pub spawn_attempts: u32,

    // === Scoring ===
    /// Points per tick grow as `score_base ^ (boards - 1)`
    pub score_base: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collector_diameter: 7.0,
            token_diameter: 7.0,
            spike_diameter: 7.0,
            collector_speed: 1.0,

            wall_thickness: 1.0,
            token_area_threshold: 50_000.0,
            spikes_per_board: 1,
            spawn_attempts: 16,

            score_base: 2,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("collector_diameter", self.collector_diameter),
            ("token_diameter", self.token_diameter),
            ("spike_diameter", self.spike_diameter),
            ("collector_speed", self.collector_speed),
            ("wall_thickness", self.wall_thickness),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be a finite number greater than zero",
                });
            }
        }

        if !(self.token_area_threshold.is_finite() && self.token_area_threshold >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "token_area_threshold",
                reason: "must be a finite, non-negative number",
            });
        }
        if self.spikes_per_board == 0 {
            return Err(SettingsError::Invalid {
                field: "spikes_per_board",
                reason: "every board needs at least one spike",
            });
        }
        if self.score_base == 0 {
            return Err(SettingsError::Invalid {
                field: "score_base",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
