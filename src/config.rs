//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::deck::DeckChoice;

/// Geometry and motion of the 3D scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
    pub anchor_row: f32,
    /// Extra room below the last row when scrolling
    pub bottom_guard: f32,
    pub camera_distance: f32,
    pub fov_degrees: f32,
    /// Distance in front of the card plane where the opened card floats
    pub focus_depth: f32,
    pub focus_scale: f32,
    pub blend_rate: f32,
    pub shrink_rate: f32,
    pub camera_smoothing: f32,
    /// Scene units per wheel delta unit
    pub wheel_sensitivity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            column_spacing: 2.0,
            row_spacing: 1.5,
            top_padding: 2.0,
            bottom_padding: 2.0,
            anchor_row: 2.0,
            bottom_guard: 1.0,
            camera_distance: 6.0,
            fov_degrees: 50.0,
            focus_depth: 2.0,
            focus_scale: 1.3,
            blend_rate: 6.0,
            shrink_rate: 8.0,
            camera_smoothing: 0.12,
            wheel_sensitivity: 0.0025,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deck: DeckChoice,
    /// Delay before a remember/forget action closes the card
    pub commit_delay_ms: u64,
    pub columns: usize,
    pub scene: SceneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: DeckChoice::default(),
            commit_delay_ms: 300,
            columns: 4,
            scene: SceneConfig::default(),
        }
    }
}

impl Config {
    /// Load config from file or fall back to defaults
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(contents) => match Self::from_json(&contents) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Failed to parse config {:?}: {e}", config_path),
                },
                Err(e) => tracing::warn!("Failed to read config {:?}: {e}", config_path),
            }
        }

        Self::default()
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;
        tracing::info!("Config saved to {:?}", config_path);

        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
            .join("FlashcardReview")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "deck": "Starter", "scene": { "fov_degrees": 60.0 } }"#)
            .expect("valid config");
        assert_eq!(config.deck, DeckChoice::Starter);
        assert_eq!(config.commit_delay_ms, 300);
        assert_eq!(config.columns, 4);
        assert_eq!(config.scene.fov_degrees, 60.0);
        assert_eq!(config.scene.row_spacing, 1.5);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = Config::default();
        config.commit_delay_ms = 450;
        config.scene.wheel_sensitivity = 0.004;
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(Config::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(Config::from_json("{ deck: ").is_err());
        assert!(Config::from_json(r#"{ "deck": "Unknown" }"#).is_err());
    }
}
