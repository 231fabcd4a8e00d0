//! Display preferences
//!
//! Persisted separately from the high score, as JSON under its own key.
//! Nothing here changes gameplay; see `tuning` for that.

use serde::{Deserialize, Serialize};

use crate::persistence::{ScoreStore, StoreError};
use crate::scenery::{CLOUD_COUNT, MAX_CLOUDS};

/// Player display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw (and drift) the cloud layer
    pub clouds: bool,
    /// Number of clouds in the layer, at most [`MAX_CLOUDS`]
    pub cloud_count: usize,
    /// Update the score/high score text every frame
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clouds: true,
            cloud_count: CLOUD_COUNT,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flappySettings";

    /// Clouds to build the layer with
    pub fn effective_cloud_count(&self) -> usize {
        self.cloud_count.min(MAX_CLOUDS)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(store: &dyn ScoreStore) -> Self {
        match Self::try_load(store) {
            Ok(Some(mut settings)) => {
                if settings.cloud_count > MAX_CLOUDS {
                    log::warn!(
                        "Stored cloud count {} too large, using {}",
                        settings.cloud_count,
                        MAX_CLOUDS
                    );
                    settings.cloud_count = MAX_CLOUDS;
                }
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn try_load(store: &dyn ScoreStore) -> Result<Option<Self>, StoreError> {
        match store.get(Self::STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Save settings
    pub fn save(&self, store: &mut dyn ScoreStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Flip the cloud layer and persist the change
    pub fn toggle_clouds(&mut self, store: &mut dyn ScoreStore) {
        self.clouds = !self.clouds;
        self.save_or_warn(store);
    }

    /// Flip the HUD text and persist the change
    pub fn toggle_hud(&mut self, store: &mut dyn ScoreStore) {
        self.show_hud = !self.show_hud;
        self.save_or_warn(store);
    }

    fn save_or_warn(&self, store: &mut dyn ScoreStore) {
        if let Err(e) = self.save(store) {
            log::warn!("Could not save settings: {}", e);
        }
    }
}
