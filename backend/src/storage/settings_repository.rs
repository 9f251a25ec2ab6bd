use anyhow::Result;
use shared::Settings;
use tracing::info;

use super::connection::DataDirectory;
use super::json_store::JsonStore;

/// Repository for the singleton settings document (`settings.json`)
#[derive(Clone)]
pub struct SettingsRepository {
    store: JsonStore<Settings>,
}

impl SettingsRepository {
    pub fn new(data_dir: &DataDirectory) -> Self {
        Self {
            store: JsonStore::new(data_dir.settings_file_path(), Settings::default),
        }
    }

    /// Current settings, created with defaults on first access
    pub async fn get_settings(&self) -> Result<Settings> {
        self.store.load().await
    }

    /// Modify the stored settings in place and persist them
    pub async fn update_settings<F>(&self, modify: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        self.store
            .update(|settings| {
                modify(settings);
                settings.clone()
            })
            .await
    }

    /// Overwrite the settings document with the hardcoded defaults
    pub async fn reset_settings(&self) -> Result<Settings> {
        let defaults = Settings::default();
        self.store.save(&defaults).await?;
        info!("Restored default settings");
        Ok(defaults)
    }
}
