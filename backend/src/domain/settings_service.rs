use anyhow::Result;
use shared::Settings;
use tracing::info;

use crate::domain::commands::settings::UpdateSettingsCommand;
use crate::storage::{LogoRepository, SettingsRepository};

#[derive(Clone)]
pub struct SettingsService {
    settings_repository: SettingsRepository,
    logo_repository: LogoRepository,
}

impl SettingsService {
    pub fn new(settings_repository: SettingsRepository, logo_repository: LogoRepository) -> Self {
        Self {
            settings_repository,
            logo_repository,
        }
    }

    pub async fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings().await
    }

    /// Merge the allow-listed fields into the stored settings.
    ///
    /// A logo with a non-empty file name is saved first and its path recorded.
    pub async fn update_settings(&self, command: UpdateSettingsCommand) -> Result<Settings> {
        let logo_path = match &command.logo {
            Some(logo) if !logo.file_name.trim().is_empty() => Some(
                self.logo_repository
                    .save_logo(&logo.file_name, &logo.bytes)
                    .await?,
            ),
            _ => None,
        };

        let settings = self
            .settings_repository
            .update_settings(|settings| {
                command.update.apply_to(settings);
                if let Some(path) = &logo_path {
                    settings.logo_path = path.to_string_lossy().to_string();
                }
            })
            .await?;

        info!(
            "Updated settings (business: '{}', currency: '{}', logo: {})",
            settings.business_name,
            settings.currency,
            if settings.logo_path.is_empty() { "none" } else { settings.logo_path.as_str() }
        );
        Ok(settings)
    }

    pub async fn reset_settings(&self) -> Result<Settings> {
        self.settings_repository.reset_settings().await
    }
}
