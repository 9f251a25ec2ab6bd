use anyhow::Result;
use tracing::info;

use crate::storage::{FirstRunFlag, HistoryRepository, SettingsRepository};

/// Welcome flow gating and the full application reset
#[derive(Clone)]
pub struct OnboardingService {
    first_run_flag: FirstRunFlag,
    settings_repository: SettingsRepository,
    history_repository: HistoryRepository,
}

impl OnboardingService {
    pub fn new(
        first_run_flag: FirstRunFlag,
        settings_repository: SettingsRepository,
        history_repository: HistoryRepository,
    ) -> Self {
        Self {
            first_run_flag,
            settings_repository,
            history_repository,
        }
    }

    pub async fn is_first_run(&self) -> Result<bool> {
        self.first_run_flag.is_first_run().await
    }

    pub async fn complete_welcome(&self) -> Result<()> {
        self.first_run_flag.mark_complete().await
    }

    /// Return the application to its initial state: empty history, default
    /// settings, welcome flow pending. Steps are applied one after another
    /// with no rollback.
    pub async fn reset_app(&self) -> Result<()> {
        info!("Resetting application to its initial state");
        self.history_repository.clear().await?;
        self.settings_repository.reset_settings().await?;
        self.first_run_flag.clear().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_record, TestEnvironment};
    use shared::Settings;

    #[tokio::test]
    async fn test_reset_app_restores_initial_state() {
        let env = TestEnvironment::new().await.unwrap();
        let flag = FirstRunFlag::new(&env.data_dir);
        let settings = SettingsRepository::new(&env.data_dir);
        let history = HistoryRepository::new(&env.data_dir);
        let service = OnboardingService::new(flag.clone(), settings.clone(), history.clone());

        service.complete_welcome().await.unwrap();
        settings
            .update_settings(|s| {
                s.business_name = "Asha Stores".to_string();
                s.logo_path = "/tmp/logo.png".to_string();
            })
            .await
            .unwrap();
        history.append_record(|_| sample_record("INV-1")).await.unwrap();
        assert!(!service.is_first_run().await.unwrap());

        service.reset_app().await.unwrap();

        assert!(service.is_first_run().await.unwrap());
        assert_eq!(settings.get_settings().await.unwrap(), Settings::default());
        assert!(history.list_records().await.unwrap().is_empty());
    }
}
