use std::time::Duration;

use crate::app::{Action, Command};
use crate::calendar::Schedule;
use crate::storage::config::Config;
use crate::sync::schedule_api::{ApiError, ScheduleApi, ScheduleClient};

/// Runs backend requests and reports their outcome as reducer actions.
pub struct SyncEngine<A: ScheduleApi> {
    api: A,
}

impl SyncEngine<ScheduleClient> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = ScheduleClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Ok(Self::new(client))
    }
}

impl<A: ScheduleApi> SyncEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn fetch_schedule(&self) -> Result<Schedule, ApiError> {
        self.api.fetch_schedule().await
    }

    /// Fetches the schedule, turning any failure into `ScheduleLoadFailed`
    /// so the interface keeps working on an empty schedule.
    pub async fn load_schedule(&self) -> Action {
        match self.api.fetch_schedule().await {
            Ok(schedule) => Action::ScheduleLoaded(schedule),
            Err(e) => {
                tracing::error!("Failed to load schedule: {}", e);
                Action::ScheduleLoadFailed(e.to_string())
            }
        }
    }

    /// Performs `command`. On success the schedule is reloaded and both
    /// resulting actions are returned in dispatch order.
    pub async fn apply(&self, command: Command) -> Vec<Action> {
        let result = match &command {
            Command::CreateClass(request) => self.api.create_class(request).await,
            Command::UpdateClass { id, request } => self.api.update_class(*id, request).await,
            Command::DeleteClass { id } => self.api.delete_class(*id).await,
            Command::Reload => Ok(()),
        };

        match result {
            Ok(()) => {
                let mut actions = Vec::with_capacity(2);
                if !matches!(command, Command::Reload) {
                    actions.push(Action::MutationSucceeded);
                }
                actions.push(self.load_schedule().await);
                actions
            }
            Err(e) => {
                tracing::error!("Schedule update failed: {}", e);
                vec![Action::MutationFailed(failure_message(&command, &e))]
            }
        }
    }
}

fn failure_message(command: &Command, error: &ApiError) -> String {
    match (command, error) {
        (Command::CreateClass(_), ApiError::Rejected(message)) => message.clone(),
        (Command::CreateClass(_), ApiError::HttpError(_)) => "Сетевая ошибка".to_string(),
        (Command::CreateClass(_), _) => "Ошибка сохранения".to_string(),
        (Command::UpdateClass { .. }, _) => "Не удалось сохранить изменения".to_string(),
        (Command::DeleteClass { .. }, ApiError::HttpError(_)) => "Ошибка удаления".to_string(),
        (Command::DeleteClass { .. }, _) => "Не удалось удалить занятие".to_string(),
        (Command::Reload, _) => error.to_string(),
    }
}
