use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::calendar::{EntryId, NewClassRequest, Schedule, UpdateClassRequest};

pub const SCHEDULE_PATH: &str = "/api/teacher/schedule";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Class not found: {0}")]
    NotFound(EntryId),
    #[error("Not signed in")]
    Unauthorized,
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleApi {
    async fn fetch_schedule(&self) -> Result<Schedule, ApiError>;

    async fn create_class(&self, request: &NewClassRequest) -> Result<(), ApiError>;

    async fn update_class(&self, id: EntryId, request: &UpdateClassRequest) -> Result<(), ApiError>;

    async fn delete_class(&self, id: EntryId) -> Result<(), ApiError>;
}

pub struct ScheduleClient {
    base_url: String,
    client: reqwest::Client,
}

impl ScheduleClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, SCHEDULE_PATH)
    }

    fn entry_url(&self, id: EntryId) -> String {
        format!("{}{}/{}", self.base_url, SCHEDULE_PATH, id)
    }
}

async fn failure(response: reqwest::Response, id: Option<EntryId>) -> ApiError {
    let status = response.status();

    if status == 401 || status == 403 {
        tracing::error!("Schedule API refused the session: {}", status);
        return ApiError::Unauthorized;
    }

    if status == 404
        && let Some(id) = id
    {
        tracing::error!("Class not found: {}", id);
        return ApiError::NotFound(id);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("Schedule API failed. Status: {}, Body: {}", status, body);

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { error: Some(message) }) => ApiError::Rejected(message),
        _ => ApiError::RequestError(format!("Status {}: {}", status, body)),
    }
}

#[async_trait]
impl ScheduleApi for ScheduleClient {
    async fn fetch_schedule(&self) -> Result<Schedule, ApiError> {
        let url = self.collection_url();
        tracing::info!("Fetching schedule from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::info!("Fetch schedule response status: {}", status);

        if !status.is_success() {
            return Err(failure(response, None).await);
        }

        let schedule: Schedule = response.json().await?;
        tracing::info!("Fetched {} classes", schedule.total_entries());
        Ok(schedule)
    }

    async fn create_class(&self, request: &NewClassRequest) -> Result<(), ApiError> {
        let url = self.collection_url();
        tracing::info!(
            "Creating class {} for {} on day {}",
            request.subject,
            request.group_name,
            request.day_of_week
        );
        tracing::debug!("POST {} with payload: {:?}", url, request);

        let response = self.client.post(&url).json(request).send().await?;
        tracing::info!("Create class response status: {}", response.status());

        if !response.status().is_success() {
            return Err(failure(response, None).await);
        }
        Ok(())
    }

    async fn update_class(&self, id: EntryId, request: &UpdateClassRequest) -> Result<(), ApiError> {
        let url = self.entry_url(id);
        tracing::info!("Updating class {}: {}", id, request.subject);
        tracing::debug!("PUT {} with payload: {:?}", url, request);

        let response = self.client.put(&url).json(request).send().await?;
        tracing::info!("Update class response status: {}", response.status());

        if !response.status().is_success() {
            return Err(failure(response, Some(id)).await);
        }
        Ok(())
    }

    async fn delete_class(&self, id: EntryId) -> Result<(), ApiError> {
        let url = self.entry_url(id);
        tracing::info!("Deleting class {}", id);

        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(failure(response, Some(id)).await);
        }
        Ok(())
    }
}
