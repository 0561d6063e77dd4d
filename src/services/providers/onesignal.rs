use super::{NotificationProvider, ProviderError, ProviderReceipt};
use crate::config::OneSignalConfig;
use crate::models::ProviderNotification;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct OneSignalProvider {
    config: OneSignalConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OneSignalResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    recipients: u64,
    // OneSignal can report per-target errors in an otherwise 200 response.
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

impl OneSignalProvider {
    pub fn new(config: OneSignalConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl NotificationProvider for OneSignalProvider {
    async fn create_notification(
        &self,
        notification: &ProviderNotification,
    ) -> Result<ProviderReceipt, ProviderError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header(
                "Authorization",
                format!("Basic {}", self.config.rest_api_key),
            )
            .json(notification)
            .send()
            .await
            .map_err(|e| {
                ProviderError::Connection(format!("Failed to connect to OneSignal: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Authentication(format!(
                "OneSignal rejected credentials: {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::SendFailed(format!(
                "OneSignal API returned error status {}: {}",
                status, body
            )));
        }

        let body: OneSignalResponse = response.json().await.map_err(|e| {
            ProviderError::SendFailed(format!("Failed to parse OneSignal response: {}", e))
        })?;

        if let Some(errors) = body.errors {
            return Err(ProviderError::SendFailed(format!(
                "OneSignal error: {}",
                errors
            )));
        }

        let id = body.id.filter(|id| !id.is_empty()).ok_or_else(|| {
            ProviderError::SendFailed("OneSignal response missing notification id".to_string())
        })?;

        tracing::info!(
            notification_id = %id,
            recipients = body.recipients,
            "Notification accepted by OneSignal"
        );

        Ok(ProviderReceipt {
            id,
            recipients: body.recipients,
        })
    }
}

/// Mock provider for testing. Records every payload it receives so tests can
/// assert on targeting and content.
#[derive(Default)]
pub struct MockProvider {
    send_count: AtomicU64,
    sent: Mutex<Vec<ProviderNotification>>,
    fail_with: Mutex<Option<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ProviderNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// Make the next dispatch fail with the given message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl NotificationProvider for MockProvider {
    async fn create_notification(
        &self,
        notification: &ProviderNotification,
    ) -> Result<ProviderReceipt, ProviderError> {
        if let Some(message) = self.fail_with.lock().unwrap().take() {
            return Err(ProviderError::SendFailed(message));
        }

        let recipients = notification
            .include_player_ids
            .as_ref()
            .map(|ids| ids.len() as u64)
            .unwrap_or(1);

        self.sent.lock().unwrap().push(notification.clone());
        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            app_id = %notification.app_id,
            title = %notification.headings.en,
            "[MOCK] notification would be sent"
        );

        Ok(ProviderReceipt {
            id: format!("mock-notification-{}", count),
            recipients,
        })
    }
}
