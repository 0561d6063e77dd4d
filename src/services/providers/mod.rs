pub mod onesignal;

use crate::models::ProviderNotification;
use async_trait::async_trait;
use thiserror::Error;

pub use onesignal::{MockProvider, OneSignalProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Send error: {0}")]
    SendFailed(String),

    #[error("Authentication error: {0}")]
    Authentication(String),
}

/// What the provider reports back for an accepted notification.
#[derive(Debug, Clone)]
pub struct ProviderReceipt {
    pub id: String,
    pub recipients: u64,
}

#[async_trait]
pub trait NotificationProvider: Send + Sync {
    async fn create_notification(
        &self,
        notification: &ProviderNotification,
    ) -> Result<ProviderReceipt, ProviderError>;
}
