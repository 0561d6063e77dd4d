use push_dispatch_service::config::{CommonConfig, DispatchConfig, OneSignalConfig};
use push_dispatch_service::services::{MockProvider, NotificationProvider};
use push_dispatch_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockProvider>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = DispatchConfig {
            common: CommonConfig { port: 0 },
            onesignal: OneSignalConfig {
                app_id: "test-app-id".to_string(),
                rest_api_key: "test-rest-api-key".to_string(),
                api_url: "http://onesignal.test.local/api/v1/notifications".to_string(),
            },
        };

        let provider = Arc::new(MockProvider::new());
        let app = Application::build_with_provider(
            config,
            provider.clone() as Arc<dyn NotificationProvider>,
        )
        .await
        .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, provider }
    }

    pub fn send_url(&self) -> String {
        format!("{}/send-notification", self.address)
    }
}
