use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default endpoint for OneSignal's notification-creation API.
pub const ONESIGNAL_API_URL: &str = "https://onesignal.com/api/v1/notifications";

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    pub common: CommonConfig,
    pub onesignal: OneSignalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneSignalConfig {
    pub app_id: String,
    pub rest_api_key: String,
    pub api_url: String,
}

fn default_port() -> u16 {
    8080
}

impl DispatchConfig {
    /// Load configuration from the environment.
    ///
    /// The OneSignal app id and REST API key are required secrets; missing
    /// either is a startup error, never a per-request one.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(DispatchConfig {
            common,
            onesignal: OneSignalConfig {
                app_id: get_env("ONESIGNAL_APP_ID", None)?,
                rest_api_key: get_env("ONESIGNAL_REST_API_KEY", None)?,
                api_url: get_env("ONESIGNAL_API_URL", Some(ONESIGNAL_API_URL))?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::Config(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
