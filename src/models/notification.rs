use serde::{Deserialize, Serialize};
use validator::Validate;

/// Segment name OneSignal uses for "every subscribed device".
pub const BROADCAST_SEGMENT: &str = "All";

const ANDROID_ACCENT_COLOR: &str = "FF1976D2";
const ANDROID_VISIBILITY: i32 = 1;
const PRIORITY: i32 = 10;

/// Inbound "send this notification" request.
///
/// `title` and `message` are options so that an absent field or an explicit
/// `null` reaches validation (400) instead of failing deserialization (500).
/// `data` is an opaque passthrough and is deliberately not validated.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
    #[serde(default)]
    pub player_ids: Option<Vec<String>>,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub notification_id: String,
    pub recipients: u64,
}

/// Heading/content text keyed by language code. Only `en` is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedText {
    pub en: String,
}

/// The outbound notification as OneSignal's API expects it.
///
/// Targeting is mutually exclusive: exactly one of `include_player_ids` and
/// `included_segments` is set, and the other arm is omitted from the wire
/// payload entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderNotification {
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_player_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_segments: Option<Vec<String>>,
    pub headings: LocalizedText,
    pub contents: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub android_accent_color: String,
    pub android_visibility: i32,
    pub priority: i32,
}

impl ProviderNotification {
    pub fn from_request(app_id: &str, request: &NotificationRequest) -> Self {
        let (include_player_ids, included_segments) = match request.player_ids.as_deref() {
            Some(ids) if !ids.is_empty() => (Some(ids.to_vec()), None),
            _ => (None, Some(vec![BROADCAST_SEGMENT.to_string()])),
        };

        Self {
            app_id: app_id.to_string(),
            include_player_ids,
            included_segments,
            headings: LocalizedText {
                en: request.title.clone().unwrap_or_default(),
            },
            contents: LocalizedText {
                en: request.message.clone().unwrap_or_default(),
            },
            data: request.data.clone(),
            android_accent_color: ANDROID_ACCENT_COLOR.to_string(),
            android_visibility: ANDROID_VISIBILITY,
            priority: PRIORITY,
        }
    }
}
