use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::AppError;
use crate::models::{DispatchResponse, NotificationRequest, ProviderNotification};
use crate::startup::AppState;

/// Handle one "send this notification" request: validate, build the provider
/// payload, dispatch once, and map the receipt back to the caller.
#[tracing::instrument(skip(state, request))]
pub async fn send_notification(
    State(state): State<AppState>,
    request: Result<Json<NotificationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DispatchResponse>), AppError> {
    // A body that cannot be read or parsed is an unexpected failure, not a
    // validation one.
    let Json(request) = request
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?;

    request.validate()?;

    let notification =
        ProviderNotification::from_request(&state.config.onesignal.app_id, &request);

    let receipt = state.provider.create_notification(&notification).await?;

    tracing::info!(
        notification_id = %receipt.id,
        recipients = receipt.recipients,
        "Notification dispatched"
    );

    Ok((
        StatusCode::OK,
        Json(DispatchResponse {
            success: true,
            notification_id: receipt.id,
            recipients: receipt.recipients,
        }),
    ))
}

/// CORS preflight short-circuit; runs before any body parsing.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
