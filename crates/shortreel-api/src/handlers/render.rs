//! Render endpoint.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use tracing::{error, info};
use validator::Validate;

use shortreel_models::RenderRequest;

use crate::metrics;
use crate::state::AppState;

/// Response body for `POST /render`.
///
/// Success and failure share one shape distinguished by the `success`
/// flag; the route always answers 200 and callers inspect the flag. A
/// failure body never carries `videoBase64`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderResponse {
    fn ok(bytes: &[u8]) -> Self {
        Self {
            success: true,
            video_base64: Some(BASE64.encode(bytes)),
            size: Some(bytes.len()),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            video_base64: None,
            size: None,
            error: Some(message.into()),
        }
    }
}

/// Render a video and return it base64-encoded in the response body.
///
/// Malformed and schema-invalid bodies are rejected here, before the
/// renderer is invoked.
pub async fn render(
    State(state): State<AppState>,
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> Json<RenderResponse> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            metrics::record_render_rejected();
            return Json(RenderResponse::err(format!(
                "Invalid request body: {rejection}"
            )));
        }
    };

    if let Err(errors) = request.validate() {
        metrics::record_render_rejected();
        return Json(RenderResponse::err(format!("Invalid request: {errors}")));
    }

    let start = Instant::now();
    match state.renderer.render(request).await {
        Ok(bytes) => {
            let elapsed = start.elapsed().as_secs_f64();
            info!(size_bytes = bytes.len(), "Render succeeded");
            metrics::record_render_completed(elapsed, bytes.len());
            Json(RenderResponse::ok(&bytes))
        }
        Err(e) => {
            error!(error = %e, "Render failed");
            metrics::record_render_failed(start.elapsed().as_secs_f64());
            Json(RenderResponse::err(e.to_string()))
        }
    }
}
