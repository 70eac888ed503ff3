//! Axum gateway handlers: one per capability

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use log::{debug, info};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::normalize::NormalizedResult;
use crate::request::{ChatReply, ErrorReply, ImageReply, PromptRequest};

/// Shared state for all handlers.
/// Read-only after startup; no coordination needed between
/// concurrent requests.
pub struct AppState
{   pub config: crate::config::GatewayConfig
  , pub client: crate::providers::ionos::IonosClient
}

impl AppState
{   pub fn new(config: crate::config::GatewayConfig)
      -> Result<Self, crate::error::Error>
    {   let client
          = crate::providers::ionos::IonosClient::new(&config)?;
        Ok(AppState
        {   config
          , client
        })
    }
}

/// Build the gateway router.
/// CORS is wide open; the gateway fronts a mobile client.
pub fn router(state: Arc<AppState>) -> Router
{   Router::new()
      .route("/chat", post(chat))
      .route("/image", post(image))
      .layer(CorsLayer::permissive())
      .with_state(state)
}

/// POST /chat
async fn chat(
  State(state): State<Arc<AppState>>
, Json(request): Json<PromptRequest>
) -> Response
{   debug!("Chat prompt received: {}", request.prompt);

    let result = state.client
      .infer(
        &state.config,
        crate::request::InferenceRequest::chat(request.prompt)
      )
      .await;

    match result
    {   NormalizedResult::Ok(output) => {
          info!("Chat request succeeded");
          (StatusCode::OK, Json(ChatReply { output }))
            .into_response()
        }
      , NormalizedResult::Failed { reason, detail } => {
          failure_response(reason, detail)
        }
    }
}

/// POST /image
async fn image(
  State(state): State<Arc<AppState>>
, Json(request): Json<PromptRequest>
) -> Response
{   debug!("Image prompt received: {}", request.prompt);

    let result = state.client
      .infer(
        &state.config,
        crate::request::InferenceRequest::image(request.prompt)
      )
      .await;

    match result
    {   NormalizedResult::Ok(image_base64) => {
          info!("Image request succeeded");
          (StatusCode::OK, Json(ImageReply { image_base64 }))
            .into_response()
        }
      , NormalizedResult::Failed { reason, detail } => {
          failure_response(reason, detail)
        }
    }
}

/// Every per-request failure becomes a 500 with a JSON body;
/// the details field is dropped when there is no provider text
fn failure_response(
  reason: String
, detail: Option<String>
) -> Response
{   debug!("Request failed: {}", reason);
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ErrorReply
      {   error: reason
        , details: detail
      })
    ).into_response()
}
