//! HTTP service exposing the submission handler.
//!
//! One route: `POST /api/submit/{form}`. The handler is stateless and
//! reentrant; shared state is the immutable config plus the pooled client.
//! Nothing is retried here, the caller decides whether to resubmit.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::api::NotionClient;
use crate::config::Config;
use crate::forms;
use crate::submit;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: NotionClient,
}

/// Response body for every non-passthrough outcome.
#[derive(Debug, Serialize)]
struct ApiMessage {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Upstream rejection, passed through with debugging context.
#[derive(Debug, Serialize)]
struct UpstreamRejection {
    message: &'static str,
    details: Value,
    payload_sent: Value,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/submit/{form}", post(submit_form))
        .with_state(state)
}

async fn submit_form(
    State(state): State<AppState>,
    Path(form): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!("[{}] submission for form '{}'", request_id, form);

    let Some(schema) = forms::find_form(&form) else {
        warn!("[{}] unknown form '{}'", request_id, form);
        return error_response(StatusCode::BAD_REQUEST, "Invalid form type", None);
    };

    let Some(input) = body.as_object() else {
        warn!("[{}] request body is not an object", request_id);
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid request body",
            Some(json!("Se esperaba un objeto JSON con las respuestas.")),
        );
    };

    let properties = match submit::build_properties(schema, input) {
        Ok(properties) => properties,
        Err(err) => {
            warn!("[{}] validation failed: {}", request_id, err.details());
            return error_response(
                StatusCode::BAD_REQUEST,
                &err.to_string(),
                Some(json!(err.details())),
            );
        }
    };

    let Some(database_id) = state.config.database_for(schema.slug) else {
        error!("[{}] no database id configured for form '{}'", request_id, schema.slug);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server Configuration Error: Missing Credentials",
            None,
        );
    };

    let properties = Value::Object(properties);
    match state.client.create_record(database_id, properties.clone()).await {
        Ok(result) if result.is_success() => {
            info!("[{}] record created", request_id);
            (
                StatusCode::OK,
                Json(ApiMessage {
                    message: "Success".to_string(),
                    details: None,
                }),
            )
                .into_response()
        }
        Ok(result) => {
            error!(
                "[{}] external store rejected submission with status {}: {}",
                request_id, result.status, result.body
            );
            let status =
                StatusCode::from_u16(result.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Json(UpstreamRejection {
                    message: "Notion API Error",
                    details: result.body,
                    payload_sent: properties,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("[{}] submission failed: {:#}", request_id, err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
        }
    }
}

fn error_response(status: StatusCode, message: &str, details: Option<Value>) -> Response {
    (
        status,
        Json(ApiMessage {
            message: message.to_string(),
            details,
        }),
    )
        .into_response()
}

/// Bind and run the submission service until shutdown.
pub async fn serve(config: Config) -> Result<()> {
    let client = NotionClient::new(config.api_key.clone(), config.timeout_secs);
    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
        client,
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}
