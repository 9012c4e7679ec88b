use crate::chat_init::ChatInitService;
use crate::models::simulation::GenerateChatMessagesRequest;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::State,
    response::{ IntoResponse, Response },
    http::{ HeaderMap, StatusCode },
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, warn };

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChatInitService>,
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(service: Arc<ChatInitService>, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self { service, api_key }
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        let Some(expected) = self.api_key.as_deref() else {
            return Ok(());
        };
        let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
        if provided == Some(expected) {
            Ok(())
        } else {
            warn!("Rejected request with missing or invalid API key");
            Err(error_response(StatusCode::UNAUTHORIZED, "Invalid or missing API key".into()))
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { success: false, message })).into_response()
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/generate-chat-messages", post(generate_chat_messages_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    state: AppState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))?;
    info!("Starting HTTP API server on: http://{}", addr);

    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn generate_chat_messages_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GenerateChatMessagesRequest>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }

    match state.service.generate_initial_chat(&req).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
