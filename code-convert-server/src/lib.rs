use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use code_convert::{
    CodeConvertService, ConversionRequest, ConversionResult, ExecutionResult, Language,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
    #[error("Execution error: {0}")]
    Execution(#[from] code_convert::Error),
    #[error("Server error: {0}")]
    Server(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::InvalidLanguage(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Err from execute means environment misconfiguration, not bad input
            ServerError::Execution(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ServerError::Server(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetectResponse {
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExecuteRequest {
    pub language: String,
    pub code: String,
    /// Timeout in seconds; clamped to the server's configured maximum
    pub timeout: Option<u64>,
}

/// Execution timeout policy applied to every request.
#[derive(Debug, Clone)]
pub struct TimeoutPolicy {
    pub default: Duration,
    pub max: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(10),
            max: Duration::from_secs(60),
        }
    }
}

#[derive(Clone)]
struct AppState {
    service: Arc<CodeConvertService>,
    timeouts: TimeoutPolicy,
}

pub fn create_app(service: CodeConvertService, timeouts: TimeoutPolicy) -> Router {
    let state = AppState {
        service: Arc::new(service),
        timeouts,
    };

    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check))
        .route("/detect", post(detect))
        .route("/convert", post(convert))
        .route("/execute", post(execute))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting code conversion server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn detect(
    State(state): State<AppState>,
    Json(payload): Json<DetectRequest>,
) -> Json<DetectResponse> {
    Json(DetectResponse {
        language: state.service.detect(&payload.text),
    })
}

async fn convert(
    State(state): State<AppState>,
    Json(payload): Json<ConversionRequest>,
) -> Json<ConversionResult> {
    Json(state.service.convert(payload).await)
}

async fn execute(
    State(state): State<AppState>,
    Json(payload): Json<ExecuteRequest>,
) -> Result<Json<ExecutionResult>, ServerError> {
    let language: Language = payload
        .language
        .parse()
        .map_err(|_| ServerError::InvalidLanguage(payload.language.clone()))?;

    let timeout = payload
        .timeout
        .map(Duration::from_secs)
        .unwrap_or(state.timeouts.default)
        .min(state.timeouts.max);

    let result = state.service.execute(&payload.code, language, timeout).await?;

    Ok(Json(result))
}
