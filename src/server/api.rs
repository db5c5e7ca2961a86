//! HTTP API server implementation
//!
//! Accepts any JSON value as translation input so untyped clients get the
//! same degrade-to-sentinel behavior as the library.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::TranslatConfig;
use crate::core::context::RequestContext;
use crate::core::engine::PassthroughEngine;
use crate::core::translator::Translator;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<Translator>,
    config: Arc<TranslatConfig>,
}

impl AppState {
    /// Create state around a configured translator
    pub fn new(translator: Translator, config: TranslatConfig) -> Self {
        Self {
            translator: Arc::new(translator),
            config: Arc::new(config),
        }
    }

    fn context(&self, language: Option<String>, route: Option<String>) -> RequestContext {
        RequestContext::from_config(&self.config)
            .with_language(language)
            .with_route(route)
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Single translation request
#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    /// Message string or structured request; anything else yields the sentinel
    #[serde(default)]
    pub input: Value,
    /// Current language, defaults to the configured one
    pub language: Option<String>,
    /// Current route, defaults to the configured one
    pub route: Option<String>,
}

/// Single translation response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Translated text, `null` when untranslatable outside debug mode
    pub translation: Option<String>,
}

/// Batch translation request
#[derive(Debug, Deserialize)]
pub struct BatchBody {
    /// Inputs translated in order
    #[serde(default)]
    pub inputs: Vec<Value>,
    /// Current language, defaults to the configured one
    pub language: Option<String>,
    /// Current route, defaults to the configured one
    pub route: Option<String>,
}

/// Batch translation response
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    /// One entry per input
    pub translations: Vec<Option<String>>,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Single translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateBody>,
) -> Json<TranslateResponse> {
    let ctx = state.context(payload.language, payload.route);
    debug!("Translating for route {} in {}", ctx.route_id, ctx.language);

    let translation = state.translator.translate_value(payload.input, &ctx);
    Json(TranslateResponse { translation })
}

/// Batch translation handler
async fn translate_batch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BatchBody>,
) -> Json<BatchResponse> {
    let ctx = state.context(payload.language, payload.route);
    debug!("Translating {} inputs for route {}", payload.inputs.len(), ctx.route_id);

    let translations = payload
        .inputs
        .into_iter()
        .map(|input| state.translator.translate_value(input, &ctx))
        .collect();
    Json(BatchResponse { translations })
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .route("/translate/batch", post(translate_batch))
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, config: TranslatConfig) -> anyhow::Result<()> {
    let translator = Translator::from_config(PassthroughEngine, &config);
    let app = router(AppState::new(translator, config));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
