use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::presets::{self, PresetSection};
use crate::reader::ReadOutput;
use crate::settings;
use crate::speech::{self, Synthesizer};

use super::models::{ErrorResponse, ReadRequest, SpeakResponse};
use super::read::{ServerError, read_request, speak_request};
use super::state::ServerState;

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn run_server(settings: settings::Settings, addr: Option<String>) -> Result<()> {
    let addr = addr.unwrap_or_else(|| settings.server_addr.clone());
    let synthesizer = speech::build_synthesizer(&settings.tts)?;
    let app = router(Arc::new(ServerState {
        settings,
        synthesizer,
    }));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind server address {}", addr))?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router<S: Synthesizer>(state: Arc<ServerState<S>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/transcribe", post(transcribe))
        .route("/speak", post(speak::<S>))
        .route("/presets", get(preset_sections))
        .with_state(state)
        .layer(axum::middleware::from_fn(cors_middleware))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn cors_middleware(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_cors_headers(response.headers_mut());
        return Ok(response);
    }
    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    Ok(response)
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
}

fn into_handler_error(err: ServerError) -> HandlerError {
    (err.status, Json(ErrorResponse { error: err.message }))
}

async fn transcribe(Json(payload): Json<ReadRequest>) -> Result<Json<ReadOutput>, HandlerError> {
    read_request(&payload, "all")
        .map(Json)
        .map_err(into_handler_error)
}

async fn speak<S: Synthesizer>(
    State(state): State<Arc<ServerState<S>>>,
    Json(payload): Json<ReadRequest>,
) -> Result<Json<SpeakResponse>, HandlerError> {
    speak_request(&state.settings, &state.synthesizer, payload)
        .await
        .map(Json)
        .map_err(into_handler_error)
}

async fn preset_sections() -> Json<Vec<PresetSection>> {
    Json(presets::sections())
}
