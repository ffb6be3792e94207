//! Challenge Controller (C6): an ephemeral local HTTP server that asks a
//! human to approve or deny a risky command, then tears itself down.
//!
//! State machine: `IDLE -> SERVING -> RESOLVED -> CLOSED`. Resolution is a
//! single-resolve sink (a `tokio::sync::oneshot` channel) racing the
//! `/approve`/`/deny` endpoints against a deadline timer — never a polling
//! loop, so there is no window where the deadline fires after resolution.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{any, get};
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::MatchRecord;
use crate::challenge::kinds::Kind;
use crate::challenge::render;

/// Terminal outcome of a challenge session.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub approved: bool,
    pub reason: Option<String>,
}

impl Resolution {
    fn approved() -> Self {
        Self { approved: true, reason: None }
    }

    fn denied(reason: &str) -> Self {
        Self { approved: false, reason: Some(reason.to_string()) }
    }
}

type ResolverSlot = Arc<Mutex<Option<oneshot::Sender<Resolution>>>>;

#[derive(Clone)]
struct AppState {
    kind: Arc<Kind>,
    command: Arc<String>,
    matches: Arc<Vec<MatchRecord>>,
    resolver: ResolverSlot,
}

/// Opens a challenge session: binds an ephemeral `127.0.0.1` port, serves the
/// page for `kind`, and waits for the first of approve, deny, or timeout.
///
/// `open_browser` is suppressible so tests never actually spawn a platform
/// browser command.
pub async fn open(
    kind: Kind,
    command: String,
    matches: Vec<MatchRecord>,
    timeout: Duration,
    open_browser: bool,
) -> Resolution {
    open_probed(kind, command, matches, timeout, open_browser, None).await
}

/// Same as [`open`], but reports the bound socket address on `addr_probe`
/// before waiting for resolution. Used by integration tests that need to
/// drive the real HTTP endpoints over a `TcpStream`.
pub async fn open_probed(
    kind: Kind,
    command: String,
    matches: Vec<MatchRecord>,
    timeout: Duration,
    open_browser: bool,
    addr_probe: Option<oneshot::Sender<std::net::SocketAddr>>,
) -> Resolution {
    if matches!(kind, Kind::Block) {
        if let Some(probe) = addr_probe {
            let _ = probe.send("127.0.0.1:0".parse().unwrap());
        }
        return Resolution::denied("blocked by policy");
    }

    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::warn!(error = %e, "challenge listener bind failed");
            return Resolution::denied("challenge system error");
        }
    };

    let Ok(addr) = listener.local_addr() else {
        tracing::warn!("challenge listener has no local address");
        return Resolution::denied("challenge system error");
    };

    if let Some(probe) = addr_probe {
        let _ = probe.send(addr);
    }

    let (tx, rx) = oneshot::channel();
    let state = AppState {
        kind: Arc::new(kind),
        command: Arc::new(command),
        matches: Arc::new(matches),
        resolver: Arc::new(Mutex::new(Some(tx))),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(serve_page))
        .route("/approve", any(resolve_approve))
        .route("/deny", any(resolve_deny))
        .route("/favicon.ico", get(favicon))
        .fallback(any(not_found))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(port = addr.port(), kind = ?addr, "challenge session serving");

    let serve_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    if open_browser {
        spawn_browser_open(&format!("http://{addr}"));
    }

    let resolution = tokio::select! {
        result = rx => result.unwrap_or_else(|_| Resolution::denied("challenge system error")),
        () = tokio::time::sleep(timeout) => {
            tracing::info!("challenge deadline reached");
            Resolution::denied("timeout")
        }
    };

    serve_handle.abort();
    tracing::info!(approved = resolution.approved, "challenge session resolved");
    resolution
}

async fn serve_page(State(state): State<AppState>) -> impl IntoResponse {
    let page = render::render_page(&state.command, &state.matches, &state.kind);
    let mut response = Html(page).into_response();
    response.headers_mut().insert(header::CONNECTION, header::HeaderValue::from_static("close"));
    response
}

async fn resolve_approve(State(state): State<AppState>) -> impl IntoResponse {
    resolve(&state, Resolution::approved(), "approved").await
}

async fn resolve_deny(State(state): State<AppState>) -> impl IntoResponse {
    resolve(&state, Resolution::denied("user denial"), "denied").await
}

async fn resolve(state: &AppState, resolution: Resolution, status_word: &str) -> Response {
    let mut slot = state.resolver.lock().await;
    if let Some(tx) = slot.take() {
        let _ = tx.send(resolution);
    }
    let mut response = Json(json!({ "status": status_word })).into_response();
    response.headers_mut().insert(header::CONNECTION, header::HeaderValue::from_static("close"));
    response
}

async fn favicon() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    response.headers_mut().insert(header::CONNECTION, header::HeaderValue::from_static("close"));
    response
}

async fn not_found() -> Response {
    let mut response = StatusCode::NOT_FOUND.into_response();
    response.headers_mut().insert(header::CONNECTION, header::HeaderValue::from_static("close"));
    response
}

fn spawn_browser_open(url: &str) {
    let url = url.to_string();
    let result = if cfg!(target_os = "macos") {
        std::process::Command::new("open").arg(&url).spawn()
    } else if cfg!(target_os = "windows") {
        std::process::Command::new("cmd").args(["/c", "start", "", &url]).spawn()
    } else {
        std::process::Command::new("xdg-open").arg(&url).spawn()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "best-effort browser open failed, continuing");
    }
}
