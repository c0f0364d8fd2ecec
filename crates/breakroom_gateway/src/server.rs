use crate::types::{BreakListing, BreakResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use breakroom_core::{StateSnapshot, StateStore};
use breakroom_engine::{BreakHandler, BreakKind};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
struct AppState {
    handler: Arc<BreakHandler>,
    store: Arc<StateStore>,
}

/// The gateway HTTP server.
///
/// Exposes the break catalog to external callers:
/// - `GET /health` — health check
/// - `GET /breaks` — list the catalog
/// - `POST /breaks/:name` — take the named break
/// - `GET /state` — current well-being snapshot
pub struct GatewayServer {
    handler: Arc<BreakHandler>,
    store: Arc<StateStore>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(handler: Arc<BreakHandler>, store: Arc<StateStore>, host: &str, port: u16) -> Self {
        Self {
            handler,
            store,
            host: host.to_string(),
            port,
        }
    }

    /// Start the server. This spawns a background task and returns the join
    /// handle.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let state = AppState {
            handler: self.handler,
            store: self.store,
        };

        let app = Router::new()
            .route("/health", get(health))
            .route("/breaks", get(list_breaks))
            .route("/breaks/:name", post(take_break))
            .route("/state", get(read_state))
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = format!("{}:{}", self.host, self.port);

        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("Gateway failed to bind {}: {}", addr, e);
                    return;
                }
            };
            tracing::info!("Gateway listening on {}", addr);
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Gateway server error: {}", e);
            }
        })
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// GET /breaks — list every break in the catalog.
async fn list_breaks() -> Json<Vec<BreakListing>> {
    Json(
        BreakKind::all()
            .iter()
            .copied()
            .map(BreakListing::from)
            .collect(),
    )
}

/// POST /breaks/:name — take the named break.
///
/// May suspend at the delay gate before responding; concurrent requests
/// each suspend independently.
async fn take_break(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BreakResponse>, StatusCode> {
    let Some(kind) = BreakKind::from_name(&name) else {
        tracing::debug!(name = %name, "unknown break requested");
        return Err(StatusCode::NOT_FOUND);
    };
    let report = state.handler.perform(kind).await;
    Ok(Json(BreakResponse::from(report)))
}

/// GET /state — consistent snapshot of both levels.
async fn read_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    Json(state.store.snapshot().await)
}
