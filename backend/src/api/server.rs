//! HTTP Server for the IPCA API.
//!
//! # API Endpoints
//!
//! | Method | Path           | Description                              |
//! |--------|----------------|------------------------------------------|
//! | GET    | `/`            | Health check                             |
//! | GET    | `/health`      | Health check                             |
//! | GET    | `/ipca/mensal` | Monthly IPCA variation since 2016        |
//! | GET    | `/swagger.json`| OpenAPI document                         |

use axum::{
    extract::State,
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use super::openapi::{openapi_spec, API_TITLE, API_VERSION};
use super::types::{pipeline_error, ApiError};
use crate::config::Settings;
use crate::error::ServerResult;
use crate::models::NormalizedRecord;
use crate::sidra::{SidraClient, TableFetcher};
use crate::transform::ipca_monthly;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn TableFetcher>,
}

impl AppState {
    pub fn new(fetcher: impl TableFetcher + 'static) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

/// Build the application router around a fetcher.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/ipca/mensal", get(ipca_mensal))
        .route("/swagger.json", get(swagger))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(port: u16, settings: &Settings) -> ServerResult<()> {
    let client = SidraClient::from_settings(settings)?;
    info!(
        upstream = client.base_url(),
        timeout_secs = settings.http_timeout.as_secs(),
        "SIDRA client ready"
    );

    let app = router(AppState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "IPCA API listening");
    info!("   GET /ipca/mensal - Monthly IPCA variation");
    info!("   GET /health      - Health check");
    info!("   GET /swagger.json - OpenAPI document");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ipca",
        "title": API_TITLE,
        "apiVersion": API_VERSION,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "mensal": "GET /ipca/mensal",
            "docs": "GET /swagger.json"
        }
    }))
}

/// OpenAPI document
async fn swagger() -> Json<Value> {
    Json(openapi_spec())
}

/// Monthly IPCA variation, fetched fresh from SIDRA on every request
async fn ipca_mensal(State(state): State<AppState>) -> Result<Json<Vec<NormalizedRecord>>, ApiError> {
    let records = ipca_monthly(state.fetcher.as_ref()).await.map_err(|e| {
        error!(error = %e, "GET /ipca/mensal failed");
        pipeline_error(&e)
    })?;

    Ok(Json(records))
}
