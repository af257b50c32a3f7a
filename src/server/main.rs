//! HTTP server for coordinate-to-representative lookups.
//!
//! Loads the boundary GeoJSON and representative record files once at
//! startup, then serves lookups against the immutable dataset.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use banyan::loader::DataStore;
use banyan::models::RepRecord;
use banyan::regions::RegionTable;
use banyan::service::LookupService;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Representative lookup server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    listen: String,

    /// Boundary GeoJSON file
    #[arg(long, default_value = "data/ac_bangalore.geojson")]
    boundaries: PathBuf,

    /// Assembly constituency records file
    #[arg(long, default_value = "data/ac_data.json")]
    mla_data: PathBuf,

    /// Parliamentary constituency records file
    #[arg(long, default_value = "data/pc_data.json")]
    mp_data: PathBuf,

    /// Lookup cache TTL in seconds
    #[arg(long, default_value_t = 300)]
    cache_ttl: u64,
}

/// Application state shared across handlers
struct AppState {
    service: LookupService,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Banyan lookup server");

    let store = Arc::new(DataStore::load(
        &args.boundaries,
        &args.mla_data,
        &args.mp_data,
    )?);
    let service = LookupService::new(
        store,
        RegionTable::bangalore(),
        Duration::from_secs(args.cache_ttl),
    );

    let state = Arc::new(AppState { service });

    // Build router
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/lookup", get(lookup_handler))
        .route("/api/v1/constituencies", get(constituencies_handler))
        .route("/api/v1/constituencies/geojson/{name}", get(geojson_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Root health-check endpoint
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Representative lookup API is running.",
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    boundaries_loaded: usize,
    regions_loaded: usize,
    cached_queries: usize,
}

/// Detailed health check: loaded dataset counts
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        boundaries_loaded: state.service.boundary_count(),
        regions_loaded: state.service.region_record_count(),
        cached_queries: state.service.cached_queries(),
    })
}

#[derive(Deserialize)]
struct LookupParams {
    /// Latitude of the queried point
    lat: f64,
    /// Longitude of the queried point
    lon: f64,
}

#[derive(Serialize)]
struct LookupResponse {
    latitude: f64,
    longitude: f64,
    mla: Option<RepRecord>,
    mp: Option<RepRecord>,
}

/// Core lookup: representatives for a coordinate
async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, (StatusCode, String)> {
    if !(-90.0..=90.0).contains(&params.lat) || !(-180.0..=180.0).contains(&params.lon) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("coordinates ({}, {}) out of range", params.lat, params.lon),
        ));
    }

    let result = state.service.resolve_point(params.lat, params.lon);

    if result.mla.is_none() {
        warn!("no representatives found for ({}, {})", params.lat, params.lon);
        return Err((
            StatusCode::NOT_FOUND,
            format!(
                "No representatives found for coordinates ({}, {}). \
                 Ensure the point falls within a known constituency.",
                params.lat, params.lon
            ),
        ));
    }

    Ok(Json(LookupResponse {
        latitude: params.lat,
        longitude: params.lon,
        mla: result.mla,
        mp: result.mp,
    }))
}

/// List all loaded constituency names
async fn constituencies_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "assembly_constituencies": state.service.list_known_boundaries(),
        "parliamentary_constituencies": state.service.list_known_regions(),
    }))
}

/// GeoJSON for a single constituency, used to highlight the matched
/// boundary on a map
async fn geojson_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match state.service.boundary_feature(&name) {
        Some(feature) => Ok(Json(json!({
            "type": "FeatureCollection",
            "features": [feature],
        }))),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("Constituency '{name}' not found"),
        )),
    }
}
