//! HTTP surface: the HTML form page and the JSON API

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::attractions::{AttractionFetcher, WikipediaClient};
use crate::config::AppConfig;
use crate::models::Coordinate;
use crate::planner::{self, TripRequest};
use crate::{Result, api, render};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub fetcher: AttractionFetcher,
}

impl AppState {
    #[must_use]
    pub fn new(fetcher: AttractionFetcher) -> Self {
        Self { fetcher }
    }

    /// State backed by the configured Wikipedia endpoint
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = WikipediaClient::new(&config.search)?;
        Ok(Self::new(AttractionFetcher::new(
            Arc::new(client),
            config.search.clone(),
        )))
    }
}

/// Application router with CORS, body limit and request tracing
pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index).post(submit))
        .nest("/api", api::router())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render::page(None, None))
}

async fn submit(State(state): State<AppState>, Form(request): Form<TripRequest>) -> Html<String> {
    let city = request.city();

    let result = match request.coordinates() {
        Some((lat, lon)) => {
            let coordinate = Coordinate::parse_lenient(lat, lon);
            Some(planner::plan_trip(&state.fetcher, city, coordinate).await)
        }
        None => {
            debug!("Form submitted without coordinates, rendering empty result");
            None
        }
    };

    Html(render::page(Some(city), result.as_ref()))
}

/// Bind and serve until the process is stopped
pub async fn run(config: &AppConfig, state: AppState) -> Result<()> {
    let app = router(state, config.server.body_limit_bytes);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
