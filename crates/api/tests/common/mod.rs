#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use dinefind_api::config::ServerConfig;
use dinefind_api::router::build_app_router;
use dinefind_api::state::AppState;
use dinefind_core::search::Coordinate;
use dinefind_db::DbPool;
use dinefind_maps::{Geocoder, MapsConfig, MapsError, PlaceResult, PlacesLookup};
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Stub providers
// ---------------------------------------------------------------------------

/// What the stub geocoder answers.
#[derive(Clone, Copy)]
pub enum GeocodeOutcome {
    Found(Coordinate),
    NotFound,
    TransportFailure,
}

/// What the stub places lookup answers.
#[derive(Clone)]
pub enum PlacesOutcome {
    Results(Vec<PlaceResult>),
    /// Provider answered with a non-success status.
    Unavailable,
    TransportFailure,
}

pub struct StubGeocoder {
    outcome: GeocodeOutcome,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _place_name: &str) -> Result<Option<Coordinate>, MapsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            GeocodeOutcome::Found(c) => Ok(Some(c)),
            GeocodeOutcome::NotFound => Ok(None),
            GeocodeOutcome::TransportFailure => {
                Err(MapsError::Transport(reqwest_transport_error().await))
            }
        }
    }
}

pub struct StubPlaces {
    outcome: PlacesOutcome,
    pub calls: AtomicUsize,
}

#[async_trait]
impl PlacesLookup for StubPlaces {
    async fn nearby_restaurants(
        &self,
        coordinate: Option<Coordinate>,
    ) -> Result<Vec<PlaceResult>, MapsError> {
        if coordinate.is_none() {
            return Ok(Vec::new());
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            PlacesOutcome::Results(r) => Ok(r.clone()),
            PlacesOutcome::Unavailable => Ok(Vec::new()),
            PlacesOutcome::TransportFailure => {
                Err(MapsError::Transport(reqwest_transport_error().await))
            }
        }
    }
}

/// A real transport error: a request to a port nothing listens on.
async fn reqwest_transport_error() -> reqwest::Error {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    reqwest::get(format!("http://{addr}/")).await.unwrap_err()
}

/// Handles to the stubs wired into a test app.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub geocoder: Arc<StubGeocoder>,
    pub places: Arc<StubPlaces>,
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
        maps: MapsConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            geocoding_api_key: "test-geo".to_string(),
            places_api_key: "test-places".to_string(),
            request_timeout_secs: 1,
        },
    }
}

/// In-memory database with the search log schema in place.
pub async fn test_pool() -> DbPool {
    let pool = dinefind_db::create_in_memory_pool().await.unwrap();
    let mut conn = pool.acquire().await.unwrap();
    dinefind_db::ensure_schema(&mut conn).await.unwrap();
    drop(conn);
    pool
}

/// Build the production router around stub providers.
pub fn build_test_app(pool: DbPool, geocode: GeocodeOutcome, places: PlacesOutcome) -> TestApp {
    let geocoder = Arc::new(StubGeocoder {
        outcome: geocode,
        calls: AtomicUsize::new(0),
    });
    let places = Arc::new(StubPlaces {
        outcome: places,
        calls: AtomicUsize::new(0),
    });

    let state = AppState {
        pool: pool.clone(),
        geocoder: geocoder.clone(),
        places: places.clone(),
    };

    TestApp {
        router: build_app_router(state, &test_config()),
        pool,
        geocoder,
        places,
    }
}

pub fn paris() -> Coordinate {
    Coordinate {
        lat: 48.8566,
        lng: 2.3522,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a urlencoded form body to `uri`.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("x-forwarded-for", "198.51.100.7")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn event_count(pool: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM search_queries")
        .fetch_one(pool)
        .await
        .unwrap()
}
