// tests/support/mod.rs
// DOCUMENTATION: In-process mock of the places backend
// PURPOSE: Serve the three API routes over a real socket for client tests

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use placepicker::models::{Place, PlaceImage};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::RwLock};

/// Shared backend state
#[derive(Clone, Default)]
pub struct Backend {
    pub available: Arc<RwLock<Vec<Place>>>,
    pub saved: Arc<RwLock<Vec<Place>>>,
}

#[derive(Serialize, Deserialize)]
struct PlacesEnvelope {
    places: Vec<Place>,
}

#[derive(Serialize)]
struct UpdateMessage {
    message: String,
}

/// Router mirroring the real backend's three routes
pub fn app(backend: Backend) -> Router {
    Router::new()
        .route("/places", get(list_places))
        .route("/user-places", get(list_user_places).put(update_user_places))
        .with_state(backend)
}

/// Router where every route reports a failure status
pub fn failing_app() -> Router {
    Router::new()
        .route("/places", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/user-places",
            get(|| async { StatusCode::NOT_FOUND })
                .put(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

/// Serve a router on an ephemeral local port
pub async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Base URL of a port nothing listens on, for transport-failure tests
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

async fn list_places(State(backend): State<Backend>) -> Json<PlacesEnvelope> {
    Json(PlacesEnvelope {
        places: backend.available.read().await.clone(),
    })
}

async fn list_user_places(State(backend): State<Backend>) -> Json<PlacesEnvelope> {
    Json(PlacesEnvelope {
        places: backend.saved.read().await.clone(),
    })
}

// The Json extractor rejects bodies without a JSON content-type, so a
// successful update also proves the client sent the header.
async fn update_user_places(
    State(backend): State<Backend>,
    Json(input): Json<PlacesEnvelope>,
) -> Json<UpdateMessage> {
    *backend.saved.write().await = input.places;

    Json(UpdateMessage {
        message: "User places updated!".to_string(),
    })
}

pub fn place_at(id: &str, name: &str, lat: f64, lon: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{} Street 1", name),
        image: PlaceImage {
            src: format!("{}.jpg", id),
            alt: format!("A photo of {}", name),
        },
        lat,
        lon,
    }
}

/// Three places at staggered distances from the (40.0, -3.0) reference
/// used by the orchestrator tests: p2 is nearest, then p3, then p1.
pub fn sample_places() -> Vec<Place> {
    vec![
        place_at("p1", "Forest Waterfall", 50.0, 10.0),
        place_at("p2", "Harbor Lights", 40.1, -3.1),
        place_at("p3", "Old Town Square", 45.0, 0.0),
    ]
}
