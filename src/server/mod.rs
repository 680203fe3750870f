pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{bookings, locations, quotes, vehicles};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/", get(root))
        .route("/comparisons", post(quotes::compare))
        .route("/catalog", get(quotes::catalog))
        .route("/vehicles/:vehicle_type", get(vehicles::describe))
        .route("/bookings", post(bookings::create))
        .route("/locations/suggestions", get(locations::suggestions))
        .route("/locations/random_trip", get(locations::random_trip))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}

async fn root() -> &'static str {
    "HopNGo ride comparison"
}
