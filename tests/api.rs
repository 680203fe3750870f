use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use hopngo::api::{BookingAPI, LocationAPI, QuoteAPI, VehicleAPI};
use hopngo::config::Config;
use hopngo::engine::{Engine, FixedJitter};
use hopngo::entities::{Catalog, Platform, Trip, LOCATION_SUGGESTIONS};
use hopngo::server::handlers::{bookings, locations, quotes, vehicles};
use hopngo::server::DynAPI;

fn engine() -> Engine {
    Engine::new(Catalog::sample(), Config::default().without_delay())
}

fn dyn_api() -> DynAPI {
    Arc::new(engine()) as DynAPI
}

#[tokio::test]
async fn compare_rides_ranks_whole_catalog() {
    let engine = engine();

    let comparison = engine.compare_rides(Trip::default()).await.unwrap();

    assert_eq!(comparison.quotes.len(), 9);
    assert!(comparison
        .quotes
        .windows(2)
        .all(|pair| pair[0].price <= pair[1].price));
    assert_eq!(comparison.cheapest, comparison.quotes[0]);
    assert!(comparison.quotes.contains(&comparison.fastest));
}

#[tokio::test]
async fn compare_rides_rejects_blank_locations() {
    let engine = engine();

    let err = engine
        .compare_rides(Trip::new("Red Fort, Delhi", "   "))
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn compare_rides_waits_for_configured_delay() {
    let config = Config {
        compare_delay: Duration::from_millis(30),
        ..Config::default()
    };
    let engine = Engine::new(Catalog::sample(), config);

    let started = Instant::now();
    engine.compare_rides(Trip::default()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[test]
fn empty_catalog_surfaces_error() {
    let catalog = Catalog::new(vec![]).unwrap();
    let engine = Engine::new(catalog, Config::default().without_delay());

    let err = tokio_test::block_on(engine.compare_rides(Trip::default())).unwrap_err();
    assert!(err.is_empty_catalog());

    let err = engine.compare(&mut FixedJitter::zero()).unwrap_err();
    assert!(err.is_empty_catalog());
}

#[test]
fn engine_compare_is_deterministic_with_fixed_jitter() {
    let engine = engine();

    let first = engine.compare(&mut FixedJitter::zero()).unwrap();
    let second = engine.compare(&mut FixedJitter::zero()).unwrap();

    assert_eq!(first.quotes, second.quotes);
    assert_eq!(first.cheapest.label(), "Rapido Bike");
    assert_eq!(first.cheapest_summary(), "Rapido Bike - ₹45");
    assert_eq!(first.fastest_summary(), "Uber Premier - 4 mins");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn booking_known_offer() {
    let engine = engine();

    let booking = engine
        .book_ride(Platform::Rapido, "Auto".into(), 88)
        .await
        .unwrap();

    assert_eq!(booking.platform, Platform::Rapido);
    assert_eq!(booking.price, 88);
    assert!(booking.confirmation.starts_with("Book Rapido Auto for ₹88?"));
    assert!(booking.redirect.starts_with("Redirecting to Rapido..."));
}

#[tokio::test]
async fn booking_rejects_unknown_offer_and_low_price() {
    let engine = engine();

    let err = engine
        .book_ride(Platform::Uber, "Bike".into(), 50)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    let err = engine
        .book_ride(Platform::Rapido, "Bike".into(), 20)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn booking_rejects_price_outside_quote_range() {
    let engine = engine();

    let err = engine
        .book_ride(Platform::Rapido, "Bike".into(), 1_000_000)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    // Bike is quoted between 35 and 55
    let err = engine
        .book_ride(Platform::Rapido, "Bike".into(), 56)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    for price in [35, 45, 55] {
        let booking = engine
            .book_ride(Platform::Rapido, "Bike".into(), price)
            .await
            .unwrap();
        assert_eq!(booking.price, price);
    }
}

#[tokio::test]
async fn random_trip_never_repeats_location() {
    let engine = engine();

    for _ in 0..100 {
        let trip = engine.random_trip().await.unwrap();

        assert_ne!(trip.pickup, trip.destination);
        assert!(LOCATION_SUGGESTIONS.contains(&trip.pickup.as_str()));
        assert!(LOCATION_SUGGESTIONS.contains(&trip.destination.as_str()));
    }
}

#[tokio::test]
async fn suggestions_and_descriptions() {
    let engine = engine();

    let places = engine.location_suggestions().await.unwrap();
    assert_eq!(places.len(), 10);
    assert_eq!(places[0].description, "Connaught Place, Delhi");

    let vehicle = engine.describe_vehicle("Premier".into()).await.unwrap();
    assert_eq!(vehicle.description, "Premium sedan");

    let vehicle = engine.describe_vehicle("Hovercraft".into()).await.unwrap();
    assert_eq!(vehicle.description, "Vehicle");
}

#[tokio::test]
async fn compare_handler_returns_json_comparison() {
    let params = quotes::CompareParams {
        pickup: "Khan Market, Delhi".into(),
        destination: "Cyber Hub, Gurgaon".into(),
    };

    let Json(comparison) = quotes::compare(Extension(dyn_api()), Json(params))
        .await
        .unwrap();

    assert_eq!(comparison.quotes.len(), 9);
}

#[tokio::test]
async fn compare_handler_maps_blank_input_to_bad_request() {
    let params = quotes::CompareParams {
        pickup: "".into(),
        destination: "Cyber Hub, Gurgaon".into(),
    };

    let err = quotes::compare(Extension(dyn_api()), Json(params))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compare_handler_treats_missing_field_as_blank() {
    let params: quotes::CompareParams =
        serde_json::from_str(r#"{"pickup": "Red Fort, Delhi"}"#).unwrap();
    assert_eq!(params.destination, "");

    let err = quotes::compare(Extension(dyn_api()), Json(params))
        .await
        .unwrap_err();

    assert_eq!(err.code, 101);
    assert_eq!(
        err.message,
        "Please enter both pickup and destination locations"
    );
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_handler_attaches_descriptions() {
    let Json(entries) = quotes::catalog(Extension(dyn_api())).await.unwrap();

    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0].offer.vehicle_type, "Auto");
    assert_eq!(entries[0].description, "Auto-rickshaw");
    assert_eq!(entries[6].description, "Motorcycle");
}

#[tokio::test]
async fn vehicle_booking_and_location_handlers() {
    let Json(vehicle) = vehicles::describe(Extension(dyn_api()), Path("UberX".into()))
        .await
        .unwrap();
    assert_eq!(vehicle.description, "Sedan");

    let params = bookings::CreateParams {
        platform: Platform::Ola,
        vehicle_type: "Mini".into(),
        price: 150,
    };
    let Json(booking) = bookings::create(Extension(dyn_api()), Json(params))
        .await
        .unwrap();
    assert_eq!(booking.vehicle_type, "Mini");

    let Json(places) = locations::suggestions(Extension(dyn_api())).await.unwrap();
    assert_eq!(places.len(), 10);

    let Json(trip) = locations::random_trip(Extension(dyn_api())).await.unwrap();
    assert!(trip.validate().is_ok());
}

#[test]
fn engine_loads_catalog_from_file() {
    let path = std::env::temp_dir().join(format!("hopngo-catalog-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r##"[{"platform": "Uber", "vehicle_type": "UberX", "base_price": 195, "base_eta": 5, "color": "#000000"}]"##,
    )
    .unwrap();

    let config = Config {
        catalog_path: Some(path.clone()),
        ..Config::default()
    };
    let engine = Engine::from_config(config).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(engine.catalog().len(), 1);

    let comparison = engine.compare(&mut FixedJitter::zero()).unwrap();
    assert_eq!(comparison.cheapest, comparison.fastest);
}

#[test]
fn engine_refuses_empty_catalog_file() {
    let path = std::env::temp_dir().join(format!("hopngo-empty-engine-{}.json", std::process::id()));
    std::fs::write(&path, "[]").unwrap();

    let config = Config {
        catalog_path: Some(path.clone()),
        ..Config::default()
    };
    let result = Engine::from_config(config);
    std::fs::remove_file(&path).unwrap();

    assert!(result.unwrap_err().is_empty_catalog());
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let config = Config {
        catalog_path: Some("/nonexistent/hopngo/catalog.json".into()),
        ..Config::default()
    };

    let err = Engine::from_config(config).unwrap_err();
    assert_eq!(err.code, 6);
}
