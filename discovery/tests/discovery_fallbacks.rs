//! End-to-end behaviour of the wired service against stub providers.
//!
//! Each test builds the production wiring from settings whose base URLs
//! point at a local Actix stub, then checks what callers see when providers
//! succeed, fail, stall, or are not configured.

mod support;

use std::time::Duration;

use discovery::domain::Coordinates;
use discovery::{TravelDiscovery, build_discovery};
use rstest::rstest;
use serde_json::{Value, json};
use support::{StubReply, StubUpstream, settings_for, unconfigured_settings_for};

const PARIS: Coordinates = Coordinates::new(48.8566, 2.3522);

fn discovery_for(stub: &StubUpstream) -> TravelDiscovery {
    build_discovery(&settings_for(stub.base_url())).expect("discovery wiring")
}

fn country(name: &str, lat: f64, lng: f64) -> Value {
    json!({
        "name": {"common": name},
        "capital": ["Capital"],
        "latlng": [lat, lng],
        "population": 1_000,
        "currencies": {"XXX": {"name": format!("{name} coin")}},
        "languages": {"xx": format!("{name}ish")}
    })
}

fn photo_results(id: &str) -> Value {
    json!({
        "results": [{
            "id": id,
            "urls": {"regular": format!("https://images.example/{id}?ixid=1")},
            "alt_description": "a view",
            "user": {"name": "Stub Photographer", "links": {"html": "https://photos.example/stub"}},
            "color": "#000000"
        }]
    })
}

#[rstest]
#[actix_web::test]
async fn country_outage_serves_the_twelve_seeds() {
    let stub = StubUpstream::start([("/all", StubReply::Status(500))]);
    let discovery = discovery_for(&stub);

    let locations = discovery.list_locations(None).await;

    let ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(
        ids,
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
    );
    assert_eq!(locations.first().map(|l| l.name.as_str()), Some("Paris, France"));
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn malformed_country_payload_serves_matching_seeds() {
    let stub = StubUpstream::start([("/all", StubReply::Raw("[{\"name\": "))]);
    let discovery = discovery_for(&stub);

    let locations = discovery.list_locations(Some("japan")).await;

    let ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["2", "8"]);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn live_listing_keeps_featured_countries_with_images() {
    let stub = StubUpstream::start([
        (
            "/all",
            StubReply::Json(json!([
                country("Iceland", 65.0, -18.0),
                country("Italy", 42.8, 12.8),
                country("Narnia", 0.0, 0.0),
                country("Japan", 36.0, 138.0),
            ])),
        ),
        ("/search/photos", StubReply::Json(photo_results("hero"))),
    ]);
    let discovery = discovery_for(&stub);

    let locations = discovery.list_locations(None).await;

    let ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["Italy", "Japan"]);
    let italy = locations.first().expect("Italy");
    assert_eq!(italy.name, "Rome");
    assert_eq!(
        italy.image_url,
        "https://images.example/hero?ixid=1&w=500&h=400&fit=crop&crop=entropy&q=80"
    );
    assert_eq!(italy.currency.as_deref(), Some("Italy coin"));
    assert_eq!(italy.language.as_deref(), Some("Italyish"));
    assert!(
        stub.requests()
            .iter()
            .any(|r| r.starts_with("/search/photos?query=Rome+travel&per_page=1&orientation=landscape"))
    );
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn image_lookups_are_memoised_across_case() {
    let stub = StubUpstream::start([("/search/photos", StubReply::Json(photo_results("once")))]);
    let discovery = discovery_for(&stub);

    let first = discovery.resolve_image("France").await;
    let second = discovery.resolve_image("FRANCE").await;
    let third = discovery.resolve_image("france").await;

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(stub.hits("/search/photos"), 1);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn failing_image_search_tries_five_variants_then_curated_table() {
    let stub = StubUpstream::start([("/search/photos", StubReply::Status(503))]);
    let discovery = discovery_for(&stub);

    let url = discovery.resolve_image("Atlantis").await;

    assert!(url.starts_with("https://images.unsplash.com/"));
    assert_eq!(stub.hits("/search/photos"), 5);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn weather_readings_are_rounded_and_converted() {
    let stub = StubUpstream::start([(
        "/weather",
        StubReply::Json(json!({
            "main": {"temp": 18.4, "humidity": 60},
            "weather": [{"main": "Rain"}],
            "wind": {"speed": 3}
        })),
    )]);
    let discovery = discovery_for(&stub);

    let weather = discovery.get_weather(PARIS).await;

    assert_eq!(weather.temperature, 18);
    assert_eq!(weather.condition, "Rain");
    assert_eq!(weather.humidity, 60);
    assert_eq!(weather.wind_speed, 11);
    assert_eq!(weather.icon, "🌧️");
    assert_eq!(
        stub.requests(),
        ["/weather?lat=48.8566&lon=2.3522&appid=weather-key&units=metric"]
    );
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn stalled_weather_provider_yields_generated_conditions() {
    let stub = StubUpstream::start([(
        "/weather",
        StubReply::Slow(Duration::from_millis(1_500), json!({})),
    )]);
    let discovery = discovery_for(&stub);

    let weather = discovery.get_weather(PARIS).await;

    assert!(["Sunny", "Cloudy", "Rainy", "Snowy"].contains(&weather.condition.as_str()));
    assert!((10..=40).contains(&weather.temperature));
    assert!(weather.humidity <= 100);
    assert!(weather.wind_speed <= 20);
    assert_eq!(weather.pressure, 1013);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn places_are_trimmed_to_ten() {
    let features: Vec<Value> = (0..12)
        .map(|index| {
            json!({"properties": {
                "xid": format!("N{index}"),
                "name": format!("Sight {index}"),
                "kinds": "museums,cultural",
                "dist": 99.5
            }})
        })
        .collect();
    let stub = StubUpstream::start([(
        "/places/radius",
        StubReply::Json(json!({"features": features})),
    )]);
    let discovery = discovery_for(&stub);

    let places = discovery.get_places(PARIS, Some(1_000)).await;

    assert_eq!(places.len(), 10);
    let first = places.first().expect("place");
    assert_eq!(first.kind, "museums");
    assert_eq!(first.distance, 100);
    assert!(
        stub.requests()
            .iter()
            .all(|r| r.starts_with("/places/radius?radius=1000&lon=2.3522&lat=48.8566"))
    );
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn places_failure_yields_nothing() {
    let stub = StubUpstream::start([("/places/radius", StubReply::Status(500))]);
    let discovery = discovery_for(&stub);

    assert!(discovery.get_places(PARIS, None).await.is_empty());
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn unconfigured_credentials_never_call_providers() {
    let stub = StubUpstream::start([("/all", StubReply::Status(500))]);
    let discovery =
        build_discovery(&unconfigured_settings_for(stub.base_url())).expect("discovery wiring");

    let places = discovery.get_places(PARIS, None).await;
    let photos = discovery.get_photos("Paris, France", None).await;
    let image = discovery.resolve_image("Paris").await;
    let weather = discovery.get_weather(PARIS).await;

    assert!(places.is_empty());
    assert_eq!(photos.len(), 6);
    assert!(!image.is_empty());
    assert_eq!(weather.pressure, 1013);
    assert!(stub.requests().is_empty());
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn unknown_country_is_synthesised_and_stable() {
    let stub = StubUpstream::start([("/name/Wakanda", StubReply::Status(404))]);
    let discovery =
        build_discovery(&unconfigured_settings_for(stub.base_url())).expect("discovery wiring");

    let first = discovery.get_location("Wakanda").await;
    let second = discovery.get_location("Wakanda").await;

    assert_eq!(first.id, "Wakanda");
    assert_eq!(first.latitude, 0.0);
    assert!((4.3..=4.7).contains(&first.rating));
    assert_eq!(first.image_url, second.image_url);
    assert_eq!(first.description, second.description);
    assert_eq!(stub.hits("/name/Wakanda"), 2);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn seed_lookup_by_id_survives_outage() {
    let stub = StubUpstream::start(Vec::new());
    let discovery = discovery_for(&stub);

    let first = discovery.get_location("7").await;
    let second = discovery.get_location("7").await;

    assert_eq!(first.name, "Rome, Italy");
    assert_eq!(first, second);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn gallery_search_results_are_cropped() {
    let stub = StubUpstream::start([("/search/photos", StubReply::Json(photo_results("g1")))]);
    let discovery = discovery_for(&stub);

    let photos = discovery.get_photos("Lisbon", Some(3)).await;

    assert_eq!(photos.len(), 1);
    let photo = photos.first().expect("photo");
    assert_eq!(
        photo.url,
        "https://images.example/g1?ixid=1&w=800&h=600&fit=crop&crop=entropy&q=80"
    );
    assert_eq!(photo.alt, "a view");
    assert_eq!(
        stub.requests(),
        ["/search/photos?query=Lisbon&per_page=3&orientation=landscape&client_id=photo-key"]
    );
    stub.stop().await;
}
