//! Integration tests for the green commute pipeline and its HTTP API

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use green_commute::{
    CommuteError, DistanceTable, EmissionsPredictor, Location, ModelArtifacts, Recommendation,
    Recommender, TimeOfDay, TrafficLevel, TransportMode, WeatherCondition, feasibility, options,
    selector, web,
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

fn build_recommender(distances: DistanceTable) -> Recommender {
    let artifacts = ModelArtifacts::embedded().expect("embedded artifacts");
    Recommender::new(distances, Arc::new(artifacts))
}

#[fixture]
fn recommender() -> Recommender {
    build_recommender(DistanceTable::pune())
}

fn modes(recommendation: &Recommendation) -> Vec<TransportMode> {
    recommendation.ranked.iter().map(|o| o.mode()).collect()
}

#[rstest]
fn test_short_sunny_morning_trip(recommender: Recommender) {
    let result = recommender
        .recommend(
            &Location::new("Kothrud"),
            &Location::new("Karve Nagar"),
            TimeOfDay::Morning,
            Some("Sunny"),
        )
        .unwrap();

    assert_eq!(result.distance_km, 3.0);
    assert_eq!(result.traffic_level, TrafficLevel::High);
    assert_eq!(result.ranked.len(), 6);
    assert!(result.excluded.is_empty());

    // Walking and cycling are emission free; cycling comes first in generator order
    assert_eq!(result.best.mode(), TransportMode::Bicycle);
    assert_eq!(
        modes(&result),
        [
            TransportMode::Bicycle,
            TransportMode::Walk,
            TransportMode::Metro,
            TransportMode::Bus,
            TransportMode::TwoWheeler,
            TransportMode::Car,
        ]
    );

    let walk = &result.ranked[1];
    assert_eq!(walk.option.travel_time_min, 24.0);
    let bicycle = &result.ranked[0];
    assert_eq!(bicycle.option.travel_time_min, 18.0);
}

#[rstest]
fn test_rainy_trip_keeps_only_car_bus_metro(recommender: Recommender) {
    let result = recommender
        .recommend(
            &Location::new("Kothrud"),
            &Location::new("Camp"),
            TimeOfDay::Evening,
            Some("Rainy"),
        )
        .unwrap();

    assert_eq!(result.distance_km, 10.0);
    let mut feasible = modes(&result);
    feasible.sort_by_key(|m| m.as_str());
    assert_eq!(
        feasible,
        [TransportMode::Bus, TransportMode::Car, TransportMode::Metro]
    );
    assert_eq!(result.best.mode(), TransportMode::Metro);
    assert_eq!(result.excluded.len(), 3);
}

#[rstest]
fn test_ranked_is_ascending(recommender: Recommender) {
    for weather in WeatherCondition::KNOWN {
        for time_of_day in [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ] {
            let result = recommender
                .recommend(
                    &Location::new("Baner"),
                    &Location::new("Hinjewadi"),
                    time_of_day,
                    Some(weather.as_str()),
                )
                .unwrap();
            assert!(
                result
                    .ranked
                    .windows(2)
                    .all(|w| w[0].predicted_co2 <= w[1].predicted_co2)
            );
            assert_eq!(result.best, result.ranked[0]);
        }
    }
}

#[rstest]
fn test_unknown_pair_uses_default_distance(recommender: Recommender) {
    let result = recommender
        .recommend(&Location::new("X"), &Location::new("Y"), TimeOfDay::Night, None)
        .unwrap();
    assert_eq!(result.distance_km, 10.0);
    assert_eq!(result.traffic_level, TrafficLevel::Low);
    assert_eq!(result.weather_condition, WeatherCondition::Sunny);
    assert!(!result.ranked.is_empty());
}

#[test]
fn test_zero_distance_trip_is_deterministic() {
    let artifacts = ModelArtifacts::embedded().unwrap();
    let weather = WeatherCondition::Sunny;

    let options = options::build_options(0.0, TrafficLevel::Low, &weather);
    let feasible = feasibility::filter_feasible(&options, &weather, 0.0);
    assert_eq!(feasible.len(), 6);

    let rank = || {
        let scored = feasible
            .iter()
            .cloned()
            .map(|o| {
                let co2 = artifacts.predict(&o).unwrap();
                o.scored(co2)
            })
            .collect();
        selector::select(scored).unwrap()
    };
    let first = rank();
    let second = rank();
    assert_eq!(first, second);
    assert!(
        first
            .ranked
            .iter()
            .all(|o| o.option.cost_rs == 0.0 && o.option.travel_time_min == 0.0)
    );
}

#[rstest]
fn test_unknown_weather_is_reported(recommender: Recommender) {
    let err = recommender
        .recommend(
            &Location::new("Aundh"),
            &Location::new("Baner"),
            TimeOfDay::Morning,
            Some("Hail"),
        )
        .unwrap_err();
    assert!(matches!(err, CommuteError::UnknownCategory { .. }));
}

#[test]
fn test_symmetric_table_reuses_reverse_distance() {
    let recommender = build_recommender(DistanceTable::pune().with_symmetric(true));
    let result = recommender
        .recommend(
            &Location::new("Hinjewadi"),
            &Location::new("Wakad"),
            TimeOfDay::Afternoon,
            None,
        )
        .unwrap();
    assert_eq!(result.distance_km, 5.0);
}

#[test]
fn test_recommender_is_shareable_across_threads() {
    let recommender = Arc::new(build_recommender(DistanceTable::pune()));
    let handles: Vec<_> = ["Kothrud", "Aundh", "Katraj", "Hadapsar"]
        .into_iter()
        .map(|source| {
            let recommender = Arc::clone(&recommender);
            std::thread::spawn(move || {
                recommender
                    .recommend(
                        &Location::new(source),
                        &Location::new("Swargate"),
                        TimeOfDay::Morning,
                        None,
                    )
                    .map(|r| r.best.mode())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}

async fn call(recommender: Recommender, request: Request<Body>) -> (StatusCode, Value) {
    let response = web::app(Arc::new(recommender))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_recommend(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn test_api_recommend(recommender: Recommender) {
    let (status, body) = call(
        recommender,
        post_recommend(json!({
            "source": "Hadapsar",
            "destination": "Kharadi",
            "time_of_day": "Afternoon",
            "weather": "Rainy"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance_km"], 6.0);
    assert_eq!(body["traffic_level"], "Medium");
    assert_eq!(body["weather_condition"], "Rainy");
    assert_eq!(body["best"]["transport_mode"], "Metro");
    assert_eq!(body["ranked"].as_array().unwrap().len(), 3);
    assert_eq!(body["excluded"].as_array().unwrap().len(), 3);
}

#[rstest]
#[tokio::test]
async fn test_api_invalid_time_of_day(recommender: Recommender) {
    let (status, body) = call(
        recommender,
        post_recommend(json!({
            "source": "Hadapsar",
            "destination": "Kharadi",
            "time_of_day": "Teatime"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[rstest]
#[case(json!({"destination": "Camp"}))]
#[case(json!({"source": 42, "destination": "Camp"}))]
#[tokio::test]
async fn test_api_malformed_body_is_invalid_input(recommender: Recommender, #[case] body: Value) {
    let (status, body) = call(recommender, post_recommend(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_api_missing_content_type_is_invalid_input(recommender: Recommender) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .body(Body::from(r#"{"source":"Hadapsar","destination":"Kharadi"}"#))
        .unwrap();
    let (status, body) = call(recommender, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[rstest]
#[tokio::test]
async fn test_api_unknown_weather(recommender: Recommender) {
    let (status, body) = call(
        recommender,
        post_recommend(json!({
            "source": "Hadapsar",
            "destination": "Kharadi",
            "time_of_day": "Morning",
            "weather": "Sandstorm"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unknown_category");
    assert!(body["message"].as_str().unwrap().contains("Sandstorm"));
}

#[rstest]
#[tokio::test]
async fn test_api_locations_and_modes(recommender: Recommender) {
    let request = Request::builder()
        .uri("/api/locations")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(recommender.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    let sources = body["sources"].as_array().unwrap();
    assert!(sources.contains(&json!("Kothrud")));
    assert!(body["destinations"].as_array().unwrap().contains(&json!("Camp")));
    assert_eq!(body["weather_conditions"].as_array().unwrap().len(), 4);

    let request = Request::builder()
        .uri("/api/modes")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(recommender, request).await;
    assert_eq!(status, StatusCode::OK);
    let modes = body.as_array().unwrap();
    assert_eq!(modes.len(), 6);
    assert_eq!(modes[1]["transport_mode"], "Two-Wheeler");
    assert_eq!(modes[1]["time_factor"], 3.5);
    assert_eq!(modes[0]["cost_per_km"], 12.0);
}
