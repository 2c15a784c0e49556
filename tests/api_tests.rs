//! API integration tests
//!
//! Run against a live server with seeded configuration:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const LOCATION: &str = "shibuya";

/// Seed a full week of 09:00-18:00 hours for the test location
async fn seed_hours(client: &Client) {
    for day in 0..7 {
        let response = client
            .post(format!("{}/locations/{}/hours", BASE_URL, LOCATION))
            .json(&json!({
                "day_of_week": day,
                "open_time": "09:00",
                "close_time": "18:00"
            }))
            .send()
            .await
            .expect("Failed to seed hours");
        assert_eq!(response.status(), 201);
    }
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_hours_roundtrip() {
    let client = Client::new();

    let response = client
        .post(format!("{}/locations/{}/hours", BASE_URL, LOCATION))
        .json(&json!({
            "day_of_week": 0,
            "open_time": "09:00",
            "close_time": "18:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No hours row ID");

    let response = client
        .get(format!("{}/locations/{}/hours", BASE_URL, LOCATION))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().unwrap().iter().any(|r| r["id"] == id));
}

#[tokio::test]
#[ignore]
async fn test_invalid_hours_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/locations/{}/hours", BASE_URL, LOCATION))
        .json(&json!({
            "day_of_week": 0,
            "open_time": "18:00",
            "close_time": "09:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_validate_accepts_inside_hours() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .post(format!("{}/locations/{}/booking/validate", BASE_URL, LOCATION))
        .json(&json!({
            "start": "2030-06-03T10:00:00",
            "end": "2030-06-03T11:00:00",
            "seats": 2
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["start"], "2030-06-03T10:00:00");
    assert_eq!(body["end"], "2030-06-03T11:00:00");
    assert_eq!(body["overnight"], false);
    assert!(body["checkout_url"]
        .as_str()
        .unwrap()
        .contains("seats=2"));
}

#[tokio::test]
#[ignore]
async fn test_validate_rejects_short_window() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .post(format!("{}/locations/{}/booking/validate", BASE_URL, LOCATION))
        .json(&json!({
            "start": "2030-06-03T10:00:00",
            "end": "2030-06-03T10:30:00",
            "seats": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Minimum booking duration is 1 hour");
}

#[tokio::test]
#[ignore]
async fn test_validate_rejects_bad_seat_count() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .post(format!("{}/locations/{}/booking/validate", BASE_URL, LOCATION))
        .json(&json!({
            "start": "2030-06-03T10:00:00",
            "end": "2030-06-03T11:00:00",
            "seats": 0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_closure_blocks_booking() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .post(format!("{}/locations/{}/closures", BASE_URL, LOCATION))
        .json(&json!({
            "start_at": "2030-07-01T10:00:00",
            "end_at": "2030-07-01T14:00:00",
            "reason": "maintenance"
        }))
        .send()
        .await
        .expect("Failed to create closure");

    assert_eq!(response.status(), 201);
    let closure: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .post(format!("{}/locations/{}/booking/validate", BASE_URL, LOCATION))
        .json(&json!({
            "start": "2030-07-01T09:00:00",
            "end": "2030-07-01T11:00:00",
            "seats": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // Cleanup
    let _ = client
        .delete(format!("{}/closures/{}", BASE_URL, closure["id"]))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_slots_for_future_date() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .get(format!(
            "{}/locations/{}/booking/slots?date=2030-06-03",
            BASE_URL, LOCATION
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots = body["slots"].as_array().unwrap();
    // 09:00 through 18:00 inclusive on a 15-minute grid
    assert_eq!(slots.len(), 37);
    assert_eq!(slots[0], "09:00:00");
    assert_eq!(slots[36], "18:00:00");
}

#[tokio::test]
#[ignore]
async fn test_start_time_for_future_date() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .get(format!(
            "{}/locations/{}/booking/start-time?date=2030-06-03",
            BASE_URL, LOCATION
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["time"], "2030-06-03T09:00:00");
}

#[tokio::test]
#[ignore]
async fn test_excluded_dates_empty_without_closures() {
    let client = Client::new();
    seed_hours(&client).await;

    let response = client
        .get(format!(
            "{}/locations/{}/booking/excluded-dates?from=2031-01-01&to=2031-01-31",
            BASE_URL, LOCATION
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["dates"].as_array().unwrap().len(), 0);
}
