use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_registry::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn search_request(body: Value) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/http/v2.json")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn animal_search(postal: &str) -> Value {
    json!({
        "apikey": "k",
        "objectType": "animals",
        "objectAction": "publicSearch",
        "search": {
            "calcFoundRows": "Yes",
            "resultStart": 0,
            "resultLimit": 24,
            "resultSort": "animalID",
            "fields": ["animalID", "animalName", "animalStatus"],
            "filters": [
                { "fieldName": "animalStatus", "operation": "equals", "criteria": "Available" },
                { "fieldName": "animalLocationDistance", "operation": "radius", "criteria": "25" },
                { "fieldName": "animalLocation", "operation": "equals", "criteria": postal }
            ]
        }
    })
}

// --- animal search ---

#[tokio::test]
async fn search_returns_keyed_map_and_found_rows() {
    let resp = app()
        .oneshot(search_request(animal_search("60601")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["foundRows"], 2);
    assert_eq!(body["data"]["0"]["animalID"], "5");
    assert_eq!(body["data"]["1"]["animalID"], "9");
}

#[tokio::test]
async fn status_filter_hides_pending_animals() {
    let resp = app()
        .oneshot(search_request(animal_search("60601")))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let data = body["data"].as_object().unwrap();
    assert!(data.values().all(|record| record["animalStatus"] == "Available"));
}

#[tokio::test]
async fn unknown_postal_returns_empty_data_and_zero_found_rows() {
    let resp = app()
        .oneshot(search_request(animal_search("00000")))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["foundRows"], 0);
    assert!(body["data"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn field_projection_strips_unrequested_fields() {
    let resp = app()
        .oneshot(search_request(animal_search("60601")))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let record = body["data"]["0"].as_object().unwrap();
    assert!(record.contains_key("animalName"));
    assert!(!record.contains_key("animalDescription"));
}

// --- detail and org ---

#[tokio::test]
async fn detail_filter_selects_one_animal() {
    let body = json!({
        "apikey": "k",
        "objectType": "animals",
        "objectAction": "publicSearch",
        "search": {
            "resultStart": 0,
            "resultLimit": 1,
            "fields": [],
            "filters": [
                { "fieldName": "animalID", "operation": "equals", "criteria": "12" }
            ]
        }
    });
    let resp = app().oneshot(search_request(body)).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"]["0"]["animalName"], "Mozart");
    assert!(body["data"].get("1").is_none());
    assert!(body.get("foundRows").is_none());
}

#[tokio::test]
async fn org_lookup_uses_the_nested_shape() {
    let body = json!({
        "apikey": "k",
        "objectType": "orgs",
        "objectAction": "publicSearch",
        "search": {
            "resultStart": 0,
            "resultLimit": 1,
            "resultSort": "orgID",
            "resultOrder": "asc",
            "fields": ["orgID", "orgName", "orgEmail"],
            "filters": [
                { "fieldName": "orgID", "operation": "equals", "criteria": "77" }
            ]
        }
    });
    let resp = app().oneshot(search_request(body)).await.unwrap();

    let body = body_json(resp).await;
    let orgs = body["data"]["orgs"].as_array().unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0]["orgName"], "Paws of the Loop");
}

// --- request rejection ---

#[tokio::test]
async fn blank_apikey_is_unauthorized() {
    let mut body = animal_search("60601");
    body["apikey"] = json!("  ");
    let resp = app().oneshot(search_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_object_type_is_rejected() {
    let mut body = animal_search("60601");
    body["objectType"] = json!("events");
    let resp = app().oneshot(search_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let mut body = animal_search("60601");
    body["objectAction"] = json!("privateSearch");
    let resp = app().oneshot(search_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
