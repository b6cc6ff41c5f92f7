//! End-to-end tests over the full router with an in-memory database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mealprepdb_rest_api::{create_rest_app, AppConfig};
use mealprepdb_storage::testing::{create_test_db, seeds};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn seeded_app() -> Router {
    let db = create_test_db().await;
    seeds::all(db.get_connection()).await;
    create_rest_app(db, AppConfig::default())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = seeded_app().await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ingredient_list_and_filters() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/ingredient/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["results"].as_array().unwrap().len(), 4);

    let (status, body) = get_json(&app, "/v1/ingredient/?type=seeds").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["next_url"], Value::Null);

    let (status, body) = get_json(&app, "/v1/ingredient/?type=spice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["name"], "cumin");

    let (status, body) = get_json(&app, "/v1/ingredient/?name__contains=ri").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["name"], "rice");

    let (status, body) = get_json(&app, "/v1/ingredient/?name=onion").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_ingredient_pagination_walk() {
    let app = seeded_app().await;

    // page 1
    let (status, body) = get_json(&app, "/v1/ingredient/?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    let next = body["next_url"].as_str().unwrap().to_string();
    assert_eq!(next, "/v1/ingredient/?limit=2&offset=2");
    let mut ids: Vec<i64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();

    // page 2, following the returned URL verbatim
    let (status, body) = get_json(&app, &next).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["next_url"], Value::Null);
    ids.extend(
        body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap()),
    );

    // the walk covered every row exactly once, in order
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_list_size_invariants() {
    let app = seeded_app().await;

    // len == min(limit, total_count - offset) while offset < total_count
    let (_, body) = get_json(&app, "/v1/ingredient/?offset=3&limit=2").await;
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["next_url"], Value::Null);

    // offset past the end: empty page, zero total
    let (_, body) = get_json(&app, "/v1/ingredient/?offset=10").await;
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_ingredient_detail() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/ingredient/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "onion");
    assert_eq!(body["type"], "base_vegetable");
    assert_eq!(body["links"]["self"], "/v1/ingredient/1");

    let (status, body) = get_json(&app, "/v1/ingredient/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_ingredient_create_and_conflict() {
    let app = seeded_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/ingredient/",
        json!({"name": "carrot", "type": "vegetable"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "carrot");
    assert_eq!(body["type"], "vegetable");

    // duplicate name violates the unique constraint
    let (status, body) = send_json(&app, "POST", "/v1/ingredient/", json!({"name": "onion"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // the rejected insert persisted nothing
    let (_, body) = get_json(&app, "/v1/ingredient/").await;
    assert_eq!(body["total_count"], 5);
}

#[tokio::test]
async fn test_ingredient_create_rejects_unknown_type() {
    let app = seeded_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/v1/ingredient/",
        json!({"name": "eggs", "type": "protein"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_ingredient_partial_update() {
    let app = seeded_app().await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/v1/ingredient/1",
        json!({"type": "vegetable"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // unset fields survive the partial update
    assert_eq!(body["name"], "onion");
    assert_eq!(body["type"], "vegetable");

    let (status, _) = send_json(&app, "PUT", "/v1/ingredient/99", json!({"name": "ghost"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_query_validation() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/ingredient/?limit=2001").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = get_json(&app, "/v1/ingredient/?type=protein").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) =
        get_json(&app, "/v1/ingredient_in_inventory/?purchased_on__le=not-a-date").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_inventory_list_with_date_filter() {
    let app = seeded_app().await;

    // onion has lots purchased 2017-07-01 and 2017-07-05
    let (status, body) = get_json(
        &app,
        "/v1/ingredient_in_inventory/?name=onion&purchased_on__le=2017-07-02",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["results"][0]["purchased_on"], "2017-07-01");
    assert_eq!(body["results"][0]["name"], "onion");
}

#[tokio::test]
async fn test_inventory_next_url_preserves_filters() {
    let app = seeded_app().await;

    let (_, body) = get_json(&app, "/v1/ingredient_in_inventory/?name=onion&limit=1").await;
    assert_eq!(body["total_count"], 2);
    let next = body["next_url"].as_str().unwrap().to_string();
    assert_eq!(next, "/v1/ingredient_in_inventory/?name=onion&limit=1&offset=1");

    let (_, body) = get_json(&app, &next).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["next_url"], Value::Null);
    // second page is the later purchase
    assert_eq!(body["results"][0]["purchased_on"], "2017-07-05");
}

#[tokio::test]
async fn test_inventory_detail_carries_links() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/ingredient_in_inventory/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "onion");
    assert_eq!(body["links"]["ingredient"], "/v1/ingredient/1");
    assert_eq!(
        body["links"]["ingredient_meal"],
        "/v1/ingredient_in_inventory/1/meal/"
    );
}

#[tokio::test]
async fn test_dish_nested_ingredient_listing() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/dish/1/ingredient/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
    assert_eq!(body["results"][0]["dish_name"], "mong bean rice");

    let (_, body) = get_json(&app, "/v1/dish/1/ingredient/?ingredient_name=rice").await;
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["results"][0]["ingredient_name"], "rice");
}

#[tokio::test]
async fn test_dish_nested_meal_listing() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/dish/1/meal/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    let row = &body["results"][0];
    assert_eq!(row["meal_type"], "lunch");
    assert_eq!(row["dish_name"], "mong bean rice");
    assert_eq!(row["consumed_on"], "2017-07-06");
}

#[tokio::test]
async fn test_lot_nested_meal_listing() {
    let app = seeded_app().await;

    // meal 1 consumed straight from lot 2 (an onion purchase)
    let (status, body) = get_json(&app, "/v1/ingredient_in_inventory/2/meal/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["results"][0]["ingredient_name"], "onion");

    let (_, body) = get_json(&app, "/v1/ingredient_in_inventory/1/meal/").await;
    assert_eq!(body["total_count"], 0);
}

#[tokio::test]
async fn test_meal_create_update_flow() {
    let app = seeded_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/meal/",
        json!({"type": "dinner", "description": "leftovers", "consumed_on": "2017-07-07"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "dinner");
    let meal_id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/v1/meal/{}", meal_id),
        json!({"description": "lunch leftovers"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "lunch leftovers");
    assert_eq!(body["type"], "dinner");
    assert_eq!(body["consumed_on"], "2017-07-07");

    let (status, _) = send_json(
        &app,
        "POST",
        "/v1/meal/",
        json!({"type": "brunch", "description": "x", "consumed_on": "2017-07-07"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_meal_dish_duplicate_pair_conflict() {
    let app = seeded_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/v1/meal_dish/",
        json!({"meal_id": 1, "dish_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // a fresh pair works
    let (status, body) = send_json(
        &app,
        "POST",
        "/v1/meal_dish/",
        json!({"meal_id": 1, "dish_id": 2, "quantity": 1.0, "unit": "serving"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["dish_name"], "fried mong bean rice");
    assert_eq!(body["links"]["meal"], "/v1/meal/1");
}

#[tokio::test]
async fn test_meal_ingredient_collection_and_detail() {
    let app = seeded_app().await;

    let (status, body) = get_json(&app, "/v1/meal_ingredient/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);

    let (status, body) = get_json(&app, "/v1/meal_ingredient/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingredient_name"], "onion");
    assert_eq!(
        body["links"]["ingredient_in_inventory"],
        "/v1/ingredient_in_inventory/2"
    );

    let (status, _) = get_json(&app, "/v1/meal_ingredient/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dish_ingredient_create_with_unknown_lot_is_conflict() {
    let app = seeded_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/v1/dish_ingredient/",
        json!({"dish_id": 2, "ingredient_id": 99}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/ingredient/")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
