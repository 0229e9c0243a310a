use axum::body::{to_bytes, Body};
use axum::extract::Query;
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["service"], "workshop_management");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_customer_returns_success_envelope() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/customer")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "name": "Anna Berg",
                        "email": "anna@example.com"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Anna Berg");
}

#[tokio::test]
async fn test_search_endpoint_filters_by_query() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/customer/search?q=volvo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let results = body.as_array().expect("la respuesta debe ser una lista");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Anna Berg");
}

#[tokio::test]
async fn test_search_endpoint_without_query_returns_all() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/customer/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/customer", post(create_customer))
        .route("/api/customer/search", get(search_customers))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "workshop_management",
        "status": "healthy"
    }))
}

async fn create_customer(Json(payload): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Cliente creado exitosamente",
        "data": payload
    }))
}

// Directorio fijo de dos clientes con la misma regla de substring en minúsculas
async fn search_customers(
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let customers = vec![
        json!({ "name": "Anna Berg", "vehicle_make": "Volvo" }),
        json!({ "name": "Bertil Ek", "vehicle_make": "Saab" }),
    ];

    let query = params.get("q").cloned().unwrap_or_default();
    if query.is_empty() {
        return Json(json!(customers));
    }

    let needle = query.to_lowercase();
    let matches: Vec<serde_json::Value> = customers
        .into_iter()
        .filter(|customer| {
            customer["name"]
                .as_str()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
                || customer["vehicle_make"]
                    .as_str()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect();

    Json(json!(matches))
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
