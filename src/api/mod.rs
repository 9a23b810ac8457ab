//! API 路由模块

mod categories;
mod health;
mod questions;

pub use categories::category_routes;
pub use health::health_routes;
pub use questions::question_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(question_routes())
        .merge(category_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_shared_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let app = create_api_routes(create_shared_state());

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "AI Question Generation");
    }

    #[tokio::test]
    async fn test_generate_questions() {
        let (status, body) = call(
            Method::POST,
            "/generate-questions",
            Some(json!({
                "product_info": "Organic dark chocolate bar made with fair trade cocoa",
                "category": "food-beverage",
                "brand_name": "Cacao Co",
                "product_name": "Dark 70"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "food-beverage");
        assert_eq!(body["confidence"], 0.85);

        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 4);
        assert_eq!(
            questions[0],
            "For Dark 70 by Cacao Co: What are the main ingredients and their sources?"
        );
        assert_eq!(
            questions[3],
            "Based on your description of 'Organic dark chocolate bar made with fair trade co...', what additional details would help consumers make an informed decision?"
        );
    }

    #[tokio::test]
    async fn test_generate_questions_defaults_to_general() {
        let (status, body) = call(
            Method::POST,
            "/generate-questions",
            Some(json!({ "product_info": "tiny" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "general");
        assert_eq!(body["questions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_generate_questions_requires_product_info() {
        let (status, body) = call(
            Method::POST,
            "/generate-questions",
            Some(json!({ "category": "electronics" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "bad request");
    }

    #[tokio::test]
    async fn test_generate_batch_questions() {
        let (status, body) = call(
            Method::POST,
            "/generate-batch-questions",
            Some(json!([
                { "product_info": "Recycled polyester running jacket", "category": "fashion-apparel", "product_name": "Trail Shell" },
                { "product_info": "Mystery item" }
            ])),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["product"], "Trail Shell");
        assert_eq!(results[0]["category"], "fashion-apparel");
        assert_eq!(results[1]["product"], "Unknown Product");
        assert_eq!(results[1]["category"], "general");
        assert_eq!(results[1]["questions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_generate_batch_empty() {
        let (status, body) = call(Method::POST, "/generate-batch-questions", Some(json!([]))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "results": [] }));
    }

    #[tokio::test]
    async fn test_validate_questions() {
        let (status, body) = call(
            Method::POST,
            "/validate-questions",
            Some(json!(["Is safety okay?", "Hello"])),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let validated = body["validated_questions"].as_array().unwrap();
        assert_eq!(validated.len(), 2);

        assert_eq!(validated[0]["question"], "Is safety okay?");
        assert_eq!(validated[0]["score"], 1.0);
        assert_eq!(validated[0]["valid"], true);

        assert_eq!(validated[1]["question"], "Hello");
        assert_eq!(validated[1]["score"], 0.0);
        assert_eq!(
            validated[1]["issues"],
            json!(["Question too short", "Missing question mark"])
        );
        assert_eq!(validated[1]["valid"], false);
    }

    #[tokio::test]
    async fn test_validate_questions_rejects_non_list() {
        let (status, _) = call(
            Method::POST,
            "/validate-questions",
            Some(json!({ "questions": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let (status, body) = call(Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], "food-beverage");

        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0]["id"], "food-beverage");
        assert_eq!(categories[0]["label"], "Food & Beverage");
        assert_eq!(categories[0]["template_count"], 5);
    }
}
