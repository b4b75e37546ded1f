//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. Malformed transport-level input
//! (non-numeric ids, invalid JSON bodies) is rejected here by the
//! extractors with a client error; the diagnosis core never sees it.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with all routes under `/api/`.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route(
            "/patients/:id",
            get(endpoints::patients::detail).delete(endpoints::patients::remove),
        )
        .route("/diagnosis", post(endpoints::diagnosis::predict))
        .with_state(ctx);

    Router::new().nest("/api", routes)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::db::{open_memory_database, PatientStore};
    use crate::diagnosis::{DiagnosisEngine, KnowledgeBase};

    fn test_router() -> Router {
        let store = Arc::new(PatientStore::new(open_memory_database().unwrap()));
        let engine = Arc::new(DiagnosisEngine::new(Arc::new(KnowledgeBase::builtin())));
        api_router(ApiContext::new(store, engine))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_condition_count() {
        let response = test_router().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["conditions"], 8);
    }

    #[tokio::test]
    async fn create_then_fetch_patient() {
        let router = test_router();

        let created = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/patients",
                r#"{
                    "name": "John Smith",
                    "age": 45,
                    "gender": "Male",
                    "blood_group": "O+",
                    "medical_history": "History of hypertension",
                    "symptoms": ["headache", "dizziness", "chest pain"],
                    "diagnosis": "Hypertension",
                    "confidence_score": 78.5
                }"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        let id = created["id"].as_i64().unwrap();
        assert!(id >= 1);

        let fetched = router
            .oneshot(get_request(&format!("/api/patients/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched = body_json(fetched).await;
        assert_eq!(fetched["name"], "John Smith");
        assert_eq!(fetched["symptoms"][0], "headache");
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let router = test_router();
        for name in ["A", "B"] {
            let response = router
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/patients",
                    &format!(r#"{{ "name": "{name}" }}"#),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = router.oneshot(get_request("/api/patients")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_patient_is_404() {
        let response = test_router()
            .oneshot(get_request("/api/patients/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_id_is_client_error() {
        let response = test_router()
            .oneshot(get_request("/api/patients/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_missing_patient_is_404() {
        let router = test_router();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/patients/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_existing_patient_then_gone() {
        let router = test_router();
        let created = router
            .clone()
            .oneshot(json_request("POST", "/api/patients", r#"{ "name": "A" }"#))
            .await
            .unwrap();
        let id = body_json(created).await["id"].as_i64().unwrap();

        let deleted = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/patients/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);

        let fetched = router
            .oneshot(get_request(&format!("/api/patients/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn diagnosis_returns_ordered_candidates() {
        let response = test_router()
            .oneshot(json_request(
                "POST",
                "/api/diagnosis",
                r#"{
                    "name": "John Smith",
                    "age": 65,
                    "medical_history": "history of hypertension",
                    "symptoms": ["headache", "dizziness", "chest pain"]
                }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let candidates = json.as_array().unwrap();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0]["disease"], "Hypertension");

        let mut last = f64::MAX;
        for candidate in candidates {
            let p = candidate["probability"].as_f64().unwrap();
            assert!(p > 0.0 && p <= 99.0);
            assert!(p <= last);
            last = p;
        }
    }

    #[tokio::test]
    async fn diagnosis_with_no_symptoms_is_empty_list() {
        let response = test_router()
            .oneshot(json_request(
                "POST",
                "/api/diagnosis",
                r#"{ "name": "Nobody", "symptoms": [] }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }
}
