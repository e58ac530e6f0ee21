use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn build(state: Arc<crate::AppState>) -> Router {
    Router::new()
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup).delete(handlers::activities::unregister),
        )
        .route("/health", get(handlers::health::get))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use mergington::data::ErrorDetail;
    use mergington::serde_json::{self, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build(Arc::new(crate::AppState::new()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        (status, body_json(response).await)
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        (status, body_json(response).await)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn first_participant(activities: &Value, name: &str) -> String {
        activities[name]["participants"][0]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn get_activities_returns_data() {
        let (status, body) = get_json(app(), "/activities").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("Chess Club").is_some());
        assert!(body.get("Programming Class").is_some());
    }

    #[tokio::test]
    async fn signup_adds_participant() {
        let app = app();

        let (status, _) = send(
            app.clone(),
            "POST",
            "/activities/Science%20Club/signup?email=new.student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_json(app, "/activities").await;
        assert_eq!(
            body["Science Club"]["participants"],
            serde_json::json!(["new.student@mergington.edu"])
        );
    }

    #[tokio::test]
    async fn signup_rejects_duplicate() {
        let app = app();
        let (_, activities) = get_json(app.clone(), "/activities").await;
        let email = first_participant(&activities, "Chess Club");

        let (status, body) = send(
            app,
            "POST",
            &format!("/activities/Chess%20Club/signup?email={email}"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorDetail = serde_json::from_value(body).unwrap();
        assert_eq!(error.detail, "Student already signed up for this activity");
    }

    #[tokio::test]
    async fn signup_unknown_activity_returns_404() {
        let (status, body) = send(
            app(),
            "POST",
            "/activities/Knitting%20Circle/signup?email=amy@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn delete_removes_participant() {
        let app = app();
        let (_, activities) = get_json(app.clone(), "/activities").await;
        let email = first_participant(&activities, "Gym Class");

        let (status, _) = send(
            app.clone(),
            "DELETE",
            &format!("/activities/Gym%20Class/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_json(app, "/activities").await;
        let remaining = body["Gym Class"]["participants"].as_array().unwrap();
        assert!(!remaining.iter().any(|p| *p == email.as_str()));
    }

    #[tokio::test]
    async fn delete_missing_participant_returns_404() {
        let (status, body) = send(
            app(),
            "DELETE",
            "/activities/Drama%20Club/signup?email=absent@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorDetail = serde_json::from_value(body).unwrap();
        assert_eq!(error.detail, "Student not found in this activity");
    }

    #[tokio::test]
    async fn delete_unknown_activity_returns_404() {
        let (status, body) = send(
            app(),
            "DELETE",
            "/activities/Knitting%20Circle/signup?email=amy@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = get_json(app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["roster"], "up");
        assert_eq!(body["services"]["activities"], 10);
    }
}
