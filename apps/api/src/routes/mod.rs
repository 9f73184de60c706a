pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::auth::handlers as auth;
use crate::config::Config;
use crate::matching::handlers as matching;
use crate::registry::handlers as registry;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth API
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route(
            "/api/v1/auth/password-reset",
            post(auth::handle_password_reset),
        )
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Registry API
        .route(
            "/api/v1/employees",
            get(registry::handle_list_employees).post(registry::handle_add_employee),
        )
        .route(
            "/api/v1/job-roles",
            get(registry::handle_list_job_roles).post(registry::handle_add_job_role),
        )
        // Matching API
        .route("/api/v1/matches", get(matching::handle_match_matrix))
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise limited to the listed origins.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(seed: bool) -> Router {
        let config = Config {
            seed_demo_data: seed,
            ..Config::default()
        };
        build_router(AppState::from_config(config))
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn raw_request(uri: &str, token: Option<&str>, body: &'static str) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn login(app: &Router, username: &str) -> String {
        let (status, body) = send(
            app,
            request(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({ "username": username, "password": "pw" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(false), request(Method::GET, "/health", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["scoring_mode"], "occurrence");
        assert_eq!(body["seeded"], false);
    }

    #[tokio::test]
    async fn test_unauthenticated_post_with_bad_body_is_401() {
        let (status, body) = send(
            &app(false),
            raw_request("/api/v1/employees", None, r#"{"name":"Taro"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_bad_body_uses_error_envelope() {
        let app = app(false);
        let token = login(&app, "admin").await;

        let (status, body) = send(
            &app,
            raw_request("/api/v1/employees", Some(&token), r#"{"name":"Taro"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("skills"));

        let (status, body) = send(&app, raw_request("/api/v1/auth/login", None, "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_lowercase_bearer_scheme_accepted() {
        let app = app(false);
        let token = login(&app, "bob").await;
        let req = Request::builder()
            .uri("/api/v1/auth/me")
            .header(header::AUTHORIZATION, format!("bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_repeated_logins_keep_session_store_bounded() {
        let state = AppState::from_config(Config {
            seed_demo_data: false,
            max_sessions: 50,
            ..Config::default()
        });
        let app = build_router(state.clone());
        for _ in 0..1000 {
            login(&app, "bob").await;
        }
        assert_eq!(state.sessions.len().await, 50);
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let config = Config {
            cors_allowed_origins: vec!["http://ok.example".into(), "bad\norigin".into()],
            ..Config::default()
        };
        let err = cors_layer(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid CORS origin"));

        let config = Config {
            cors_allowed_origins: vec!["http://localhost:5173".into()],
            ..Config::default()
        };
        assert!(cors_layer(&config).is_ok());
        assert!(cors_layer(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn test_matches_require_login() {
        let (status, body) =
            send(&app(true), request(Method::GET, "/api/v1/matches", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_login_reports_role() {
        let app = app(false);
        let (_, admin) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({ "username": "admin", "password": "anything" })),
            ),
        )
        .await;
        assert_eq!(admin["user"]["role"], "admin");

        let token = login(&app, "bob").await;
        let (status, me) = send(&app, request(Method::GET, "/api/v1/auth/me", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["user"]["role"], "employee");
        assert_eq!(me["can_edit"], false);
    }

    #[tokio::test]
    async fn test_employee_cannot_add_records() {
        let app = app(false);
        let token = login(&app, "bob").await;
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/employees",
                Some(&token),
                Some(json!({ "name": "Taro", "skills": "x" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let (_, list) = send(&app, request(Method::GET, "/api/v1/employees", Some(&token), None)).await;
        assert_eq!(list.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_admin_adds_and_matrix_reflects_it() {
        let app = app(false);
        let token = login(&app, "admin").await;

        let (status, employee) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/employees",
                Some(&token),
                Some(json!({ "name": "Taro", "skills": " a , b " })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(employee["id"], 1);
        assert_eq!(employee["skills"], json!(["a", "b"]));

        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/job-roles",
                Some(&token),
                Some(json!({ "title": "Dev", "skills": "a,b,c" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, matrix) =
            send(&app, request(Method::GET, "/api/v1/matches", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(matrix["scorer"], "occurrence");
        let score = matrix["rows"][0]["scores"][0]["score"].as_f64().unwrap();
        assert!((score - 66.67).abs() < 0.01, "Score was {score}");
        assert_eq!(matrix["series"][0]["job_role_id"], 1);
        assert!(matrix["series"][0]["color"].as_str().unwrap().starts_with('#'));
    }

    #[tokio::test]
    async fn test_empty_job_role_skills_rejected() {
        let app = app(false);
        let token = login(&app, "admin").await;
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/job-roles",
                Some(&token),
                Some(json!({ "title": "Dev", "skills": " , " })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_register_mismatch_returns_validation_error() {
        let app = app(false);
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({ "username": "carol", "password": "a", "confirm_password": "b" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("do not match"));
    }

    #[tokio::test]
    async fn test_password_reset_returns_notice() {
        let app = app(false);
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/v1/auth/password-reset",
                None,
                Some(json!({ "email": "taro@example.com" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "taro@example.com");
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app = app(true);
        let token = login(&app, "admin").await;
        let (status, _) =
            send(&app, request(Method::POST, "/api/v1/auth/logout", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, request(Method::GET, "/api/v1/matches", Some(&token), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_seeded_matrix() {
        let app = app(true);
        let token = login(&app, "bob").await;
        let (_, matrix) = send(&app, request(Method::GET, "/api/v1/matches", Some(&token), None)).await;
        let rows = matrix["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["scores"][0]["score"], 100.0);
        assert_eq!(rows[0]["scores"][1]["score"], 0.0);
    }
}
