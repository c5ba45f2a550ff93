use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::endpoints::{health, home, info, metrics};
use crate::error::Result;
use crate::state::AppState;

/// Builds the application router over shared read-only state.
///
/// Unknown paths fall through to Axum's default 404 handler.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health))
        .route("/api/info", get(info::info))
        .route("/api/metrics", get(metrics::metrics))
        .with_state(state)
}

/// Serves the four routes with the provided configuration.
///
/// The shared state, including the start instant used for the uptime gauge, is
/// captured before the listener accepts its first request.
pub async fn serve(config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config.clone()));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "devops-project listening");

    let service = router(state).into_make_service();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .into_future()
        .await?;

    tracing::info!("devops-project shut down");

    Ok(())
}

/// Loads [`AppConfig`] from the environment and starts serving.
pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    serve(config).await
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::DateTime;

    use super::*;
    use crate::endpoints::health::HealthResponse;
    use crate::endpoints::info::InfoResponse;

    fn test_server() -> TestServer {
        let config = AppConfig::builder()
            .environment("test")
            .version("9.9.9")
            .build();
        let state = Arc::new(AppState::new(config));
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn homepage_returns_ok_with_project_name() {
        let server = test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_text_contains("DevOps Project");
        assert!(
            response
                .header("content-type")
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }

    #[tokio::test]
    async fn health_reports_healthy_with_parseable_timestamp() {
        let server = test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "devops-project");
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn health_body_uses_exact_wire_field_names() {
        let server = test_server();

        let body: serde_json::Value = server.get("/health").await.json();

        let object = body.as_object().expect("health body should be an object");
        assert_eq!(object.len(), 3);
        assert_eq!(object["status"], "healthy");
        assert_eq!(object["service"], "devops-project");
        assert!(object["timestamp"].is_string());
    }

    #[tokio::test]
    async fn info_lists_all_four_endpoints() {
        let server = test_server();

        let response = server.get("/api/info").await;

        response.assert_status_ok();
        let body: InfoResponse = response.json();
        assert_eq!(body.application, "DevOps Project - Resume Demo");
        assert_eq!(body.version, "9.9.9");
        assert_eq!(body.environment, "test");
        assert_eq!(body.endpoints.len(), 4);
    }

    #[tokio::test]
    async fn metrics_exposes_prometheus_text() {
        let server = test_server();

        let response = server.get("/api/metrics").await;

        response.assert_status_ok();
        assert!(
            response
                .header("content-type")
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        response.assert_text_contains("app_requests_total");
        response.assert_text_contains("app_uptime_seconds");
        response.assert_text_contains("app_info{version=\"9.9.9\",environment=\"test\"} 1");
    }

    #[tokio::test]
    async fn uptime_gauge_is_monotonic_within_a_process() {
        let server = test_server();

        let first = read_uptime(&server.get("/api/metrics").await.text());
        let second = read_uptime(&server.get("/api/metrics").await.text());

        assert!(second >= first);
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let server = test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
    }

    fn read_uptime(body: &str) -> u64 {
        body.lines()
            .find(|line| line.starts_with("app_uptime_seconds "))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|value| value.parse().ok())
            .expect("metrics body should contain an uptime sample")
    }
}
