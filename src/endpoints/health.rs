use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::SERVICE_NAME;

/// Body returned to liveness and readiness probes.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Health check endpoint for Kubernetes/Docker probes.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        timestamp: Local::now().to_rfc3339(),
        service: SERVICE_NAME.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[tokio::test]
    async fn reports_healthy_with_parseable_timestamp() {
        let Json(body) = health().await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "devops-project");
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
