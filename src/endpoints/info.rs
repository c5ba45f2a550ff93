use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{APPLICATION_NAME, ENDPOINTS};
use crate::state::AppState;

/// Toolchain version baked in by `build.rs`; the counterpart of reporting a
/// runtime interpreter version.
const RUSTC_VERSION: &str = env!("BUILD_RUSTC_VERSION");

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub application: String,
    pub version: String,
    pub environment: String,
    pub hostname: String,
    pub rust_version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// API information endpoint.
pub async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let config = state.config();
    let endpoints = ENDPOINTS
        .iter()
        .map(|(path, description)| ((*path).to_owned(), (*description).to_owned()))
        .collect();

    Json(InfoResponse {
        application: APPLICATION_NAME.to_owned(),
        version: config.version.clone(),
        environment: config.environment.clone(),
        hostname: state.hostname().to_owned(),
        rust_version: RUSTC_VERSION.to_owned(),
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn describes_every_route() {
        let config = AppConfig::builder()
            .environment("staging")
            .version("4.5.6")
            .build();
        let state = Arc::new(AppState::new(config));

        let Json(body) = info(State(state)).await;

        assert_eq!(body.application, "DevOps Project - Resume Demo");
        assert_eq!(body.version, "4.5.6");
        assert_eq!(body.environment, "staging");
        assert_eq!(body.endpoints.len(), 4);
        assert_eq!(body.endpoints.get("/").map(String::as_str), Some("Homepage"));
        assert_eq!(
            body.endpoints.get("/api/metrics").map(String::as_str),
            Some("Application metrics")
        );
    }
}
