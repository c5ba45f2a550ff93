//! Request handlers for the four public routes.

pub mod health;
pub mod home;
pub mod info;
pub mod metrics;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "devops-project";

/// Human-readable application name reported by the homepage and info endpoint.
pub const APPLICATION_NAME: &str = "DevOps Project - Resume Demo";

/// Static path and description for every route the service exposes.
pub const ENDPOINTS: [(&str, &str); 4] = [
    ("/", "Homepage"),
    ("/health", "Health check"),
    ("/api/info", "API information"),
    ("/api/metrics", "Application metrics"),
];
