use std::fmt::Write;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Content-Type for Prometheus text format responses.
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Metrics endpoint for Prometheus scraping.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let config = state.config();
    let body = render_exposition(state.uptime_secs(), &config.version, &config.environment);

    ([(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body)
}

/// Renders the three metric blocks in Prometheus text exposition format.
///
/// `app_requests_total` stays fixed at 1 rather than tracking request volume;
/// the endpoint demonstrates the exposition format, not live instrumentation.
fn render_exposition(uptime_secs: u64, version: &str, environment: &str) -> String {
    let mut output = String::new();

    writeln!(output, "# HELP app_requests_total Total number of requests").ok();
    writeln!(output, "# TYPE app_requests_total counter").ok();
    writeln!(output, "app_requests_total 1").ok();
    writeln!(output).ok();
    writeln!(
        output,
        "# HELP app_uptime_seconds Application uptime in seconds"
    )
    .ok();
    writeln!(output, "# TYPE app_uptime_seconds gauge").ok();
    writeln!(output, "app_uptime_seconds {uptime_secs}").ok();
    writeln!(output).ok();
    writeln!(output, "# HELP app_info Application information").ok();
    writeln!(output, "# TYPE app_info gauge").ok();
    writeln!(
        output,
        "app_info{{version=\"{}\",environment=\"{}\"}} 1",
        escape_label_value(version),
        escape_label_value(environment)
    )
    .ok();

    output
}

/// Label values come from environment variables, so backslashes, quotes, and
/// newlines are escaped per the exposition format rules.
fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposition_contains_all_three_blocks() {
        let body = render_exposition(42, "1.0.0", "production");

        assert!(body.contains("# TYPE app_requests_total counter"));
        assert!(body.contains("app_requests_total 1"));
        assert!(body.contains("# TYPE app_uptime_seconds gauge"));
        assert!(body.contains("app_uptime_seconds 42"));
        assert!(body.contains("# TYPE app_info gauge"));
        assert!(body.contains("app_info{version=\"1.0.0\",environment=\"production\"} 1"));
    }

    #[test]
    fn label_values_are_escaped() {
        let body = render_exposition(0, "1.0\"0", "dev\\test\nline");

        assert!(body.contains(r#"version="1.0\"0""#));
        assert!(body.contains(r#"environment="dev\\test\nline""#));
    }
}
