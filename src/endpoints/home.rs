use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::state::AppState;

/// Homepage template. The `{hostname}`, `{environment}`, `{version}`, and
/// `{time}` placeholders are filled with HTML-escaped values at render time.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>DevOps Project - Resume Demo</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }
        .container {
            background: rgba(255, 255, 255, 0.1);
            padding: 30px;
            border-radius: 10px;
            backdrop-filter: blur(10px);
        }
        h1 { color: #fff; }
        .info { margin: 20px 0; }
        .status {
            display: inline-block;
            padding: 5px 15px;
            background: #4CAF50;
            border-radius: 20px;
            font-weight: bold;
        }
        .endpoint {
            background: rgba(0, 0, 0, 0.2);
            padding: 10px;
            border-radius: 5px;
            margin: 10px 0;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#x1F680; DevOps Project - Resume Demo</h1>
        <div class="info">
            <p><strong>Status:</strong> <span class="status">Running</span></p>
            <p><strong>Hostname:</strong> {hostname}</p>
            <p><strong>Environment:</strong> {environment}</p>
            <p><strong>Version:</strong> {version}</p>
            <p><strong>Current Time:</strong> {time}</p>
        </div>
        <h2>Available Endpoints:</h2>
        <div class="endpoint">
            <strong>GET /</strong> - This homepage
        </div>
        <div class="endpoint">
            <strong>GET /health</strong> - Health check endpoint
        </div>
        <div class="endpoint">
            <strong>GET /api/info</strong> - API information
        </div>
        <div class="endpoint">
            <strong>GET /api/metrics</strong> - Application metrics
        </div>
    </div>
</body>
</html>
"#;

/// Homepage endpoint.
pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let config = state.config();

    Html(render_homepage(
        state.hostname(),
        &config.environment,
        &config.version,
        &time,
    ))
}

fn render_homepage(hostname: &str, environment: &str, version: &str, time: &str) -> String {
    HTML_TEMPLATE
        .replace("{hostname}", &escape_html(hostname))
        .replace("{environment}", &escape_html(environment))
        .replace("{version}", &escape_html(version))
        .replace("{time}", &escape_html(time))
}

/// Escapes the characters that would let environment-variable content inject
/// markup into the rendered page.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
