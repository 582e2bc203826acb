//! Web router using Axum

use axum::{extract::State, response::Html, routing::get, Json, Router};
use chrono::Datelike;
use nebula_core::{catalog, Catalog, SiteConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

/// Shared server state
#[derive(Debug)]
pub struct AppState {
    pub config: SiteConfig,
}

/// Create the web router
///
/// Serves the built front-end from `dist` when it contains an `index.html`,
/// otherwise a page with build instructions.
pub fn create_router(config: SiteConfig, dist: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState { config });

    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/config", get(config_handler))
        .route("/api/content", get(content_handler));

    let router = match dist.and_then(built_index) {
        Some((dir, index)) => {
            info!("Serving front-end from {}", dir.display());
            api.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => {
            if let Some(dir) = dist {
                warn!(
                    "No index.html in {}, serving build instructions",
                    dir.display()
                );
            }
            api.route("/", get(setup_handler))
        }
    };

    router.layer(cors).with_state(state)
}

fn built_index(dir: &Path) -> Option<(PathBuf, PathBuf)> {
    let index = dir.join("index.html");
    index.is_file().then(|| (dir.to_path_buf(), index))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn config_handler(State(state): State<Arc<AppState>>) -> Json<SiteConfig> {
    Json(state.config.clone())
}

async fn content_handler() -> Json<Catalog> {
    Json(catalog())
}

async fn setup_handler() -> Html<String> {
    let year = chrono::Utc::now().year();
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nebula Motors - Build Required</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: #000;
            color: #fff;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }}
        .setup-message {{ max-width: 600px; padding: 2rem; border: 1px solid #ffd700; }}
        h1 {{ color: #ffd700; margin-bottom: 1rem; }}
        p, li {{ line-height: 1.6; margin-bottom: 0.5rem; }}
        code {{ background: #222; padding: 0.1rem 0.4rem; font-family: monospace; }}
        a {{ color: #ffd700; }}
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>NEBULA MOTORS - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the page can be displayed.</p>
        <ol style="margin-left: 1.5rem;">
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/nebula-web && trunk build --release</code></li>
            <li>Restart server: <code>nebula serve --dist crates/nebula-web/dist</code></li>
        </ol>
        <p>API: <a href="/api/health">/api/health</a>, <a href="/api/config">/api/config</a>, <a href="/api/content">/api/content</a></p>
        <p>&copy; {year} Nebula Motors</p>
    </div>
</body>
</html>"#
    ))
}
