use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use carousel_core::api::API_IMAGES_PATH;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::ListingError;
use crate::listing::list_images;

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
///
/// `GET /api/images` lists the image directory; every other path is looked
/// up under the public root.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route(API_IMAGES_PATH, get(images))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let state = AppState::new(config);
    info!(
        public_dir = %state.config.public_dir.display(),
        images_dir = %state.config.images_dir().display(),
        "serving carousel"
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind listener on {addr}"))?;
    info!(%addr, "server listening");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited")?;
    info!("server stopped");
    Ok(())
}

async fn images(State(state): State<AppState>) -> Result<Json<Vec<String>>, ListingError> {
    let dir = state.config.images_dir();
    match list_images(&dir).await {
        Ok(names) => {
            debug!(count = names.len(), "listed image directory");
            Ok(Json(names))
        }
        Err(err) => {
            warn!(error = ?err, dir = %dir.display(), "image listing unavailable");
            Err(err)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.ok();
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut term) = signal(SignalKind::terminate()) {
            term.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use carousel_core::api::ErrorBody;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(public_dir: &Path) -> Router {
        router(AppState::new(ServerConfig {
            public_dir: public_dir.to_path_buf(),
            ..ServerConfig::default()
        }))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_images_returns_names() {
        let public = TempDir::new().unwrap();
        let images = public.path().join("images");
        fs::create_dir(&images).unwrap();
        fs::write(images.join("a.png"), b"png").unwrap();
        fs::write(images.join("notes.txt"), b"txt").unwrap();

        let response = app(public.path())
            .oneshot(get_request("/api/images"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let mut names: Vec<String> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.png", "notes.txt"]);
    }

    #[tokio::test]
    async fn test_images_empty_directory() {
        let public = TempDir::new().unwrap();
        fs::create_dir(public.path().join("images")).unwrap();

        let response = app(public.path())
            .oneshot(get_request("/api/images"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"[]");
    }

    #[tokio::test]
    async fn test_images_missing_directory_is_server_error() {
        let public = TempDir::new().unwrap();

        let response = app(public.path())
            .oneshot(get_request("/api/images"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, ErrorBody::listing_unavailable());
    }

    #[tokio::test]
    async fn test_serves_static_files_verbatim() {
        let public = TempDir::new().unwrap();
        let images = public.path().join("images");
        fs::create_dir(&images).unwrap();
        fs::write(images.join("stamp.png"), b"\x89PNG raw bytes").unwrap();
        fs::write(public.path().join("index.html"), b"<div id=\"app\"></div>").unwrap();

        let response = app(public.path())
            .oneshot(get_request("/images/stamp.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(body_bytes(response).await, b"\x89PNG raw bytes");

        let response = app(public.path())
            .oneshot(get_request("/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<div id=\"app\"></div>");
    }

    #[tokio::test]
    async fn test_unknown_static_path_is_not_found() {
        let public = TempDir::new().unwrap();

        let response = app(public.path())
            .oneshot(get_request("/images/missing.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
