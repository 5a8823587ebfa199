/// HTTP router: JSON API under `/api`, web UI everywhere else
use crate::{api, error::ServerError, state::AppState};
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, OriginalUri},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// API routes, relative to `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api::health::health))
        // Artwork
        .route("/artwork/extract", post(api::artwork::extract))
        // Turntable
        .route("/player", get(api::player::get_player))
        .route("/player/upload", post(api::player::upload))
        .route(
            "/player/artwork",
            post(api::player::set_artwork).delete(api::player::clear_artwork),
        )
        .route("/player/toggle", post(api::player::toggle))
        .route("/player/audio", get(api::player::audio))
        .route("/player/save", post(api::player::save))
        .route("/player/load/:id", post(api::player::load_record))
        // Collection
        .route(
            "/records",
            get(api::records::list_records).delete(api::records::clear_records),
        )
        .route(
            "/records/:id",
            get(api::records::get_record).delete(api::records::delete_record),
        )
        // Settings
        .route(
            "/settings",
            get(api::settings::get_settings).put(api::settings::update_settings),
        )
        // Unknown API paths get a JSON 404, never the web UI
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::NotFound(format!("No API route for {}", uri.path()))
}

/// Full application router
///
/// Paths outside `/api` are served from `web_dir`, falling back to
/// `index.html` for client-side routes and 404 when there is no web UI.
pub fn create_router(app_state: AppState, web_dir: PathBuf, max_upload_bytes: usize) -> Router {
    let spa_fallback = move |req: Request<Body>| {
        let web_dir = web_dir.clone();
        async move {
            // Try to serve the file directly
            let path = req.uri().path().trim_start_matches('/');
            let file_path = web_dir.join(path);

            if !path.is_empty() && file_path.is_file() {
                match ServeDir::new(&web_dir).oneshot(req).await {
                    Ok(res) => res.into_response(),
                    Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                }
            } else {
                // SPA fallback: serve index.html
                match tokio::fs::read(web_dir.join("index.html")).await {
                    Ok(contents) => (
                        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                        contents,
                    )
                        .into_response(),
                    // No web UI available
                    Err(_) => StatusCode::NOT_FOUND.into_response(),
                }
            }
        }
    };

    Router::new()
        .nest("/api", api_routes())
        .fallback(spa_fallback)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
