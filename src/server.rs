use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::i18n::{request_config, Locale};
use crate::layout::{admin_layout, document, ADMIN_METADATA};
use crate::pages::{self, RouteParams};
use crate::platform::PlatformConfig;
use crate::view::Node;

pub struct AppState {
    pub messages_dir: PathBuf,
}

/// Build the application router.
pub fn build_router(messages_dir: PathBuf) -> Router {
    let state = Arc::new(AppState { messages_dir });

    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/platform", get(handle_platform))
        .route("/:locale/admin", get(handle_index))
        .route("/:locale/admin/categories", get(handle_categories))
        .route("/:locale/admin/products", get(handle_products))
        .fallback(handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let app = build_router(config.messages_dir.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Admin console listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Run the request-configuration hook, then render a page inside the admin
/// layout.
async fn render_page<F, Fut>(
    state: &AppState,
    requested: &str,
    page: F,
) -> Result<Html<String>, AppError>
where
    F: FnOnce(std::future::Ready<Result<RouteParams, AppError>>) -> Fut,
    Fut: Future<Output = Result<Node, AppError>>,
{
    let ctx = request_config(&state.messages_dir, requested).await?;
    let params = std::future::ready(Ok(RouteParams { locale: ctx.locale }));
    let tree = admin_layout(page(params).await?);
    Ok(Html(document(&ADMIN_METADATA, &ctx, &tree.to_html(&ctx))))
}

async fn handle_root() -> Redirect {
    Redirect::temporary(&format!("/{}/admin", Locale::DEFAULT.code()))
}

async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_platform() -> impl IntoResponse {
    Json(PlatformConfig::get())
}

async fn handle_index(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, pages::index_page).await
}

async fn handle_categories(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, pages::categories_page).await
}

async fn handle_products(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &locale, pages::products_page).await
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
