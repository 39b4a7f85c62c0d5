use axum::body::Body;
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use axum::{extract::FromRef, extract::State, routing::get, Json, Router};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::{self, category_router, questions_router, quizzes_router};
use crate::db::queries::{categories, questions};

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
}

pub fn app(pool: SqlitePool) -> Router {
    let state = AppState { pool };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .with_state(state.clone())
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quizzes_router(state))
        .fallback(|| async { routes::error_response(StatusCode::NOT_FOUND) })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool, addr: &str) -> anyhow::Result<()> {
    let app = app(pool);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Serialize)]
struct IndexPage {
    questions: &'static str,
    categories: &'static str,
    total_questions: usize,
    total_categories: usize,
}

async fn index(State(pool): State<SqlitePool>) -> routes::ApiResponse<Json<IndexPage>> {
    let questions = questions::get_all_questions(&pool).await?;
    let categories = categories::get_all_categories(&pool).await?;

    Ok(Json(IndexPage {
        questions: "/questions",
        categories: "/categories",
        total_questions: questions.len(),
        total_categories: categories.len(),
    }))
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder.encode(&metrics, &mut buf).unwrap();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(Body::from(buf))
        .unwrap()
}
