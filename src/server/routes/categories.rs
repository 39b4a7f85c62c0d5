use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::pagination::{paginate, parse_page};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[derive(Serialize)]
struct CategoriesList {
    categories: Vec<Category>,
    success: bool,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesList>> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoriesList {
        categories,
        success: true,
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<CategoryQuestions>> {
    if categories::get_category(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    let in_category = questions::get_questions_for_category(&pool, id).await?;

    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: in_category.len(),
        questions: paginate(&in_category, parse_page(query.page.as_deref())),
        current_category: id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
