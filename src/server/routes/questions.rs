use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::pagination::{next_page_url, paginate, parse_page, QUESTIONS_PER_PAGE};
use crate::telemetry::QUESTION_CREATED_CNTR;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuestionsQuery {
    page: Option<String>,
    search: Option<String>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    list_of_questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
    items_per_page: usize,
    next_page: String,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
    question_deleted: i64,
    questions: Vec<Question>,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    question_created: i64,
    questions: Vec<Question>,
    total_questions: usize,
    search: Option<String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    search: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<QuestionsQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let page = parse_page(query.page.as_deref());
    let all_questions = questions::get_all_questions(&pool).await?;
    let current = paginate(&all_questions, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = categories::get_all_categories(&pool).await?;
    let remainder = all_questions.len() % QUESTIONS_PER_PAGE;

    Ok(Json(QuestionsPage {
        success: true,
        next_page: next_page_url(current.len(), page, remainder),
        total_questions: all_questions.len(),
        list_of_questions: current,
        categories,
        items_per_page: QUESTIONS_PER_PAGE,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<QuestionDeleted>> {
    if questions::get_question(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    questions::delete_question(&pool, id).await?;
    let remaining = questions::get_all_questions(&pool).await?;

    Ok(Json(QuestionDeleted {
        success: true,
        question_deleted: id,
        questions: remaining,
    }))
}

// POST /questions doubles as the search endpoint when the `search` query
// parameter is present, so the body is only parsed on the create branch.
async fn create_or_search_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<QuestionsQuery>,
    body: Bytes,
) -> ApiResponse<Response> {
    let page = parse_page(query.page.as_deref());
    match query.search {
        Some(term) if !term.is_empty() => {
            let matches = questions::search_questions(&pool, &term).await?;
            Ok(Json(SearchResults {
                success: true,
                total_questions: matches.len(),
                questions: paginate(&matches, page),
                search: Some(term),
            })
            .into_response())
        }
        Some(_) => {
            let all_questions = questions::get_all_questions(&pool).await?;
            Ok(Json(SearchResults {
                success: true,
                total_questions: all_questions.len(),
                questions: paginate(&all_questions, page),
                search: None,
            })
            .into_response())
        }
        None => {
            let new_question: NewQuestion =
                serde_json::from_slice(&body).map_err(|_| ApiError::Unprocessable)?;
            let id = questions::create_question(
                &pool,
                &new_question.question,
                &new_question.answer,
                new_question.category,
                new_question.difficulty,
            )
            .await?;
            QUESTION_CREATED_CNTR.inc();

            let all_questions = questions::get_all_questions(&pool).await?;
            Ok(Json(QuestionCreated {
                success: true,
                question_created: id,
                questions: paginate(&all_questions, page),
                total_questions: all_questions.len(),
                search: None,
            })
            .into_response())
        }
    }
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions).post(create_or_search_questions),
        )
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
