use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

// Category id 0 stands for "any category".
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
    total_questions: usize,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> ApiResponse<Json<QuizQuestion>> {
    let request: QuizRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::BadRequest)?;

    let available = if request.quiz_category.id == 0 {
        questions::get_all_questions(&pool).await?
    } else {
        if categories::get_category(&pool, request.quiz_category.id)
            .await?
            .is_none()
        {
            return Err(ApiError::NotFound);
        }
        questions::get_questions_for_category(&pool, request.quiz_category.id).await?
    };

    let candidates: Vec<Question> = available
        .into_iter()
        .filter(|question| !request.previous_questions.contains(&question.id))
        .collect();

    let question = if candidates.is_empty() {
        None
    } else {
        let index = rand::thread_rng().gen_range(0..candidates.len());
        Some(candidates[index].clone())
    };
    if let Some(question) = &question {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[question.category.to_string().as_str()])
            .inc();
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
        total_questions: candidates.len(),
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
