mod common;

use common::{create_test_pool, seed_questions};
use trivia_api::db::queries::{categories, questions};
use trivia_api::db::{Category, Question};

#[tokio::test]
async fn migrations_seed_the_categories() {
    let pool = create_test_pool().await;

    let all = categories::get_all_categories(&pool).await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
}

#[tokio::test]
async fn get_category_misses_on_unknown_id() {
    let pool = create_test_pool().await;

    assert!(categories::get_category(&pool, 1).await.unwrap().is_some());
    assert!(categories::get_category(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn question_crud_roundtrip() {
    let pool = create_test_pool().await;

    let id = questions::create_question(&pool, "What is 1+1?", "2", 1, 1)
        .await
        .unwrap();
    let question = questions::get_question(&pool, id).await.unwrap().unwrap();
    assert_eq!(question.question, "What is 1+1?");
    assert_eq!(question.answer, "2");
    assert_eq!(question.category, 1);
    assert_eq!(question.difficulty, 1);

    questions::delete_question(&pool, id).await.unwrap();
    assert!(questions::get_question(&pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn questions_come_back_ordered() {
    let pool = create_test_pool().await;
    let ids = seed_questions(&pool).await;

    let all = questions::get_all_questions(&pool).await.unwrap();
    assert_eq!(all.len(), ids.len());
    let listed: Vec<i64> = all.iter().map(|q| q.id).collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
}

#[tokio::test]
async fn questions_filter_by_category() {
    let pool = create_test_pool().await;
    seed_questions(&pool).await;

    let in_category = questions::get_questions_for_category(&pool, 2)
        .await
        .unwrap();
    assert_eq!(in_category.len(), 5);
    assert!(in_category.iter().all(|q| q.category == 2));
}

#[tokio::test]
async fn search_is_a_substring_match() {
    let pool = create_test_pool().await;
    seed_questions(&pool).await;

    let hits = questions::search_questions(&pool, "caged bird").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].answer, "Maya Angelou");

    let hits = questions::search_questions(&pool, "Sample question").await.unwrap();
    assert_eq!(hits.len(), 11);

    let hits = questions::search_questions(&pool, "nothing like this").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn create_question_rejects_unknown_category() {
    let pool = create_test_pool().await;

    let result = questions::create_question(&pool, "orphan", "answer", 999, 1).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn import_keeps_explicit_ids() {
    let pool = create_test_pool().await;

    let imported_categories = vec![Category {
        id: 40,
        name: "Mythology".to_owned(),
    }];
    categories::import_categories(&pool, imported_categories)
        .await
        .unwrap();

    let imported_questions = vec![Question {
        id: 100,
        question: "Who stole fire from the gods?".to_owned(),
        answer: "Prometheus".to_owned(),
        category: 40,
        difficulty: 3,
    }];
    questions::import_questions(&pool, imported_questions)
        .await
        .unwrap();

    let category = categories::get_category(&pool, 40).await.unwrap().unwrap();
    assert_eq!(category.name, "Mythology");
    let question = questions::get_question(&pool, 100).await.unwrap().unwrap();
    assert_eq!(question.answer, "Prometheus");
    assert_eq!(question.category, 40);
}
