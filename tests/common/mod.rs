use sqlx::SqlitePool;
use trivia_api::db;
use trivia_api::db::queries::questions;

pub async fn create_test_pool() -> SqlitePool {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("trivia_test.db");
    let pool = db::establish_connection(path.to_str().unwrap())
        .await
        .expect("failed to open test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    // The directory has to outlive the pool.
    std::mem::forget(dir);
    pool
}

// Twelve questions spread over the first three seeded categories, so listings
// span two pages.
#[allow(dead_code)]
pub async fn seed_questions(pool: &SqlitePool) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..11_i64 {
        let id = questions::create_question(
            pool,
            format!("Sample question {}", i + 1).as_str(),
            format!("Sample answer {}", i + 1).as_str(),
            (i % 3) + 1,
            (i % 5) + 1,
        )
        .await
        .expect("failed to seed question");
        ids.push(id);
    }
    let id = questions::create_question(
        pool,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        2,
        4,
    )
    .await
    .expect("failed to seed question");
    ids.push(id);
    ids
}
