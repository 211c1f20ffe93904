use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::store::QuestionStore;
use crate::structs::assessment::AssessmentResult;
use crate::structs::question::{NewQuestion, Question};

const CREATE_QUESTIONS: &str = "CREATE TABLE IF NOT EXISTS questions (
    id             SERIAL PRIMARY KEY,
    question       TEXT NOT NULL,
    option1        TEXT NOT NULL,
    option2        TEXT NOT NULL,
    option3        TEXT NOT NULL,
    option4        TEXT NOT NULL,
    correct_answer INTEGER NOT NULL CHECK (correct_answer >= 0 AND correct_answer <= 3),
    level          VARCHAR(50) NOT NULL,
    created_at     TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_ASSESSMENTS: &str = "CREATE TABLE IF NOT EXISTS assessments (
    id              SERIAL PRIMARY KEY,
    level           VARCHAR(50) NOT NULL,
    total_time      INTEGER NOT NULL,
    pass_percentage INTEGER NOT NULL,
    score           INTEGER,
    total_questions INTEGER,
    percentage      NUMERIC(5,2),
    passed          BOOLEAN,
    created_at      TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// PostgreSQL-backed store. Every operation checks a connection out of the pool
/// and returns it when the guard drops.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<PgStore, sqlx::Error> {
        log::info!(
            "connecting to database {}@{}:{}/{}",
            config.user,
            config.host,
            config.port,
            config.name
        );
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(config.connect_options())
            .await
            .map_err(|e| {
                log::error!("failed to create connection pool: {:?}", e);
                e
            })?;
        Ok(PgStore::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> PgStore {
        PgStore { pool }
    }

    /// Creates the tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        for statement in [CREATE_QUESTIONS, CREATE_ASSESSMENTS] {
            sqlx::query(statement).execute(&mut *conn).await.map_err(|e| {
                log::error!("failed to create tables: {:?}", e);
                e
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn list_levels(&self) -> Result<Vec<String>, AppError> {
        let mut conn = self.pool.acquire().await?;
        // Byte-wise order regardless of the database's default collation
        let levels = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT level COLLATE "C" AS level FROM questions ORDER BY level"#,
        )
            .fetch_all(&mut *conn)
            .await?;
        Ok(levels)
    }

    async fn bulk_insert(&self, rows: Vec<Vec<String>>) -> Result<u64, AppError> {
        let mut conn = self.pool.acquire().await?;
        let mut inserted = 0;
        for (i, row) in rows.iter().enumerate() {
            let Some(question) = NewQuestion::from_record(i + 1, row)? else {
                continue;
            };
            sqlx::query(
                "INSERT INTO questions (question, option1, option2, option3, option4, correct_answer, level)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&question.question)
            .bind(&question.options[0])
            .bind(&question.options[1])
            .bind(&question.options[2])
            .bind(&question.options[3])
            .bind(question.correct_answer)
            .bind(&question.level)
            .execute(&mut *conn)
            .await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn fetch_by_level(&self, level: &str) -> Result<Vec<Question>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, option1, option2, option3, option4, correct_answer, level, created_at
             FROM questions
             WHERE level = $1
             ORDER BY id",
        )
        .bind(level)
        .fetch_all(&mut *conn)
        .await?;
        Ok(questions)
    }

    async fn record_result(&self, result: &AssessmentResult) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(
            "INSERT INTO assessments (level, total_time, pass_percentage, score, total_questions, percentage, passed)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&result.level)
        .bind(result.total_time)
        .bind(result.pass_percentage)
        .bind(result.score)
        .bind(result.total_questions)
        .bind(result.percentage)
        .bind(result.passed)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }
}
