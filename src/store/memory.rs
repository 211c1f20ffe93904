//! In-process store used by the handler tests.

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::AppError;
use crate::store::QuestionStore;
use crate::structs::assessment::AssessmentResult;
use crate::structs::question::{NewQuestion, Question};

#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
    results: Mutex<Vec<AssessmentResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<AssessmentResult> {
        self.results.lock().unwrap().clone()
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_levels(&self) -> Result<Vec<String>, AppError> {
        let questions = self.questions.lock().unwrap();
        let levels: BTreeSet<String> = questions.iter().map(|q| q.level.clone()).collect();
        Ok(levels.into_iter().collect())
    }

    async fn bulk_insert(&self, rows: Vec<Vec<String>>) -> Result<u64, AppError> {
        let mut inserted = 0;
        for (i, row) in rows.iter().enumerate() {
            let Some(question) = NewQuestion::from_record(i + 1, row)? else {
                continue;
            };
            let now = OffsetDateTime::now_utc();
            let mut questions = self.questions.lock().unwrap();
            let id = questions.len() as i32 + 1;
            questions.push(Question {
                id,
                question: question.question,
                options: question.options,
                correct_answer: question.correct_answer,
                level: question.level,
                created_at: PrimitiveDateTime::new(now.date(), now.time()),
            });
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn fetch_by_level(&self, level: &str) -> Result<Vec<Question>, AppError> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().filter(|q| q.level == level).cloned().collect())
    }

    async fn record_result(&self, result: &AssessmentResult) -> Result<(), AppError> {
        self.results.lock().unwrap().push(result.clone());
        Ok(())
    }
}
