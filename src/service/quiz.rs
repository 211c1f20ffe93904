use actix_web::{web, HttpResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assessment::{score, shuffle_questions};
use crate::error::AppError;
use crate::store::QuestionStore;
use crate::structs::assessment::{AssessmentResult, StartRequest, StartResponse, SubmitRequest};

// Draws every question of the level and shuffles it
pub(crate) async fn start_assessment(
    req_body: web::Json<StartRequest>,
    store: web::Data<dyn QuestionStore>,
) -> Result<HttpResponse, AppError> {
    let request = req_body.into_inner();
    log::debug!(
        "starting assessment: level '{}', {}s, pass at {}%",
        request.level,
        request.total_time,
        request.pass_percentage
    );

    let questions = store.fetch_by_level(&request.level).await?;
    if questions.is_empty() {
        return Err(AppError::NoQuestions { level: request.level });
    }

    let mut rng = StdRng::from_entropy();
    let questions = shuffle_questions(questions, &mut rng)?;
    log::info!("started assessment at level '{}' with {} questions", request.level, questions.len());
    Ok(HttpResponse::Ok().json(StartResponse { questions }))
}

// Scores a submission and records the result
pub(crate) async fn submit_assessment(
    req_body: web::Json<SubmitRequest>,
    store: web::Data<dyn QuestionStore>,
) -> Result<HttpResponse, AppError> {
    let outcome = score(&req_body.questions, &req_body.answers, req_body.pass_percentage);
    store.record_result(&AssessmentResult::from(&outcome)).await?;
    log::info!(
        "assessment submitted: {}/{} ({:.2}%), passed: {}",
        outcome.score,
        outcome.total,
        outcome.percentage,
        outcome.passed
    );
    Ok(HttpResponse::Ok().json(outcome))
}
