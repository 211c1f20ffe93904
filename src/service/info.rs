use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::store::QuestionStore;
use crate::structs::respond::{LevelsResponse, MessageResponse};

pub(crate) async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Learning Assessment API"))
}

// Distinct levels currently in the question bank
pub(crate) async fn levels(store: web::Data<dyn QuestionStore>) -> Result<HttpResponse, AppError> {
    let levels = store.list_levels().await?;
    Ok(HttpResponse::Ok().json(LevelsResponse { levels }))
}
