use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use crate::error::AppError;
use crate::store::QuestionStore;
use crate::structs::respond::MessageResponse;
use crate::utils::{is_csv_filename, read_csv_rows};

/// Loads questions from the first uploaded file, whatever its field name.
pub(crate) async fn upload_questions(
    mut payload: Multipart,
    store: web::Data<dyn QuestionStore>,
) -> Result<HttpResponse, AppError> {
    while let Some(mut field) = payload.try_next().await? {
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let Some(filename) = filename else {
            // plain form value, skip its body
            while field.try_next().await?.is_some() {}
            continue;
        };
        if !is_csv_filename(&filename) {
            return Err(AppError::InvalidFileType);
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        let rows = read_csv_rows(&data)?;
        let total_rows = rows.len();
        let uploaded = store.bulk_insert(rows).await?;
        log::info!("uploaded {uploaded} questions from {filename} ({total_rows} rows)");
        return Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
            "Successfully uploaded {uploaded} questions"
        ))));
    }
    Err(AppError::MissingFile)
}
