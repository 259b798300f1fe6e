//! src/routes/unsubscribe.rs
use crate::domain::{Email, EmailError};
use crate::routes::error_chain_fmt;
use crate::store;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use sqlx::PgPool;

#[derive(serde::Deserialize)]
pub struct UnsubscribeBody {
    pub email: String,
}

#[derive(thiserror::Error)]
pub enum UnsubscribeError {
    #[error("{0}")]
    Validation(#[from] EmailError),
    #[error("Email not found in subscription list")]
    NotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for UnsubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for UnsubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            UnsubscribeError::Validation(_) => StatusCode::BAD_REQUEST,
            UnsubscribeError::NotFound => StatusCode::NOT_FOUND,
            UnsubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            UnsubscribeError::Validation(e) => e.to_string(),
            UnsubscribeError::NotFound => self.to_string(),
            UnsubscribeError::UnexpectedError(_) => "Error processing unsubscribe request".into(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}

#[tracing::instrument(
    name = "Removing a subscriber",
    skip(body, pool),
    fields(subscriber_email = %body.email)
)]
pub async fn unsubscribe(
    body: web::Json<UnsubscribeBody>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, UnsubscribeError> {
    let email = Email::parse(body.into_inner().email)?;

    let record = store::delete_subscriber(&pool, &email)
        .await
        .context("Failed to delete subscriber preferences")?
        .ok_or(UnsubscribeError::NotFound)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Subscription successfully removed",
        "data": record,
    })))
}
