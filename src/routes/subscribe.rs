//! src/routes/subscribe.rs
use crate::domain::{Subscriber, ValidationError};
use crate::routes::error_chain_fmt;
use crate::store;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use sqlx::PgPool;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeBody {
    pub email: String,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_halal: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::Validation(_) => StatusCode::BAD_REQUEST,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            SubscribeError::Validation(e) => e.to_string(),
            // The caller gets an opaque failure; the chain is in the logs.
            SubscribeError::UnexpectedError(_) => "Error processing subscribe request".into(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}

#[tracing::instrument(
    name = "Updating subscriber preferences",
    skip(body, pool),
    fields(subscriber_email = %body.email)
)]
pub async fn subscribe(
    body: web::Json<SubscribeBody>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscribeError> {
    let subscriber = Subscriber::try_from(body.into_inner())?;

    let record = store::upsert_subscriber(&pool, &subscriber)
        .await
        .context("Failed to store subscriber preferences")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Subscription updated successfully",
        "data": record,
    })))
}
