//! src/store.rs
use crate::domain::{Email, Subscriber};
use chrono::Utc;
use sqlx::PgPool;

/// A preference record as stored, keyed by email. This is what both
/// endpoints hand back to the caller under `data`.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRecord {
    pub email: String,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub is_halal: bool,
    pub allergens: Vec<String>,
}

#[tracing::instrument(
    name = "Upserting subscriber preferences in the database",
    skip(pool, subscriber)
)]
pub async fn upsert_subscriber(
    pool: &PgPool,
    subscriber: &Subscriber,
) -> Result<SubscriberRecord, sqlx::Error> {
    let record = sqlx::query_as::<_, SubscriberRecord>(
        r#"
    INSERT INTO subscribers (email, is_vegan, is_vegetarian, is_halal, allergens, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (email) DO UPDATE SET
        is_vegan = EXCLUDED.is_vegan,
        is_vegetarian = EXCLUDED.is_vegetarian,
        is_halal = EXCLUDED.is_halal,
        allergens = EXCLUDED.allergens,
        updated_at = EXCLUDED.updated_at
    RETURNING email, is_vegan, is_vegetarian, is_halal, allergens
            "#,
    )
    .bind(subscriber.email.as_ref())
    .bind(subscriber.is_vegan)
    .bind(subscriber.is_vegetarian)
    .bind(subscriber.is_halal)
    .bind(subscriber.allergens.to_vec())
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:#?}", e);
        e
    })?;

    Ok(record)
}

/// Deletes the record for `email` and returns its prior value. `None` means
/// there was nothing to delete.
#[tracing::instrument(name = "Deleting subscriber preferences from the database", skip(pool))]
pub async fn delete_subscriber(
    pool: &PgPool,
    email: &Email,
) -> Result<Option<SubscriberRecord>, sqlx::Error> {
    let record = sqlx::query_as::<_, SubscriberRecord>(
        r#"
    DELETE FROM subscribers
    WHERE email = $1
    RETURNING email, is_vegan, is_vegetarian, is_halal, allergens
            "#,
    )
    .bind(email.as_ref())
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:#?}", e);
        e
    })?;

    Ok(record)
}
