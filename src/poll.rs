// src/poll.rs
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Choice, Poll};

/// The 5 most recently published polls, newest first. Polls dated in
/// the future are not listed.
pub async fn latest_polls(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<Poll>, sqlx::Error> {
    sqlx::query_as::<_, Poll>(
        "SELECT id, question, pub_date FROM polls \
         WHERE pub_date <= $1 ORDER BY pub_date DESC LIMIT 5",
    )
    .bind(now)
    .fetch_all(pool)
    .await
}

/// Fetch a poll only if it is already published.
pub async fn published_poll(
    pool: &PgPool,
    poll_id: i32,
    now: DateTime<Utc>,
) -> Result<Option<Poll>, sqlx::Error> {
    sqlx::query_as::<_, Poll>(
        "SELECT id, question, pub_date FROM polls WHERE id = $1 AND pub_date <= $2",
    )
    .bind(poll_id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Fetch a poll regardless of publication date. Results and voting do
/// not apply the publication filter that listing and detail do.
pub async fn poll_by_id(pool: &PgPool, poll_id: i32) -> Result<Option<Poll>, sqlx::Error> {
    sqlx::query_as::<_, Poll>("SELECT id, question, pub_date FROM polls WHERE id = $1")
        .bind(poll_id)
        .fetch_optional(pool)
        .await
}

pub async fn poll_choices(pool: &PgPool, poll_id: i32) -> Result<Vec<Choice>, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        "SELECT id, poll_id, choice_text, votes FROM choices WHERE poll_id = $1 ORDER BY id",
    )
    .bind(poll_id)
    .fetch_all(pool)
    .await
}

/// Increment the vote count on one of the poll's choices. The single
/// UPDATE both checks that the choice belongs to the poll and keeps
/// concurrent votes from losing updates. Returns false if the choice
/// did not match, in which case nothing was written.
pub async fn record_vote(
    pool: &PgPool,
    poll_id: i32,
    choice_id: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE choices SET votes = votes + 1 WHERE id = $1 AND poll_id = $2")
        .bind(choice_id)
        .bind(poll_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
