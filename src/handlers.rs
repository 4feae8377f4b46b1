// handlers.rs
use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{PollDetail, PollIndex, PollResults, VoteForm};
use crate::poll;

const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// List the latest published polls
pub async fn index(State(pool): State<PgPool>) -> Result<Json<PollIndex>, AppError> {
    let polls = poll::latest_polls(&pool, Utc::now()).await?;
    Ok(Json(PollIndex::new(polls)))
}

/// Show a poll's question and choices. Unpublished polls 404.
pub async fn detail(
    State(pool): State<PgPool>,
    Path(poll_id): Path<i32>,
) -> Result<Json<PollDetail>, AppError> {
    let poll = poll::published_poll(&pool, poll_id, Utc::now())
        .await?
        .ok_or(AppError::NotFound)?;
    let choices = poll::poll_choices(&pool, poll_id).await?;

    Ok(Json(PollDetail {
        poll,
        choices,
        error_message: None,
    }))
}

/// Show a poll's vote counts. No publication filter here.
pub async fn results(
    State(pool): State<PgPool>,
    Path(poll_id): Path<i32>,
) -> Result<Json<PollResults>, AppError> {
    let poll = poll::poll_by_id(&pool, poll_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let choices = poll::poll_choices(&pool, poll_id).await?;

    Ok(Json(PollResults { poll, choices }))
}

/// Record a vote for one of a poll's choices. A missing or mismatched
/// choice re-renders the detail payload with an error message instead
/// of failing; a recorded vote redirects to the results view.
pub async fn vote(
    State(pool): State<PgPool>,
    Path(poll_id): Path<i32>,
    Form(form): Form<VoteForm>,
) -> Result<Response, AppError> {
    let poll = poll::poll_by_id(&pool, poll_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let recorded = match form.choice {
        Some(choice_id) => poll::record_vote(&pool, poll_id, choice_id).await?,
        None => false,
    };

    if recorded {
        return Ok(Redirect::to(&format!("/polls/{poll_id}/results")).into_response());
    }

    let choices = poll::poll_choices(&pool, poll_id).await?;
    Ok(Json(PollDetail {
        poll,
        choices,
        error_message: Some(NO_CHOICE_MESSAGE.to_string()),
    })
    .into_response())
}
