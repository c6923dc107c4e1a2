use axum::{
    Form, Json,
    extract::{Path, State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::{Value, json};
use tracing::debug;

use catalog::find_movie;

use super::{error::AppError, orchestrator::ReviewForm, state::AppState};

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let ratings = state.orchestrator.listing().await?;
    Ok(Html(state.templates.render_index(&ratings)?))
}

pub async fn movie_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, AppError> {
    let Some(movie) = find_movie(&title) else {
        return Ok(redirect_to_index(&title));
    };

    let page = state.orchestrator.movie_page(movie).await?;
    Ok(Html(state.templates.render_movie(&page)?).into_response())
}

pub async fn review_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    form: Result<Form<ReviewForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Some(movie) = find_movie(&title) else {
        return Ok(redirect_to_index(&title));
    };

    // A body that is not a form counts as a form with no fields
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Treating unreadable review form as empty: {rejection}");
            ReviewForm::default()
        }
    };

    let page = state.orchestrator.submit_review(movie, &form).await?;
    Ok(Html(state.templates.render_movie(&page)?).into_response())
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn redirect_to_index(title: &str) -> Response {
    debug!("Unknown movie {title:?}, redirecting to listing");
    Redirect::to("/").into_response()
}
