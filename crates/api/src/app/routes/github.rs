use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::app::dto::{CreateIssueRequest, IssueCreated, RepositoryDetail, UserSummary};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/v1/github", get(user_summary))
        .route("/v1/github/:repo_name", get(repository_detail))
        .route("/v1/github/:repo_name/issues", post(create_issue))
}

pub async fn user_summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<UserSummary>, ApiError> {
    Ok(Json(services.user_summary().await?))
}

pub async fn repository_detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(repo_name): Path<String>,
) -> Result<Json<RepositoryDetail>, ApiError> {
    Ok(Json(services.repository_detail(&repo_name).await?))
}

/// Validation happens before any upstream call; an invalid body never reaches GitHub.
pub async fn create_issue(
    Extension(services): Extension<Arc<AppServices>>,
    Path(repo_name): Path<String>,
    payload: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IssueCreated>), ApiError> {
    let Json(request) = payload?;
    let issue = request.validate()?;

    let created = services.create_issue(&repo_name, &issue).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
