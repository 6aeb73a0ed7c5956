use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;

use super::HttpResponse;
use crate::AppState;
use crate::error::AppError;
use crate::services::goals::{self, EnergyGoals, ProfileParams};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/goals", post(calculate_goals))
}

#[tracing::instrument(skip_all)]
async fn calculate_goals(
    Json(params): Json<ProfileParams>,
) -> Result<Json<HttpResponse<EnergyGoals>>, AppError> {
    params.validate()?;
    Ok(Json(goals::calculate(&params).into()))
}
