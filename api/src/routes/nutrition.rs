use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use nutrient_resolver::FoodRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::HttpResponse;
use crate::AppState;
use crate::error::AppError;

pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_food))
        .route("/resolve-batch", post(resolve_foods))
}

fn default_quantity_g() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
struct ResolveParams {
    #[validate(length(min = 1, message = "food_name must not be empty"))]
    food_name: String,
    #[serde(default = "default_quantity_g")]
    #[validate(range(exclusive_min = 0.0, message = "quantity_g must be positive"))]
    quantity_g: f64,
}

#[derive(Debug, Serialize)]
struct ResolvedFood {
    #[serde(flatten)]
    record: FoodRecord,
    warnings: Vec<String>,
}

const HARMFUL_INGREDIENTS: [&str; 6] = [
    "sugar",
    "sodium",
    "trans fat",
    "artificial sweeteners",
    "MSG",
    "high fructose corn syrup",
];

fn ingredient_warnings(food_name: &str) -> Vec<String> {
    let lowered = food_name.to_lowercase();
    HARMFUL_INGREDIENTS
        .iter()
        .filter(|ingredient| lowered.contains(&ingredient.to_lowercase()))
        .map(|ingredient| format!("Contains {ingredient}, which may be harmful to health."))
        .collect()
}

#[tracing::instrument(skip_all, fields(food_name = %params.food_name))]
async fn resolve_food(
    State(state): State<AppState>,
    Json(params): Json<ResolveParams>,
) -> Result<Json<HttpResponse<ResolvedFood>>, AppError> {
    params.validate()?;

    let record = state
        .resolver
        .resolve(&params.food_name, params.quantity_g)
        .await?;
    let warnings = ingredient_warnings(&record.food_name);

    Ok(Json(ResolvedFood { record, warnings }.into()))
}

#[derive(Debug, Deserialize, Validate)]
struct ResolveBatchParams {
    #[validate(length(min = 1, message = "items must not be empty"))]
    #[validate(nested)]
    items: Vec<ResolveParams>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchOutcome {
    Resolved(ResolvedFood),
    Failed { food_name: String, error: String },
}

/// Items are independent resolutions, so they run as parallel tasks.
#[tracing::instrument(skip_all, fields(items = params.items.len()))]
async fn resolve_foods(
    State(state): State<AppState>,
    Json(params): Json<ResolveBatchParams>,
) -> Result<Json<HttpResponse<Vec<BatchOutcome>>>, AppError> {
    params.validate()?;

    let mut handles = Vec::with_capacity(params.items.len());
    for item in params.items {
        let resolver = state.resolver.clone();
        handles.push(tokio::spawn(async move {
            let outcome = resolver.resolve(&item.food_name, item.quantity_g).await;
            (item.food_name, outcome)
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let (food_name, outcome) = handle
            .await
            .map_err(|err| AppError::ServerError(err.to_string()))?;

        outcomes.push(match outcome {
            Ok(record) => {
                let warnings = ingredient_warnings(&record.food_name);
                BatchOutcome::Resolved(ResolvedFood { record, warnings })
            }
            Err(err) => {
                tracing::warn!(%food_name, error = %err, "batch item failed");
                BatchOutcome::Failed {
                    food_name,
                    error: err.to_string(),
                }
            }
        });
    }

    Ok(Json(outcomes.into()))
}
