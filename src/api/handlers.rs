use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::models::*,
    dataset::{nutrition, AllergenSearch, RecipeSearch},
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when the allergen dataset could not be loaded at startup
    pub allergens: Option<AllergenSearch>,
    /// `None` when the recipe dataset exists but could not be loaded
    pub recipes: Option<RecipeSearch>,
    pub settings: crate::config::Settings,
}

/// Pull a query out of an optional field, then trim and lowercase it.
fn require_query(value: Option<String>, field: &str) -> Result<String> {
    let value = value.ok_or_else(|| Error::Validation(format!("Missing '{field}' in request")))?;

    let query = value.trim().to_lowercase();
    if query.is_empty() {
        return Err(Error::Validation("Empty query".to_string()));
    }

    Ok(query)
}

/// Resolve the requested recipe limit: absent or null means `default`, and
/// anything else must be a positive integer, capped at `max`.
fn recipe_limit(top_n: Option<&Value>, default: usize, max: usize) -> Result<usize> {
    let requested = match top_n {
        None | Some(Value::Null) => return Ok(default),
        Some(value) => value.as_u64().filter(|n| *n > 0),
    };

    let n = requested
        .ok_or_else(|| Error::Validation("top_n must be a positive integer".to_string()))?;

    Ok(usize::try_from(n).unwrap_or(usize::MAX).min(max))
}

/// POST /predict_allergen - Search allergen records
pub async fn predict_allergen(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<AllergenResponse>> {
    let allergens = state
        .allergens
        .as_ref()
        .ok_or_else(|| Error::Unavailable("Allergen model not available".to_string()))?;

    let text = payload.ok().and_then(|Json(body)| body.text);
    let query = require_query(text, "text")?;
    debug!("Allergen request: {:?}", query);

    Ok(Json(allergens.search(&query).into()))
}

/// POST /predict_nutrition - Look up nutrition facts for one food
pub async fn predict_nutrition(
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response> {
    let text = payload.ok().and_then(|Json(body)| body.text);
    let query = require_query(text, "text")?;
    debug!("Nutrition request: {:?}", query);

    let response = match nutrition::lookup(&query) {
        Some(facts) => Json(NutritionResponse {
            food: query,
            nutrition: *facts,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: nutrition::NOT_FOUND_MESSAGE.to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// POST /recommend_recipes - Search the recipe corpus
pub async fn recommend_recipes(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<RecipeResponse>> {
    let recipes = state
        .recipes
        .as_ref()
        .ok_or_else(|| Error::Unavailable("Recipe model not available".to_string()))?;

    let (query, top_n) = match payload {
        Ok(Json(body)) => (body.query, body.top_n),
        Err(_) => (None, None),
    };
    let query = require_query(query, "query")?;

    let search = &state.settings.search;
    let limit = recipe_limit(
        top_n.as_ref(),
        search.recipe_default_limit,
        search.recipe_max_limit,
    )?;
    debug!("Recipe request: {:?} (top {})", query, limit);

    Ok(Json(recipes.search_top(&query, limit).into()))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    let allergen_ready = state.allergens.is_some();
    let recipe_ready = state.recipes.is_some();

    let status = |ok: bool| if ok { "ok" } else { "unavailable" }.to_string();

    Ok(Json(ReadinessResponse {
        ready: allergen_ready && recipe_ready,
        allergen: status(allergen_ready),
        recipe: status(recipe_ready),
        nutrition: status(nutrition::len() > 0),
    }))
}
