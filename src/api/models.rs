use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::{AllergenRow, MatchResult, NutritionFacts, RecipeView};

/// Body of `/predict_allergen` and `/predict_nutrition`
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `/recommend_recipes`.
///
/// `top_n` stays untyped so a bad limit is reported on its own instead of
/// failing the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub top_n: Option<Value>,
}

/// Allergen search response.
///
/// A miss keeps the `result` key but carries the not-found message instead
/// of rows.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AllergenResponse {
    Found {
        result: Vec<AllergenRow>,
        count: usize,
    },
    Empty {
        result: String,
    },
}

impl From<MatchResult<AllergenRow>> for AllergenResponse {
    fn from(result: MatchResult<AllergenRow>) -> Self {
        match result {
            MatchResult::Found { rows, count } => AllergenResponse::Found {
                result: rows,
                count,
            },
            MatchResult::Empty { message } => AllergenResponse::Empty { result: message },
        }
    }
}

/// Recipe recommendation response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecipeResponse {
    Found {
        recipes: Vec<RecipeView>,
        count: usize,
    },
    Empty {
        message: String,
    },
}

impl From<MatchResult<RecipeView>> for RecipeResponse {
    fn from(result: MatchResult<RecipeView>) -> Self {
        match result {
            MatchResult::Found { rows, count } => RecipeResponse::Found {
                recipes: rows,
                count,
            },
            MatchResult::Empty { message } => RecipeResponse::Empty { message },
        }
    }
}

/// Nutrition lookup response
#[derive(Debug, Clone, Serialize)]
pub struct NutritionResponse {
    pub food: String,
    pub nutrition: NutritionFacts,
}

/// Plain message body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub allergen: String,
    pub recipe: String,
    pub nutrition: String,
}
