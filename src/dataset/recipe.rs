use crate::dataset::loader::load_table;
use crate::dataset::matching::{filter_rows, normalize_query, MatchResult, Searchable};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub const NOT_FOUND_MESSAGE: &str = "❌ No recipes found for that query.";

/// Number of recipes returned when the caller gives no limit
pub const DEFAULT_TOP_N: usize = 5;

/// One record of the recipe corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Named-entity tags extracted from the ingredients; searched, never returned
    #[serde(default)]
    pub ner: Option<String>,
}

impl Searchable for RecipeRow {
    const COLUMNS: &'static [&'static str] = &["title", "ingredients", "directions", "link", "ner"];

    fn match_fields(&self) -> impl Iterator<Item = Option<&str>> {
        [
            self.title.as_deref(),
            self.ingredients.as_deref(),
            self.ner.as_deref(),
        ]
        .into_iter()
    }
}

/// Output projection of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeView {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub directions: Option<String>,
    pub link: Option<String>,
}

impl From<&RecipeRow> for RecipeView {
    fn from(row: &RecipeRow) -> Self {
        Self {
            title: row.title.clone(),
            ingredients: row.ingredients.clone(),
            directions: row.directions.clone(),
            link: row.link.clone(),
        }
    }
}

/// Substring search over the recipe corpus
#[derive(Debug, Clone)]
pub struct RecipeSearch {
    rows: Arc<[RecipeRow]>,
}

impl RecipeSearch {
    pub fn new(rows: Vec<RecipeRow>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_table(path)?))
    }

    /// Load the corpus, or fall back to a single placeholder recipe when the
    /// file does not exist. A file that exists but fails to load is an error.
    pub fn from_file_or_placeholder(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Recipe dataset {:?} not found - using placeholder data",
                path
            );
            return Ok(Self::placeholder());
        }

        Self::from_file(path)
    }

    /// One-row table used when no corpus is available
    pub fn placeholder() -> Self {
        Self::new(vec![RecipeRow {
            title: Some("Dummy Recipe".to_string()),
            ingredients: Some("Test ingredient".to_string()),
            directions: Some("Test instructions".to_string()),
            link: Some("#".to_string()),
            ner: Some("test".to_string()),
        }])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Search with the default limit of [`DEFAULT_TOP_N`]
    pub fn search(&self, query: &str) -> MatchResult<RecipeView> {
        self.search_top(query, DEFAULT_TOP_N)
    }

    /// First `top_n` recipes whose title, ingredients or ner contain the
    /// query, projected to title, ingredients, directions and link.
    ///
    /// A `top_n` of zero is treated as one.
    pub fn search_top(&self, query: &str, top_n: usize) -> MatchResult<RecipeView> {
        let needle = normalize_query(query);
        let top_n = top_n.max(1);

        let rows: Vec<RecipeView> = filter_rows(&self.rows, &needle)
            .take(top_n)
            .map(RecipeView::from)
            .collect();
        debug!(
            "Recipe search {:?} (top {}): {} matches",
            needle,
            top_n,
            rows.len()
        );

        MatchResult::from_rows(rows, NOT_FOUND_MESSAGE)
    }
}
