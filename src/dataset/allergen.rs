use crate::dataset::loader::load_table;
use crate::dataset::matching::{filter_rows, normalize_query, MatchResult, Searchable};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub const NOT_FOUND_MESSAGE: &str = "❌ No allergen data found for that query.";

/// One food/allergen record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenRow {
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub allergy: Option<String>,
}

impl Searchable for AllergenRow {
    const COLUMNS: &'static [&'static str] = &["food", "type", "group", "class", "allergy"];

    fn match_fields(&self) -> impl Iterator<Item = Option<&str>> {
        [
            self.food.as_deref(),
            self.kind.as_deref(),
            self.group.as_deref(),
            self.class.as_deref(),
            self.allergy.as_deref(),
        ]
        .into_iter()
    }
}

/// Substring search over the allergen table
#[derive(Debug, Clone)]
pub struct AllergenSearch {
    rows: Arc<[AllergenRow]>,
}

impl AllergenSearch {
    pub fn new(rows: Vec<AllergenRow>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_table(path)?))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row where any of food, type, group, class or allergy contains
    /// the query, case-insensitively, in table order.
    pub fn search(&self, query: &str) -> MatchResult<AllergenRow> {
        let needle = normalize_query(query);

        let rows: Vec<AllergenRow> = filter_rows(&self.rows, &needle).cloned().collect();
        debug!("Allergen search {:?}: {} matches", needle, rows.len());

        MatchResult::from_rows(rows, NOT_FOUND_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(food: &str, kind: &str, group: &str, class: &str, allergy: &str) -> AllergenRow {
        AllergenRow {
            food: Some(food.to_string()),
            kind: Some(kind.to_string()),
            group: Some(group.to_string()),
            class: Some(class.to_string()),
            allergy: Some(allergy.to_string()),
        }
    }

    fn sample() -> AllergenSearch {
        AllergenSearch::new(vec![
            row("Peanut Butter", "spread", "nuts", "legume", "peanut"),
            row("Rice", "grain", "cereal", "grain", "none"),
        ])
    }

    #[test]
    fn test_search_peanut_returns_first_row() {
        let result = sample().search("peanut");

        assert_eq!(result.count(), 1);
        assert_eq!(result.rows()[0].food.as_deref(), Some("Peanut Butter"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let search = sample();
        assert_eq!(search.search("PEANUT"), search.search("peanut"));
        assert_eq!(search.search("  Rice  "), search.search("rice"));
    }

    #[test]
    fn test_search_matches_partial_words() {
        let result = sample().search("nut");
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_search_matches_any_designated_column() {
        let search = sample();
        assert_eq!(search.search("spread").count(), 1);
        assert_eq!(search.search("cereal").count(), 1);
        assert_eq!(search.search("legume").count(), 1);
        assert_eq!(search.search("none").count(), 1);
        assert_eq!(search.search("grain").rows()[0].food.as_deref(), Some("Rice"));
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        let result = sample().search("durian");

        assert_eq!(
            result,
            MatchResult::Empty {
                message: NOT_FOUND_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_search_preserves_table_order() {
        let search = AllergenSearch::new(vec![
            row("Walnut", "nut", "nuts", "tree nut", "tree nut"),
            row("Milk", "dairy", "dairy", "dairy", "lactose"),
            row("Almond", "nut", "nuts", "tree nut", "tree nut"),
        ]);

        let foods: Vec<_> = search
            .search("tree nut")
            .rows()
            .iter()
            .map(|r| r.food.clone().unwrap())
            .collect();
        assert_eq!(foods, vec!["Walnut", "Almond"]);
    }

    #[test]
    fn test_missing_values_never_match() {
        let search = AllergenSearch::new(vec![AllergenRow {
            food: Some("Sesame".to_string()),
            ..Default::default()
        }]);

        assert_eq!(search.search("sesame").count(), 1);
        assert!(search.search("seed").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let search = sample();
        assert_eq!(search.search("nut"), search.search("nut"));
    }

    #[test]
    fn test_row_serializes_with_column_names() {
        let json = serde_json::to_value(row("Egg", "protein", "eggs", "egg", "egg")).unwrap();
        assert_eq!(json["type"], "protein");
        assert!(json.get("kind").is_none());
    }
}
