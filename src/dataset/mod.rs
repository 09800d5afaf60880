// Food datasets and the substring search over them

pub mod allergen;
pub mod loader;
pub mod matching;
pub mod nutrition;
pub mod recipe;

// Re-exports
pub use allergen::{AllergenRow, AllergenSearch};
pub use loader::{load_table, parse_table, DataFormat};
pub use matching::{MatchResult, Searchable};
pub use nutrition::NutritionFacts;
pub use recipe::{RecipeRow, RecipeSearch, RecipeView};
