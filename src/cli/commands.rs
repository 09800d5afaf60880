use crate::dataset::{AllergenRow, NutritionFacts, RecipeView};
use crate::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// Search allergen records and print them
pub async fn allergens(server_url: &str, query: &str) -> Result<()> {
    let reply = fetch_allergens(&Client::new(), server_url, query).await?;
    print_allergens(&reply);
    Ok(())
}

/// Recommend recipes and print them
pub async fn recipes(server_url: &str, query: &str, top_n: Option<usize>) -> Result<()> {
    let reply = fetch_recipes(&Client::new(), server_url, query, top_n).await?;
    print_recipes(&reply);
    Ok(())
}

/// Look up a food and print its nutrition facts
pub async fn nutrition(server_url: &str, food: &str) -> Result<()> {
    let reply = fetch_nutrition(&Client::new(), server_url, food).await?;
    print_nutrition(&reply);
    Ok(())
}

pub async fn fetch_allergens(client: &Client, server_url: &str, query: &str) -> Result<AllergenReply> {
    let reply = client
        .post(format!("{server_url}/predict_allergen"))
        .json(&json!({ "text": query }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(reply)
}

pub async fn fetch_recipes(
    client: &Client,
    server_url: &str,
    query: &str,
    top_n: Option<usize>,
) -> Result<RecipeReply> {
    let mut body = json!({ "query": query });
    if let Some(top_n) = top_n {
        body["top_n"] = json!(top_n);
    }

    let reply = client
        .post(format!("{server_url}/recommend_recipes"))
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(reply)
}

pub async fn fetch_nutrition(client: &Client, server_url: &str, food: &str) -> Result<NutritionReply> {
    let response = client
        .post(format!("{server_url}/predict_nutrition"))
        .json(&json!({ "text": food }))
        .send()
        .await?;

    // An unknown food is an answer, not a failure
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(response.json().await?);
    }

    Ok(response.error_for_status()?.json().await?)
}

// Response types (matching API models)

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AllergenReply {
    Found {
        result: Vec<AllergenRow>,
        count: usize,
    },
    Empty {
        result: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipeReply {
    Found {
        recipes: Vec<RecipeView>,
        count: usize,
    },
    Empty {
        message: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NutritionReply {
    Found {
        food: String,
        nutrition: NutritionFacts,
    },
    Missing {
        message: String,
    },
}

// Helper functions

fn print_allergens(reply: &AllergenReply) {
    let (rows, count) = match reply {
        AllergenReply::Found { result, count } => (result, count),
        AllergenReply::Empty { result } => {
            println!("{result}");
            return;
        }
    };

    println!("\nFound {count} allergen records:\n");
    println!(
        "{:<24} {:<16} {:<16} {:<16} {:<24}",
        "Food", "Type", "Group", "Class", "Allergy"
    );
    println!("{}", "-".repeat(100));

    for row in rows {
        println!(
            "{:<24} {:<16} {:<16} {:<16} {:<24}",
            truncate(row.food.as_deref().unwrap_or("-"), 22),
            truncate(row.kind.as_deref().unwrap_or("-"), 14),
            truncate(row.group.as_deref().unwrap_or("-"), 14),
            truncate(row.class.as_deref().unwrap_or("-"), 14),
            truncate(row.allergy.as_deref().unwrap_or("-"), 22),
        );
    }
}

fn print_recipes(reply: &RecipeReply) {
    let (recipes, count) = match reply {
        RecipeReply::Found { recipes, count } => (recipes, count),
        RecipeReply::Empty { message } => {
            println!("{message}");
            return;
        }
    };

    println!("\nTop {count} recipes:\n");
    for (i, recipe) in recipes.iter().enumerate() {
        println!("{}. {}", i + 1, recipe.title.as_deref().unwrap_or("Untitled"));
        if let Some(link) = &recipe.link {
            println!("   {link}");
        }
        if let Some(ingredients) = &recipe.ingredients {
            println!("   Ingredients: {}", truncate(ingredients, 90));
        }
    }
}

fn print_nutrition(reply: &NutritionReply) {
    match reply {
        NutritionReply::Found { food, nutrition } => {
            println!("\n{food} (per 100 g)");
            println!("  Calories: {}", nutrition.calories);
            println!("  Protein:  {} g", nutrition.protein);
            println!("  Carbs:    {} g", nutrition.carbs);
            println!("  Fat:      {} g", nutrition.fat);
            println!("  Fiber:    {} g", nutrition.fiber);
        }
        NutritionReply::Missing { message } => println!("{message}"),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
