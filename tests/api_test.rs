use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pantry::{
    api::{create_router, AppState},
    config::{DataConfig, SearchConfig, ServerConfig, Settings},
    dataset::{allergen, nutrition, recipe, AllergenSearch, RecipeSearch},
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            external_url: None,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
        data: DataConfig {
            allergen_path: fixture("allergens.json").into(),
            recipe_path: fixture("recipes.json").into(),
        },
        search: SearchConfig {
            recipe_default_limit: 5,
            recipe_max_limit: 50,
        },
    }
}

fn app_with(allergens: Option<AllergenSearch>, recipes: Option<RecipeSearch>) -> Router {
    let settings = test_settings();
    let state = AppState {
        allergens,
        recipes,
        settings: settings.clone(),
    };

    create_router(state, &settings).expect("Failed to build router")
}

fn app() -> Router {
    app_with(
        Some(AllergenSearch::from_file(fixture("allergens.json")).expect("allergen fixture")),
        Some(RecipeSearch::from_file(fixture("recipes.json")).expect("recipe fixture")),
    )
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

#[tokio::test]
async fn test_predict_allergen_found() {
    let (status, body) = post_json(app(), "/predict_allergen", json!({"text": "  PEANUT "})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["result"][0],
        json!({
            "food": "Peanut Butter",
            "type": "spread",
            "group": "nuts",
            "class": "legume",
            "allergy": "peanut"
        })
    );
}

#[tokio::test]
async fn test_predict_allergen_not_found_is_ok() {
    let (status, body) = post_json(app(), "/predict_allergen", json!({"text": "durian"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": allergen::NOT_FOUND_MESSAGE}));
}

#[tokio::test]
async fn test_predict_allergen_missing_text() {
    let (status, body) = post_json(app(), "/predict_allergen", json!({"query": "milk"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'text' in request");
}

#[tokio::test]
async fn test_predict_allergen_malformed_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict_allergen")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'text' in request");
}

#[tokio::test]
async fn test_predict_allergen_empty_query() {
    let (status, body) = post_json(app(), "/predict_allergen", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Empty query");
}

#[tokio::test]
async fn test_predict_allergen_unavailable() {
    let app = app_with(None, Some(RecipeSearch::placeholder()));
    let (status, body) = post_json(app, "/predict_allergen", json!({"text": "milk"})).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Allergen model not available");
}

#[tokio::test]
async fn test_predict_nutrition_found() {
    let (status, body) = post_json(app(), "/predict_nutrition", json!({"text": "Sweet Potato"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["food"], "sweet potato");
    // Whole numbers stay integers on the wire
    assert_eq!(body["nutrition"]["calories"], json!(86));
    assert_eq!(body["nutrition"]["protein"], json!(1.6));
    assert_eq!(body["nutrition"]["fiber"], json!(3));
}

#[tokio::test]
async fn test_predict_nutrition_unknown_food() {
    let (status, body) = post_json(app(), "/predict_nutrition", json!({"text": "unobtainium"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": nutrition::NOT_FOUND_MESSAGE}));
}

#[tokio::test]
async fn test_predict_nutrition_works_without_datasets() {
    let app = app_with(None, None);
    let (status, _) = post_json(app, "/predict_nutrition", json!({"text": "apple"})).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_recommend_recipes_default_limit() {
    let (status, body) = post_json(app(), "/recommend_recipes", json!({"query": "chicken"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 5);
    for recipe in recipes {
        let object = recipe.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["directions", "ingredients", "link", "title"]);
    }
    assert_eq!(recipes[0]["title"], "Chicken Recipe 1");
}

#[tokio::test]
async fn test_recommend_recipes_top_n() {
    let (_, body) = post_json(
        app(),
        "/recommend_recipes",
        json!({"query": "chicken", "top_n": 2}),
    )
    .await;
    assert_eq!(body["count"], 2);

    // Clamped to the configured maximum, which exceeds the match count
    let (_, body) = post_json(
        app(),
        "/recommend_recipes",
        json!({"query": "chicken", "top_n": 1000}),
    )
    .await;
    assert_eq!(body["count"], 7);
}

#[tokio::test]
async fn test_recommend_recipes_zero_top_n() {
    let (status, body) = post_json(
        app(),
        "/recommend_recipes",
        json!({"query": "chicken", "top_n": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "top_n must be a positive integer");
}

#[tokio::test]
async fn test_recommend_recipes_malformed_top_n() {
    for top_n in [json!(-1), json!("3"), json!(2.5)] {
        let (status, body) = post_json(
            app(),
            "/recommend_recipes",
            json!({"query": "chicken", "top_n": top_n}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "top_n = {top_n}");
        assert_eq!(body["error"], "top_n must be a positive integer");
    }
}

#[tokio::test]
async fn test_recommend_recipes_null_top_n_uses_default() {
    let (status, body) = post_json(
        app(),
        "/recommend_recipes",
        json!({"query": "chicken", "top_n": null}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn test_recommend_recipes_not_found() {
    let (status, body) = post_json(app(), "/recommend_recipes", json!({"query": "durian"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": recipe::NOT_FOUND_MESSAGE}));
}

#[tokio::test]
async fn test_recommend_recipes_missing_query() {
    let (status, body) = post_json(app(), "/recommend_recipes", json!({"text": "chicken"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'query' in request");
}

#[tokio::test]
async fn test_recommend_recipes_unavailable() {
    let app = app_with(None, None);
    let (status, body) = post_json(app, "/recommend_recipes", json!({"query": "chicken"})).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Recipe model not available");
}

#[tokio::test]
async fn test_readiness_reports_each_dataset() {
    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (_, body) = send(app_with(None, Some(RecipeSearch::placeholder())), request).await;
    assert_eq!(
        body,
        json!({
            "ready": false,
            "allergen": "unavailable",
            "recipe": "ok",
            "nutrition": "ok"
        })
    );
}
