use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use tempfile::TempDir;
use tower::ServiceExt;

use catalog::{VoteStore, movies};
use sentiment::SentimentModel;
use server::{AppState, MISSING_REVIEW_MESSAGE, ReviewOrchestrator, build_router};

fn setup() -> (TempDir, VoteStore, Router) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("votes.json");
    let model = SentimentModel::train_default().unwrap();
    let orchestrator = ReviewOrchestrator::new(Arc::new(model), VoteStore::new(&path));
    let app = build_router(AppState::new(orchestrator).unwrap());
    (dir, VoteStore::new(path), app)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn vote_counts(store: &VoteStore) -> Vec<(String, usize)> {
    let ledger = store.load().unwrap();
    movies()
        .iter()
        .map(|m| (m.title.to_string(), ledger.vote_count(m.title)))
        .collect()
}

#[tokio::test]
async fn test_index_lists_all_movies() {
    let (_dir, _store, app) = setup();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for movie in movies() {
        assert!(html.contains(movie.title), "listing missing {}", movie.title);
    }
}

#[tokio::test]
async fn test_index_creates_store() {
    let (_dir, store, app) = setup();
    assert!(!store.path().exists());

    app.oneshot(get("/")).await.unwrap();

    assert!(store.path().exists());
    assert_eq!(store.load().unwrap().total_votes(), 0);
}

#[tokio::test]
async fn test_movie_page_with_encoded_title() {
    let (_dir, _store, app) = setup();

    let response = app
        .oneshot(get("/movie/Avengers%3A%20Endgame"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>Avengers: Endgame</h1>"));
    assert!(html.contains("Best superhero movie"));
    assert!(html.contains("(0 votes)"));
}

#[tokio::test]
async fn test_unknown_movie_redirects() {
    let (_dir, store, app) = setup();

    let response = app.oneshot(get("/movie/Nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    assert!(!store.load().unwrap().contains("Nope"));
}

#[tokio::test]
async fn test_unknown_movie_post_records_nothing() {
    let (_dir, store, app) = setup();
    let before = vote_counts(&store);

    let response = app
        .oneshot(post_form("/movie/Nope", "custom_review=I+love+this+movie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let ledger = store.load().unwrap();
    assert!(!ledger.contains("Nope"));
    assert_eq!(vote_counts(&store), before);
}

#[tokio::test]
async fn test_empty_review_shows_message() {
    let (_dir, store, app) = setup();
    let before = vote_counts(&store);

    let response = app
        .oneshot(post_form("/movie/Titanic", "custom_review=++&suggestion="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(MISSING_REVIEW_MESSAGE));
    assert_eq!(vote_counts(&store), before);
}

#[tokio::test]
async fn test_bare_post_counts_as_empty_review() {
    let (_dir, store, app) = setup();
    let before = vote_counts(&store);

    let request = Request::builder()
        .method("POST")
        .uri("/movie/Titanic")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(MISSING_REVIEW_MESSAGE));
    assert_eq!(vote_counts(&store), before);
}

#[tokio::test]
async fn test_bare_post_to_unknown_movie_redirects() {
    let (_dir, store, app) = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/movie/Nope")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(!store.load().unwrap().contains("Nope"));
}

#[tokio::test]
async fn test_title_is_decoded_once() {
    let (_dir, store, app) = setup();

    let response = app
        .oneshot(get("/movie/Avengers%253A%2520Endgame"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!store.load().unwrap().contains("Avengers%3A%20Endgame"));
}

#[tokio::test]
async fn test_custom_review_increments_one_movie() {
    let (_dir, store, app) = setup();
    let before = vote_counts(&store);

    let response = app
        .oneshot(post_form("/movie/Titanic", "custom_review=I+love+this+movie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Model prediction: Positive 😀"));
    assert!(html.contains("(1 votes)"));

    for ((title, was), (_, now)) in before.iter().zip(vote_counts(&store)) {
        let expected = if title == "Titanic" { was + 1 } else { *was };
        assert_eq!(now, expected, "unexpected count for {title}");
    }
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(on_disk["Titanic"], serde_json::json!([1]));
}

#[tokio::test]
async fn test_negative_review() {
    let (_dir, store, app) = setup();

    let response = app
        .oneshot(post_form("/movie/Parasite", "custom_review=Terrible+acting"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Model prediction: Negative 😡"));
    assert_eq!(store.load().unwrap().votes_for("Parasite").len(), 1);
}

#[tokio::test]
async fn test_suggestion_used_when_custom_blank() {
    let (_dir, store, app) = setup();

    let response = app
        .oneshot(post_form(
            "/movie/Inception",
            "custom_review=&suggestion=Absolutely+loved+the+soundtrack",
        ))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Model prediction: Positive 😀"));
    assert!(html.contains("5.0 of 5 stars"));
    assert!(html.contains("100.0% positive"));
    assert_eq!(store.load().unwrap().vote_count("Inception"), 1);
}

#[tokio::test]
async fn test_listing_reflects_votes() {
    let (_dir, _store, app) = setup();

    for review in ["I+love+this+movie", "Terrible+acting", "Terrible+acting"] {
        let response = app
            .clone()
            .oneshot(post_form("/movie/Parasite", &format!("custom_review={review}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("1.67 of 5"));
    assert!(html.contains("33.3%"));
}

#[tokio::test]
async fn test_health() {
    let (_dir, _store, app) = setup();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
