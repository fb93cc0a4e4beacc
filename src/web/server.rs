use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::catalog::Catalog;
use crate::codegen::{self, Language};
use crate::feedback::{FeedbackError, FeedbackStore, NewFeedback};
use crate::llm::{StoryClient, StoryRequest};
use crate::models::{Category, Endpoint};
use crate::runner::TestRunner;

#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
    runner: Arc<TestRunner>,
    feedback: Arc<FeedbackStore>,
    story: Arc<StoryClient>,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    category: Option<String>,
    q: Option<String>,
}

pub async fn run_server(port: u16, feedback_path: PathBuf) -> Result<()> {
    let state = AppState {
        catalog: Arc::new(Catalog::load()),
        runner: Arc::new(TestRunner::new()),
        feedback: Arc::new(FeedbackStore::open(feedback_path)?),
        story: Arc::new(StoryClient::new(None)),
    };

    println!("Serving {} documented endpoints", state.catalog.all().len());

    let api = routes(state);

    println!("Server running on http://localhost:{}", port);
    warp::serve(api).run(([127, 0, 0, 1], port)).await;

    Ok(())
}

fn routes(state: AppState) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let catalog = state.catalog.clone();
    let list_route = warp::path!("api" / "endpoints")
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .map(move |query: ListQuery| {
            let mut list: Vec<&Endpoint> = match query.q.as_deref() {
                Some(term) => catalog.search(term),
                None => catalog.all().iter().collect(),
            };
            if let Some(raw) = query.category.as_deref() {
                match Category::parse(raw) {
                    Some(category) => list.retain(|ep| ep.category == category),
                    None => list.clear(),
                }
            }
            warp::reply::json(&list)
        });

    let catalog = state.catalog.clone();
    let categories_route = warp::path!("api" / "categories").and(warp::get()).map(move || {
        let counts: Vec<_> = catalog
            .category_counts()
            .into_iter()
            .map(|(category, count)| json!({"category": category.as_str(), "count": count}))
            .collect();
        warp::reply::json(&json!({ "categories": counts }))
    });

    let catalog = state.catalog.clone();
    let detail_route = warp::path!("api" / "endpoints" / String)
        .and(warp::get())
        .map(move |id: String| match catalog.find(&id) {
            Some(ep) => {
                let body = json!({
                    "endpoint": ep,
                    "parameterSection": ep.parameter_section(),
                });
                warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)
            }
            None => endpoint_not_found(),
        });

    let catalog = state.catalog.clone();
    let code_route = warp::path!("api" / "endpoints" / String / "code" / String)
        .and(warp::get())
        .map(move |id: String, language: String| match catalog.find(&id) {
            Some(ep) => {
                // An unknown language tag is a no-op, not an error.
                let code = Language::parse(&language)
                    .map(|lang| codegen::sample(ep, lang))
                    .unwrap_or_default();
                warp::reply::with_status(
                    warp::reply::json(&json!({"language": language, "code": code})),
                    StatusCode::OK,
                )
            }
            None => endpoint_not_found(),
        });

    let catalog = state.catalog.clone();
    let runner = state.runner.clone();
    let test_route = warp::path!("api" / "endpoints" / String / "test")
        .and(warp::post())
        .and_then(move |id: String| {
            let catalog = catalog.clone();
            let runner = runner.clone();
            async move {
                let reply = match catalog.find(&id) {
                    Some(ep) => {
                        println!("Simulated test: {} {}", ep.method, ep.path);
                        let result = runner.run(ep).await;
                        warp::reply::with_status(warp::reply::json(&result), StatusCode::OK)
                    }
                    None => endpoint_not_found(),
                };
                Ok::<_, warp::Rejection>(reply)
            }
        });

    let feedback = state.feedback.clone();
    let feedback_route = warp::path!("api" / "feedback")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |new: NewFeedback| match feedback.create(new) {
            Ok(row) => warp::reply::with_status(warp::reply::json(&row), StatusCode::CREATED),
            Err(err @ FeedbackError::EmptyMessage) => warp::reply::with_status(
                warp::reply::json(&json!({"error": err.to_string()})),
                StatusCode::BAD_REQUEST,
            ),
            Err(err) => {
                eprintln!("Feedback write failed: {}", err);
                warp::reply::with_status(
                    warp::reply::json(&json!({"error": "failed to store feedback"})),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        });

    let story = state.story.clone();
    let story_route = warp::path!("api" / "story")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |request: StoryRequest| {
            let story = story.clone();
            async move {
                let reply = match story.generate(&request).await {
                    Ok(text) => warp::reply::with_status(
                        warp::reply::json(&json!({"success": true, "text": text})),
                        StatusCode::OK,
                    ),
                    Err(err) if err.is_validation() => warp::reply::with_status(
                        warp::reply::json(&json!({"success": false, "error": err.to_string()})),
                        StatusCode::BAD_REQUEST,
                    ),
                    Err(err) => {
                        eprintln!("Story API error: {}", err);
                        warp::reply::with_status(
                            warp::reply::json(&json!({"success": false, "error": err.to_string()})),
                            StatusCode::BAD_GATEWAY,
                        )
                    }
                };
                Ok::<_, warp::Rejection>(reply)
            }
        });

    let health_route = warp::path("health").map(|| warp::reply::json(&json!({"status": "healthy"})));

    list_route
        .or(categories_route)
        .or(code_route)
        .or(test_route)
        .or(detail_route)
        .or(feedback_route)
        .or(story_route)
        .or(health_route)
        .with(warp::cors().allow_any_origin())
}

fn endpoint_not_found() -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"error": "endpoint not found"})),
        StatusCode::NOT_FOUND,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::time::Duration;

    fn state(dir: &tempfile::TempDir) -> AppState {
        AppState {
            catalog: Arc::new(Catalog::load()),
            runner: Arc::new(TestRunner::with_latency(Duration::ZERO)),
            feedback: Arc::new(FeedbackStore::open(dir.path().join("feedback.json")).unwrap()),
            story: Arc::new(StoryClient::new(None)),
        }
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn lists_the_whole_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request().path("/api/endpoints").reply(&api).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.body());
        assert_eq!(body.as_array().unwrap().len(), Catalog::load().all().len());
    }

    #[tokio::test]
    async fn filters_by_category_and_query() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request().path("/api/endpoints?category=Music").reply(&api).await;
        let body = body_json(response.body());
        assert_eq!(body.as_array().unwrap().len(), 2);

        let response = warp::test::request().path("/api/endpoints?category=Gaming").reply(&api).await;
        let body = body_json(response.body());
        assert!(body.as_array().unwrap().is_empty());

        let response = warp::test::request().path("/api/endpoints?q=translate").reply(&api).await;
        let body = body_json(response.body());
        let ids: Vec<&str> = body.as_array().unwrap().iter().map(|ep| ep["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["tool-translate"]);
    }

    #[tokio::test]
    async fn endpoint_detail_includes_the_parameter_section() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request().path("/api/endpoints/tool-upload").reply(&api).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.body());
        assert_eq!(body["endpoint"]["id"], "tool-upload");
        assert_eq!(body["parameterSection"], "Form Data");
    }

    #[tokio::test]
    async fn unknown_endpoint_id_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        for path in [
            "/api/endpoints/no-such-id",
            "/api/endpoints/no-such-id/code/curl",
        ] {
            let response = warp::test::request().path(path).reply(&api).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
        }

        let response = warp::test::request()
            .method("POST")
            .path("/api/endpoints/no-such-id/test")
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn code_route_returns_authored_curl_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request()
            .path("/api/endpoints/tool-translate/code/curl")
            .reply(&api)
            .await;
        let body = body_json(response.body());

        let catalog = Catalog::load();
        let expected = &catalog.find("tool-translate").unwrap().curl_example;
        assert_eq!(body["code"].as_str().unwrap(), expected);
    }

    #[tokio::test]
    async fn unknown_language_yields_empty_code() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request()
            .path("/api/endpoints/tool-translate/code/ruby")
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.body());
        assert_eq!(body["code"], "");
    }

    #[tokio::test]
    async fn simulated_test_returns_the_canned_response() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request()
            .method("POST")
            .path("/api/endpoints/ai-perplexity/test")
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.body());
        assert_eq!(body["status"], 200);
        assert_eq!(body["body"], json!({"response": "Prabowo Subianto"}));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn feedback_is_created_and_blank_messages_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request()
            .method("POST")
            .path("/api/feedback")
            .json(&json!({"message": "docs were helpful"}))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response.body());
        assert_eq!(body["id"], 1);
        assert_eq!(body["isHelpful"], true);

        let response = warp::test::request()
            .method("POST")
            .path("/api/feedback")
            .json(&json!({"message": "  "}))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn story_form_validation_errors_are_400() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request()
            .method("POST")
            .path("/api/story")
            .json(&json!({
                "text": "",
                "client": "StoryGenerator",
                "mode": "Young Adult",
                "length": "Novel",
                "creative": "High",
                "language": "en",
                "syllable": {"min": 2, "max": 4}
            }))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response.body());
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn category_counts_cover_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request().path("/api/categories").reply(&api).await;
        let body = body_json(response.body());

        let total: u64 = body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total as usize, Catalog::load().all().len());
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let api = routes(state(&dir));

        let response = warp::test::request().path("/health").reply(&api).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.body()), json!({"status": "healthy"}));
    }
}
