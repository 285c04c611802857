use std::num::NonZeroU32;
use std::time::Duration;

use httpmock::prelude::*;
use reddit_media_searcher::{
    api::RedditApi,
    config::{Config, CredentialsConfig},
    fs::read_posts_log,
    Error, Limit, PostType, QuerySpec, SearchContext, SortMode, Target, TimeFilter,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn credentials() -> CredentialsConfig {
    CredentialsConfig {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        username: "someone".to_string(),
        password: "hunter2".to_string(),
        user_agent: "newApp".to_string(),
    }
}

fn test_config(log_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.credentials = credentials();
    config.options.log_directory = log_dir.path().to_path_buf();
    config.options.page_delay_ms = 0;
    config.options.show_progress = false;
    config
}

fn post(id: &str, url: &str, domain: &str) -> Value {
    json!({
        "kind": "t3",
        "data": {
            "id": id,
            "title": format!("post {}", id),
            "author": "poster",
            "url": url,
            "domain": domain,
            "subreddit": "pics"
        }
    })
}

fn listing(children: Vec<Value>, after: Option<&str>) -> Value {
    json!({
        "kind": "Listing",
        "data": { "after": after, "children": children }
    })
}

async fn mock_login(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/access_token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "access_token": "tok",
                    "token_type": "bearer",
                    "expires_in": 3600,
                    "scope": "*"
                }));
        })
        .await;
}

async fn login(server: &MockServer) -> RedditApi {
    RedditApi::login_with(&credentials(), &server.base_url(), &server.base_url())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_board_listing_follows_cursor_until_limit() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let first_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/new")
                .header("authorization", "Bearer tok")
                .query_param("limit", "3")
                .query_param("raw_json", "1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(
                    vec![
                        post("a", "https://i.imgur.com/a.jpg", "i.imgur.com"),
                        post("b", "https://example.com/article", "example.com"),
                    ],
                    Some("t3_b"),
                ));
        })
        .await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/new")
                .query_param("limit", "1")
                .query_param("after", "t3_b");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(
                    vec![
                        post("c", "https://example.com/c.png", "example.com"),
                        post("d", "https://gfycat.com/Clip", "gfycat.com"),
                    ],
                    Some("t3_d"),
                ));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let mut context = SearchContext::with_api(test_config(&log_dir), api).unwrap();

    let spec = QuerySpec {
        sort: SortMode::New,
        limit: Limit::Count(NonZeroU32::new(3).unwrap()),
        ..QuerySpec::new(Target::Board("pics".into()))
    };
    let result = context.run(&spec).await.unwrap();
    let log_path = context.close().unwrap();

    first_page.assert_async().await;
    second_page.assert_async().await;

    assert_eq!(result.summary.seen, 3);
    assert_eq!(result.summary.classified, 2);
    let ids: Vec<_> = result.posts.iter().map(|p| p.post_id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(result.posts[0].post_type, Some(PostType::Imgur));
    assert_eq!(result.posts[1].post_type, Some(PostType::Direct));

    let entries = read_posts_log(&log_path).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].0, 3);
}

#[tokio::test]
async fn test_unlimited_listing_stops_without_cursor() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/top")
                .query_param("t", "week")
                .query_param("limit", "100");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(
                    vec![post("a", "https://example.com/a.gif", "example.com")],
                    None,
                ));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let mut context = SearchContext::with_api(test_config(&log_dir), api).unwrap();

    let spec = QuerySpec {
        sort: SortMode::Top,
        time: TimeFilter::Week,
        ..QuerySpec::new(Target::Frontpage)
    };
    let result = context.run(&spec).await.unwrap();

    page.assert_hits_async(1).await;
    assert_eq!(result.summary.seen, 1);
    assert_eq!(result.summary.direct, 1);
}

#[tokio::test]
async fn test_saved_items_skip_comments() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let saved = server
        .mock_async(|when, then| {
            when.method(GET).path("/user/someone/saved");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(
                    vec![
                        json!({"kind": "t1", "data": {"id": "c1", "body": "comment"}}),
                        post("a", "https://i.imgur.com/a", "imgur.com"),
                    ],
                    None,
                ));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let mut context = SearchContext::with_api(test_config(&log_dir), api).unwrap();

    let result = context.run(&QuerySpec::new(Target::Saved)).await.unwrap();

    saved.assert_async().await;
    assert_eq!(result.summary.seen, 2);
    assert_eq!(result.summary.skipped, 1);
    assert_eq!(result.summary.imgur, 1);
    assert_eq!(result.posts.len(), 1);
}

#[tokio::test]
async fn test_board_search_parameters() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/search")
                .query_param("q", "cats")
                .query_param("sort", "hot")
                .query_param("t", "all")
                .query_param("restrict_sr", "on");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(Vec::new(), None));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let mut context = SearchContext::with_api(test_config(&log_dir), api).unwrap();

    let spec = QuerySpec {
        search: Some("cats".into()),
        ..QuerySpec::new(Target::Board("pics".into()))
    };
    let result = context.run(&spec).await.unwrap();

    search.assert_async().await;
    assert!(result.posts.is_empty());
    assert_eq!(result.summary.seen, 0);
}

#[tokio::test]
async fn test_rate_limit_keeps_logged_posts() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/r/pics/hot").query_param("limit", "5");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(
                    vec![post("a", "https://example.com/a.jpg", "example.com")],
                    Some("t3_a"),
                ));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/hot")
                .query_param("limit", "4")
                .query_param("after", "t3_a");
            then.status(429).header("x-ratelimit-reset", "42");
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let context = SearchContext::with_api(test_config(&log_dir), api).unwrap();
    let log_path = context.log_path().to_path_buf();

    let spec = QuerySpec {
        limit: Limit::Count(NonZeroU32::new(5).unwrap()),
        ..QuerySpec::new(Target::Board("pics".into()))
    };
    let err = context.run_to_close(&spec).await.unwrap_err();
    assert!(matches!(err, Error::RateLimited(42)));

    let entries = read_posts_log(&log_path).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1.post_id, "a");
}

#[tokio::test]
async fn test_rejected_login() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/access_token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"error": "invalid_grant"}));
        })
        .await;

    let err = RedditApi::login_with(&credentials(), &server.base_url(), &server.base_url())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn test_empty_page_with_cursor_ends_listing() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/r/pics/hot");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(Vec::new(), Some("t3_x")));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let mut config = test_config(&log_dir);
    // Any wait before the first page would trip the timeout below.
    config.options.page_delay_ms = 60_000;
    let context = SearchContext::with_api(config, api).unwrap();

    let spec = QuerySpec::new(Target::Board("pics".into()));
    let (result, _) = tokio::time::timeout(Duration::from_secs(10), context.run_to_close(&spec))
        .await
        .expect("first page was delayed")
        .unwrap();

    page.assert_hits_async(1).await;
    assert_eq!(result.summary.seen, 0);
    assert!(result.posts.is_empty());
}

#[tokio::test]
async fn test_large_limit_splits_into_full_and_remainder_pages() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;

    let first: Vec<Value> = (0..100)
        .map(|i| post(&format!("p{}", i), "https://example.com/x.jpg", "example.com"))
        .collect();
    let second: Vec<Value> = (100..150)
        .map(|i| post(&format!("p{}", i), "https://example.com/x", "example.com"))
        .collect();

    let first_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/new")
                .query_param("limit", "100")
                .query_param_missing("after");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(first, Some("t3_p99")));
        })
        .await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/pics/new")
                .query_param("limit", "50")
                .query_param("after", "t3_p99");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(listing(second, Some("t3_p149")));
        })
        .await;

    let log_dir = TempDir::new().unwrap();
    let api = login(&server).await;
    let context = SearchContext::with_api(test_config(&log_dir), api).unwrap();

    let spec = QuerySpec {
        sort: SortMode::New,
        limit: Limit::Count(NonZeroU32::new(150).unwrap()),
        ..QuerySpec::new(Target::Board("pics".into()))
    };
    let (result, log_path) = context.run_to_close(&spec).await.unwrap();

    first_page.assert_hits_async(1).await;
    second_page.assert_hits_async(1).await;
    assert_eq!(result.summary.seen, 150);
    assert_eq!(result.summary.direct, 100);
    assert_eq!(result.posts.len(), 100);
    assert_eq!(read_posts_log(&log_path).unwrap().len(), 150);
}
