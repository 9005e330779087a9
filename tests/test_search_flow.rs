// ABOUTME: Integration tests for the channel search flow against a mocked search service

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tubeshare::api::{ApiError, TubeShareClient};
use tubeshare::app::search::{run_search, SearchState, SEARCH_ERROR_MESSAGE};
use tubeshare::app::{App, AppEvent, EventHandler};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TubeShareClient {
    TubeShareClient::new(&server.uri(), Duration::from_secs(5), None).unwrap()
}

/// Base URL of a port that was just released, so connections are refused.
fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn one_channel() -> serde_json::Value {
    json!([{
        "channelId": "c1",
        "name": "A",
        "thumbnail": "//x/y.png",
        "navigationEndpoint": "/c1"
    }])
}

#[tokio::test]
async fn test_successful_search_opens_dropdown_with_secure_thumbnail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .and(query_param("q", "lo-fi beats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_channel()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut search = SearchState::default();
    let request = search.begin_search("lo-fi beats").unwrap();
    let outcome = run_search(&client, request).await;

    assert!(search.apply_outcome(outcome));
    assert!(search.is_open);
    assert!(!search.is_loading);
    assert_eq!(search.results.len(), 1);
    assert_eq!(search.results[0].channel_id, "c1");
    assert_eq!(search.results[0].thumbnail, "https://x/y.png");
}

#[tokio::test]
async fn test_server_error_sets_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut search = SearchState::default();
    let request = search.begin_search("anything").unwrap();
    let outcome = run_search(&client, request).await;
    assert!(matches!(outcome.result, Err(ApiError::Status { status: 500 })));

    search.apply_outcome(outcome);
    assert_eq!(search.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
    assert!(search.results.is_empty());
    assert!(!search.is_loading);
}

#[tokio::test]
async fn test_undecodable_body_is_treated_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut search = SearchState::default();
    let request = search.begin_search("x").unwrap();
    let outcome = run_search(&client, request).await;
    assert!(matches!(outcome.result, Err(ApiError::Decode(_))));

    assert!(search.apply_outcome(outcome));
    assert_eq!(search.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
    assert!(!search.is_loading);
}

#[tokio::test]
async fn test_unreachable_service_shows_fixed_message() {
    let client = TubeShareClient::new(&unreachable_base_url(), Duration::from_secs(2), None).unwrap();
    let mut search = SearchState::default();
    search.results = vec![tubeshare::models::Channel::new("old", "Old", "//x/o.png", "/old")];
    let request = search.begin_search("anything").unwrap();
    assert!(search.is_loading);

    let outcome = run_search(&client, request).await;
    assert!(matches!(outcome.result, Err(ApiError::Transport(_))));

    assert!(search.apply_outcome(outcome));
    assert_eq!(search.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
    assert!(search.results.is_empty());
    assert!(!search.is_loading);
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_channel()))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = App::with_client(client_for(&server), Duration::from_millis(20));
    app.state.dashboard.search.set_query("", std::time::Instant::now());
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.tick().await.unwrap();

    assert!(app.state.dashboard.search.results.is_empty());
    assert!(!app.state.dashboard.search.is_open);
    assert!(!app.state.dashboard.search.is_loading);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_rapid_typing_sends_only_last_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .and(query_param("q", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_channel()))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = App::with_client(client_for(&server), Duration::from_millis(100));
    for ch in "abc".chars() {
        EventHandler::process_event(AppEvent::SearchInputChar(ch), &mut app.state);
        // Nothing has settled yet
        app.tick().await.unwrap();
    }
    assert!(!app.state.dashboard.search.is_loading);

    tokio::time::sleep(Duration::from_millis(150)).await;
    app.tick().await.unwrap();
    assert!(app.state.dashboard.search.is_loading);

    assert!(app.next_search_outcome().await);
    assert!(app.needs_ui_refresh());
    assert_eq!(app.state.dashboard.search.debounced_query, "abc");
    assert_eq!(app.state.dashboard.search.results.len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_slow_stale_response_does_not_overwrite_latest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .and(query_param("q", "ru"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{
                    "channelId": "ruby",
                    "name": "Ruby",
                    "thumbnail": "//x/ruby.png",
                    "navigationEndpoint": "/ruby"
                }]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .and(query_param("q", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "channelId": "rust",
            "name": "Rust",
            "thumbnail": "//x/rust.png",
            "navigationEndpoint": "/rust"
        }])))
        .mount(&server)
        .await;

    let mut app = App::with_client(client_for(&server), Duration::from_millis(10));
    let slow = app.state.dashboard.search.begin_search("ru").unwrap();
    app.dispatch_search(slow);
    let fast = app.state.dashboard.search.begin_search("rust").unwrap();
    app.dispatch_search(fast);

    // Fast response lands first, the slow one is dropped
    assert!(app.next_search_outcome().await);
    assert!(!app.next_search_outcome().await);

    let ids: Vec<&str> = app
        .state
        .dashboard
        .search
        .results
        .iter()
        .map(|c| c.channel_id.as_str())
        .collect();
    assert_eq!(ids, vec!["rust"]);
    assert!(!app.state.dashboard.search.is_loading);
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetchChannels"))
        .and(wiremock::matchers::header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        TubeShareClient::new(&server.uri(), Duration::from_secs(5), Some("session=abc")).unwrap();
    let channels = client.fetch_channels("x").await.unwrap();
    assert!(channels.is_empty());
}
