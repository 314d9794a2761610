mod support;

use hnview::config::HnConfig;
use hnview::controller::SearchController;
use hnview::fetch::{FetchError, HttpFetcher, QueryUrl, StoryFetcher};
use hnview::store::memory::InMemoryStore;
use std::time::Duration;

#[tokio::test]
async fn decodes_hits_in_server_order() {
    let base = support::serve(support::search_api()).await;
    let fetcher = HttpFetcher::new(None).unwrap();

    let url = QueryUrl::new(&format!("{}/search?query=", base), "rust async");
    let stories = fetcher.fetch(&url).await.unwrap();

    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].title, "Alpha rust async");
    assert_eq!(stories[0].points, Some(10));
    assert_eq!(stories[1].title, "Beta rust async");
    assert_eq!(stories[1].url, "");
}

#[tokio::test]
async fn error_status_is_reported() {
    let base = support::serve(support::search_api()).await;
    let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();

    let url = QueryUrl::new(&format!("{}/broken?query=", base), "x");
    let err = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn body_without_hits_is_a_decode_error() {
    let base = support::serve(support::search_api()).await;
    let fetcher = HttpFetcher::new(None).unwrap();

    let url = QueryUrl::new(&format!("{}/garbage?query=", base), "x");
    let err = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn controller_over_http() {
    let base = support::serve(support::search_api()).await;
    let config = HnConfig {
        endpoint: format!("{}/search?query=", base),
        ..HnConfig::default()
    };
    let fetcher = HttpFetcher::new(None).unwrap();
    let mut ctl = SearchController::new(fetcher, InMemoryStore::new(), &config).unwrap();

    ctl.set_query("react").unwrap();
    ctl.submit().await.unwrap();

    let titles: Vec<_> = ctl.state().stories().iter().map(|s| s.title.clone()).collect();
    assert_eq!(titles, vec!["Alpha react", "Beta react"]);
    assert!(!ctl.state().is_loading());
    assert!(!ctl.state().is_error());
}

#[tokio::test]
async fn controller_turns_http_errors_into_failure() {
    let base = support::serve(support::search_api()).await;
    let config = HnConfig {
        endpoint: format!("{}/broken?query=", base),
        ..HnConfig::default()
    };
    let fetcher = HttpFetcher::new(None).unwrap();
    let mut ctl = SearchController::new(fetcher, InMemoryStore::new(), &config).unwrap();

    ctl.set_query("x").unwrap();
    ctl.submit().await.unwrap();

    assert!(ctl.state().is_error());
    assert!(!ctl.state().is_loading());
    assert!(ctl.state().stories().is_empty());
}

#[tokio::test]
async fn controller_turns_timeout_into_failure() {
    let base = support::serve(support::search_api()).await;
    let config = HnConfig {
        endpoint: format!("{}/slow?query=", base),
        timeout_secs: Some(1),
        ..HnConfig::default()
    };
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();
    let mut ctl = SearchController::new(fetcher, InMemoryStore::new(), &config).unwrap();

    ctl.set_query("x").unwrap();
    let started = std::time::Instant::now();
    ctl.submit().await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(ctl.state().is_error());
    assert!(!ctl.state().is_loading());
}
