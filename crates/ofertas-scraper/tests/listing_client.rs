//! Integration tests for `ListingClient::fetch_page` using wiremock HTTP mocks.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ofertas_scraper::{ListingClient, PageFetcher, ScraperError};

/// 5-second timeout, descriptive UA.
fn test_client() -> ListingClient {
    ListingClient::new(5, "ofertas-test/0.1").expect("failed to build test ListingClient")
}

#[tokio::test]
async fn fetch_page_returns_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ofertas"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = test_client();
    let body = client
        .fetch_page(&format!("{}/ofertas?page=1", server.uri()))
        .await
        .expect("expected Ok");

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn fetch_page_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "ofertas-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().fetch_page(&server.uri()).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn fetch_page_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/ofertas?page=99", server.uri());
    let err = test_client().fetch_page(&url).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::NotFound { url: ref u } if *u == url),
        "expected NotFound, got: {err:?}"
    );
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn fetch_page_maps_5xx_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client().fetch_page(&server.uri()).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_page_times_out_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = ListingClient::new(1, "ofertas-test/0.1").unwrap();
    let err = client.fetch_page(&server.uri()).await.unwrap_err();

    assert!(matches!(err, ScraperError::Http(_)), "expected Http, got: {err:?}");
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn connection_refused_is_http_error() {
    // Port 9 (discard) on localhost is not expected to be listening.
    let err = test_client()
        .fetch_page("http://127.0.0.1:9/ofertas")
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::Http(_)), "expected Http, got: {err:?}");
}

#[tokio::test]
async fn page_fetcher_impl_delegates_to_fetch_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("via trait"))
        .mount(&server)
        .await;

    let client = test_client();
    let body = PageFetcher::fetch(&client, &server.uri()).await.unwrap();
    assert_eq!(body, "via trait");
}
