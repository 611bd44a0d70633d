use std::time::Duration;

use pretty_assertions::assert_eq;
use reader_engine::{ApiRoutes, EpisodeSource, FailureKind, FetchSettings, ReqwestEpisodeSource};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer, settings: FetchSettings) -> ReqwestEpisodeSource {
    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    ReqwestEpisodeSource::new(ApiRoutes::single_host(base), settings).expect("client")
}

const EPISODES: &str = r#"[
    {"id": 11, "episode_number": 1, "manga_name": "Blue Harbor", "manga_cover": "cover.jpg",
     "pages": [{"filename": "a.jpg"}, {"filename": "b.jpg"}]},
    {"id": 12, "episode_number": 2, "episode_name": "Storm", "manga_name": "Blue Harbor",
     "manga_cover": "cover.jpg", "pages": [{"filename": "c.jpg"}]}
]"#;

#[tokio::test]
async fn fetches_and_decodes_episode_list() {
    reader_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/blue-harbor/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EPISODES, "application/json"))
        .mount(&server)
        .await;

    let source = source_for(&server, FetchSettings::default());
    let records = source.fetch_episodes("blue-harbor").await.expect("fetch ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(11));
    assert_eq!(records[0].manga_name, "Blue Harbor");
    assert_eq!(records[0].pages.len(), 2);
    assert_eq!(records[1].episode_name.as_deref(), Some("Storm"));
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/missing/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = source_for(&server, FetchSettings::default());
    let err = source.fetch_episodes("missing").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/slow/episodes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let source = source_for(&server, settings);
    let err = source.fetch_episodes("slow").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/large/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EPISODES, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let source = source_for(&server, settings);
    let err = source.fetch_episodes("large").await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(_)
        }
    ));
}

#[tokio::test]
async fn rejects_html_error_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/html/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let source = source_for(&server, FetchSettings::default());
    let err = source.fetch_episodes("html").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manga/broken/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"oops\": 1}", "application/json"))
        .mount(&server)
        .await;

    let source = source_for(&server, FetchSettings::default());
    let err = source.fetch_episodes("broken").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}
