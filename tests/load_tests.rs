use axum::{http::StatusCode, routing::get, Router};
use m3ucat::{
    fetch::{FetchConfig, PlaylistFetcher, PlaylistSource},
    load_catalog, PlaylistError,
};
use std::io::Write;
use std::time::Duration;

const PLAYLIST: &str = r#"#EXTM3U
#EXTINF:-1 tvg-id="test1" tvg-logo="http://example.com/logo1.png" group-title="Test",Test Channel 1
http://example.com/stream1.m3u8
#EXTINF:-1 tvg-id="test2" tvg-logo="http://example.com/logo2.png" group-title="Test",Test Channel 2
http://example.com/stream2.m3u8
"#;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher() -> PlaylistFetcher {
    PlaylistFetcher::new(&FetchConfig {
        user_agent: "m3ucat-test".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_load_local_file() {
    let mut file = tempfile::Builder::new().suffix(".m3u").tempfile().unwrap();
    file.write_all(PLAYLIST.as_bytes()).unwrap();

    let source = file.path().to_str().unwrap().to_string();
    let catalog = load_catalog(&fetcher(), &source).await.unwrap();

    assert_eq!(catalog.len(), 2);
    let channels = catalog.list(Some("Test"));
    assert_eq!(channels[0].name, "Test Channel 1");
    assert_eq!(channels[0].id.as_deref(), Some("test1"));
    assert_eq!(channels[1].url, "http://example.com/stream2.m3u8");
}

#[tokio::test]
async fn test_missing_local_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.m3u");

    let err = fetcher()
        .load(missing.to_str().unwrap())
        .await
        .unwrap_err();

    match err {
        PlaylistError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_remote_playlist() {
    let app = Router::new().route("/playlist.m3u", get(|| async { PLAYLIST }));
    let base = serve(app).await;

    let catalog = load_catalog(&fetcher(), &format!("{}/playlist.m3u", base))
        .await
        .unwrap();

    assert_eq!(catalog.len(), 2);
    let groups = catalog.list_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group, "Test");
    assert_eq!(groups[0].count, 2);
    assert_eq!(
        catalog.play("test channel 2").unwrap().url,
        "http://example.com/stream2.m3u8"
    );
}

#[tokio::test]
async fn test_remote_404_is_fetch_failure() {
    // The body is a valid playlist, so any parsed output would mean the status was ignored.
    let app = Router::new().route(
        "/playlist.m3u",
        get(|| async { (StatusCode::NOT_FOUND, PLAYLIST) }),
    );
    let base = serve(app).await;
    let url = format!("{}/playlist.m3u", base);

    let err = fetcher().load(&url).await.unwrap_err();

    match err {
        PlaylistError::Fetch { url: failed, source } => {
            assert_eq!(failed, url);
            assert_eq!(source.status(), Some(reqwest::StatusCode::NOT_FOUND));
        }
        other => panic!("expected Fetch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let app = Router::new().route(
        "/ua",
        get(|headers: axum::http::HeaderMap| async move {
            let ua = headers
                .get(axum::http::header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("<none>")
                .to_string();
            format!("#EXTM3U\n#EXTINF:-1,{}\nhttp://example.com/ua.m3u8\n", ua)
        }),
    );
    let base = serve(app).await;

    let source = PlaylistSource::parse(&format!("{}/ua", base));
    let text = fetcher().fetch_text(&source).await.unwrap();
    let channels = m3ucat::parse_m3u(&text);
    assert_eq!(channels[0].name, "m3ucat-test");
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_failure() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher()
        .load(&format!("http://{}/playlist.m3u", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::Fetch { .. }));
}
