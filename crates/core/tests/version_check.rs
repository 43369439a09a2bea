//! Version check against a mock release server.

use raidexplorer_core::updates::{check_for_update, VersionStatus};
use raidexplorer_core::Error;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn reports_newer_release() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version.txt"))
        .and(header("user-agent", "RaidExplorer/1.1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"version": "1.2", "release_url": "https://github.com/Aens/Gw2RaidExplorer/releases"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let status = check_for_update(&format!("{}/version.txt", server.uri()), "1.1.0")
        .await
        .unwrap();

    match status {
        VersionStatus::UpdateAvailable {
            latest,
            release_url,
            ..
        } => {
            assert_eq!(latest, "1.2.0");
            assert!(release_url.unwrap().ends_with("/releases"));
        }
        other => panic!("unexpected status: {other:?}"),
    }
}

#[tokio::test]
async fn same_version_is_up_to_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"version": "1.1"}"#))
        .mount(&server)
        .await;

    let status = check_for_update(&format!("{}/version.txt", server.uri()), "1.1.0")
        .await
        .unwrap();
    assert!(matches!(status, VersionStatus::UpToDate { .. }));
}

#[tokio::test]
async fn missing_file_is_a_check_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = check_for_update(&format!("{}/version.txt", server.uri()), "1.1.0")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::VersionCheck(_)));
    assert!(err.to_string().contains("HTTP 404"));
}

#[tokio::test]
async fn malformed_file_is_a_check_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1.2"))
        .mount(&server)
        .await;

    let err = check_for_update(&format!("{}/version.txt", server.uri()), "1.1.0")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::VersionCheck(_)));
}
