//! End-to-end load cycle over HTTP against a mock API server.

use std::sync::Arc;

use raidexplorer_core::load_cycle::{
    CycleFailure, CycleOutcome, LoadOrchestrator, LoadRequest, NoOpProgressReporter,
};
use raidexplorer_core::sections::{SectionKind, SectionResult, SectionToggles};
use raidexplorer_gw2_api::Gw2ApiClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEEFFFFFFFF-0000-1111-2222-333333333333";

async fn mount_json(server: &MockServer, resource: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{}", resource)))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

fn orchestrator(server: &MockServer) -> LoadOrchestrator<NoOpProgressReporter> {
    let client = Gw2ApiClient::new(&format!("{}/v2", server.uri())).unwrap();
    LoadOrchestrator::new(Arc::new(client), Arc::new(NoOpProgressReporter))
}

#[tokio::test]
async fn currency_cycle_merges_all_locations() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "tokeninfo",
        r#"{"id": "x", "name": "key", "permissions": ["account", "inventories", "wallet", "characters"]}"#,
    )
    .await;
    mount_json(&server, "characters", r#"["Alpha"]"#).await;
    mount_json(
        &server,
        "characters/Alpha",
        r#"{
            "name": "Alpha",
            "equipment": [{"id": 77302, "slot": "Accessory1"}],
            "bags": [null, {"id": 8932, "size": 4, "inventory": [null, {"id": 77302, "count": 3}]}]
        }"#,
    )
    .await;
    mount_json(&server, "account/inventory", r#"[{"id": 77302, "count": 2}, null]"#).await;
    mount_json(
        &server,
        "account/materials",
        r#"[{"id": 77302, "category": 38, "count": 5}]"#,
    )
    .await;
    mount_json(&server, "account/bank", r#"[null, {"id": 77302, "count": 1}]"#).await;
    mount_json(&server, "account/wallet", r#"[{"id": 28, "value": 1200}]"#).await;

    let toggles = SectionToggles::only(&[SectionKind::Currency]);
    let report = orchestrator(&server)
        .run(LoadRequest::new(TOKEN, toggles))
        .await
        .unwrap();

    assert!(report.is_success(), "{}", report.summary());
    let Some(SectionResult::Currency(totals)) = report.section(SectionKind::Currency) else {
        panic!("currency section missing");
    };
    let value = |id: u32| totals.iter().find(|t| t.id == id).and_then(|t| t.value);
    assert_eq!(value(77302), Some(12));
    assert_eq!(value(28), Some(1200));
    assert_eq!(value(39), None);
}

#[tokio::test]
async fn rejected_key_fails_without_section_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tokeninfo"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"text": "Invalid access token"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/account/raids"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let report = orchestrator(&server)
        .run(LoadRequest::new(TOKEN, SectionToggles::default()))
        .await
        .unwrap();

    assert_eq!(
        report.outcome,
        CycleOutcome::Failed {
            failure: CycleFailure::CredentialInvalid
        }
    );
    assert_eq!(report.summary(), "Your API key is not valid.");
}
