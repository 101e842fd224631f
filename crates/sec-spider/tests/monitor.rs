use sec_spider::analysis::{Action, Classification};
use sec_spider::config::Config;
use sec_spider::fs::read_json;
use sec_spider::monitor;
use sec_spider::stock::sec::Spider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONCEPT_PATH: &str = "/CIK0001364742/us-gaap/Assets.json";

fn spider(server: &MockServer) -> Spider {
    let config = Config {
        base_url: server.uri(),
        ..Config::default()
    };
    Spider::new(config).unwrap()
}

#[tokio::test]
async fn run_writes_one_analysis_per_filing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONCEPT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "units": {
                "USD": [
                    {"end": "2024-03-31", "val": -1000, "form": "10-Q"},
                    {"end": "2024-06-30", "val": 2500000000u64, "form": "10-Q"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let out = tempfile::tempdir().unwrap();

    let report = monitor::run(&spider(&server), out.path(), false)
        .await
        .unwrap();

    assert_eq!(report.filings, 2);
    assert_eq!(report.written.len(), 2);
    assert!(report.fetch_error.is_none());
    for path in &report.written {
        assert!(path.starts_with(out.path()));
        let analysis: Classification = read_json(path).await.unwrap();
        assert!(["2024-03-31", "2024-06-30"].contains(&analysis.filing_date.as_str()));
    }

    // the last write always survives, even when both land in the same second
    let last: Classification = read_json(report.written.last().unwrap()).await.unwrap();
    assert_eq!(last.filing_date, "2024-06-30");
    assert_eq!(last.assets, serde_json::Number::from(2_500_000_000u64));
    assert_eq!(last.action, Action::MajorBuy);
}

#[tokio::test]
async fn failed_fetch_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let out = tempfile::tempdir().unwrap();

    let report = monitor::run(&spider(&server), out.path(), false)
        .await
        .unwrap();

    assert_eq!(report.filings, 0);
    assert!(report.written.is_empty());
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);

    let reason = report.fetch_error.expect("fetch failure is reported");
    assert!(reason.contains("503"), "{reason}");
}

#[tokio::test]
async fn unreachable_host_is_reported_on_the_console() {
    let config = Config {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Config::default()
    };
    let spider = Spider::new(config).unwrap();
    let out = tempfile::tempdir().unwrap();

    let report = monitor::run(&spider, out.path(), true).await.unwrap();

    assert_eq!(report.filings, 0);
    assert!(report.written.is_empty());
    let reason = report.fetch_error.expect("fetch failure is reported");
    assert!(reason.starts_with("request failed"), "{reason}");
}

#[tokio::test]
async fn empty_concept_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONCEPT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"units": {}})))
        .mount(&server)
        .await;
    let out = tempfile::tempdir().unwrap();

    let report = monitor::run(&spider(&server), out.path(), false)
        .await
        .unwrap();

    assert_eq!(report.filings, 0);
    assert!(report.fetch_error.is_none());
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}
