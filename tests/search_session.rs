//! End-to-end tests: config file -> credentials -> pipeline -> rendered output.
//!
//! Both directories are `wiremock` servers whose URLs are written into a
//! temporary config file, so these tests cover the same path as the binary.

use podsift::config::PodsiftConfig;
use podsift::credentials::Credentials;
use podsift::{BackendStatus, run_repl, startup};
use podsift_search::PodcastRecord;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

fn config_for(ln: &MockServer, ps: &MockServer, extra: &str) -> String {
    format!(
        r#"
[search]
timeout_seconds = 5
display_limit = 10

[listen_notes]
api_key = "ln-file-key"
base_url = "{}"

[podscan]
api_key = "ps-file-key"
base_url = "{}"

[presentation]
max_sentences = 1
{extra}
"#,
        ln.uri(),
        ps.uri()
    )
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn listen_notes_results(items: &[(&str, &str)]) -> Value {
    let results: Vec<Value> = items
        .iter()
        .map(|(title, publisher)| {
            json!({
                "title_original": title,
                "publisher_original": publisher,
                "description_original": "<p>First sentence.</p> Second sentence.",
                "website": "",
                "listennotes_url": format!("https://www.listennotes.com/c/{title}/")
            })
        })
        .collect();
    json!({ "results": results })
}

fn podscan_results(items: &[(&str, &str)]) -> Value {
    let podcasts: Vec<Value> = items
        .iter()
        .map(|(title, publisher)| {
            json!({
                "podcast_name": title,
                "publisher_name": publisher,
                "podcast_description": "Only one sentence here",
                "podcast_url": "https://podscan.example/show"
            })
        })
        .collect();
    json!({ "podcasts": podcasts })
}

#[tokio::test]
async fn config_file_credentials_reach_both_directories() {
    let ln = MockServer::start().await;
    let ps = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("X-ListenAPI-Key", "ln-file-key"))
        .and(query_param("q", "entertainment comedy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listen_notes_results(&[("Comedy Bang Bang", "Earwolf")])),
        )
        .expect(1)
        .mount(&ln)
        .await;
    Mock::given(method("GET"))
        .and(path("/podcasts/search"))
        .and(header("Authorization", "Bearer ps-file-key"))
        .and(query_param("query", "entertainment comedy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(podscan_results(&[("SmartLess", ""), ("comedy bang bang", "Dup")])),
        )
        .expect(1)
        .mount(&ps)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, &config_for(&ln, &ps, ""));
    let config = PodsiftConfig::load(Some(&path)).expect("load config");
    let credentials = Credentials::resolve_with(&config, no_env);
    assert_eq!(credentials.status(), BackendStatus::Both);

    let session = startup::build_session(&config, &credentials, false).expect("session");
    let mut out = Vec::new();
    let report = session
        .handle("Find me comedy podcasts", &mut out)
        .await
        .expect("handle");
    let text = String::from_utf8(out).expect("utf8");

    assert_eq!(report.fetched, 3);
    assert_eq!(report.results.len(), 2);
    assert!(text.contains("Found 2 podcast(s) for: 'find me comedy podcasts'"));
    assert!(text.contains("#1 - Comedy Bang Bang"));
    assert!(text.contains("#2 - SmartLess"));
    assert!(text.contains("Host: Unknown Host"));
    assert!(text.contains("Description: First sentence.\n"));
    assert!(text.contains("Link: https://www.listennotes.com/c/Comedy Bang Bang/"));
    assert!(text.contains(
        "Search completed. Showing top 2 unique podcast(s) (1 from Listen Notes, 1 from Podscan)."
    ));
}

#[tokio::test]
async fn environment_key_overrides_file_key() {
    let ln = MockServer::start().await;
    let ps = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("X-ListenAPI-Key", "ln-env-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listen_notes_results(&[("Env Show", "Env")])),
        )
        .expect(1)
        .mount(&ln)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(podscan_results(&[])))
        .mount(&ps)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, &config_for(&ln, &ps, ""));
    let config = PodsiftConfig::load(Some(&path)).expect("load config");
    let credentials = Credentials::resolve_with(&config, |var| {
        (var == "LISTEN_NOTES_API_KEY").then(|| "ln-env-key".to_owned())
    });

    let session = startup::build_session(&config, &credentials, false).expect("session");
    let report = session
        .handle("anything", &mut Vec::new())
        .await
        .expect("handle");
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].title, "Env Show");
}

#[tokio::test]
async fn configured_topics_shape_the_query() {
    let ln = MockServer::start().await;
    let ps = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "space rocket launches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listen_notes_results(&[])))
        .expect(1)
        .mount(&ln)
        .await;
    Mock::given(method("GET"))
        .and(query_param("query", "space rocket launches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(podscan_results(&[])))
        .expect(1)
        .mount(&ps)
        .await;

    let topics = r#"
[[topics]]
name = "space"
keywords = ["rocket", "nasa"]
"#;
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, &config_for(&ln, &ps, topics));
    let config = PodsiftConfig::load(Some(&path)).expect("load config");
    let credentials = Credentials::resolve_with(&config, no_env);

    let session = startup::build_session(&config, &credentials, false).expect("session");
    let mut out = Vec::new();
    let report = session
        .handle("show me rocket launches", &mut out)
        .await
        .expect("handle");
    assert!(report.results.is_empty());
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("No podcasts found."));
    assert!(text.contains("Search terms: 'space rocket launches'"));
}

#[tokio::test]
async fn json_session_prints_parseable_records() {
    let ln = MockServer::start().await;
    let ps = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listen_notes_results(&[("B Show", "Bee")])),
        )
        .mount(&ln)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(podscan_results(&[("A Show", "Ay")])),
        )
        .mount(&ps)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, &config_for(&ln, &ps, ""));
    let config = PodsiftConfig::load(Some(&path)).expect("load config");
    let credentials = Credentials::resolve_with(&config, no_env);
    let session = startup::build_session(&config, &credentials, true).expect("session");

    let mut out = Vec::new();
    session
        .handle("podcasts sorted alphabetically", &mut out)
        .await
        .expect("handle");
    let records: Vec<PodcastRecord> = serde_json::from_slice(&out).expect("json array");
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A Show", "B Show"]);
}

#[tokio::test]
async fn interactive_session_with_failing_directories_keeps_going() {
    let ln = MockServer::start().await;
    let ps = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ln)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ps)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, &config_for(&ln, &ps, ""));
    let config = PodsiftConfig::load(Some(&path)).expect("load config");
    let credentials = Credentials::resolve_with(&config, no_env);
    let session = startup::build_session(&config, &credentials, false).expect("session");

    let mut out = Vec::new();
    run_repl(
        &session,
        "comedy\n\nhistory\nquit\n".as_bytes(),
        &mut out,
        std::future::pending(),
    )
    .await
    .expect("repl");
    let text = String::from_utf8(out).expect("utf8");

    assert_eq!(text.matches("No podcasts found.").count(), 2);
    assert_eq!(
        text.matches("Showing top 0 unique podcast(s) (0 from Listen Notes, 0 from Podscan).")
            .count(),
        2
    );
    assert!(!text.contains("Error:"));
    assert!(text.ends_with("Goodbye!\n"));
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[search]\ndisplay_limit = 0\n");
    assert!(PodsiftConfig::load(Some(&path)).is_err());
}
