use super::{FixtureProvider, demo_provider};
use crate::config::Settings;
use crate::fetcher::MessageSource;
use crate::utils::FetchError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_builtin_fixture_has_eight_records() {
    let provider = FixtureProvider::builtin().unwrap();
    let messages = provider.messages();

    assert_eq!(messages.len(), 8);
    assert_eq!(messages.iter().filter(|m| m.source == "mongo").count(), 4);
    assert_eq!(messages.iter().filter(|m| m.source == "mariadb").count(), 4);
    assert_eq!(messages[0].id, "8c58fa8c-b996-4939-9312-221bda3cbb01");
    assert_eq!(messages[0].timestamp, "2017-05-13T15:50:54.502Z");
}

#[test]
fn test_builtin_fixture_duplicates_across_sources() {
    let provider = FixtureProvider::builtin().unwrap();
    let (mongo, mariadb) = provider.messages().split_at(4);

    for (a, b) in mongo.iter().zip(mariadb) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.timestamp, b.timestamp);
        assert_eq!(a.message, b.message);
        assert_ne!(a.source, b.source);
    }
}

#[test]
fn test_from_path_loads_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("messages.json");
    fs::write(
        &path,
        r#"[{"id":"1","timestamp":"t","message":"m","source":"local"}]"#,
    )
    .expect("write fixture");

    let provider = FixtureProvider::from_path(&path).unwrap();
    assert_eq!(provider.messages().len(), 1);
    assert_eq!(provider.messages()[0].source, "local");
}

#[test]
fn test_from_path_missing_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("nope.json");

    let err = FixtureProvider::from_path(&path).unwrap_err();
    assert!(matches!(err, FetchError::Fixture { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_from_path_rejects_incomplete_records() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("messages.json");
    fs::write(&path, r#"[{"id":"1","message":"m"}]"#).expect("write fixture");

    let err = FixtureProvider::from_path(&path).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_messages_returns_copy() {
    let provider = FixtureProvider::builtin().unwrap();
    let first = provider.fetch_messages().await.unwrap();
    let second = provider.fetch_messages().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, provider.messages());
}

#[test]
fn test_demo_provider_off_by_default() {
    let settings = Settings::default();
    assert!(demo_provider(&settings).unwrap().is_none());
}

#[test]
fn test_demo_provider_uses_builtin_when_enabled() {
    let mut settings = Settings::default();
    settings.fetcher.demo = true;

    let provider = demo_provider(&settings).unwrap().expect("demo provider");
    assert_eq!(provider.messages().len(), 8);
}

#[test]
fn test_demo_provider_reads_configured_fixture() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("messages.json");
    fs::write(
        &path,
        r#"[{"id":"a","timestamp":"t","message":"m","source":"offline"}]"#,
    )
    .expect("write fixture");

    let mut settings = Settings::default();
    settings.fetcher.demo = true;
    settings.fetcher.fixture_path = Some(path.to_string_lossy().into_owned());

    let provider = demo_provider(&settings).unwrap().expect("demo provider");
    assert_eq!(provider.messages()[0].source, "offline");
}
