use mygreat_adaptors::{DirectoryLocator, FileLoader, JsonFileStore, MemoryStore};
use mygreat_core::{
    Analyser, LoadError, LocalRepository, Locator, MigrationLoader, MigrationSource,
    RecordStore, RemoteRepository, SourceError,
};
use mygreat_test_utils::{
    flatten, reference_expected, reference_record, write_migration_stubs, REFERENCE_LOCAL,
    REFERENCE_RECORD_ID,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn stub_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_migration_stubs(dir.path(), &REFERENCE_LOCAL, "js");
    dir
}

fn pattern(dir: &TempDir, glob: &str) -> String {
    format!("{}/{}", dir.path().display(), glob)
}

#[tokio::test]
async fn reference_fixture_from_directory_and_memory() {
    let dir = stub_dir();
    let local = LocalRepository::new(DirectoryLocator::new(pattern(&dir, "*.js")));
    let remote = RemoteRepository::new(MemoryStore::new(vec![reference_record()]));

    let collection = Analyser::new(local, remote).analyse().await.unwrap();

    assert_eq!(flatten(&collection), reference_expected());
}

#[tokio::test]
async fn reference_fixture_from_json_file() {
    let dir = stub_dir();
    let records = dir.path().join("records.json");
    std::fs::write(
        &records,
        format!(
            r#"[{{
                "_id": "{REFERENCE_RECORD_ID}",
                "files": ["20170914202400", "20170914205000", "20170914210300"],
                "createdAt": "2017-09-19T19:46:50.000Z"
            }}]"#
        ),
    )
    .unwrap();

    let local = LocalRepository::new(DirectoryLocator::new(pattern(&dir, "*.js")));
    let remote = RemoteRepository::new(JsonFileStore::new(&records));

    let collection = Analyser::new(local, remote).analyse().await.unwrap();

    assert_eq!(flatten(&collection), reference_expected());
}

#[tokio::test]
async fn directory_yields_stems_and_absolute_paths() {
    let dir = stub_dir();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    std::fs::create_dir(dir.path().join("20990101000000.js")).unwrap();

    let located = DirectoryLocator::new(pattern(&dir, "*.js"))
        .locate()
        .await
        .unwrap();

    let names: Vec<_> = located.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, REFERENCE_LOCAL.to_vec());
    assert!(located.iter().all(|m| m.path.is_absolute()));
}

#[tokio::test]
async fn directory_skips_dotfiles() {
    let dir = stub_dir();
    std::fs::write(dir.path().join(".gitkeep"), "").unwrap();
    std::fs::write(dir.path().join(".20170914999999.js.swp"), "").unwrap();

    let located = DirectoryLocator::new(pattern(&dir, "*"))
        .locate()
        .await
        .unwrap();

    let names: Vec<_> = located.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, REFERENCE_LOCAL.to_vec());
}

#[tokio::test]
async fn missing_directory_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let locator = DirectoryLocator::new(pattern(&dir, "missing/*.js"));

    let err = locator.locate().await.unwrap_err();

    assert!(matches!(err, SourceError::Unavailable { .. }));
}

#[tokio::test]
async fn invalid_pattern_is_unavailable() {
    let dir = stub_dir();
    let locator = DirectoryLocator::new(pattern(&dir, "[.js"));

    assert!(matches!(
        locator.locate().await,
        Err(SourceError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn unnameable_file_is_malformed() {
    let dir = stub_dir();
    std::fs::write(dir.path().join("bad name.js"), "").unwrap();

    let err = DirectoryLocator::new(pattern(&dir, "*.js"))
        .locate()
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::MalformedEntry { .. }));
}

#[tokio::test]
async fn empty_directory_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = LocalRepository::new(DirectoryLocator::new(pattern(&dir, "*.sql")));
    assert!(repo.locate().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_failure_aborts_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalRepository::new(DirectoryLocator::new(pattern(&dir, "nope/*.js")));
    let remote = RemoteRepository::new(MemoryStore::new(vec![reference_record()]));

    let err = Analyser::new(local, remote).analyse().await.unwrap_err();

    assert!(err.is_retryable());
}

#[tokio::test]
async fn new_files_show_up_on_next_analysis() {
    let dir = stub_dir();
    let analyser = Analyser::new(
        LocalRepository::new(DirectoryLocator::new(pattern(&dir, "*.js"))),
        RemoteRepository::new(MemoryStore::new(vec![reference_record()])),
    );

    assert_eq!(analyser.analyse().await.unwrap().len(), 6);

    write_migration_stubs(dir.path(), &["20170915000000"], "js");
    let collection = analyser.analyse().await.unwrap();

    assert_eq!(collection.len(), 7);
    assert!(collection.get("20170915000000").unwrap().is_pending());
}

#[tokio::test]
async fn json_store_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).records().await.unwrap_err();

    assert!(matches!(err, SourceError::MalformedEntry { .. }));
}

#[tokio::test]
async fn json_store_directory_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    let err = JsonFileStore::new(dir.path()).records().await.unwrap_err();

    assert!(matches!(err, SourceError::Unavailable { .. }));
}

#[tokio::test]
async fn loader_reads_body_on_request() {
    let dir = stub_dir();
    let located = DirectoryLocator::new(pattern(&dir, "*.js"))
        .locate()
        .await
        .unwrap();

    let migration = FileLoader::new().load(&located[0]).await.unwrap();

    assert_eq!(migration.name.as_str(), "20170914182600");
    assert_eq!(migration.content.body, "-- migration 20170914182600\n");
    assert_eq!(migration.content.checksum.to_string().len(), 64);
}

#[tokio::test]
async fn loader_rejects_large_files() {
    let dir = stub_dir();
    let located = DirectoryLocator::new(pattern(&dir, "*.js"))
        .locate()
        .await
        .unwrap();

    let err = FileLoader::new()
        .with_max_file_size(4)
        .load(&located[0])
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::TooLarge { max: 4, .. }));
}

#[tokio::test]
async fn loader_reports_missing_file() {
    let dir = stub_dir();
    let located = DirectoryLocator::new(pattern(&dir, "*.js"))
        .locate()
        .await
        .unwrap();
    std::fs::remove_file(&located[0].path).unwrap();

    let err = FileLoader::new().load(&located[0]).await.unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
}
