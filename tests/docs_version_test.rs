// tests/docs_version_test.rs
use actions_kit::docs::resolve_docs_version;
use actions_kit::git::MockRepository;
use actions_kit::releases::{latest_release_hash, MockReleases};
use actions_kit::ActionsKitError;

const RELEASE_HASH: &str = "abc123def4567890abcdef1234567890abcdef12";
const DEV_HASH: &str = "def456abc1234567890abcdef1234567890abcde";

fn released_repo() -> MockRepository {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.5.12", RELEASE_HASH);
    repo
}

#[test]
fn test_head_at_release_gets_latest_alias() {
    let releases = MockReleases::with_latest("v2.5.12");
    let mut repo = released_repo();
    repo.set_head(RELEASE_HASH);

    let docs = resolve_docs_version(&repo, &releases).unwrap();
    assert_eq!((docs.version.as_str(), docs.alias.as_str()), ("2.5", "latest"));
}

#[test]
fn test_head_past_release_gets_dev() {
    let releases = MockReleases::with_latest("v2.5.12");
    let mut repo = released_repo();
    repo.set_head(DEV_HASH);
    repo.add_ancestry(RELEASE_HASH, DEV_HASH);

    let docs = resolve_docs_version(&repo, &releases).unwrap();
    assert_eq!((docs.version.as_str(), docs.alias.as_str()), ("dev", ""));
}

#[test]
fn test_no_release_gets_dev() {
    let releases = MockReleases::empty();
    let mut repo = MockRepository::new();
    repo.set_head(DEV_HASH);

    let docs = resolve_docs_version(&repo, &releases).unwrap();
    assert_eq!((docs.version.as_str(), docs.alias.as_str()), ("dev", ""));
}

#[test]
fn test_unrelated_head_is_consistency_error() {
    let releases = MockReleases::with_latest("v2.5.12");
    let mut repo = released_repo();
    repo.set_head(DEV_HASH);
    // no ancestry between release and HEAD

    let result = resolve_docs_version(&repo, &releases);
    match result {
        Err(ActionsKitError::Consistency(msg)) => {
            // hashes are abbreviated to 7 characters in the message
            assert!(msg.contains(&DEV_HASH[..7]));
            assert!(msg.contains(&RELEASE_HASH[..7]));
        }
        other => panic!("expected consistency error, got {:?}", other),
    }
}

#[test]
fn test_release_tag_missing_from_history() {
    let releases = MockReleases::with_latest("v2.5.12");
    let mut repo = MockRepository::new();
    repo.set_head(DEV_HASH);

    let result = resolve_docs_version(&repo, &releases);
    assert!(matches!(result, Err(ActionsKitError::Consistency(_))));

    let result = latest_release_hash(&releases, &repo);
    assert!(matches!(result, Err(ActionsKitError::Consistency(_))));
}

#[test]
fn test_latest_release_hash_round_trip() {
    let releases = MockReleases::with_latest("v2.5.12");
    let repo = released_repo();

    assert_eq!(
        latest_release_hash(&releases, &repo).unwrap(),
        Some(RELEASE_HASH.to_string())
    );
}
