//! Repository contract tests for the in-memory adapters.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::{
    adapters::memory::{InMemoryDeveloperRepository, InMemoryProjectRepository},
    domain::{DeveloperName, EmailAddress, EntityRef, NewDeveloper, NewProject, ProjectName},
    ports::{DeveloperRepository, ProjectRepository, RepositoryError},
};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn new_project(name: &str, clock: &DefaultClock) -> NewProject {
    NewProject::new(ProjectName::new(name).expect("valid name"), None, clock)
}

fn new_developer(email: &str, clock: &DefaultClock) -> NewDeveloper {
    NewDeveloper::new(
        DeveloperName::new("Dev").expect("valid name"),
        EmailAddress::new(email).expect("valid email"),
        None,
        None,
        clock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identities_are_ascending_and_never_reused(clock: DefaultClock) {
    let repo = InMemoryProjectRepository::new();
    let first = repo.insert(&new_project("A", &clock)).await.expect("insert A");
    let second = repo.insert(&new_project("B", &clock)).await.expect("insert B");
    repo.delete_by_id(second.id()).await.expect("delete B");
    let third = repo.insert(&new_project("C", &clock)).await.expect("insert C");

    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
    let listed: Vec<_> = repo
        .list_all()
        .await
        .expect("list")
        .iter()
        .map(|project| project.id())
        .collect();
    assert_eq!(listed, vec![first.id(), third.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_enforces_unique_project_name(clock: DefaultClock) {
    let repo = InMemoryProjectRepository::new();
    repo.insert(&new_project("A", &clock)).await.expect("insert A");

    let duplicate = repo.insert(&new_project("A", &clock)).await;

    assert!(matches!(duplicate, Err(RepositoryError::DuplicateName(_))));
    assert!(repo
        .exists_by_name(&ProjectName::new("A").expect("valid name"))
        .await
        .expect("exists"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_of_missing_record_fail(clock: DefaultClock) {
    let repo = InMemoryProjectRepository::new();
    let stored = repo.insert(&new_project("A", &clock)).await.expect("insert");
    repo.delete_by_id(stored.id()).await.expect("delete");

    let updated = repo.update(&stored).await;
    let deleted = repo.delete_by_id(stored.id()).await;

    for result in [updated, deleted] {
        assert!(matches!(
            result,
            Err(RepositoryError::NotFound(EntityRef::Project(id))) if id == stored.id()
        ));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_index_follows_updates(clock: DefaultClock) {
    let repo = InMemoryDeveloperRepository::new();
    let mut stored = repo
        .insert(&new_developer("old@x.com", &clock))
        .await
        .expect("insert");
    let name = stored.name().clone();
    stored.update_profile(name, EmailAddress::new("new@x.com").expect("valid email"), None);

    repo.update(&stored).await.expect("update");

    let old = EmailAddress::new("old@x.com").expect("valid email");
    let new = EmailAddress::new("new@x.com").expect("valid email");
    assert!(!repo.exists_by_email(&old).await.expect("exists old"));
    assert_eq!(
        repo.find_by_email(&new).await.expect("find new").map(|dev| dev.id()),
        Some(stored.id())
    );
    assert!(repo.insert(&new_developer("old@x.com", &clock)).await.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_to_taken_email_is_rejected(clock: DefaultClock) {
    let repo = InMemoryDeveloperRepository::new();
    repo.insert(&new_developer("a@x.com", &clock))
        .await
        .expect("insert a");
    let mut second = repo
        .insert(&new_developer("b@x.com", &clock))
        .await
        .expect("insert b");
    let name = second.name().clone();
    second.update_profile(name, EmailAddress::new("a@x.com").expect("valid email"), None);

    let result = repo.update(&second).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateEmail(_))));
}
