use tempfile::TempDir;

use barakjobs::domain::{JobStore, JobUpdate, NewJob};
use barakjobs::infrastructure::FileStore;
use barakjobs::models::JobType;

fn sample_job(title: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: "Test Co.".to_string(),
        location: "Silchar".to_string(),
        job_type: JobType::Private,
        description: "A test opening.".to_string(),
        requirements: vec!["Punctuality".to_string()],
        salary: Some("₹12,000".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fresh_store_is_seeded() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let jobs = store.list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 2);

    let admin = store.verify_user("admin", "admin123").await.unwrap();
    assert!(admin.is_some());
    assert_eq!(admin.unwrap().username, "admin");
}

#[tokio::test]
async fn test_reopening_never_reseeds() {
    let dir = TempDir::new().unwrap();

    let created = {
        let store = FileStore::new(dir.path());
        store.create_job(sample_job("Survivor")).await.unwrap()
    };

    // A second initialization must leave existing files alone
    let store = FileStore::new(dir.path());
    let jobs = store.list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 3);
    assert!(jobs.iter().any(|job| job.id == created.id));
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let first = store.create_job(sample_job("First")).await.unwrap();
    let second = store.create_job(sample_job("Second")).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_get_absent_is_none_not_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.get_job("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_reports_whether_anything_was_removed() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let job = store.create_job(sample_job("Doomed")).await.unwrap();

    assert!(store.delete_job(&job.id).await.unwrap());
    assert!(!store.delete_job(&job.id).await.unwrap());
    assert!(!store.delete_job("never-existed").await.unwrap());
}

#[tokio::test]
async fn test_update_merges_and_clears() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let job = store.create_job(sample_job("Clerk")).await.unwrap();

    let changes = JobUpdate {
        title: Some("Senior Clerk".to_string()),
        salary: Some(None),
        ..Default::default()
    };
    let updated = store.update_job(&job.id, changes).await.unwrap().unwrap();

    assert_eq!(updated.title, "Senior Clerk");
    assert_eq!(updated.salary, None);
    // Everything not named in the update survives
    assert_eq!(updated.location, "Silchar");
    assert_eq!(updated.requirements, vec!["Punctuality"]);
    assert_eq!(updated.posted_date, job.posted_date);
    assert_eq!(updated.id, job.id);
}

#[tokio::test]
async fn test_update_absent_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let changes = JobUpdate {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(store.update_job("missing", changes).await.unwrap().is_none());

    // And nothing was created as a side effect
    assert_eq!(store.list_jobs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_are_both_absent() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.verify_user("admin", "nope").await.unwrap().is_none());
    assert!(store.verify_user("nobody", "admin123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_corrupt_postings_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    std::fs::write(dir.path().join("jobs.json"), "{ not json").unwrap();

    // Reads fail soft
    assert!(store.list_jobs().await.unwrap().is_empty());
    assert!(store.get_job("anything").await.unwrap().is_none());

    // A write re-establishes the file
    let job = store.create_job(sample_job("Phoenix")).await.unwrap();
    let jobs = store.list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, job.id);
}

#[tokio::test]
async fn test_unwritable_data_dir_fails_writes_explicitly_reads_empty() {
    let dir = TempDir::new().unwrap();

    // Park the data directory under a regular file so it can never exist
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = FileStore::new(&blocker.join("data"));

    assert!(store.list_jobs().await.unwrap().is_empty());
    assert!(store.verify_user("admin", "admin123").await.unwrap().is_none());
    assert!(store.create_job(sample_job("Nope")).await.is_err());
}
