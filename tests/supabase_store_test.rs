use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use barakjobs::auth::hash_password;
use barakjobs::domain::{JobStore, JobUpdate, NewJob};
use barakjobs::infrastructure::SupabaseStore;
use barakjobs::models::JobType;

fn store_for(server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(&server.uri(), "test-key").expect("client")
}

fn job_row(id: &str, title: &str, posted_date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "company": "Remote Co.",
        "location": "Silchar",
        "type": "private",
        "posted_date": posted_date,
        "deadline": null,
        "description": "Remote row.",
        "requirements": ["A", "B"],
        "salary": "₹20,000",
        "experience": null,
        "application_process": null,
        "contact_info": null
    })
}

#[tokio::test]
async fn test_list_requests_backend_ordering_and_maps_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("select", "*"))
        .and(query_param("order", "posted_date.desc"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            job_row("j2", "Newer", "2026-02-01T00:00:00+00:00"),
            job_row("j1", "Older", "2026-01-01T00:00:00+00:00"),
        ])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let jobs = store.list_jobs().await.unwrap();

    // Order comes from the query; nothing is re-sorted here
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id, "j2");
    assert_eq!(jobs[0].job_type, JobType::Private);
    assert_eq!(jobs[0].requirements, vec!["A", "B"]);
    assert_eq!(jobs[0].deadline, None);
    assert_eq!(jobs[0].salary.as_deref(), Some("₹20,000"));
}

#[tokio::test]
async fn test_list_degrades_to_empty_on_backend_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    assert!(store.list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_null_requirements_read_back_as_empty_list() {
    let mock_server = MockServer::start().await;

    let mut row = job_row("j1", "Sparse", "2026-01-01T00:00:00+00:00");
    row["requirements"] = serde_json::Value::Null;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let job = store.get_job("j1").await.unwrap().unwrap();
    assert!(job.requirements.is_empty());
}

#[tokio::test]
async fn test_get_absent_and_get_failure_are_both_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.known-empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    assert!(store.get_job("known-empty").await.unwrap().is_none());
    assert!(store.get_job("broken").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_sends_explicit_nulls_for_absent_optionals() {
    let mock_server = MockServer::start().await;

    let expected_body = json!({
        "title": "Clerk",
        "company": "X",
        "location": "Y",
        "type": "government",
        "description": "Z",
        "requirements": [],
        "deadline": null,
        "salary": null,
        "experience": null,
        "application_process": null,
        "contact_info": null
    });

    let mut created_row = job_row("fresh-id", "Clerk", "2026-03-01T00:00:00+00:00");
    created_row["requirements"] = json!([]);

    Mock::given(method("POST"))
        .and(path("/rest/v1/jobs"))
        .and(header("Prefer", "return=representation"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([created_row])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let job = store
        .create_job(NewJob {
            title: "Clerk".to_string(),
            company: "X".to_string(),
            location: "Y".to_string(),
            job_type: JobType::Government,
            description: "Z".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(job.id, "fresh-id");
    assert_eq!(job.posted_date, "2026-03-01T00:00:00+00:00");
}

#[tokio::test]
async fn test_create_failure_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let result = store
        .create_job(NewJob {
            title: "Clerk".to_string(),
            company: "X".to_string(),
            location: "Y".to_string(),
            description: "Z".to_string(),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_patches_only_named_columns() {
    let mock_server = MockServer::start().await;

    // Untouched columns stay out of the patch; cleared ones go as null
    let expected_patch = json!({
        "title": "Senior Clerk",
        "deadline": null
    });

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.j1"))
        .and(body_json(expected_patch))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_row(
            "j1",
            "Senior Clerk",
            "2026-01-01T00:00:00+00:00"
        )])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let changes = JobUpdate {
        title: Some("Senior Clerk".to_string()),
        deadline: Some(None),
        ..Default::default()
    };
    let job = store.update_job("j1", changes).await.unwrap().unwrap();
    assert_eq!(job.title, "Senior Clerk");
}

#[tokio::test]
async fn test_update_absent_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let changes = JobUpdate {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(store.update_job("gone", changes).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_reports_removal_from_representation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.existing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_row(
            "existing",
            "Gone",
            "2026-01-01T00:00:00+00:00"
        )])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    assert!(store.delete_job("existing").await.unwrap());
    assert!(!store.delete_job("missing").await.unwrap());
}

#[tokio::test]
async fn test_verify_user_checks_the_stored_hash() {
    let mock_server = MockServer::start().await;

    let password_hash = hash_password("s3cret").unwrap();
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("username", "eq.admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "u1",
            "username": "admin",
            "password_hash": password_hash,
            "role": "admin",
            "created_at": "2026-01-01T00:00:00+00:00"
        }])))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);

    let user = store.verify_user("admin", "s3cret").await.unwrap();
    assert!(user.is_some());
    assert_eq!(user.unwrap().username, "admin");

    assert!(store.verify_user("admin", "wrong").await.unwrap().is_none());
}

#[tokio::test]
async fn test_verify_user_degrades_to_absence_on_backend_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    assert!(store.verify_user("admin", "s3cret").await.unwrap().is_none());
}
