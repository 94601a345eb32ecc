//! Hosted-database adapter.
//!
//! Speaks the PostgREST dialect of a hosted Postgres (Supabase): filters as
//! query parameters, `Prefer: return=representation` on writes, `apikey` +
//! bearer headers. Translates between the application's camelCase shapes
//! and the store's snake_case rows: nulls become absent options on read,
//! absent optionals become explicit nulls on insert.
//!
//! Read failures degrade to empty/absence so a flaky backend cannot take
//! the listing pages down; write failures always propagate.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, JobStore, JobUpdate, NewJob};
use crate::infrastructure::auth::verify_password;
use crate::models::{Job, JobType, Role, User};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Row shape of the `jobs` table.
#[derive(Debug, Deserialize)]
struct JobRow {
    id: String,
    title: String,
    company: String,
    location: String,
    #[serde(rename = "type")]
    job_type: JobType,
    posted_date: String,
    deadline: Option<String>,
    description: String,
    requirements: Option<Vec<String>>,
    salary: Option<String>,
    experience: Option<String>,
    application_process: Option<String>,
    contact_info: Option<String>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            job_type: row.job_type,
            posted_date: row.posted_date,
            deadline: row.deadline,
            description: row.description,
            requirements: row.requirements.unwrap_or_default(),
            salary: row.salary,
            experience: row.experience,
            application_process: row.application_process,
            contact_info: row.contact_info,
        }
    }
}

/// Insert body: `id` and `posted_date` are owned by the table defaults;
/// absent optionals are written as explicit nulls.
#[derive(Debug, Serialize)]
struct InsertJobRow<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    #[serde(rename = "type")]
    job_type: JobType,
    description: &'a str,
    requirements: &'a [String],
    deadline: Option<&'a str>,
    salary: Option<&'a str>,
    experience: Option<&'a str>,
    application_process: Option<&'a str>,
    contact_info: Option<&'a str>,
}

impl<'a> From<&'a NewJob> for InsertJobRow<'a> {
    fn from(input: &'a NewJob) -> Self {
        Self {
            title: &input.title,
            company: &input.company,
            location: &input.location,
            job_type: input.job_type,
            description: &input.description,
            requirements: &input.requirements,
            deadline: input.deadline.as_deref(),
            salary: input.salary.as_deref(),
            experience: input.experience.as_deref(),
            application_process: input.application_process.as_deref(),
            contact_info: input.contact_info.as_deref(),
        }
    }
}

/// Patch body: untouched columns are skipped entirely; cleared ones are
/// serialized as null.
#[derive(Debug, Serialize)]
struct PatchJobRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    experience: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    application_process: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_info: Option<Option<String>>,
}

impl From<JobUpdate> for PatchJobRow {
    fn from(changes: JobUpdate) -> Self {
        Self {
            title: changes.title,
            company: changes.company,
            location: changes.location,
            job_type: changes.job_type,
            description: changes.description,
            requirements: changes.requirements,
            deadline: changes.deadline,
            salary: changes.salary,
            experience: changes.experience,
            application_process: changes.application_process,
            contact_info: changes.contact_info,
        }
    }
}

/// Row shape of the `users` table.
#[derive(Debug, Deserialize)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
    role: Role,
    created_at: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

impl SupabaseStore {
    pub fn new(url: &str, api_key: &str) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn request(&self, method: Method, path_and_query: &str) -> reqwest::RequestBuilder {
        self.client
            .request(
                method,
                format!("{}/rest/v1/{}", self.base_url, path_and_query),
            )
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn fetch_job_rows(&self, query: &str) -> Result<Vec<JobRow>, DomainError> {
        let response = self
            .request(Method::GET, &format!("jobs?{}", query))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_user_rows(&self, query: &str) -> Result<Vec<UserRow>, DomainError> {
        let response = self
            .request(Method::GET, &format!("users?{}", query))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobStore for SupabaseStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, DomainError> {
        // Ordering is the backend query's contract, never applied here.
        match self
            .fetch_job_rows("select=*&order=posted_date.desc")
            .await
        {
            Ok(rows) => Ok(rows.into_iter().map(Job::from).collect()),
            Err(e) => {
                tracing::error!("failed to fetch postings from hosted store: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn get_job(&self, id: &str) -> Result<Option<Job>, DomainError> {
        let query = format!("select=*&id=eq.{}&limit=1", urlencoding::encode(id));
        match self.fetch_job_rows(&query).await {
            Ok(rows) => Ok(rows.into_iter().next().map(Job::from)),
            Err(e) => {
                tracing::error!("failed to fetch posting {} from hosted store: {}", id, e);
                Ok(None)
            }
        }
    }

    async fn create_job(&self, input: NewJob) -> Result<Job, DomainError> {
        let response = self
            .request(Method::POST, "jobs")
            .header("Prefer", "return=representation")
            .json(&InsertJobRow::from(&input))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Database(format!(
                "insert rejected with {}: {}",
                status, body
            )));
        }

        let mut rows: Vec<JobRow> = response.json().await?;
        match rows.pop() {
            Some(row) => Ok(Job::from(row)),
            None => Err(DomainError::Database(
                "insert returned no representation".to_string(),
            )),
        }
    }

    async fn update_job(&self, id: &str, changes: JobUpdate) -> Result<Option<Job>, DomainError> {
        let response = self
            .request(
                Method::PATCH,
                &format!("jobs?id=eq.{}", urlencoding::encode(id)),
            )
            .header("Prefer", "return=representation")
            .json(&PatchJobRow::from(changes))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Database(format!(
                "update rejected with {}: {}",
                status, body
            )));
        }

        let mut rows: Vec<JobRow> = response.json().await?;
        Ok(rows.pop().map(Job::from))
    }

    async fn delete_job(&self, id: &str) -> Result<bool, DomainError> {
        let response = self
            .request(
                Method::DELETE,
                &format!("jobs?id=eq.{}", urlencoding::encode(id)),
            )
            .header("Prefer", "return=representation")
            .send()
            .await?
            .error_for_status()?;

        // A removal happened iff the representation is non-empty.
        let rows: Vec<serde_json::Value> = response.json().await?;
        Ok(!rows.is_empty())
    }

    async fn verify_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!(
            "select=*&username=eq.{}&limit=1",
            urlencoding::encode(username)
        );
        let row = match self.fetch_user_rows(&query).await {
            Ok(mut rows) => rows.pop(),
            Err(e) => {
                tracing::error!("failed to fetch account from hosted store: {}", e);
                None
            }
        };

        let Some(row) = row else {
            return Ok(None);
        };

        match verify_password(password, &row.password_hash) {
            Ok(true) => Ok(Some(User::from(row))),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!("stored credential for {} is unreadable: {}", username, e);
                Ok(None)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "supabase"
    }
}
