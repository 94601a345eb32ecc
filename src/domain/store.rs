//! Store trait definition
//!
//! The single contract for posting/account data access. Implementations
//! live in the infrastructure layer (file-backed and hosted-database);
//! handlers only ever see `Arc<dyn JobStore>`.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{Job, JobType, User};

/// Input for creating a posting. The caller validates required fields and
/// normalizes requirements before building this; `id` and `posted_date`
/// are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub requirements: Vec<String>,
    pub deadline: Option<String>,
    pub salary: Option<String>,
    pub experience: Option<String>,
    pub application_process: Option<String>,
    pub contact_info: Option<String>,
}

/// Partial update. `None` leaves a field alone; for the nullable text
/// fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub deadline: Option<Option<String>>,
    pub salary: Option<Option<String>>,
    pub experience: Option<Option<String>>,
    pub application_process: Option<Option<String>>,
    pub contact_info: Option<Option<String>>,
}

impl JobUpdate {
    /// Shallow-merge over an existing posting. Identifier and posted date
    /// are immutable and never touched here.
    pub fn apply(self, job: &mut Job) {
        if let Some(v) = self.title {
            job.title = v;
        }
        if let Some(v) = self.company {
            job.company = v;
        }
        if let Some(v) = self.location {
            job.location = v;
        }
        if let Some(v) = self.job_type {
            job.job_type = v;
        }
        if let Some(v) = self.description {
            job.description = v;
        }
        if let Some(v) = self.requirements {
            job.requirements = v;
        }
        if let Some(v) = self.deadline {
            job.deadline = v;
        }
        if let Some(v) = self.salary {
            job.salary = v;
        }
        if let Some(v) = self.experience {
            job.experience = v;
        }
        if let Some(v) = self.application_process {
            job.application_process = v;
        }
        if let Some(v) = self.contact_info {
            job.contact_info = v;
        }
    }
}

/// Data-access contract for postings and accounts.
///
/// Absence is a signal, not an error: lookups return `Ok(None)` and delete
/// returns `Ok(false)` when nothing matched. Read implementations degrade
/// to empty results on backend failure; write failures propagate.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// All postings, sorted by posted date descending (newest first).
    async fn list_jobs(&self) -> Result<Vec<Job>, DomainError>;

    /// Find a posting by identifier.
    async fn get_job(&self, id: &str) -> Result<Option<Job>, DomainError>;

    /// Create a posting; the store assigns identifier and posted date.
    async fn create_job(&self, input: NewJob) -> Result<Job, DomainError>;

    /// Partially update a posting; `Ok(None)` when absent.
    async fn update_job(&self, id: &str, changes: JobUpdate) -> Result<Option<Job>, DomainError>;

    /// Delete a posting; `Ok(false)` when nothing was removed.
    async fn delete_job(&self, id: &str) -> Result<bool, DomainError>;

    /// Verify a username/secret pair. `Ok(None)` for unknown users and
    /// wrong secrets alike.
    async fn verify_user(&self, username: &str, password: &str)
        -> Result<Option<User>, DomainError>;

    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
