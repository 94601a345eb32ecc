//! File-backed store - the fallback persistence when no hosted database is
//! configured.
//!
//! Two flat JSON files, one for postings and one for accounts. Every
//! mutation is a full read-merge-rewrite; mutations serialize on a
//! per-store writer lock so in-process writers cannot lose each other's
//! updates. Readers take the file as-is.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{DomainError, JobStore, JobUpdate, NewJob};
use crate::infrastructure::auth::verify_password;
use crate::infrastructure::seed;
use crate::models::{Job, User};

const JOBS_FILE: &str = "jobs.json";
const USERS_FILE: &str = "users.json";

pub struct FileStore {
    jobs_path: PathBuf,
    users_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (and on first use seed) the store under `data_dir`.
    ///
    /// Seeding never overwrites existing files. On read-only filesystems
    /// the store still constructs: reads come back empty and mutations
    /// fail explicitly when the rewrite is attempted.
    pub fn new(data_dir: &Path) -> Self {
        if let Err(e) = fs::create_dir_all(data_dir) {
            tracing::warn!("could not create data directory {:?}: {}", data_dir, e);
        }

        let store = Self {
            jobs_path: data_dir.join(JOBS_FILE),
            users_path: data_dir.join(USERS_FILE),
            write_lock: Mutex::new(()),
        };

        if !store.jobs_path.exists() {
            if let Err(e) = store.write_jobs(&seed::default_jobs()) {
                tracing::warn!("could not seed postings file: {}", e);
            }
        }
        if !store.users_path.exists() {
            if let Err(e) = store.write_users(&[seed::default_admin()]) {
                tracing::warn!("could not seed accounts file: {}", e);
            }
        }

        store
    }

    /// Read and parse the postings file. Fails soft: any read or parse
    /// error is logged and an empty list returned.
    fn read_jobs(&self) -> Vec<Job> {
        match fs::read_to_string(&self.jobs_path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(jobs) => jobs,
                Err(e) => {
                    tracing::warn!("could not parse {:?}: {}", self.jobs_path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("could not read {:?}: {}", self.jobs_path, e);
                Vec::new()
            }
        }
    }

    fn write_jobs(&self, jobs: &[Job]) -> Result<(), DomainError> {
        let data = serde_json::to_string_pretty(jobs)?;
        fs::write(&self.jobs_path, data)?;
        Ok(())
    }

    fn read_users(&self) -> Vec<User> {
        match fs::read_to_string(&self.users_path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(users) => users,
                Err(e) => {
                    tracing::warn!("could not parse {:?}: {}", self.users_path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("could not read {:?}: {}", self.users_path, e);
                Vec::new()
            }
        }
    }

    fn write_users(&self, users: &[User]) -> Result<(), DomainError> {
        let data = serde_json::to_string_pretty(users)?;
        fs::write(&self.users_path, data)?;
        Ok(())
    }
}

#[async_trait]
impl JobStore for FileStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, DomainError> {
        let mut jobs = self.read_jobs();
        // RFC 3339 timestamps in a fixed offset sort lexicographically.
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        Ok(jobs)
    }

    async fn get_job(&self, id: &str) -> Result<Option<Job>, DomainError> {
        Ok(self.read_jobs().into_iter().find(|job| job.id == id))
    }

    async fn create_job(&self, input: NewJob) -> Result<Job, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.read_jobs();
        let job = Job {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            company: input.company,
            location: input.location,
            job_type: input.job_type,
            posted_date: Utc::now().to_rfc3339(),
            deadline: input.deadline,
            description: input.description,
            requirements: input.requirements,
            salary: input.salary,
            experience: input.experience,
            application_process: input.application_process,
            contact_info: input.contact_info,
        };
        jobs.push(job.clone());
        self.write_jobs(&jobs)?;

        Ok(job)
    }

    async fn update_job(&self, id: &str, changes: JobUpdate) -> Result<Option<Job>, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.read_jobs();
        let Some(job) = jobs.iter_mut().find(|job| job.id == id) else {
            return Ok(None);
        };

        changes.apply(job);
        let updated = job.clone();
        self.write_jobs(&jobs)?;

        Ok(Some(updated))
    }

    async fn delete_job(&self, id: &str) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let jobs = self.read_jobs();
        let remaining: Vec<Job> = jobs.iter().filter(|job| job.id != id).cloned().collect();
        if remaining.len() == jobs.len() {
            return Ok(false);
        }
        self.write_jobs(&remaining)?;

        Ok(true)
    }

    async fn verify_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let users = self.read_users();
        let Some(user) = users.into_iter().find(|user| user.username == username) else {
            return Ok(None);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!("stored credential for {} is unreadable: {}", username, e);
                Ok(None)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
