use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::domain::{JobUpdate, NewJob};
use crate::infrastructure::AppState;
use crate::models::{JobType, Requirements};

/// Create payload. Required strings default to empty so that a missing
/// field and a blank one fail validation the same way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub job_type: JobType,
    pub requirements: Option<Requirements>,
    pub deadline: Option<String>,
    pub salary: Option<String>,
    pub experience: Option<String>,
    pub application_process: Option<String>,
    pub contact_info: Option<String>,
}

impl CreateJobPayload {
    pub fn missing_required(&self) -> bool {
        self.title.trim().is_empty()
            || self.company.trim().is_empty()
            || self.location.trim().is_empty()
            || self.description.trim().is_empty()
    }

    pub fn into_new_job(self) -> NewJob {
        NewJob {
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            description: self.description,
            requirements: self
                .requirements
                .map(Requirements::normalize)
                .unwrap_or_default(),
            deadline: self.deadline,
            salary: self.salary,
            experience: self.experience,
            application_process: self.application_process,
            contact_info: self.contact_info,
        }
    }
}

/// Update payload. A missing field leaves the stored value alone; an
/// explicit null clears the nullable ones.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPayload {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub description: Option<String>,
    pub requirements: Option<Requirements>,
    #[serde(default, deserialize_with = "double_option")]
    pub deadline: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub experience: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub application_process: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_info: Option<Option<String>>,
}

impl From<UpdateJobPayload> for JobUpdate {
    fn from(payload: UpdateJobPayload) -> Self {
        Self {
            title: payload.title,
            company: payload.company,
            location: payload.location,
            job_type: payload.job_type,
            description: payload.description,
            requirements: payload.requirements.map(Requirements::normalize),
            deadline: payload.deadline,
            salary: payload.salary,
            experience: payload.experience,
            application_process: payload.application_process,
            contact_info: payload.contact_info,
        }
    }
}

/// Keeps "field absent" (outer None) distinct from "field null"
/// (Some(None)), which serde collapses by default.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "All postings, newest first; degrades to an empty result on backend failure")
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_jobs().await {
        Ok(jobs) => {
            let count = jobs.len();
            Json(json!({
                "success": true,
                "data": jobs,
                "count": count
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!("failed to list postings: {}", e);
            // 200 with an error flag: the listing page must render, not crash.
            Json(json!({
                "success": false,
                "error": "Failed to fetch jobs",
                "data": [],
                "count": 0
            }))
            .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Posting identifier")),
    responses(
        (status = 200, description = "The posting"),
        (status = 404, description = "No posting with this identifier")
    )
)]
pub async fn get_job(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.get_job(&id).await {
        Ok(Some(job)) => Json(json!({ "success": true, "data": job })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Job not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to fetch posting {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to fetch job" })),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    responses(
        (status = 201, description = "Posting created"),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> impl IntoResponse {
    if payload.missing_required() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Missing required fields" })),
        )
            .into_response();
    }

    match state.store.create_job(payload.into_new_job()).await {
        Ok(job) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "data": job })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to create posting: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to create job" })),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Posting identifier")),
    responses(
        (status = 200, description = "Updated posting"),
        (status = 404, description = "No posting with this identifier")
    )
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateJobPayload>,
) -> impl IntoResponse {
    match state.store.update_job(&id, payload.into()).await {
        Ok(Some(job)) => Json(json!({ "success": true, "data": job })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Job not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to update posting {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to update job" })),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Posting identifier")),
    responses(
        (status = 200, description = "Posting removed"),
        (status = 404, description = "No posting with this identifier")
    )
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_job(&id).await {
        Ok(true) => Json(json!({
            "success": true,
            "message": "Job deleted successfully"
        }))
        .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Job not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to delete posting {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to delete job" })),
            )
                .into_response()
        }
    }
}
