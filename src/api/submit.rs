//! Public submission intake.
//!
//! Visitors propose a posting; the admin reviews it out of band. The
//! submission is formatted as a readable summary and logged for the
//! configured admin address. Actual email delivery is a stub: nothing is
//! sent anywhere.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::infrastructure::AppState;
use crate::models::{JobType, Requirements};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobPayload {
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
    #[serde(default)]
    pub submitter_name: String,
    #[serde(default)]
    pub submitter_email: String,
}

pub async fn submit_job(
    State(state): State<AppState>,
    Json(payload): Json<SubmitJobPayload>,
) -> impl IntoResponse {
    if payload.title.trim().is_empty()
        || payload.company.trim().is_empty()
        || payload.location.trim().is_empty()
        || payload.description.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Missing required fields" })),
        )
            .into_response();
    }

    if payload.submitter_name.trim().is_empty() || payload.submitter_email.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Please provide your name and email" })),
        )
            .into_response();
    }

    let summary = format_submission(&payload);
    tracing::info!(
        "new job submission received (would be mailed to {}):\n{}",
        state.admin_email,
        summary
    );

    Json(json!({
        "success": true,
        "message": "Job submission received. Admin will review and post it soon."
    }))
    .into_response()
}

fn format_submission(payload: &SubmitJobPayload) -> String {
    let mut summary = format!(
        "New Job Submission\n\n\
         Submitted by: {} ({})\n\
         Submitted on: {}\n\n\
         Job Title: {}\n\
         Company: {}\n\
         Location: {}\n\
         Job Type: {}\n\n\
         Description:\n{}\n",
        payload.submitter_name.trim(),
        payload.submitter_email.trim(),
        Utc::now().to_rfc3339(),
        payload.title.trim(),
        payload.company.trim(),
        payload.location.trim(),
        match payload.job_type {
            JobType::Government => "Government",
            JobType::Private => "Private Sector",
        },
        payload.description.trim(),
    );

    let requirements = payload
        .requirements
        .clone()
        .map(Requirements::normalize)
        .unwrap_or_default();
    if !requirements.is_empty() {
        summary.push_str("\nRequirements:\n");
        for (i, requirement) in requirements.iter().enumerate() {
            summary.push_str(&format!("{}. {}\n", i + 1, requirement));
        }
    }

    if let Some(salary) = &payload.salary {
        summary.push_str(&format!("\nSalary: {}\n", salary));
    }
    if let Some(experience) = &payload.experience {
        summary.push_str(&format!("Experience Required: {}\n", experience));
    }
    if let Some(deadline) = &payload.deadline {
        summary.push_str(&format!("Application Deadline: {}\n", deadline));
    }
    if let Some(process) = &payload.application_process {
        summary.push_str(&format!("\nHow to Apply:\n{}\n", process));
    }
    if let Some(contact) = &payload.contact_info {
        summary.push_str(&format!("\nContact Information:\n{}\n", contact));
    }

    summary
}
