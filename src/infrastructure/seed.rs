//! First-run fixtures for the file-backed store.
//!
//! The postings file gets two example openings so a fresh install renders a
//! non-empty listing; the accounts file gets a single admin login.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::infrastructure::auth::hash_password;
use crate::models::{Job, JobType, Role, User};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
// First-run credential; operators are expected to rotate it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub fn default_jobs() -> Vec<Job> {
    let now = Utc::now();

    vec![
        Job {
            id: Uuid::new_v4().to_string(),
            title: "Primary School Teacher".to_string(),
            company: "Barak Valley Education Department".to_string(),
            location: "Silchar".to_string(),
            job_type: JobType::Government,
            posted_date: now.to_rfc3339(),
            deadline: Some((now + Duration::days(30)).to_rfc3339()),
            description: "We are looking for a dedicated Primary School Teacher to join our team. \
                          The ideal candidate should have a passion for teaching and working with \
                          young children. You will be responsible for creating lesson plans, \
                          conducting classes, and evaluating student progress."
                .to_string(),
            requirements: vec![
                "Bachelor's degree in Education or related field".to_string(),
                "B.Ed. degree is mandatory".to_string(),
                "Minimum 2 years of teaching experience".to_string(),
                "Good communication skills".to_string(),
                "Patience and understanding with children".to_string(),
            ],
            salary: Some("₹25,000 - ₹35,000 per month".to_string()),
            experience: Some("2-5 years".to_string()),
            application_process: Some(
                "Interested candidates should submit their resume, educational certificates, and \
                 a cover letter to the Education Department office in Silchar. Applications can \
                 also be submitted online through the official government portal."
                    .to_string(),
            ),
            contact_info: Some(
                "Email: education@barakvalley.gov.in\nPhone: +91 XXX XXX XXXX\nOffice: Education \
                 Department, Silchar"
                    .to_string(),
            ),
        },
        Job {
            id: Uuid::new_v4().to_string(),
            title: "Software Developer".to_string(),
            company: "Tech Solutions Pvt. Ltd.".to_string(),
            location: "Karimganj".to_string(),
            job_type: JobType::Private,
            posted_date: (now - Duration::days(2)).to_rfc3339(),
            deadline: Some((now + Duration::days(15)).to_rfc3339()),
            description: "Join our dynamic team as a Software Developer. You will be responsible \
                          for developing and maintaining web applications, working with modern \
                          technologies, and collaborating with cross-functional teams to deliver \
                          high-quality software solutions."
                .to_string(),
            requirements: vec![
                "Bachelor's degree in Computer Science or related field".to_string(),
                "Proficiency in JavaScript, React, and Node.js".to_string(),
                "Experience with databases (SQL/NoSQL)".to_string(),
                "Strong problem-solving skills".to_string(),
                "Good team collaboration abilities".to_string(),
            ],
            salary: Some("₹40,000 - ₹60,000 per month".to_string()),
            experience: Some("1-3 years".to_string()),
            application_process: Some(
                "Please send your resume and portfolio to careers@techsolutions.com. Include \
                 links to your GitHub profile and any relevant projects."
                    .to_string(),
            ),
            contact_info: Some(
                "Email: careers@techsolutions.com\nPhone: +91 XXX XXX XXXX".to_string(),
            ),
        },
    ]
}

pub fn default_admin() -> User {
    let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD)
        .expect("hashing a constant password cannot fail");

    User {
        id: Uuid::new_v4().to_string(),
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        password_hash,
        role: Role::Admin,
        created_at: Utc::now().to_rfc3339(),
    }
}
