//! Test data helpers for creating portal records

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};
use placement_portal::models::StudentProfile;

/// Student profile JSON the way the server sends it: decimals as strings,
/// ids as numbers
pub fn student_json(id: i64, resume_path: Option<&str>) -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let email: String = SafeEmail().fake();
    json!({
        "student_id": id,
        "first_name": first,
        "last_name": last,
        "roll_no": format!("CS{:03}", id),
        "prn_no": format!("PRN{:06}", id),
        "email": email,
        "phone": "9876543210",
        "department": "Computer",
        "average": "78.50",
        "live_backlogs": 0,
        "tenth_percentage": "91.20",
        "tenth_year": 2018,
        "twelfth_percentage": "84.00",
        "twelfth_year": 2020,
        "diploma_percentage": null,
        "linkedin_url": null,
        "github_url": "https://github.com/example",
        "resume_path": resume_path,
        "edited_by_student": 0
    })
}

pub fn student(id: i64, resume_path: Option<&str>) -> StudentProfile {
    serde_json::from_value(student_json(id, resume_path)).expect("Failed to decode test student")
}

pub fn roster(count: i64) -> Vec<StudentProfile> {
    (1..=count).map(|id| student(id, Some("cv.pdf"))).collect()
}

pub fn event_json(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "description": "Bring two copies of your resume",
        "date": date,
        "created_by_name": "Placement Cell"
    })
}

pub fn resource_json(id: i64, title: &str) -> Value {
    json!({
        "resource_id": id,
        "title": title,
        "description": "Aptitude practice set",
        "file_path": format!("{}_{}.pdf", id, title.to_lowercase().replace(' ', "_")),
        "created_by_name": "TPO"
    })
}

pub fn job_json(id: i64, title: &str) -> Value {
    json!({
        "job_id": id,
        "title": title,
        "description": "Backend role",
        "company_name": "Acme Systems",
        "location": "Pune",
        "salary": "6 LPA",
        "deadline": "2025-02-01",
        "eligibility": "7.0",
        "target_branches": "Computer,IT"
    })
}

pub fn application_json(id: i64, status: &str) -> Value {
    json!({
        "application_id": id,
        "job_id": 1,
        "job_title": "Backend Engineer",
        "student_id": 10 + id,
        "student_name": "Asha Patil",
        "student_email": "asha@college.edu",
        "student_branch": "Computer",
        "student_cgpa": "8.10",
        "applied_date": "2025-01-10",
        "status": status
    })
}
