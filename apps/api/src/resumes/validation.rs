use serde::Serialize;
use validator::ValidateEmail;

use crate::models::resume::{ContactInfo, Education, Experience, ResumeSchema, Skill};

/// A single failed field constraint. `field` is the dotted path into the
/// payload, e.g. `contact_info.email` or `experience[2].company`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn require_non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

pub fn validate_contact_info(contact: &ContactInfo) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "contact_info.full_name", &contact.full_name);
    if !contact.email.validate_email() {
        errors.push(FieldError::new(
            "contact_info.email",
            "is not a valid email address",
        ));
    }
    errors
}

pub fn validate_experience(entry: &Experience, index: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, &format!("experience[{index}].position"), &entry.position);
    require_non_empty(&mut errors, &format!("experience[{index}].company"), &entry.company);
    require_non_empty(
        &mut errors,
        &format!("experience[{index}].start_date"),
        &entry.start_date,
    );
    errors
}

pub fn validate_education(entry: &Education, index: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_empty(
        &mut errors,
        &format!("education[{index}].institution"),
        &entry.institution,
    );
    require_non_empty(&mut errors, &format!("education[{index}].degree"), &entry.degree);
    require_non_empty(
        &mut errors,
        &format!("education[{index}].field_of_study"),
        &entry.field_of_study,
    );
    errors
}

pub fn validate_skill(entry: &Skill, index: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, &format!("skills[{index}].name"), &entry.name);
    errors
}

/// Validates a full transport payload, collecting every failing field.
/// Empty `summary`, `responsibilities` and inner lists are permitted.
pub fn validate_resume_content(schema: &ResumeSchema) -> Vec<FieldError> {
    let mut errors = validate_contact_info(&schema.contact_info);
    for (i, entry) in schema.experience.iter().enumerate() {
        errors.extend(validate_experience(entry, i));
    }
    for (i, entry) in schema.education.iter().enumerate() {
        errors.extend(validate_education(entry, i));
    }
    for (i, entry) in schema.skills.iter().enumerate() {
        errors.extend(validate_skill(entry, i));
    }
    errors
}

/// The owner identity is opaque here, but it must at least be present.
pub fn validate_owner(user_id: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_non_empty(&mut errors, "user_id", user_id);
    errors
}
