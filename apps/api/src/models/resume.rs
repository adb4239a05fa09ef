use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Sentinel for a role the owner still holds.
pub const ONGOING_END_DATE: &str = "Present";

fn default_end_date() -> String {
    ONGOING_END_DATE.to_string()
}

/// Contact details embedded in a resume. No identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// A single work-experience entry. Entry order within a resume is
/// significant and preserved as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: Option<String>,
}

/// The transport shape exchanged with API clients. All five keys are
/// required; the inner lists may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSchema {
    pub contact_info: ContactInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

/// The persisted shape: the transport content plus the owner/audit
/// envelope. Stored in the `resumes` collection; `_id` is assigned by
/// MongoDB on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub content: ResumeSchema,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// Wraps validated content in a fresh envelope for the given owner.
    /// Both timestamps start at the same instant.
    pub fn new(content: ResumeSchema, user_id: String) -> Self {
        let now = Utc::now();
        Resume {
            id: None,
            content,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full content replacement. Keeps the identity, owner and creation
    /// time; refreshes `updated_at`.
    pub fn with_content(mut self, content: ResumeSchema) -> Self {
        self.content = content;
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> ResumeSchema {
        ResumeSchema {
            contact_info: ContactInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                linkedin_url: None,
                portfolio_url: None,
            },
            summary: "Engineer".to_string(),
            experience: vec![],
            education: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_end_date_defaults_to_present() {
        let exp: Experience = serde_json::from_value(json!({
            "position": "Analyst",
            "company": "Analytical Engines Ltd",
            "start_date": "1842-01",
            "responsibilities": ["Wrote the first published program"]
        }))
        .unwrap();
        assert_eq!(exp.end_date, ONGOING_END_DATE);
    }

    #[test]
    fn test_explicit_end_date_is_kept() {
        let exp: Experience = serde_json::from_value(json!({
            "position": "Analyst",
            "company": "Analytical Engines Ltd",
            "start_date": "1842-01",
            "end_date": "1843-09",
            "responsibilities": []
        }))
        .unwrap();
        assert_eq!(exp.end_date, "1843-09");
    }

    #[test]
    fn test_schema_rejects_missing_required_key() {
        // No `email` inside contact_info.
        let result: Result<ResumeSchema, _> = serde_json::from_value(json!({
            "contact_info": { "full_name": "Ada Lovelace" },
            "summary": "Engineer",
            "experience": [],
            "education": [],
            "skills": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_missing_aggregate_key() {
        let result: Result<ResumeSchema, _> = serde_json::from_value(json!({
            "contact_info": {
                "full_name": "Ada Lovelace",
                "email": "ada@example.com"
            },
            "summary": "Engineer",
            "experience": [],
            "education": []
            // skills absent
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_resume_stamps_envelope() {
        let resume = Resume::new(sample_schema(), "u1".to_string());
        assert!(resume.id.is_none());
        assert_eq!(resume.user_id, "u1");
        assert_eq!(resume.created_at, resume.updated_at);
        assert_eq!(resume.content.summary, "Engineer");
        assert_eq!(resume.content.contact_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_with_content_touches_updated_at_only() {
        let resume = Resume::new(sample_schema(), "u1".to_string());
        let created_at = resume.created_at;

        let mut replacement = sample_schema();
        replacement.summary = "Mathematician and engineer".to_string();
        let updated = resume.with_content(replacement);

        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= created_at);
        assert_eq!(updated.content.summary, "Mathematician and engineer");
    }

    #[test]
    fn test_resume_transport_round_trip() {
        let resume = Resume::new(sample_schema(), "u1".to_string());
        let encoded = serde_json::to_value(&resume).unwrap();
        // Content is flattened into the document, not nested.
        assert_eq!(encoded["summary"], "Engineer");
        assert_eq!(encoded["contact_info"]["email"], "ada@example.com");
        assert!(encoded.get("_id").is_none());

        let decoded: Resume = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, resume);
    }

    #[test]
    fn test_resume_bson_round_trip() {
        let mut resume = Resume::new(sample_schema(), "u1".to_string());
        resume.id = Some(ObjectId::new());
        let doc = mongodb::bson::to_document(&resume).unwrap();
        assert!(doc.contains_key("_id"));
        assert_eq!(doc.get_str("user_id").unwrap(), "u1");

        let decoded: Resume = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(decoded, resume);
    }

    #[test]
    fn test_experience_order_is_preserved() {
        let schema: ResumeSchema = serde_json::from_value(json!({
            "contact_info": {
                "full_name": "Ada Lovelace",
                "email": "ada@example.com"
            },
            "summary": "Engineer",
            "experience": [
                {
                    "position": "Analyst",
                    "company": "Analytical Engines Ltd",
                    "start_date": "1842-01",
                    "responsibilities": []
                },
                {
                    "position": "Translator",
                    "company": "Scientific Memoirs",
                    "start_date": "1840-01",
                    "end_date": "1842-01",
                    "responsibilities": []
                }
            ],
            "education": [],
            "skills": []
        }))
        .unwrap();
        assert_eq!(schema.experience[0].position, "Analyst");
        assert_eq!(schema.experience[1].position, "Translator");
    }
}
