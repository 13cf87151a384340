//! Data transfer objects shared with the exam backend
//!
//! Field names and defaults follow the backend's JSON schemas so that the
//! same types can be sent in request bodies and decoded from responses.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of an exam
pub type ExamId = i64;

/// Backend identifier of an uploaded attachment
pub type ResourceId = i64;

/// Lowest grade value accepted by the backend (best grade)
pub const MIN_GRADE: f64 = 1.0;

/// Highest grade value accepted by the backend (worst grade)
pub const MAX_GRADE: f64 = 5.0;

/// Maximum length of an exam name
pub const MAX_NAME_LENGTH: usize = 99;

fn default_attempt() -> u32 {
    1
}

/// Treats an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A recorded exam with its grade outcome and ECTS weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    /// Absent until the backend has persisted the exam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExamId>,
    pub name: String,
    pub ects: u32,
    /// Current attempt, starting at 1
    #[serde(default = "default_attempt")]
    pub attempt: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub passed: bool,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Grade between 1.0 and 5.0
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Attachments are managed through their own endpoints and never sent back
    #[serde(default, deserialize_with = "null_as_default", skip_serializing)]
    pub resources: Vec<Resource>,
}

impl Exam {
    /// Create a new, not yet persisted exam on its first attempt
    pub fn new(name: impl Into<String>, ects: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            ects,
            attempt: 1,
            passed: false,
            date: None,
            grade: None,
            user_id: None,
            resources: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ExamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    pub fn passed(mut self) -> Self {
        self.passed = true;
        self
    }

    /// Copy of this exam moved to the given outcome
    pub fn with_outcome(&self, passed: bool, grade: Option<f64>) -> Self {
        let mut exam = self.clone();
        exam.passed = passed;
        exam.grade = grade;
        exam
    }

    /// Whether the exam has attachments
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }
}

/// File attached to an exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    #[serde(default)]
    pub exam_id: Option<ExamId>,
    #[serde(alias = "name")]
    pub filename: String,
}

/// Authenticated identity as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// User known only by name
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Password-grant form fields sent to the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Average grade over the user's exams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamAverage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub average: f64,
}

/// Sum of ECTS over the user's exams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTotalEcts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_ects: u32,
}
