//! Client-side validation of exam and account forms
//!
//! Mirrors the backend's constraints so that obviously invalid input is
//! rejected before a request is sent.

use chrono::NaiveDate;

use crate::core::models::{Exam, MAX_GRADE, MAX_NAME_LENGTH, MIN_GRADE};

/// Date format used by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values of the add/edit exam form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamForm {
    pub name: String,
    pub ects: String,
    pub attempt: String,
    pub date: String,
    pub grade: String,
    pub passed: bool,
}

impl Default for ExamForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            ects: String::new(),
            attempt: "1".to_string(),
            date: String::new(),
            grade: String::new(),
            passed: false,
        }
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub name: Option<String>,
    pub ects: Option<String>,
    pub attempt: Option<String>,
    pub date: Option<String>,
    pub grade: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ects.is_none()
            && self.attempt.is_none()
            && self.date.is_none()
            && self.grade.is_none()
    }
}

impl ExamForm {
    /// Prefill the form from an existing exam
    pub fn from_exam(exam: &Exam) -> Self {
        Self {
            name: exam.name.clone(),
            ects: exam.ects.to_string(),
            attempt: exam.attempt.to_string(),
            date: exam
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            grade: exam.grade.map(|g| g.to_string()).unwrap_or_default(),
            passed: exam.passed,
        }
    }

    /// Validate into a new exam
    pub fn validate(&self) -> Result<Exam, FormErrors> {
        self.apply_to(Exam::new(String::new(), 1))
    }

    /// Validate and write the values onto `base`, keeping its id,
    /// owner and attachments
    pub fn apply_to(&self, base: Exam) -> Result<Exam, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required".to_string());
        } else if name.chars().count() > MAX_NAME_LENGTH {
            errors.name = Some(format!(
                "Name must be at most {} characters",
                MAX_NAME_LENGTH
            ));
        }

        let ects = parse_positive(&self.ects, "ECTS").map_err(|e| errors.ects = Some(e));
        let attempt =
            parse_positive(&self.attempt, "Attempt").map_err(|e| errors.attempt = Some(e));
        let date = parse_date(&self.date).map_err(|e| errors.date = Some(e));
        let grade = parse_grade(&self.grade).map_err(|e| errors.grade = Some(e));

        match (ects, attempt, date, grade) {
            (Ok(ects), Ok(attempt), Ok(date), Ok(grade)) if errors.is_empty() => Ok(Exam {
                name: name.to_string(),
                ects,
                attempt,
                date,
                grade,
                passed: self.passed,
                ..base
            }),
            _ => Err(errors),
        }
    }
}

fn parse_positive(value: &str, field: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    match value.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("{} must be a whole number of at least 1", field)),
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Date must look like 2024-01-31".to_string())
}

/// Parse an optional grade; a decimal comma is accepted
pub fn parse_grade(value: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(grade) if (MIN_GRADE..=MAX_GRADE).contains(&grade) => Ok(Some(grade)),
        _ => Err(format!(
            "Grade must be between {:.1} and {:.1}",
            MIN_GRADE, MAX_GRADE
        )),
    }
}

/// Check login input, returning the first problem
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Check registration input, returning the first problem
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), String> {
    validate_credentials(username, password)?;
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
