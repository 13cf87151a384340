//! Statistics derived locally from the exam list

use crate::core::models::Exam;

/// Counts shown next to the backend's average and total ECTS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExamSummary {
    pub total: usize,
    pub passed: usize,
    pub open: usize,
    /// Sum of attempts over all exams
    pub attempts: u32,
    pub passed_ects: u32,
    pub open_ects: u32,
}

impl ExamSummary {
    pub fn from_exams(exams: &[Exam]) -> Self {
        exams.iter().fold(Self::default(), |mut summary, exam| {
            summary.total += 1;
            summary.attempts = summary.attempts.saturating_add(exam.attempt);
            if exam.passed {
                summary.passed += 1;
                summary.passed_ects = summary.passed_ects.saturating_add(exam.ects);
            } else {
                summary.open += 1;
                summary.open_ects = summary.open_ects.saturating_add(exam.ects);
            }
            summary
        })
    }

    /// Share of exams passed, in percent (0 when there are none)
    pub fn passed_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.passed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Backend average with one decimal; an empty list averages to `0.0`
pub fn format_average(average: f64) -> String {
    format!("{:.1}", average)
}

/// Format a grade with one decimal, or `-` when there is none
pub fn format_grade(grade: Option<f64>) -> String {
    match grade {
        Some(grade) if grade > 0.0 => format!("{:.1}", grade),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_list() {
        let summary = ExamSummary::from_exams(&[]);

        assert_eq!(summary, ExamSummary::default());
        assert_eq!(summary.passed_percent(), 0);
    }

    #[test]
    fn test_summary_counts() {
        let exams = vec![
            Exam::new("Math", 5).passed().with_grade(1.3),
            Exam::new("Physics", 6).with_attempt(2),
            Exam::new("Databases", 4).passed(),
        ];

        let summary = ExamSummary::from_exams(&exams);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.open, 1);
        assert_eq!(summary.attempts, 4);
        assert_eq!(summary.passed_ects, 9);
        assert_eq!(summary.open_ects, 6);
        assert_eq!(summary.passed_percent(), 67);
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(Some(2.26)), "2.3");
        assert_eq!(format_grade(Some(1.0)), "1.0");
        assert_eq!(format_grade(Some(0.0)), "-");
        assert_eq!(format_grade(None), "-");
    }

    #[test]
    fn test_format_average_shows_zero() {
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_average(1.74), "1.7");
    }

    #[test]
    fn test_summary_saturates_on_huge_values() {
        let mut big = Exam::new("Huge", u32::MAX);
        big.attempt = u32::MAX;
        let exams = vec![big.clone(), big];

        let summary = ExamSummary::from_exams(&exams);

        assert_eq!(summary.attempts, u32::MAX);
        assert_eq!(summary.open_ects, u32::MAX);
        assert_eq!(summary.open, 2);
    }
}
