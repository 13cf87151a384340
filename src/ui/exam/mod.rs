//! Exam page building blocks
//!
//! Statistics, the exam table and the dialogs acting on exams, all sharing
//! one [`ExamPageContext`].

mod attachment_dialog;
mod delete_dialog;
mod exam_dialog;
mod service;
mod state_dialog;
mod statistics;
mod table;

pub use attachment_dialog::{AttachmentDialog, AttachmentManager};
pub use delete_dialog::DeleteExamDialog;
pub use exam_dialog::{AddExamDialog, EditExamDialog};
pub use service::{ExamPageContext, provide_exam_page, use_exam_page};
pub use state_dialog::ExamStateDialog;
pub use statistics::ExamStatistics;
pub use table::ExamTable;
