//! Exam page state: open dialog, selection and the data it displays

use crate::core::api::{ApiClient, ApiError, Transport};
use crate::core::loader::{Generation, Loader};
use crate::core::models::{Exam, ExamId};

/// Kinds of dialogs the exam page can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DialogKind {
    #[display("add")]
    Add,
    #[display("edit")]
    Edit,
    #[display("delete")]
    Delete,
    #[display("state change")]
    StateChange,
    #[display("attachments")]
    Attachments,
}

/// The currently open dialog.
///
/// Dialogs that act on a single exam carry it, so the selection exists
/// exactly as long as such a dialog is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Add,
    Attachments,
    Edit(Exam),
    Delete(Exam),
    /// Marking the exam passed (`true`) or failed (`false`)
    StateChange { exam: Exam, passed: bool },
}

impl Dialog {
    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            Dialog::Closed => None,
            Dialog::Add => Some(DialogKind::Add),
            Dialog::Attachments => Some(DialogKind::Attachments),
            Dialog::Edit(_) => Some(DialogKind::Edit),
            Dialog::Delete(_) => Some(DialogKind::Delete),
            Dialog::StateChange { .. } => Some(DialogKind::StateChange),
        }
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Identity of this dialog, used to tell whether it is still the one open
    pub fn origin(&self) -> DialogOrigin {
        DialogOrigin {
            kind: self.kind(),
            exam: self.selected().and_then(|exam| exam.id),
        }
    }

    /// The exam a selection-dependent dialog acts on
    pub fn selected(&self) -> Option<&Exam> {
        match self {
            Dialog::Edit(exam) | Dialog::Delete(exam) | Dialog::StateChange { exam, .. } => {
                Some(exam)
            }
            Dialog::Closed | Dialog::Add | Dialog::Attachments => None,
        }
    }

    /// Close whatever is open and drop the selection.
    ///
    /// Returns whether closing must trigger a reload: the edit and attachment
    /// dialogs may have uploaded files that change the statistics.
    pub fn close(&mut self) -> bool {
        let reload = matches!(self, Dialog::Edit(_) | Dialog::Attachments);
        *self = Dialog::Closed;
        reload
    }
}

/// Which dialog, for which exam, started a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogOrigin {
    kind: Option<DialogKind>,
    exam: Option<ExamId>,
}

/// Everything the exam page displays, fetched together
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExamSnapshot {
    pub exams: Vec<Exam>,
    pub average: f64,
    pub total_ects: u32,
}

/// State behind the exam page.
///
/// Mutations follow one order: remote call, then [`committed`](Self::committed)
/// which closes every dialog and marks the data stale, so the next render
/// shows the backend's state rather than a local guess.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamPageState {
    pub dialog: Dialog,
    pub data: Loader<ExamSnapshot>,
}

impl ExamPageState {
    pub fn new() -> Self {
        Self {
            dialog: Dialog::Closed,
            data: Loader::new(ExamSnapshot::default()),
        }
    }

    /// Open a dialog, replacing any open one
    pub fn open(&mut self, dialog: Dialog) {
        self.dialog = dialog;
    }

    /// Shared close path for every dialog
    pub fn close(&mut self) {
        if self.dialog.close() {
            self.data.mark_dirty();
        }
    }

    /// A mutation succeeded: close dialogs, then mark data stale
    pub fn committed(&mut self) {
        self.dialog.close();
        self.data.mark_dirty();
    }

    /// Apply the outcome of a mutation started from `origin`.
    ///
    /// Success marks the data stale and closes the originating dialog if it is
    /// still open; a dialog opened in the meantime stays. Failure changes
    /// nothing, so the dialog can show the error.
    pub fn settle<R>(
        &mut self,
        origin: DialogOrigin,
        result: Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        if result.is_ok() {
            if self.dialog.origin() == origin {
                self.committed();
            } else {
                self.data.mark_dirty();
            }
        }
        result
    }

    /// Ask for a reload without closing anything
    pub fn refresh(&mut self) {
        self.data.mark_dirty();
    }

    /// Start a reload if the data is stale and no fetch for it is running
    pub fn begin_load(&mut self) -> Option<Generation> {
        (self.data.is_dirty() && !self.data.is_fetching_current()).then(|| self.data.begin())
    }

    pub fn finish_load(
        &mut self,
        generation: Generation,
        result: Result<ExamSnapshot, ApiError>,
    ) -> bool {
        self.data.finish(generation, result)
    }

    /// Nothing renders but a placeholder until the first load finished
    pub fn is_loading(&self) -> bool {
        self.data.is_loading()
    }
}

impl Default for ExamPageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch exam list, average grade and total ECTS concurrently
pub async fn fetch_snapshot<T: Transport>(client: &ApiClient<T>) -> Result<ExamSnapshot, ApiError> {
    let exams = client.exams();
    let (exams, average, total_ects) =
        futures::try_join!(exams.list(false), exams.average(), exams.total_ects())?;

    Ok(ExamSnapshot {
        exams,
        average,
        total_ects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam() -> Exam {
        Exam::new("Math", 5).with_id(5)
    }

    #[test]
    fn test_default_dialog_is_closed() {
        let dialog = Dialog::default();

        assert_eq!(dialog.kind(), None);
        assert!(dialog.selected().is_none());
    }

    #[test]
    fn test_selection_dependent_dialogs_carry_exam() {
        for dialog in [
            Dialog::Edit(exam()),
            Dialog::Delete(exam()),
            Dialog::StateChange {
                exam: exam(),
                passed: true,
            },
        ] {
            assert_eq!(dialog.selected(), Some(&exam()));
        }

        assert!(Dialog::Add.selected().is_none());
        assert!(Dialog::Attachments.selected().is_none());
    }

    #[test]
    fn test_close_clears_every_dialog_and_selection() {
        for mut dialog in [
            Dialog::Add,
            Dialog::Attachments,
            Dialog::Edit(exam()),
            Dialog::Delete(exam()),
            Dialog::StateChange {
                exam: exam(),
                passed: false,
            },
        ] {
            dialog.close();

            assert_eq!(dialog, Dialog::Closed);
            assert!(dialog.selected().is_none());
            for kind in [
                DialogKind::Add,
                DialogKind::Edit,
                DialogKind::Delete,
                DialogKind::StateChange,
                DialogKind::Attachments,
            ] {
                assert!(!dialog.is_open(kind), "{} still open", kind);
            }
        }
    }

    #[test]
    fn test_close_requests_reload_after_edit_and_attachments() {
        assert!(Dialog::Edit(exam()).close());
        assert!(Dialog::Attachments.close());

        assert!(!Dialog::Add.close());
        assert!(!Dialog::Delete(exam()).close());
        assert!(!Dialog::Closed.close());
    }

    #[test]
    fn test_page_close_marks_dirty_only_when_needed() {
        let mut page = ExamPageState::new();
        let generation = page.begin_load().unwrap();
        page.finish_load(generation, Ok(ExamSnapshot::default()));
        assert!(!page.data.is_dirty());

        page.open(Dialog::Delete(exam()));
        page.close();
        assert!(!page.data.is_dirty());

        page.open(Dialog::Edit(exam()));
        page.close();
        assert!(page.data.is_dirty());
        assert_eq!(page.dialog, Dialog::Closed);
    }

    #[test]
    fn test_committed_closes_and_marks_dirty() {
        let mut page = ExamPageState::new();
        let generation = page.begin_load().unwrap();
        page.finish_load(generation, Ok(ExamSnapshot::default()));

        page.open(Dialog::StateChange {
            exam: exam(),
            passed: true,
        });
        page.committed();

        assert_eq!(page.dialog, Dialog::Closed);
        assert!(page.data.is_dirty());
        assert!(page.begin_load().is_some());
    }

    #[test]
    fn test_settle_success_closes_originating_dialog() {
        let mut page = ExamPageState::new();
        page.open(Dialog::Delete(exam()));
        let origin = page.dialog.origin();

        assert_eq!(page.settle(origin, Ok(())), Ok(()));

        assert_eq!(page.dialog, Dialog::Closed);
        assert!(page.data.is_dirty());
    }

    #[test]
    fn test_settle_failure_keeps_dialog() {
        let mut page = ExamPageState::new();
        let generation = page.begin_load().unwrap();
        page.finish_load(generation, Ok(ExamSnapshot::default()));
        page.open(Dialog::Delete(exam()));
        let origin = page.dialog.origin();

        let result = page.settle::<()>(origin, Err(ApiError::Network("down".to_string())));

        assert!(result.is_err());
        assert_eq!(page.dialog, Dialog::Delete(exam()));
        assert!(!page.data.is_dirty());
    }

    #[test]
    fn test_settle_leaves_dialog_opened_meanwhile() {
        let mut page = ExamPageState::new();
        page.open(Dialog::Delete(exam()));
        let origin = page.dialog.origin();

        // Closed while the call was pending, then another exam opened
        page.close();
        let other = Exam::new("Physics", 6).with_id(7);
        page.open(Dialog::Edit(other.clone()));

        assert!(page.settle(origin, Ok(())).is_ok());

        assert_eq!(page.dialog, Dialog::Edit(other));
        assert!(page.data.is_dirty());
    }

    #[test]
    fn test_origin_distinguishes_selected_exam() {
        let other = Exam::new("Physics", 6).with_id(7);

        assert_eq!(Dialog::Edit(exam()).origin(), Dialog::Edit(exam()).origin());
        assert_ne!(Dialog::Edit(exam()).origin(), Dialog::Edit(other).origin());
        assert_ne!(Dialog::Edit(exam()).origin(), Dialog::Delete(exam()).origin());
        assert_eq!(Dialog::Add.origin(), Dialog::Add.origin());
    }

    #[test]
    fn test_begin_load_skips_revision_already_in_flight() {
        let mut page = ExamPageState::new();

        assert!(page.begin_load().is_some());
        assert!(page.begin_load().is_none());

        page.refresh();
        assert!(page.begin_load().is_some());
    }

    #[test]
    fn test_begin_load_only_when_dirty() {
        let mut page = ExamPageState::new();
        assert!(page.is_loading());

        let generation = page.begin_load().unwrap();
        page.finish_load(generation, Ok(ExamSnapshot::default()));

        assert!(!page.is_loading());
        assert!(page.begin_load().is_none());

        page.refresh();
        assert!(page.begin_load().is_some());
    }

    #[test]
    fn test_is_open() {
        let dialog = Dialog::StateChange {
            exam: exam(),
            passed: true,
        };

        assert!(dialog.is_open(DialogKind::StateChange));
        assert!(!dialog.is_open(DialogKind::Edit));
    }
}
