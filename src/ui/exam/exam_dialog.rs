//! Add and edit dialogs sharing one exam form

use leptos::prelude::*;

use crate::core::Exam;
use crate::core::validation::{ExamForm, FormErrors};
use crate::ui::common::{CheckboxField, DialogActions, ErrorMessage, FormField, Modal};

use super::attachment_dialog::AttachmentManager;
use super::service::use_exam_page;

/// Input signals of the exam form
#[derive(Clone, Copy)]
struct ExamFormState {
    name: RwSignal<String>,
    ects: RwSignal<String>,
    attempt: RwSignal<String>,
    date: RwSignal<String>,
    grade: RwSignal<String>,
    passed: RwSignal<bool>,
    errors: RwSignal<FormErrors>,
}

impl ExamFormState {
    fn new(form: ExamForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            ects: RwSignal::new(form.ects),
            attempt: RwSignal::new(form.attempt),
            date: RwSignal::new(form.date),
            grade: RwSignal::new(form.grade),
            passed: RwSignal::new(form.passed),
            errors: RwSignal::new(FormErrors::default()),
        }
    }

    fn values(&self) -> ExamForm {
        ExamForm {
            name: self.name.get_untracked(),
            ects: self.ects.get_untracked(),
            attempt: self.attempt.get_untracked(),
            date: self.date.get_untracked(),
            grade: self.grade.get_untracked(),
            passed: self.passed.get_untracked(),
        }
    }

    /// Validate onto `base`, publishing field errors on failure
    fn validate_onto(&self, base: Exam) -> Option<Exam> {
        match self.values().apply_to(base) {
            Ok(exam) => {
                self.errors.set(FormErrors::default());
                Some(exam)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }

    fn error(&self, field: fn(&FormErrors) -> Option<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(field))
    }
}

#[component]
fn ExamFormFields(form: ExamFormState) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <FormField
                label="Name"
                required=true
                placeholder="e.g. Linear Algebra"
                value=form.name
                error=form.error(|e| e.name.clone())
            />
            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="ECTS"
                    required=true
                    input_type="number"
                    step="1"
                    value=form.ects
                    error=form.error(|e| e.ects.clone())
                />
                <FormField
                    label="Attempt"
                    required=true
                    input_type="number"
                    step="1"
                    value=form.attempt
                    error=form.error(|e| e.attempt.clone())
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="Date"
                    input_type="date"
                    value=form.date
                    error=form.error(|e| e.date.clone())
                />
                <FormField
                    label="Grade"
                    placeholder="1,0 - 5,0"
                    value=form.grade
                    error=form.error(|e| e.grade.clone())
                />
            </div>
            <CheckboxField label="Passed" checked=form.passed />
        </div>
    }
}

#[component]
pub fn AddExamDialog() -> impl IntoView {
    let page = use_exam_page();
    let form = ExamFormState::new(ExamForm::default());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |_| {
        let Some(exam) = form.validate_onto(Exam::new(String::new(), 1)) else {
            return;
        };
        page.mutate(pending, error, "Exam added", move |client| async move {
            client.exams().create(&exam).await
        });
    });
    let on_close = Callback::new(move |_| page.close());

    view! {
        <Modal title="Add exam".to_string() is_open=true on_close=on_close>
            <div class="space-y-4">
                <ErrorMessage error=error />
                <ExamFormFields form=form />
                <DialogActions
                    submit_label="Add"
                    busy=pending
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </div>
        </Modal>
    }
}

/// Edit an exam and manage its attachments.
///
/// Closing always reloads the page data since attachments may have changed.
#[component]
pub fn EditExamDialog(exam: Exam) -> impl IntoView {
    let page = use_exam_page();
    let form = ExamFormState::new(ExamForm::from_exam(&exam));
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let base = StoredValue::new(exam.clone());

    let on_submit = Callback::new(move |_| {
        let Some(updated) = form.validate_onto(base.get_value()) else {
            return;
        };
        page.mutate(pending, error, "Exam updated", move |client| async move {
            client.exams().update(&updated).await
        });
    });
    let on_close = Callback::new(move |_| page.close());

    view! {
        <Modal
            title="Edit exam".to_string()
            subtitle=exam.name.clone()
            is_open=true
            on_close=on_close
            max_width="max-w-2xl"
        >
            <div class="space-y-4">
                <ErrorMessage error=error />
                <ExamFormFields form=form />
                <AttachmentManager exam=exam.clone() />
                <DialogActions
                    submit_label="Save"
                    busy=pending
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </div>
        </Modal>
    }
}
