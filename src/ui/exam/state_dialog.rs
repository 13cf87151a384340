use leptos::prelude::*;

use crate::core::Exam;
use crate::core::validation::parse_grade;
use crate::ui::common::{DialogActions, ErrorMessage, FormField, Modal};

use super::service::use_exam_page;

/// Record an exam as passed (with an optional grade) or failed
#[component]
pub fn ExamStateDialog(exam: Exam, passed: bool) -> impl IntoView {
    let page = use_exam_page();
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let grade = RwSignal::new(String::new());
    let grade_error = RwSignal::new(None::<String>);
    let base = StoredValue::new(exam.clone());

    let on_submit = Callback::new(move |_| {
        let outcome_grade = if passed {
            match parse_grade(&grade.get_untracked()) {
                Ok(grade) => grade,
                Err(message) => {
                    grade_error.set(Some(message));
                    return;
                }
            }
        } else {
            None
        };
        grade_error.set(None);

        let updated = base.with_value(|exam| exam.with_outcome(passed, outcome_grade));
        let done = if passed { "Exam passed" } else { "Attempt recorded" };
        page.mutate(pending, error, done, move |client| async move {
            client.exams().update(&updated).await
        });
    });
    let on_close = Callback::new(move |_| page.close());

    let (title, question) = if passed {
        ("Exam passed", "Mark this exam as passed?")
    } else {
        ("Exam failed", "Record a failed attempt for this exam?")
    };

    view! {
        <Modal
            title=title.to_string()
            subtitle=exam.name.clone()
            is_open=true
            on_close=on_close
            max_width="max-w-md"
        >
            <div class="space-y-4">
                <ErrorMessage error=error />
                <p class="text-theme-primary">{question}</p>
                {passed.then(|| view! {
                    <FormField
                        label="Grade"
                        placeholder="1,0 - 5,0"
                        value=grade
                        error=grade_error
                    />
                })}
                <DialogActions
                    submit_label="Confirm"
                    busy=pending
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </div>
        </Modal>
    }
}
