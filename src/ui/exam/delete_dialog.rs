use leptos::prelude::*;

use crate::core::Exam;
use crate::ui::common::{DialogActions, ErrorMessage, Modal};

use super::service::use_exam_page;

/// Confirmation before an exam is deleted
#[component]
pub fn DeleteExamDialog(exam: Exam) -> impl IntoView {
    let page = use_exam_page();
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let exam_id = exam.id;

    let on_submit = Callback::new(move |_| {
        let Some(id) = exam_id else {
            error.set(Some("This exam has not been saved yet".to_string()));
            return;
        };
        page.mutate(pending, error, "Exam deleted", move |client| async move {
            client.exams().delete(id).await
        });
    });
    let on_close = Callback::new(move |_| page.close());

    view! {
        <Modal title="Delete exam".to_string() is_open=true on_close=on_close max_width="max-w-md">
            <div class="space-y-4">
                <ErrorMessage error=error />
                <p class="text-theme-primary">"Do you really want to delete this exam?"</p>
                <p class="text-sm text-theme-muted">
                    {exam.name.clone()}
                    {exam.has_resources().then(|| " and its attachments")}
                </p>
                <DialogActions
                    submit_label="Delete"
                    busy_label="Deleting..."
                    busy=pending
                    destructive=true
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </div>
        </Modal>
    }
}
