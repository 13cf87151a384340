//! Exam overview page
//!
//! Statistics, the exam table and whichever dialog is open. A spinner
//! stands in for statistics and table while a snapshot loads.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::layout::PageLayout;
use crate::core::loader::LoadPhase;
use crate::core::page::Dialog;
use crate::ui::auth::use_session;
use crate::ui::common::{ErrorMessage, LoadingSpinner, SuccessMessage};
use crate::ui::exam::{
    AddExamDialog, AttachmentDialog, DeleteExamDialog, EditExamDialog, ExamStateDialog,
    ExamStatistics, ExamTable, provide_exam_page,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ExamsPage() -> impl IntoView {
    let session = use_session();

    // Also catches a session ended by a rejected token
    Effect::new(move |_| {
        if !session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/login", Default::default());
        }
    });

    let page = provide_exam_page();
    let state = page.state;
    let dialog = page.dialog();

    let phase = Memo::new(move |_| state.with(|s| s.data.phase().clone()));
    let load_error = Signal::derive(move || match phase.get() {
        LoadPhase::Failed(message) => Some(format!("Could not load your exams: {}", message)),
        _ => None,
    });

    view! {
        <PageLayout>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-4">
                <SuccessMessage message=page.notice />

                <Show when=move || load_error.get().is_some()>
                    <div class="flex items-center gap-4">
                        <div class="flex-1">
                            <ErrorMessage error=load_error />
                        </div>
                        <button class="btn-secondary" on:click=move |_| page.refresh()>
                            <Icon name=icons::REFRESH class="icon-text"/>
                            "Retry"
                        </button>
                    </div>
                </Show>

                <Show
                    when=move || phase.get() != LoadPhase::Loading
                    fallback=|| view! { <LoadingSpinner message="Loading exams...".to_string() /> }
                >
                    <ExamStatistics />
                    <ExamTable />
                </Show>

                // Selection-dependent dialogs only exist together with their exam
                {move || match dialog.get() {
                    Dialog::Closed => ().into_any(),
                    Dialog::Add => view! { <AddExamDialog /> }.into_any(),
                    Dialog::Attachments => view! { <AttachmentDialog /> }.into_any(),
                    Dialog::Edit(exam) => view! { <EditExamDialog exam=exam /> }.into_any(),
                    Dialog::Delete(exam) => view! { <DeleteExamDialog exam=exam /> }.into_any(),
                    Dialog::StateChange { exam, passed } => {
                        view! { <ExamStateDialog exam=exam passed=passed /> }.into_any()
                    }
                }}
            </div>
        </PageLayout>
    }
}
