//! Exam table with per-row actions

use leptos::prelude::*;

use crate::core::page::Dialog;
use crate::core::stats::format_grade;
use crate::core::validation::DATE_FORMAT;
use crate::core::Exam;
use crate::ui::icon::{Icon, icons};

use super::service::use_exam_page;

#[component]
pub fn ExamTable() -> impl IntoView {
    let page = use_exam_page();
    let snapshot = page.snapshot();

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="title-lg">"Exams"</h2>
                <div class="flex items-center gap-2">
                    <button
                        class="btn-secondary"
                        on:click=move |_| page.open(Dialog::Attachments)
                    >
                        <Icon name=icons::PAPERCLIP class="icon-text"/>
                        "Attachments"
                    </button>
                    <button
                        class="btn-primary"
                        on:click=move |_| page.open(Dialog::Add)
                    >
                        <Icon name=icons::PLUS class="icon-text"/>
                        "Add exam"
                    </button>
                </div>
            </div>

            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-theme-muted divider-bottom">
                        <th class="px-4 py-2">"Name"</th>
                        <th class="px-4 py-2">"ECTS"</th>
                        <th class="px-4 py-2">"Attempt"</th>
                        <th class="px-4 py-2">"Date"</th>
                        <th class="px-4 py-2">"Grade"</th>
                        <th class="px-4 py-2">"Status"</th>
                        <th class="px-4 py-2 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || snapshot.with(|s| !s.exams.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="7" class="px-4 py-8 text-center text-theme-muted">
                                    "No exams recorded yet"
                                </td>
                            </tr>
                        }
                    >
                        {move || {
                            snapshot
                                .get()
                                .exams
                                .into_iter()
                                .map(|exam| view! { <ExamRow exam=exam /> })
                                .collect_view()
                        }}
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ExamRow(exam: Exam) -> impl IntoView {
    let page = use_exam_page();

    let date = exam
        .date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());
    let attachments = exam.resources.len();

    let status = if exam.passed {
        view! { <span class="badge badge-success">"Passed"</span> }.into_any()
    } else {
        view! { <span class="badge badge-neutral">"Open"</span> }.into_any()
    };

    // Outcome actions only make sense while the exam is still open
    let outcome_actions = (!exam.passed).then(|| {
        let pass = exam.clone();
        let fail = exam.clone();
        view! {
            <button
                class="btn-icon"
                title="Mark passed"
                on:click=move |_| page.open(Dialog::StateChange { exam: pass.clone(), passed: true })
            >
                <Icon name=icons::CHECK class="icon-standalone"/>
            </button>
            <button
                class="btn-icon"
                title="Mark failed"
                on:click=move |_| page.open(Dialog::StateChange { exam: fail.clone(), passed: false })
            >
                <Icon name=icons::X class="icon-standalone"/>
            </button>
        }
    });

    let edit = exam.clone();
    let delete = exam.clone();

    view! {
        <tr class="divider-bottom hover:bg-theme-secondary">
            <td class="px-4 py-2 font-medium text-theme-primary">
                {exam.name.clone()}
                {exam.has_resources().then(|| view! {
                    <span class="ml-2 text-xs text-theme-muted" title="Attachments">
                        <Icon name=icons::PAPERCLIP class="inline w-3 h-3"/>
                        {attachments}
                    </span>
                })}
            </td>
            <td class="px-4 py-2">{exam.ects}</td>
            <td class="px-4 py-2">{exam.attempt}</td>
            <td class="px-4 py-2">{date}</td>
            <td class="px-4 py-2">{format_grade(exam.grade)}</td>
            <td class="px-4 py-2">{status}</td>
            <td class="px-4 py-2">
                <div class="flex items-center justify-end gap-1">
                    {outcome_actions}
                    <button
                        class="btn-icon"
                        title="Edit"
                        on:click=move |_| page.open(Dialog::Edit(edit.clone()))
                    >
                        <Icon name=icons::EDIT class="icon-standalone"/>
                    </button>
                    <button
                        class="btn-icon"
                        title="Delete"
                        on:click=move |_| page.open(Dialog::Delete(delete.clone()))
                    >
                        <Icon name=icons::TRASH class="icon-standalone"/>
                    </button>
                </div>
            </td>
        </tr>
    }
}
