use leptos::prelude::*;

use crate::core::stats::{ExamSummary, format_average};

use super::service::use_exam_page;

/// Summary cards above the exam table
#[component]
pub fn ExamStatistics() -> impl IntoView {
    let page = use_exam_page();
    let snapshot = page.snapshot();
    let summary = Memo::new(move |_| snapshot.with(|s| ExamSummary::from_exams(&s.exams)));

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
            <StatCard
                label="Average grade"
                value=Signal::derive(move || format_average(snapshot.get().average))
            />
            <StatCard
                label="Total ECTS"
                value=Signal::derive(move || snapshot.get().total_ects.to_string())
                detail=Signal::derive(move || {
                    format!("{} still open", summary.get().open_ects)
                })
            />
            <StatCard
                label="Passed"
                value=Signal::derive(move || {
                    let s = summary.get();
                    format!("{} / {}", s.passed, s.total)
                })
                detail=Signal::derive(move || format!("{}%", summary.get().passed_percent()))
            />
            <StatCard
                label="Attempts"
                value=Signal::derive(move || summary.get().attempts.to_string())
                detail=Signal::derive(move || format!("{} exams open", summary.get().open))
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)]
    detail: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="card p-4">
            <p class="text-sm text-theme-muted">{label}</p>
            <p class="text-2xl font-semibold text-theme-primary">{move || value.get()}</p>
            {detail.map(|detail| view! {
                <p class="text-xs text-theme-muted mt-1">{move || detail.get()}</p>
            })}
        </div>
    }
}
