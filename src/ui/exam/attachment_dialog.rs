//! Attachment management: pick an exam, upload, download and remove files

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::FilePart;
use crate::core::{Exam, ExamId, Resource};
use crate::ui::common::{ErrorMessage, Modal};
use crate::ui::icon::{Icon, icons};

use super::service::use_exam_page;

/// Dialog listing every exam's attachments.
///
/// Closing reloads the page data so attachment counts stay current.
#[component]
pub fn AttachmentDialog() -> impl IntoView {
    let page = use_exam_page();
    let snapshot = page.snapshot();
    let selected = RwSignal::new(None::<ExamId>);

    // Pick the first exam until the user chooses one
    Effect::new(move |_| {
        if selected.get().is_none() {
            if let Some(first) = snapshot.with(|s| s.exams.iter().find_map(|e| e.id)) {
                selected.set(Some(first));
            }
        }
    });

    // Looked up once per selection; the manager keeps its own list afterwards
    let selected_exam = Memo::new(move |_| {
        let id = selected.get()?;
        snapshot.with_untracked(|s| s.exams.iter().find(|e| e.id == Some(id)).cloned())
    });

    view! {
        <Modal
            title="Attachments".to_string()
            subtitle="Files stored with your exams".to_string()
            is_open=true
            on_close=Callback::new(move |_| page.close())
            max_width="max-w-2xl"
        >
            <div class="space-y-4">
                <Show
                    when=move || snapshot.with(|s| !s.exams.is_empty())
                    fallback=|| view! {
                        <p class="text-sm text-theme-muted">"Add an exam before attaching files."</p>
                    }
                >
                    <div class="space-y-1.5">
                        <label class="label">"Exam"</label>
                        <select
                            class="input-base"
                            on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
                            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                        >
                            {move || {
                                snapshot
                                    .get()
                                    .exams
                                    .into_iter()
                                    .filter_map(|exam| exam.id.map(|id| (id, exam.name)))
                                    .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </Show>
                {move || selected_exam.get().map(|exam| view! { <AttachmentManager exam=exam /> })}
            </div>
        </Modal>
    }
}

/// Attachment list with upload for a single exam
#[component]
pub fn AttachmentManager(exam: Exam) -> impl IntoView {
    let page = use_exam_page();
    let resources = RwSignal::new(exam.resources.clone());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let file_input = NodeRef::<html::Input>::new();
    let exam_id = exam.id;

    let on_upload = move |_| {
        let Some(exam_id) = exam_id else {
            error.set(Some("Save the exam before attaching files".to_string()));
            return;
        };
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            let outcome = match selected_file(file_input).await {
                Ok(Some(file)) => page
                    .client()
                    .attachments()
                    .upload(exam_id, file)
                    .await
                    .map_err(|e| page.report(&e)),
                Ok(None) => Err("Choose a file first".to_string()),
                Err(message) => Err(message),
            };
            pending.set(false);

            match outcome {
                Ok(resource) => {
                    page.notify(format!("Uploaded {}", resource.filename));
                    resources.update(|r| r.push(resource));
                    page.refresh();
                    clear_input(file_input);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let on_remove = move |resource: Resource| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            let result = page.client().attachments().remove(resource.id).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    page.notify(format!("Removed {}", resource.filename));
                    resources.update(|r| r.retain(|other| other.id != resource.id));
                    page.refresh();
                }
                Err(err) => error.set(Some(page.report(&err))),
            }
        });
    };

    let on_download = move |resource: Resource| {
        error.set(None);
        spawn_local(async move {
            let result = page.client().attachments().download(resource.id).await;
            let saved = match result {
                Ok(bytes) => save_file(&resource.filename, bytes),
                Err(err) => Err(page.report(&err)),
            };
            if let Err(message) = saved {
                error.set(Some(message));
            }
        });
    };

    view! {
        <div class="space-y-3 divider-top pt-4">
            <h4 class="title-sm">"Attachments"</h4>
            <ErrorMessage error=error />

            <Show
                when=move || resources.with(|r| !r.is_empty())
                fallback=|| view! { <p class="text-sm text-theme-muted">"No files attached."</p> }
            >
                <ul class="space-y-1">
                    {move || {
                        resources
                            .get()
                            .into_iter()
                            .map(|resource| {
                                let name = resource.filename.clone();
                                let target = resource.clone();
                                view! {
                                    <li class="flex items-center justify-between gap-2 text-sm">
                                        <button
                                            type="button"
                                            class="flex items-center gap-1 text-theme-accent hover:underline"
                                            on:click=move |_| on_download(target.clone())
                                        >
                                            <Icon name=icons::DOWNLOAD class="icon-text"/>
                                            {name}
                                        </button>
                                        <button
                                            class="btn-icon"
                                            title="Remove"
                                            disabled=move || pending.get()
                                            on:click=move |_| on_remove(resource.clone())
                                        >
                                            <Icon name=icons::TRASH class="icon-standalone"/>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <div class="flex items-center gap-2">
                <input type="file" class="input-base flex-1" node_ref=file_input />
                <button
                    type="button"
                    class="btn-secondary"
                    disabled=move || pending.get()
                    on:click=on_upload
                >
                    <Icon name=icons::UPLOAD class="icon-text"/>
                    {move || if pending.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </div>
    }
}

/// Read the file chosen in `input`, if any
#[cfg(not(feature = "ssr"))]
async fn selected_file(input: NodeRef<html::Input>) -> Result<Option<FilePart>, String> {
    use crate::core::api::UPLOAD_FIELD;
    use wasm_bindgen_futures::JsFuture;

    let Some(file) = input
        .get_untracked()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0))
    else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(Some(
        FilePart::new(UPLOAD_FIELD, file.name(), bytes).with_content_type(file.type_()),
    ))
}

#[cfg(feature = "ssr")]
async fn selected_file(_input: NodeRef<html::Input>) -> Result<Option<FilePart>, String> {
    Ok(None)
}

/// Hand downloaded bytes to the browser as a file named `name`
#[cfg(not(feature = "ssr"))]
fn save_file(name: &str, bytes: Vec<u8>) -> Result<(), String> {
    use leptos::wasm_bindgen::JsCast;

    let failed = |e: leptos::wasm_bindgen::JsValue| format!("Could not save {}: {:?}", name, e);

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(failed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)?;

    let anchor = document()
        .create_element("a")
        .map_err(failed)?
        .unchecked_into::<web_sys::HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(failed)
}

#[cfg(feature = "ssr")]
fn save_file(_name: &str, _bytes: Vec<u8>) -> Result<(), String> {
    Ok(())
}

fn clear_input(input: NodeRef<html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}
