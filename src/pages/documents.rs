//! Documents Page
//!
//! PDF upload and listing. OCR runs server-side in the background, so the
//! list is polled while any document is still processing.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::pdf::PdfDocument;
use crate::components::{format_timestamp, ListSkeleton};
use crate::state::{use_session, GlobalState};

/// Poll interval while OCR results are pending, in milliseconds.
const OCR_POLL_MS: u32 = 5_000;

/// Client-side file gate: only PDFs are uploaded, checked before any
/// network call. Browsers report `application/pdf` for PDFs; the extension
/// check covers files with a missing MIME type.
pub fn is_pdf(filename: &str, mime_type: &str) -> bool {
    mime_type == "application/pdf"
        || (mime_type.is_empty() && filename.to_lowercase().ends_with(".pdf"))
}

/// Human-readable file size.
pub fn format_file_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.1} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Documents page component
#[component]
pub fn Documents() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let docs = create_rw_signal(Vec::<PdfDocument>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (uploading, set_uploading) = create_signal(false);
    let (upload_error, set_upload_error) = create_signal(None::<String>);

    // Initial fetch, then poll while any document is missing OCR results
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let state = state_for_fetch.clone();
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api::pdf::fetch_pdfs(&current).await {
                Ok(list) => docs.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);

            loop {
                gloo_timers::future::TimeoutFuture::new(OCR_POLL_MS).await;
                // The signal is disposed once the page unmounts; stop polling then
                let Some(list) = docs.try_get_untracked() else {
                    break;
                };
                if list.iter().all(|d| d.ocr_ready()) {
                    break;
                }
                // A failed poll is "not ready yet": log and try again
                match api::pdf::fetch_pdfs(&current).await {
                    Ok(list) => {
                        if docs.try_set(list).is_some() {
                            break;
                        }
                    }
                    Err(e) => logging::log!("document poll failed: {}", e),
                }
            }
        });
    });

    let state_for_upload = state.clone();
    let handle_upload = move |ev: web_sys::Event| {
        set_upload_error.set(None);
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // Reject non-PDF files before any network call
        if !is_pdf(&file.name(), &file.type_()) {
            set_upload_error.set(Some("Only PDF files are allowed".to_string()));
            input.set_value("");
            return;
        }

        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }

        set_uploading.set(true);
        let state = state_for_upload.clone();
        spawn_local(async move {
            match api::pdf::upload_pdf(&current, &file).await {
                Ok(doc) => {
                    state.show_success(&format!("{} uploaded, OCR in progress", doc.filename));
                    docs.update(|list| list.insert(0, doc));
                }
                Err(e) => {
                    set_upload_error.set(Some(e));
                }
            }
            set_uploading.set(false);
        });
    };

    let state_for_delete = state;
    let delete_doc = move |id: i64| {
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::pdf::delete_pdf(&current, id).await {
                Ok(()) => {
                    docs.update(|list| list.retain(|d| d.id != id));
                    state.show_success("Document deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Documents"</h1>
                <p class="text-gray-500 mt-1">"Upload PDFs for automatic data extraction"</p>
            </div>

            // Upload area
            <div class="space-y-2">
                <label
                    class="flex items-center justify-center px-4 py-8 bg-gray-50
                           hover:bg-gray-100 rounded-xl cursor-pointer transition-colors
                           border-2 border-dashed border-gray-300 hover:border-indigo-500"
                >
                    <input
                        type="file"
                        accept=".pdf,application/pdf"
                        class="hidden"
                        on:change=handle_upload
                        disabled=move || uploading.get()
                    />
                    <span class="flex items-center gap-2 text-gray-600">
                        {move || if uploading.get() {
                            view! { <span class="loading-spinner w-4 h-4"></span> }.into_view()
                        } else {
                            view! { <span>"📄"</span> }.into_view()
                        }}
                        {move || if uploading.get() {
                            "Uploading..."
                        } else {
                            "Choose a PDF or drag it here"
                        }}
                    </span>
                </label>

                {move || {
                    upload_error.get().map(|err| view! {
                        <div class="px-3 py-2.5 bg-red-50 border border-red-200 rounded-lg
                                    text-red-600 text-sm">
                            {err}
                        </div>
                    })
                }}
            </div>

            // Document list
            {move || {
                if !loaded.get() {
                    view! { <ListSkeleton count=3 /> }.into_view()
                } else if docs.get().is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-8">
                            "No documents yet. Upload your first PDF above."
                        </p>
                    }
                    .into_view()
                } else {
                    docs.get()
                        .into_iter()
                        .map(|doc| {
                            let on_delete = delete_doc.clone();
                            view! { <DocumentRow doc=doc on_delete=on_delete /> }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Single document row with OCR status and actions
#[component]
fn DocumentRow<F>(doc: PdfDocument, on_delete: F) -> impl IntoView
where
    F: Fn(i64) + Clone + 'static,
{
    let href = format!("/documents/{}", doc.id);
    let when = format_timestamp(&doc.created_at);
    let size = doc.file_size.map(format_file_size);
    let ready = doc.ocr_ready();
    let id = doc.id;

    view! {
        <div class="flex items-center justify-between bg-white border border-gray-200
                    rounded-xl p-4 mb-3 hover:shadow-sm transition-shadow">
            <div class="min-w-0">
                <A href=href class="font-medium text-gray-900 hover:text-indigo-600 truncate block">
                    {doc.filename}
                </A>
                <div class="flex items-center space-x-3 text-sm text-gray-400 mt-1">
                    <span>{when}</span>
                    {size.map(|s| view! { <span>{s}</span> })}
                    {if ready {
                        view! {
                            <span class="text-green-600 bg-green-50 px-2 py-0.5 rounded-full text-xs">
                                "OCR ready"
                            </span>
                        }
                        .into_view()
                    } else {
                        view! {
                            <span class="text-amber-600 bg-amber-50 px-2 py-0.5 rounded-full text-xs">
                                "Processing..."
                            </span>
                        }
                        .into_view()
                    }}
                </div>
            </div>

            <button
                on:click=move |_| on_delete(id)
                class="px-3 py-1.5 text-sm text-red-600 hover:bg-red-50 rounded-lg transition-colors"
            >
                "Delete"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_accepted_by_mime() {
        assert!(is_pdf("scan.pdf", "application/pdf"));
        assert!(is_pdf("weird-name", "application/pdf"));
    }

    #[test]
    fn test_non_pdf_rejected() {
        assert!(!is_pdf("photo.png", "image/png"));
        // A renamed file with a real MIME type is still rejected
        assert!(!is_pdf("sneaky.pdf", "image/png"));
    }

    #[test]
    fn test_extension_fallback_when_mime_missing() {
        assert!(is_pdf("report.PDF", ""));
        assert!(!is_pdf("report.docx", ""));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2_048), "2.0 KB");
        assert_eq!(format_file_size(3_145_728), "3.0 MB");
    }

    #[test]
    fn test_poll_exits_after_page_disposal() {
        let runtime = create_runtime();
        let docs = create_rw_signal(Vec::<PdfDocument>::new());
        docs.dispose();
        // The poll loop must observe disposal and break, not panic
        assert!(docs.try_get_untracked().is_none());
        assert!(docs.try_set(Vec::new()).is_some());
        runtime.dispose();
    }
}
