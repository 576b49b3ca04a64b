//! Document Viewer Page
//!
//! Single PDF with the OCR bounding-box overlay and the structured-data
//! panel. The presigned file URL is fetched fresh on mount (it is
//! short-lived); OCR results are polled until the server has them.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::pdf::{OcrData, PdfDocument};
use crate::components::{format_timestamp, Loading, PdfOverlayViewer};
use crate::state::{use_session, GlobalState};

/// Poll interval while OCR results are pending, in milliseconds.
const OCR_POLL_MS: u32 = 5_000;

/// Document viewer page
#[component]
pub fn DocumentViewer() -> impl IntoView {
    let params = use_params_map();
    let doc_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or(0)
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();

    let document = create_rw_signal(None::<PdfDocument>);
    let file_url = create_rw_signal(None::<String>);
    let ocr = create_rw_signal(None::<OcrData>);

    create_effect(move |_| {
        let id = doc_id();
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            match api::pdf::fetch_pdf(&current, id).await {
                Ok(doc) => {
                    if let Some(data) = doc.ocr_data.clone() {
                        ocr.set(Some(data));
                    }
                    document.set(Some(doc));
                }
                Err(e) => {
                    state.show_error(&e);
                    return;
                }
            }

            match api::pdf::fetch_pdf_url(&current, id).await {
                Ok(url) => file_url.set(Some(url)),
                Err(e) => state.show_error(&e),
            }

            // Poll until OCR results exist; "not ready" is swallowed.
            // `try_get_untracked` returns `None` once the page unmounts and
            // the signal is disposed, which ends the loop.
            while matches!(ocr.try_get_untracked(), Some(None)) {
                gloo_timers::future::TimeoutFuture::new(OCR_POLL_MS).await;
                match api::pdf::fetch_ocr(&current, id).await {
                    Ok(Some(data)) => {
                        if ocr.try_set(Some(data)).is_some() {
                            break;
                        }
                    }
                    Ok(None) => logging::log!("OCR not ready for document {}", id),
                    Err(e) => logging::log!("OCR poll failed: {}", e),
                }
            }
        });
    });

    view! {
        <div class="max-w-5xl mx-auto space-y-6">
            <A href="/documents" class="text-sm text-gray-500 hover:text-gray-900">
                "← Back to documents"
            </A>

            {move || {
                document.get().map(|doc| {
                    let when = format_timestamp(&doc.created_at);
                    view! {
                        <div>
                            <h1 class="text-2xl font-bold">{doc.filename.clone()}</h1>
                            <p class="text-sm text-gray-400 mt-1">{format!("Uploaded {}", when)}</p>
                        </div>
                    }
                })
            }}

            {move || {
                if let Some(url) = file_url.get() {
                    view! {
                        <PdfOverlayViewer url=url ocr=Signal::derive(move || ocr.get()) />
                    }
                    .into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}

            // Structured extraction results
            {move || {
                match ocr.get() {
                    Some(data) => view! { <StructuredDataPanel data=data /> }.into_view(),
                    None => view! {
                        <div class="bg-amber-50 border border-amber-200 rounded-xl p-4 text-sm text-amber-700">
                            "OCR is still processing. Extracted data will appear here automatically."
                        </div>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

/// Key-value panel for the OCR's structured extraction output.
#[component]
fn StructuredDataPanel(data: OcrData) -> impl IntoView {
    let fields: Vec<(String, String)> = data
        .structured_data
        .as_ref()
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .map(|(k, v)| {
                    let rendered = match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), rendered)
                })
                .collect()
        })
        .unwrap_or_default();

    let box_count = data.bounding_boxes.len();

    view! {
        <section class="bg-white border border-gray-200 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold">"Extracted data"</h2>
                <span class="text-xs text-gray-400">
                    {format!("{} text regions recognized", box_count)}
                </span>
            </div>

            {if fields.is_empty() {
                view! {
                    <p class="text-sm text-gray-500">"No structured fields were extracted."</p>
                }
                .into_view()
            } else {
                view! {
                    <dl class="grid md:grid-cols-2 gap-x-8 gap-y-3">
                        {fields.into_iter().map(|(key, value)| view! {
                            <div class="flex justify-between border-b border-gray-100 pb-2">
                                <dt class="text-sm text-gray-500 capitalize">{key.replace('_', " ")}</dt>
                                <dd class="text-sm font-medium text-gray-900 text-right">{value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                }
                .into_view()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_poll_exits_after_page_disposal() {
        let runtime = create_runtime();
        let ocr = create_rw_signal(None::<OcrData>);
        // Pending results keep the loop alive
        assert!(matches!(ocr.try_get_untracked(), Some(None)));
        ocr.dispose();
        // Disposal ends it instead of panicking on a dead signal
        assert!(ocr.try_get_untracked().is_none());
        runtime.dispose();
    }
}
