//! Dashboard Page
//!
//! Authenticated landing page: greeting, recent documents and quick links.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::pdf::PdfDocument;
use crate::components::{format_timestamp, CardSkeleton};
use crate::state::{use_session, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let docs = create_rw_signal(Vec::<PdfDocument>::new());
    let (loaded, set_loaded) = create_signal(false);

    create_effect(move |_| {
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            match api::pdf::fetch_pdfs(&current).await {
                Ok(list) => docs.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| {
                if u.name.is_empty() {
                    "Welcome back".to_string()
                } else {
                    format!("Welcome back, {}", u.name)
                }
            })
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    let pending = move || docs.get().iter().filter(|d| !d.ocr_ready()).count();

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{greeting}</h1>
                <p class="text-gray-500 mt-1">"Here's what's happening in your workspace"</p>
            </div>

            // Stat cards
            <div class="grid md:grid-cols-3 gap-4">
                <StatCard
                    label="Documents"
                    value=Signal::derive(move || docs.get().len().to_string())
                />
                <StatCard
                    label="Awaiting OCR"
                    value=Signal::derive(move || pending().to_string())
                />
                <StatCard
                    label="Plan"
                    value=Signal::derive(|| "Team".to_string())
                />
            </div>

            // Recent documents
            <section>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Recent documents"</h2>
                    <A href="/documents" class="text-sm text-indigo-600 hover:underline">
                        "View all"
                    </A>
                </div>

                {move || {
                    if !loaded.get() {
                        view! { <CardSkeleton /> }.into_view()
                    } else if docs.get().is_empty() {
                        view! {
                            <div class="bg-gray-50 rounded-xl p-8 text-center">
                                <p class="text-gray-500">"No documents yet."</p>
                                <A
                                    href="/documents"
                                    class="mt-3 inline-block px-4 py-2 bg-indigo-600 hover:bg-indigo-700
                                           text-white text-sm rounded-lg font-medium transition-colors"
                                >
                                    "Upload your first PDF"
                                </A>
                            </div>
                        }
                        .into_view()
                    } else {
                        docs.get()
                            .into_iter()
                            .take(5)
                            .map(|doc| {
                                let href = format!("/documents/{}", doc.id);
                                let when = format_timestamp(&doc.created_at);
                                let ready = doc.ocr_ready();
                                view! {
                                    <A
                                        href=href
                                        class="flex items-center justify-between bg-white border
                                               border-gray-200 rounded-xl p-4 mb-2 hover:shadow-sm
                                               transition-shadow"
                                    >
                                        <div>
                                            <span class="font-medium text-gray-900">{doc.filename}</span>
                                            <span class="text-sm text-gray-400 ml-3">{when}</span>
                                        </div>
                                        {if ready {
                                            view! { <span class="text-xs text-green-600">"OCR ready"</span> }
                                                .into_view()
                                        } else {
                                            view! { <span class="text-xs text-amber-600">"Processing..."</span> }
                                                .into_view()
                                        }}
                                    </A>
                                }
                            })
                            .collect_view()
                    }
                }}
            </section>

            // Quick links
            <section class="grid md:grid-cols-2 gap-4">
                <A href="/documents" class="bg-gray-50 hover:bg-gray-100 rounded-xl p-6 transition-colors">
                    <div class="text-2xl mb-2">"📄"</div>
                    <h3 class="font-semibold">"Upload a document"</h3>
                    <p class="text-sm text-gray-500 mt-1">"Extract data from a new PDF"</p>
                </A>
                <A href="/blog" class="bg-gray-50 hover:bg-gray-100 rounded-xl p-6 transition-colors">
                    <div class="text-2xl mb-2">"📰"</div>
                    <h3 class="font-semibold">"What's new"</h3>
                    <p class="text-sm text-gray-500 mt-1">"Catch up on product updates"</p>
                </A>
            </section>
        </div>
    }
}

/// Small stat card
#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 rounded-xl p-5">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-2xl font-bold mt-1">{move || value.get()}</p>
        </div>
    }
}
