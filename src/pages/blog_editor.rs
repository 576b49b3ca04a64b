//! Blog Editor Page
//!
//! Admin-only create/edit form. The same component serves `/blog/new`
//! (no `:id` param) and `/blog/:id/edit`.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::{use_session, GlobalState};

/// Blog post editor (create & edit)
#[component]
pub fn BlogEditor() -> impl IntoView {
    let params = use_params_map();
    let editing_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let navigate = use_navigate();

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);

    // Prefill the form when editing an existing post
    create_effect(move |_| {
        let Some(id) = editing_id() else {
            return;
        };
        spawn_local(async move {
            match api::blog::fetch_post(id).await {
                Ok(post) => {
                    set_title.set(post.title);
                    set_content.set(post.content);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let handle_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let t = title.get();
        let c = content.get();
        if t.trim().is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }
        if c.trim().is_empty() {
            set_error.set(Some("Content is required".to_string()));
            return;
        }
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }

        set_saving.set(true);
        let id = editing_id();
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::blog::update_post(&current, id, t.trim(), &c).await,
                None => api::blog::create_post(&current, t.trim(), &c).await,
            };
            match result {
                Ok(post) => {
                    state.show_success(if id.is_some() { "Post updated" } else { "Post published" });
                    navigate(&format!("/blog/{}", post.id), Default::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">
                {move || if editing_id().is_some() { "Edit post" } else { "New post" }}
            </h1>

            <form on:submit=handle_save class="space-y-4">
                {move || {
                    error.get().map(|err| view! {
                        <div class="px-3 py-2.5 bg-red-50 border border-red-200 rounded-lg
                                    text-red-600 text-sm">
                            {err}
                        </div>
                    })
                }}

                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5 text-lg font-medium
                           focus:border-indigo-500 focus:outline-none"
                />

                <textarea
                    rows="16"
                    placeholder="Write your post..."
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-3 leading-relaxed
                           focus:border-indigo-500 focus:outline-none"
                />

                <div class="flex items-center space-x-3">
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-5 py-2.5 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if editing_id().is_some() {
                                "Save changes"
                            } else {
                                "Publish"
                            }
                        }}
                    </button>
                    <A href="/blog" class="text-sm text-gray-500 hover:text-gray-900">
                        "Cancel"
                    </A>
                </div>
            </form>
        </div>
    }
}
