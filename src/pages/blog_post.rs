//! Blog Post Page
//!
//! Single post with its nested comment thread; admins can edit or delete.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::blog::{BlogPost, Comment};
use crate::components::{format_timestamp, CommentThread, Loading};
use crate::state::{use_session, GlobalState};

/// Blog post detail page
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or(0)
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let navigate = use_navigate();

    let post = create_rw_signal(None::<BlogPost>);
    let comments = create_rw_signal(Vec::<Comment>::new());
    let (not_found, set_not_found) = create_signal(false);

    // Fetch the post and its comment tree on mount
    create_effect(move |_| {
        let id = post_id();
        let state = state.clone();
        spawn_local(async move {
            match api::blog::fetch_post(id).await {
                Ok(p) => post.set(Some(p)),
                Err(_) => {
                    set_not_found.set(true);
                    return;
                }
            }
            match api::blog::fetch_comments(id).await {
                Ok(tree) => comments.set(tree),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_delete = use_context::<GlobalState>().expect("GlobalState not found");
    let delete_post = move |_| {
        let id = post_id();
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }
        let state = state_for_delete.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::blog::delete_post(&current, id).await {
                Ok(()) => {
                    state.show_success("Post deleted");
                    navigate("/blog", Default::default());
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto">
            {move || {
                if not_found.get() {
                    view! {
                        <div class="text-center py-16">
                            <p class="text-gray-500">"This post doesn't exist."</p>
                            <A href="/blog" class="text-indigo-600 hover:underline text-sm">
                                "Back to the blog"
                            </A>
                        </div>
                    }
                    .into_view()
                } else if let Some(p) = post.get() {
                    let when = format_timestamp(&p.created_at);
                    let edit_href = format!("/blog/{}/edit", p.id);
                    view! {
                        <article>
                            <div class="flex items-start justify-between">
                                <div>
                                    <h1 class="text-3xl font-bold">{p.title.clone()}</h1>
                                    <p class="text-sm text-gray-400 mt-2">{when}</p>
                                </div>

                                {session.get().is_admin().then(|| view! {
                                    <div class="flex items-center space-x-2">
                                        <A
                                            href=edit_href.clone()
                                            class="px-3 py-1.5 text-sm bg-gray-100 hover:bg-gray-200
                                                   rounded-lg transition-colors"
                                        >
                                            "Edit"
                                        </A>
                                        <button
                                            on:click=delete_post.clone()
                                            class="px-3 py-1.5 text-sm bg-red-50 text-red-600
                                                   hover:bg-red-100 rounded-lg transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                })}
                            </div>

                            <div class="mt-8 text-gray-700 leading-relaxed whitespace-pre-wrap">
                                {p.content.clone()}
                            </div>
                        </article>

                        <CommentThread post_id=p.id comments=comments />
                    }
                    .into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </div>
    }
}
