//! Blog Listing Page
//!
//! Public list of posts; admins get create/edit shortcuts.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::blog::BlogPost;
use crate::components::{format_timestamp, ListSkeleton};
use crate::state::{use_session, GlobalState};

/// Blog listing page
#[component]
pub fn Blog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let posts = create_rw_signal(Vec::<BlogPost>::new());
    let (loaded, set_loaded) = create_signal(false);

    // Fetch posts on mount
    create_effect(move |_| {
        let state = state.clone();
        spawn_local(async move {
            match api::blog::fetch_posts().await {
                Ok(list) => posts.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Blog"</h1>
                    <p class="text-gray-500 mt-1">"Product updates and automation stories"</p>
                </div>

                {move || {
                    session.get().is_admin().then(|| view! {
                        <A
                            href="/blog/new"
                            class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white
                                   rounded-lg font-medium transition-colors"
                        >
                            "+ New Post"
                        </A>
                    })
                }}
            </div>

            {move || {
                if !loaded.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else if posts.get().is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-12">"No posts yet. Check back soon!"</p>
                    }
                    .into_view()
                } else {
                    posts
                        .get()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Single post card in the listing
#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let when = format_timestamp(&post.created_at);
    let excerpt = excerpt(&post.content, 180);

    view! {
        <A href=href class="block bg-white border border-gray-200 rounded-xl p-6 hover:shadow-md transition-shadow">
            <h2 class="text-xl font-semibold text-gray-900">{post.title}</h2>
            <p class="text-sm text-gray-400 mt-1">{when}</p>
            <p class="text-gray-600 mt-3 leading-relaxed">{excerpt}</p>
        </A>
    }
}

/// First `max` characters of a post body, cut at a word boundary.
pub fn excerpt(content: &str, max: usize) -> String {
    if content.chars().count() <= max {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max).collect();
    let cut = truncated.rfind(' ').unwrap_or(truncated.len());
    format!("{}…", &truncated[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_content_unchanged() {
        assert_eq!(excerpt("hello world", 180), "hello world");
    }

    #[test]
    fn test_excerpt_cuts_at_word_boundary() {
        let text = "alpha beta gamma delta";
        let cut = excerpt(text, 12);
        assert_eq!(cut, "alpha beta…");
    }
}
