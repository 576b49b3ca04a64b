//! Comment Thread Component
//!
//! Renders a nested comment tree with per-comment reply composition.
//!
//! The tree model is kept separate from the UI: [`flatten_thread`] turns the
//! server's nested structure into a display list (preserving server order
//! verbatim, no client-side re-sorting) and [`insert_reply`] patches a newly
//! created comment into the local tree so a successful post does not require
//! re-fetching the whole thread.

use leptos::*;
use std::collections::HashMap;

use crate::api;
use crate::api::blog::Comment;
use crate::state::{use_session, GlobalState};

/// Maximum visual nesting depth. Replies deeper than this still render,
/// just without additional indentation (display-only clamp).
pub const MAX_INDENT_DEPTH: usize = 2;

/// One row of the display list: a comment plus its clamped indent depth.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreadEntry {
    pub comment: Comment,
    pub depth: usize,
}

/// Flatten a nested comment tree into a display list in preorder,
/// clamping indent depth at [`MAX_INDENT_DEPTH`].
pub fn flatten_thread(comments: &[Comment]) -> Vec<ThreadEntry> {
    let mut entries = Vec::new();
    for comment in comments {
        push_subtree(comment, 0, &mut entries);
    }
    entries
}

fn push_subtree(comment: &Comment, depth: usize, entries: &mut Vec<ThreadEntry>) {
    entries.push(ThreadEntry {
        comment: comment.clone(),
        depth: depth.min(MAX_INDENT_DEPTH),
    });
    for reply in &comment.replies {
        push_subtree(reply, depth + 1, entries);
    }
}

/// Append `reply` under the comment with id `parent_id`.
///
/// Returns `false` when the parent is not present in the tree (the caller
/// should fall back to a re-fetch).
pub fn insert_reply(comments: &mut Vec<Comment>, parent_id: i64, reply: Comment) -> bool {
    for comment in comments.iter_mut() {
        if comment.id == parent_id {
            comment.replies.push(reply);
            return true;
        }
        if insert_reply(&mut comment.replies, parent_id, reply.clone()) {
            return true;
        }
    }
    false
}

/// Total number of comments in the tree, replies included.
pub fn comment_count(comments: &[Comment]) -> usize {
    comments
        .iter()
        .map(|c| 1 + comment_count(&c.replies))
        .sum()
}

/// Nested comment thread with a top-level composer and per-comment reply
/// boxes. Drafts are keyed by comment id so concurrent in-progress replies
/// to different comments do not interfere.
#[component]
pub fn CommentThread(post_id: i64, comments: RwSignal<Vec<Comment>>) -> impl IntoView {
    let session = use_session();

    // Reply drafts keyed per comment id; `None` key (top-level) uses its own signal
    let drafts = create_rw_signal(HashMap::<i64, String>::new());
    let open_reply = create_rw_signal(None::<i64>);
    let top_level_draft = create_rw_signal(String::new());

    let count = move || comment_count(&comments.get());

    view! {
        <section class="mt-12">
            <h2 class="text-xl font-semibold mb-4 text-gray-900">
                {move || format!("Comments ({})", count())}
            </h2>

            // Top-level composer (signed-in users only)
            {move || {
                if session.get().is_authenticated() {
                    view! {
                        <Composer
                            post_id=post_id
                            parent_id=None
                            draft=top_level_draft
                            comments=comments
                            open_reply=open_reply
                            placeholder="Share your thoughts..."
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <p class="text-sm text-gray-500 mb-6">
                            <a href="/login" class="text-indigo-600 hover:underline">"Sign in"</a>
                            " to join the discussion."
                        </p>
                    }
                    .into_view()
                }
            }}

            // The thread itself
            <div class="space-y-4 mt-6">
                {move || {
                    let entries = flatten_thread(&comments.get());
                    if entries.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm">"No comments yet. Be the first!"</p>
                        }
                        .into_view()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <CommentRow
                                        entry=entry
                                        post_id=post_id
                                        comments=comments
                                        drafts=drafts
                                        open_reply=open_reply
                                    />
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// A single rendered comment with indentation and an optional reply box.
#[component]
fn CommentRow(
    entry: ThreadEntry,
    post_id: i64,
    comments: RwSignal<Vec<Comment>>,
    drafts: RwSignal<HashMap<i64, String>>,
    open_reply: RwSignal<Option<i64>>,
) -> impl IntoView {
    let session = use_session();
    let comment_id = entry.comment.id;
    // Indent by clamped depth; deeper replies sit flush at the max level
    let indent_class = match entry.depth {
        0 => "",
        1 => "ml-8 border-l-2 border-gray-200 pl-4",
        _ => "ml-16 border-l-2 border-gray-200 pl-4",
    };

    let author = entry.comment.user_name.clone();
    let content = entry.comment.content.clone();
    let when = crate::components::format_timestamp(&entry.comment.created_at);

    let toggle_reply = move |_| {
        open_reply.update(|open| {
            *open = if *open == Some(comment_id) {
                None
            } else {
                Some(comment_id)
            };
        });
    };

    view! {
        <div class=format!("py-3 {}", indent_class)>
            <div class="flex items-center space-x-2 text-sm">
                <span class="font-medium text-gray-900">{author}</span>
                <span class="text-gray-400">{when}</span>
            </div>
            <p class="mt-1 text-gray-700 whitespace-pre-wrap">{content}</p>

            {move || {
                if session.get().is_authenticated() {
                    view! {
                        <button
                            on:click=toggle_reply
                            class="mt-1 text-xs text-indigo-600 hover:underline"
                        >
                            {move || {
                                if open_reply.get() == Some(comment_id) { "Cancel" } else { "Reply" }
                            }}
                        </button>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {move || {
                if open_reply.get() == Some(comment_id) {
                    view! {
                        <ReplyBox
                            post_id=post_id
                            parent_id=comment_id
                            comments=comments
                            drafts=drafts
                            open_reply=open_reply
                        />
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Reply composer for a specific parent comment, backed by the shared
/// per-comment draft map.
#[component]
fn ReplyBox(
    post_id: i64,
    parent_id: i64,
    comments: RwSignal<Vec<Comment>>,
    drafts: RwSignal<HashMap<i64, String>>,
    open_reply: RwSignal<Option<i64>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let (submitting, set_submitting) = create_signal(false);

    let draft_value = move || drafts.get().get(&parent_id).cloned().unwrap_or_default();

    let submit = move |_| {
        let content = draft_value();
        if content.trim().is_empty() {
            return;
        }
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }

        set_submitting.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::blog::post_comment(&current, post_id, Some(parent_id), &content).await {
                Ok(created) => {
                    comments.update(|tree| {
                        if !insert_reply(tree, parent_id, created.clone()) {
                            // Parent vanished locally; append at top level rather than drop it
                            tree.push(created);
                        }
                    });
                    drafts.update(|d| {
                        d.remove(&parent_id);
                    });
                    open_reply.set(None);
                }
                Err(e) => {
                    // Draft stays populated so nothing is lost
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="mt-2 flex flex-col space-y-2">
            <textarea
                rows="2"
                placeholder="Write a reply..."
                prop:value=draft_value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    drafts.update(|d| {
                        d.insert(parent_id, value);
                    });
                }
                class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm
                       focus:border-indigo-500 focus:outline-none"
            />
            <div>
                <button
                    on:click=submit
                    disabled=move || submitting.get()
                    class="px-3 py-1.5 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                           text-white text-sm rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Posting..." } else { "Post reply" }}
                </button>
            </div>
        </div>
    }
}

/// Top-level composer; also reused as the "no parent" case.
#[component]
fn Composer(
    post_id: i64,
    parent_id: Option<i64>,
    draft: RwSignal<String>,
    comments: RwSignal<Vec<Comment>>,
    open_reply: RwSignal<Option<i64>>,
    placeholder: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |_| {
        let content = draft.get();
        if content.trim().is_empty() {
            return;
        }
        let current = session.get_untracked();
        if !current.is_authenticated() {
            return;
        }

        set_submitting.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::blog::post_comment(&current, post_id, parent_id, &content).await {
                Ok(created) => {
                    comments.update(|tree| match parent_id {
                        Some(pid) => {
                            if !insert_reply(tree, pid, created.clone()) {
                                tree.push(created);
                            }
                        }
                        None => tree.push(created),
                    });
                    draft.set(String::new());
                    open_reply.set(None);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex flex-col space-y-2">
            <textarea
                rows="3"
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm
                       focus:border-indigo-500 focus:outline-none"
            />
            <div>
                <button
                    on:click=submit
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                           text-white text-sm rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Posting..." } else { "Post comment" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, replies: Vec<Comment>) -> Comment {
        Comment {
            id,
            content: format!("comment {}", id),
            user_name: "Ada".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            parent_id: None,
            replies,
        }
    }

    #[test]
    fn test_flatten_preserves_server_order() {
        let tree = vec![
            comment(1, vec![comment(2, vec![]), comment(3, vec![])]),
            comment(4, vec![]),
        ];
        let entries = flatten_thread(&tree);
        let ids: Vec<i64> = entries.iter().map(|e| e.comment.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[1].depth, 1);
        assert_eq!(entries[3].depth, 0);
    }

    #[test]
    fn test_flatten_clamps_depth_at_third_level() {
        let tree = vec![comment(
            1,
            vec![comment(2, vec![comment(3, vec![comment(4, vec![comment(5, vec![])])])])],
        )];
        let depths: Vec<usize> = flatten_thread(&tree).iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_insert_reply_under_nested_parent() {
        let mut tree = vec![comment(1, vec![comment(2, vec![])])];
        let reply = comment(9, vec![]);
        assert!(insert_reply(&mut tree, 2, reply));
        assert_eq!(tree[0].replies[0].replies[0].id, 9);
        // Order within siblings is append-only
        assert!(insert_reply(&mut tree, 2, comment(10, vec![])));
        let sibling_ids: Vec<i64> = tree[0].replies[0].replies.iter().map(|c| c.id).collect();
        assert_eq!(sibling_ids, vec![9, 10]);
    }

    #[test]
    fn test_insert_reply_missing_parent() {
        let mut tree = vec![comment(1, vec![])];
        assert!(!insert_reply(&mut tree, 42, comment(9, vec![])));
        assert_eq!(comment_count(&tree), 1);
    }

    #[test]
    fn test_comment_count_includes_replies() {
        let tree = vec![
            comment(1, vec![comment(2, vec![comment(3, vec![])])]),
            comment(4, vec![]),
        ];
        assert_eq!(comment_count(&tree), 4);
    }
}
