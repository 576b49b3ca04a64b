//! Signup Page
//!
//! Registration form; on success the account is created and the session is
//! established by delegating to the login flow.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::{use_session, Session};

/// Validate the signup form before any network call.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Name is required");
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Some("Please enter a valid email");
    }
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_session();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let handle_signup = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let n = name.get();
        let e = email.get();
        let p = password.get();
        let c = confirm.get();

        if let Some(msg) = validate_signup(&n, &e, &p, &c) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::auth::register(n.trim(), e.trim(), &p).await {
                Ok((token, user)) => {
                    session.set(Session::store(&token, &user));
                }
                Err(err) => {
                    set_error.set(Some(err));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        {move || {
            session.get().is_authenticated().then(|| view! { <Redirect path="/dashboard" /> })
        }}

        <div class="flex flex-col items-center justify-center min-h-[70vh]">
            <h1 class="text-2xl font-bold mb-1">"Create your account"</h1>
            <p class="text-gray-500 text-sm mb-8">"Start automating in minutes"</p>

            <form on:submit=handle_signup class="flex flex-col gap-3 w-full max-w-[340px]">
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
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <input
                    type="email"
                    placeholder="Work email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <input
                    type="password"
                    placeholder="Password (min 8 characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full px-4 py-2.5 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>

            <p class="mt-6 text-sm text-gray-500">
                "Already have an account? "
                <A href="/login" class="text-indigo-600 hover:underline">"Sign in"</A>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert_eq!(
            validate_signup("", "a@b.c", "longenough", "longenough"),
            Some("Name is required")
        );
    }

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(
            validate_signup("Ada", "a@b.c", "short", "short"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        assert_eq!(
            validate_signup("Ada", "a@b.c", "longenough", "different"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_signup("Ada", "a@b.c", "longenough", "longenough"), None);
    }
}
