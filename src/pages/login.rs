//! Login Page
//!
//! Email/password sign-in form with client-side validation.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::{use_session, Session};

/// Validate the login form before any network call.
/// Returns the message to display inline, or `None` when submission may proceed.
pub fn validate_login(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        return Some("Email is required");
    }
    if !email.contains('@') {
        return Some("Please enter a valid email");
    }
    if password.is_empty() {
        return Some("Password is required");
    }
    None
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let handle_login = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let e = email.get();
        let p = password.get();

        // Client-side validation blocks submission; no request is issued
        if let Some(msg) = validate_login(&e, &p) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::auth::login(e.trim(), &p).await {
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
        // Already signed-in visitors go straight to the dashboard
        {move || {
            session.get().is_authenticated().then(|| view! { <Redirect path="/dashboard" /> })
        }}

        <div class="flex flex-col items-center justify-center min-h-[70vh]">
            <h1 class="text-2xl font-bold mb-1">"Welcome back"</h1>
            <p class="text-gray-500 text-sm mb-8">"Sign in to your FlowForge account"</p>

            <form on:submit=handle_login class="flex flex-col gap-3 w-full max-w-[340px]">
                {move || {
                    error.get().map(|err| view! {
                        <div class="px-3 py-2.5 bg-red-50 border border-red-200 rounded-lg
                                    text-red-600 text-sm">
                            {err}
                        </div>
                    })
                }}

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-4 py-2.5
                           focus:border-indigo-500 focus:outline-none"
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full px-4 py-2.5 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="mt-6 text-sm text-gray-500">
                "New to FlowForge? "
                <A href="/signup" class="text-indigo-600 hover:underline">"Create an account"</A>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_blocks_submission() {
        assert_eq!(
            validate_login("ada@example.com", ""),
            Some("Password is required")
        );
    }

    #[test]
    fn test_empty_email_blocks_submission() {
        assert_eq!(validate_login("", "hunter22"), Some("Email is required"));
        assert_eq!(validate_login("   ", "hunter22"), Some("Email is required"));
    }

    #[test]
    fn test_malformed_email_blocked() {
        assert_eq!(
            validate_login("not-an-email", "hunter22"),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert_eq!(validate_login("ada@example.com", "hunter22"), None);
    }
}
