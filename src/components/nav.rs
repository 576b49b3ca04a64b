//! Navigation Component
//!
//! Header navigation bar with logo, marketing links and session controls.

use leptos::*;
use leptos_router::*;

use crate::state::{use_session, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.set(Session::clear());
        navigate("/", Default::default());
    };

    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"⚙️"</span>
                        <span class="text-xl font-bold text-gray-900">"FlowForge"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/pricing" label="Pricing" />
                        <NavLink href="/solutions" label="Solutions" />
                        <NavLink href="/blog" label="Blog" />
                        {move || {
                            if session.get().is_authenticated() {
                                view! {
                                    <NavLink href="/dashboard" label="Dashboard" />
                                    <NavLink href="/documents" label="Documents" />
                                }
                                .into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>

                    // Session controls
                    <div class="flex items-center space-x-2">
                        {move || {
                            let current = session.get();
                            if let Some(user) = current.user {
                                let display = if user.name.is_empty() {
                                    user.email.clone()
                                } else {
                                    user.name.clone()
                                };
                                view! {
                                    <span class="text-sm text-gray-600">{display}</span>
                                    <button
                                        on:click=logout.clone()
                                        class="px-3 py-1.5 text-sm text-gray-600 hover:text-gray-900
                                               hover:bg-gray-100 rounded-lg transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <A
                                        href="/login"
                                        class="px-3 py-1.5 text-sm text-gray-600 hover:text-gray-900
                                               hover:bg-gray-100 rounded-lg transition-colors"
                                    >
                                        "Log in"
                                    </A>
                                    <A
                                        href="/signup"
                                        class="px-4 py-1.5 text-sm bg-indigo-600 hover:bg-indigo-700
                                               text-white rounded-lg font-medium transition-colors"
                                    >
                                        "Sign up"
                                    </A>
                                }
                                .into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
