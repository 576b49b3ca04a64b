//! App Root Component
//!
//! Main application component with routing, guards and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    Blog, BlogEditor, BlogPostPage, Dashboard, DocumentViewer, Documents, Home, Login, Pricing,
    Signup, Solutions,
};
use crate::state::{provide_global_state, provide_session, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the persisted session to all components
    provide_global_state();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-white text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/pricing" view=Pricing />
                        <Route path="/solutions" view=Solutions />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/blog" view=Blog />
                        <Route path="/blog/new" view=|| view! {
                            <RequireAdmin>
                                <BlogEditor />
                            </RequireAdmin>
                        } />
                        <Route path="/blog/:id" view=BlogPostPage />
                        <Route path="/blog/:id/edit" view=|| view! {
                            <RequireAdmin>
                                <BlogEditor />
                            </RequireAdmin>
                        } />
                        <Route path="/dashboard" view=|| view! {
                            <RequireAuth>
                                <Dashboard />
                            </RequireAuth>
                        } />
                        <Route path="/documents" view=|| view! {
                            <RequireAuth>
                                <Documents />
                            </RequireAuth>
                        } />
                        <Route path="/documents/:id" view=|| view! {
                            <RequireAuth>
                                <DocumentViewer />
                            </RequireAuth>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Gate for signed-in users; anonymous visitors are sent to the login page.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.get().is_authenticated() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Gate for superusers; everyone else lands on the dashboard (or login).
#[component]
fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            let current = session.get();
            if current.is_admin() {
                children().into_view()
            } else if current.is_authenticated() {
                view! { <Redirect path="/dashboard" /> }.into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-50 border-t border-gray-200 py-8 px-4 mt-12">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500">
                <span>"© 2026 FlowForge. Automate everything."</span>
                <div class="flex items-center space-x-4">
                    <a href="/pricing" class="hover:text-gray-900">"Pricing"</a>
                    <a href="/solutions" class="hover:text-gray-900">"Solutions"</a>
                    <a href="/blog" class="hover:text-gray-900">"Blog"</a>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
