//! Home Page
//!
//! Marketing landing page.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-20">
            // Hero
            <section class="text-center pt-16 pb-8">
                <h1 class="text-5xl font-bold tracking-tight">
                    "Put your busywork on " <span class="text-indigo-600">"autopilot"</span>
                </h1>
                <p class="mt-6 text-lg text-gray-600 max-w-2xl mx-auto">
                    "FlowForge connects your tools, routes your documents and keeps your team
                     moving — no code, no spreadsheets, no copy-paste."
                </p>
                <div class="mt-8 flex items-center justify-center space-x-4">
                    <A
                        href="/signup"
                        class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "Start for free"
                    </A>
                    <A
                        href="/solutions"
                        class="px-6 py-3 bg-gray-100 hover:bg-gray-200 rounded-lg font-medium transition-colors"
                    >
                        "See how it works"
                    </A>
                </div>
            </section>

            // Feature grid
            <section class="grid md:grid-cols-3 gap-8">
                <FeatureCard
                    icon="📄"
                    title="Document intelligence"
                    description="Upload PDFs and let FlowForge extract totals, dates and line items
                                 automatically — with every value traceable back to the page."
                />
                <FeatureCard
                    icon="🔀"
                    title="Visual workflows"
                    description="Chain triggers and actions across the tools you already use.
                                 A change in one system ripples everywhere it should."
                />
                <FeatureCard
                    icon="👥"
                    title="Built for teams"
                    description="Shared workspaces, role-based access and an audit trail for
                                 every automated step."
                />
            </section>

            // Social proof
            <section class="bg-gray-50 rounded-2xl p-10 text-center">
                <p class="text-xl text-gray-700 italic max-w-3xl mx-auto">
                    "\"We cut invoice processing from two days to twenty minutes.
                     The OCR overlay means our accountants actually trust the numbers.\""
                </p>
                <p class="mt-4 text-sm text-gray-500">"— Operations lead, mid-market logistics firm"</p>
            </section>

            // Bottom CTA
            <section class="text-center pb-8">
                <h2 class="text-3xl font-bold">"Ready to forge your first flow?"</h2>
                <A
                    href="/signup"
                    class="mt-6 inline-block px-8 py-3 bg-indigo-600 hover:bg-indigo-700
                           text-white rounded-lg font-medium transition-colors"
                >
                    "Create your account"
                </A>
            </section>
        </div>
    }
}

/// Single feature highlight card
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 rounded-xl p-6 hover:shadow-md transition-shadow">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{description}</p>
        </div>
    }
}
