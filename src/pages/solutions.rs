//! Solutions Page
//!
//! Marketing page describing use cases by team.

use leptos::*;
use leptos_router::*;

/// Solutions page component
#[component]
pub fn Solutions() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <div class="text-center">
                <h1 class="text-4xl font-bold">"One platform, every team"</h1>
                <p class="mt-4 text-gray-600 max-w-2xl mx-auto">
                    "From finance back-offices drowning in invoices to ops teams juggling
                     hand-offs, FlowForge adapts to how your team already works."
                </p>
            </div>

            <div class="space-y-8 max-w-4xl mx-auto">
                <SolutionRow
                    icon="🧾"
                    team="Finance"
                    title="Invoices that file themselves"
                    description="Drop supplier PDFs into FlowForge and get structured totals, tax
                                 lines and due dates pushed straight into your ledger. The OCR
                                 overlay shows exactly where each number came from, page by page."
                />
                <SolutionRow
                    icon="📦"
                    team="Operations"
                    title="Hand-offs without the handholding"
                    description="Route approvals, escalate stalled steps and keep a running audit
                                 trail. When a shipment document lands, the right people see the
                                 right fields — nothing more."
                />
                <SolutionRow
                    icon="⚖️"
                    team="Legal"
                    title="Contracts under control"
                    description="Extract parties, renewal dates and obligations from signed PDFs.
                                 Get reminded before auto-renewals bite."
                />
            </div>

            <div class="text-center">
                <A
                    href="/signup"
                    class="inline-block px-8 py-3 bg-indigo-600 hover:bg-indigo-700
                           text-white rounded-lg font-medium transition-colors"
                >
                    "Try it with your own documents"
                </A>
            </div>
        </div>
    }
}

/// One use-case row
#[component]
fn SolutionRow(
    icon: &'static str,
    team: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-5 bg-white border border-gray-200 rounded-xl p-6">
            <div class="text-4xl">{icon}</div>
            <div>
                <span class="text-xs uppercase tracking-wide text-indigo-600 font-semibold">{team}</span>
                <h3 class="text-lg font-semibold mt-1">{title}</h3>
                <p class="text-gray-600 text-sm mt-2 leading-relaxed">{description}</p>
            </div>
        </div>
    }
}
