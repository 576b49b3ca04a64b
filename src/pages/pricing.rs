//! Pricing Page
//!
//! Marketing page with plan tiers.

use leptos::*;
use leptos_router::*;

/// Pricing page component
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <div class="text-center">
                <h1 class="text-4xl font-bold">"Simple, usage-based pricing"</h1>
                <p class="mt-4 text-gray-600">"Every plan starts with a 14-day free trial. No card required."</p>
            </div>

            <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                <PlanCard
                    name="Starter"
                    price="$0"
                    period="forever"
                    highlight=false
                    features=vec![
                        "3 active workflows",
                        "50 document pages / month",
                        "Community support",
                    ]
                />
                <PlanCard
                    name="Team"
                    price="$29"
                    period="per seat / month"
                    highlight=true
                    features=vec![
                        "Unlimited workflows",
                        "2,000 document pages / month",
                        "OCR data extraction",
                        "Priority support",
                    ]
                />
                <PlanCard
                    name="Enterprise"
                    price="Custom"
                    period="annual billing"
                    highlight=false
                    features=vec![
                        "Unlimited everything",
                        "SSO and audit logs",
                        "Dedicated success manager",
                        "Custom retention policies",
                    ]
                />
            </div>

            <p class="text-center text-sm text-gray-500">
                "Questions about volume pricing? "
                <a href="mailto:sales@flowforge.dev" class="text-indigo-600 hover:underline">
                    "Talk to sales"
                </a>
            </p>
        </div>
    }
}

/// One plan tier
#[component]
fn PlanCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    highlight: bool,
    features: Vec<&'static str>,
) -> impl IntoView {
    let border = if highlight {
        "border-2 border-indigo-600 shadow-lg"
    } else {
        "border border-gray-200"
    };

    view! {
        <div class=format!("bg-white rounded-xl p-6 flex flex-col {}", border)>
            {highlight.then(|| view! {
                <span class="self-start text-xs bg-indigo-100 text-indigo-700 px-2 py-0.5 rounded-full mb-2">
                    "Most popular"
                </span>
            })}
            <h3 class="text-lg font-semibold">{name}</h3>
            <div class="mt-2">
                <span class="text-3xl font-bold">{price}</span>
                <span class="text-sm text-gray-500 ml-1">{period}</span>
            </div>
            <ul class="mt-4 space-y-2 flex-1">
                {features.into_iter().map(|f| view! {
                    <li class="flex items-center text-sm text-gray-600">
                        <span class="text-green-600 mr-2">"✓"</span>
                        {f}
                    </li>
                }).collect_view()}
            </ul>
            <A
                href="/signup"
                class="mt-6 text-center px-4 py-2 bg-indigo-600 hover:bg-indigo-700
                       text-white rounded-lg font-medium transition-colors"
            >
                "Get started"
            </A>
        </div>
    }
}
