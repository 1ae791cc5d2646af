use leptos::prelude::*;

use super::common::{Emphasize, Section};
use crate::content::{FEATURES, Feature};
use crate::motion::FadeIn;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <Section title="Features">
            <FadeIn delay=2>
                <p class="section-lead">
                    "Make the "
                    <Emphasize>"Review"</Emphasize>
                    " taking process easier"
                </p>
            </FadeIn>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let delay = index as u32;
                        let feature = *feature;
                        view! {
                            <FadeIn delay=delay class="feature-slot">
                                <FeatureCard feature=feature />
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <FeatureIcon icon=feature.icon />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[component]
fn FeatureIcon(icon: &'static str) -> impl IntoView {
    let path = match icon {
        "workflow" => "M4 4h6v6H4zM14 14h6v6h-6zM7 10v4a3 3 0 0 0 3 3h4",
        "user-check" => "M16 11l2 2 4-4M8 7a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM2 21v-1a6 6 0 0 1 12 0v1",
        "wrench" => "M14.7 6.3a5 5 0 0 0-6.6 6.6L3 18l3 3 5.1-5.1a5 5 0 0 0 6.6-6.6L14 13l-3-3z",
        "search-check" => "M8 11l2 2 4-4M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16zM21 21l-4.35-4.35",
        "area-chart" => "M3 3v18h18M7 14l4-4 3 3 5-6v9H7z",
        "scaling" => "M21 3L9 15M21 3v6M21 3h-6M3 21h6a12 12 0 0 1-6-6v6z",
        "monitor" => "M3 4h18v12H3zM8 21h8M12 16v5",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    };
    view! {
        <svg
            class="icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
