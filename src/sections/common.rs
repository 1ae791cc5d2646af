use leptos::prelude::*;

use crate::motion::FadeIn;

/// Section shell: a reveal-wrapped title badge followed by the section body.
#[component]
pub fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section container">
            <FadeIn>
                <SectionHeadBadge title=title />
            </FadeIn>
            {children()}
        </section>
    }
}

#[component]
fn SectionHeadBadge(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-badge-row">
            <div class="section-badge">
                <h2 class="section-badge-title">{title}</h2>
            </div>
        </div>
    }
}

/// Brand-colored emphasis inside running copy.
#[component]
pub fn Emphasize(children: Children) -> impl IntoView {
    view! { <span class="emphasize">{children()}</span> }
}

#[component]
pub fn GetStartedButton() -> impl IntoView {
    view! {
        <a href="/signup" class="btn btn-get-started">
            "Get Started"
            <span class="btn-arrow" aria-hidden="true">"→"</span>
        </a>
    }
}
