// Home page - hero + product pitch
use leptos::prelude::*;

use crate::sections::{AddWidgetSection, FeaturesSection, Hero, WorkingSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <FeaturesSection />
        <WorkingSection />
        <AddWidgetSection />
    }
}
