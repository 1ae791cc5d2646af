use leptos::prelude::*;

use super::common::{Emphasize, GetStartedButton};
use crate::motion::FadeIn;

#[component]
pub fn AddWidgetSection() -> impl IntoView {
    view! {
        <section class="add-widget container">
            <FadeIn>
                <h2 class="add-widget-title">
                    "Add "
                    <Emphasize>"review"</Emphasize>
                    " widget in your app right now!"
                </h2>
            </FadeIn>
            <FadeIn delay=2 class="add-widget-cta">
                <GetStartedButton />
            </FadeIn>
        </section>
    }
}
