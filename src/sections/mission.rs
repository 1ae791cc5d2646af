use leptos::prelude::*;

use super::common::{Emphasize, Section};
use crate::motion::FadeIn;

#[component]
pub fn AboutHero() -> impl IntoView {
    view! {
        <div class="hero hero-about container">
            <FadeIn>
                <h1 class="hero-title">"About Us"</h1>
            </FadeIn>
            <FadeIn delay=2>
                <p class="hero-tagline">
                    "Welcome to "
                    <Emphasize>"Review App"</Emphasize>
                    ", your solution for hassle-free review management on your website. "
                    "We're excited to tell you a bit more about who we are and why we "
                    "created this platform."
                </p>
            </FadeIn>
        </div>
    }
}

#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <Section title="Our Story">
            <FadeIn delay=2>
                <p class="section-lead">
                    "At "
                    <Emphasize>"Review App"</Emphasize>
                    ", we're on a mission to revolutionize the way you manage reviews "
                    "on your website. We started this journey in 2023 with a passion "
                    "for user feedback and a commitment to open source."
                </p>
            </FadeIn>
        </Section>
    }
}
