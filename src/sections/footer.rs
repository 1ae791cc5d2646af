use leptos::prelude::*;

use crate::content::{COPYRIGHT, FOOTER_LINKS, SOCIALS};
use crate::motion::FadeIn;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-socials">
                {SOCIALS
                    .iter()
                    .enumerate()
                    .map(|(index, social)| {
                        let delay = index as u32;
                        view! {
                            <FadeIn delay=delay>
                                <a
                                    href=social.href
                                    target="_blank"
                                    class="footer-social"
                                    aria-label=social.name
                                >
                                    <SocialIcon name=social.name />
                                </a>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer-links">
                {FOOTER_LINKS
                    .iter()
                    .enumerate()
                    .map(|(index, link)| {
                        let delay = index as u32;
                        view! {
                            <FadeIn delay=delay>
                                <a href=link.href class="footer-link">{link.label}</a>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="footer-copyright">{COPYRIGHT}</p>
        </footer>
    }
}

#[component]
fn SocialIcon(name: &'static str) -> impl IntoView {
    let path = match name {
        "Twitter" => "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
        "Instagram" => "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm5 6a4 4 0 1 0 0 8 4 4 0 0 0 0-8zm5.5-1.5h.01",
        "LinkedIn" => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V9h4v1.5A6 6 0 0 1 16 8zM2 9h4v12H2zM4 3a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
        "GitHub" => "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
        _ => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
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
