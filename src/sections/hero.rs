use leptos::prelude::*;

use crate::content::SITE_NAME;
use crate::motion::FadeIn;
use super::common::{Emphasize, GetStartedButton};
use crate::viewport::{interp, scroll_progress};

// The screenshot rises and fades in over the first stretch of scrolling.
const IMAGE_Y: &[(f64, f64)] = &[(0.0, 100.0), (0.15, 0.0)];
const IMAGE_OPACITY: &[(f64, f64)] = &[(0.0, 0.0), (0.15, 1.0)];

#[component]
pub fn Hero(#[prop(optional, into)] progress: Option<Signal<f64>>) -> impl IntoView {
    let progress = progress.unwrap_or_else(|| scroll_progress().into());
    let image_style = move || {
        let p = progress.get();
        format!(
            "transform:translateY({y}px);opacity:{opacity};",
            y = interp(p, IMAGE_Y),
            opacity = interp(p, IMAGE_OPACITY),
        )
    };

    view! {
        <div class="hero container">
            <FadeIn>
                <h1 class="hero-title">{SITE_NAME}</h1>
            </FadeIn>
            <FadeIn delay=2>
                <p class="hero-tagline">
                    "Helps to gather valuable "
                    <Emphasize>"feedback"</Emphasize>
                    " and "
                    <Emphasize>"reviews"</Emphasize>
                    " from your website's users"
                </p>
            </FadeIn>
            <FadeIn delay=3 class="hero-actions">
                <GetStartedButton />
                <a href="/contact" class="btn btn-secondary">"Book Demo"</a>
            </FadeIn>
            <div class="hero-shot" style=image_style>
                <img
                    src="assets/images/review-form-dark.png"
                    alt="form edit page"
                    class="hero-shot-image"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screenshot_starts_hidden_and_settles() {
        assert_eq!(interp(0.0, IMAGE_OPACITY), 0.0);
        assert_eq!(interp(0.0, IMAGE_Y), 100.0);
        assert_eq!(interp(0.15, IMAGE_OPACITY), 1.0);
        assert_eq!(interp(0.5, IMAGE_Y), 0.0);
    }
}
