use leptos::prelude::*;

use crate::viewport::{interp, scroll_progress};

/// Horizontal drift of the blob layer over page scroll progress.
pub const DRIFT_X: &[(f64, f64)] = &[(0.0, 0.0), (0.4, 500.0), (1.0, 0.0)];
/// Vertical drift of the blob layer over page scroll progress.
pub const DRIFT_Y: &[(f64, f64)] = &[(0.0, 0.0), (0.5, 0.0), (1.0, -200.0)];

/// Decorative parallax layer: three overlapping blurred shapes whose
/// position follows page scroll progress, with a continuous looping
/// scale/opacity oscillation (CSS keyframes) layered on top.
#[component]
pub fn Background(#[prop(optional, into)] progress: Option<Signal<f64>>) -> impl IntoView {
    let progress = progress.unwrap_or_else(|| scroll_progress().into());

    let style = move || {
        let p = progress.get();
        format!(
            "transform:translate({x}px,{y}px);",
            x = interp(p, DRIFT_X),
            y = interp(p, DRIFT_Y),
        )
    };

    view! {
        <div class="background" style=style aria-hidden="true">
            <div class="background-blob blob-rose"></div>
            <div class="background-blob blob-violet"></div>
            <div class="background-blob blob-bright"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_peaks_match_the_breakpoints() {
        assert_eq!(interp(0.4, DRIFT_X), 500.0);
        assert_eq!(interp(0.5, DRIFT_Y), 0.0);
        assert_eq!(interp(1.0, DRIFT_Y), -200.0);
    }

    #[test]
    fn drift_returns_home_at_the_ends() {
        assert_eq!(interp(0.0, DRIFT_X), 0.0);
        assert_eq!(interp(1.0, DRIFT_X), 0.0);
    }
}
