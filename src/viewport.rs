//! Viewport signals for scroll- and visibility-driven animation.
//!
//! Components never read the viewport ambiently: visibility and scroll
//! progress arrive as explicit signals that callers can substitute, so the
//! animation logic stays testable without a real browser.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Tracks whether `node` is currently inside the viewport.
///
/// The signal follows the element in both directions: it flips back to
/// `false` when the element scrolls out again. `root_margin` uses the
/// CSS margin syntax accepted by `IntersectionObserver`.
pub fn watch_visibility(node: NodeRef<Div>, root_margin: &'static str) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    node.on_load(move |el: web_sys::HtmlDivElement| {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                // The last entry carries the most recent intersection state.
                if let Some(entry) = entries.iter().last() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    set_visible.set(entry.is_intersecting());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&el);
        }
        callback.forget();
    });

    visible
}

/// Overall page scroll progress in `[0, 1]`.
///
/// Zero when the page cannot scroll at all.
pub fn scroll_progress() -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    if let Some(window) = web_sys::window() {
        let win = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            set_progress.set(current_progress(&win));
        });
        let _ = window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    progress
}

fn current_progress(window: &web_sys::Window) -> f64 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scrollable = doc_height - viewport;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let y = window.scroll_y().unwrap_or(0.0);
    (y / scrollable).clamp(0.0, 1.0)
}

/// Piecewise-linear interpolation over sorted `(progress, value)` breakpoints.
///
/// Progress outside the breakpoint range clamps to the end values.
pub fn interp(progress: f64, points: &[(f64, f64)]) -> f64 {
    let Some(&(first_x, first_y)) = points.first() else {
        return 0.0;
    };
    if progress <= first_x {
        return first_y;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if progress <= x1 {
            if x1 == x0 {
                return y1;
            }
            let t = (progress - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    points[points.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp_hits_breakpoints_exactly() {
        let points = [(0.0, 0.0), (0.4, 500.0), (1.0, 0.0)];
        assert_eq!(interp(0.0, &points), 0.0);
        assert_eq!(interp(0.4, &points), 500.0);
        assert_eq!(interp(1.0, &points), 0.0);
    }

    #[test]
    fn interp_is_linear_between_breakpoints() {
        let points = [(0.0, 0.0), (0.4, 500.0), (1.0, 0.0)];
        assert_eq!(interp(0.2, &points), 250.0);
        // 0.3/0.6 is not exact in binary, so compare with a tolerance.
        assert!((interp(0.7, &points) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn interp_clamps_outside_range() {
        let points = [(0.0, 0.0), (0.5, 0.0), (1.0, -200.0)];
        assert_eq!(interp(-1.0, &points), 0.0);
        assert_eq!(interp(2.0, &points), -200.0);
    }

    #[test]
    fn interp_handles_degenerate_inputs() {
        assert_eq!(interp(0.5, &[]), 0.0);
        assert_eq!(interp(0.5, &[(0.0, 7.0)]), 7.0);
    }
}
