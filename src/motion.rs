//! Enter-animation wrappers.
//!
//! Each wrapped element carries a tiny state machine: it starts `Unseen`
//! (offset and transparent) and advances to `Revealed` the first time its
//! visibility signal reports true. The transition never reverses, so
//! scrolling an element back out of view leaves it in place.

use leptos::html::Div;
use leptos::prelude::*;

use crate::viewport::watch_visibility;

/// How far a hidden element sits from its natural position, in px.
pub const REVEAL_DISTANCE_PX: f64 = 100.0;
/// Reveal transition duration, in seconds.
pub const REVEAL_DURATION_S: f64 = 0.5;
/// Per-index stagger applied to the transition delay, in seconds.
pub const REVEAL_STAGGER_S: f64 = 0.05;

/// Fire-once reveal state. There is no transition back to `Unseen`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unseen,
    Revealed,
}

impl RevealPhase {
    /// Advances on first visibility; later visibility changes are ignored.
    pub fn advance(&mut self, visible: bool) {
        if visible {
            *self = Self::Revealed;
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Slide direction for [`InFromXAxis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    const fn offset_x(self) -> f64 {
        match self {
            Self::Left => -REVEAL_DISTANCE_PX,
            Self::Right => REVEAL_DISTANCE_PX,
        }
    }
}

/// Inline style for a reveal-wrapped element.
///
/// Hidden: offset by `(offset_x, offset_y)` and fully transparent.
/// Revealed: natural position and opaque, transitioning over
/// [`REVEAL_DURATION_S`] with a delay of [`REVEAL_STAGGER_S`] × `delay_index`.
pub fn reveal_style(revealed: bool, offset_x: f64, offset_y: f64, delay_index: u32) -> String {
    if revealed {
        let delay = REVEAL_STAGGER_S * f64::from(delay_index);
        format!(
            "opacity:1;transform:translate(0px,0px);\
             transition:opacity {REVEAL_DURATION_S}s ease-out {delay:.2}s,\
             transform {REVEAL_DURATION_S}s ease-out {delay:.2}s;"
        )
    } else {
        format!("opacity:0;transform:translate({offset_x}px,{offset_y}px);")
    }
}

/// Reveals its child by fading in from a vertical offset the first time it
/// enters the viewport.
///
/// `visibility` overrides the built-in intersection observer; tests and
/// scripted contexts pass their own signal.
#[component]
pub fn FadeIn(
    children: Children,
    #[prop(optional)] delay: u32,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] visibility: Option<Signal<bool>>,
) -> impl IntoView {
    let node: NodeRef<Div> = NodeRef::new();
    let visible = visibility.unwrap_or_else(|| watch_visibility(node, "0px").into());

    let phase = RwSignal::new(RevealPhase::Unseen);
    Effect::new(move || {
        let seen = visible.get();
        phase.update(|p| p.advance(seen));
    });

    let style = move || reveal_style(phase.get().is_revealed(), 0.0, REVEAL_DISTANCE_PX, delay);
    view! {
        <div node_ref=node class=class style=style>
            {children()}
        </div>
    }
}

/// Reveals its child by sliding in horizontally from the given direction the
/// first time it enters the viewport.
#[component]
pub fn InFromXAxis(
    children: Children,
    direction: Direction,
    #[prop(optional)] delay: u32,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] visibility: Option<Signal<bool>>,
) -> impl IntoView {
    let node: NodeRef<Div> = NodeRef::new();
    let visible = visibility.unwrap_or_else(|| watch_visibility(node, "0px").into());

    let phase = RwSignal::new(RevealPhase::Unseen);
    Effect::new(move || {
        let seen = visible.get();
        phase.update(|p| p.advance(seen));
    });

    let style =
        move || reveal_style(phase.get().is_revealed(), direction.offset_x(), 0.0, delay);
    view! {
        <div node_ref=node class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_phase_fires_once_and_never_reverses() {
        let mut phase = RevealPhase::default();
        assert!(!phase.is_revealed());

        phase.advance(false);
        assert!(!phase.is_revealed());

        phase.advance(true);
        assert!(phase.is_revealed());

        // Scrolling back out of view must not reset the element.
        phase.advance(false);
        assert!(phase.is_revealed());
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = reveal_style(false, 0.0, REVEAL_DISTANCE_PX, 3);
        assert!(style.contains("opacity:0"));
        assert!(style.contains("translate(0px,100px)"));
        assert!(!style.contains("transition"));
    }

    #[test]
    fn revealed_style_is_natural_and_opaque() {
        let style = reveal_style(true, 0.0, REVEAL_DISTANCE_PX, 0);
        assert!(style.contains("opacity:1"));
        assert!(style.contains("translate(0px,0px)"));
        assert!(style.contains("0.5s"));
    }

    #[test]
    fn delay_is_proportional_to_index() {
        let style = reveal_style(true, 0.0, REVEAL_DISTANCE_PX, 3);
        assert!(style.contains("0.15s"));
    }

    #[test]
    fn directions_offset_opposite_ways() {
        assert_eq!(Direction::Left.offset_x(), -100.0);
        assert_eq!(Direction::Right.offset_x(), 100.0);

        let left = reveal_style(false, Direction::Left.offset_x(), 0.0, 0);
        let right = reveal_style(false, Direction::Right.offset_x(), 0.0, 0);
        assert!(left.contains("translate(-100px,0px)"));
        assert!(right.contains("translate(100px,0px)"));
    }
}
