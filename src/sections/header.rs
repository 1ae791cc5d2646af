use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{NAV_LINKS, SITE_NAME};
use crate::viewport::watch_visibility;

/// The two stable visual states of the navigation bar. No intermediate
/// state is persisted; CSS transitions animate between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    Full,
    Compact,
}

impl HeaderMode {
    /// Pure function of current sentinel visibility, re-evaluated
    /// continuously: scrolled past the sentinel means compact.
    pub fn from_sentinel(sentinel_visible: bool) -> Self {
        if sentinel_visible {
            Self::Full
        } else {
            Self::Compact
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Self::Full => "width:100%;border-radius:0;margin:0;padding:20px;",
            Self::Compact => "width:fit-content;border-radius:999px;margin:20px;padding:5px 16px;",
        }
    }
}

/// Site navigation bar that collapses to a pill once a sentinel region near
/// the top of the page scrolls out of view (observed with a 100px top
/// margin), and expands again when it scrolls back in.
#[component]
pub fn Header(#[prop(optional, into)] sentinel_visible: Option<Signal<bool>>) -> impl IntoView {
    let sentinel: NodeRef<Div> = NodeRef::new();
    let in_view = sentinel_visible
        .unwrap_or_else(|| watch_visibility(sentinel, "100px 0px 0px 0px").into());
    let mode = Signal::derive(move || HeaderMode::from_sentinel(in_view.get()));

    let (menu_open, set_menu_open) = signal(false);
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="header-sentinel" node_ref=sentinel aria-hidden="true"></div>
        <header class="header">
            <a href="/" class="header-brand">
                <img src="assets/images/review-app-logo.png" alt="logo" class="header-logo" />
                <span class="header-title">{SITE_NAME}</span>
            </a>

            <nav class="header-nav">
                <div class="header-pill" style=move || mode.get().style()>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a
                                    href=href
                                    class="header-link"
                                    class:active=move || pathname.get() == href
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>

            <div class="header-actions">
                <a href="/login" class="btn btn-ghost">"Log in"</a>
                <a href="/signup" class="btn btn-primary">"Get Started"</a>
            </div>

            // Smaller devices: hamburger + drawer
            <button
                class="header-menu-toggle"
                aria-label="menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <MenuIcon open=menu_open />
            </button>
            <div class="header-drawer" class:open=move || menu_open.get()>
                <a href="/signup" class="btn btn-outline">"Sign Up"</a>
                <a href="/login" class="btn btn-outline">"Login"</a>
                <ul class="drawer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <li>
                                    <a href=href on:click=move |_| set_menu_open.set(false)>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </header>
    }
}

/// Three-bar hamburger that folds into a cross while the drawer is open.
#[component]
fn MenuIcon(open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <span class="menu-icon" class:open=move || open.get()>
            <span class="menu-bar menu-bar-top"></span>
            <span class="menu-bar menu-bar-mid"></span>
            <span class="menu-bar menu-bar-bottom"></span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_a_pure_function_of_visibility() {
        assert_eq!(HeaderMode::from_sentinel(true), HeaderMode::Full);
        assert_eq!(HeaderMode::from_sentinel(false), HeaderMode::Compact);
    }

    #[test]
    fn toggling_visibility_returns_to_full() {
        // off then on must deterministically restore the full state
        let states: Vec<_> = [true, false, true]
            .into_iter()
            .map(HeaderMode::from_sentinel)
            .collect();
        assert_eq!(
            states,
            [HeaderMode::Full, HeaderMode::Compact, HeaderMode::Full]
        );
    }

    #[test]
    fn compact_state_is_a_pill() {
        assert!(HeaderMode::Compact.style().contains("border-radius:999px"));
        assert!(HeaderMode::Full.style().contains("width:100%"));
    }
}
